//! Tool catalog and dispatch.
//!
//! Every tool is a variant of [`Tool`]; its name, schema and handler are all
//! selected by exhaustive matches on that enum.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::docs::{
    format_architecture, format_module_doc, format_module_list, format_search_results,
    DocumentRepository,
};
use crate::errors::DocsError;
use crate::types::{Category, Component};

use super::transport::ErrorCode;

/// A tool definition exposed by the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// The tools this server knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    SearchDocs,
    GetModuleDocs,
    ListModules,
    GetArchitectureInfo,
}

impl Tool {
    pub const ALL: [Tool; 4] = [
        Tool::SearchDocs,
        Tool::GetModuleDocs,
        Tool::ListModules,
        Tool::GetArchitectureInfo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tool::SearchDocs => "search_docs",
            Tool::GetModuleDocs => "get_module_docs",
            Tool::ListModules => "list_modules",
            Tool::GetArchitectureInfo => "get_architecture_info",
        }
    }

    pub fn from_name(name: &str) -> Option<Tool> {
        Tool::ALL.into_iter().find(|t| t.name() == name)
    }

    /// Name, description and JSON Schema advertised through `tools/list`.
    pub fn definition(self) -> ToolDefinition {
        let (description, input_schema) = match self {
            Tool::SearchDocs => (
                "Search the DAP SDK documentation for a text fragment.",
                json!({
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "Text to look for (case-insensitive)"
                        },
                        "category": {
                            "type": "string",
                            "enum": ["core", "crypto", "net", "cellframe", "all"],
                            "default": "all",
                            "description": "Documentation category to search"
                        }
                    },
                    "required": ["query"]
                }),
            ),
            Tool::GetModuleDocs => (
                "Fetch the documentation page of a single module.",
                json!({
                    "type": "object",
                    "properties": {
                        "module": {
                            "type": "string",
                            "description": "Module name (for example: dap_cbuf, dap_math_ops)"
                        },
                        "category": {
                            "type": "string",
                            "enum": ["core", "crypto", "net"],
                            "default": "core",
                            "description": "Category the module belongs to"
                        }
                    },
                    "required": ["module"]
                }),
            ),
            Tool::ListModules => (
                "List the documented modules.",
                json!({
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "enum": ["core", "crypto", "net", "cellframe", "all"],
                            "default": "all",
                            "description": "Category to list modules from"
                        }
                    }
                }),
            ),
            Tool::GetArchitectureInfo => (
                "Describe the architecture of the DAP SDK.",
                json!({
                    "type": "object",
                    "properties": {
                        "component": {
                            "type": "string",
                            "enum": ["dap-sdk", "cellframe-sdk", "overview"],
                            "default": "overview",
                            "description": "Architecture component"
                        }
                    }
                }),
            ),
        };

        ToolDefinition {
            name: self.name().to_string(),
            description: description.to_string(),
            input_schema,
        }
    }
}

/// Returns the list of all tool definitions exposed by this MCP server.
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    Tool::ALL.into_iter().map(Tool::definition).collect()
}

/// The only failures a tool call can report to the client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("{0}")]
    InvalidParams(String),

    #[error("unknown tool: {0}")]
    MethodNotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ToolError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ToolError::InvalidParams(_) => ErrorCode::InvalidParams,
            ToolError::MethodNotFound(_) => ErrorCode::MethodNotFound,
            ToolError::Internal(_) => ErrorCode::InternalError,
        }
    }
}

impl From<DocsError> for ToolError {
    fn from(err: DocsError) -> Self {
        match err {
            DocsError::InvalidArgument { message } => ToolError::InvalidParams(message),
            other => ToolError::Internal(other.to_string()),
        }
    }
}

/// A single content block in a tool result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolContent {
    #[serde(rename = "type")]
    pub content_type: String,
    pub text: String,
}

/// Successful `tools/call` payload: always one text block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
}

impl ToolResult {
    pub fn text(text: String) -> Self {
        Self {
            content: vec![ToolContent {
                content_type: "text".to_string(),
                text,
            }],
        }
    }

    /// Text of the first content block.
    pub fn as_text(&self) -> &str {
        self.content.first().map(|c| c.text.as_str()).unwrap_or("")
    }
}

#[derive(Debug, Default, Deserialize)]
struct SearchDocsArgs {
    query: Option<String>,
    category: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct GetModuleDocsArgs {
    module: Option<String>,
    category: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ListModulesArgs {
    category: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ArchitectureArgs {
    component: Option<String>,
}

/// Routes tool calls to the document repository.
///
/// Validation failures become `InvalidParams`, unknown names
/// `MethodNotFound`, and everything else the repository reports
/// `InternalError`.
pub struct ToolRouter {
    repo: DocumentRepository,
}

impl ToolRouter {
    pub fn new(repo: DocumentRepository) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &DocumentRepository {
        &self.repo
    }

    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        get_tool_definitions()
    }

    /// Runs the tool called `name` with the given arguments.
    pub fn call(&self, name: &str, args: Value) -> Result<ToolResult, ToolError> {
        let tool =
            Tool::from_name(name).ok_or_else(|| ToolError::MethodNotFound(name.to_string()))?;
        debug!(tool = tool.name(), "dispatching tool");

        let outcome = match tool {
            Tool::SearchDocs => self.search_docs(parse_args(tool, args)?),
            Tool::GetModuleDocs => self.get_module_docs(parse_args(tool, args)?),
            Tool::ListModules => self.list_modules(parse_args(tool, args)?),
            Tool::GetArchitectureInfo => self.get_architecture_info(parse_args(tool, args)?),
        };

        match outcome {
            Ok(text) => Ok(ToolResult::text(text)),
            Err(e) => {
                let err = ToolError::from(e);
                if let ToolError::Internal(ref message) = err {
                    warn!(tool = tool.name(), error = %message, "tool failed");
                }
                Err(err)
            }
        }
    }

    fn search_docs(&self, args: SearchDocsArgs) -> Result<String, DocsError> {
        let query = required(args.query, "query")?;
        let category = category_label(args.category, Category::All);
        let results = self.repo.search(&query, Category::parse_lenient(&category))?;
        Ok(format_search_results(&query, &results))
    }

    fn get_module_docs(&self, args: GetModuleDocsArgs) -> Result<String, DocsError> {
        let module = required(args.module, "module")?;
        let category = category_label(args.category, Category::Core);
        let doc = self.repo.get_module_doc(&module, &category)?;
        Ok(format_module_doc(&doc))
    }

    fn list_modules(&self, args: ListModulesArgs) -> Result<String, DocsError> {
        let category = category_label(args.category, Category::All);
        let modules = self.repo.list_modules(Category::parse_lenient(&category))?;
        Ok(format_module_list(&category, &modules))
    }

    fn get_architecture_info(&self, args: ArchitectureArgs) -> Result<String, DocsError> {
        let component = args
            .component
            .as_deref()
            .map(Component::parse_lenient)
            .unwrap_or(Component::Overview);
        let doc = self.repo.get_architecture_info(component)?;
        Ok(format_architecture(&doc))
    }
}

/// Deserializes tool arguments; a missing or null argument object counts as empty.
fn parse_args<T: DeserializeOwned + Default>(tool: Tool, args: Value) -> Result<T, ToolError> {
    if args.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(args).map_err(|e| {
        ToolError::InvalidParams(format!("invalid arguments for {}: {}", tool.name(), e))
    })
}

fn required(value: Option<String>, name: &str) -> Result<String, DocsError> {
    value.ok_or_else(|| DocsError::invalid_argument(format!("missing required parameter: {}", name)))
}

/// The category label as the caller spelled it, or the name of `default`.
fn category_label(value: Option<String>, default: Category) -> String {
    value.unwrap_or_else(|| default.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_names_round_trip() {
        for tool in Tool::ALL {
            assert_eq!(Tool::from_name(tool.name()), Some(tool));
        }
        assert_eq!(Tool::from_name("delete_docs"), None);
    }

    #[test]
    fn test_definitions_have_object_schemas() {
        for def in get_tool_definitions() {
            assert!(!def.description.is_empty());
            assert_eq!(def.input_schema["type"], "object", "tool {}", def.name);
        }
    }

    #[test]
    fn test_required_arguments_declared() {
        let defs = get_tool_definitions();
        let search = defs.iter().find(|d| d.name == "search_docs").unwrap();
        assert_eq!(search.input_schema["required"], json!(["query"]));
        let module = defs.iter().find(|d| d.name == "get_module_docs").unwrap();
        assert_eq!(module.input_schema["required"], json!(["module"]));
        let list = defs.iter().find(|d| d.name == "list_modules").unwrap();
        assert!(list.input_schema.get("required").is_none());
    }

    #[test]
    fn test_error_codes_of_tool_errors() {
        assert_eq!(
            ToolError::InvalidParams("x".into()).code(),
            ErrorCode::InvalidParams
        );
        assert_eq!(
            ToolError::MethodNotFound("x".into()).code(),
            ErrorCode::MethodNotFound
        );
        assert_eq!(
            ToolError::Internal("x".into()).code(),
            ErrorCode::InternalError
        );
    }

    #[test]
    fn test_category_label_keeps_caller_spelling() {
        assert_eq!(category_label(Some("bogus".into()), Category::All), "bogus");
        assert_eq!(category_label(None, Category::Core), "core");
    }

    #[test]
    fn test_docs_error_translation() {
        let err: ToolError = DocsError::invalid_argument("empty").into();
        assert_eq!(err, ToolError::InvalidParams("empty".to_string()));

        let err: ToolError = DocsError::ArchitectureMissing {
            component: "dap-sdk".to_string(),
            path: "/x/architecture.md".to_string(),
        }
        .into();
        assert!(matches!(err, ToolError::Internal(ref m) if m.contains("/x/architecture.md")));
    }
}
