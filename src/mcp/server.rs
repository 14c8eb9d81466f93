//! MCP server that reads JSON-RPC 2.0 messages line by line and writes one
//! response line per request.
//!
//! Requests are handled strictly one at a time: a line is parsed, served and
//! answered before the next one is read.

use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::docs::DocumentRepository;
use crate::errors::Result;

use super::tools::ToolRouter;
use super::transport::{ErrorCode, JsonRpcRequest, JsonRpcResponse};

/// Name reported in the `initialize` handshake.
pub const SERVER_NAME: &str = "dap-sdk-docs-server";

/// Protocol revision this server speaks.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// The MCP server wrapping a [`ToolRouter`].
pub struct McpServer {
    router: ToolRouter,
}

impl McpServer {
    pub fn new(repo: DocumentRepository) -> Self {
        Self {
            router: ToolRouter::new(repo),
        }
    }

    pub fn router(&self) -> &ToolRouter {
        &self.router
    }

    /// Serves stdin/stdout until stdin is closed.
    pub async fn run(&self) -> Result<()> {
        info!("starting DAP SDK documentation MCP server");
        let reader = BufReader::new(tokio::io::stdin());
        let writer = tokio::io::stdout();
        self.serve(reader, writer).await?;
        info!("stdin closed, MCP server stopped");
        Ok(())
    }

    /// Serves newline-delimited JSON-RPC from `reader`, answering on `writer`.
    ///
    /// A line that is not valid UTF-8 gets a parse error and the loop keeps
    /// going; only I/O failures end it.
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }

            let response = match std::str::from_utf8(&buf) {
                Ok(line) => self.handle_line(line),
                Err(e) => {
                    warn!(error = %e, "request line is not valid UTF-8");
                    Some(JsonRpcResponse::error(
                        Value::Null,
                        ErrorCode::ParseError,
                        format!("request is not valid UTF-8: {}", e),
                    ))
                }
            };
            let Some(response) = response else {
                continue;
            };

            let mut output = serde_json::to_string(&response)?;
            output.push('\n');
            writer.write_all(output.as_bytes()).await?;
            writer.flush().await?;
        }

        Ok(())
    }

    /// Parses and handles a single raw line.
    ///
    /// Blank lines and notifications produce no response.
    pub fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        match serde_json::from_str::<JsonRpcRequest>(line) {
            Ok(request) => self.handle_request(&request),
            Err(e) => {
                warn!(error = %e, "unparsable JSON-RPC message");
                Some(JsonRpcResponse::error(
                    Value::Null,
                    ErrorCode::ParseError,
                    format!("failed to parse JSON-RPC request: {}", e),
                ))
            }
        }
    }

    /// Dispatches a parsed JSON-RPC request to the appropriate handler.
    pub fn handle_request(&self, request: &JsonRpcRequest) -> Option<JsonRpcResponse> {
        let id = request.id.clone();
        debug!(method = %request.method, "handling request");

        if request.is_notification() {
            if request.method.ends_with("initialized") {
                info!("client initialized");
            }
            return None;
        }

        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(
                id,
                ErrorCode::InvalidRequest,
                format!("unsupported jsonrpc version: {}", request.jsonrpc),
            ));
        }

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(id),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tools_call(id, &request.params),
            "ping" => JsonRpcResponse::success(id, json!({})),
            other => {
                warn!(method = %other, "unknown method");
                JsonRpcResponse::error(
                    id,
                    ErrorCode::MethodNotFound,
                    format!("method not found: {}", other),
                )
            }
        };
        Some(response)
    }

    fn handle_initialize(&self, id: Value) -> JsonRpcResponse {
        info!("client initializing");
        JsonRpcResponse::success(
            id,
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": SERVER_NAME,
                    "version": env!("CARGO_PKG_VERSION")
                }
            }),
        )
    }

    fn handle_tools_list(&self, id: Value) -> JsonRpcResponse {
        JsonRpcResponse::success(id, json!({ "tools": self.router.list_tools() }))
    }

    fn handle_tools_call(&self, id: Value, params: &Option<Value>) -> JsonRpcResponse {
        let Some(params) = params else {
            return JsonRpcResponse::error(
                id,
                ErrorCode::InvalidParams,
                "missing params for tools/call".to_string(),
            );
        };

        let Some(tool_name) = params.get("name").and_then(|v| v.as_str()) else {
            return JsonRpcResponse::error(
                id,
                ErrorCode::InvalidParams,
                "missing 'name' in tools/call params".to_string(),
            );
        };

        let arguments = params.get("arguments").cloned().unwrap_or(Value::Null);

        match self.router.call(tool_name, arguments) {
            Ok(result) => match serde_json::to_value(&result) {
                Ok(value) => JsonRpcResponse::success(id, value),
                Err(e) => JsonRpcResponse::error(
                    id,
                    ErrorCode::InternalError,
                    format!("failed to encode tool result: {}", e),
                ),
            },
            Err(e) => JsonRpcResponse::error(id, e.code(), e.to_string()),
        }
    }
}
