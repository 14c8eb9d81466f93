use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Logical documentation area.
///
/// `All` is the synthetic union of every concrete category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Core,
    Crypto,
    Net,
    Cellframe,
    All,
}

#[allow(clippy::should_implement_trait)]
impl Category {
    /// Concrete categories in the order `All` expands to.
    pub const CONCRETE: [Category; 4] = [
        Category::Core,
        Category::Crypto,
        Category::Net,
        Category::Cellframe,
    ];

    /// Returns the string representation of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Core => "core",
            Category::Crypto => "crypto",
            Category::Net => "net",
            Category::Cellframe => "cellframe",
            Category::All => "all",
        }
    }

    /// Parses a string into a `Category`, returning `None` for unrecognized values.
    pub fn from_str(s: &str) -> Option<Category> {
        match s {
            "core" => Some(Category::Core),
            "crypto" => Some(Category::Crypto),
            "net" => Some(Category::Net),
            "cellframe" => Some(Category::Cellframe),
            "all" => Some(Category::All),
            _ => None,
        }
    }

    /// Parses a category leniently: anything unrecognized becomes `All`.
    pub fn parse_lenient(s: &str) -> Category {
        Category::from_str(s).unwrap_or(Category::All)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Architecture component that `get_architecture_info` can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Component {
    #[serde(rename = "dap-sdk")]
    DapSdk,
    #[serde(rename = "cellframe-sdk")]
    CellframeSdk,
    #[serde(rename = "overview")]
    Overview,
}

#[allow(clippy::should_implement_trait)]
impl Component {
    /// Returns the name used for this component in tool arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::DapSdk => "dap-sdk",
            Component::CellframeSdk => "cellframe-sdk",
            Component::Overview => "overview",
        }
    }

    /// Parses an exact component name; returns `None` for anything else.
    pub fn from_str(s: &str) -> Option<Component> {
        match s {
            "dap-sdk" => Some(Component::DapSdk),
            "cellframe-sdk" => Some(Component::CellframeSdk),
            "overview" => Some(Component::Overview),
            _ => None,
        }
    }

    /// Anything that is not a named SDK falls back to the overview.
    pub fn parse_lenient(s: &str) -> Component {
        Component::from_str(s).unwrap_or(Component::Overview)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The lines surrounding a single query hit inside a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchContext {
    /// Zero-based index of the matching line.
    pub line_index: usize,
    /// The matching line with up to one neighbour on each side.
    pub lines: Vec<String>,
}

impl MatchContext {
    /// Joins the context lines back into a single excerpt.
    pub fn excerpt(&self) -> String {
        self.lines.join("\n")
    }
}

/// All hits for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Path of the document relative to the documentation root.
    pub file: String,
    /// Module identity derived from the file name.
    pub module: String,
    /// Hits in line order, capped per document.
    pub matches: Vec<MatchContext>,
}

/// Outcome of a module documentation lookup.
///
/// A missing module is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleDoc {
    Found {
        module: String,
        path: PathBuf,
        content: String,
    },
    /// `category` is the label the caller asked for, not the directory
    /// that was consulted.
    NotFound {
        module: String,
        category: String,
    },
}

/// An architecture document, either read from disk or the built-in overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchitectureDoc {
    pub component: Component,
    pub content: String,
}
