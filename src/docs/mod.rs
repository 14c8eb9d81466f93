//! Documentation discovery and search.
//!
//! Everything here is recomputed from the filesystem on each call; nothing
//! is cached between requests.

/// Category to directory mapping.
pub mod categories;

/// Text rendering of repository results.
pub mod formatter;

/// Case-insensitive line matching with context.
pub mod matcher;

/// Module identity derived from document paths.
pub mod module_name;

/// The operations exposed as tools.
pub mod repository;

/// Recursive document enumeration.
pub mod scanner;

pub use categories::CategoryPaths;
pub use formatter::{
    format_architecture, format_module_doc, format_module_list, format_search_results,
};
pub use matcher::find_matches;
pub use module_name::resolve_module_name;
pub use repository::DocumentRepository;
pub use scanner::scan_documents;
