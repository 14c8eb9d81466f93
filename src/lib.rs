pub mod config;
pub mod docs;
pub mod errors;
pub mod mcp;
pub mod types;
