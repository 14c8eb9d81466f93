//! MCP (Model Context Protocol) server for the documentation tree.
//!
//! Provides a JSON-RPC 2.0 interface over stdio exposing four tools:
//! `search_docs`, `get_module_docs`, `list_modules` and
//! `get_architecture_info`.

/// MCP server implementation.
pub mod server;

/// Tool definitions and dispatch.
pub mod tools;

/// JSON-RPC 2.0 transport types.
pub mod transport;

pub use server::McpServer;
pub use tools::{get_tool_definitions, Tool, ToolDefinition, ToolError, ToolResult, ToolRouter};
pub use transport::{ErrorCode, JsonRpcError, JsonRpcRequest, JsonRpcResponse};
