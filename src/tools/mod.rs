//! MCP Tools
//!
//! Request handling behind each MCP tool.

pub mod scoring;
pub mod settings;
pub mod status;
