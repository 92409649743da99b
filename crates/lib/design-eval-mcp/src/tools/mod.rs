//! MCP tool modules.
//!
//! Tools are grouped by purpose: template rendering (one tool per prompt plus
//! a by-name renderer) and contextual help.

mod context;
mod templates;
