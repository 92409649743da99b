//! Core types and renderers for design-eval.
//!
//! This crate owns the prompt templates handed to downstream agents, the
//! profile that distinguishes server variants (locale, wiki product, defaults),
//! and the lenient argument helpers used by the MCP layer.

pub mod args;
pub mod catalog;
pub mod locale;
pub mod profile;
pub mod templates;

pub use catalog::{ArgumentSpec, TemplateKind};
pub use locale::Locale;
pub use profile::PromptProfile;
pub use templates::{RenderedPrompt, TemplateError, TemplateRenderer, TemplateRequest};
