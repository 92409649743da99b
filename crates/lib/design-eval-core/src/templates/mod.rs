//! Instruction templates and the renderer that fills them.
//!
//! Rendering is pure string formatting: every request is resolved against the
//! profile defaults and interpolated into the locale's template text.

mod confluence_eval;
mod evaluate_requirements;
mod fetch_design_doc;
mod scan_codebase;

use std::borrow::Cow;

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::args;
use crate::catalog::TemplateKind;
use crate::locale::Locale;
use crate::profile::PromptProfile;

/// Upper bound on the import depth an agent is asked to follow.
pub const MAX_SCAN_DEPTH: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unknown template: {0}")]
    UnknownTemplate(String),
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),
    #[error("invalid arguments for {template}: {message}")]
    InvalidArguments {
        template: TemplateKind,
        message: String,
    },
}

/// Arguments for the end-to-end compliance check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DesignEvalRequest {
    pub main_page: String,
    #[serde(default, deserialize_with = "args::list")]
    pub subpages: Vec<String>,
    #[serde(default, deserialize_with = "args::optional_text")]
    pub project_root: Option<String>,
    #[serde(default, deserialize_with = "args::list")]
    pub main_files: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FetchDesignRequest {
    pub main_page: String,
    #[serde(default, deserialize_with = "args::list")]
    pub subpages: Vec<String>,
    #[serde(default, deserialize_with = "args::optional_text")]
    pub focus: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ScanCodebaseRequest {
    #[serde(default, deserialize_with = "args::optional_text")]
    pub project_root: Option<String>,
    #[serde(default, deserialize_with = "args::list")]
    pub entry_files: Vec<String>,
    #[serde(default, deserialize_with = "args::optional_depth")]
    pub max_depth: Option<u32>,
    #[serde(default, deserialize_with = "args::list")]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EvaluateRequest {
    #[serde(default, deserialize_with = "args::optional_text")]
    pub requirements: Option<String>,
    #[serde(default, deserialize_with = "args::optional_text")]
    pub facts: Option<String>,
    #[serde(default, deserialize_with = "args::optional_text")]
    pub project_root: Option<String>,
    #[serde(default, deserialize_with = "args::list")]
    pub main_files: Vec<String>,
}

/// A fully-typed request for one template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateRequest {
    ConfluenceEval(DesignEvalRequest),
    FetchDesignDoc(FetchDesignRequest),
    ScanCodebase(ScanCodebaseRequest),
    EvaluateRequirements(EvaluateRequest),
}

impl TemplateRequest {
    #[must_use]
    pub const fn kind(&self) -> TemplateKind {
        match self {
            Self::ConfluenceEval(_) => TemplateKind::ConfluenceEval,
            Self::FetchDesignDoc(_) => TemplateKind::FetchDesignDoc,
            Self::ScanCodebase(_) => TemplateKind::ScanCodebase,
            Self::EvaluateRequirements(_) => TemplateKind::EvaluateRequirements,
        }
    }

    /// Builds a request from a template name and a loose argument map.
    ///
    /// # Errors
    /// Returns [`TemplateError::UnknownTemplate`] for unrecognized names and
    /// [`TemplateError::InvalidArguments`] when the arguments do not fit.
    pub fn from_arguments(name: &str, arguments: Map<String, Value>) -> Result<Self, TemplateError> {
        let kind: TemplateKind = name.parse()?;
        let value = Value::Object(arguments);
        let invalid = |err: serde_json::Error| TemplateError::InvalidArguments {
            template: kind,
            message: err.to_string(),
        };
        let request = match kind {
            TemplateKind::ConfluenceEval => {
                Self::ConfluenceEval(serde_json::from_value(value).map_err(invalid)?)
            }
            TemplateKind::FetchDesignDoc => {
                Self::FetchDesignDoc(serde_json::from_value(value).map_err(invalid)?)
            }
            TemplateKind::ScanCodebase => {
                Self::ScanCodebase(serde_json::from_value(value).map_err(invalid)?)
            }
            TemplateKind::EvaluateRequirements => {
                Self::EvaluateRequirements(serde_json::from_value(value).map_err(invalid)?)
            }
        };
        Ok(request)
    }
}

/// Output of a render: the template text plus its catalog description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPrompt {
    pub kind: TemplateKind,
    pub description: &'static str,
    pub text: String,
}

/// Profile-derived values shared by every template.
pub(crate) struct RenderContext<'a> {
    pub locale: Locale,
    pub wiki_name: &'a str,
    pub wiki_server: String,
    pub wiki_tools: String,
    pub tool_hint: String,
}

/// Renders templates for a fixed profile.
#[derive(Debug, Clone, Default)]
pub struct TemplateRenderer {
    profile: PromptProfile,
}

impl TemplateRenderer {
    #[must_use]
    pub const fn new(profile: PromptProfile) -> Self {
        Self { profile }
    }

    #[must_use]
    pub const fn profile(&self) -> &PromptProfile {
        &self.profile
    }

    /// Renders a request into instruction text.
    ///
    /// # Errors
    /// Returns [`TemplateError::MissingArgument`] when a required value is blank.
    pub fn render(&self, request: &TemplateRequest) -> Result<RenderedPrompt, TemplateError> {
        let ctx = self.context();
        let none = ctx.locale.none_placeholder();
        let text = match request {
            TemplateRequest::ConfluenceEval(req) => {
                let main_page = required(&req.main_page, "main_page")?;
                confluence_eval::render(
                    &ctx,
                    &confluence_eval::Fields {
                        main_page,
                        subpages: &join_or(&req.subpages, none),
                        project_root: self.project_root(req.project_root.as_deref()),
                        main_files: &join_or(&req.main_files, none),
                    },
                )
            }
            TemplateRequest::FetchDesignDoc(req) => {
                let main_page = required(&req.main_page, "main_page")?;
                fetch_design_doc::render(
                    &ctx,
                    &fetch_design_doc::Fields {
                        main_page,
                        subpages: &join_or(&req.subpages, none),
                        focus: req.focus.as_deref().unwrap_or(none),
                    },
                )
            }
            TemplateRequest::ScanCodebase(req) => scan_codebase::render(
                &ctx,
                &scan_codebase::Fields {
                    project_root: self.project_root(req.project_root.as_deref()),
                    entry_files: &join_or(&req.entry_files, none),
                    max_depth: &self.max_depth(req.max_depth).to_string(),
                    exclude: &join_or(&req.exclude, none),
                },
            ),
            TemplateRequest::EvaluateRequirements(req) => evaluate_requirements::render(
                &ctx,
                &evaluate_requirements::Fields {
                    requirements: req.requirements.as_deref(),
                    facts: req.facts.as_deref(),
                    project_root: self.project_root(req.project_root.as_deref()),
                    main_files: &join_or(&req.main_files, none),
                },
            ),
        };

        let kind = request.kind();
        debug!(template = kind.name(), locale = %ctx.locale, "rendered template");
        Ok(RenderedPrompt {
            kind,
            description: kind.description(),
            text,
        })
    }

    /// Renders a template with `<argument>` markers in place of every value.
    #[must_use]
    pub fn preview(&self, kind: TemplateKind) -> RenderedPrompt {
        let ctx = self.context();
        let text = match kind {
            TemplateKind::ConfluenceEval => confluence_eval::render(
                &ctx,
                &confluence_eval::Fields {
                    main_page: "<main_page>",
                    subpages: "<subpages>",
                    project_root: "<project_root>",
                    main_files: "<main_files>",
                },
            ),
            TemplateKind::FetchDesignDoc => fetch_design_doc::render(
                &ctx,
                &fetch_design_doc::Fields {
                    main_page: "<main_page>",
                    subpages: "<subpages>",
                    focus: "<focus>",
                },
            ),
            TemplateKind::ScanCodebase => scan_codebase::render(
                &ctx,
                &scan_codebase::Fields {
                    project_root: "<project_root>",
                    entry_files: "<entry_files>",
                    max_depth: "<max_depth>",
                    exclude: "<exclude>",
                },
            ),
            TemplateKind::EvaluateRequirements => evaluate_requirements::render(
                &ctx,
                &evaluate_requirements::Fields {
                    requirements: Some("<requirements>"),
                    facts: Some("<facts>"),
                    project_root: "<project_root>",
                    main_files: "<main_files>",
                },
            ),
        };
        RenderedPrompt {
            kind,
            description: kind.description(),
            text,
        }
    }

    fn context(&self) -> RenderContext<'_> {
        let locale = self.profile.locale;
        RenderContext {
            locale,
            wiki_name: &self.profile.wiki.name,
            wiki_server: self.profile.wiki.server_label(locale),
            wiki_tools: self.profile.wiki.tools_label(locale),
            tool_hint: self.profile.wiki.tool_hint(),
        }
    }

    fn project_root<'a>(&'a self, value: Option<&'a str>) -> &'a str {
        value.unwrap_or(&self.profile.defaults.project_root)
    }

    fn max_depth(&self, value: Option<u32>) -> u32 {
        value
            .unwrap_or(self.profile.defaults.max_depth)
            .min(MAX_SCAN_DEPTH)
    }
}

fn required<'a>(value: &'a str, name: &'static str) -> Result<&'a str, TemplateError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(TemplateError::MissingArgument(name))
    } else {
        Ok(trimmed)
    }
}

fn join_or<'a>(items: &[String], none: &'a str) -> Cow<'a, str> {
    if items.is_empty() {
        Cow::Borrowed(none)
    } else {
        Cow::Owned(items.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn args(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn from_arguments_rejects_unknown_template() {
        let err = TemplateRequest::from_arguments("no_such_prompt", Map::new())
            .expect_err("unknown name");
        assert_eq!(err, TemplateError::UnknownTemplate("no_such_prompt".to_string()));
    }

    #[test]
    fn from_arguments_requires_main_page_field() {
        let err = TemplateRequest::from_arguments("fetch_design_doc", Map::new())
            .expect_err("main_page missing");
        assert!(matches!(
            err,
            TemplateError::InvalidArguments {
                template: TemplateKind::FetchDesignDoc,
                ..
            }
        ));
    }

    #[test]
    fn from_arguments_coerces_string_forms() {
        let request = TemplateRequest::from_arguments(
            "scan_codebase",
            args(json!({ "entry_files": "src/main.ts, src/app.ts", "max_depth": "5" })),
        )
        .expect("valid arguments");
        assert_eq!(
            request,
            TemplateRequest::ScanCodebase(ScanCodebaseRequest {
                project_root: None,
                entry_files: vec!["src/main.ts".to_string(), "src/app.ts".to_string()],
                max_depth: Some(5),
                exclude: Vec::new(),
            })
        );
    }

    #[test]
    fn blank_main_page_is_missing() {
        let renderer = TemplateRenderer::default();
        let err = renderer
            .render(&TemplateRequest::ConfluenceEval(DesignEvalRequest {
                main_page: "   ".to_string(),
                ..DesignEvalRequest::default()
            }))
            .expect_err("blank main page");
        assert_eq!(err, TemplateError::MissingArgument("main_page"));
    }

    #[test]
    fn depth_is_clamped_to_cap() {
        let renderer = TemplateRenderer::default();
        assert_eq!(renderer.max_depth(Some(50)), MAX_SCAN_DEPTH);
        assert_eq!(renderer.max_depth(None), 3);
        assert_eq!(renderer.max_depth(Some(0)), 0);
    }

    #[test]
    fn join_or_uses_placeholder_for_empty_lists() {
        assert_eq!(join_or(&[], "(none)"), "(none)");
        assert_eq!(
            join_or(&["a.rs".to_string(), "b.rs".to_string()], "(none)"),
            "a.rs, b.rs"
        );
    }
}
