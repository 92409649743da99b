//! Argument types shared by the prompt and tool routers.
//!
//! List fields accept a JSON array or a comma separated string, and
//! `max_depth` accepts a number or a numeric string, because most MCP clients
//! send prompt arguments as plain strings.

use design_eval_core::TemplateRequest;
use design_eval_core::args;
use design_eval_core::templates::{
    DesignEvalRequest,
    EvaluateRequest,
    FetchDesignRequest,
    ScanCodebaseRequest,
};
use rmcp::schemars;
use serde::{Deserialize, Serialize};

/// Parameters for the end-to-end design compliance check.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ConfluenceEvalParams {
    /// Main design page URL or title.
    pub main_page: String,
    /// Related subpages (list or comma separated).
    #[serde(default, deserialize_with = "args::list")]
    pub subpages: Vec<String>,
    /// Local project root used as the glob base. Defaults to the profile root.
    #[serde(default, deserialize_with = "args::optional_text")]
    pub project_root: Option<String>,
    /// Key files to check first, relative to the project root (list or comma separated).
    #[serde(default, deserialize_with = "args::list")]
    pub main_files: Vec<String>,
}

/// Parameters for fetching a design document from the wiki.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct FetchDesignDocParams {
    /// Main design page URL or title.
    pub main_page: String,
    /// Related subpages (list or comma separated).
    #[serde(default, deserialize_with = "args::list")]
    pub subpages: Vec<String>,
    /// Sections or topics to concentrate on.
    #[serde(default, deserialize_with = "args::optional_text")]
    pub focus: Option<String>,
}

/// Parameters for the static dependency scan.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ScanCodebaseParams {
    /// Local project root used as the glob base. Defaults to the profile root.
    #[serde(default, deserialize_with = "args::optional_text")]
    pub project_root: Option<String>,
    /// Files to start the import walk from (list or comma separated).
    #[serde(default, deserialize_with = "args::list")]
    pub entry_files: Vec<String>,
    /// How many import hops to follow from the entry files. Defaults to the profile depth, capped at 10.
    #[serde(default, deserialize_with = "args::optional_depth")]
    pub max_depth: Option<u32>,
    /// Paths or globs to skip (list or comma separated).
    #[serde(default, deserialize_with = "args::list")]
    pub exclude: Vec<String>,
}

/// Parameters for judging requirements against implementation facts.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct EvaluateRequirementsParams {
    /// Requirement list to judge. Defaults to the fetch step's output.
    #[serde(default, deserialize_with = "args::optional_text")]
    pub requirements: Option<String>,
    /// Implementation facts to judge against. Defaults to the scan step's output.
    #[serde(default, deserialize_with = "args::optional_text")]
    pub facts: Option<String>,
    /// Local project root used as the glob base. Defaults to the profile root.
    #[serde(default, deserialize_with = "args::optional_text")]
    pub project_root: Option<String>,
    /// Key files to check first, relative to the project root (list or comma separated).
    #[serde(default, deserialize_with = "args::list")]
    pub main_files: Vec<String>,
}

impl From<ConfluenceEvalParams> for TemplateRequest {
    fn from(params: ConfluenceEvalParams) -> Self {
        Self::ConfluenceEval(DesignEvalRequest {
            main_page: params.main_page,
            subpages: params.subpages,
            project_root: params.project_root,
            main_files: params.main_files,
        })
    }
}

impl From<FetchDesignDocParams> for TemplateRequest {
    fn from(params: FetchDesignDocParams) -> Self {
        Self::FetchDesignDoc(FetchDesignRequest {
            main_page: params.main_page,
            subpages: params.subpages,
            focus: params.focus,
        })
    }
}

impl From<ScanCodebaseParams> for TemplateRequest {
    fn from(params: ScanCodebaseParams) -> Self {
        Self::ScanCodebase(ScanCodebaseRequest {
            project_root: params.project_root,
            entry_files: params.entry_files,
            max_depth: params.max_depth,
            exclude: params.exclude,
        })
    }
}

impl From<EvaluateRequirementsParams> for TemplateRequest {
    fn from(params: EvaluateRequirementsParams) -> Self {
        Self::EvaluateRequirements(EvaluateRequest {
            requirements: params.requirements,
            facts: params.facts,
            project_root: params.project_root,
            main_files: params.main_files,
        })
    }
}
