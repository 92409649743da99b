use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::templates::TemplateError;

/// The instruction templates this server can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    /// End-to-end director prompt: fetch, scan, and judge in one pass.
    ConfluenceEval,
    FetchDesignDoc,
    ScanCodebase,
    EvaluateRequirements,
}

/// Describes one template argument for listings and help output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArgumentSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

const fn required(name: &'static str, description: &'static str) -> ArgumentSpec {
    ArgumentSpec {
        name,
        description,
        required: true,
    }
}

const fn optional(name: &'static str, description: &'static str) -> ArgumentSpec {
    ArgumentSpec {
        name,
        description,
        required: false,
    }
}

const MAIN_PAGE: ArgumentSpec = required("main_page", "Main design page URL or title.");
const SUBPAGES: ArgumentSpec = optional("subpages", "Related subpages (list or comma separated).");
const PROJECT_ROOT: ArgumentSpec = optional(
    "project_root",
    "Local project root used as the glob base. Defaults to the profile root.",
);
const MAIN_FILES: ArgumentSpec = optional(
    "main_files",
    "Key files to check first, relative to the project root (list or comma separated).",
);

const CONFLUENCE_EVAL_ARGS: &[ArgumentSpec] = &[MAIN_PAGE, SUBPAGES, PROJECT_ROOT, MAIN_FILES];
const FETCH_DESIGN_DOC_ARGS: &[ArgumentSpec] = &[
    MAIN_PAGE,
    SUBPAGES,
    optional("focus", "Sections or topics to concentrate on."),
];
const SCAN_CODEBASE_ARGS: &[ArgumentSpec] = &[
    PROJECT_ROOT,
    optional("entry_files", "Files to start the import walk from (list or comma separated)."),
    optional(
        "max_depth",
        "How many import hops to follow from the entry files. Defaults to the profile depth, capped at 10.",
    ),
    optional("exclude", "Paths or globs to skip (list or comma separated)."),
];
const EVALUATE_REQUIREMENTS_ARGS: &[ArgumentSpec] = &[
    optional("requirements", "Requirement list to judge. Defaults to the fetch step's output."),
    optional("facts", "Implementation facts to judge against. Defaults to the scan step's output."),
    PROJECT_ROOT,
    MAIN_FILES,
];

impl TemplateKind {
    pub const ALL: [Self; 4] = [
        Self::ConfluenceEval,
        Self::FetchDesignDoc,
        Self::ScanCodebase,
        Self::EvaluateRequirements,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ConfluenceEval => "confluence_eval",
            Self::FetchDesignDoc => "fetch_design_doc",
            Self::ScanCodebase => "scan_codebase",
            Self::EvaluateRequirements => "evaluate_requirements",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::ConfluenceEval => "Design compliance check",
            Self::FetchDesignDoc => "Fetch design document",
            Self::ScanCodebase => "Scan codebase dependencies",
            Self::EvaluateRequirements => "Evaluate requirements",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ConfluenceEval => {
                "Builds a prompt that checks local code against a wiki design document and returns a pass/partial/fail verdict."
            }
            Self::FetchDesignDoc => {
                "Builds a prompt that fetches a design page and its subpages through the wiki MCP server and extracts numbered requirements."
            }
            Self::ScanCodebase => {
                "Builds a prompt that statically walks import edges from entry files and records implementation facts."
            }
            Self::EvaluateRequirements => {
                "Builds a prompt that compares requirements with implementation facts and returns a pass/partial/fail verdict per requirement."
            }
        }
    }

    #[must_use]
    pub const fn arguments(self) -> &'static [ArgumentSpec] {
        match self {
            Self::ConfluenceEval => CONFLUENCE_EVAL_ARGS,
            Self::FetchDesignDoc => FETCH_DESIGN_DOC_ARGS,
            Self::ScanCodebase => SCAN_CODEBASE_ARGS,
            Self::EvaluateRequirements => EVALUATE_REQUIREMENTS_ARGS,
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TemplateKind {
    type Err = TemplateError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| TemplateError::UnknownTemplate(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for kind in TemplateKind::ALL {
            assert_eq!(kind.name().parse::<TemplateKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = "delete_everything"
            .parse::<TemplateKind>()
            .expect_err("unknown template");
        assert_eq!(err, TemplateError::UnknownTemplate("delete_everything".to_string()));
        assert!("Confluence_Eval".parse::<TemplateKind>().is_err());
    }

    #[test]
    fn only_main_page_is_required() {
        let required: Vec<_> = TemplateKind::ALL
            .into_iter()
            .flat_map(TemplateKind::arguments)
            .filter(|arg| arg.required)
            .map(|arg| arg.name)
            .collect();
        assert_eq!(required, vec!["main_page", "main_page"]);
    }
}
