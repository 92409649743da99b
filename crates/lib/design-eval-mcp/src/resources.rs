//! Read-only resources: the workflow guide and one preview per template.

use design_eval_core::{PromptProfile, TemplateKind, TemplateRenderer};
use rmcp::ErrorData;
use rmcp::model::{AnnotateAble, ErrorCode, RawResource, ReadResourceResult, Resource, ResourceContents};

use crate::helpers;

pub const WORKFLOW_URI: &str = "design-eval://guide/workflow";
pub const TEMPLATE_URI_PREFIX: &str = "design-eval://templates/";

const MARKDOWN: &str = "text/markdown";

pub fn list() -> Vec<Resource> {
    let mut resources = vec![resource(
        WORKFLOW_URI,
        "workflow",
        "How the fetch, scan, and evaluate prompts chain together.",
    )];
    resources.extend(TemplateKind::ALL.into_iter().map(|kind| {
        resource(
            &format!("{TEMPLATE_URI_PREFIX}{}", kind.name()),
            kind.name(),
            kind.description(),
        )
    }));
    resources
}

pub fn read(renderer: &TemplateRenderer, uri: &str) -> Result<ReadResourceResult, ErrorData> {
    let text = if uri == WORKFLOW_URI {
        workflow_guide(renderer.profile())
    } else {
        let kind: TemplateKind = uri
            .strip_prefix(TEMPLATE_URI_PREFIX)
            .and_then(|name| name.parse().ok())
            .ok_or_else(|| not_found(uri))?;
        renderer.preview(kind).text
    };
    Ok(ReadResourceResult {
        contents: vec![ResourceContents::text(text, uri)],
    })
}

fn resource(uri: &str, name: &str, description: &str) -> Resource {
    let mut raw = RawResource::new(uri, name);
    raw.description = Some(description.to_string());
    raw.mime_type = Some(MARKDOWN.to_string());
    raw.no_annotation()
}

fn not_found(uri: &str) -> ErrorData {
    helpers::mcp_err(ErrorCode::RESOURCE_NOT_FOUND, format!("unknown resource: {uri}"))
}

fn workflow_guide(profile: &PromptProfile) -> String {
    let wiki = &profile.wiki.name;
    let server = profile.wiki.server_label(profile.locale);
    let root = &profile.defaults.project_root;
    let depth = profile.defaults.max_depth;
    format!(
        r"# {name} workflow

The prompts returned by this server are instructions for you to carry out with your own tools.
This server never reads {wiki} or your code.

## One pass
`confluence_eval` covers the whole check: it fetches the design through the {server},
reads the code under the project root, and asks for a pass / partial / fail verdict.

## Staged
1. `fetch_design_doc` - pull the main page and subpages from {wiki} and number the requirements (R1, R2, ...).
2. `scan_codebase` - walk import edges from the entry files, breadth-first, and record implementation facts.
3. `evaluate_requirements` - judge each requirement against the facts, with file and line evidence.
   Leave `requirements` and `facts` empty to reuse the output of steps 1 and 2.

## Defaults
- Project root: {root}
- Import depth: {depth}
- Output language: {locale}
",
        name = profile.server_name,
        locale = profile.locale,
    )
}

#[cfg(test)]
mod tests {
    use design_eval_core::Locale;

    use super::*;

    fn text_of(result: &ReadResourceResult) -> &str {
        match result.contents.as_slice() {
            [ResourceContents::TextResourceContents { text, .. }] => text,
            other => panic!("expected a single text resource, got {other:?}"),
        }
    }

    #[test]
    fn lists_workflow_and_template_previews() {
        let uris: Vec<String> = list().into_iter().map(|resource| resource.raw.uri).collect();
        assert_eq!(
            uris,
            vec![
                "design-eval://guide/workflow",
                "design-eval://templates/confluence_eval",
                "design-eval://templates/fetch_design_doc",
                "design-eval://templates/scan_codebase",
                "design-eval://templates/evaluate_requirements",
            ]
        );
    }

    #[test]
    fn reads_template_preview() {
        let renderer = TemplateRenderer::new(PromptProfile::default().with_locale(Locale::En));
        let result = read(&renderer, "design-eval://templates/scan_codebase")
            .expect("template resource should exist");
        let text = text_of(&result);
        assert!(text.contains("- Maximum import depth: <max_depth>"));
        assert!(text.contains("- Entry files: <entry_files>"));
    }

    #[test]
    fn workflow_guide_reflects_profile() {
        let profile = PromptProfile::default()
            .with_locale(Locale::Ja)
            .with_server_name("payments-eval");
        let renderer = TemplateRenderer::new(profile);
        let result = read(&renderer, WORKFLOW_URI).expect("workflow resource should exist");
        let text = text_of(&result);
        assert!(text.starts_with("# payments-eval workflow"));
        assert!(text.contains("Output language: ja"));
        assert!(text.contains("Atlassian公式の Confluence MCP サーバ"));
    }

    #[test]
    fn unknown_uris_are_not_found() {
        let renderer = TemplateRenderer::default();
        for uri in [
            "design-eval://templates/nope",
            "design-eval://guide/other",
            "file:///etc/passwd",
        ] {
            let err = read(&renderer, uri).expect_err("unknown resource");
            assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND);
        }
    }
}
