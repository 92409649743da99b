use design_eval_core::TemplateRequest;
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::params::{
    ConfluenceEvalParams,
    EvaluateRequirementsParams,
    FetchDesignDocParams,
    ScanCodebaseParams,
};
use crate::{DesignEvalMcp, helpers};

/// Parameters for rendering any template by name.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct RenderTemplateParams {
    /// Template name, e.g. `confluence_eval` or `scan_codebase`.
    pub template: String,
    /// Template arguments; list values may be arrays or comma separated strings.
    #[serde(default)]
    pub arguments: Option<Map<String, Value>>,
}

impl DesignEvalMcp {
    fn tool_result(&self, request: &TemplateRequest) -> Result<CallToolResult, ErrorData> {
        let rendered = self.render(request)?;
        Ok(CallToolResult::success(vec![Content::text(rendered.text)]))
    }
}

#[tool_router(router = tool_router_templates, vis = "pub")]
impl DesignEvalMcp {
    #[tool(
        title = "Design compliance check",
        description = "Builds a prompt that checks local code against a wiki design document and returns a pass/partial/fail verdict."
    )]
    async fn confluence_eval(
        &self,
        Parameters(params): Parameters<ConfluenceEvalParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.tool_result(&params.into())
    }

    #[tool(
        title = "Fetch design document",
        description = "Builds a prompt that fetches a design page and its subpages through the wiki MCP server and extracts numbered requirements."
    )]
    async fn fetch_design_doc(
        &self,
        Parameters(params): Parameters<FetchDesignDocParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.tool_result(&params.into())
    }

    #[tool(
        title = "Scan codebase dependencies",
        description = "Builds a prompt that statically walks import edges from entry files and records implementation facts."
    )]
    async fn scan_codebase(
        &self,
        Parameters(params): Parameters<ScanCodebaseParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.tool_result(&params.into())
    }

    #[tool(
        title = "Evaluate requirements",
        description = "Builds a prompt that compares requirements with implementation facts and returns a pass/partial/fail verdict per requirement."
    )]
    async fn evaluate_requirements(
        &self,
        Parameters(params): Parameters<EvaluateRequirementsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.tool_result(&params.into())
    }

    #[tool(description = "Render any template by name from a loose argument object. Unknown template names are rejected.")]
    async fn render_template(
        &self,
        Parameters(params): Parameters<RenderTemplateParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let request = TemplateRequest::from_arguments(
            params.template.trim(),
            params.arguments.unwrap_or_default(),
        )
        .map_err(|err| helpers::map_template_err(&err))?;
        self.tool_result(&request)
    }
}

#[cfg(test)]
mod tests {
    use design_eval_core::{Locale, PromptProfile};
    use rmcp::model::ErrorCode;
    use serde_json::json;

    use super::*;

    fn english_server() -> DesignEvalMcp {
        DesignEvalMcp::new(PromptProfile::default().with_locale(Locale::En))
    }

    fn first_text(result: &CallToolResult) -> &str {
        result
            .content
            .first()
            .and_then(|content| content.as_text())
            .map(|text| text.text.as_str())
            .expect("tool result should carry text")
    }

    #[tokio::test]
    async fn evaluate_requirements_tool_returns_text() {
        let server = english_server();
        let params: EvaluateRequirementsParams = serde_json::from_value(json!({
            "requirements": "R1: orders are idempotent",
            "main_files": ["src/orders.rs"]
        }))
        .expect("valid params");

        let result = server
            .evaluate_requirements(Parameters(params))
            .await
            .expect("tool should render");

        let text = first_text(&result);
        assert!(text.contains("- Requirements: R1: orders are idempotent"));
        assert!(text.contains("from the scan_codebase step"));
        assert!(text.contains("- Key files: src/orders.rs"));
    }

    #[tokio::test]
    async fn render_template_dispatches_by_name() {
        let server = english_server();
        let params: RenderTemplateParams = serde_json::from_value(json!({
            "template": "fetch_design_doc",
            "arguments": { "main_page": "Billing Design", "subpages": "Invoices" }
        }))
        .expect("valid params");

        let result = server
            .render_template(Parameters(params))
            .await
            .expect("tool should render");

        let text = first_text(&result);
        assert!(text.contains("- Main page: Billing Design"));
        assert!(text.contains("- Subpages: Invoices"));
        assert!(text.contains("- Focus: (none)"));
    }

    #[tokio::test]
    async fn render_template_rejects_unknown_names() {
        let server = english_server();
        let params = RenderTemplateParams {
            template: "summarize_everything".to_string(),
            arguments: None,
        };

        let err = server
            .render_template(Parameters(params))
            .await
            .expect_err("unknown template");
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("unknown template: summarize_everything"));
    }
}
