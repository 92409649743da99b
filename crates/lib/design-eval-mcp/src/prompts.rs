use design_eval_core::TemplateRequest;
use rmcp::{
    ErrorData,
    handler::server::router::prompt::PromptRouter,
    handler::server::wrapper::Parameters,
    model::{GetPromptResult, PromptMessage, PromptMessageRole},
    prompt,
    prompt_router,
};

use crate::DesignEvalMcp;
use crate::params::{
    ConfluenceEvalParams,
    EvaluateRequirementsParams,
    FetchDesignDocParams,
    ScanCodebaseParams,
};

impl DesignEvalMcp {
    pub(crate) fn template_prompts() -> PromptRouter<Self> {
        Self::prompt_router()
    }

    fn prompt_result(&self, request: &TemplateRequest) -> Result<GetPromptResult, ErrorData> {
        let rendered = self.render(request)?;
        Ok(GetPromptResult {
            description: Some(rendered.description.to_string()),
            messages: vec![PromptMessage::new_text(
                PromptMessageRole::User,
                rendered.text,
            )],
        })
    }
}

#[prompt_router]
impl DesignEvalMcp {
    #[prompt(
        name = "confluence_eval",
        title = "Design compliance check",
        description = "Builds a prompt that checks local code against a wiki design document and returns a pass/partial/fail verdict."
    )]
    async fn confluence_eval_prompt(
        &self,
        Parameters(params): Parameters<ConfluenceEvalParams>,
    ) -> Result<GetPromptResult, ErrorData> {
        self.prompt_result(&params.into())
    }

    #[prompt(
        name = "fetch_design_doc",
        title = "Fetch design document",
        description = "Builds a prompt that fetches a design page and its subpages through the wiki MCP server and extracts numbered requirements."
    )]
    async fn fetch_design_doc_prompt(
        &self,
        Parameters(params): Parameters<FetchDesignDocParams>,
    ) -> Result<GetPromptResult, ErrorData> {
        self.prompt_result(&params.into())
    }

    #[prompt(
        name = "scan_codebase",
        title = "Scan codebase dependencies",
        description = "Builds a prompt that statically walks import edges from entry files and records implementation facts."
    )]
    async fn scan_codebase_prompt(
        &self,
        Parameters(params): Parameters<ScanCodebaseParams>,
    ) -> Result<GetPromptResult, ErrorData> {
        self.prompt_result(&params.into())
    }

    #[prompt(
        name = "evaluate_requirements",
        title = "Evaluate requirements",
        description = "Builds a prompt that compares requirements with implementation facts and returns a pass/partial/fail verdict per requirement."
    )]
    async fn evaluate_requirements_prompt(
        &self,
        Parameters(params): Parameters<EvaluateRequirementsParams>,
    ) -> Result<GetPromptResult, ErrorData> {
        self.prompt_result(&params.into())
    }
}
