//! MCP server implementation for design-eval.
//!
//! This crate wires the template renderer into rmcp prompt, tool, and resource
//! handlers. Every handler is a pure function of its arguments and the profile,
//! so the server carries no mutable state.

mod helpers;
mod params;
mod prompts;
mod resources;
mod tools;
pub mod server;

use std::sync::Arc;

use design_eval_core::{PromptProfile, RenderedPrompt, TemplateRenderer, TemplateRequest};
use rmcp::{
    ErrorData,
    RoleServer,
    ServerHandler,
    handler::server::router::prompt::PromptRouter,
    handler::server::tool::ToolRouter,
    prompt_handler,
    service::RequestContext,
    tool,
    tool_handler,
    tool_router,
};
use rmcp::model::{
    CallToolResult,
    Content,
    GetPromptRequestParams,
    GetPromptResult,
    ListPromptsResult,
    ListResourcesResult,
    PaginatedRequestParams,
    ReadResourceRequestParams,
    ReadResourceResult,
    ServerCapabilities,
    ServerInfo,
};
use tracing::debug;

pub use params::{
    ConfluenceEvalParams,
    EvaluateRequirementsParams,
    FetchDesignDocParams,
    ScanCodebaseParams,
};
pub use resources::{TEMPLATE_URI_PREFIX, WORKFLOW_URI};

const SERVER_INSTRUCTIONS: &str = r"design-eval hands out instruction prompts for checking a codebase against a wiki design document.
The server does not read wikis or code itself. It returns text that tells you how to do it with your own tools.

Workflow:
1. One pass: call the `confluence_eval` prompt (or tool) with `main_page` and optional `subpages`,
   `project_root`, and `main_files`, then follow the returned instructions.
2. Staged:
   - `fetch_design_doc` extracts numbered requirements from the wiki page and its subpages.
   - `scan_codebase` walks import edges from `entry_files` up to `max_depth` and records implementation facts.
   - `evaluate_requirements` judges each requirement as pass / partial / fail with file and line evidence.

Notes:
- Every template is available both as a prompt and as a tool with the same name and arguments.
- List arguments accept a JSON array or a comma separated string.
- `render_template` renders any template by name from a loose argument object.
- Resources: `design-eval://guide/workflow` and `design-eval://templates/{name}` (template previews).
- Use `help` for the command list. `health` returns `ok`.";

/// MCP server wrapper around the template renderer and routers.
#[derive(Clone)]
pub struct DesignEvalMcp {
    tool_router: ToolRouter<Self>,
    prompt_router: PromptRouter<Self>,
    renderer: Arc<TemplateRenderer>,
}

impl DesignEvalMcp {
    /// Creates a new server rendering with the given profile.
    #[must_use]
    pub fn new(profile: PromptProfile) -> Self {
        Self::with_renderer(Arc::new(TemplateRenderer::new(profile)))
    }

    /// Creates a new server using a shared renderer handle.
    #[must_use]
    pub fn with_renderer(renderer: Arc<TemplateRenderer>) -> Self {
        let tool_router = Self::tool_router_core()
            + Self::tool_router_templates()
            + Self::tool_router_context();
        Self {
            tool_router,
            prompt_router: Self::template_prompts(),
            renderer,
        }
    }

    #[must_use]
    pub fn profile(&self) -> &PromptProfile {
        self.renderer.profile()
    }

    /// Renders a request, mapping template errors to `INVALID_PARAMS`.
    pub(crate) fn render(&self, request: &TemplateRequest) -> Result<RenderedPrompt, ErrorData> {
        debug!(template = request.kind().name(), "rendering template");
        self.renderer
            .render(request)
            .map_err(|err| helpers::map_template_err(&err))
    }
}

impl Default for DesignEvalMcp {
    fn default() -> Self {
        Self::new(PromptProfile::default())
    }
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl DesignEvalMcp {
    #[tool(description = "Health check. Returns 'ok'.")]
    async fn health(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text("ok")]))
    }
}

#[tool_handler]
#[prompt_handler]
impl ServerHandler for DesignEvalMcp {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_prompts()
                .enable_resources()
                .enable_tools()
                .build(),
            ..Default::default()
        };
        info.server_info.name.clone_from(&self.profile().server_name);
        info.server_info.version = env!("CARGO_PKG_VERSION").to_string();
        info
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult::with_all_items(resources::list()))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        debug!(uri = %request.uri, "reading resource");
        resources::read(&self.renderer, &request.uri)
    }
}
