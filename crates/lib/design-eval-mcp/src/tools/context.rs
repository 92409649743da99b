use design_eval_core::{ArgumentSpec, TemplateKind};
use rmcp::{
    ErrorData,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::DesignEvalMcp;
use crate::resources::{TEMPLATE_URI_PREFIX, WORKFLOW_URI};

/// Payload listing the MCP commands this server exposes.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct HelpCommands {
    pub commands: Vec<String>,
    pub templates: Vec<TemplateHelp>,
    pub resources: Vec<String>,
}

/// One template with its arguments, as shown by `help`.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct TemplateHelp {
    pub name: String,
    pub title: String,
    pub description: String,
    pub arguments: Vec<String>,
}

impl Default for HelpCommands {
    fn default() -> Self {
        Self {
            commands: vec![
                "help - List MCP commands, templates, and resources.".to_string(),
                "health - Returns 'ok'.".to_string(),
                "render_template - Render any template by name from a loose argument object."
                    .to_string(),
            ],
            templates: TemplateKind::ALL.into_iter().map(TemplateHelp::from).collect(),
            resources: std::iter::once(WORKFLOW_URI.to_string())
                .chain(
                    TemplateKind::ALL
                        .into_iter()
                        .map(|kind| format!("{TEMPLATE_URI_PREFIX}{}", kind.name())),
                )
                .collect(),
        }
    }
}

impl From<TemplateKind> for TemplateHelp {
    fn from(kind: TemplateKind) -> Self {
        Self {
            name: kind.name().to_string(),
            title: kind.title().to_string(),
            description: kind.description().to_string(),
            arguments: kind.arguments().iter().map(describe_argument).collect(),
        }
    }
}

fn describe_argument(arg: &ArgumentSpec) -> String {
    let presence = if arg.required { "required" } else { "optional" };
    format!("{} ({presence}) - {}", arg.name, arg.description)
}

#[tool_router(router = tool_router_context, vis = "pub")]
impl DesignEvalMcp {
    #[tool(description = "List the MCP commands, templates, and resources this server exposes.")]
    async fn help(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::json(HelpCommands::default())?]))
    }
}
