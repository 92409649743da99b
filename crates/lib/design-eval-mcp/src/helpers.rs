use std::borrow::Cow;

use design_eval_core::TemplateError;
use rmcp::ErrorData;
use rmcp::model::ErrorCode;

pub fn mcp_err(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> ErrorData {
    ErrorData {
        code,
        message: message.into(),
        data: None,
    }
}

pub fn map_template_err(err: &TemplateError) -> ErrorData {
    mcp_err(ErrorCode::INVALID_PARAMS, err.to_string())
}
