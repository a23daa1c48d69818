use std::borrow::Cow;

use rmcp::ErrorData;
use rmcp::model::ErrorCode;
use sales_core::query::ValidationError;
use sales_core::store::StoreError;

pub(crate) fn mcp_err(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> ErrorData {
    ErrorData {
        code,
        message: message.into(),
        data: None,
    }
}

pub(crate) fn invalid_params(err: ValidationError) -> ErrorData {
    mcp_err(ErrorCode::INVALID_PARAMS, err.to_string())
}

pub(crate) fn store_err(err: StoreError) -> ErrorData {
    mcp_err(ErrorCode::INTERNAL_ERROR, err.to_string())
}
