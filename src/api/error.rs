use crate::error::MetricsError;
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// 接口层错误
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Metrics(#[from] MetricsError),

    /// 请求体或查询参数无法解析
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("export failed: {0}")]
    Export(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

/// 错误响应体
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Metrics(MetricsError::DivisionUndefined) => (StatusCode::CONFLICT, "NO_DATA"),
            ApiError::Metrics(MetricsError::InvalidParameter(_)) => {
                (StatusCode::BAD_REQUEST, "INVALID_PARAMETER")
            }
            ApiError::Metrics(MetricsError::NegativeQuantity { .. })
            | ApiError::Metrics(MetricsError::InvalidQuantity { .. }) => {
                (StatusCode::BAD_REQUEST, "INVALID_QUANTITY")
            }
            ApiError::Metrics(MetricsError::InvalidItemName) => {
                (StatusCode::BAD_REQUEST, "INVALID_ITEM_NAME")
            }
            ApiError::Metrics(MetricsError::UnknownItem(_)) => (StatusCode::NOT_FOUND, "UNKNOWN_ITEM"),
            ApiError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
            ApiError::Export(_) => (StatusCode::INTERNAL_SERVER_ERROR, "EXPORT_FAILED"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }

        let body = ErrorResponse {
            success: false,
            code,
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
