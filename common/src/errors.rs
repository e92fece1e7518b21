use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde::Serialize;
use std::io;
use thiserror::Error;
/// HTTP 错误响应结构
#[derive(Serialize)]
struct ErrorResponse {
    code: u16,
    message: String,
}

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    // ==== 常规业务错误 ====
    #[error("{0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    Validation(String),

    #[error("File upload failed: {0}")]
    FileUpload(String),

    // ==== 系统错误 ====
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    pub fn client_not_found() -> Self {
        AppError::NotFound("Client not found".to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::FileUpload(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let msg = match self {
            // 404 只返回简单文本，不带结构化内容
            AppError::NotFound(msg) => {
                return HttpResponse::build(status).content_type("text/plain; charset=utf-8").body(msg.clone());
            }
            AppError::Validation(_) | AppError::FileUpload(_) => self.to_string(),
            AppError::Json(e) => {
                error!("{:?}", e);
                "Service error".to_string()
            }
            AppError::Io(e) => {
                error!("{:?}", e);
                "Service error".to_string()
            }
            AppError::Internal(e) => {
                error!("{:?}", e);
                "Service error".to_string()
            }
        };

        HttpResponse::build(status).json(ErrorResponse { code: status.as_u16(), message: msg })
    }
}
