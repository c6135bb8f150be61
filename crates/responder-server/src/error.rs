use actix_web::error::{BlockingError, JsonPayloadError, ResponseError, UrlencodedError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use responder_core::CoreError;
use responder_store::StoreError;
use serde::Serialize;
use thiserror::Error;

/// JSON body for 4xx/5xx responses other than not-found.
#[derive(Debug, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: &'static str, detail: String },
    #[error("Not found: {detail}")]
    NotFound { detail: String },
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    pub fn invalid(code: &'static str, detail: String) -> Self {
        Self::Validation { code, detail }
    }

    /// Not-found responses carry `detail` verbatim as a plain-text body.
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::NotFound { .. } => "NOT_FOUND",
            AppError::Storage(e) if e.is_read() => "STORAGE_READ",
            AppError::Storage(_) => "STORAGE_WRITE",
            AppError::Internal { .. } => "INTERNAL",
        }
    }

    fn detail(&self) -> String {
        match self {
            AppError::Validation { detail, .. } => detail.clone(),
            AppError::NotFound { detail } => detail.clone(),
            AppError::Storage(e) => e.to_string(),
            AppError::Internal { detail } => detail.clone(),
        }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<CoreError> for AppError {
    fn from(e: CoreError) -> Self {
        AppError::invalid("VALIDATION_ERROR", e.to_string())
    }
}

impl From<BlockingError> for AppError {
    fn from(e: BlockingError) -> Self {
        AppError::internal(format!("blocking task failed: {e}"))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if let AppError::NotFound { detail } = self {
            return HttpResponse::build(status)
                .content_type("text/plain; charset=utf-8")
                .body(detail.clone());
        }

        if status.is_server_error() {
            tracing::error!(code = self.code(), error = %self, "request failed");
        }

        let code = self.code();
        let problem = ProblemDetails {
            type_: format!("/errors/{}", code.to_lowercase().replace('_', "-")),
            title: Self::humanize_code(code),
            status: status.as_u16(),
            detail: self.detail(),
            code: code.to_string(),
        };

        HttpResponse::build(status)
            .content_type("application/problem+json")
            .json(problem)
    }
}

/// Turns body extraction failures into 400 problem responses.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let code = match err {
        JsonPayloadError::ContentType => "UNSUPPORTED_CONTENT_TYPE",
        JsonPayloadError::Deserialize(_) => "INVALID_BODY",
        _ => "BAD_REQUEST",
    };
    AppError::invalid(code, err.to_string()).into()
}

/// Same as `json_error_handler` for urlencoded form bodies.
pub fn form_error_handler(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    let code = match err {
        UrlencodedError::ContentType => "UNSUPPORTED_CONTENT_TYPE",
        UrlencodedError::Parse(_) => "INVALID_BODY",
        _ => "BAD_REQUEST",
    };
    AppError::invalid(code, err.to_string()).into()
}
