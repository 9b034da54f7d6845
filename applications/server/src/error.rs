/// Server error types
use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use vinyl_core::VinylError;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// A repository call failed; `message` is what the client sees
    #[error("{message}: {source}")]
    Store {
        message: &'static str,
        status: StatusCode,
        #[source]
        source: VinylError,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ServerError {
    /// Translate a repository failure. Validation failures always become 400
    /// with their own message; anything else gets `status` and `message`.
    pub fn store(source: VinylError, message: &'static str, status: StatusCode) -> Self {
        match source {
            VinylError::Validation(msg) => ServerError::BadRequest(msg),
            source => ServerError::Store {
                message,
                status,
                source,
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ServerError::Store { status, .. } => *status,
            ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<VinylError> for ServerError {
    fn from(err: VinylError) -> Self {
        ServerError::store(err, "internal server error", StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<QueryRejection> for ServerError {
    fn from(rejection: QueryRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            ServerError::BadRequest(msg) | ServerError::NotFound(msg) => msg,
            ServerError::MethodNotAllowed => "method not allowed".to_string(),
            ServerError::Store {
                message,
                ref source,
                ..
            } => {
                tracing::error!("{}: {:?}", message, source);
                message.to_string()
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                "Configuration error".to_string()
            }
        };

        let body = Json(json!({
            "errors": error_message,
        }));

        (status, body).into_response()
    }
}
