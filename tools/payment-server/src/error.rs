use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Payment gateway not configured")]
    MissingCredentials,

    #[error("Gateway refused the session ({status}): {body}")]
    Gateway { status: u16, body: String },

    #[error("Gateway unreachable: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MalformedPayload { .. } => StatusCode::BAD_REQUEST,
            AppError::MissingCredentials => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Gateway { .. } | AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        };

        (status, self.to_string()).into_response()
    }
}
