use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

/// Startup configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY must be set (environment or .env file)")]
    MissingApiKey,

    #[error("invalid bind address {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Problems with the uploaded image, detected before any model call.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("no `image` field in upload")]
    MissingImage,

    #[error("malformed multipart body: {0}")]
    Multipart(#[from] MultipartError),

    #[error("unsupported image format; expected PNG or JPEG")]
    UnsupportedFormat,

    #[error("could not decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("could not re-encode image: {0}")]
    Encode(#[source] image::ImageError),

    #[error("image processing task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

impl UploadError {
    pub fn status(&self) -> StatusCode {
        match self {
            UploadError::Multipart(err) => err.status(),
            UploadError::Encode(_) | UploadError::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "rejected upload");
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Failures talking to the hosted chat-completion endpoint.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("invalid JSON in model response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no message content in model response")]
    MissingContent,
}

/// Reasons an analysis run stops early.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("evaluation of {title} failed: {source}")]
    Bridge { title: String, source: ModelError },

    #[error("summary synthesis failed: {0}")]
    Synthesis(#[source] ModelError),
}

impl AnalysisError {
    /// Text safe to show on the page. Upstream response bodies stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AnalysisError::Bridge { title, .. } => {
                format!("El análisis no pudo completarse ({title}).")
            }
            AnalysisError::Synthesis(_) => {
                "El análisis no pudo completarse (síntesis final).".to_string()
            }
        }
    }
}
