use std::sync::Arc;

use axum::{
    body::Body,
    extract::{DefaultBodyLimit, Multipart, State},
    http::header,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tokio::sync::mpsc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::error;

use crate::analysis::{AnalysisEvent, Analyzer};
use crate::error::UploadError;
use crate::image_payload::ImagePayload;
use crate::model::ChatModel;
use crate::page;

pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
/// Branding SVGs, resolved against the working directory.
pub const ASSETS_DIR: &str = "assets";

pub struct AppState<M> {
    pub analyzer: Analyzer<M>,
}

pub fn router<M: ChatModel>(state: AppState<M>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/analyze", post(analyze::<M>))
        .nest_service("/assets", ServeDir::new(ASSETS_DIR))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .with_state(Arc::new(state))
}

async fn index() -> Html<&'static str> {
    Html(page::INDEX_HTML)
}

/// Validates the upload, then streams the run as newline-delimited JSON.
///
/// Upload problems are answered with a 4xx before any model call is made.
async fn analyze<M: ChatModel>(
    State(state): State<Arc<AppState<M>>>,
    mut multipart: Multipart,
) -> Result<Response, UploadError> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("image") {
            upload = Some(field.bytes().await?);
            break;
        }
    }
    let bytes = upload.ok_or(UploadError::MissingImage)?;
    let payload = tokio::task::spawn_blocking(move || ImagePayload::from_upload(&bytes)).await??;

    let (tx, rx) = mpsc::unbounded_channel();
    let analyzer = state.analyzer.clone();
    tokio::spawn(async move {
        if let Err(err) = analyzer.run(&payload, &tx).await {
            error!(error = %err, "analysis run aborted");
            let _ = tx.send(AnalysisEvent::Failed {
                message: err.public_message(),
            });
        }
    });

    let lines = futures::stream::unfold(rx, |mut rx| async move {
        let event = rx.recv().await?;
        Some((encode_line(&event), rx))
    });

    Ok((
        [(header::CONTENT_TYPE, "application/x-ndjson")],
        Body::from_stream(lines),
    )
        .into_response())
}

fn encode_line(event: &AnalysisEvent) -> Result<Vec<u8>, serde_json::Error> {
    let mut line = serde_json::to_vec(event)?;
    line.push(b'\n');
    Ok(line)
}
