//! Axum route handlers for the resume document.

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::editor::FormEdit;
use crate::errors::AppError;
use crate::models::resume::ResumeDocument;
use crate::state::AppState;

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeDocument> {
    let session = state.session.lock().await;
    Json(session.document().clone())
}

/// PUT /api/v1/resume
pub async fn handle_replace_resume(
    State(state): State<AppState>,
    Json(mut doc): Json<ResumeDocument>,
) -> Result<Json<ResumeDocument>, AppError> {
    let reissued = doc.ensure_unique_ids();
    if reissued > 0 {
        info!("Reissued {reissued} duplicate or blank entry ids in replacement document");
    }
    let mut session = state.session.lock().await;
    let saved = session.replace_document(doc).await?;
    Ok(Json(saved.clone()))
}

/// DELETE /api/v1/resume
pub async fn handle_clear_resume(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.session.lock().await.clear().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/resume/edits
pub async fn handle_apply_edit(
    State(state): State<AppState>,
    Json(edit): Json<FormEdit>,
) -> Result<Json<ResumeDocument>, AppError> {
    let mut session = state.session.lock().await;
    let doc = session.apply_edit(edit).await?;
    Ok(Json(doc.clone()))
}
