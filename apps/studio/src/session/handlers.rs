//! Axum route handlers for the view toggle and template selection.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::render::TemplateId;
use crate::session::{Session, ViewMode};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub view: ViewMode,
    pub template: TemplateId,
    pub store_backend: &'static str,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            view: session.view(),
            template: session.template(),
            store_backend: session.store_backend(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ViewRequest {
    pub view: ViewMode,
}

#[derive(Debug, Deserialize)]
pub struct TemplateRequest {
    pub template: TemplateId,
}

/// GET /api/v1/session
pub async fn handle_get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let session = state.session.lock().await;
    Json(SessionResponse::from(&*session))
}

/// PUT /api/v1/session/view
pub async fn handle_set_view(
    State(state): State<AppState>,
    Json(req): Json<ViewRequest>,
) -> Json<SessionResponse> {
    let mut session = state.session.lock().await;
    session.set_view(req.view);
    Json(SessionResponse::from(&*session))
}

/// POST /api/v1/session/view/toggle
pub async fn handle_toggle_view(State(state): State<AppState>) -> Json<SessionResponse> {
    let mut session = state.session.lock().await;
    session.toggle_view();
    Json(SessionResponse::from(&*session))
}

/// PUT /api/v1/session/template
pub async fn handle_select_template(
    State(state): State<AppState>,
    Json(req): Json<TemplateRequest>,
) -> Json<SessionResponse> {
    let mut session = state.session.lock().await;
    session.select_template(req.template);
    Json(SessionResponse::from(&*session))
}
