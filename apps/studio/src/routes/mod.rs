pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::editor::handlers as resume;
use crate::export::handlers as export;
use crate::render::handlers as preview;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume document
        .route(
            "/api/v1/resume",
            get(resume::handle_get_resume)
                .put(resume::handle_replace_resume)
                .delete(resume::handle_clear_resume),
        )
        .route("/api/v1/resume/edits", post(resume::handle_apply_edit))
        // View toggle and template selection
        .route("/api/v1/session", get(session::handle_get_session))
        .route("/api/v1/session/view", put(session::handle_set_view))
        .route(
            "/api/v1/session/view/toggle",
            post(session::handle_toggle_view),
        )
        .route(
            "/api/v1/session/template",
            put(session::handle_select_template),
        )
        // Preview and export
        .route("/api/v1/templates", get(preview::handle_list_templates))
        .route("/api/v1/preview", get(preview::handle_preview))
        .route("/api/v1/export", post(export::handle_export))
        .with_state(state)
}
