//! Axum route handlers for previews and the template showcase.

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::render::{extract_text, render_page, TemplateId, TemplateInfo};
use crate::state::AppState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewFormat {
    #[default]
    Html,
    Text,
}

#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    pub template: Option<String>,
    #[serde(default)]
    pub format: PreviewFormat,
}

#[derive(Debug, Serialize)]
pub struct TextPreview {
    pub template: TemplateId,
    pub lines: Vec<String>,
}

/// Parses an optional `?template=` value.
pub fn parse_template_param(raw: Option<&str>) -> Result<Option<TemplateId>, AppError> {
    raw.filter(|s| !s.trim().is_empty())
        .map(str::parse::<TemplateId>)
        .transpose()
        .map_err(AppError::from)
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<Vec<TemplateInfo>> {
    Json(TemplateId::catalog())
}

/// GET /api/v1/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Query(params): Query<PreviewQuery>,
) -> Result<Response, AppError> {
    let template = parse_template_param(params.template.as_deref())?;
    let session = state.session.lock().await;
    let rendered = session.render(template);

    Ok(match params.format {
        PreviewFormat::Html => {
            let title = session.document().display_name().unwrap_or("Resume");
            Html(render_page(&rendered, title)).into_response()
        }
        PreviewFormat::Text => Json(TextPreview {
            template: rendered.template,
            lines: extract_text(&rendered.html),
        })
        .into_response(),
    })
}
