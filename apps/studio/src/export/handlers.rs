//! Axum route handler for PDF export.

use anyhow::Context;
use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::errors::AppError;
use crate::export::ExportOutcome;
use crate::render::handlers::parse_template_param;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub template: Option<String>,
}

/// POST /api/v1/export
///
/// The session lock is only held while rendering; conversion runs unlocked
/// and concurrent exports are not serialized.
pub async fn handle_export(
    State(state): State<AppState>,
    Query(params): Query<ExportQuery>,
) -> Result<Response, AppError> {
    let template = parse_template_param(params.template.as_deref())?;
    let (doc, rendered) = {
        let session = state.session.lock().await;
        (session.document().clone(), session.render(template))
    };

    let response = match state.exporter.export(&doc, &rendered).await {
        ExportOutcome::Downloaded { filename, pdf } => {
            let disposition = HeaderValue::from_str(&content_disposition(&filename))
                .context("Failed to build Content-Disposition header")?;
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                pdf,
            )
                .into_response()
        }
        ExportOutcome::PrintFallback { filename, reason } => (
            StatusCode::ACCEPTED,
            Json(json!({
                "status": "print_fallback",
                "filename": filename,
                "reason": reason,
            })),
        )
            .into_response(),
        ExportOutcome::Unavailable {
            filename,
            primary_error,
            fallback_error,
        } => (
            StatusCode::ACCEPTED,
            Json(json!({
                "status": "unavailable",
                "filename": filename,
                "reason": primary_error,
                "fallbackReason": fallback_error,
            })),
        )
            .into_response(),
    };
    Ok(response)
}

/// `attachment; filename="<ascii>"; filename*=UTF-8''<percent-encoded>`
pub fn content_disposition(filename: &str) -> String {
    let ascii: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii() && !c.is_ascii_control() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!(
        "attachment; filename=\"{ascii}\"; filename*=UTF-8''{}",
        urlencoding::encode(filename)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_disposition_plain_name() {
        assert_eq!(
            content_disposition("Jane Doe_Resume.pdf"),
            "attachment; filename=\"Jane Doe_Resume.pdf\"; filename*=UTF-8''Jane%20Doe_Resume.pdf"
        );
    }

    #[test]
    fn test_content_disposition_non_ascii_name() {
        let value = content_disposition("José_Resume.pdf");
        assert!(value.contains("filename=\"Jos__Resume.pdf\""));
        assert!(value.ends_with("filename*=UTF-8''Jos%C3%A9_Resume.pdf"));
        assert!(HeaderValue::from_str(&value).is_ok());
    }

    #[test]
    fn test_content_disposition_escapes_quotes_and_reserved_bytes() {
        let value = content_disposition("A \"B\"/C%_Resume.pdf");
        assert!(value.contains("filename=\"A _B_/C%_Resume.pdf\""));
        assert!(value.ends_with("filename*=UTF-8''A%20%22B%22%2FC%25_Resume.pdf"));
        assert!(HeaderValue::from_str(&value).is_ok());
    }
}
