//! Export: turns the rendered preview region into a downloadable PDF.
//!
//! Primary path: hand the styled page to the [`DocumentConverter`].
//! On any failure there is exactly one fallback attempt: open the print
//! document in a [`Viewport`] so the user can print it themselves. If that
//! fails too the outcome is [`ExportOutcome::Unavailable`]; export never
//! returns an error to its caller.

pub mod converter;
pub mod handlers;
pub mod options;
pub mod print;
pub mod viewport;

use std::sync::Arc;

use bytes::Bytes;
use tracing::{error, info, warn};

use crate::models::resume::ResumeDocument;
use crate::render::{render_page, RenderedResume};

pub use converter::{ConvertError, DocumentConverter, GotenbergConverter};
pub use options::{export_filename, ExportOptions};
pub use print::build_print_document;
pub use viewport::{SystemBrowserViewport, Viewport, ViewportError};

#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    /// The converter produced the document.
    Downloaded { filename: String, pdf: Bytes },
    /// Conversion failed; the print document was opened instead.
    PrintFallback { filename: String, reason: String },
    /// Both paths failed. Logged only.
    Unavailable {
        filename: String,
        primary_error: String,
        fallback_error: String,
    },
}

pub struct Exporter {
    converter: Arc<dyn DocumentConverter>,
    viewport: Arc<dyn Viewport>,
    options: ExportOptions,
}

impl Exporter {
    pub fn new(converter: Arc<dyn DocumentConverter>, viewport: Arc<dyn Viewport>) -> Self {
        Self {
            converter,
            viewport,
            options: ExportOptions::default(),
        }
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Exports whatever `rendered` currently shows. `doc` only supplies the
    /// name used for the filename and page title.
    pub async fn export(&self, doc: &ResumeDocument, rendered: &RenderedResume) -> ExportOutcome {
        let filename = export_filename(&doc.personal_info.full_name);
        let title = doc.display_name().unwrap_or("Resume");
        let page = render_page(rendered, title);

        let primary_error = match self.converter.convert(&page, &self.options).await {
            Ok(pdf) => {
                info!(
                    "Exported {filename} ({} bytes, template {})",
                    pdf.len(),
                    rendered.template
                );
                return ExportOutcome::Downloaded { filename, pdf };
            }
            Err(e) => e.to_string(),
        };

        warn!("PDF conversion failed, falling back to print dialog: {primary_error}");
        let print_doc = build_print_document(doc.display_name(), &rendered.html);

        match self.viewport.open(print_doc).await {
            Ok(()) => {
                info!("Opened print fallback for {filename}");
                ExportOutcome::PrintFallback {
                    filename,
                    reason: primary_error,
                }
            }
            Err(e) => {
                error!("Print fallback failed for {filename}: {e}");
                ExportOutcome::Unavailable {
                    filename,
                    primary_error,
                    fallback_error: e.to_string(),
                }
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::testing::{FakeConverter, RecordingViewport};
    use super::*;
    use crate::models::resume::ExperienceEntry;
    use crate::render::{render_document, TemplateId};

    fn jane() -> ResumeDocument {
        let mut doc = ResumeDocument::default();
        doc.personal_info.full_name = "Jane Doe".to_string();
        doc.experience.push(ExperienceEntry {
            id: "x1".to_string(),
            position: "Engineer".to_string(),
            company: "Initech".to_string(),
            duration: "2020".to_string(),
            bullets: vec!["Shipped".to_string()],
        });
        doc
    }

    #[tokio::test]
    async fn test_successful_export_is_named_after_full_name() {
        let converter = Arc::new(FakeConverter::ok());
        let viewport = Arc::new(RecordingViewport::default());
        let exporter = Exporter::new(converter.clone(), viewport.clone());
        let doc = jane();
        let rendered = render_document(&doc, TemplateId::Modern);

        let outcome = exporter.export(&doc, &rendered).await;

        assert_eq!(
            outcome,
            ExportOutcome::Downloaded {
                filename: "Jane Doe_Resume.pdf".to_string(),
                pdf: Bytes::from_static(b"%PDF-1.7 fake"),
            }
        );
        assert!(viewport.opened.lock().unwrap().is_empty());
        let page = converter.last_page.lock().unwrap().clone().unwrap();
        assert!(page.contains(&rendered.html));
        assert!(page.contains(".resume-modern"));
    }

    #[tokio::test]
    async fn test_failed_conversion_opens_print_fallback_once() {
        let converter = Arc::new(FakeConverter::failing());
        let viewport = Arc::new(RecordingViewport::default());
        let exporter = Exporter::new(converter.clone(), viewport.clone());
        let doc = jane();
        let rendered = render_document(&doc, TemplateId::Professional);

        let outcome = exporter.export(&doc, &rendered).await;

        assert!(matches!(
            outcome,
            ExportOutcome::PrintFallback { ref filename, ref reason }
                if filename == "Jane Doe_Resume.pdf" && reason.contains("renderer crashed")
        ));
        assert_eq!(converter.calls.load(Ordering::SeqCst), 1);
        let opened = viewport.opened.lock().unwrap();
        assert_eq!(opened.len(), 1);
        assert!(opened[0].contains(&rendered.html));
        assert!(opened[0].contains("window.print()"));
    }

    #[tokio::test]
    async fn test_blocked_fallback_is_reported_not_raised() {
        let converter = Arc::new(FakeConverter::failing());
        let viewport = Arc::new(RecordingViewport {
            blocked: true,
            ..Default::default()
        });
        let exporter = Exporter::new(converter, viewport.clone());
        let doc = ResumeDocument::default();
        let rendered = render_document(&doc, TemplateId::Minimal);

        let outcome = exporter.export(&doc, &rendered).await;

        match outcome {
            ExportOutcome::Unavailable {
                filename,
                fallback_error,
                ..
            } => {
                assert_eq!(filename, "Resume_Resume.pdf");
                assert!(fallback_error.contains("popup blocked"));
            }
            other => panic!("expected Unavailable, got {other:?}"),
        }
        assert_eq!(viewport.opened.lock().unwrap().len(), 1);
    }
}
