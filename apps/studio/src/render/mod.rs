//! Template rendering: a pure function from (document, template) to markup.
//!
//! All templates present the same fields; they differ only in arrangement and
//! styling. Rendering borrows the document immutably and always recomputes
//! the whole region, so the same input always yields byte-identical output.

pub mod classic;
pub mod handlers;
pub mod html;
pub mod minimal;
pub mod modern;
pub mod professional;
pub mod sections;
pub mod text;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::resume::ResumeDocument;

use self::html::{escape, HtmlWriter};

pub use text::extract_text;

/// Element id of the rendered region; the exporter always works from it.
pub const PREVIEW_REGION_ID: &str = "resume-preview";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    #[default]
    Modern,
    Classic,
    Minimal,
    Professional,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown template '{0}' (expected modern, classic, minimal or professional)")]
pub struct UnknownTemplate(pub String);

/// One entry of the template showcase.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateInfo {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
}

impl TemplateId {
    pub const ALL: [TemplateId; 4] = [
        TemplateId::Modern,
        TemplateId::Classic,
        TemplateId::Minimal,
        TemplateId::Professional,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Modern => "modern",
            TemplateId::Classic => "classic",
            TemplateId::Minimal => "minimal",
            TemplateId::Professional => "professional",
        }
    }

    pub fn info(&self) -> TemplateInfo {
        let (name, description) = match self {
            TemplateId::Modern => ("Modern", "Clean layout with blue accents"),
            TemplateId::Classic => ("Classic", "Traditional serif layout with ruled headings"),
            TemplateId::Minimal => ("Minimal", "Simple single column, no color"),
            TemplateId::Professional => ("Professional", "Dark header with a two-column body"),
        };
        TemplateInfo {
            id: *self,
            name,
            description,
        }
    }

    pub fn catalog() -> Vec<TemplateInfo> {
        Self::ALL.iter().map(TemplateId::info).collect()
    }

    fn template(&self) -> &'static dyn ResumeTemplate {
        match self {
            TemplateId::Modern => &modern::Modern,
            TemplateId::Classic => &classic::Classic,
            TemplateId::Minimal => &minimal::Minimal,
            TemplateId::Professional => &professional::Professional,
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| UnknownTemplate(s.to_string()))
    }
}

/// A single visual arrangement of the resume fields.
pub trait ResumeTemplate: Send + Sync {
    fn id(&self) -> TemplateId;

    /// Screen styles scoped under `.resume-<id>`.
    fn stylesheet(&self) -> &'static str;

    /// Writes the region's contents. Must present every non-blank field.
    fn render_body(&self, doc: &ResumeDocument, w: &mut HtmlWriter);
}

/// Output of one render: the preview region's markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResume {
    pub template: TemplateId,
    pub html: String,
}

/// Renders the preview region for `doc` with the chosen template.
pub fn render_document(doc: &ResumeDocument, template: TemplateId) -> RenderedResume {
    let renderer = template.template();
    debug_assert_eq!(renderer.id(), template);
    let class = format!("resume resume-{template}");
    let mut w = HtmlWriter::new();
    w.open_with(
        "div",
        &class,
        &[("id", PREVIEW_REGION_ID), ("data-template", template.as_str())],
    );
    renderer.render_body(doc, &mut w);
    RenderedResume {
        template,
        html: w.finish(),
    }
}

const BASE_CSS: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body { background: #f8fafc; }
.resume { max-width: 800px; min-height: 1100px; margin: 24px auto; padding: 40px; background: #ffffff; line-height: 1.4; }
.flex { display: flex; }
.justify-between { justify-content: space-between; }
.items-start { align-items: flex-start; }
.items-center { align-items: center; }
.w-1\/3 { width: 33.333%; }
.w-2\/3 { width: 66.667%; }
.mb-2 { margin-bottom: 8px; } .mb-3 { margin-bottom: 12px; } .mb-4 { margin-bottom: 16px; } .mb-6 { margin-bottom: 24px; }
.ml-4 { margin-left: 16px; }
.p-8 { padding: 32px; }
.space-y-1 > * + * { margin-top: 4px; }
.border-b { border-bottom: 1px solid #64748b; }
.border-b-2 { border-bottom: 2px solid #2563eb; padding-bottom: 2px; }
.text-blue-600 { color: #2563eb; }
.text-slate-800 { color: #1e293b; }
.bg-slate-800 { background-color: #1e293b; color: #ffffff; }
.uppercase { text-transform: uppercase; }
.tracking-wide { letter-spacing: 0.05em; }
.leading-tight { line-height: 1.2; }
.leading-relaxed { line-height: 1.6; }
.text-justify { text-align: justify; }
.break-all { word-break: break-all; }
.duration { white-space: nowrap; color: #64748b; font-size: 13px; }
"#;

/// Wraps the region in a standalone page carrying the template's screen styles.
pub fn render_page(rendered: &RenderedResume, title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{}{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        BASE_CSS,
        rendered.template.template().stylesheet(),
        rendered.html
    )
}
