//! Classic: serif type, ruled headings, education before experience.

use crate::models::resume::ResumeDocument;

use super::html::HtmlWriter;
use super::sections::{
    contact_line, education_entry, experience_entry, has_skills, has_summary, project_entry,
    section_heading, skill_rows,
};
use super::{ResumeTemplate, TemplateId};

pub struct Classic;

const HEADING: &str = "section-title border-b uppercase mb-2";

impl ResumeTemplate for Classic {
    fn id(&self) -> TemplateId {
        TemplateId::Classic
    }

    fn stylesheet(&self) -> &'static str {
        r#"
.resume-classic { font-family: 'Georgia', 'Times New Roman', serif; color: #111827; }
.resume-classic header { text-align: center; padding-bottom: 12px; border-bottom: 2px solid #111827; margin-bottom: 16px; }
.resume-classic h1 { font-size: 28px; letter-spacing: 0.08em; text-transform: uppercase; }
.resume-classic .contact { justify-content: center; gap: 6px; font-size: 13px; }
.resume-classic .section-title { font-size: 15px; letter-spacing: 0.1em; }
.resume-classic .entry-title { font-size: 14px; font-weight: 700; }
.resume-classic .company, .resume-classic .institution { font-style: italic; }
.resume-classic .skill-row { display: flex; gap: 6px; }
.resume-classic .skill-label { font-weight: 700; min-width: 90px; }
.resume-classic .skill-items { display: flex; flex-wrap: wrap; gap: 4px 12px; list-style: none; }
"#
    }

    fn render_body(&self, doc: &ResumeDocument, w: &mut HtmlWriter) {
        let info = &doc.personal_info;
        w.open("header", "border-b-2 mb-4");
        w.text_el_nonblank("h1", "leading-tight", &info.full_name);
        contact_line(w, info, "contact flex items-center", "|");
        w.close();

        if has_summary(doc) {
            w.open("section", "summary mb-4");
            section_heading(w, HEADING, "Summary");
            w.text_el("p", "leading-relaxed", &doc.summary);
            w.close();
        }

        if !doc.education.is_empty() {
            w.open("section", "education mb-4");
            section_heading(w, HEADING, "Education");
            for entry in &doc.education {
                education_entry(w, entry, "institution");
            }
            w.close();
        }

        if !doc.experience.is_empty() {
            w.open("section", "experience mb-4");
            section_heading(w, HEADING, "Professional Experience");
            for entry in &doc.experience {
                experience_entry(w, entry, "company");
            }
            w.close();
        }

        if !doc.projects.is_empty() {
            w.open("section", "projects mb-4");
            section_heading(w, HEADING, "Projects");
            for entry in &doc.projects {
                project_entry(w, entry, "technologies");
            }
            w.close();
        }

        if has_skills(&doc.skills) {
            w.open("section", "skills mb-4");
            section_heading(w, HEADING, "Skills");
            skill_rows(w, &doc.skills, "skill-row mb-2", "skill-item");
            w.close();
        }
    }
}
