//! Modern: centered header, blue accent headings, experience first.

use crate::models::resume::ResumeDocument;

use super::html::HtmlWriter;
use super::sections::{
    bullet_list, contact_line, education_entry, experience_entry, has_skills, has_summary,
    section_heading, skill_rows,
};
use super::{ResumeTemplate, TemplateId};

pub struct Modern;

const HEADING: &str = "section-title text-blue-600 border-b-2 uppercase tracking-wide mb-3";

impl ResumeTemplate for Modern {
    fn id(&self) -> TemplateId {
        TemplateId::Modern
    }

    fn stylesheet(&self) -> &'static str {
        r#"
.resume-modern { font-family: 'Inter', 'Segoe UI', sans-serif; color: #1e293b; }
.resume-modern header { text-align: center; margin-bottom: 24px; }
.resume-modern h1 { font-size: 30px; font-weight: 700; color: #1e293b; }
.resume-modern .contact { justify-content: center; gap: 8px; color: #475569; font-size: 13px; }
.resume-modern .section-title { font-size: 16px; font-weight: 700; }
.resume-modern .entry-title { font-size: 15px; font-weight: 600; }
.resume-modern .skill-row { display: flex; gap: 8px; margin-bottom: 6px; }
.resume-modern .skill-tag { background: #dbeafe; color: #1e40af; border-radius: 9999px; padding: 1px 10px; }
"#
    }

    fn render_body(&self, doc: &ResumeDocument, w: &mut HtmlWriter) {
        let info = &doc.personal_info;
        w.open("header", "mb-6");
        w.text_el_nonblank("h1", "text-slate-800 leading-tight", &info.full_name);
        contact_line(w, info, "contact flex items-center", "•");
        w.close();

        if has_summary(doc) {
            w.open("section", "summary mb-6");
            section_heading(w, HEADING, "Professional Summary");
            w.text_el("p", "leading-relaxed text-justify", &doc.summary);
            w.close();
        }

        if !doc.experience.is_empty() {
            w.open("section", "experience mb-6");
            section_heading(w, HEADING, "Experience");
            for entry in &doc.experience {
                experience_entry(w, entry, "company text-blue-600");
            }
            w.close();
        }

        if !doc.projects.is_empty() {
            w.open("section", "projects mb-6");
            section_heading(w, HEADING, "Projects");
            for entry in &doc.projects {
                w.open("div", "entry mb-4");
                w.open("div", "flex justify-between items-start");
                w.text_el_nonblank("h3", "entry-title", &entry.name);
                w.text_el_nonblank("span", "technologies text-blue-600", &entry.technologies);
                w.close();
                bullet_list(w, "bullets ml-4 space-y-1", &entry.bullets);
                w.close();
            }
            w.close();
        }

        if !doc.education.is_empty() {
            w.open("section", "education mb-6");
            section_heading(w, HEADING, "Education");
            for entry in &doc.education {
                education_entry(w, entry, "institution text-blue-600");
            }
            w.close();
        }

        if has_skills(&doc.skills) {
            w.open("section", "skills mb-6");
            section_heading(w, HEADING, "Skills");
            skill_rows(w, &doc.skills, "skill-row", "skill-tag");
            w.close();
        }
    }
}
