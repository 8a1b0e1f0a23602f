//! Professional: dark header band with a sidebar for contact, skills and
//! education next to a main column for summary, experience and projects.

use crate::models::resume::ResumeDocument;

use super::html::HtmlWriter;
use super::sections::{
    contact_items, experience_entry, has_skills, has_summary, project_entry, section_heading,
    skill_rows,
};
use super::{ResumeTemplate, TemplateId};

pub struct Professional;

const SIDEBAR_HEADING: &str = "section-title uppercase tracking-wide border-b mb-2";
const MAIN_HEADING: &str = "section-title text-slate-800 border-b-2 mb-3";

impl ResumeTemplate for Professional {
    fn id(&self) -> TemplateId {
        TemplateId::Professional
    }

    fn stylesheet(&self) -> &'static str {
        r#"
.resume-professional { font-family: 'Segoe UI', Roboto, sans-serif; color: #1e293b; }
.resume-professional .masthead { background: #1e293b; color: #ffffff; }
.resume-professional .masthead h1 { font-size: 30px; font-weight: 700; }
.resume-professional .columns { display: flex; gap: 24px; }
.resume-professional .sidebar { background: #f1f5f9; padding: 16px; font-size: 13px; }
.resume-professional .main { padding: 16px 0; }
.resume-professional .contact-label { display: block; font-size: 11px; color: #64748b; text-transform: uppercase; }
.resume-professional .skill-row { margin-bottom: 8px; }
.resume-professional .skill-label { font-weight: 600; }
.resume-professional .skill-items { list-style: none; }
"#
    }

    fn render_body(&self, doc: &ResumeDocument, w: &mut HtmlWriter) {
        let info = &doc.personal_info;
        w.open("div", "masthead bg-slate-800 p-8");
        w.text_el_nonblank("h1", "leading-tight", &info.full_name);
        w.close();

        w.open("div", "columns flex items-start");

        w.open("aside", "sidebar w-1/3");
        let contacts = contact_items(info);
        if !contacts.is_empty() {
            w.open("section", "contact mb-6");
            section_heading(w, SIDEBAR_HEADING, "Contact");
            for (label, value) in contacts {
                w.open("div", "mb-2");
                w.text_el("span", "contact-label", label);
                w.text_el("span", "contact-item break-all", value);
                w.close();
            }
            w.close();
        }
        if has_skills(&doc.skills) {
            w.open("section", "skills mb-6");
            section_heading(w, SIDEBAR_HEADING, "Skills");
            skill_rows(w, &doc.skills, "skill-row", "skill-item");
            w.close();
        }
        if !doc.education.is_empty() {
            w.open("section", "education mb-6");
            section_heading(w, SIDEBAR_HEADING, "Education");
            for entry in &doc.education {
                w.open("div", "entry mb-3");
                w.text_el_nonblank("h3", "entry-title", &entry.degree);
                w.text_el_nonblank("p", "institution", &entry.institution);
                w.text_el_nonblank("p", "duration", &entry.duration);
                if let Some(description) = &entry.description {
                    w.text_el_nonblank("p", "entry-description", description);
                }
                w.close();
            }
            w.close();
        }
        w.close();

        w.open("main", "main w-2/3");
        if has_summary(doc) {
            w.open("section", "summary mb-6");
            section_heading(w, MAIN_HEADING, "Profile");
            w.text_el("p", "leading-relaxed text-justify", &doc.summary);
            w.close();
        }
        if !doc.experience.is_empty() {
            w.open("section", "experience mb-6");
            section_heading(w, MAIN_HEADING, "Work Experience");
            for entry in &doc.experience {
                experience_entry(w, entry, "company text-blue-600");
            }
            w.close();
        }
        if !doc.projects.is_empty() {
            w.open("section", "projects mb-6");
            section_heading(w, MAIN_HEADING, "Key Projects");
            for entry in &doc.projects {
                project_entry(w, entry, "technologies text-blue-600");
            }
            w.close();
        }
        w.close();

        w.close();
    }
}
