//! Minimal: one plain column, no color, skills inline.

use crate::models::resume::ResumeDocument;

use super::html::HtmlWriter;
use super::sections::{bullet_list, contact_items, has_skills, has_summary, section_heading};
use super::{ResumeTemplate, TemplateId};

pub struct Minimal;

const HEADING: &str = "section-title mb-2";

impl ResumeTemplate for Minimal {
    fn id(&self) -> TemplateId {
        TemplateId::Minimal
    }

    fn stylesheet(&self) -> &'static str {
        r#"
.resume-minimal { font-family: 'Helvetica Neue', Arial, sans-serif; color: #262626; font-size: 13px; }
.resume-minimal h1 { font-size: 24px; font-weight: 300; margin-bottom: 4px; }
.resume-minimal .contact { color: #525252; }
.resume-minimal .section-title { font-size: 12px; font-weight: 600; color: #737373; letter-spacing: 0.15em; text-transform: uppercase; }
.resume-minimal .line { display: flex; gap: 6px; flex-wrap: wrap; }
.resume-minimal .muted { color: #737373; }
.resume-minimal .skill-items { display: inline; list-style: none; }
.resume-minimal .skill-items li { display: inline; }
.resume-minimal .skill-items li + li::before { content: ", "; }
"#
    }

    fn render_body(&self, doc: &ResumeDocument, w: &mut HtmlWriter) {
        let info = &doc.personal_info;
        w.open("header", "mb-6");
        w.text_el_nonblank("h1", "", &info.full_name);
        let contacts = contact_items(info);
        if !contacts.is_empty() {
            w.open("ul", "contact space-y-1");
            for (_, value) in contacts {
                w.text_el("li", "break-all", value);
            }
            w.close();
        }
        w.close();

        if has_summary(doc) {
            w.open("section", "summary mb-6");
            w.text_el("p", "leading-relaxed", &doc.summary);
            w.close();
        }

        if !doc.experience.is_empty() {
            w.open("section", "experience mb-6");
            section_heading(w, HEADING, "Experience");
            for entry in &doc.experience {
                w.open("div", "entry mb-3");
                w.open("div", "line");
                w.text_el_nonblank("strong", "", &entry.position);
                w.text_el_nonblank("span", "company", &entry.company);
                w.text_el_nonblank("span", "duration muted", &entry.duration);
                w.close();
                bullet_list(w, "bullets ml-4", &entry.bullets);
                w.close();
            }
            w.close();
        }

        if !doc.education.is_empty() {
            w.open("section", "education mb-6");
            section_heading(w, HEADING, "Education");
            for entry in &doc.education {
                w.open("div", "entry mb-2");
                w.open("div", "line");
                w.text_el_nonblank("strong", "", &entry.degree);
                w.text_el_nonblank("span", "institution", &entry.institution);
                w.text_el_nonblank("span", "duration muted", &entry.duration);
                w.close();
                if let Some(description) = &entry.description {
                    w.text_el_nonblank("p", "muted", description);
                }
                w.close();
            }
            w.close();
        }

        if !doc.projects.is_empty() {
            w.open("section", "projects mb-6");
            section_heading(w, HEADING, "Projects");
            for entry in &doc.projects {
                w.open("div", "entry mb-3");
                w.open("div", "line");
                w.text_el_nonblank("strong", "", &entry.name);
                w.text_el_nonblank("span", "technologies muted", &entry.technologies);
                w.close();
                bullet_list(w, "bullets ml-4", &entry.bullets);
                w.close();
            }
            w.close();
        }

        if has_skills(&doc.skills) {
            w.open("section", "skills mb-6");
            section_heading(w, HEADING, "Skills");
            for (category, items) in doc.skills.filled() {
                w.open("div", "skill-line mb-2");
                w.text_el("span", "skill-label", category.label());
                w.open("ul", "skill-items");
                for item in items {
                    w.text_el("li", "", item);
                }
                w.close();
                w.close();
            }
            w.close();
        }
    }
}
