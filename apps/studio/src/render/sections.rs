//! Building blocks shared by the templates. Each template decides order,
//! headings and classes; these helpers only guarantee that every non-blank
//! field is written as its own escaped element.

use crate::models::resume::{
    EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, ResumeDocument, Skills,
};

use super::html::HtmlWriter;

/// Non-blank contact fields in display order, paired with a label.
pub fn contact_items(info: &PersonalInfo) -> Vec<(&'static str, &str)> {
    [
        ("Email", info.email.as_str()),
        ("Phone", info.phone.as_str()),
        ("Location", info.location.as_str()),
        ("Website", info.website.as_str()),
        ("LinkedIn", info.linkedin.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| !value.trim().is_empty())
    .collect()
}

/// Contact fields on one line, separated by `sep`.
pub fn contact_line(w: &mut HtmlWriter, info: &PersonalInfo, class: &str, sep: &str) {
    let items = contact_items(info);
    if items.is_empty() {
        return;
    }
    w.open("div", class);
    for (i, (_, value)) in items.iter().enumerate() {
        if i > 0 {
            w.text_el("span", "sep", sep);
        }
        w.text_el("span", "contact-item break-all", value);
    }
    w.close();
}

/// `<ul>` of the non-blank bullets; nothing at all when every bullet is blank.
pub fn bullet_list(w: &mut HtmlWriter, class: &str, bullets: &[String]) {
    if bullets.iter().all(|b| b.trim().is_empty()) {
        return;
    }
    w.open("ul", class);
    for bullet in bullets {
        w.text_el_nonblank("li", "", bullet);
    }
    w.close();
}

pub fn section_heading(w: &mut HtmlWriter, class: &str, title: &str) {
    w.text_el("h2", class, title);
}

pub fn has_summary(doc: &ResumeDocument) -> bool {
    !doc.summary.trim().is_empty()
}

pub fn has_skills(skills: &Skills) -> bool {
    skills.filled().next().is_some()
}

/// Position, company, duration and bullets of one job, in the stacked
/// "title left / duration right" arrangement.
pub fn experience_entry(w: &mut HtmlWriter, entry: &ExperienceEntry, accent: &str) {
    w.open("div", "entry mb-4");
    w.open("div", "flex justify-between items-start");
    w.open("div", "");
    w.text_el_nonblank("h3", "entry-title", &entry.position);
    w.text_el_nonblank("p", accent, &entry.company);
    w.close();
    w.text_el_nonblank("span", "duration", &entry.duration);
    w.close();
    bullet_list(w, "bullets ml-4 space-y-1", &entry.bullets);
    w.close();
}

pub fn project_entry(w: &mut HtmlWriter, entry: &ProjectEntry, accent: &str) {
    w.open("div", "entry mb-4");
    w.text_el_nonblank("h3", "entry-title", &entry.name);
    w.text_el_nonblank("p", accent, &entry.technologies);
    bullet_list(w, "bullets ml-4 space-y-1", &entry.bullets);
    w.close();
}

pub fn education_entry(w: &mut HtmlWriter, entry: &EducationEntry, accent: &str) {
    w.open("div", "entry mb-3");
    w.open("div", "flex justify-between items-start");
    w.open("div", "");
    w.text_el_nonblank("h3", "entry-title", &entry.degree);
    w.text_el_nonblank("p", accent, &entry.institution);
    w.close();
    w.text_el_nonblank("span", "duration", &entry.duration);
    w.close();
    if let Some(description) = &entry.description {
        w.text_el_nonblank("p", "entry-description", description);
    }
    w.close();
}

/// One row per filled category: a label followed by one element per item.
pub fn skill_rows(w: &mut HtmlWriter, skills: &Skills, row_class: &str, item_class: &str) {
    for (category, items) in skills.filled() {
        w.open("div", row_class);
        w.text_el("span", "skill-label", category.label());
        w.open("ul", "skill-items");
        for item in items {
            w.text_el("li", item_class, item);
        }
        w.close();
        w.close();
    }
}
