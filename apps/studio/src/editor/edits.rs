//! Form edits. Every user edit becomes one `FormEdit`, and applying it
//! yields a brand-new document that replaces the old one wholesale.
//!
//! The editor knows nothing about rendering or storage.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::resume::{
    new_entry_id, EducationEntry, ExperienceEntry, ProjectEntry, ResumeDocument, SkillCategory,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("No {section} entry with id '{id}'")]
    UnknownEntry { section: &'static str, id: String },

    #[error("Index {index} is out of range for a list of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalField {
    FullName,
    Email,
    Phone,
    Website,
    Linkedin,
    Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceField {
    Position,
    Company,
    Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    Degree,
    Institution,
    Duration,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectField {
    Name,
    Technologies,
}

/// Entries that carry a bullet list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum BulletTarget {
    Experience { id: String },
    Project { id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum FormEdit {
    SetPersonal { field: PersonalField, value: String },
    SetSummary { value: String },

    AddExperience,
    SetExperience { id: String, field: ExperienceField, value: String },
    RemoveExperience { id: String },

    AddEducation,
    SetEducation { id: String, field: EducationField, value: String },
    RemoveEducation { id: String },

    AddProject,
    SetProject { id: String, field: ProjectField, value: String },
    RemoveProject { id: String },

    AddBullet { target: BulletTarget },
    SetBullet { target: BulletTarget, index: usize, value: String },
    RemoveBullet { target: BulletTarget, index: usize },

    AddSkill { category: SkillCategory, value: String },
    RemoveSkill { category: SkillCategory, index: usize },
    SetSkills { category: SkillCategory, items: Vec<String> },
    /// Comma-separated text as typed into a single skills input.
    SetSkillsText { category: SkillCategory, text: String },

    Reset,
}

/// Applies one edit and returns the replacement document.
/// The input document is left untouched.
pub fn apply_edit(doc: &ResumeDocument, edit: FormEdit) -> Result<ResumeDocument, EditError> {
    let mut next = doc.clone();

    match edit {
        FormEdit::SetPersonal { field, value } => {
            let info = &mut next.personal_info;
            let slot = match field {
                PersonalField::FullName => &mut info.full_name,
                PersonalField::Email => &mut info.email,
                PersonalField::Phone => &mut info.phone,
                PersonalField::Website => &mut info.website,
                PersonalField::Linkedin => &mut info.linkedin,
                PersonalField::Location => &mut info.location,
            };
            *slot = value;
        }
        FormEdit::SetSummary { value } => next.summary = value,

        FormEdit::AddExperience => next.experience.push(ExperienceEntry {
            id: new_entry_id(),
            bullets: vec![String::new()],
            ..Default::default()
        }),
        FormEdit::SetExperience { id, field, value } => {
            let entry = find_entry(&mut next.experience, "experience", &id, |e| &e.id)?;
            match field {
                ExperienceField::Position => entry.position = value,
                ExperienceField::Company => entry.company = value,
                ExperienceField::Duration => entry.duration = value,
            }
        }
        FormEdit::RemoveExperience { id } => {
            remove_entry(&mut next.experience, "experience", &id, |e| &e.id)?
        }

        FormEdit::AddEducation => next.education.push(EducationEntry {
            id: new_entry_id(),
            ..Default::default()
        }),
        FormEdit::SetEducation { id, field, value } => {
            let entry = find_entry(&mut next.education, "education", &id, |e| &e.id)?;
            match field {
                EducationField::Degree => entry.degree = value,
                EducationField::Institution => entry.institution = value,
                EducationField::Duration => entry.duration = value,
                EducationField::Description => {
                    entry.description = (!value.is_empty()).then_some(value)
                }
            }
        }
        FormEdit::RemoveEducation { id } => {
            remove_entry(&mut next.education, "education", &id, |e| &e.id)?
        }

        FormEdit::AddProject => next.projects.push(ProjectEntry {
            id: new_entry_id(),
            bullets: vec![String::new()],
            ..Default::default()
        }),
        FormEdit::SetProject { id, field, value } => {
            let entry = find_entry(&mut next.projects, "project", &id, |e| &e.id)?;
            match field {
                ProjectField::Name => entry.name = value,
                ProjectField::Technologies => entry.technologies = value,
            }
        }
        FormEdit::RemoveProject { id } => {
            remove_entry(&mut next.projects, "project", &id, |e| &e.id)?
        }

        FormEdit::AddBullet { target } => bullets_mut(&mut next, &target)?.push(String::new()),
        FormEdit::SetBullet {
            target,
            index,
            value,
        } => {
            let bullets = bullets_mut(&mut next, &target)?;
            *item_mut(bullets, index)? = value;
        }
        FormEdit::RemoveBullet { target, index } => {
            let bullets = bullets_mut(&mut next, &target)?;
            item_mut(bullets, index)?;
            bullets.remove(index);
        }

        FormEdit::AddSkill { category, value } => next.skills.get_mut(category).push(value),
        FormEdit::RemoveSkill { category, index } => {
            let items = next.skills.get_mut(category);
            item_mut(items, index)?;
            items.remove(index);
        }
        FormEdit::SetSkills { category, items } => *next.skills.get_mut(category) = items,
        FormEdit::SetSkillsText { category, text } => {
            *next.skills.get_mut(category) = split_skills(&text)
        }

        FormEdit::Reset => next = ResumeDocument::default(),
    }

    Ok(next)
}

/// Splits comma-separated skills, trimming each item and dropping blanks.
pub fn split_skills(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn find_entry<'a, T>(
    entries: &'a mut [T],
    section: &'static str,
    id: &str,
    id_of: impl Fn(&T) -> &String,
) -> Result<&'a mut T, EditError> {
    entries
        .iter_mut()
        .find(|e| id_of(e) == id)
        .ok_or_else(|| EditError::UnknownEntry {
            section,
            id: id.to_string(),
        })
}

fn remove_entry<T>(
    entries: &mut Vec<T>,
    section: &'static str,
    id: &str,
    id_of: impl Fn(&T) -> &String,
) -> Result<(), EditError> {
    let pos = entries
        .iter()
        .position(|e| id_of(e) == id)
        .ok_or_else(|| EditError::UnknownEntry {
            section,
            id: id.to_string(),
        })?;
    entries.remove(pos);
    Ok(())
}

fn bullets_mut<'a>(
    doc: &'a mut ResumeDocument,
    target: &BulletTarget,
) -> Result<&'a mut Vec<String>, EditError> {
    match target {
        BulletTarget::Experience { id } => {
            Ok(&mut find_entry(&mut doc.experience, "experience", id, |e| &e.id)?.bullets)
        }
        BulletTarget::Project { id } => {
            Ok(&mut find_entry(&mut doc.projects, "project", id, |e| &e.id)?.bullets)
        }
    }
}

fn item_mut(items: &mut [String], index: usize) -> Result<&mut String, EditError> {
    let len = items.len();
    items
        .get_mut(index)
        .ok_or(EditError::IndexOutOfRange { index, len })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn with_experience() -> (ResumeDocument, String) {
        let doc = apply_edit(&ResumeDocument::default(), FormEdit::AddExperience).unwrap();
        let id = doc.experience[0].id.clone();
        (doc, id)
    }

    #[test]
    fn test_apply_edit_does_not_mutate_input() {
        let doc = ResumeDocument::default();
        let next = apply_edit(
            &doc,
            FormEdit::SetSummary {
                value: "Hello".to_string(),
            },
        )
        .unwrap();
        assert_eq!(doc.summary, "");
        assert_eq!(next.summary, "Hello");
    }

    #[test]
    fn test_set_personal_targets_single_field() {
        let next = apply_edit(
            &ResumeDocument::default(),
            FormEdit::SetPersonal {
                field: PersonalField::Linkedin,
                value: "linkedin.com/in/jane".to_string(),
            },
        )
        .unwrap();
        assert_eq!(next.personal_info.linkedin, "linkedin.com/in/jane");
        assert_eq!(next.personal_info.website, "");
    }

    #[test]
    fn test_add_experience_starts_with_one_blank_bullet_and_unique_ids() {
        let (doc, first) = with_experience();
        let doc = apply_edit(&doc, FormEdit::AddExperience).unwrap();
        assert_eq!(doc.experience.len(), 2);
        assert_eq!(doc.experience[0].bullets, vec![String::new()]);
        assert_ne!(doc.experience[1].id, first);
    }

    #[test]
    fn test_set_and_remove_experience_by_id() {
        let (doc, id) = with_experience();
        let doc = apply_edit(
            &doc,
            FormEdit::SetExperience {
                id: id.clone(),
                field: ExperienceField::Company,
                value: "Initech".to_string(),
            },
        )
        .unwrap();
        assert_eq!(doc.experience[0].company, "Initech");

        let doc = apply_edit(&doc, FormEdit::RemoveExperience { id }).unwrap();
        assert!(doc.experience.is_empty());
    }

    #[test]
    fn test_unknown_id_is_rejected() {
        let err = apply_edit(
            &ResumeDocument::default(),
            FormEdit::RemoveProject {
                id: "missing".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            EditError::UnknownEntry {
                section: "project",
                id: "missing".to_string()
            }
        );
    }

    #[test]
    fn test_bullet_edits_on_experience() {
        let (doc, id) = with_experience();
        let target = BulletTarget::Experience { id };
        let doc = apply_edit(
            &doc,
            FormEdit::SetBullet {
                target: target.clone(),
                index: 0,
                value: "Led migration".to_string(),
            },
        )
        .unwrap();
        let doc = apply_edit(
            &doc,
            FormEdit::AddBullet {
                target: target.clone(),
            },
        )
        .unwrap();
        assert_eq!(
            doc.experience[0].bullets,
            vec!["Led migration".to_string(), String::new()]
        );

        let doc = apply_edit(&doc, FormEdit::RemoveBullet { target, index: 0 }).unwrap();
        assert_eq!(doc.experience[0].bullets, vec![String::new()]);
    }

    #[test]
    fn test_bullet_index_out_of_range() {
        let doc = apply_edit(&ResumeDocument::default(), FormEdit::AddProject).unwrap();
        let id = doc.projects[0].id.clone();
        let err = apply_edit(
            &doc,
            FormEdit::RemoveBullet {
                target: BulletTarget::Project { id },
                index: 3,
            },
        )
        .unwrap_err();
        assert_eq!(err, EditError::IndexOutOfRange { index: 3, len: 1 });
    }

    #[test]
    fn test_blank_education_description_is_none() {
        let doc = apply_edit(&ResumeDocument::default(), FormEdit::AddEducation).unwrap();
        let id = doc.education[0].id.clone();
        let doc = apply_edit(
            &doc,
            FormEdit::SetEducation {
                id: id.clone(),
                field: EducationField::Description,
                value: "Dean's list".to_string(),
            },
        )
        .unwrap();
        assert_eq!(doc.education[0].description.as_deref(), Some("Dean's list"));

        let doc = apply_edit(
            &doc,
            FormEdit::SetEducation {
                id,
                field: EducationField::Description,
                value: String::new(),
            },
        )
        .unwrap();
        assert_eq!(doc.education[0].description, None);
    }

    #[test]
    fn test_skills_text_is_split_and_trimmed() {
        let doc = apply_edit(
            &ResumeDocument::default(),
            FormEdit::SetSkillsText {
                category: SkillCategory::Database,
                text: " Postgres, Redis ,, SQLite ".to_string(),
            },
        )
        .unwrap();
        assert_eq!(doc.skills.database, vec!["Postgres", "Redis", "SQLite"]);
    }

    #[test]
    fn test_add_and_remove_skill() {
        let doc = apply_edit(
            &ResumeDocument::default(),
            FormEdit::AddSkill {
                category: SkillCategory::Tools,
                value: "Docker".to_string(),
            },
        )
        .unwrap();
        assert_eq!(doc.skills.tools, vec!["Docker"]);
        let doc = apply_edit(
            &doc,
            FormEdit::RemoveSkill {
                category: SkillCategory::Tools,
                index: 0,
            },
        )
        .unwrap();
        assert!(doc.skills.tools.is_empty());
    }

    #[test]
    fn test_reset_returns_empty_document() {
        let (doc, _) = with_experience();
        assert_eq!(
            apply_edit(&doc, FormEdit::Reset).unwrap(),
            ResumeDocument::default()
        );
    }

    #[test]
    fn test_form_edit_wire_format() {
        let edit: FormEdit = serde_json::from_value(json!({
            "op": "set_bullet",
            "target": { "section": "project", "id": "p1" },
            "index": 2,
            "value": "Shipped v2"
        }))
        .unwrap();
        assert_eq!(
            edit,
            FormEdit::SetBullet {
                target: BulletTarget::Project {
                    id: "p1".to_string()
                },
                index: 2,
                value: "Shipped v2".to_string(),
            }
        );

        let edit: FormEdit = serde_json::from_value(json!({ "op": "add_experience" })).unwrap();
        assert_eq!(edit, FormEdit::AddExperience);
    }
}
