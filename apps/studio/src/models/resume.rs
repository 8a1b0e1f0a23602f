//! The resume document: the single record that flows between the form,
//! the preview templates, the store and the exporter.
//!
//! Every field is opaque text. Nothing here validates dates, numbers or
//! enums; the only structural invariant is that entry ids are unique within
//! their own collection.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Issues a fresh entry identifier.
pub fn new_entry_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub linkedin: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub id: String,
    pub position: String,
    pub company: String,
    /// Free text such as "2021 – Present"; never parsed.
    pub duration: String,
    #[serde(rename = "description")]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub id: String,
    pub name: String,
    pub technologies: String,
    #[serde(rename = "description")]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Tools,
    Other,
}

impl SkillCategory {
    /// Fixed display order used by every template.
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::Tools,
        SkillCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Database => "Database",
            SkillCategory::Tools => "Tools",
            SkillCategory::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub database: Vec<String>,
    pub tools: Vec<String>,
    pub other: Vec<String>,
}

impl Skills {
    pub fn get(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::Frontend => &self.frontend,
            SkillCategory::Backend => &self.backend,
            SkillCategory::Database => &self.database,
            SkillCategory::Tools => &self.tools,
            SkillCategory::Other => &self.other,
        }
    }

    pub fn get_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::Frontend => &mut self.frontend,
            SkillCategory::Backend => &mut self.backend,
            SkillCategory::Database => &mut self.database,
            SkillCategory::Tools => &mut self.tools,
            SkillCategory::Other => &mut self.other,
        }
    }

    /// Categories holding at least one non-blank item, in display order.
    pub fn filled(&self) -> impl Iterator<Item = (SkillCategory, Vec<&str>)> + '_ {
        SkillCategory::ALL.into_iter().filter_map(move |category| {
            let items: Vec<&str> = self
                .get(category)
                .iter()
                .map(|s| s.as_str())
                .filter(|s| !s.trim().is_empty())
                .collect();
            (!items.is_empty()).then_some((category, items))
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Skills,
    pub projects: Vec<ProjectEntry>,
}

impl ResumeDocument {
    /// The trimmed full name, or `None` when the field is blank.
    pub fn display_name(&self) -> Option<&str> {
        let name = self.personal_info.full_name.trim();
        (!name.is_empty()).then_some(name)
    }

    /// Reissues blank or repeated entry ids so every collection has unique
    /// ids again. Returns how many ids were replaced.
    pub fn ensure_unique_ids(&mut self) -> usize {
        reissue_ids(self.experience.iter_mut().map(|e| &mut e.id))
            + reissue_ids(self.education.iter_mut().map(|e| &mut e.id))
            + reissue_ids(self.projects.iter_mut().map(|e| &mut e.id))
    }
}

fn reissue_ids<'a>(ids: impl Iterator<Item = &'a mut String>) -> usize {
    let mut seen = HashSet::new();
    let mut reissued = 0;
    for id in ids {
        if id.trim().is_empty() || !seen.insert(id.clone()) {
            *id = new_entry_id();
            seen.insert(id.clone());
            reissued += 1;
        }
    }
    reissued
}
