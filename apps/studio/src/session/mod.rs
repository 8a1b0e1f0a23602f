//! The running session: current document, selected template and the
//! form/preview view toggle, wired to the persistence port.
//!
//! Every document change is a wholesale replacement followed by one
//! synchronous save. Selecting a template or switching views never touches
//! the document.

pub mod handlers;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::editor::{apply_edit, EditError, FormEdit};
use crate::models::resume::ResumeDocument;
use crate::render::{render_document, RenderedResume, TemplateId};
use crate::storage::{self, ResumeStore, StoreError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Form,
    Preview,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Form => ViewMode::Preview,
            ViewMode::Preview => ViewMode::Form,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Edit(#[from] EditError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct Session {
    store: Arc<dyn ResumeStore>,
    document: ResumeDocument,
    template: TemplateId,
    view: ViewMode,
}

impl Session {
    /// Rehydrates the stored document, or starts empty when nothing usable
    /// is stored. A store that cannot be read at all also starts empty.
    pub async fn start(store: Arc<dyn ResumeStore>) -> Self {
        let document = match storage::load(store.as_ref()).await {
            Ok(Some(doc)) => {
                info!("Loaded saved resume from {} store", store.backend_name());
                doc
            }
            Ok(None) => ResumeDocument::default(),
            Err(e) => {
                warn!("Could not read saved resume, starting empty: {e}");
                ResumeDocument::default()
            }
        };
        Self {
            store,
            document,
            template: TemplateId::default(),
            view: ViewMode::default(),
        }
    }

    pub fn document(&self) -> &ResumeDocument {
        &self.document
    }

    pub fn template(&self) -> TemplateId {
        self.template
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn store_backend(&self) -> &'static str {
        self.store.backend_name()
    }

    /// Applies one form edit, replaces the document and saves it.
    ///
    /// A rejected edit changes nothing. A failed save still leaves the new
    /// document in place; the error is returned so the caller can report it.
    pub async fn apply_edit(&mut self, edit: FormEdit) -> Result<&ResumeDocument, SessionError> {
        let next = apply_edit(&self.document, edit)?;
        self.replace_document(next).await
    }

    pub async fn replace_document(
        &mut self,
        document: ResumeDocument,
    ) -> Result<&ResumeDocument, SessionError> {
        self.document = document;
        storage::save(self.store.as_ref(), &self.document).await?;
        Ok(&self.document)
    }

    /// Empties the document and removes the stored record.
    pub async fn clear(&mut self) -> Result<(), SessionError> {
        self.document = ResumeDocument::default();
        self.store.clear().await?;
        info!("Cleared saved resume");
        Ok(())
    }

    pub fn select_template(&mut self, template: TemplateId) {
        self.template = template;
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub fn toggle_view(&mut self) -> ViewMode {
        self.view = self.view.toggled();
        self.view
    }

    /// Renders the current document with `template`, or the selected one.
    pub fn render(&self, template: Option<TemplateId>) -> RenderedResume {
        render_document(&self.document, template.unwrap_or(self.template))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::edits::PersonalField;
    use crate::storage::MemoryStore;

    #[tokio::test]
    async fn test_start_with_empty_store() {
        let session = Session::start(Arc::new(MemoryStore::default())).await;
        assert_eq!(session.document(), &ResumeDocument::default());
        assert_eq!(session.template(), TemplateId::Modern);
        assert_eq!(session.view(), ViewMode::Form);
    }

    #[tokio::test]
    async fn test_start_with_malformed_record_is_empty() {
        let store = Arc::new(MemoryStore::with_raw("{\"schemaVersion\": 1, \"docu"));
        let session = Session::start(store).await;
        assert_eq!(session.document(), &ResumeDocument::default());
    }

    #[tokio::test]
    async fn test_edit_is_saved_and_rehydrated() {
        let store: Arc<dyn ResumeStore> = Arc::new(MemoryStore::default());
        let mut session = Session::start(store.clone()).await;
        session
            .apply_edit(FormEdit::SetPersonal {
                field: PersonalField::FullName,
                value: "Jane Doe".to_string(),
            })
            .await
            .unwrap();

        let restored = Session::start(store).await;
        assert_eq!(restored.document().personal_info.full_name, "Jane Doe");
    }

    #[tokio::test]
    async fn test_rejected_edit_changes_nothing() {
        let store: Arc<dyn ResumeStore> = Arc::new(MemoryStore::default());
        let mut session = Session::start(store.clone()).await;
        let err = session
            .apply_edit(FormEdit::RemoveExperience {
                id: "nope".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SessionError::Edit(_)));
        assert_eq!(store.read_raw().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_template_and_view_do_not_touch_document() {
        let store: Arc<dyn ResumeStore> = Arc::new(MemoryStore::default());
        let mut session = Session::start(store.clone()).await;
        session
            .apply_edit(FormEdit::SetSummary {
                value: "Hello".to_string(),
            })
            .await
            .unwrap();
        let saved = store.read_raw().await.unwrap();
        let before = session.document().clone();

        session.select_template(TemplateId::Classic);
        assert_eq!(session.toggle_view(), ViewMode::Preview);
        assert_eq!(session.toggle_view(), ViewMode::Form);
        session.set_view(ViewMode::Preview);

        assert_eq!(session.document(), &before);
        assert_eq!(store.read_raw().await.unwrap(), saved);
        assert_eq!(session.render(None).template, TemplateId::Classic);
        assert_eq!(
            session.render(Some(TemplateId::Minimal)).template,
            TemplateId::Minimal
        );
    }

    #[tokio::test]
    async fn test_clear_discards_document_and_record() {
        let store: Arc<dyn ResumeStore> = Arc::new(MemoryStore::default());
        let mut session = Session::start(store.clone()).await;
        session
            .apply_edit(FormEdit::SetSummary {
                value: "Hello".to_string(),
            })
            .await
            .unwrap();

        session.clear().await.unwrap();
        assert_eq!(session.document(), &ResumeDocument::default());
        assert_eq!(store.read_raw().await.unwrap(), None);
    }
}
