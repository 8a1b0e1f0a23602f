use std::sync::Arc;

use tokio::sync::Mutex;

use crate::export::Exporter;
use crate::session::Session;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single session. Edits are serialized through this lock.
    pub session: Arc<Mutex<Session>>,
    /// Export never holds the session lock while the converter runs.
    pub exporter: Arc<Exporter>,
}

impl AppState {
    pub fn new(session: Session, exporter: Exporter) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            exporter: Arc::new(exporter),
        }
    }
}
