//! Stored record format: a versioned envelope around the resume document.
//!
//! ```json
//! { "schemaVersion": 1, "savedAt": "2026-01-01T00:00:00Z", "document": { ... } }
//! ```
//!
//! Records written before the envelope existed are a bare document (schema 0).
//! Decoding never fails: anything that cannot be turned into a document is
//! reported as `None` and logged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::models::resume::ResumeDocument;

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

const VERSION_FIELD: &str = "schemaVersion";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecordOut<'a> {
    schema_version: u32,
    saved_at: DateTime<Utc>,
    document: &'a ResumeDocument,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordV1 {
    #[allow(dead_code)]
    saved_at: Option<DateTime<Utc>>,
    document: ResumeDocument,
}

/// Serializes the whole document into the current envelope.
pub fn encode_record(doc: &ResumeDocument) -> Result<String, serde_json::Error> {
    serde_json::to_string(&RecordOut {
        schema_version: CURRENT_SCHEMA_VERSION,
        saved_at: Utc::now(),
        document: doc,
    })
}

/// Decodes stored text into a document, migrating older shapes.
///
/// Returns `None` for truncated or non-JSON text, for JSON that is not a
/// document, and for envelopes from an unknown schema version.
pub fn decode_record(raw: &str) -> Option<ResumeDocument> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            warn!("Discarding unreadable resume record: {e}");
            return None;
        }
    };

    if !value.is_object() {
        warn!("Discarding resume record: top-level value is not an object");
        return None;
    }

    let version = match value.get(VERSION_FIELD) {
        None => 0,
        Some(v) => match v.as_u64() {
            Some(n) => n,
            None => {
                warn!("Discarding resume record: {VERSION_FIELD} is not a number");
                return None;
            }
        },
    };

    let mut doc = match version {
        0 => migrate_v0(value)?,
        1 => match serde_json::from_value::<RecordV1>(value) {
            Ok(record) => record.document,
            Err(e) => {
                warn!("Discarding malformed v1 resume record: {e}");
                return None;
            }
        },
        other => {
            warn!(
                "Discarding resume record with unknown schema version {other} (current is {CURRENT_SCHEMA_VERSION})"
            );
            return None;
        }
    };

    let reissued = doc.ensure_unique_ids();
    if reissued > 0 {
        warn!("Reissued {reissued} duplicate or blank entry ids while loading resume record");
    }
    Some(doc)
}

/// Schema 0 is the bare document the browser page used to store.
fn migrate_v0(value: Value) -> Option<ResumeDocument> {
    match serde_json::from_value::<ResumeDocument>(value) {
        Ok(doc) => {
            info!("Migrated legacy resume record to schema {CURRENT_SCHEMA_VERSION}");
            Some(doc)
        }
        Err(e) => {
            warn!("Discarding malformed legacy resume record: {e}");
            None
        }
    }
}
