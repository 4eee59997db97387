//! Persisted session record
//!
//! One JSON document per profile:
//! `{ "version": 1, "tabs": [...], "activeId": "..." | null, "savedAt": "..." }`.
//! Records written before versioning existed carry no `version` field and
//! decode as version 0, which shares the current layout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use switchboard_tabs::{Tab, TabId};

use crate::error::SessionError;
use crate::session::Session;
use crate::Result;

/// Highest record version this build understands
pub const RECORD_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedSession {
    #[serde(default)]
    version: u32,
    tabs: Vec<Tab>,
    #[serde(default)]
    active_id: Option<TabId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    saved_at: Option<DateTime<Utc>>,
}

pub(crate) fn encode(session: &Session) -> Result<String> {
    let record = PersistedSession {
        version: RECORD_VERSION,
        tabs: session.tabs().to_vec(),
        active_id: session.active_id().map(str::to_string),
        saved_at: Some(Utc::now()),
    };

    serde_json::to_string(&record).map_err(|e| SessionError::PersistenceWriteFailed(e.to_string()))
}

/// Decode and repair a stored record
pub(crate) fn decode(raw: &str) -> Result<Session> {
    let record: PersistedSession = serde_json::from_str(raw)
        .map_err(|e| SessionError::PersistenceReadCorrupt(e.to_string()))?;

    if record.version > RECORD_VERSION {
        return Err(SessionError::PersistenceReadCorrupt(format!(
            "record version {} is newer than supported version {}",
            record.version, RECORD_VERSION
        )));
    }

    Ok(Session::repaired(record.tabs, record.active_id))
}
