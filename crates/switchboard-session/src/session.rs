//! Session aggregate
//!
//! Holds the open tabs in display order and the active pointer. Every
//! mutation reports whether it changed anything so the store can skip the
//! write-through and notifications for no-ops.
//!
//! Invariants after every mutation:
//! - the active id, if set, names a tab in the list
//! - the active id is set exactly when the list is non-empty
//! - no two tabs share an id

use std::collections::HashSet;
use std::ops::Deref;

use switchboard_tabs::{Tab, TabId};

use crate::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    tabs: Vec<Tab>,
    active_id: Option<TabId>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a session from untrusted parts (a persisted record).
    ///
    /// Tabs with an empty id are dropped, duplicate ids keep their first
    /// occurrence, and an active id that names no tab falls back to the
    /// first tab.
    pub fn repaired(tabs: Vec<Tab>, active_id: Option<TabId>) -> Self {
        let restored_count = tabs.len();
        let mut seen = HashSet::with_capacity(restored_count);
        let tabs: Vec<Tab> = tabs
            .into_iter()
            .filter(|tab| tab.validate().is_ok() && seen.insert(tab.id.clone()))
            .collect();

        if tabs.len() != restored_count {
            tracing::warn!(
                dropped = restored_count - tabs.len(),
                "Dropped invalid or duplicate tabs from persisted session"
            );
        }

        let active_id = match active_id {
            Some(id) if tabs.iter().any(|t| t.id == id) => Some(id),
            stale => {
                let fallback = tabs.first().map(|t| t.id.clone());
                if stale.is_some() || fallback.is_some() {
                    tracing::warn!(
                        stale_active_id = ?stale,
                        fallback = ?fallback,
                        "Persisted active tab is not open, falling back"
                    );
                }
                fallback
            }
        };

        Self { tabs, active_id }
    }

    // === Mutations ===

    /// Open a tab, or focus it if already open.
    ///
    /// An already-open tab keeps its existing metadata.
    pub fn open(&mut self, tab: Tab) -> Result<bool> {
        tab.validate()?;

        let inserted = !self.contains(&tab.id);
        let focused = self.active_id.as_deref() != Some(tab.id.as_str());

        if focused {
            self.active_id = Some(tab.id.clone());
        }
        if inserted {
            self.tabs.push(tab);
        }

        Ok(inserted || focused)
    }

    /// Close a tab. When the active tab closes, the tab that slides into its
    /// slot becomes active, or the new last tab if it was at the end.
    pub fn close(&mut self, id: &str) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        let closed = self.tabs.remove(index);

        if self.active_id.as_deref() == Some(closed.id.as_str()) {
            self.active_id = if self.tabs.is_empty() {
                None
            } else {
                let next = index.min(self.tabs.len() - 1);
                Some(self.tabs[next].id.clone())
            };
        }

        true
    }

    /// Activate an open tab. Unknown ids are ignored.
    pub fn set_active(&mut self, id: &str) -> bool {
        if !self.contains(id) || self.active_id.as_deref() == Some(id) {
            return false;
        }
        self.active_id = Some(id.to_string());
        true
    }

    /// Keep only `id` and activate it. Unknown ids leave the session untouched.
    pub fn close_others(&mut self, id: &str) -> bool {
        if !self.contains(id) {
            return false;
        }
        if self.tabs.len() == 1 && self.active_id.as_deref() == Some(id) {
            return false;
        }

        self.tabs.retain(|t| t.id == id);
        self.active_id = Some(id.to_string());
        true
    }

    pub fn close_all(&mut self) -> bool {
        if self.tabs.is_empty() && self.active_id.is_none() {
            return false;
        }
        self.tabs.clear();
        self.active_id = None;
        true
    }

    // === Reads ===

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// Resolve the active pointer against the tab list
    pub fn active_tab(&self) -> Option<&Tab> {
        let id = self.active_id.as_deref()?;
        self.get(id)
    }

    pub fn get(&self, id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id.as_deref() == Some(id)
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Check the aggregate invariants
    pub fn is_consistent(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.tabs.len());
        let unique = self.tabs.iter().all(|t| seen.insert(t.id.as_str()));

        let active_ok = match self.active_id.as_deref() {
            Some(id) => self.tabs.iter().filter(|t| t.id == id).count() == 1,
            None => self.tabs.is_empty(),
        };

        unique && active_ok
    }

    pub(crate) fn into_parts(self) -> (Vec<Tab>, Option<TabId>) {
        (self.tabs, self.active_id)
    }
}

/// Read-only view of a session handed to consumers and observers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    session: Session,
}

impl SessionSnapshot {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn into_tabs(self) -> Vec<Tab> {
        self.session.into_parts().0
    }
}

impl Deref for SessionSnapshot {
    type Target = Session;

    fn deref(&self) -> &Session {
        &self.session
    }
}
