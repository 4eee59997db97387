//! Tab context menu actions

use serde::{Deserialize, Serialize};

use switchboard_session::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabMenuAction {
    Close,
    CloseOthers,
    CloseAll,
}

impl TabMenuAction {
    pub fn label(&self) -> &'static str {
        match self {
            TabMenuAction::Close => "Close",
            TabMenuAction::CloseOthers => "Close other tabs",
            TabMenuAction::CloseAll => "Close all tabs",
        }
    }

    /// Actions worth offering for a strip with `tab_count` tabs
    pub fn available_for(tab_count: usize) -> Vec<TabMenuAction> {
        match tab_count {
            0 => Vec::new(),
            1 => vec![TabMenuAction::Close, TabMenuAction::CloseAll],
            _ => vec![
                TabMenuAction::Close,
                TabMenuAction::CloseOthers,
                TabMenuAction::CloseAll,
            ],
        }
    }

    /// Run the action against the tab the menu was opened on
    pub fn apply(&self, store: &SessionStore, tab_id: &str) -> bool {
        tracing::debug!(action = ?self, tab_id = %tab_id, "Tab menu action");

        match self {
            TabMenuAction::Close => store.close(tab_id),
            TabMenuAction::CloseOthers => store.close_others(tab_id),
            TabMenuAction::CloseAll => store.close_all(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use switchboard_storage::Database;
    use switchboard_tabs::{Tab, TabKind};

    fn store(ids: &[&str]) -> SessionStore {
        let db = Arc::new(Database::open_in_memory().unwrap());
        let store = SessionStore::new(db, "menu.test");
        for id in ids {
            store
                .open(Tab::new(*id, *id, "", TabKind::GoogleAds).unwrap())
                .unwrap();
        }
        store
    }

    #[test]
    fn test_available_actions() {
        assert!(TabMenuAction::available_for(0).is_empty());
        assert!(!TabMenuAction::available_for(1).contains(&TabMenuAction::CloseOthers));
        assert_eq!(TabMenuAction::available_for(4).len(), 3);
    }

    #[test]
    fn test_apply_routes_to_store() {
        let store = store(&["a", "b", "c"]);

        assert!(TabMenuAction::Close.apply(&store, "a"));
        assert_eq!(store.len(), 2);

        assert!(TabMenuAction::CloseOthers.apply(&store, "b"));
        assert_eq!(store.active_id().as_deref(), Some("b"));
        assert_eq!(store.len(), 1);

        assert!(TabMenuAction::CloseAll.apply(&store, "b"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&TabMenuAction::CloseOthers).unwrap();
        assert_eq!(json, "\"close_others\"");
    }
}
