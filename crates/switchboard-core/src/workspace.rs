//! Workspace
//!
//! The application-lifetime container: created at startup, torn down at
//! sign-out. Consumers borrow the session store from here instead of
//! reaching for a global.

use std::sync::Arc;

use switchboard_session::SessionStore;
use switchboard_storage::Database;

use crate::config::Config;
use crate::menu::TabMenuAction;
use crate::strip::TabStrip;
use crate::Result;

pub struct Workspace {
    config: Config,
    db: Database,
    persistent: bool,
    sessions: SessionStore,
}

impl Workspace {
    /// Open the database and restore the last session.
    ///
    /// The restore is a single synchronous read, done before the workspace
    /// is handed to anything that renders. An unreadable database file
    /// (corrupt, too new, or not creatable) leaves the workspace running on
    /// an in-memory database: tabs work for this run but are not persisted.
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;

        match Self::open_database(&config) {
            Ok(db) => Ok(Self::with_database(config, db, true)),
            Err(e) => {
                tracing::warn!(
                    database = %config.database_path.display(),
                    error = %e,
                    "Database unavailable, session will not be persisted"
                );
                let db = Database::open_in_memory()?;
                Ok(Self::with_database(config, db, false))
            }
        }
    }

    /// Workspace backed by an in-memory database
    pub fn in_memory(config: Config) -> Result<Self> {
        config.validate()?;
        let db = Database::open_in_memory()?;
        Ok(Self::with_database(config, db, false))
    }

    fn open_database(config: &Config) -> Result<Database> {
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(Database::open(&config.database_path)?)
    }

    fn with_database(config: Config, db: Database, persistent: bool) -> Self {
        let sessions = SessionStore::restore(Arc::new(db.clone()), config.session_key.as_str());

        tracing::info!(
            database = %config.database_path.display(),
            persistent,
            open_tabs = sessions.len(),
            "Workspace ready"
        );

        Self {
            config,
            db,
            persistent,
            sessions,
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn tab_strip(&self) -> TabStrip {
        TabStrip::from_snapshot(&self.sessions.snapshot())
    }

    pub fn apply_menu_action(&self, action: TabMenuAction, tab_id: &str) -> bool {
        action.apply(&self.sessions, tab_id)
    }

    /// Drop every open tab and tear the workspace down
    pub fn sign_out(self) {
        self.sessions.close_all();
        tracing::info!("Signed out, session cleared");
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Whether the session is written to the on-disk database
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use switchboard_storage::KeyValueStore;
    use switchboard_tabs::{Tab, TabKind};

    fn account(id: &str, name: &str, kind: TabKind) -> Tab {
        Tab::new(id, name, format!("ext-{id}"), kind).unwrap()
    }

    #[test]
    fn test_session_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path().join("profile"));

        let before = {
            let workspace = Workspace::open(config.clone()).unwrap();
            let sessions = workspace.sessions();
            sessions.open(account("a", "Acme", TabKind::GoogleAds)).unwrap();
            sessions.open(account("b", "Beta", TabKind::MetaAds)).unwrap();
            sessions.open(account("c", "Cargo", TabKind::TiktokAds)).unwrap();
            sessions.set_active("b");
            sessions.snapshot()
        };

        let workspace = Workspace::open(config).unwrap();
        assert!(workspace.is_persistent());
        assert_eq!(workspace.sessions().snapshot(), before);

        let strip = workspace.tab_strip();
        assert_eq!(strip.active_index(), Some(1));
        assert_eq!(strip.items()[2].icon, "tiktok");
    }

    #[test]
    fn test_corrupt_record_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path().to_path_buf());

        {
            let workspace = Workspace::open(config.clone()).unwrap();
            workspace
                .database()
                .set(&config.session_key, "{\"tabs\": [{\"id\"")
                .unwrap();
        }

        let workspace = Workspace::open(config).unwrap();
        assert!(workspace.sessions().is_empty());
        assert!(workspace.tab_strip().is_empty());

        // The store keeps working after discarding the record
        workspace
            .sessions()
            .open(account("a", "Acme", TabKind::GoogleAds))
            .unwrap();
        assert_eq!(workspace.sessions().len(), 1);
    }

    #[test]
    fn test_unreadable_database_falls_back_to_memory() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path().to_path_buf());
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(
            &config.database_path,
            b"this is not a sqlite database, just some junk bytes on disk",
        )
        .unwrap();

        let workspace = Workspace::open(config.clone()).unwrap();
        assert!(!workspace.is_persistent());
        assert!(workspace.sessions().is_empty());

        assert!(workspace
            .sessions()
            .open(account("a", "Acme", TabKind::GoogleAds))
            .unwrap());
        assert_eq!(workspace.sessions().active_id().as_deref(), Some("a"));

        // The broken file is left alone
        let on_disk = std::fs::read(&config.database_path).unwrap();
        assert!(on_disk.starts_with(b"this is not a sqlite database"));
    }

    #[test]
    fn test_sign_out_clears_persisted_session() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path().to_path_buf());

        let workspace = Workspace::open(config.clone()).unwrap();
        workspace
            .sessions()
            .open(account("a", "Acme", TabKind::LinkedinAds))
            .unwrap();
        workspace.sign_out();

        let workspace = Workspace::open(config.clone()).unwrap();
        assert!(workspace.sessions().is_empty());
        assert_eq!(workspace.database().get(&config.session_key).unwrap(), None);
    }

    #[test]
    fn test_menu_action_through_workspace() {
        let workspace = Workspace::in_memory(Config::new("/unused".into())).unwrap();
        let sessions = workspace.sessions();
        sessions.open(account("a", "Acme", TabKind::GoogleAds)).unwrap();
        sessions.open(account("b", "Beta", TabKind::MetaAds)).unwrap();

        assert!(workspace.apply_menu_action(TabMenuAction::CloseOthers, "a"));
        assert_eq!(sessions.active_id().as_deref(), Some("a"));
        assert_eq!(workspace.tab_strip().len(), 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = Config::new("/unused".into());
        config.session_key = String::new();
        assert!(Workspace::in_memory(config).is_err());
    }
}
