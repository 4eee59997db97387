//! Switchboard Core
//!
//! Wires the session store to its on-disk storage and hands consumers the
//! pieces they render from: the tab strip model and the tab context menu.

mod config;
mod error;
mod menu;
mod strip;
mod workspace;

pub use config::Config;
pub use error::CoreError;
pub use menu::TabMenuAction;
pub use strip::{TabStrip, TabStripItem};
pub use workspace::Workspace;

// Re-export core components
pub use switchboard_session::{
    SessionError, SessionSnapshot, SessionStore, SubscriptionId, DEFAULT_SESSION_KEY,
};
pub use switchboard_storage::{Database, KeyValueStore, StorageError};
pub use switchboard_tabs::{Tab, TabError, TabId, TabKind};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
///
/// `RUST_LOG` wins over `config.log_filter`. Does nothing if the host
/// already installed a subscriber.
pub fn init_logging(config: &Config) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}
