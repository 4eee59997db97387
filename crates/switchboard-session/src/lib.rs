//! Switchboard Session Management
//!
//! - A session is the ordered set of open tabs plus the single active one
//! - Every mutation is written through to the local key-value store
//! - Startup restores the last written session, repairing it if needed
//! - Persistence is local to one profile (no cross-device sync)

mod error;
mod observer;
mod record;
mod session;
mod store;

pub use error::SessionError;
pub use observer::SubscriptionId;
pub use record::RECORD_VERSION;
pub use session::{Session, SessionSnapshot};
pub use store::{SessionStore, DEFAULT_SESSION_KEY};

pub type Result<T> = std::result::Result<T, SessionError>;
