//! Switchboard Storage Layer
//!
//! Local, profile-scoped key-value persistence backed by SQLite.
//! Values are opaque strings; callers own their encoding.

mod database;
mod error;
mod kv;
mod migrations;

pub use database::Database;
pub use error::StorageError;
pub use kv::KeyValueStore;

pub type Result<T> = std::result::Result<T, StorageError>;
