//! Switchboard Tabs
//!
//! A tab is a handle onto one open working context (an advertising account,
//! typically) plus the metadata needed to draw it. Tabs carry no business
//! data; the owning backend stays the source of truth for the entity itself.

mod error;
mod kind;
mod tab;

pub use error::TabError;
pub use kind::TabKind;
pub use tab::{Tab, TabId};

pub type Result<T> = std::result::Result<T, TabError>;
