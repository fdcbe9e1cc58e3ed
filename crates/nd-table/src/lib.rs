//! A dice table session on top of `nd-engine`.
//!
//! Keeps one running pool, a bounded journal of saved pools and side rolls,
//! and a preset book, and drives them from line commands.

pub mod config;
pub mod error;
pub mod journal;
pub mod session;

pub use config::TableConfig;
pub use error::{TableError, TableResult};
pub use journal::{Journal, JournalEntry};
pub use session::TableSession;
