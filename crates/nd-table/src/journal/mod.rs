//! The table journal: every pool, Force roll, and injury in order.

pub mod entry;
pub mod log;

pub use entry::JournalEntry;
pub use log::Journal;
