pub mod entities;
pub mod fallback;

pub use entities::{EntryKind, TimelineEntry};
