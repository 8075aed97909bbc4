pub mod filter;
pub mod loader;

pub use filter::TimelineFilter;
pub use loader::TimelineLoader;
