pub mod filter;
pub mod loader;
pub mod modal;

pub use filter::TechFilter;
pub use loader::ProjectsLoader;
pub use modal::ProjectModal;
