pub mod entities;

pub use entities::Session;
