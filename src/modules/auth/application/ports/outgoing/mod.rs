pub mod auth_provider;

pub use auth_provider::{AuthProvider, SignInError};
