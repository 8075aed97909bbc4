pub mod identity_rest;

pub use identity_rest::IdentityRestAuth;
