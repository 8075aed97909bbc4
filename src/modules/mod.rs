pub mod admin;
pub mod auth;
pub mod contact;
pub mod projects;
pub mod store;
pub mod timeline;
