pub mod form;

pub use form::{ContactForm, ContactFormError, ContactMessage};
