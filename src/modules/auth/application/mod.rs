pub mod domain;
pub mod ports;
pub mod session_watch;

pub use session_watch::SessionWatch;
