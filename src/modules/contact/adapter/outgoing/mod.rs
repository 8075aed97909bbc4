pub mod log_delivery;

pub use log_delivery::LogDelivery;
