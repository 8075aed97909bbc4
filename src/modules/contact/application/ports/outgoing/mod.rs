pub mod contact_delivery;

pub use contact_delivery::{ContactDelivery, DeliveryError, DynDelivery};
