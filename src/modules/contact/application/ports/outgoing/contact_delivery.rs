// src/modules/contact/application/ports/outgoing/contact_delivery.rs

use async_trait::async_trait;

use crate::modules::contact::domain::ContactMessage;

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("delivery failed: {0}")]
    Failed(String),
}

/// Outgoing channel for validated contact requests. The page only
/// learns success or failure; where the message actually goes is the
/// adapter's business.
#[async_trait]
pub trait ContactDelivery: Send + Sync {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), DeliveryError>;
}

pub type DynDelivery = std::sync::Arc<dyn ContactDelivery>;
