// src/modules/contact/adapter/outgoing/log_delivery.rs

use async_trait::async_trait;
use tracing::info;

use crate::modules::contact::application::ports::outgoing::{ContactDelivery, DeliveryError};
use crate::modules::contact::domain::ContactMessage;

/// Delivery adapter that records the request in the structured log.
/// The site has a single operator who reads the logs; a mail adapter
/// can replace this behind the same port.
#[derive(Debug, Default, Clone)]
pub struct LogDelivery;

#[async_trait]
impl ContactDelivery for LogDelivery {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        info!(
            name = %message.name,
            email = %message.email,
            phone = message.phone.as_deref().unwrap_or("-"),
            subject = %message.subject,
            message = %message.message,
            "contact request received"
        );
        Ok(())
    }
}
