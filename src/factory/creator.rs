use tracing::info;

use crate::config::NotificationConfig;
use crate::error::NotificationError;
use crate::factory::notification::{
    Delivery, EmailNotification, Notification, PushNotification, SmsNotification,
    WhatsAppNotification,
};

/// The creator. Implementors only pick the channel; `send` is shared.
pub trait NotificationFactory {
    fn create_notification(&self) -> Box<dyn Notification>;

    fn send(&self, message: &str) -> Result<Delivery, NotificationError> {
        let notification = self.create_notification();
        let delivery = notification.send(message)?;
        info!(channel = delivery.channel, "notification sent");
        Ok(delivery)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EmailNotificationFactory;

impl NotificationFactory for EmailNotificationFactory {
    fn create_notification(&self) -> Box<dyn Notification> {
        Box::new(EmailNotification)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PushNotificationFactory;

impl NotificationFactory for PushNotificationFactory {
    fn create_notification(&self) -> Box<dyn Notification> {
        Box::new(PushNotification)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SmsNotificationFactory {
    max_len: usize,
}

impl SmsNotificationFactory {
    pub fn new(config: &NotificationConfig) -> Self {
        Self {
            max_len: config.sms_max_len,
        }
    }
}

impl Default for SmsNotificationFactory {
    fn default() -> Self {
        Self::new(&NotificationConfig::default())
    }
}

impl NotificationFactory for SmsNotificationFactory {
    fn create_notification(&self) -> Box<dyn Notification> {
        Box::new(SmsNotification::new(self.max_len))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WhatsAppNotificationFactory;

impl NotificationFactory for WhatsAppNotificationFactory {
    fn create_notification(&self) -> Box<dyn Notification> {
        Box::new(WhatsAppNotification)
    }
}

/// One factory per channel, in a stable order.
pub fn all_factories(config: &NotificationConfig) -> Vec<Box<dyn NotificationFactory>> {
    vec![
        Box::new(EmailNotificationFactory),
        Box::new(PushNotificationFactory),
        Box::new(SmsNotificationFactory::new(config)),
        Box::new(WhatsAppNotificationFactory),
    ]
}
