use std::fmt;

use crate::error::NotificationError;

/// What a channel accepted for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub channel: &'static str,
    pub message: String,
}

impl fmt::Display for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sending {}: {}", self.channel, self.message)
    }
}

pub trait Notification {
    fn channel(&self) -> &'static str;

    fn send(&self, message: &str) -> Result<Delivery, NotificationError>;
}

fn accept(channel: &'static str, message: &str) -> Result<Delivery, NotificationError> {
    if message.trim().is_empty() {
        return Err(NotificationError::EmptyMessage { channel });
    }
    Ok(Delivery {
        channel,
        message: message.to_string(),
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EmailNotification;

impl Notification for EmailNotification {
    fn channel(&self) -> &'static str {
        "Email"
    }

    fn send(&self, message: &str) -> Result<Delivery, NotificationError> {
        accept(self.channel(), message)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PushNotification;

impl Notification for PushNotification {
    fn channel(&self) -> &'static str {
        "Push notification"
    }

    fn send(&self, message: &str) -> Result<Delivery, NotificationError> {
        accept(self.channel(), message)
    }
}

/// SMS with a hard length limit, counted in characters.
#[derive(Debug, Clone, Copy)]
pub struct SmsNotification {
    max_len: usize,
}

impl SmsNotification {
    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }
}

impl Notification for SmsNotification {
    fn channel(&self) -> &'static str {
        "SMS"
    }

    fn send(&self, message: &str) -> Result<Delivery, NotificationError> {
        let len = message.chars().count();
        if len > self.max_len {
            return Err(NotificationError::MessageTooLong {
                channel: self.channel(),
                len,
                max: self.max_len,
            });
        }
        accept(self.channel(), message)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WhatsAppNotification;

impl Notification for WhatsAppNotification {
    fn channel(&self) -> &'static str {
        "WhatsApp"
    }

    fn send(&self, message: &str) -> Result<Delivery, NotificationError> {
        accept(self.channel(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_display() {
        let delivery = PushNotification.send("You won the game").unwrap();
        assert_eq!(delivery.to_string(), "Sending Push notification: You won the game");
    }

    #[test]
    fn test_every_channel_rejects_blank_messages() {
        let channels: [&dyn Notification; 4] = [
            &EmailNotification,
            &PushNotification,
            &SmsNotification::new(160),
            &WhatsAppNotification,
        ];
        for channel in channels {
            assert_eq!(
                channel.send("   "),
                Err(NotificationError::EmptyMessage {
                    channel: channel.channel()
                })
            );
        }
    }

    #[test]
    fn test_sms_limit_counts_chars() {
        let sms = SmsNotification::new(5);
        assert!(sms.send("héllo").is_ok());
        assert_eq!(
            sms.send("hello!"),
            Err(NotificationError::MessageTooLong {
                channel: "SMS",
                len: 6,
                max: 5
            })
        );
    }
}
