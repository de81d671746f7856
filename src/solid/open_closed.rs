use crate::error::NotificationError;
use crate::factory::Delivery;

/// Sends a one-time password. New media are new impls; nothing else changes.
pub trait OtpChannel {
    fn medium(&self) -> &'static str;

    fn send_otp(&self, recipient: &str, code: &str) -> Result<Delivery, NotificationError>;
}

fn otp_delivery(
    channel: &'static str,
    recipient: &str,
    code: &str,
) -> Result<Delivery, NotificationError> {
    if recipient.trim().is_empty() {
        return Err(NotificationError::MissingRecipient { channel });
    }
    if code.is_empty() {
        return Err(NotificationError::EmptyMessage { channel });
    }
    Ok(Delivery {
        channel,
        message: format!("OTP {code} for {recipient}"),
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EmailOtp;

impl OtpChannel for EmailOtp {
    fn medium(&self) -> &'static str {
        "email"
    }

    fn send_otp(&self, recipient: &str, code: &str) -> Result<Delivery, NotificationError> {
        otp_delivery("Email", recipient, code)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SmsOtp;

impl OtpChannel for SmsOtp {
    fn medium(&self) -> &'static str {
        "sms"
    }

    fn send_otp(&self, recipient: &str, code: &str) -> Result<Delivery, NotificationError> {
        otp_delivery("SMS", recipient, code)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WhatsAppOtp;

impl OtpChannel for WhatsAppOtp {
    fn medium(&self) -> &'static str {
        "whatsapp"
    }

    fn send_otp(&self, recipient: &str, code: &str) -> Result<Delivery, NotificationError> {
        otp_delivery("WhatsApp", recipient, code)
    }
}

/// The closed-for-extension version: one branch per medium, and so far only email.
pub fn send_otp_by_medium(
    medium: &str,
    recipient: &str,
    code: &str,
) -> Result<Delivery, NotificationError> {
    if medium == "email" {
        return otp_delivery("Email", recipient, code);
    }
    // adding "sms" means editing this function
    Err(NotificationError::UnsupportedMedium {
        medium: medium.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branching_dispatcher_only_knows_email() {
        assert!(send_otp_by_medium("email", "ana@example.com", "123456").is_ok());
        assert_eq!(
            send_otp_by_medium("sms", "+15550100", "123456"),
            Err(NotificationError::UnsupportedMedium {
                medium: "sms".to_string()
            })
        );
    }

    #[test]
    fn test_every_channel_is_interchangeable() {
        let channels: [&dyn OtpChannel; 3] = [&EmailOtp, &SmsOtp, &WhatsAppOtp];
        let media: Vec<_> = channels.iter().map(|c| c.medium()).collect();
        assert_eq!(media, ["email", "sms", "whatsapp"]);

        for channel in channels {
            let delivery = channel.send_otp("ana", "424242").unwrap();
            assert_eq!(delivery.message, "OTP 424242 for ana");
        }
    }

    #[test]
    fn test_channel_matches_dispatcher_for_email() {
        assert_eq!(
            EmailOtp.send_otp("ana", "1"),
            send_otp_by_medium("email", "ana", "1")
        );
    }

    #[test]
    fn test_missing_recipient() {
        assert_eq!(
            SmsOtp.send_otp(" ", "1"),
            Err(NotificationError::MissingRecipient { channel: "SMS" })
        );
    }
}
