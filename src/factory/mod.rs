//! Factory Method: the creator decides which notification channel to build,
//! while the sending logic is written once in the creator trait.
//!
//! ```
//! use design_patterns_course::factory::{EmailNotificationFactory, NotificationFactory};
//!
//! let delivery = EmailNotificationFactory.send("Welcome to the world of Rust").unwrap();
//! assert_eq!(delivery.to_string(), "Sending Email: Welcome to the world of Rust");
//! ```

pub mod creator;
pub mod notification;

pub use creator::{
    all_factories, EmailNotificationFactory, NotificationFactory, PushNotificationFactory,
    SmsNotificationFactory, WhatsAppNotificationFactory,
};
pub use notification::{
    Delivery, EmailNotification, Notification, PushNotification, SmsNotification,
    WhatsAppNotification,
};
