//! # Design Patterns Course
//!
//! Runnable, tested implementations of the classic creational and structural
//! patterns, plus two SOLID before/after refactors.
//!
//! ## Patterns Covered
//!
//! 1. **Builder** ([`builder`])
//!    - Fluent builders for `HttpRequest` and `Pizza`
//!    - A director with canned recipes
//!    - The telescoping-constructor anti-pattern for contrast
//!
//! 2. **Singleton** ([`singleton`])
//!    - Eager, lazy (naive), synchronized accessor, double-checked locking,
//!      static holder, enum
//!    - A guarded variant that refuses a second construction and resolves
//!      deserialized copies back to the canonical instance
//!    - A catalogue of the attacks that break the naive variants
//!
//! 3. **Prototype** ([`prototype`])
//!    - A keyed registry that hands out independent copies of its templates
//!
//! 4. **Factory Method** ([`factory`])
//!    - Notification creators that share one `send` template method
//!
//! 5. **Facade** ([`facade`])
//!    - A deployment pipeline behind a single fail-fast entry point
//!
//! 6. **SOLID** ([`solid`])
//!    - Single responsibility: splitting a bank god-object into services
//!    - Open/closed: replacing string dispatch with polymorphic OTP channels
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin patterns            # every demo in sequence
//! cargo run --bin builder_demo
//! cargo run --bin singleton_demo -- patterns.toml
//! RUST_LOG=debug cargo run --bin facade_demo
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - error enums for every pattern family
//! - `tracing` / `tracing-subscriber` - structured events from library code
//! - `serde` / `toml` - course configuration
//! - `bincode` - the serialization round trip that breaks naive singletons
//! - `lazy_static` - the static-holder singleton
//! - `crossbeam` - scoped threads for the first-access race

pub mod builder;
pub mod config;
pub mod demos;
pub mod error;
pub mod facade;
pub mod factory;
pub mod logging;
pub mod prototype;
pub mod singleton;
pub mod solid;

pub use config::CourseConfig;
pub use error::{
    BankError, ConfigError, DeploymentError, NotificationError, RegistryError, SingletonError,
};
