//! Builder pattern: fluent, order-independent construction of immutable values.
//!
//! Required fields go into the builder's constructor. Every optional field gets
//! one chained setter that takes and returns the builder by value, and
//! `build(&self)` snapshots the current state into a fresh value object. Since
//! `build` only borrows, a configured builder can stamp out any number of
//! independent values.
//!
//! [`telescoping`] keeps the anti-pattern around for comparison.

pub mod http_request;
pub mod pizza;
pub mod telescoping;

pub use http_request::{HttpRequest, HttpRequestBuilder, DEFAULT_METHOD, DEFAULT_TIMEOUT_MS};
pub use pizza::{Pizza, PizzaBuilder, PizzaDirector, DEFAULT_CHEESE};
pub use telescoping::HttpRequestTelescoping;
