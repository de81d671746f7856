//! Prototype pattern: new objects are copied from registered templates.
//!
//! In Rust the prototype interface is just `Clone`. Types that own all their
//! data clone deeply, so a copy can be mutated freely without touching the
//! template it came from.

pub mod enemy;
pub mod registry;

pub use enemy::Enemy;
pub use registry::PrototypeRegistry;
