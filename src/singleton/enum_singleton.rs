//! Enum singleton: a single-variant enum *is* its one instance.
//!
//! Every value of the type is `EnumSingleton::Instance`, so cloning or
//! deserializing can only ever produce the canonical value. The price is
//! that it holds no per-instance state and is never lazy.

use serde::{Deserialize, Serialize};

use super::{InstanceId, Singleton, Strategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnumSingleton {
    Instance,
}

impl EnumSingleton {
    pub fn greet(self) -> &'static str {
        "Hello World!!"
    }
}

static INSTANCE: EnumSingleton = EnumSingleton::Instance;

impl Singleton for EnumSingleton {
    const STRATEGY: Strategy = Strategy::Enum;

    fn instance() -> &'static Self {
        &INSTANCE
    }

    fn instance_id(&self) -> InstanceId {
        InstanceId::STATIC
    }

    // Identity is the variant, not the address.
    fn is_canonical(&self) -> bool {
        matches!(self, EnumSingleton::Instance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copies_are_canonical() {
        let copy = *EnumSingleton::instance();
        assert!(copy.is_canonical());
        assert_eq!(copy.greet(), "Hello World!!");
    }

    #[test]
    fn test_round_trip_is_canonical() {
        let bytes = bincode::serialize(EnumSingleton::instance()).unwrap();
        let restored: EnumSingleton = bincode::deserialize(&bytes).unwrap();
        assert!(restored.is_canonical());
        assert_eq!(&restored, EnumSingleton::instance());
    }
}
