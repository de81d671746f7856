//! Singleton pattern: six initialization strategies, a guarded variant, and
//! the attacks that break the naive ones.
//!
//! Every strategy moves through the same two-state machine,
//! `Uninitialized -> Initialized`, and they differ in when that transition
//! fires and what keeps it from firing twice:
//!
//! | Strategy       | Initialized at | Mechanism                                 | Lazy |
//! |----------------|----------------|-------------------------------------------|------|
//! | Eager          | load time      | `static` with a `const` initializer       | no   |
//! | Lazy (naive)   | first access   | none: check-then-act race                 | yes  |
//! | Synchronized   | first access   | mutex taken on every access               | yes  |
//! | Double-checked | first access   | acquire fast path, mutex slow path        | yes  |
//! | Static holder  | first access   | `lazy_static!` (a `Once` under the hood)  | yes  |
//! | Enum           | load time      | single-variant enum                       | no   |
//! | Guarded        | first access   | `OnceLock` plus a construction flag       | yes  |
//!
//! All instances are leaked: a singleton lives until the process exits.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

pub mod attack;
pub mod double_checked;
pub mod eager;
pub mod enum_singleton;
pub mod guarded;
pub mod holder;
pub mod lazy;
pub mod race;
pub mod synchronized;

pub use attack::{attack_matrix, Attack, Breach, Verdict};
pub use double_checked::{DoubleCheckedCell, DoubleCheckedSingleton};
pub use eager::EagerSingleton;
pub use enum_singleton::EnumSingleton;
pub use guarded::GuardedSingleton;
pub use holder::HolderSingleton;
pub use lazy::{LazySingleton, RacyCell};
pub use race::{race, race_first_access, RaceReport};
pub use synchronized::{LockedCell, SynchronizedSingleton};

/// A process-wide single instance reachable through [`Singleton::instance`].
pub trait Singleton: Sync + 'static {
    const STRATEGY: Strategy;

    fn instance() -> &'static Self;

    fn instance_id(&self) -> InstanceId;

    /// Whether `self` is the instance the accessor hands out.
    fn is_canonical(&self) -> bool {
        std::ptr::eq(self, Self::instance())
    }
}

static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique tag stamped on every constructed singleton value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(u64);

impl InstanceId {
    /// Carried by instances built in a `const` context.
    pub const STATIC: InstanceId = InstanceId(0);

    pub(crate) fn next() -> Self {
        InstanceId(NEXT_INSTANCE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::STATIC {
            f.write_str("static")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Initialization {
    LoadTime,
    FirstAccess,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Eager,
    Lazy,
    Synchronized,
    DoubleChecked,
    StaticHolder,
    Enum,
    Guarded,
}

impl Strategy {
    pub const ALL: [Strategy; 7] = [
        Strategy::Eager,
        Strategy::Lazy,
        Strategy::Synchronized,
        Strategy::DoubleChecked,
        Strategy::StaticHolder,
        Strategy::Enum,
        Strategy::Guarded,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Eager => "eager",
            Strategy::Lazy => "lazy",
            Strategy::Synchronized => "synchronized",
            Strategy::DoubleChecked => "double-checked",
            Strategy::StaticHolder => "static-holder",
            Strategy::Enum => "enum",
            Strategy::Guarded => "guarded",
        }
    }

    pub fn initialization(self) -> Initialization {
        match self {
            Strategy::Eager | Strategy::Enum => Initialization::LoadTime,
            _ => Initialization::FirstAccess,
        }
    }

    pub fn is_lazy(self) -> bool {
        self.initialization() == Initialization::FirstAccess
    }

    /// Only the naive lazy strategy can construct more than once under contention.
    pub fn is_thread_safe(self) -> bool {
        self != Strategy::Lazy
    }

    /// Only the synchronized accessor pays for a lock after initialization.
    pub fn locks_after_init(self) -> bool {
        self == Strategy::Synchronized
    }

    pub fn mechanism(self) -> &'static str {
        match self {
            Strategy::Eager => "const static initializer",
            Strategy::Lazy => "unsynchronized check-then-act",
            Strategy::Synchronized => "mutex on every access",
            Strategy::DoubleChecked => "acquire load, mutex on the slow path, release store",
            Strategy::StaticHolder => "lazy_static holder",
            Strategy::Enum => "single-variant enum",
            Strategy::Guarded => "OnceLock plus a refuse-twice construction flag",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub(crate) fn leak<T: 'static>(value: T) -> &'static T {
    Box::leak(Box::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_table() {
        assert_eq!(Strategy::Eager.initialization(), Initialization::LoadTime);
        assert_eq!(Strategy::Enum.initialization(), Initialization::LoadTime);
        assert!(!Strategy::Eager.is_lazy());
        assert!(Strategy::StaticHolder.is_lazy());

        let unsafe_strategies: Vec<_> = Strategy::ALL
            .iter()
            .filter(|s| !s.is_thread_safe())
            .collect();
        assert_eq!(unsafe_strategies, [&Strategy::Lazy]);

        let locking: Vec<_> = Strategy::ALL
            .iter()
            .filter(|s| s.locks_after_init())
            .collect();
        assert_eq!(locking, [&Strategy::Synchronized]);
    }

    #[test]
    fn test_instance_ids_are_unique() {
        let a = InstanceId::next();
        let b = InstanceId::next();
        assert_ne!(a, b);
        assert_ne!(a, InstanceId::STATIC);
        assert_eq!(InstanceId::STATIC.to_string(), "static");
        assert!(a.to_string().starts_with('#'));
    }

    // N concurrent first-time callers all end up holding the same instance.
    #[test]
    fn test_thread_safe_strategies_agree_under_contention() {
        const THREADS: usize = 16;

        assert!(race_first_access::<EagerSingleton>(THREADS).all_identical());
        assert!(race_first_access::<SynchronizedSingleton>(THREADS).all_identical());
        assert!(race_first_access::<DoubleCheckedSingleton>(THREADS).all_identical());
        assert!(race_first_access::<HolderSingleton>(THREADS).all_identical());
        assert!(race_first_access::<EnumSingleton>(THREADS).all_identical());
        assert!(race_first_access::<GuardedSingleton>(THREADS).all_identical());
    }
}
