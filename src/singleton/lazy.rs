//! Naive lazy initialization: check the slot, build if empty, publish.
//!
//! There is no lock between the check and the publish, so two threads that
//! both see an empty slot will both construct. The later store wins. The
//! earlier value is leaked, so references already handed out stay valid.
//! This is memory-safe (the pointer is published with release/acquire
//! ordering) but not a singleton under contention.
//!
//! [`LazySingleton`] also derives `Serialize`/`Deserialize` with no
//! resolution hook, so a serialization round trip yields a distinct copy.

use std::marker::PhantomData;
use std::ptr;
use std::sync::atomic::{AtomicPtr, AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{leak, InstanceId, Singleton, Strategy};

/// A lazily filled slot with an unsynchronized check-then-act.
pub struct RacyCell<T: 'static> {
    slot: AtomicPtr<T>,
    constructions: AtomicUsize,
    _shared: PhantomData<&'static T>,
}

impl<T: 'static> RacyCell<T> {
    pub const fn new() -> Self {
        Self {
            slot: AtomicPtr::new(ptr::null_mut()),
            constructions: AtomicUsize::new(0),
            _shared: PhantomData,
        }
    }

    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> &'static T {
        let current = self.slot.load(Ordering::Acquire);
        if !current.is_null() {
            // SAFETY: the slot only ever holds pointers from `leak`, which are
            // never freed, and the acquire load pairs with the release store.
            return unsafe { &*current };
        }

        // Race window: another thread may be between its own check and store.
        self.constructions.fetch_add(1, Ordering::Relaxed);
        let fresh = leak(init());
        self.slot.store(fresh as *const T as *mut T, Ordering::Release);
        fresh
    }

    /// How many times `init` ran. Anything above one is a lost race.
    pub fn constructions(&self) -> usize {
        self.constructions.load(Ordering::Relaxed)
    }

    pub fn is_initialized(&self) -> bool {
        !self.slot.load(Ordering::Acquire).is_null()
    }
}

impl<T: 'static> Default for RacyCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

static INSTANCE: RacyCell<LazySingleton> = RacyCell::new();

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LazySingleton {
    id: InstanceId,
}

impl LazySingleton {
    fn construct() -> Self {
        let id = InstanceId::next();
        debug!(%id, "lazy singleton constructed");
        Self { id }
    }

    pub fn constructions() -> usize {
        INSTANCE.constructions()
    }
}

impl Default for LazySingleton {
    fn default() -> Self {
        Self::construct()
    }
}

impl Singleton for LazySingleton {
    const STRATEGY: Strategy = Strategy::Lazy;

    fn instance() -> &'static Self {
        INSTANCE.get_or_init(Self::construct)
    }

    fn instance_id(&self) -> InstanceId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::singleton::race;
    use std::sync::Barrier;

    #[test]
    fn test_sequential_access_is_stable() {
        let cell = RacyCell::new();
        let first = cell.get_or_init(|| 7_u32);
        let second = cell.get_or_init(|| 8_u32);

        assert!(std::ptr::eq(first, second));
        assert_eq!(*second, 7);
        assert_eq!(cell.constructions(), 1);
    }

    // Both threads are held inside `init` until the other arrives, so both
    // must have seen an empty slot.
    #[test]
    fn test_forced_race_constructs_twice() {
        let cell = RacyCell::new();
        let inside_init = Barrier::new(2);

        let report = race(2, || {
            cell.get_or_init(|| {
                inside_init.wait();
                String::from("racy")
            })
        });

        assert_eq!(cell.constructions(), 2);
        assert_eq!(report.distinct_instances(), 2);
        assert!(!report.all_identical());
    }

    #[test]
    fn test_global_accessor() {
        let instance = LazySingleton::instance();
        assert!(instance.instance_id().get() >= 1);
        assert!(INSTANCE.is_initialized());
        assert!(LazySingleton::constructions() >= 1);
    }

    #[test]
    fn test_serialized_copy_is_not_canonical() {
        let original = LazySingleton::instance();
        let bytes = bincode::serialize(original).unwrap();
        let copy: LazySingleton = bincode::deserialize(&bytes).unwrap();

        assert_eq!(copy.instance_id(), original.instance_id());
        assert!(!copy.is_canonical());
    }
}
