//! Synchronized accessor: every call takes the lock, then checks.
//!
//! Correct and simple, but the mutex is paid for on every access long after
//! the instance exists.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use tracing::debug;

use super::{leak, InstanceId, Singleton, Strategy};

pub struct LockedCell<T: 'static> {
    slot: Mutex<Option<&'static T>>,
    lock_acquisitions: AtomicUsize,
}

impl<T: 'static> LockedCell<T> {
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
            lock_acquisitions: AtomicUsize::new(0),
        }
    }

    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> &'static T {
        // A panicking `init` leaves the slot empty, so the poison carries no bad state.
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        self.lock_acquisitions.fetch_add(1, Ordering::Relaxed);
        *slot.get_or_insert_with(|| leak(init()))
    }

    pub fn lock_acquisitions(&self) -> usize {
        self.lock_acquisitions.load(Ordering::Relaxed)
    }
}

impl<T: 'static> Default for LockedCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

static INSTANCE: LockedCell<SynchronizedSingleton> = LockedCell::new();

#[derive(Debug, PartialEq, Eq)]
pub struct SynchronizedSingleton {
    id: InstanceId,
}

impl SynchronizedSingleton {
    fn construct() -> Self {
        let id = InstanceId::next();
        debug!(%id, "synchronized singleton constructed");
        Self { id }
    }

    pub fn lock_acquisitions() -> usize {
        INSTANCE.lock_acquisitions()
    }
}

impl Singleton for SynchronizedSingleton {
    const STRATEGY: Strategy = Strategy::Synchronized;

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

    #[test]
    fn test_every_access_locks() {
        let cell = LockedCell::new();
        for _ in 0..5 {
            cell.get_or_init(|| 1_u8);
        }
        assert_eq!(cell.lock_acquisitions(), 5);
    }

    #[test]
    fn test_contended_init_runs_once() {
        let cell = LockedCell::new();
        let inits = AtomicUsize::new(0);

        let report = race(12, || {
            cell.get_or_init(|| {
                inits.fetch_add(1, Ordering::SeqCst);
                std::thread::sleep(std::time::Duration::from_millis(5));
                vec![1, 2, 3]
            })
        });

        assert!(report.all_identical());
        assert_eq!(inits.load(Ordering::SeqCst), 1);
        assert_eq!(cell.lock_acquisitions(), 12);
    }

    #[test]
    fn test_global_accessor_counts_locks() {
        let before = SynchronizedSingleton::lock_acquisitions();
        let first = SynchronizedSingleton::instance();
        let second = SynchronizedSingleton::instance();

        assert!(std::ptr::eq(first, second));
        assert!(SynchronizedSingleton::lock_acquisitions() >= before + 2);
    }
}
