//! Double-checked locking.
//!
//! The fast path is a single acquire load. Only a caller that finds the slot
//! empty takes the mutex, and it checks again under the lock before
//! constructing. The release store that publishes the pointer pairs with the
//! acquire loads, so no thread can see the pointer before the value behind
//! it is fully written.

use std::marker::PhantomData;
use std::ptr;
use std::sync::atomic::{AtomicPtr, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use tracing::debug;

use super::{leak, InstanceId, Singleton, Strategy};

pub struct DoubleCheckedCell<T: 'static> {
    slot: AtomicPtr<T>,
    init_lock: Mutex<()>,
    slow_path_entries: AtomicUsize,
    _shared: PhantomData<&'static T>,
}

impl<T: 'static> DoubleCheckedCell<T> {
    pub const fn new() -> Self {
        Self {
            slot: AtomicPtr::new(ptr::null_mut()),
            init_lock: Mutex::new(()),
            slow_path_entries: AtomicUsize::new(0),
            _shared: PhantomData,
        }
    }

    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> &'static T {
        // First check, lock-free.
        let current = self.slot.load(Ordering::Acquire);
        if !current.is_null() {
            // SAFETY: non-null pointers in the slot come from `leak` and are
            // published with a release store.
            return unsafe { &*current };
        }
        self.init_slow(init)
    }

    #[cold]
    fn init_slow(&self, init: impl FnOnce() -> T) -> &'static T {
        let _guard = self.init_lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.slow_path_entries.fetch_add(1, Ordering::Relaxed);

        // Second check: we may have queued behind the thread that built it.
        let current = self.slot.load(Ordering::Acquire);
        if !current.is_null() {
            // SAFETY: as above.
            return unsafe { &*current };
        }

        let fresh = leak(init());
        self.slot.store(fresh as *const T as *mut T, Ordering::Release);
        fresh
    }

    /// How many callers fell through to the locked path.
    pub fn slow_path_entries(&self) -> usize {
        self.slow_path_entries.load(Ordering::Relaxed)
    }

    pub fn is_initialized(&self) -> bool {
        !self.slot.load(Ordering::Acquire).is_null()
    }
}

impl<T: 'static> Default for DoubleCheckedCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

static INSTANCE: DoubleCheckedCell<DoubleCheckedSingleton> = DoubleCheckedCell::new();

#[derive(Debug, PartialEq, Eq)]
pub struct DoubleCheckedSingleton {
    id: InstanceId,
}

impl DoubleCheckedSingleton {
    fn construct() -> Self {
        let id = InstanceId::next();
        debug!(%id, "double-checked singleton constructed");
        Self { id }
    }

    pub fn slow_path_entries() -> usize {
        INSTANCE.slow_path_entries()
    }
}

impl Singleton for DoubleCheckedSingleton {
    const STRATEGY: Strategy = Strategy::DoubleChecked;

    fn instance() -> &'static Self {
        INSTANCE.get_or_init(Self::construct)
    }

    fn instance_id(&self) -> InstanceId {
        self.id
    }
}
