//! Release N threads at once into an accessor and record what each one got.

use std::collections::BTreeSet;
use std::panic;
use std::sync::Barrier;

use tracing::info;

use super::Singleton;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceReport {
    pub threads: usize,
    /// Address of the value each thread observed, in join order.
    pub addresses: Vec<usize>,
}

impl RaceReport {
    pub fn distinct_instances(&self) -> usize {
        self.addresses.iter().collect::<BTreeSet<_>>().len()
    }

    pub fn all_identical(&self) -> bool {
        self.distinct_instances() == 1
    }
}

/// Runs `access` on `threads` scoped threads that all start behind one barrier.
///
/// A panic on any thread is re-raised on the caller.
pub fn race<'a, T, F>(threads: usize, access: F) -> RaceReport
where
    T: Sync + 'a,
    F: Sync + Fn() -> &'a T,
{
    let threads = threads.max(1);
    let start = Barrier::new(threads);

    let joined = crossbeam::scope(|scope| {
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                scope.spawn(|_| {
                    start.wait();
                    access() as *const T as usize
                })
            })
            .collect();

        // Join every handle so no panic is left for the scope to collect.
        handles
            .into_iter()
            .map(|handle| handle.join())
            .collect::<Vec<_>>()
    });

    let results = match joined {
        Ok(results) => results,
        Err(payload) => panic::resume_unwind(payload),
    };

    let mut addresses = Vec::with_capacity(threads);
    for result in results {
        match result {
            Ok(address) => addresses.push(address),
            Err(payload) => panic::resume_unwind(payload),
        }
    }

    RaceReport { threads, addresses }
}

/// [`race`] against a singleton's accessor.
pub fn race_first_access<S: Singleton>(threads: usize) -> RaceReport {
    let report = race(threads, S::instance);
    info!(
        strategy = %S::STRATEGY,
        threads = report.threads,
        distinct = report.distinct_instances(),
        "first-access race finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_report_counts_distinct_addresses() {
        let report = RaceReport {
            threads: 3,
            addresses: vec![16, 16, 32],
        };
        assert_eq!(report.distinct_instances(), 2);
        assert!(!report.all_identical());
    }

    #[test]
    fn test_shared_static_is_identical() {
        static VALUE: u64 = 42;
        let report = race(8, || &VALUE);
        assert_eq!(report.threads, 8);
        assert_eq!(report.addresses.len(), 8);
        assert!(report.all_identical());
    }

    #[test]
    fn test_zero_threads_runs_one() {
        static VALUE: u8 = 1;
        assert_eq!(race(0, || &VALUE).threads, 1);
    }

    #[test]
    #[should_panic(expected = "thread 0 failed")]
    fn test_single_panicking_thread_keeps_its_message() {
        static VALUE: u8 = 1;
        let arrivals = AtomicUsize::new(0);
        race(4, || -> &'static u8 {
            let n = arrivals.fetch_add(1, Ordering::SeqCst);
            if n == 0 {
                panic!("thread {n} failed");
            }
            &VALUE
        });
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn test_thread_panic_propagates() {
        static VALUE: u8 = 1;
        race(2, || -> &'static u8 {
            if VALUE == 1 {
                panic!("boom");
            }
            &VALUE
        });
    }
}
