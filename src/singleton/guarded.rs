//! The hardened singleton.
//!
//! Two defences on top of a `OnceLock` accessor:
//!
//! - **Refuse a second construction.** The accessor is the only path that
//!   mints a value, and it sets a process-wide flag when it does.
//!   [`GuardedSingleton::construct`] initializes the accessor before checking
//!   that flag, so it always returns [`SingletonError::AlreadyInitialized`]
//!   and a stray value can never take the canonical instance's place.
//! - **Resolve deserialized copies.** There is no `Deserialize` impl for the
//!   owned type. Deserializing a `&'static GuardedSingleton` reads the payload,
//!   discards it, and hands back the canonical instance.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

use super::{InstanceId, Singleton, Strategy};
use crate::error::SingletonError;

static INSTANCE: OnceLock<GuardedSingleton> = OnceLock::new();
static INITIALIZED: AtomicBool = AtomicBool::new(false);
static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct GuardedSingleton {
    id: InstanceId,
}

impl GuardedSingleton {
    fn mint() -> Self {
        INITIALIZED.store(true, Ordering::Release);
        CONSTRUCTIONS.fetch_add(1, Ordering::Relaxed);
        let id = InstanceId::next();
        debug!(%id, "guarded singleton constructed");
        Self { id }
    }

    /// Direct construction outside the accessor. The canonical instance is
    /// claimed first, so the guard always has a prior construction to refuse.
    pub fn construct() -> Result<Self, SingletonError> {
        Self::instance();
        if INITIALIZED.load(Ordering::Acquire) {
            warn!(
                strategy = %Strategy::Guarded,
                "refused a second singleton construction"
            );
            return Err(SingletonError::AlreadyInitialized {
                strategy: Strategy::Guarded,
            });
        }
        Ok(Self::mint())
    }

    pub fn constructions() -> usize {
        CONSTRUCTIONS.load(Ordering::Relaxed)
    }

    pub fn is_initialized() -> bool {
        INITIALIZED.load(Ordering::Acquire)
    }
}

impl Singleton for GuardedSingleton {
    const STRATEGY: Strategy = Strategy::Guarded;

    fn instance() -> &'static Self {
        INSTANCE.get_or_init(Self::mint)
    }

    fn instance_id(&self) -> InstanceId {
        self.id
    }
}

// What the byte stream holds. Read, then thrown away.
#[derive(Deserialize)]
struct SerializedGuarded {
    id: InstanceId,
}

impl<'de> Deserialize<'de> for &'static GuardedSingleton {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let discarded = SerializedGuarded::deserialize(deserializer)?;
        let canonical = GuardedSingleton::instance();
        debug!(
            discarded = %discarded.id,
            canonical = %canonical.id,
            "resolved deserialized singleton to the canonical instance"
        );
        Ok(canonical)
    }
}

/// Writes `value` to `path` with bincode.
pub fn persist<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<(), SingletonError> {
    let writer = BufWriter::new(File::create(path)?);
    bincode::serialize_into(writer, value)?;
    Ok(())
}

/// Reads a value written by [`persist`].
pub fn restore<T: DeserializeOwned>(path: &Path) -> Result<T, SingletonError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(bincode::deserialize_from(reader)?)
}
