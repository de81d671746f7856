//! Eager initialization: the instance is built at compile time and sits in a
//! `static`, so there is nothing to synchronize and nothing lazy about it.
//!
//! When the initializer can fail (the "static block" flavour), the same
//! shape applies: run it once during startup and abort the process on error,
//! since no caller could ever observe a half-built instance.
//!
//! The type is left open to two attacks: it derives `Clone`, and
//! its `Default` impl mints a brand new value. Either one produces a second,
//! distinct instance. See [`attack`](super::attack).

use tracing::debug;

use super::{InstanceId, Singleton, Strategy};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EagerSingleton {
    id: InstanceId,
    label: &'static str,
}

static INSTANCE: EagerSingleton = EagerSingleton {
    id: InstanceId::STATIC,
    label: "eager",
};

impl EagerSingleton {
    pub fn label(&self) -> &'static str {
        self.label
    }
}

// The open constructor: anything that can name the type can make another one.
impl Default for EagerSingleton {
    fn default() -> Self {
        let id = InstanceId::next();
        debug!(%id, "eager singleton constructed outside its accessor");
        Self { id, label: "eager" }
    }
}

impl Singleton for EagerSingleton {
    const STRATEGY: Strategy = Strategy::Eager;

    fn instance() -> &'static Self {
        &INSTANCE
    }

    fn instance_id(&self) -> InstanceId {
        self.id
    }
}
