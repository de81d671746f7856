//! Static holder: the instance lives in a `lazy_static!` item that is only
//! initialized the first time it is dereferenced.
//!
//! The runtime guarantees the initializer runs exactly once, and every later
//! access is a single "already done" check with no lock.

use lazy_static::lazy_static;
use tracing::debug;

use super::{InstanceId, Singleton, Strategy};

#[derive(Debug, PartialEq, Eq)]
pub struct HolderSingleton {
    id: InstanceId,
}

lazy_static! {
    static ref HOLDER: HolderSingleton = {
        let id = InstanceId::next();
        debug!(%id, "static-holder singleton constructed");
        HolderSingleton { id }
    };
}

impl Singleton for HolderSingleton {
    const STRATEGY: Strategy = Strategy::StaticHolder;

    fn instance() -> &'static Self {
        &HOLDER
    }

    fn instance_id(&self) -> InstanceId {
        self.id
    }
}
