//! Collaborator bundle injected into every adapter.

use std::rc::Rc;

use futures::task::LocalSpawn;

use crate::{BridgeConnector, PageEnvironment};

/// Runtime-selected collaborators for one adapter.
///
/// Environment-specific selection (browser bridge, in-memory fakes) happens before this bundle
/// reaches the adapter, which keeps the state machine free of page globals.
#[derive(Clone)]
pub struct AdapterServices {
    /// Wallet bridge connector.
    pub bridge: Rc<dyn BridgeConnector>,
    /// Hosting page environment.
    pub page: Rc<dyn PageEnvironment>,
    /// Executor that drives connection attempts the host does not await.
    pub spawner: Rc<dyn LocalSpawn>,
}
