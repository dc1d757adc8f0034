//! Compile-time bridge-strategy selection and the collaborator bundle handed to adapters.

use std::rc::Rc;

use wallet_host::{AdapterServices, NoopBridgeConnector, NoopPageEnvironment};

use crate::{BrowserSpawner, ScatterBridgeConnector, WebPageEnvironment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected bridge strategy for `wallet_host_web` adapters.
pub enum BridgeStrategy {
    /// ScatterJS bridge and `window` page environment.
    Browser,
    /// Declining bridge and empty page, for builds without a wallet integration.
    Stub,
}

impl BridgeStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Stub => "stub",
        }
    }
}

/// Returns the compile-time selected bridge strategy for the active build.
pub const fn selected_bridge_strategy() -> BridgeStrategy {
    #[cfg(feature = "bridge-stub")]
    {
        BridgeStrategy::Stub
    }

    #[cfg(not(feature = "bridge-stub"))]
    {
        BridgeStrategy::Browser
    }
}

/// Builds the collaborator bundle for the selected bridge strategy.
pub fn build_adapter_services() -> AdapterServices {
    match selected_bridge_strategy() {
        BridgeStrategy::Browser => AdapterServices {
            bridge: Rc::new(ScatterBridgeConnector),
            page: Rc::new(WebPageEnvironment),
            spawner: Rc::new(BrowserSpawner),
        },
        BridgeStrategy::Stub => AdapterServices {
            bridge: Rc::new(NoopBridgeConnector),
            page: Rc::new(NoopPageEnvironment),
            spawner: Rc::new(BrowserSpawner),
        },
    }
}
