//! ScatterJS-backed [`BridgeConnector`] and the wallet handle it hands out.

use std::rc::Rc;

use wallet_host::{
    BridgeConnector, BridgeFuture, BridgeIdentity, BridgeNetwork, ChainFamily, WalletHandle,
    WalletSession,
};

use crate::bridge::{self, ScatterRef};

#[derive(Debug, Clone, Copy, Default)]
/// Browser bridge connector backed by the page's ScatterJS bundle.
///
/// The page must load ScatterJS (`window.ScatterJS`) and its EOS plugin (`window.ScatterEOS`).
/// The connector keeps its own reference to ScatterJS, so clearing the page global after a
/// claim does not prevent later reconnection.
pub struct ScatterBridgeConnector;

impl BridgeConnector for ScatterBridgeConnector {
    fn activate_plugin(&self, family: ChainFamily) {
        match family {
            ChainFamily::Eosio => {
                // A missing bundle surfaces as a connect error.
                let _ = bridge::activate_eos_plugin();
            }
        }
    }

    fn has_injected_global(&self, name: &str) -> bool {
        bridge::has_global(name)
    }

    fn connect<'a>(&'a self, app_name: &'a str) -> BridgeFuture<'a, Result<bool, String>> {
        Box::pin(async move { bridge::connect(app_name).await })
    }

    fn claim_handle(&self) -> Option<WalletHandle> {
        let scatter = bridge::claim_scatter()?;
        let handle: WalletHandle = Rc::new(ScatterWalletSession { scatter });
        Some(handle)
    }
}

#[derive(Debug, Clone)]
/// Connected ScatterJS `scatter` object.
pub struct ScatterWalletSession {
    scatter: ScatterRef,
}

impl WalletSession for ScatterWalletSession {
    fn get_identity<'a>(
        &'a self,
        network: &'a BridgeNetwork,
    ) -> BridgeFuture<'a, Result<BridgeIdentity, String>> {
        Box::pin(async move { bridge::get_identity(&self.scatter, network).await })
    }

    fn logout(&self) -> Result<(), String> {
        bridge::logout(&self.scatter)
    }
}
