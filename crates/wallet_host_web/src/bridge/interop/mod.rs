//! Shared transport interop for the wallet bridge.
//!
//! This module routes calls to target-specific implementations while preserving a uniform API
//! for the bridge domain module.

use wallet_host::{BridgeIdentity, BridgeNetwork};

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub use imp::ScatterRef;

pub fn activate_eos_plugin() -> bool {
    imp::activate_eos_plugin()
}

pub fn has_global(name: &str) -> bool {
    imp::has_global(name)
}

pub async fn connect(app_name: &str) -> Result<bool, String> {
    imp::connect(app_name).await
}

pub fn claim_scatter() -> Option<ScatterRef> {
    imp::claim_scatter()
}

pub async fn get_identity(
    scatter: &ScatterRef,
    network: &BridgeNetwork,
) -> Result<BridgeIdentity, String> {
    imp::get_identity(scatter, network).await
}

pub fn logout(scatter: &ScatterRef) -> Result<(), String> {
    imp::logout(scatter)
}
