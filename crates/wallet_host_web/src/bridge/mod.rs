//! ScatterJS bridge bindings used by the `wallet_host_web` connector.
//!
//! `interop` holds the wasm/JS glue and a non-wasm fallback shim; this module keeps a stable
//! crate-internal API over both.

mod interop;

use wallet_host::{BridgeIdentity, BridgeNetwork};

pub(crate) use interop::ScatterRef;

pub(crate) fn activate_eos_plugin() -> bool {
    interop::activate_eos_plugin()
}

pub(crate) fn has_global(name: &str) -> bool {
    interop::has_global(name)
}

pub(crate) async fn connect(app_name: &str) -> Result<bool, String> {
    interop::connect(app_name).await
}

pub(crate) fn claim_scatter() -> Option<ScatterRef> {
    interop::claim_scatter()
}

pub(crate) async fn get_identity(
    scatter: &ScatterRef,
    network: &BridgeNetwork,
) -> Result<BridgeIdentity, String> {
    interop::get_identity(scatter, network).await
}

pub(crate) fn logout(scatter: &ScatterRef) -> Result<(), String> {
    interop::logout(scatter)
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn scatter_public_api_non_wasm_parity() {
        let expected = "Wallet bridge APIs are only available when compiled for wasm32".to_string();

        assert!(!activate_eos_plugin());
        assert!(!has_global("scatter"));
        assert_eq!(
            block_on(connect("demo")).expect_err("connect should fail"),
            expected
        );
        assert!(claim_scatter().is_none());

        let network = BridgeNetwork {
            blockchain: "eos".to_string(),
            chain_id: "abc".to_string(),
            host: "rpc.example".to_string(),
            port: 443,
            protocol: "https".to_string(),
        };
        assert_eq!(
            block_on(get_identity(&ScatterRef, &network)).expect_err("identity should fail"),
            expected
        );
        assert_eq!(logout(&ScatterRef).expect_err("logout should fail"), expected);
    }
}
