use super::*;

fn unsupported() -> String {
    "Wallet bridge APIs are only available when compiled for wasm32".to_string()
}

/// Placeholder handle; never produced outside wasm32.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct ScatterRef;

pub fn activate_eos_plugin() -> bool {
    false
}

pub fn has_global(_name: &str) -> bool {
    false
}

pub async fn connect(_app_name: &str) -> Result<bool, String> {
    Err(unsupported())
}

pub fn claim_scatter() -> Option<ScatterRef> {
    None
}

pub async fn get_identity(
    _scatter: &ScatterRef,
    _network: &BridgeNetwork,
) -> Result<BridgeIdentity, String> {
    Err(unsupported())
}

pub fn logout(_scatter: &ScatterRef) -> Result<(), String> {
    Err(unsupported())
}
