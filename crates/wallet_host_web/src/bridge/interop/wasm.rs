use js_sys::Promise;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::*;

#[wasm_bindgen(inline_js = r#"
let scatterCore = null;

function core() {
  if (!scatterCore && globalThis.ScatterJS) {
    scatterCore = globalThis.ScatterJS;
  }
  return scatterCore;
}

export function jsScatterActivateEosPlugin() {
  const scatterJs = core();
  const EosPlugin = globalThis.ScatterEOS;
  if (!scatterJs || typeof scatterJs.plugins !== 'function' || typeof EosPlugin !== 'function') {
    return false;
  }
  scatterJs.plugins(new EosPlugin());
  return true;
}

export function jsHasGlobal(name) {
  return !!globalThis[name];
}

export async function jsScatterConnect(appName) {
  const scatterJs = core();
  if (!scatterJs || !scatterJs.scatter) {
    throw new Error('ScatterJS is not loaded on this page');
  }
  return !!(await scatterJs.scatter.connect(appName));
}

export function jsScatterClaim() {
  const scatterJs = core();
  const scatter = scatterJs ? scatterJs.scatter : null;
  globalThis.ScatterJS = null;
  return scatter || null;
}

export async function jsScatterGetIdentity(scatter, network) {
  return await scatter.getIdentity({ accounts: [network] });
}

export function jsScatterLogout(scatter) {
  scatter.logout();
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = jsScatterActivateEosPlugin)]
    fn js_scatter_activate_eos_plugin() -> bool;
    #[wasm_bindgen(js_name = jsHasGlobal)]
    fn js_has_global(name: &str) -> bool;
    #[wasm_bindgen(js_name = jsScatterConnect)]
    fn js_scatter_connect(app_name: &str) -> Promise;
    #[wasm_bindgen(js_name = jsScatterClaim)]
    fn js_scatter_claim() -> JsValue;
    #[wasm_bindgen(js_name = jsScatterGetIdentity)]
    fn js_scatter_get_identity(scatter: &JsValue, network: JsValue) -> Promise;
    #[wasm_bindgen(catch, js_name = jsScatterLogout)]
    fn js_scatter_logout(scatter: &JsValue) -> Result<(), JsValue>;
}

/// Connected ScatterJS `scatter` object.
#[derive(Debug, Clone)]
pub struct ScatterRef(JsValue);

async fn await_promise(promise: Promise) -> Result<JsValue, String> {
    JsFuture::from(promise).await.map_err(js_error_to_string)
}

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

pub fn activate_eos_plugin() -> bool {
    js_scatter_activate_eos_plugin()
}

pub fn has_global(name: &str) -> bool {
    js_has_global(name)
}

pub async fn connect(app_name: &str) -> Result<bool, String> {
    let value = await_promise(js_scatter_connect(app_name)).await?;
    Ok(value.as_bool().unwrap_or(false))
}

pub fn claim_scatter() -> Option<ScatterRef> {
    let value = js_scatter_claim();
    if value.is_null() || value.is_undefined() {
        None
    } else {
        Some(ScatterRef(value))
    }
}

pub async fn get_identity(
    scatter: &ScatterRef,
    network: &BridgeNetwork,
) -> Result<BridgeIdentity, String> {
    let network = network
        .serialize(&Serializer::json_compatible())
        .map_err(|e| e.to_string())?;
    let value = await_promise(js_scatter_get_identity(&scatter.0, network)).await?;
    if value.is_null() || value.is_undefined() {
        return Err("wallet returned no identity".to_string());
    }
    from_value(value).map_err(|e| e.to_string())
}

pub fn logout(scatter: &ScatterRef) -> Result<(), String> {
    js_scatter_logout(&scatter.0).map_err(js_error_to_string)
}
