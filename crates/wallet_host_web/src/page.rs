//! `window`-backed page environment.

use wallet_host::PageEnvironment;

#[derive(Debug, Clone, Copy, Default)]
/// Page environment reading `navigator.userAgent`, `innerWidth`, and `location`.
pub struct WebPageEnvironment;

impl PageEnvironment for WebPageEnvironment {
    fn user_agent(&self) -> String {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::window()
                .and_then(|w| w.navigator().user_agent().ok())
                .unwrap_or_default()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            String::new()
        }
    }

    fn inner_width(&self) -> Option<f64> {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::window()?.inner_width().ok()?.as_f64()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn navigate_to(&self, url: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
            window
                .location()
                .set_href(url)
                .map_err(|e| format!("location.href assignment failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = url;
            Err("page navigation is only available when compiled for wasm32".to_string())
        }
    }
}
