//! Wombat wallet brand.

use wallet_host::{AdapterConfig, AdapterServices, AuthError, ButtonStyle, Chain, ChainFamily};

use crate::{
    brand::{BrandDescriptor, LoginGate},
    WalletAdapter,
};

/// Wombat: connects only when the extension or in-app browser injected its globals, and is
/// offered on wide viewports even outside the in-app browser.
pub static WOMBAT: BrandDescriptor = BrandDescriptor {
    name: "wombat",
    label: "Wombat",
    family: ChainFamily::Eosio,
    dapp_user_agent_token: "wombat",
    style: ButtonStyle {
        icon: "icons/wombat.svg",
        text: "Wombat",
        text_color: "#FFFFFF",
        background: "#f43e27",
    },
    onboarding_url: "https://getwombat.io/",
    required_globals: &["__wombat__", "scatter"],
    min_render_width: Some(700.0),
    login_gate: LoginGate::None,
};

/// Builds a Wombat adapter.
///
/// # Errors
///
/// Returns an initialization error when `config.app_name` is empty.
pub fn wombat(
    chains: Vec<Chain>,
    config: AdapterConfig,
    services: AdapterServices,
) -> Result<WalletAdapter, AuthError> {
    WalletAdapter::new(&WOMBAT, chains, config, services)
}
