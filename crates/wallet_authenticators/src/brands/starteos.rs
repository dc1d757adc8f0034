//! Starteos wallet brand.

use wallet_host::{AdapterConfig, AdapterServices, AuthError, ButtonStyle, Chain, ChainFamily};

use crate::{
    brand::{BrandDescriptor, LoginGate},
    WalletAdapter,
};

/// Starteos: login only works inside the Starteos in-app browser.
pub static STARTEOS: BrandDescriptor = BrandDescriptor {
    name: "starteos",
    label: "Starteos",
    family: ChainFamily::Eosio,
    dapp_user_agent_token: "starteos",
    style: ButtonStyle {
        icon: "icons/starteos.svg",
        text: "Starteos",
        text_color: "white",
        background: "#00cbbe",
    },
    onboarding_url: "https://starteos.io/",
    required_globals: &[],
    min_render_width: None,
    login_gate: LoginGate::RequireDappBrowser,
};

/// Builds a Starteos adapter.
///
/// # Errors
///
/// Returns an initialization error when `config.app_name` is empty.
pub fn starteos(
    chains: Vec<Chain>,
    config: AdapterConfig,
    services: AdapterServices,
) -> Result<WalletAdapter, AuthError> {
    WalletAdapter::new(&STARTEOS, chains, config, services)
}
