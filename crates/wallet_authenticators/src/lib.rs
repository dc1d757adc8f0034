//! Wallet authenticator adapters for browser-injected wallet bridges.
//!
//! A single [`WalletAdapter`] state machine implements the [`wallet_host::Authenticator`]
//! contract; each supported wallet is a [`BrandDescriptor`] value in [`brands`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod adapter;
pub mod brand;
pub mod brands;
pub mod state;

pub use adapter::WalletAdapter;
pub use brand::{BrandDescriptor, LoginGate};
pub use brands::{brand_by_name, starteos, wombat, ALL_BRANDS, STARTEOS, WOMBAT};
pub use state::{ConnectionState, ConnectionStatus};
