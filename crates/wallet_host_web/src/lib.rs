//! Browser (`wasm32`) implementations of [`wallet_host`] collaborator contracts.
//!
//! This crate wires the ScatterJS bridge, the `window` page environment, and the
//! `spawn_local` executor into an [`wallet_host::AdapterServices`] bundle. Outside wasm32 every
//! implementation is inert so host crates still build and test natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time bridge-strategy selection and the adapter collaborator bundle.
pub mod adapters;
mod bridge;
pub mod connector;
pub mod page;
pub mod spawner;

pub use adapters::{build_adapter_services, selected_bridge_strategy, BridgeStrategy};
pub use connector::{ScatterBridgeConnector, ScatterWalletSession};
pub use page::WebPageEnvironment;
pub use spawner::BrowserSpawner;
