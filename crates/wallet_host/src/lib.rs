//! Typed contracts and shared models for wallet authenticator adapters.
//!
//! This crate is the host-agnostic boundary between the authenticator state machine and the
//! browser. It exposes chain/config models, the error taxonomy, the bridge and page collaborator
//! traits with in-memory fakes, and the host-facing [`Authenticator`] contract. Browser
//! implementations live in `wallet_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod authenticator;
pub mod bridge;
pub mod chain;
pub mod config;
pub mod environment;
pub mod error;
pub mod services;
pub mod session;

pub use authenticator::{
    AuthFuture, Authenticator, ButtonStyle, ConnectAttempt, DEFAULT_INVALIDATE_AFTER_SECS,
};
pub use bridge::{
    BridgeAccount, BridgeConnector, BridgeFuture, BridgeIdentity, MemoryBridgeConnector,
    MemoryWalletSession, NoopBridgeConnector, WalletHandle, WalletSession,
};
pub use chain::{BridgeNetwork, Chain, ChainFamily, RpcEndpoint};
pub use config::{AdapterConfig, ConfigError};
pub use environment::{MemoryPageEnvironment, NoopPageEnvironment, PageEnvironment};
pub use error::{AuthError, AuthErrorCause, AuthErrorKind};
pub use services::AdapterServices;
pub use session::SessionIdentity;
