//! Wallet-bridge collaborator contracts and scripted in-memory implementations.
//!
//! The bridge is a page-global object owned by the wallet extension or in-app browser. Adapters
//! never read it from ambient state: they receive a [`BridgeConnector`] when they are built, which
//! lets tests substitute [`MemoryBridgeConnector`] without touching any global.

use std::{
    cell::RefCell,
    collections::{HashMap, HashSet, VecDeque},
    future::Future,
    pin::Pin,
    rc::Rc,
};

use futures::channel::oneshot;
use serde::{Deserialize, Serialize};

use crate::chain::{BridgeNetwork, ChainFamily};

/// Object-safe boxed future used by bridge collaborator traits.
pub type BridgeFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Connected bridge handle shared by the adapter and its session identities.
pub type WalletHandle = Rc<dyn WalletSession>;

/// Page-global bridge object brokering communication with the wallet.
pub trait BridgeConnector {
    /// Registers the signature-provider plugin for a chain family.
    fn activate_plugin(&self, family: ChainFamily);

    /// Returns whether a brand/platform presence flag is set on the page.
    fn has_injected_global(&self, name: &str) -> bool;

    /// Opens a connection announcing `app_name`; `Ok(false)` means the wallet declined.
    fn connect<'a>(&'a self, app_name: &'a str) -> BridgeFuture<'a, Result<bool, String>>;

    /// Captures the connected handle and clears the page-global injection point.
    fn claim_handle(&self) -> Option<WalletHandle>;
}

/// Connected wallet handle.
pub trait WalletSession {
    /// Requests the account identity the wallet exposes for `network`.
    fn get_identity<'a>(
        &'a self,
        network: &'a BridgeNetwork,
    ) -> BridgeFuture<'a, Result<BridgeIdentity, String>>;

    /// Forgets the identity held by the wallet for this page.
    fn logout(&self) -> Result<(), String>;
}

/// One account returned inside a bridge identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeAccount {
    /// Account name.
    pub name: String,
    /// Permission the account signs with.
    pub authority: String,
    /// Public key bound to the permission.
    pub public_key: String,
    /// Blockchain family token.
    pub blockchain: String,
}

/// Identity payload returned by [`WalletSession::get_identity`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeIdentity {
    /// Accounts the user approved for the requested network.
    #[serde(default)]
    pub accounts: Vec<BridgeAccount>,
}

#[derive(Debug)]
struct MemoryBridgeState {
    globals: HashSet<String>,
    connect_results: VecDeque<Result<bool, String>>,
    default_connect: Result<bool, String>,
    held_connects: VecDeque<oneshot::Receiver<()>>,
    connected: bool,
    injection_point_cleared: bool,
    plugin_activations: usize,
    connect_calls: Vec<String>,
    session: MemoryWalletSession,
}

impl Default for MemoryBridgeState {
    fn default() -> Self {
        Self {
            globals: HashSet::new(),
            connect_results: VecDeque::new(),
            default_connect: Ok(true),
            held_connects: VecDeque::new(),
            connected: false,
            injection_point_cleared: false,
            plugin_activations: 0,
            connect_calls: Vec::new(),
            session: MemoryWalletSession::default(),
        }
    }
}

/// Scripted in-memory bridge used by tests and headless hosts.
///
/// `connect` resolves to queued outcomes first and then to the default outcome (`Ok(true)`).
#[derive(Debug, Clone, Default)]
pub struct MemoryBridgeConnector {
    inner: Rc<RefCell<MemoryBridgeState>>,
}

impl MemoryBridgeConnector {
    /// Marks a page-global presence flag as set.
    pub fn with_global(self, name: impl Into<String>) -> Self {
        self.inner.borrow_mut().globals.insert(name.into());
        self
    }

    /// Queues the outcome of the next unanswered `connect` call.
    pub fn push_connect_result(&self, result: Result<bool, String>) {
        self.inner.borrow_mut().connect_results.push_back(result);
    }

    /// Sets the outcome used once the queue is empty.
    pub fn set_default_connect(&self, result: Result<bool, String>) {
        self.inner.borrow_mut().default_connect = result;
    }

    /// Holds the next `connect` call until the returned sender fires or is dropped.
    pub fn hold_next_connect(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.inner.borrow_mut().held_connects.push_back(rx);
        tx
    }

    /// Session handed out by [`BridgeConnector::claim_handle`].
    pub fn session(&self) -> MemoryWalletSession {
        self.inner.borrow().session.clone()
    }

    /// Number of plugin activations seen.
    pub fn plugin_activations(&self) -> usize {
        self.inner.borrow().plugin_activations
    }

    /// App names passed to `connect`, in call order.
    pub fn connect_calls(&self) -> Vec<String> {
        self.inner.borrow().connect_calls.clone()
    }

    /// Whether a claim has cleared the page-global injection point.
    pub fn injection_point_cleared(&self) -> bool {
        self.inner.borrow().injection_point_cleared
    }
}

impl BridgeConnector for MemoryBridgeConnector {
    fn activate_plugin(&self, _family: ChainFamily) {
        self.inner.borrow_mut().plugin_activations += 1;
    }

    fn has_injected_global(&self, name: &str) -> bool {
        self.inner.borrow().globals.contains(name)
    }

    fn connect<'a>(&'a self, app_name: &'a str) -> BridgeFuture<'a, Result<bool, String>> {
        Box::pin(async move {
            let held = {
                let mut state = self.inner.borrow_mut();
                state.connect_calls.push(app_name.to_string());
                state.held_connects.pop_front()
            };
            if let Some(rx) = held {
                let _ = rx.await;
            }

            let mut state = self.inner.borrow_mut();
            let queued = state.connect_results.pop_front();
            let result = queued.unwrap_or_else(|| state.default_connect.clone());
            state.connected = matches!(result, Ok(true));
            result
        })
    }

    fn claim_handle(&self) -> Option<WalletHandle> {
        let mut state = self.inner.borrow_mut();
        if !state.connected {
            return None;
        }
        state.injection_point_cleared = true;
        let handle: WalletHandle = Rc::new(state.session.clone());
        Some(handle)
    }
}

#[derive(Debug, Default)]
struct MemorySessionState {
    account: Option<BridgeAccount>,
    identity_failures: HashMap<String, String>,
    identity_requests: Vec<BridgeNetwork>,
    logout_error: Option<String>,
    logout_calls: usize,
}

/// Scripted in-memory wallet handle.
#[derive(Debug, Clone, Default)]
pub struct MemoryWalletSession {
    inner: Rc<RefCell<MemorySessionState>>,
}

impl MemoryWalletSession {
    /// Sets the account returned for every successful identity request.
    pub fn set_account(
        &self,
        name: impl Into<String>,
        authority: impl Into<String>,
        public_key: impl Into<String>,
    ) {
        self.inner.borrow_mut().account = Some(BridgeAccount {
            name: name.into(),
            authority: authority.into(),
            public_key: public_key.into(),
            blockchain: String::new(),
        });
    }

    /// Makes identity requests for `chain_id` fail with `message`.
    pub fn fail_identity_for(&self, chain_id: impl Into<String>, message: impl Into<String>) {
        self.inner
            .borrow_mut()
            .identity_failures
            .insert(chain_id.into(), message.into());
    }

    /// Makes `logout` fail with `message`.
    pub fn fail_logout(&self, message: impl Into<String>) {
        self.inner.borrow_mut().logout_error = Some(message.into());
    }

    /// Networks passed to `get_identity`, in call order.
    pub fn identity_requests(&self) -> Vec<BridgeNetwork> {
        self.inner.borrow().identity_requests.clone()
    }

    /// Number of `logout` calls seen.
    pub fn logout_calls(&self) -> usize {
        self.inner.borrow().logout_calls
    }
}

impl WalletSession for MemoryWalletSession {
    fn get_identity<'a>(
        &'a self,
        network: &'a BridgeNetwork,
    ) -> BridgeFuture<'a, Result<BridgeIdentity, String>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            state.identity_requests.push(network.clone());
            if let Some(message) = state.identity_failures.get(&network.chain_id) {
                return Err(message.clone());
            }

            let account = state.account.clone().unwrap_or_else(|| BridgeAccount {
                name: "alice".to_string(),
                authority: "active".to_string(),
                public_key: "EOS6MRyAjQq8ud7hVNYcfnVPJqcVpscN5So8BhtHuGYqET5GDW5CV".to_string(),
                blockchain: String::new(),
            });
            Ok(BridgeIdentity {
                accounts: vec![BridgeAccount {
                    blockchain: network.blockchain.clone(),
                    ..account
                }],
            })
        })
    }

    fn logout(&self) -> Result<(), String> {
        let mut state = self.inner.borrow_mut();
        state.logout_calls += 1;
        match &state.logout_error {
            Some(message) => Err(message.clone()),
            None => Ok(()),
        }
    }
}

/// Bridge used where no wallet integration exists; every connection attempt is declined.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopBridgeConnector;

impl BridgeConnector for NoopBridgeConnector {
    fn activate_plugin(&self, _family: ChainFamily) {}

    fn has_injected_global(&self, _name: &str) -> bool {
        false
    }

    fn connect<'a>(&'a self, _app_name: &'a str) -> BridgeFuture<'a, Result<bool, String>> {
        Box::pin(async { Ok(false) })
    }

    fn claim_handle(&self) -> Option<WalletHandle> {
        None
    }
}
