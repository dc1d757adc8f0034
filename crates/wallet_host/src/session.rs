//! Per-chain session identity produced by a successful login.

use std::fmt;

use crate::{
    bridge::WalletHandle,
    chain::{Chain, ChainFamily},
};

/// Authenticated account on one chain, bound to the shared bridge handle.
#[derive(Clone)]
pub struct SessionIdentity {
    chain: Chain,
    handle: WalletHandle,
    account_name: Option<String>,
    permission: Option<String>,
    keys: Vec<String>,
}

impl SessionIdentity {
    /// Binds a chain to the connected handle. No keys are known until [`Self::request_keys`].
    pub fn new(chain: Chain, handle: WalletHandle) -> Self {
        Self {
            chain,
            handle,
            account_name: None,
            permission: None,
            keys: Vec::new(),
        }
    }

    /// Asks the wallet for the identity on this chain and records the matching account.
    ///
    /// # Errors
    ///
    /// Returns the bridge error text, or a description when the wallet approved no account for
    /// the chain family.
    pub async fn request_keys(&mut self, family: ChainFamily) -> Result<&[String], String> {
        let network = self.chain.bridge_network(family);
        let identity = self.handle.get_identity(&network).await?;
        let account = identity
            .accounts
            .into_iter()
            .find(|account| account.blockchain == family.as_str())
            .ok_or_else(|| {
                format!(
                    "wallet returned no {} account for chain {}",
                    family.as_str(),
                    self.chain.chain_id
                )
            })?;

        self.account_name = Some(account.name);
        self.permission = Some(account.authority);
        self.keys = vec![account.public_key];
        Ok(&self.keys)
    }

    /// Chain this identity is bound to.
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Account name, once keys have been requested.
    pub fn account_name(&self) -> Option<&str> {
        self.account_name.as_deref()
    }

    /// Signing permission, once keys have been requested.
    pub fn permission(&self) -> Option<&str> {
        self.permission.as_deref()
    }

    /// Public keys, once requested.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Shared bridge handle.
    pub fn handle(&self) -> &WalletHandle {
        &self.handle
    }
}

impl fmt::Debug for SessionIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionIdentity")
            .field("chain_id", &self.chain.chain_id)
            .field("account_name", &self.account_name)
            .field("permission", &self.permission)
            .field("keys", &self.keys)
            .finish_non_exhaustive()
    }
}
