//! Chain descriptors configured by the host and the bridge network shape derived from them.

use serde::{Deserialize, Serialize};

/// Bridge plugin family used to address a group of compatible chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChainFamily {
    /// EOSIO-compatible chains (`eos` blockchain token on the bridge).
    #[default]
    Eosio,
}

impl ChainFamily {
    /// Returns the blockchain token the bridge uses for this family.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eosio => "eos",
        }
    }
}

/// One RPC endpoint advertised for a chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcEndpoint {
    /// `http` or `https`.
    pub protocol: String,
    /// Endpoint host name.
    pub host: String,
    /// Endpoint port.
    pub port: u16,
    /// Optional path prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Blockchain network descriptor the adapter can authenticate against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chain {
    /// Chain id (hex digest of the genesis state).
    pub chain_id: String,
    /// Known RPC endpoints, most preferred first.
    #[serde(default)]
    pub rpc_endpoints: Vec<RpcEndpoint>,
}

impl Chain {
    /// Creates a chain with a single RPC endpoint.
    pub fn new(chain_id: impl Into<String>, endpoint: RpcEndpoint) -> Self {
        Self {
            chain_id: chain_id.into(),
            rpc_endpoints: vec![endpoint],
        }
    }

    /// Derives the network descriptor the bridge expects in identity requests.
    ///
    /// Only the first RPC endpoint is used. A chain without endpoints still produces a
    /// descriptor so the bridge can match on `chainId` alone.
    pub fn bridge_network(&self, family: ChainFamily) -> BridgeNetwork {
        let endpoint = self.rpc_endpoints.first();
        BridgeNetwork {
            blockchain: family.as_str().to_string(),
            chain_id: self.chain_id.clone(),
            host: endpoint.map(|e| e.host.clone()).unwrap_or_default(),
            port: endpoint.map_or(0, |e| e.port),
            protocol: endpoint.map_or_else(|| "https".to_string(), |e| e.protocol.clone()),
        }
    }
}

/// Network payload sent to the bridge when requesting an identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeNetwork {
    /// Blockchain family token.
    pub blockchain: String,
    /// Chain id.
    pub chain_id: String,
    /// RPC host.
    pub host: String,
    /// RPC port.
    pub port: u16,
    /// RPC protocol.
    pub protocol: String,
}
