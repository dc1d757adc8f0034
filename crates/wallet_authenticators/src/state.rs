//! Connection state owned by one adapter.

use std::fmt;

use wallet_host::{AuthError, ConnectAttempt, WalletHandle};

/// Bridge connection lifecycle.
///
/// `Connected` carries the bridge handle, so a handle exists exactly when the adapter is
/// connected and not errored.
#[derive(Clone, Default)]
pub enum ConnectionState {
    /// No attempt has run since construction or since the last error was cleared.
    #[default]
    Uninitialized,
    /// An attempt is in flight.
    Connecting,
    /// The bridge accepted the connection and its handle has been claimed.
    Connected(WalletHandle),
    /// The last attempt failed.
    Failed(AuthError),
}

impl ConnectionState {
    /// Payload-free view of the state.
    pub fn status(&self) -> ConnectionStatus {
        match self {
            Self::Uninitialized => ConnectionStatus::Uninitialized,
            Self::Connecting => ConnectionStatus::Connecting,
            Self::Connected(_) => ConnectionStatus::Connected,
            Self::Failed(_) => ConnectionStatus::Failed,
        }
    }

    /// Recorded connection error.
    pub fn error(&self) -> Option<&AuthError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Claimed bridge handle.
    pub fn handle(&self) -> Option<&WalletHandle> {
        match self {
            Self::Connected(handle) => Some(handle),
            _ => None,
        }
    }
}

impl fmt::Debug for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed(err) => f.debug_tuple("Failed").field(err).finish(),
            other => f.write_str(other.status().as_str()),
        }
    }
}

/// Payload-free connection status for diagnostics and host inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// See [`ConnectionState::Uninitialized`].
    Uninitialized,
    /// See [`ConnectionState::Connecting`].
    Connecting,
    /// See [`ConnectionState::Connected`].
    Connected,
    /// See [`ConnectionState::Failed`].
    Failed,
}

impl ConnectionStatus {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Connecting => "connecting",
            Self::Connected => "connected",
            Self::Failed => "failed",
        }
    }
}

/// Connection state plus the single-writer bookkeeping for attempts.
///
/// Only the attempt whose token matches `attempt` may complete a transition, and while an
/// attempt is in flight new requests join it through `in_flight`.
#[derive(Default)]
pub(crate) struct ConnectionSlot {
    pub(crate) state: ConnectionState,
    pub(crate) attempt: u64,
    pub(crate) in_flight: Option<ConnectAttempt>,
}
