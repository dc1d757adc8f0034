//! Authenticator error taxonomy surfaced to the hosting application.

use thiserror::Error;

/// Taxonomy kind attached to every [`AuthError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthErrorKind {
    /// Bad configuration, or the bridge failed to connect.
    Initialization,
    /// Wrong environment for login, or key retrieval failed for a chain.
    Login,
    /// The bridge logout call raised.
    Logout,
}

impl AuthErrorKind {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initialization => "initialization",
            Self::Login => "login",
            Self::Logout => "logout",
        }
    }
}

/// Underlying collaborator failure preserved for diagnostics.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct AuthErrorCause(pub String);

impl From<String> for AuthErrorCause {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Error raised (or recorded as state) by an authenticator adapter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct AuthError {
    message: String,
    kind: AuthErrorKind,
    #[source]
    cause: Option<AuthErrorCause>,
    origin: &'static str,
}

impl AuthError {
    /// Creates an error tagged with the originating adapter name.
    pub fn new(
        message: impl Into<String>,
        kind: AuthErrorKind,
        cause: Option<AuthErrorCause>,
        origin: &'static str,
    ) -> Self {
        Self {
            message: message.into(),
            kind,
            cause,
            origin,
        }
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Taxonomy kind.
    pub const fn kind(&self) -> AuthErrorKind {
        self.kind
    }

    /// Underlying collaborator failure, if any.
    pub fn cause(&self) -> Option<&AuthErrorCause> {
        self.cause.as_ref()
    }

    /// Name of the adapter that produced the error.
    pub const fn origin(&self) -> &'static str {
        self.origin
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn source_exposes_preserved_cause() {
        let err = AuthError::new(
            "Unable to login",
            AuthErrorKind::Login,
            Some(AuthErrorCause("identity rejected".to_string())),
            "wombat",
        );

        assert_eq!(err.to_string(), "Unable to login");
        assert_eq!(err.origin(), "wombat");
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("identity rejected")
        );
    }

    #[test]
    fn error_without_cause_has_no_source() {
        let err = AuthError::new(
            "Error occurred while connecting",
            AuthErrorKind::Initialization,
            None,
            "starteos",
        );
        assert!(err.source().is_none());
        assert_eq!(err.kind().as_str(), "initialization");
    }
}
