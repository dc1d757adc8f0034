//! Brand descriptors: the per-wallet values that skin the shared adapter state machine.

use wallet_host::{AuthError, AuthErrorCause, AuthErrorKind, ButtonStyle, ChainFamily, ConfigError};

/// Extra precondition a brand places on [`crate::WalletAdapter::login`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginGate {
    /// Login proceeds in any browser.
    None,
    /// Login requires the brand's in-wallet browser; elsewhere the page is sent to the magic
    /// link (if configured) and login fails.
    RequireDappBrowser,
}

/// Static description of one wallet brand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrandDescriptor {
    /// Stable adapter name, also used to tag errors.
    pub name: &'static str,
    /// Human-facing brand label.
    pub label: &'static str,
    /// Bridge plugin family registered on every connection attempt.
    pub family: ChainFamily,
    /// Lowercase token the in-wallet browser puts in its user agent.
    pub dapp_user_agent_token: &'static str,
    /// Button presentation.
    pub style: ButtonStyle,
    /// Where users without the wallet can get it.
    pub onboarding_url: &'static str,
    /// Page globals of which at least one must be present before connecting. Empty means no
    /// presence check.
    pub required_globals: &'static [&'static str],
    /// Viewport width above which the adapter is offered outside the in-wallet browser.
    pub min_render_width: Option<f64>,
    /// Login precondition.
    pub login_gate: LoginGate,
}

impl BrandDescriptor {
    /// Returns whether `user_agent` identifies this brand's in-wallet browser.
    pub fn matches_user_agent(&self, user_agent: &str) -> bool {
        user_agent
            .to_lowercase()
            .contains(self.dapp_user_agent_token)
    }

    /// Builds an error tagged with this brand.
    pub fn error(
        &self,
        message: impl Into<String>,
        kind: AuthErrorKind,
        cause: Option<AuthErrorCause>,
    ) -> AuthError {
        AuthError::new(message, kind, cause, self.name)
    }

    /// Maps a configuration problem to the construction-time error.
    pub fn config_error(&self, err: ConfigError) -> AuthError {
        let cause = match err {
            ConfigError::Invalid(detail) => Some(AuthErrorCause(detail)),
            ConfigError::MissingOptions | ConfigError::MissingAppName => None,
        };
        self.error(
            format!(
                "{} requires the appName property to be set on the `options` argument.",
                self.label
            ),
            AuthErrorKind::Initialization,
            cause,
        )
    }
}
