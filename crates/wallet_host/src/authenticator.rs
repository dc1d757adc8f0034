//! Host-facing authenticator contract driven by the application's selection UI.
//!
//! Lifecycle queries are synchronous so a render loop can poll them; connection attempts,
//! login, and logout are asynchronous. Connection failures are recorded as adapter state and
//! are read back through [`Authenticator::error`] rather than raised.

use std::{future::Future, pin::Pin};

use futures::future::Shared;
use serde::Serialize;

use crate::{chain::Chain, error::AuthError, session::SessionIdentity};

/// Object-safe boxed future used by [`Authenticator`] async methods.
pub type AuthFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Handle to an in-flight connection attempt.
///
/// The attempt runs whether or not the handle is awaited; clones observe the same outcome.
pub type ConnectAttempt = Shared<AuthFuture<'static, Result<(), AuthError>>>;

/// Default session invalidation window, in seconds.
pub const DEFAULT_INVALIDATE_AFTER_SECS: u64 = 86_400;

/// Presentation descriptor for the host's authenticator button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonStyle {
    /// Icon asset reference.
    pub icon: &'static str,
    /// Label text.
    pub text: &'static str,
    /// CSS text color.
    pub text_color: &'static str,
    /// CSS background color.
    pub background: &'static str,
}

/// Plugin contract every wallet adapter exposes to the host.
pub trait Authenticator {
    /// Chains configured for this adapter, in login order.
    fn chains(&self) -> &[Chain];

    /// Starts connecting to the wallet bridge.
    ///
    /// The adapter reports loading as soon as this returns.
    fn init(&self) -> ConnectAttempt;

    /// Clears a recorded connection error and starts a new attempt without requiring the caller
    /// to await it.
    fn reset(&self) -> ConnectAttempt;

    /// Whether a connection attempt is in flight.
    fn is_loading(&self) -> bool;

    /// Whether the last connection attempt failed.
    fn is_errored(&self) -> bool;

    /// Error recorded by the last failed connection attempt.
    fn error(&self) -> Option<AuthError>;

    /// Button presentation for the selection UI.
    fn style(&self) -> ButtonStyle;

    /// Whether the host should offer this adapter on the current page.
    fn should_render(&self) -> bool;

    /// Whether the host may log in without a user gesture.
    fn should_auto_login(&self) -> bool;

    /// Authenticates against every configured chain.
    fn login<'a>(
        &'a self,
        account_name: Option<&'a str>,
    ) -> AuthFuture<'a, Result<Vec<SessionIdentity>, AuthError>>;

    /// Logs out of the wallet.
    fn logout(&self) -> AuthFuture<'_, Result<(), AuthError>>;

    /// Whether the host must prompt for an account name before login.
    fn should_request_account_name(&self) -> AuthFuture<'_, bool>;

    /// Whether key retrieval needs explicit user confirmation.
    fn requires_get_key_confirmation(&self, account_name: Option<&str>) -> bool;

    /// Where users without the wallet can get it.
    fn onboarding_link(&self) -> &str;

    /// Stable adapter name.
    fn name(&self) -> &str;

    /// Seconds after which the host should treat a session as expired.
    fn should_invalidate_after(&self) -> u64 {
        DEFAULT_INVALIDATE_AFTER_SECS
    }
}
