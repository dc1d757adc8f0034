//! The shared wallet adapter state machine.
//!
//! One [`WalletAdapter`] implementation serves every brand; a [`BrandDescriptor`] supplies the
//! values that differ (names, styling, dapp-browser detection, presence checks, login gate).
//!
//! Connection attempts are spawned on the injected executor so they progress whether or not the
//! host awaits the returned [`ConnectAttempt`]. At most one attempt is in flight; calling
//! [`Authenticator::init`] or [`Authenticator::reset`] while connecting joins the running attempt.

use std::{cell::RefCell, rc::Rc};

use futures::{future::FutureExt, task::LocalSpawnExt};
use leptos::logging;
use serde_json::Value;
use wallet_host::{
    AdapterConfig, AdapterServices, AuthError, AuthErrorCause, AuthErrorKind, AuthFuture,
    Authenticator, ButtonStyle, Chain, ConnectAttempt, SessionIdentity, WalletHandle,
};

use crate::{
    brand::{BrandDescriptor, LoginGate},
    state::{ConnectionSlot, ConnectionState, ConnectionStatus},
};

const CONNECT_FAILED: &str = "Error occurred while connecting";
const LOGIN_FAILED: &str = "Unable to login";
const LOGOUT_FAILED: &str = "Error occurred during logout";
const STILL_CONNECTING: &str = "Wallet connection is still in progress";
const NOT_CONNECTED: &str = "Wallet bridge is not connected";

struct AdapterCore {
    brand: &'static BrandDescriptor,
    chains: Vec<Chain>,
    config: AdapterConfig,
    services: AdapterServices,
    connection: RefCell<ConnectionSlot>,
    sessions: RefCell<Vec<SessionIdentity>>,
}

/// Wallet authenticator adapter for one brand.
///
/// Cloning is cheap and clones share state.
#[derive(Clone)]
pub struct WalletAdapter {
    core: Rc<AdapterCore>,
}

impl WalletAdapter {
    /// Creates an adapter. Construction touches no bridge or page state.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthErrorKind::Initialization`] error when `config.app_name` is empty.
    pub fn new(
        brand: &'static BrandDescriptor,
        chains: Vec<Chain>,
        config: AdapterConfig,
        services: AdapterServices,
    ) -> Result<Self, AuthError> {
        let config = config.validated().map_err(|err| brand.config_error(err))?;
        Ok(Self {
            core: Rc::new(AdapterCore {
                brand,
                chains,
                config,
                services,
                connection: RefCell::new(ConnectionSlot::default()),
                sessions: RefCell::new(Vec::new()),
            }),
        })
    }

    /// Creates an adapter from a raw host options object (`{ appName, magicLink? }`).
    ///
    /// # Errors
    ///
    /// Returns an [`AuthErrorKind::Initialization`] error when the options are missing,
    /// malformed, or lack `appName`.
    pub fn from_options(
        brand: &'static BrandDescriptor,
        chains: Vec<Chain>,
        options: Option<Value>,
        services: AdapterServices,
    ) -> Result<Self, AuthError> {
        let config = AdapterConfig::from_options(options).map_err(|err| brand.config_error(err))?;
        Self::new(brand, chains, config, services)
    }

    /// Brand this adapter is skinned with.
    pub fn brand(&self) -> &'static BrandDescriptor {
        self.core.brand
    }

    /// Validated configuration.
    pub fn config(&self) -> &AdapterConfig {
        &self.core.config
    }

    /// Current connection status.
    pub fn connection_status(&self) -> ConnectionStatus {
        self.core.connection.borrow().state.status()
    }

    /// Sessions committed by the last successful login.
    pub fn sessions(&self) -> Vec<SessionIdentity> {
        self.core.sessions.borrow().clone()
    }

    /// Whether the page is the brand's in-wallet browser.
    pub fn is_dapp_browser(&self) -> bool {
        self.core
            .brand
            .matches_user_agent(&self.core.services.page.user_agent())
    }

    fn start_attempt(&self) -> ConnectAttempt {
        let token = {
            let mut slot = self.core.connection.borrow_mut();
            if let Some(in_flight) = &slot.in_flight {
                logging::log!(
                    "{}: connection attempt already in flight; joining it",
                    self.core.brand.name
                );
                return in_flight.clone();
            }
            slot.attempt += 1;
            slot.state = ConnectionState::Connecting;
            slot.attempt
        };

        let core = Rc::clone(&self.core);
        let run: AuthFuture<'static, Result<(), AuthError>> =
            Box::pin(async move { core.connect(token).await });
        let attempt = run.shared();
        self.core.connection.borrow_mut().in_flight = Some(attempt.clone());

        if let Err(err) = self
            .core
            .services
            .spawner
            .spawn_local(attempt.clone().map(|_| ()))
        {
            logging::warn!(
                "{}: could not schedule connection attempt ({err}); it runs only when awaited",
                self.core.brand.name
            );
        }
        attempt
    }

    fn connected_handle(&self) -> Result<WalletHandle, AuthError> {
        let slot = self.core.connection.borrow();
        match &slot.state {
            ConnectionState::Connected(handle) => Ok(Rc::clone(handle)),
            ConnectionState::Connecting => Err(self.core.brand.error(
                STILL_CONNECTING,
                AuthErrorKind::Login,
                None,
            )),
            ConnectionState::Uninitialized | ConnectionState::Failed(_) => Err(self
                .core
                .brand
                .error(NOT_CONNECTED, AuthErrorKind::Login, None)),
        }
    }

    fn check_login_gate(&self) -> Result<(), AuthError> {
        let brand = self.core.brand;
        match brand.login_gate {
            LoginGate::None => Ok(()),
            LoginGate::RequireDappBrowser if self.is_dapp_browser() => Ok(()),
            LoginGate::RequireDappBrowser => {
                if let Some(link) = &self.core.config.magic_link {
                    if let Err(err) = self.core.services.page.navigate_to(link) {
                        logging::warn!("{}: magic link redirect failed: {err}", brand.name);
                    }
                }
                Err(brand.error(
                    format!("You need to open the dapp within the {} wallet", brand.label),
                    AuthErrorKind::Login,
                    None,
                ))
            }
        }
    }

    async fn login_chains(&self) -> Result<Vec<SessionIdentity>, AuthError> {
        self.core.sessions.borrow_mut().clear();
        self.check_login_gate()?;
        let handle = self.connected_handle()?;

        let brand = self.core.brand;
        let mut sessions = Vec::with_capacity(self.core.chains.len());
        for chain in &self.core.chains {
            let mut identity = SessionIdentity::new(chain.clone(), Rc::clone(&handle));
            identity.request_keys(brand.family).await.map_err(|cause| {
                logging::warn!(
                    "{}: key request failed for chain {}: {cause}",
                    brand.name,
                    chain.chain_id
                );
                brand.error(LOGIN_FAILED, AuthErrorKind::Login, Some(cause.into()))
            })?;
            sessions.push(identity);
        }

        *self.core.sessions.borrow_mut() = sessions.clone();
        Ok(sessions)
    }

    fn logout_bridge(&self) -> Result<(), AuthError> {
        let brand = self.core.brand;
        let handle = self.core.connection.borrow().state.handle().cloned();
        let handle = handle.ok_or_else(|| {
            brand.error(
                LOGOUT_FAILED,
                AuthErrorKind::Logout,
                Some(AuthErrorCause(NOT_CONNECTED.to_string())),
            )
        })?;
        handle.logout().map_err(|cause| {
            logging::warn!("{}: logout failed: {cause}", brand.name);
            brand.error(LOGOUT_FAILED, AuthErrorKind::Logout, Some(cause.into()))
        })?;
        self.core.sessions.borrow_mut().clear();
        Ok(())
    }
}

impl AdapterCore {
    async fn connect(self: Rc<Self>, token: u64) -> Result<(), AuthError> {
        self.services.bridge.activate_plugin(self.brand.family);
        let outcome = self.open_bridge().await;
        self.finish_attempt(token, outcome)
    }

    async fn open_bridge(&self) -> Result<WalletHandle, AuthError> {
        let brand = self.brand;
        let bridge = &self.services.bridge;
        let connect_failed = |cause: Option<String>| {
            brand.error(
                CONNECT_FAILED,
                AuthErrorKind::Initialization,
                cause.map(AuthErrorCause),
            )
        };

        let present = brand.required_globals.is_empty()
            || brand
                .required_globals
                .iter()
                .any(|name| bridge.has_injected_global(name));
        if !present {
            return Err(connect_failed(Some(format!(
                "none of the page globals {:?} is present",
                brand.required_globals
            ))));
        }

        match bridge.connect(&self.config.app_name).await {
            Ok(true) => {}
            Ok(false) => return Err(connect_failed(None)),
            Err(cause) => return Err(connect_failed(Some(cause))),
        }

        bridge.claim_handle().ok_or_else(|| {
            connect_failed(Some("bridge reported a connection but exposed no handle".to_string()))
        })
    }

    fn finish_attempt(
        &self,
        token: u64,
        outcome: Result<WalletHandle, AuthError>,
    ) -> Result<(), AuthError> {
        let mut slot = self.connection.borrow_mut();
        if slot.attempt != token {
            logging::warn!(
                "{}: discarding outcome of superseded connection attempt",
                self.brand.name
            );
            return outcome.map(|_| ());
        }

        slot.in_flight = None;
        match outcome {
            Ok(handle) => {
                slot.state = ConnectionState::Connected(handle);
                logging::log!("{}: connected to wallet bridge", self.brand.name);
                Ok(())
            }
            Err(err) => {
                logging::warn!("{}: {err}", self.brand.name);
                slot.state = ConnectionState::Failed(err.clone());
                Err(err)
            }
        }
    }
}

impl Authenticator for WalletAdapter {
    fn chains(&self) -> &[Chain] {
        &self.core.chains
    }

    fn init(&self) -> ConnectAttempt {
        self.start_attempt()
    }

    fn reset(&self) -> ConnectAttempt {
        {
            let mut slot = self.core.connection.borrow_mut();
            if matches!(slot.state, ConnectionState::Failed(_)) {
                slot.state = ConnectionState::Uninitialized;
            }
        }
        self.start_attempt()
    }

    fn is_loading(&self) -> bool {
        self.connection_status() == ConnectionStatus::Connecting
    }

    fn is_errored(&self) -> bool {
        self.connection_status() == ConnectionStatus::Failed
    }

    fn error(&self) -> Option<AuthError> {
        self.core.connection.borrow().state.error().cloned()
    }

    fn style(&self) -> ButtonStyle {
        self.core.brand.style
    }

    fn should_render(&self) -> bool {
        let brand = self.core.brand;
        let wide_enough = brand.min_render_width.is_some_and(|min| {
            self.core
                .services
                .page
                .inner_width()
                .is_some_and(|width| width > min)
        });
        self.is_dapp_browser() || self.core.config.magic_link.is_some() || wide_enough
    }

    fn should_auto_login(&self) -> bool {
        false
    }

    fn login<'a>(
        &'a self,
        _account_name: Option<&'a str>,
    ) -> AuthFuture<'a, Result<Vec<SessionIdentity>, AuthError>> {
        Box::pin(self.login_chains())
    }

    fn logout(&self) -> AuthFuture<'_, Result<(), AuthError>> {
        Box::pin(async move { self.logout_bridge() })
    }

    fn should_request_account_name(&self) -> AuthFuture<'_, bool> {
        Box::pin(async { false })
    }

    fn requires_get_key_confirmation(&self, _account_name: Option<&str>) -> bool {
        false
    }

    fn onboarding_link(&self) -> &str {
        self.core.brand.onboarding_url
    }

    fn name(&self) -> &str {
        self.core.brand.name
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::{block_on, LocalPool};
    use pretty_assertions::assert_eq;
    use wallet_host::{MemoryBridgeConnector, MemoryPageEnvironment, RpcEndpoint};

    use super::*;
    use crate::brands::{STARTEOS, WOMBAT};

    fn chain(id: &str) -> Chain {
        Chain::new(
            id,
            RpcEndpoint {
                protocol: "https".to_string(),
                host: format!("{id}.rpc.example"),
                port: 443,
                path: None,
            },
        )
    }

    fn services(
        bridge: &MemoryBridgeConnector,
        page: &MemoryPageEnvironment,
        pool: &LocalPool,
    ) -> AdapterServices {
        AdapterServices {
            bridge: Rc::new(bridge.clone()),
            page: Rc::new(page.clone()),
            spawner: Rc::new(pool.spawner()),
        }
    }

    struct Harness {
        pool: LocalPool,
        bridge: MemoryBridgeConnector,
        page: MemoryPageEnvironment,
        adapter: WalletAdapter,
    }

    fn harness(brand: &'static BrandDescriptor, chains: &[&str]) -> Harness {
        let pool = LocalPool::new();
        let bridge = MemoryBridgeConnector::default().with_global("scatter");
        let page = MemoryPageEnvironment::default().with_user_agent("Mozilla/5.0 Starteos Wombat");
        let adapter = WalletAdapter::new(
            brand,
            chains.iter().map(|id| chain(id)).collect(),
            AdapterConfig::new("demo"),
            services(&bridge, &page, &pool),
        )
        .expect("adapter");
        Harness {
            pool,
            bridge,
            page,
            adapter,
        }
    }

    fn connected(brand: &'static BrandDescriptor, chains: &[&str]) -> Harness {
        let mut h = harness(brand, chains);
        h.pool
            .run_until(h.adapter.init())
            .expect("connection succeeds");
        h
    }

    #[test]
    fn construction_without_app_name_fails_with_initialization() {
        let pool = LocalPool::new();
        let bridge = MemoryBridgeConnector::default();
        let page = MemoryPageEnvironment::default();
        for config in [
            AdapterConfig::new(""),
            AdapterConfig::new("").with_magic_link("https://wallet.example"),
        ] {
            let err = WalletAdapter::new(
                &WOMBAT,
                vec![chain("c1")],
                config,
                services(&bridge, &page, &pool),
            )
            .err()
            .expect("construction should fail");
            assert_eq!(err.kind(), AuthErrorKind::Initialization);
            assert_eq!(err.origin(), "wombat");
            assert!(err.cause().is_none());
        }
        assert!(bridge.connect_calls().is_empty());
        assert_eq!(bridge.plugin_activations(), 0);
    }

    #[test]
    fn construction_from_options_requires_app_name() {
        let pool = LocalPool::new();
        let bridge = MemoryBridgeConnector::default();
        let page = MemoryPageEnvironment::default();
        let err = WalletAdapter::from_options(
            &STARTEOS,
            Vec::new(),
            Some(serde_json::json!({"magicLink": "https://starteos.io/open"})),
            services(&bridge, &page, &pool),
        )
        .err()
        .expect("construction should fail");
        assert_eq!(err.kind(), AuthErrorKind::Initialization);
        assert_eq!(err.origin(), "starteos");

        let adapter = WalletAdapter::from_options(
            &STARTEOS,
            Vec::new(),
            Some(serde_json::json!({"appName": "demo", "magicLink": "https://starteos.io/open"})),
            services(&bridge, &page, &pool),
        )
        .expect("adapter");
        assert_eq!(adapter.config().app_name, "demo");
        assert_eq!(adapter.connection_status(), ConnectionStatus::Uninitialized);
    }

    #[test]
    fn init_reports_loading_until_connect_resolves() {
        let mut h = harness(&WOMBAT, &["c1"]);
        let release = h.bridge.hold_next_connect();

        let attempt = h.adapter.init();
        assert!(h.adapter.is_loading());
        assert!(!h.adapter.is_errored());

        h.pool.run_until_stalled();
        assert!(h.adapter.is_loading());

        release.send(()).expect("release connect");
        h.pool.run_until_stalled();
        assert!(!h.adapter.is_loading());
        assert!(!h.adapter.is_errored());
        assert_eq!(h.adapter.connection_status(), ConnectionStatus::Connected);
        assert_eq!(block_on(attempt), Ok(()));
        assert_eq!(h.bridge.connect_calls(), vec!["demo".to_string()]);
        assert_eq!(h.bridge.plugin_activations(), 1);
        assert!(h.bridge.injection_point_cleared());
    }

    #[test]
    fn attempt_progresses_when_handle_is_dropped() {
        let mut h = harness(&STARTEOS, &["c1"]);
        drop(h.adapter.init());
        h.pool.run_until_stalled();
        assert_eq!(h.adapter.connection_status(), ConnectionStatus::Connected);
    }

    #[test]
    fn declined_connect_is_recorded_as_initialization_error() {
        let mut h = harness(&STARTEOS, &["c1"]);
        h.bridge.push_connect_result(Ok(false));

        let outcome = h.pool.run_until(h.adapter.init());
        let err = h.adapter.error().expect("error recorded");
        assert_eq!(outcome, Err(err.clone()));
        assert!(h.adapter.is_errored());
        assert!(!h.adapter.is_loading());
        assert_eq!(err.kind(), AuthErrorKind::Initialization);
        assert_eq!(err.message(), "Error occurred while connecting");
        assert_eq!(err.origin(), "starteos");
        assert!(err.cause().is_none());
        assert!(!h.bridge.injection_point_cleared());
    }

    #[test]
    fn rejected_connect_preserves_cause() {
        let mut h = harness(&STARTEOS, &["c1"]);
        h.bridge
            .push_connect_result(Err("extension unavailable".to_string()));

        let _ = h.pool.run_until(h.adapter.init());
        let err = h.adapter.error().expect("error recorded");
        assert_eq!(
            err.cause(),
            Some(&AuthErrorCause("extension unavailable".to_string()))
        );
    }

    #[test]
    fn second_init_while_connecting_joins_in_flight_attempt() {
        let mut h = harness(&WOMBAT, &["c1"]);
        let release = h.bridge.hold_next_connect();

        let first = h.adapter.init();
        let second = h.adapter.init();
        let third = h.adapter.reset();
        h.pool.run_until_stalled();
        assert_eq!(h.bridge.connect_calls().len(), 1);

        release.send(()).expect("release connect");
        h.pool.run_until_stalled();
        assert_eq!(block_on(first), Ok(()));
        assert_eq!(block_on(second), Ok(()));
        assert_eq!(block_on(third), Ok(()));
        assert_eq!(h.bridge.connect_calls().len(), 1);
    }

    #[test]
    fn reset_clears_error_before_new_attempt_settles() {
        let mut h = harness(&STARTEOS, &["c1"]);
        h.bridge.push_connect_result(Ok(false));
        h.bridge.push_connect_result(Ok(false));
        let _ = h.pool.run_until(h.adapter.init());
        assert!(h.adapter.is_errored());

        let retry = h.adapter.reset();
        assert!(!h.adapter.is_errored());
        assert!(h.adapter.error().is_none());
        assert!(h.adapter.is_loading());

        h.pool.run_until_stalled();
        assert!(h.adapter.is_errored());
        assert!(block_on(retry).is_err());
    }

    #[test]
    fn init_after_success_reconnects() {
        let mut h = connected(&STARTEOS, &["c1"]);
        let _ = h.pool.run_until(h.adapter.init());
        assert_eq!(h.adapter.connection_status(), ConnectionStatus::Connected);
        assert_eq!(h.bridge.connect_calls().len(), 2);
        assert_eq!(h.bridge.plugin_activations(), 2);
    }

    #[test]
    fn login_before_connection_fails_fast() {
        let mut h = harness(&WOMBAT, &["c1"]);
        let err = block_on(h.adapter.login(None)).expect_err("not connected");
        assert_eq!(err.kind(), AuthErrorKind::Login);
        assert_eq!(err.message(), NOT_CONNECTED);

        let release = h.bridge.hold_next_connect();
        let _attempt = h.adapter.init();
        let err = block_on(h.adapter.login(None)).expect_err("still connecting");
        assert_eq!(err.kind(), AuthErrorKind::Login);
        assert_eq!(err.message(), STILL_CONNECTING);
        assert!(h.bridge.session().identity_requests().is_empty());

        drop(release);
        h.pool.run_until_stalled();
    }

    #[test]
    fn login_returns_one_identity_per_chain_in_order() {
        let h = connected(&WOMBAT, &["c1", "c2", "c3"]);

        let sessions = block_on(h.adapter.login(Some("ignored"))).expect("login");
        let ids: Vec<&str> = sessions
            .iter()
            .map(|session| session.chain().chain_id.as_str())
            .collect();
        assert_eq!(ids, vec!["c1", "c2", "c3"]);
        assert!(sessions
            .iter()
            .all(|session| session.account_name() == Some("alice")));
        assert_eq!(h.adapter.sessions().len(), 3);
    }

    #[test]
    fn login_partial_failure_discards_progress_and_stops_at_failing_chain() {
        let h = connected(&WOMBAT, &["c1", "c2", "c3"]);
        let first = block_on(h.adapter.login(None)).expect("first login");
        assert_eq!(first.len(), 3);

        h.bridge.session().fail_identity_for("c2", "user rejected");
        let err = block_on(h.adapter.login(None)).expect_err("login fails");
        assert_eq!(err.kind(), AuthErrorKind::Login);
        assert_eq!(err.message(), "Unable to login");
        assert_eq!(
            err.cause(),
            Some(&AuthErrorCause("user rejected".to_string()))
        );
        assert!(h.adapter.sessions().is_empty());

        let requested: Vec<String> = h
            .bridge
            .session()
            .identity_requests()
            .into_iter()
            .skip(3)
            .map(|network| network.chain_id)
            .collect();
        assert_eq!(requested, vec!["c1".to_string(), "c2".to_string()]);
    }

    #[test]
    fn login_does_not_change_connection_state() {
        let h = connected(&WOMBAT, &["c1"]);
        h.bridge.session().fail_identity_for("c1", "boom");
        let _ = block_on(h.adapter.login(None));
        assert_eq!(h.adapter.connection_status(), ConnectionStatus::Connected);
        assert!(!h.adapter.is_errored());
    }

    #[test]
    fn logout_failure_is_wrapped_with_cause() {
        let h = connected(&WOMBAT, &["c1"]);
        h.bridge.session().fail_logout("wallet locked");

        let err = block_on(h.adapter.logout()).expect_err("logout fails");
        assert_eq!(err.kind(), AuthErrorKind::Logout);
        assert_eq!(err.message(), "Error occurred during logout");
        assert_eq!(
            err.cause(),
            Some(&AuthErrorCause("wallet locked".to_string()))
        );
    }

    #[test]
    fn logout_keeps_connection_and_clears_sessions() {
        let h = connected(&WOMBAT, &["c1"]);
        block_on(h.adapter.login(None)).expect("login");

        block_on(h.adapter.logout()).expect("logout");
        assert_eq!(h.bridge.session().logout_calls(), 1);
        assert!(h.adapter.sessions().is_empty());
        assert_eq!(h.adapter.connection_status(), ConnectionStatus::Connected);
    }

    #[test]
    fn logout_without_connection_is_a_logout_error() {
        let h = harness(&STARTEOS, &["c1"]);
        let err = block_on(h.adapter.logout()).expect_err("not connected");
        assert_eq!(err.kind(), AuthErrorKind::Logout);
        assert_eq!(h.bridge.session().logout_calls(), 0);
    }

    #[test]
    fn static_queries_do_not_depend_on_state() {
        let mut h = harness(&WOMBAT, &["c1"]);
        h.bridge.push_connect_result(Ok(false));
        for step in 0..2 {
            assert!(!h.adapter.should_auto_login());
            assert!(!h.adapter.requires_get_key_confirmation(None));
            assert!(!block_on(h.adapter.should_request_account_name()));
            assert_eq!(h.adapter.name(), "wombat");
            assert_eq!(h.adapter.onboarding_link(), "https://getwombat.io/");
            assert_eq!(h.adapter.should_invalidate_after(), 86_400);
            if step == 0 {
                let _ = h.pool.run_until(h.adapter.init());
            }
        }
        assert!(h.page.navigations().is_empty());
    }
}
