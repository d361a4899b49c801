//! The auth bootstrap state machine.
//!
//! ```text
//! NoToken ──────────────────────────────┐
//!    │ stored token                     ▼
//!    └─► Validating ──401/403──► TokenRejected ──► ReAuthenticating ──► Authenticated
//!            │   └─other error──► Failed                   └──────────► Failed
//!            └─ok──► Authenticated
//! ```

use std::sync::{Arc, Mutex};
use teamfinder_core::auth::{AuthBackend, DevIdentity, Session};
use teamfinder_core::config::ClientConfig;
use teamfinder_core::launch::LaunchEnvironment;
use teamfinder_core::{Result, TeamfinderError};

use crate::launch::CredentialResolver;
use crate::session_store::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapState {
    NoToken,
    Validating,
    TokenRejected,
    ReAuthenticating,
    Authenticated,
    Failed,
}

/// Which credential exchange the bootstrap uses when it needs a new token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginPolicy {
    /// Running inside the chat-platform host.
    pub inside_host: bool,
    /// Dev-login is permitted outside the host.
    pub dev_login_allowed: bool,
}

impl LoginPolicy {
    /// Inside the host means the native bridge is present and browser mode
    /// is not forced.
    pub fn from_config(config: &ClientConfig, environment: &LaunchEnvironment) -> Self {
        Self {
            inside_host: environment.has_host_bridge() && !config.force_browser_mode,
            dev_login_allowed: config.dev_login_allowed(),
        }
    }

    pub fn use_dev_login(&self) -> bool {
        !self.inside_host && self.dev_login_allowed
    }
}

/// Establishes an authenticated session.
///
/// One `run` validates a stored token if there is one, and otherwise
/// exchanges a credential for a new token. Only an authorization-class
/// rejection clears the stored token; any other failure is fatal and leaves
/// it in place.
pub struct AuthBootstrap {
    backend: Arc<dyn AuthBackend>,
    session_store: SessionStore,
    resolver: CredentialResolver,
    policy: LoginPolicy,
    dev_identity: DevIdentity,
    state: Mutex<BootstrapState>,
}

impl AuthBootstrap {
    /// Creates a bootstrap.
    ///
    /// # Arguments
    ///
    /// * `backend` - Profile and auth endpoints
    /// * `session_store` - Persisted token and request default
    /// * `resolver` - Host credential sources
    /// * `policy` - Dev-login versus host-credential exchange
    pub fn new(
        backend: Arc<dyn AuthBackend>,
        session_store: SessionStore,
        resolver: CredentialResolver,
        policy: LoginPolicy,
    ) -> Self {
        Self {
            backend,
            session_store,
            resolver,
            policy,
            dev_identity: DevIdentity::default(),
            state: Mutex::new(BootstrapState::NoToken),
        }
    }

    pub fn with_dev_identity(mut self, identity: DevIdentity) -> Self {
        self.dev_identity = identity;
        self
    }

    pub fn policy(&self) -> LoginPolicy {
        self.policy
    }

    /// State reached by the latest run.
    pub fn state(&self) -> BootstrapState {
        *self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Runs the bootstrap once.
    ///
    /// Callers that need at-most-once semantics go through
    /// [`AuthQuery`](super::AuthQuery), which single-flights and caches this.
    pub async fn run(&self) -> Result<Session> {
        let Some(token) = self.session_store.get_token().await else {
            self.transition(BootstrapState::NoToken);
            return self.authenticate().await;
        };

        self.transition(BootstrapState::Validating);
        match self.backend.fetch_profile().await {
            Ok(profile) => {
                self.transition(BootstrapState::Authenticated);
                Ok(Session {
                    access_token: token,
                    profile,
                })
            }
            Err(e) if e.is_unauthorized() => {
                tracing::warn!(
                    "[AuthBootstrap] Stored token rejected (status {}), re-authenticating",
                    e.status().unwrap_or_default()
                );
                self.transition(BootstrapState::TokenRejected);
                if let Err(clear_error) = self.session_store.clear().await {
                    return Err(self.fail(clear_error));
                }
                self.authenticate().await
            }
            Err(e) => {
                tracing::warn!("[AuthBootstrap] Token validation failed, keeping token: {}", e);
                Err(self.fail(e))
            }
        }
    }

    async fn authenticate(&self) -> Result<Session> {
        self.transition(BootstrapState::ReAuthenticating);

        let exchanged = if self.policy.use_dev_login() {
            tracing::info!("[AuthBootstrap] Outside host with dev mode, using dev-login");
            self.backend.dev_login(&self.dev_identity).await
        } else {
            match self.resolver.resolve() {
                Some(init_data) => self.backend.exchange_init_data(&init_data).await,
                None => {
                    tracing::warn!("[AuthBootstrap] No credential available");
                    Err(TeamfinderError::CredentialUnavailable)
                }
            }
        };

        let session = match exchanged {
            Ok(session) => session,
            Err(e) => return Err(self.fail(e)),
        };

        match self
            .session_store
            .set_token(&session.access_token, session.profile)
            .await
        {
            Ok(session) => {
                self.transition(BootstrapState::Authenticated);
                Ok(session)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    fn fail(&self, error: TeamfinderError) -> TeamfinderError {
        self.transition(BootstrapState::Failed);
        error
    }

    fn transition(&self, next: BootstrapState) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        tracing::debug!("[AuthBootstrap] {:?} -> {:?}", *state, next);
        *state = next;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use teamfinder_core::auth::{AUTH_STORAGE_KEY, AuthorizationSlot};
    use teamfinder_core::storage::LocalStorage;
    use teamfinder_core::user::User;

    pub(crate) fn user(id: u64) -> User {
        User {
            id,
            telegram_id: 100 + id as i64,
            username: Some("ada".to_string()),
            first_name: Some("Ada".to_string()),
            last_name: None,
            avatar_url: None,
            bio: None,
            city: None,
            university: None,
            link: None,
            skills: vec![],
            achievements: vec![],
        }
    }

    #[derive(Default)]
    pub(crate) struct MapStorage {
        items: std::sync::Mutex<HashMap<String, String>>,
    }

    impl MapStorage {
        pub(crate) fn with_token(token: &str) -> Self {
            let storage = Self::default();
            storage
                .items
                .lock()
                .unwrap()
                .insert(AUTH_STORAGE_KEY.to_string(), token.to_string());
            storage
        }

        pub(crate) fn token(&self) -> Option<String> {
            self.items.lock().unwrap().get(AUTH_STORAGE_KEY).cloned()
        }
    }

    #[async_trait]
    impl LocalStorage for MapStorage {
        async fn get_item(&self, key: &str) -> Result<Option<String>> {
            Ok(self.items.lock().unwrap().get(key).cloned())
        }

        async fn set_item(&self, key: &str, value: &str) -> Result<()> {
            self.items
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn remove_item(&self, key: &str) -> Result<()> {
            self.items.lock().unwrap().remove(key);
            Ok(())
        }
    }

    /// Scripted backend recording every call and the bearer seen by
    /// `fetch_profile`.
    pub(crate) struct MockAuthBackend {
        pub(crate) slot: AuthorizationSlot,
        pub(crate) profile_result: Result<User>,
        pub(crate) exchange_result: Result<Session>,
        pub(crate) profile_calls: AtomicUsize,
        pub(crate) dev_calls: AtomicUsize,
        pub(crate) exchange_calls: AtomicUsize,
        pub(crate) seen_bearer: std::sync::Mutex<Option<String>>,
        pub(crate) seen_identity: std::sync::Mutex<Option<DevIdentity>>,
        pub(crate) seen_init_data: std::sync::Mutex<Option<String>>,
    }

    impl MockAuthBackend {
        pub(crate) fn new(slot: AuthorizationSlot) -> Self {
            Self {
                slot,
                profile_result: Ok(user(1)),
                exchange_result: Ok(Session {
                    access_token: "fresh".to_string(),
                    profile: user(2),
                }),
                profile_calls: AtomicUsize::new(0),
                dev_calls: AtomicUsize::new(0),
                exchange_calls: AtomicUsize::new(0),
                seen_bearer: std::sync::Mutex::new(None),
                seen_identity: std::sync::Mutex::new(None),
                seen_init_data: std::sync::Mutex::new(None),
            }
        }

        pub(crate) fn auth_calls(&self) -> usize {
            self.dev_calls.load(Ordering::SeqCst) + self.exchange_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AuthBackend for MockAuthBackend {
        async fn fetch_profile(&self) -> Result<User> {
            self.profile_calls.fetch_add(1, Ordering::SeqCst);
            *self.seen_bearer.lock().unwrap() = self.slot.header_value();
            self.profile_result.clone()
        }

        async fn dev_login(&self, identity: &DevIdentity) -> Result<Session> {
            self.dev_calls.fetch_add(1, Ordering::SeqCst);
            *self.seen_identity.lock().unwrap() = Some(identity.clone());
            self.exchange_result.clone()
        }

        async fn exchange_init_data(&self, init_data: &str) -> Result<Session> {
            self.exchange_calls.fetch_add(1, Ordering::SeqCst);
            *self.seen_init_data.lock().unwrap() = Some(init_data.to_string());
            self.exchange_result.clone()
        }
    }

    const HOST: LoginPolicy = LoginPolicy {
        inside_host: true,
        dev_login_allowed: false,
    };

    const BROWSER_DEV: LoginPolicy = LoginPolicy {
        inside_host: false,
        dev_login_allowed: true,
    };

    fn host_environment(init_data: &str) -> LaunchEnvironment {
        LaunchEnvironment {
            web_app: Some(teamfinder_core::launch::WebAppBridge {
                init_data: Some(init_data.to_string()),
            }),
            ..LaunchEnvironment::default()
        }
    }

    struct Harness {
        storage: Arc<MapStorage>,
        slot: AuthorizationSlot,
        backend: Arc<MockAuthBackend>,
        bootstrap: AuthBootstrap,
    }

    fn harness(
        storage: MapStorage,
        policy: LoginPolicy,
        environment: LaunchEnvironment,
        configure: impl FnOnce(&mut MockAuthBackend),
    ) -> Harness {
        let storage = Arc::new(storage);
        let slot = AuthorizationSlot::new();
        let mut backend = MockAuthBackend::new(slot.clone());
        configure(&mut backend);
        let backend = Arc::new(backend);
        let bootstrap = AuthBootstrap::new(
            backend.clone(),
            SessionStore::new(storage.clone(), slot.clone()),
            CredentialResolver::from_environment(&environment),
            policy,
        );
        Harness {
            storage,
            slot,
            backend,
            bootstrap,
        }
    }

    #[tokio::test]
    async fn test_dev_login_without_token() {
        let h = harness(MapStorage::default(), BROWSER_DEV, LaunchEnvironment::default(), |_| {});

        let session = h.bootstrap.run().await.unwrap();

        assert_eq!(session.access_token, "fresh");
        assert_eq!(h.backend.dev_calls.load(Ordering::SeqCst), 1);
        assert_eq!(h.backend.profile_calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            h.backend.seen_identity.lock().unwrap().clone(),
            Some(DevIdentity::default())
        );
        assert_eq!(h.storage.token().as_deref(), Some("fresh"));
        assert_eq!(h.slot.token().as_deref(), Some("fresh"));
        assert_eq!(h.bootstrap.state(), BootstrapState::Authenticated);
    }

    #[tokio::test]
    async fn test_valid_stored_token() {
        let h = harness(
            MapStorage::with_token("abc"),
            HOST,
            host_environment("blob"),
            |_| {},
        );

        let session = h.bootstrap.run().await.unwrap();

        assert_eq!(session.access_token, "abc");
        assert_eq!(session.profile.id, 1);
        assert_eq!(h.backend.auth_calls(), 0);
        assert_eq!(
            h.backend.seen_bearer.lock().unwrap().as_deref(),
            Some("Bearer abc")
        );
        assert_eq!(h.storage.token().as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_rejected_token_clears_and_exchanges_once() {
        let h = harness(
            MapStorage::with_token("abc"),
            HOST,
            host_environment("query_id=1&hash=ff"),
            |backend| {
                backend.profile_result = Err(TeamfinderError::from_status(403, "forbidden"));
                backend.exchange_result = Err(TeamfinderError::from_status(500, "down"));
            },
        );

        let err = h.bootstrap.run().await.unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert_eq!(h.storage.token(), None);
        assert!(!h.slot.is_set());
        assert_eq!(h.backend.exchange_calls.load(Ordering::SeqCst), 1);
        assert_eq!(h.backend.dev_calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            h.backend.seen_init_data.lock().unwrap().as_deref(),
            Some("query_id=1&hash=ff")
        );
        assert_eq!(h.bootstrap.state(), BootstrapState::Failed);
    }

    #[tokio::test]
    async fn test_401_then_successful_exchange() {
        let h = harness(
            MapStorage::with_token("abc"),
            HOST,
            host_environment("blob"),
            |backend| {
                backend.profile_result = Err(TeamfinderError::from_status(401, "expired"));
            },
        );

        let session = h.bootstrap.run().await.unwrap();

        assert_eq!(session.access_token, "fresh");
        assert_eq!(session.profile.id, 2);
        assert_eq!(h.backend.auth_calls(), 1);
        assert_eq!(h.storage.token().as_deref(), Some("fresh"));
    }

    #[tokio::test]
    async fn test_server_error_keeps_token() {
        let h = harness(
            MapStorage::with_token("abc"),
            HOST,
            host_environment("blob"),
            |backend| {
                backend.profile_result = Err(TeamfinderError::from_status(500, "boom"));
            },
        );

        let err = h.bootstrap.run().await.unwrap_err();

        assert!(err.is_transient());
        assert_eq!(h.storage.token().as_deref(), Some("abc"));
        assert_eq!(h.slot.token().as_deref(), Some("abc"));
        assert_eq!(h.backend.auth_calls(), 0);
        assert_eq!(h.bootstrap.state(), BootstrapState::Failed);
    }

    #[tokio::test]
    async fn test_network_error_keeps_token() {
        let h = harness(
            MapStorage::with_token("abc"),
            BROWSER_DEV,
            LaunchEnvironment::default(),
            |backend| {
                backend.profile_result = Err(TeamfinderError::network("connection refused"));
            },
        );

        assert!(h.bootstrap.run().await.is_err());
        assert_eq!(h.storage.token().as_deref(), Some("abc"));
        assert_eq!(h.backend.auth_calls(), 0);
    }

    #[tokio::test]
    async fn test_no_credential_is_fatal() {
        let policy = LoginPolicy {
            inside_host: false,
            dev_login_allowed: false,
        };
        let h = harness(MapStorage::default(), policy, LaunchEnvironment::default(), |_| {});

        let err = h.bootstrap.run().await.unwrap_err();

        assert_eq!(err, TeamfinderError::CredentialUnavailable);
        assert_eq!(h.backend.auth_calls(), 0);
        assert_eq!(h.storage.token(), None);
    }

    #[tokio::test]
    async fn test_inside_host_ignores_dev_mode() {
        let policy = LoginPolicy {
            inside_host: true,
            dev_login_allowed: true,
        };
        let h = harness(MapStorage::default(), policy, host_environment("blob"), |_| {});

        h.bootstrap.run().await.unwrap();
        assert_eq!(h.backend.dev_calls.load(Ordering::SeqCst), 0);
        assert_eq!(h.backend.exchange_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_login_policy_from_config() {
        let config = ClientConfig {
            dev_mode: false,
            force_dev_login: false,
            force_browser_mode: false,
            ..ClientConfig::default()
        };
        let bridge = host_environment("blob");

        let in_host = LoginPolicy::from_config(&config, &bridge);
        assert!(in_host.inside_host);
        assert!(!in_host.use_dev_login());

        let forced_browser = ClientConfig {
            force_browser_mode: true,
            force_dev_login: true,
            ..config.clone()
        };
        let policy = LoginPolicy::from_config(&forced_browser, &bridge);
        assert!(!policy.inside_host);
        assert!(policy.use_dev_login());

        let plain_browser = LoginPolicy::from_config(&config, &LaunchEnvironment::default());
        assert!(!plain_browser.use_dev_login());
    }
}
