//! Wiring of one client instance.

use std::sync::Arc;
use teamfinder_core::Result;
use teamfinder_core::auth::AuthorizationSlot;
use teamfinder_core::config::ClientConfig;
use teamfinder_core::launch::LaunchEnvironment;
use teamfinder_core::storage::LocalStorage;
use teamfinder_interaction::ApiClient;

use crate::auth::{AuthBootstrap, AuthGate, AuthQuery, LoginPolicy};
use crate::launch::CredentialResolver;
use crate::services::{
    AchievementService, ApplicationService, HackathonService, ProfileService, SkillService,
};
use crate::session_store::SessionStore;

/// Everything one client instance needs, sharing a single bearer slot
/// between the session store and the HTTP client.
pub struct TeamfinderApp {
    config: ClientConfig,
    session_store: SessionStore,
    auth: AuthQuery,
    profile: ProfileService,
    skills: SkillService,
    hackathons: HackathonService,
    achievements: AchievementService,
    applications: ApplicationService,
}

impl TeamfinderApp {
    /// Builds the client.
    ///
    /// # Arguments
    ///
    /// * `config` - Loaded client configuration
    /// * `storage` - Durable storage holding the session token
    /// * `environment` - Launch sources captured from the host
    pub fn new(
        config: ClientConfig,
        storage: Arc<dyn LocalStorage>,
        environment: LaunchEnvironment,
    ) -> Result<Self> {
        let authorization = AuthorizationSlot::new();
        let api = ApiClient::from_config(&config, authorization.clone())?;
        let session_store = SessionStore::new(storage, authorization);

        let policy = LoginPolicy::from_config(&config, &environment);
        tracing::debug!(
            "[TeamfinderApp] api={}, inside_host={}, dev_login_allowed={}",
            api.base_url(),
            policy.inside_host,
            policy.dev_login_allowed
        );

        let bootstrap = AuthBootstrap::new(
            Arc::new(api.clone()),
            session_store.clone(),
            CredentialResolver::from_environment(&environment),
            policy,
        );

        let profile = ProfileService::new(api.clone());
        let achievements = AchievementService::new(api.clone(), profile.me_query());

        Ok(Self {
            config,
            session_store,
            auth: AuthQuery::new(Arc::new(bootstrap)),
            skills: SkillService::new(api.clone()),
            hackathons: HackathonService::new(api.clone()),
            applications: ApplicationService::new(api),
            profile,
            achievements,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn auth(&self) -> &AuthQuery {
        &self.auth
    }

    /// A gate over this client's auth query.
    pub fn gate(&self) -> AuthGate {
        AuthGate::new(&self.auth)
    }

    pub fn profile(&self) -> &ProfileService {
        &self.profile
    }

    pub fn skills(&self) -> &SkillService {
        &self.skills
    }

    pub fn hackathons(&self) -> &HackathonService {
        &self.hackathons
    }

    pub fn achievements(&self) -> &AchievementService {
        &self.achievements
    }

    pub fn applications(&self) -> &ApplicationService {
        &self.applications
    }

    /// Clears the stored session and forgets the cached auth outcome.
    pub async fn logout(&self) -> Result<()> {
        self.session_store.clear().await?;
        self.auth.reset();
        self.profile.reset();
        tracing::info!("[TeamfinderApp] Logged out");
        Ok(())
    }
}
