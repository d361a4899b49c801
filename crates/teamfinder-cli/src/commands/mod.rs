pub mod applications;
pub mod hackathons;
pub mod profile;
pub mod session;

use anyhow::{Result, bail};
use std::sync::Arc;
use teamfinder_application::auth::LOADING_PLACEHOLDER;
use teamfinder_application::{Gated, TeamfinderApp};
use teamfinder_core::auth::Session;

/// Waits behind the auth gate and hands back the session.
///
/// Nothing past the gate runs until the bootstrap has succeeded.
pub async fn authenticated(app: &TeamfinderApp) -> Result<Arc<Session>> {
    let mut gate = app.gate();
    if !gate.render(|_| ()).is_ready() {
        eprintln!("{}", LOADING_PLACEHOLDER);
    }
    gate.settled().await;

    match gate.render(|session| session) {
        Gated::Ready(session) => Ok(session),
        Gated::Failed(message) => bail!(message),
        Gated::Loading(placeholder) => bail!(placeholder),
    }
}
