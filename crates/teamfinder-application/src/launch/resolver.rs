use teamfinder_core::launch::{CredentialProbe, LaunchEnvironment};

use super::probes::{NativeBridgeProbe, SdkLaunchParamsProbe, UrlParamProbe};

/// Finds the host's credential blob by trying each probe in order.
///
/// The first non-empty value wins and later probes are never called. A probe
/// that fails counts as "not found"; `resolve` itself never fails.
pub struct CredentialResolver {
    probes: Vec<Box<dyn CredentialProbe>>,
}

impl CredentialResolver {
    /// Creates a resolver over an explicit probe order.
    pub fn new(probes: Vec<Box<dyn CredentialProbe>>) -> Self {
        Self { probes }
    }

    /// The standard order: SDK launch parameters, native bridge, launch URL.
    pub fn from_environment(environment: &LaunchEnvironment) -> Self {
        Self::new(vec![
            Box::new(SdkLaunchParamsProbe::new(environment.launch_params.clone())),
            Box::new(NativeBridgeProbe::new(environment.web_app.clone())),
            Box::new(UrlParamProbe::new(environment.url.clone())),
        ])
    }

    pub fn resolve(&self) -> Option<String> {
        for probe in &self.probes {
            match probe.probe() {
                Ok(Some(value)) if !value.is_empty() => {
                    tracing::debug!(
                        "[CredentialResolver] Credential found via {} ({} bytes)",
                        probe.name(),
                        value.len()
                    );
                    return Some(value);
                }
                Ok(_) => {
                    tracing::debug!("[CredentialResolver] {} has no credential", probe.name());
                }
                Err(e) => {
                    tracing::warn!("[CredentialResolver] Probe {} failed: {}", probe.name(), e);
                }
            }
        }
        tracing::debug!("[CredentialResolver] No credential source available");
        None
    }
}
