//! Captures the host's launch sources from the process environment.

use teamfinder_core::launch::{LaunchEnvironment, WebAppBridge};

pub const ENV_LAUNCH_PARAMS: &str = "TEAMFINDER_LAUNCH_PARAMS";
pub const ENV_WEBAPP_INIT_DATA: &str = "TEAMFINDER_WEBAPP_INIT_DATA";
pub const ENV_LAUNCH_URL: &str = "TEAMFINDER_LAUNCH_URL";

/// Reads the launch sources from the process environment.
pub fn capture_launch_environment() -> LaunchEnvironment {
    capture_launch_environment_with(|key| std::env::var(key).ok())
}

/// Reads the launch sources through `lookup`.
///
/// The bridge object counts as injected whenever its variable is set, even
/// to an empty string: the host is present but handed no init data.
pub fn capture_launch_environment_with<F>(lookup: F) -> LaunchEnvironment
where
    F: Fn(&str) -> Option<String>,
{
    let web_app = lookup(ENV_WEBAPP_INIT_DATA).map(|init_data| WebAppBridge {
        init_data: Some(init_data).filter(|s| !s.is_empty()),
    });

    let environment = LaunchEnvironment {
        launch_params: lookup(ENV_LAUNCH_PARAMS).filter(|s| !s.trim().is_empty()),
        web_app,
        url: lookup(ENV_LAUNCH_URL).filter(|s| !s.trim().is_empty()),
    };

    tracing::debug!(
        "[LaunchEnv] launch_params={}, bridge={}, url={}",
        environment.launch_params.is_some(),
        environment.web_app.is_some(),
        environment.url.is_some()
    );
    environment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bridge_still_marks_host() {
        let env = capture_launch_environment_with(|key| match key {
            ENV_WEBAPP_INIT_DATA => Some(String::new()),
            _ => None,
        });
        assert!(env.has_host_bridge());
        assert_eq!(env.web_app.unwrap().init_data, None);
        assert!(env.launch_params.is_none());
    }

    #[test]
    fn test_nothing_set() {
        let env = capture_launch_environment_with(|_| None);
        assert_eq!(env, LaunchEnvironment::default());
    }
}
