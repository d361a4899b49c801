//! What the chat-platform host hands to the app at launch.
//!
//! The host can expose the signed init data in three places: its SDK's
//! launch parameters, a native bridge object injected into the page, or a
//! `tgWebAppData` parameter of the launch URL when the app was opened in an
//! external browser.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Name of the launch URL parameter carrying the credential blob.
pub const INIT_DATA_URL_PARAM: &str = "tgWebAppData";

/// Native bridge object injected by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebAppBridge {
    pub init_data: Option<String>,
}

/// Snapshot of every launch source. Captured once; never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchEnvironment {
    /// Raw launch parameters JSON from the host SDK.
    pub launch_params: Option<String>,
    pub web_app: Option<WebAppBridge>,
    pub url: Option<String>,
}

impl LaunchEnvironment {
    /// Whether a native bridge object is present.
    pub fn has_host_bridge(&self) -> bool {
        self.web_app.is_some()
    }
}

/// One source of the credential blob.
///
/// `Ok(None)` means the source has nothing; `Err` means the probe itself
/// failed. Callers treat both as "not found".
pub trait CredentialProbe: Send + Sync {
    fn name(&self) -> &'static str;

    fn probe(&self) -> Result<Option<String>>;
}
