//! The three credential sources, one probe each.

use serde::Deserialize;
use teamfinder_core::launch::{CredentialProbe, INIT_DATA_URL_PARAM, WebAppBridge};
use teamfinder_core::{Result, TeamfinderError};
use url::Url;
use url::form_urlencoded;

/// Reads `initDataRaw` from the host SDK's launch parameters.
#[derive(Debug, Clone)]
pub struct SdkLaunchParamsProbe {
    launch_params: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LaunchParams {
    #[serde(default)]
    init_data_raw: Option<String>,
}

impl SdkLaunchParamsProbe {
    pub fn new(launch_params: Option<String>) -> Self {
        Self { launch_params }
    }
}

impl CredentialProbe for SdkLaunchParamsProbe {
    fn name(&self) -> &'static str {
        "sdk-launch-params"
    }

    fn probe(&self) -> Result<Option<String>> {
        let Some(raw) = self.launch_params.as_deref() else {
            return Ok(None);
        };
        let params: LaunchParams = serde_json::from_str(raw)?;
        Ok(non_empty(params.init_data_raw))
    }
}

/// Reads `initData` from the native bridge object.
#[derive(Debug, Clone)]
pub struct NativeBridgeProbe {
    bridge: Option<WebAppBridge>,
}

impl NativeBridgeProbe {
    pub fn new(bridge: Option<WebAppBridge>) -> Self {
        Self { bridge }
    }
}

impl CredentialProbe for NativeBridgeProbe {
    fn name(&self) -> &'static str {
        "native-bridge"
    }

    fn probe(&self) -> Result<Option<String>> {
        Ok(non_empty(
            self.bridge.as_ref().and_then(|bridge| bridge.init_data.clone()),
        ))
    }
}

/// Reads the `tgWebAppData` parameter of the launch URL.
///
/// The fragment is parsed as a query string and searched first, then the
/// query. Percent-escapes are decoded exactly once.
#[derive(Debug, Clone)]
pub struct UrlParamProbe {
    url: Option<String>,
}

impl UrlParamProbe {
    pub fn new(url: Option<String>) -> Self {
        Self { url }
    }
}

impl CredentialProbe for UrlParamProbe {
    fn name(&self) -> &'static str {
        "launch-url"
    }

    fn probe(&self) -> Result<Option<String>> {
        let Some(raw) = self.url.as_deref() else {
            return Ok(None);
        };
        let url = Url::parse(raw)
            .map_err(|e| TeamfinderError::config(format!("invalid launch URL: {}", e)))?;

        let from_fragment = url.fragment().and_then(find_init_data);
        let found = from_fragment.or_else(|| url.query().and_then(find_init_data));
        Ok(non_empty(found))
    }
}

fn find_init_data(query: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == INIT_DATA_URL_PARAM)
        .map(|(_, value)| value.into_owned())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdk_probe_reads_init_data_raw() {
        let probe = SdkLaunchParamsProbe::new(Some(
            r#"{"initDataRaw":"query_id=1&hash=ab","platform":"ios"}"#.to_string(),
        ));
        assert_eq!(probe.probe().unwrap().as_deref(), Some("query_id=1&hash=ab"));
    }

    #[test]
    fn test_sdk_probe_malformed_json_fails() {
        let probe = SdkLaunchParamsProbe::new(Some("{not json".to_string()));
        assert!(probe.probe().is_err());
    }

    #[test]
    fn test_sdk_probe_empty_field_is_absent() {
        let probe = SdkLaunchParamsProbe::new(Some(r#"{"initDataRaw":""}"#.to_string()));
        assert_eq!(probe.probe().unwrap(), None);
    }

    #[test]
    fn test_bridge_probe() {
        let probe = NativeBridgeProbe::new(Some(WebAppBridge {
            init_data: Some("user=%7B%7D".to_string()),
        }));
        assert_eq!(probe.probe().unwrap().as_deref(), Some("user=%7B%7D"));

        let empty = NativeBridgeProbe::new(Some(WebAppBridge::default()));
        assert_eq!(empty.probe().unwrap(), None);
    }

    #[test]
    fn test_url_probe_decodes_query_once() {
        let probe = UrlParamProbe::new(Some(
            "https://app.example/?tgWebAppData=role%3Dadmin".to_string(),
        ));
        assert_eq!(probe.probe().unwrap().as_deref(), Some("role=admin"));

        let double = UrlParamProbe::new(Some(
            "https://app.example/?tgWebAppData=user%253D1".to_string(),
        ));
        assert_eq!(double.probe().unwrap().as_deref(), Some("user%3D1"));
    }

    #[test]
    fn test_url_probe_prefers_fragment() {
        let probe = UrlParamProbe::new(Some(
            "https://app.example/?tgWebAppData=from-query#tgWebAppData=from%20fragment&tgWebAppVersion=7.0"
                .to_string(),
        ));
        assert_eq!(probe.probe().unwrap().as_deref(), Some("from fragment"));
    }

    #[test]
    fn test_url_probe_without_param() {
        let probe = UrlParamProbe::new(Some("https://app.example/#/hackathons".to_string()));
        assert_eq!(probe.probe().unwrap(), None);
    }

    #[test]
    fn test_url_probe_invalid_url_fails() {
        let probe = UrlParamProbe::new(Some("not a url".to_string()));
        assert!(probe.probe().is_err());
    }
}
