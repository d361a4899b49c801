//! ApiClient - the single HTTP client of the Teamfinder backend.
//!
//! Every request reads the shared [`AuthorizationSlot`] at send time, so the
//! `Authorization` header always equals the session store's current token.

use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use teamfinder_core::auth::AuthorizationSlot;
use teamfinder_core::config::ClientConfig;
use teamfinder_core::{Result, TeamfinderError};
use url::Url;

/// REST client bound to one backend base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    authorization: AuthorizationSlot,
}

impl ApiClient {
    /// Creates a client with the transport's default settings.
    pub fn new(base_url: &str, authorization: AuthorizationSlot) -> Result<Self> {
        Self::with_client(Client::new(), base_url, authorization)
    }

    /// Creates a client from the loaded configuration.
    pub fn from_config(config: &ClientConfig, authorization: AuthorizationSlot) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TeamfinderError::config(format!("failed to build HTTP client: {}", e)))?;
        Self::with_client(client, &config.api_base_url, authorization)
    }

    fn with_client(client: Client, base_url: &str, authorization: AuthorizationSlot) -> Result<Self> {
        let base_url = Url::parse(base_url.trim())?;
        if base_url.cannot_be_a_base() {
            return Err(TeamfinderError::config(format!(
                "API base URL '{}' cannot be a base",
                base_url
            )));
        }
        Ok(Self {
            client,
            base_url,
            authorization,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The bearer slot this client reads on every request.
    pub fn authorization(&self) -> &AuthorizationSlot {
        &self.authorization
    }

    /// Resolves an endpoint path against the base URL, keeping any path
    /// prefix the base URL carries.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{}/{}", base, path))?)
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.endpoint(path)?;
        tracing::debug!("[ApiClient] {} {}", method, url.path());

        let mut builder = self.client.request(method, url);
        if let Some(value) = self.authorization.header_value() {
            let header = HeaderValue::from_str(&value)
                .map_err(|_| TeamfinderError::internal("bearer token is not a valid header value"))?;
            builder = builder.header(AUTHORIZATION, header);
        }
        Ok(builder)
    }

    // ============================================================================
    // Verb helpers used by the resource modules
    // ============================================================================

    pub(crate) async fn get_json<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let builder = self.request(Method::GET, path)?.query(query);
        decode_json(send(builder).await?).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path)?.json(body);
        decode_json(send(builder).await?).await
    }

    pub(crate) async fn patch_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::PATCH, path)?.json(body);
        decode_json(send(builder).await?).await
    }

    /// PATCH whose response body is not needed.
    pub(crate) async fn patch_empty<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let builder = self.request(Method::PATCH, path)?.json(body);
        send(builder).await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let builder = self.request(Method::DELETE, path)?;
        send(builder).await?;
        Ok(())
    }
}

async fn send(builder: RequestBuilder) -> Result<Response> {
    let response = builder
        .send()
        .await
        .map_err(|err| TeamfinderError::network(format!("request failed: {}", err)))?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "failed to read error body".to_string());
    let error = map_http_error(status, &body);
    if error.is_unauthorized() {
        tracing::debug!("[ApiClient] Token rejected with status {}", status.as_u16());
    } else {
        tracing::warn!("[ApiClient] Request failed: {}", error);
    }
    Err(error)
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response
        .bytes()
        .await
        .map_err(|err| TeamfinderError::network(format!("failed to read response body: {}", err)))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Maps a non-success response to the shared error type.
///
/// FastAPI-style bodies (`{"detail": ...}`) contribute their detail as the
/// message; anything else is passed through as text.
pub(crate) fn map_http_error(status: StatusCode, body: &str) -> TeamfinderError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("detail").cloned())
        .map(|detail| match detail {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        })
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            } else {
                trimmed.to_string()
            }
        });

    TeamfinderError::from_status(status.as_u16(), message)
}
