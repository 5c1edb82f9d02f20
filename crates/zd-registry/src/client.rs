//! Registry client — maps each operation onto a single GET against the registry origin.

use crate::timeout::with_timeout;
use crate::{BuildError, RegistryError};
use reqwest::{Client as HttpClient, Response};
use serde_json::Value;
use std::future::Future;
use std::time::Duration;
use zd_core::component::{ComponentCode, ComponentListing, ComponentRecord, DesignContext};

/// Origin serving the Zendesign registry.
pub const DEFAULT_BASE_URL: &str = "https://zendesign-psi.vercel.app";

/// Upper bound on a single upstream call, body included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl RegistryConfig {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }
}

/// Stateless façade over the registry HTTP API.
///
/// Cloning is cheap and clones share the underlying connection pool; no
/// other state survives a call.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    http: HttpClient,
    base_url: String,
    timeout: Duration,
}

impl RegistryClient {
    pub fn new(config: RegistryConfig) -> Result<Self, BuildError> {
        let http = HttpClient::builder()
            .user_agent(concat!("zendesign-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Self::with_http_client(config, http)
    }

    /// Build around an existing `reqwest::Client`.
    pub fn with_http_client(config: RegistryConfig, http: HttpClient) -> Result<Self, BuildError> {
        let parsed = url::Url::parse(&config.base_url).map_err(|source| {
            BuildError::InvalidBaseUrl {
                url: config.base_url.clone(),
                source,
            }
        })?;
        Ok(Self {
            http,
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            timeout: config.timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a registry path. The path is appended verbatim.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch `/r/{component_name}.json` and project it into a record.
    pub async fn fetch_component_info(
        &self,
        component_name: &str,
    ) -> Result<ComponentRecord, RegistryError> {
        let url = self.endpoint(&format!("/r/{component_name}.json"));
        let raw = self.get_json(&url).await?;
        Ok(ComponentRecord::from_payload(component_name, raw)?)
    }

    /// Fetch the plain-text `/llms.txt` document. The body is decoded using
    /// the response charset; undecodable bytes become U+FFFD.
    pub async fn fetch_design_system_context(&self) -> Result<DesignContext, RegistryError> {
        let url = self.endpoint("/llms.txt");
        let content = self.get(&url, |response| response.text()).await?;
        Ok(DesignContext::new(url, content))
    }

    /// Fetch `/r/registry.json` and list its component names.
    pub async fn list_available_components(&self) -> Result<ComponentListing, RegistryError> {
        let url = self.endpoint("/r/registry.json");
        let raw = self.get_json(&url).await?;
        Ok(ComponentListing::from_manifest(&raw)?)
    }

    /// Fetch `/r/e/{component_name}.json` and flatten its files.
    pub async fn fetch_component_code(
        &self,
        component_name: &str,
    ) -> Result<ComponentCode, RegistryError> {
        let url = self.endpoint(&format!("/r/e/{component_name}.json"));
        let raw = self.get_json(&url).await?;
        Ok(ComponentCode::from_source(&raw)?)
    }

    async fn get_json(&self, url: &str) -> Result<Value, RegistryError> {
        let body = self.get(url, |response| response.bytes()).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// GET `url` and read the body with `read`, all within the timeout.
    async fn get<T, F, Fut>(&self, url: &str, read: F) -> Result<T, RegistryError>
    where
        F: FnOnce(Response) -> Fut,
        Fut: Future<Output = reqwest::Result<T>>,
    {
        tracing::debug!(url, "registry GET");
        let result = with_timeout(self.timeout, async {
            let response = self.http.get(url).send().await?.error_for_status()?;
            Ok::<_, RegistryError>(read(response).await?)
        })
        .await;
        if let Err(e) = &result {
            tracing::warn!(url, "registry request failed: {e}");
        }
        result
    }
}
