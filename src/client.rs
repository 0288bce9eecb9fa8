//! Release-management service client.
//!
//! The core needs exactly two calls: list the releases scoped to a namespace
//! and apply a new configuration document to one of them. [`ReleaseClient`]
//! is that seam; [`HttpClient`] is the blocking JSON-over-HTTP
//! implementation the binary uses. Tests drive the core through in-memory
//! implementations of the trait instead.

use serde_json::json;
use thiserror::Error;

use crate::release::{Release, UpdatePolicy};

/// Default service address, used when neither `--host` nor `RELCONF_HOST`
/// is set.
pub const DEFAULT_HOST: &str = "http://127.0.0.1:44134";

/// Environment variable naming the service address.
pub const HOST_ENV: &str = "RELCONF_HOST";

/// A failure talking to the release-management service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure: connection refused, DNS, malformed response.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service responded with {status}: {message}")]
    Api { status: u16, message: String },
}

/// The interface the update flow needs from the release-management service.
pub trait ReleaseClient {
    /// List all releases scoped to `namespace`.
    fn list_releases(&self, namespace: &str) -> Result<Vec<Release>, ClientError>;

    /// Replace `name`'s configuration with `config` (a YAML document),
    /// keeping its chart. `policy` tells the service what to do with values
    /// the document leaves unset.
    fn update_release(
        &self,
        name: &str,
        chart: &serde_json::Value,
        config: &str,
        policy: UpdatePolicy,
    ) -> Result<Release, ClientError>;
}

/// Resolve the service address: explicit `--host` flag, then the
/// environment, then [`DEFAULT_HOST`].
///
/// Takes the env value as a parameter so tests can pass synthetic data
/// instead of `std::env::var`.
pub fn resolve_host(flag: Option<String>, env: Option<String>) -> String {
    flag.or(env).unwrap_or_else(|| DEFAULT_HOST.to_string())
}

/// Blocking HTTP implementation of [`ReleaseClient`].
///
/// One request per call, no retries; failures from either call are fatal to
/// the invocation.
pub struct HttpClient {
    http: reqwest::blocking::Client,
    host: String,
}

impl HttpClient {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            host: host.into().trim_end_matches('/').to_string(),
        }
    }

    fn check(
        response: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().unwrap_or_default().trim().to_string();
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

impl ReleaseClient for HttpClient {
    fn list_releases(&self, namespace: &str) -> Result<Vec<Release>, ClientError> {
        let url = format!("{}/v1/releases", self.host);
        log::debug!("GET {url}?namespace={namespace}");
        let response = self
            .http
            .get(url)
            .query(&[("namespace", namespace)])
            .send()?;
        Ok(Self::check(response)?.json()?)
    }

    fn update_release(
        &self,
        name: &str,
        chart: &serde_json::Value,
        config: &str,
        policy: UpdatePolicy,
    ) -> Result<Release, ClientError> {
        let url = format!("{}/v1/releases/{name}", self.host);
        log::debug!("PUT {url} (policy: {})", policy.as_str());
        let body = json!({
            "chart": chart,
            "config": config,
            "policy": policy.as_str(),
        });
        let response = self.http.put(url).json(&body).send()?;
        Ok(Self::check(response)?.json()?)
    }
}
