use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A deployed release as tracked by the release-management service.
///
/// Read-only here except for the final update call, which replaces the
/// stored configuration document.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Release {
    /// Full release name, `NAMESPACE.VERSION_DATE.VERSION_TIME`.
    pub name: String,
    /// Chart reference; opaque to relconf and passed through unchanged.
    pub chart: serde_json::Value,
    /// Currently stored configuration, as the raw YAML document the service
    /// returned. Empty for a release that has never had values applied.
    #[serde(default)]
    pub config: String,
}

/// What the service should do with values the submitted document leaves
/// unset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpdatePolicy {
    /// Fall back to the values stored on the previous release.
    #[default]
    ReuseValues,
    /// Fall back to the chart's built-in defaults.
    ResetValues,
}

impl UpdatePolicy {
    /// Wire encoding used in update requests.
    pub fn as_str(self) -> &'static str {
        match self {
            UpdatePolicy::ReuseValues => "reuse",
            UpdatePolicy::ResetValues => "reset",
        }
    }
}

/// Derive the namespace from a release identifier.
///
/// The namespace is everything before the first `.`. An identifier with no
/// separator is used as a namespace verbatim.
pub fn namespace(release_id: &str) -> Result<&str, Error> {
    if release_id.is_empty() {
        return Err(Error::EmptyReleaseId);
    }
    Ok(release_id
        .split_once('.')
        .map_or(release_id, |(namespace, _)| namespace))
}
