//! The update flow: locate the release, merge overrides onto its current
//! configuration, submit the merged document.

use serde_yaml::Mapping;

use crate::client::ReleaseClient;
use crate::error::Error;
use crate::merge::deep_merge;
use crate::release::{self, Release, UpdatePolicy};

/// Update `release_id`'s configuration by deep-merging `overrides` onto the
/// release's currently stored values, then submit the merged document.
///
/// The release is looked up by the namespace prefix of its identifier. When
/// several releases share a namespace, the first one the service returns is
/// the one updated — the service makes no ordering promise, so callers
/// should keep namespaces unambiguous.
pub fn run<C: ReleaseClient>(
    client: &C,
    release_id: &str,
    overrides: Mapping,
    policy: UpdatePolicy,
) -> Result<Release, Error> {
    let namespace = release::namespace(release_id)?;

    log::info!("Listing releases in namespace {namespace}");
    let releases = client
        .list_releases(namespace)
        .map_err(|source| Error::Query {
            namespace: namespace.to_string(),
            source,
        })?;

    let current = releases
        .into_iter()
        .next()
        .ok_or_else(|| Error::EmptyReleaseSet(namespace.to_string()))?;

    let base = stored_config(&current)?;
    let merged = deep_merge(base, overrides);
    let document = serde_yaml::to_string(&merged).map_err(|source| Error::MalformedConfig {
        release: current.name.clone(),
        source,
    })?;

    log::info!("Updating release {}", current.name);
    client
        .update_release(&current.name, &current.chart, &document, policy)
        .map_err(|source| Error::Update {
            release: current.name.clone(),
            source,
        })
}

/// Parse a release's stored config document. A release that has never had
/// values applied comes back with an empty document, which merges as an
/// empty mapping.
fn stored_config(release: &Release) -> Result<Mapping, Error> {
    if release.config.trim().is_empty() {
        return Ok(Mapping::new());
    }
    serde_yaml::from_str(&release.config).map_err(|source| Error::MalformedConfig {
        release: release.name.clone(),
        source,
    })
}
