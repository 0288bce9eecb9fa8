use thiserror::Error;

use crate::client::ClientError;

/// Errors surfaced to the invoking user.
///
/// Every failure is fatal to the invocation — there is no retry and no
/// partial-success state, because the merged document is computed fully in
/// memory before the single mutating request.
#[derive(Debug, Error)]
pub enum Error {
    #[error("release identifier must not be empty")]
    EmptyReleaseId,

    #[error("invalid override '{entry}': {reason}")]
    InvalidOverride { entry: String, reason: String },

    #[error("failed to list releases in namespace '{namespace}': {source}")]
    Query {
        namespace: String,
        source: ClientError,
    },

    #[error("no releases found in namespace '{0}'")]
    EmptyReleaseSet(String),

    #[error("malformed config document for release '{release}': {source}")]
    MalformedConfig {
        release: String,
        source: serde_yaml::Error,
    },

    #[error("failed to update release '{release}': {source}")]
    Update {
        release: String,
        source: ClientError,
    },
}
