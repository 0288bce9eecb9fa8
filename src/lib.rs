//! Update config values of an already-deployed release.
//!
//! `relconf` talks to the release-management service that tracks deployed
//! releases. Given a release identifier (`NAMESPACE.DATE.TIME`) and a set of
//! `key=value` overrides, it fetches the release's current configuration,
//! deep-merges the overrides on top, and re-applies the release with the
//! merged document — no chart install/upgrade flow involved.
//!
//! ```text
//! relconf team-a.20230601.101500 --set-value replicas=3,env.tier=canary
//! ```
//!
//! # Release lookup
//!
//! Release names are `NAMESPACE.VERSION_DATE.VERSION_TIME`. The namespace —
//! everything before the first `.` — scopes a listing query against the
//! service, and the first release returned is the one updated. The service
//! makes no ordering promise, so namespaces should be unambiguous: one
//! release per namespace.
//!
//! # Merge semantics
//!
//! Overrides are sparse. Only the keys you pass change; everything else in
//! the stored configuration survives. Nested mappings merge key-by-key,
//! while scalars and sequences replace whatever was there — in either
//! direction, the override's shape wins when the two sides disagree.
//!
//! What happens to values *outside* the merged document is the service's
//! call, selected by `--reset-values`:
//!
//! - **reuse** (default) — unset values fall back to the previous release's
//!   stored values.
//! - **reset** — unset values fall back to the chart's built-in defaults.
//!
//! # Errors
//!
//! All fallible operations return [`Error`]. Failures are user-facing and
//! fatal: bad arguments are caught before any network call, and the merged
//! document is computed fully in memory before the single mutating request,
//! so no partial update can occur. See the [`error`] module for the full
//! set.

pub mod client;
pub mod error;

mod cli;
mod merge;
mod ops;
mod overrides;
mod release;

pub use cli::Cli;
pub use client::{HttpClient, ReleaseClient};
pub use error::Error;
pub use ops::run;
pub use release::{Release, UpdatePolicy};
