//! Clap surface for the `relconf` binary.
//!
//! Kept separate from `main` so argument handling is testable with
//! `try_parse_from`. The parsed args bridge into the framework-free core
//! through plain values: [`Cli::overrides()`] builds the override mapping
//! and [`Cli::policy()`] maps the `--reset-values` flag onto
//! [`UpdatePolicy`].

use clap::Parser;
use serde_yaml::Mapping;

use crate::error::Error;
use crate::overrides;
use crate::release::UpdatePolicy;

#[derive(Debug, Parser)]
#[command(
    name = "relconf",
    version,
    about = "Update config values of an existing release"
)]
pub struct Cli {
    /// Release identifier, NAMESPACE.DATE.TIME.
    pub release: String,

    /// Set values on the command line (can specify multiple or separate
    /// values with commas: key1=val1,key2=val2). Dotted keys denote nesting.
    #[arg(long, value_name = "KEY=VALUE")]
    pub set_value: Vec<String>,

    /// Reset values not set here to the ones built into the chart, instead
    /// of reusing the release's stored values.
    #[arg(long)]
    pub reset_values: bool,

    /// Address of the release-management service. Defaults to $RELCONF_HOST,
    /// then the service's standard local address.
    #[arg(long, value_name = "ADDR")]
    pub host: Option<String>,
}

impl Cli {
    /// Parse all `--set-value` occurrences into one override mapping,
    /// applied left to right.
    pub fn overrides(&self) -> Result<Mapping, Error> {
        let mut parsed = Mapping::new();
        for entry in &self.set_value {
            overrides::parse_into(entry, &mut parsed)?;
        }
        Ok(parsed)
    }

    /// Map the `--reset-values` flag onto the update policy.
    pub fn policy(&self) -> UpdatePolicy {
        if self.reset_values {
            UpdatePolicy::ResetValues
        } else {
            UpdatePolicy::ReuseValues
        }
    }
}
