// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.

use crate::config::DEFAULT_LOG_FILTER;
use crate::error::{Error, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Picks the first filter directive that parses.
///
/// Precedence: the `--log` argument, `RUST_LOG`, the config file, then
/// [`DEFAULT_LOG_FILTER`].
pub fn resolve_filter(explicit: Option<&str>, configured: Option<&str>) -> Result<EnvFilter> {
    let env = std::env::var("RUST_LOG").ok();

    let filter = [explicit, env.as_deref(), configured, Some(DEFAULT_LOG_FILTER)]
        .into_iter()
        .flatten()
        .find_map(|candidate| EnvFilter::try_new(candidate).ok())
        .ok_or_else(|| Error::Logging("invalid log filter".to_string()));
    filter
}

/// Installs the global fmt subscriber.
///
/// # Errors
///
/// Fails if no filter directive is valid or a global subscriber is already set.
pub fn init(explicit: Option<&str>, configured: Option<&str>) -> Result<()> {
    let filter = resolve_filter(explicit, configured)?;
    let subscriber = Registry::default()
        .with(filter)
        .with(fmt::layer().with_target(true));

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| Error::Logging(err.to_string()))
}
