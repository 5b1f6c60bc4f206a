//! Logger construction from declarative config.

use super::Logger;
use crate::config::Config;
use crate::error::Error;

impl Logger {
    /// Builds a logger from a parsed [`Config`].
    ///
    /// The config's `level` is not applied here — the threshold is shared
    /// process state, applied by the host via [`crate::global::set_level`]
    /// with [`Config::parse_level`].
    ///
    /// # Errors
    /// Unknown flag names or output targets.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let flags = config.parse_flags()?;
        let out = config.open_target()?;
        Ok(Self::builder()
            .boxed_sink(out)
            .flags(flags)
            .prefix(&config.prefix)
            .crit_policy(config.parse_crit_policy())
            .build())
    }
}
