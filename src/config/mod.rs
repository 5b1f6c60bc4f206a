//! Declarative configuration for hosts that wire the logger from TOML.

use crate::error::Error;
use crate::flags::Flags;
use crate::level::Level;
use crate::logger::CritPolicy;
use serde::Deserialize;
use std::io::{self, Write};

/// One logger's worth of settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Minimum severity name, `"crit"` through `"trace"`.
    pub level: String,
    /// Header field names: date, time, microseconds, longfile, shortfile, utc.
    pub flags: Vec<String>,
    /// Stable label written ahead of every line.
    pub prefix: String,
    /// Output target: `"stderr"` or `"stdout"`.
    pub target: String,
    /// What a crit-level call does: `"exit"` or `"panic"`.
    pub on_crit: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            flags: vec![
                "date".to_string(),
                "time".to_string(),
                "shortfile".to_string(),
            ],
            prefix: String::new(),
            target: "stderr".to_string(),
            on_crit: "exit".to_string(),
        }
    }
}

impl Config {
    /// # Errors
    /// TOML syntax or type errors.
    pub fn from_toml_str(s: &str) -> Result<Self, Error> {
        Ok(toml::from_str(s)?)
    }

    /// Unrecognized names fall back to `Info` — a bad setting must not stop logging.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.level.parse().unwrap_or(Level::Info)
    }

    /// # Errors
    /// `Error::InvalidFlag` on an unknown flag name.
    pub fn parse_flags(&self) -> Result<Flags, Error> {
        let mut flags = Flags::NONE;
        for name in &self.flags {
            let flag = Flags::from_name(name).ok_or_else(|| Error::InvalidFlag(name.clone()))?;
            flags = flags.union(flag);
        }
        Ok(flags)
    }

    /// # Errors
    /// `Error::InvalidTarget` on anything but `"stderr"` or `"stdout"`.
    pub fn open_target(&self) -> Result<Box<dyn Write + Send>, Error> {
        match self.target.as_str() {
            "stderr" => Ok(Box::new(io::stderr())),
            "stdout" => Ok(Box::new(io::stdout())),
            other => Err(Error::InvalidTarget(other.to_string())),
        }
    }

    /// Anything but `"panic"` means the hard default: terminate the process.
    #[must_use]
    pub fn parse_crit_policy(&self) -> CritPolicy {
        if self.on_crit == "panic" {
            CritPolicy::Panic
        } else {
            CritPolicy::Exit
        }
    }
}
