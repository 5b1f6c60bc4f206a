//! Severity levels and the shared threshold that gates every log call.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

/// Ordered most-to-least urgent; a lower rank always passes the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Unrecoverable conditions — logging one terminates the process.
    Critical = 0,
    /// Failures that prevent the operation from completing.
    Error = 1,
    /// Non-fatal anomalies that may need attention (retries, deprecations).
    Warn = 2,
    /// Normal operational milestones — listener started, config loaded, etc.
    #[default]
    Info = 3,
    /// Startup, teardown, and state-change details for diagnosing issues.
    Debug = 4,
    /// High-volume instrumentation, too noisy outside of development.
    Trace = 5,
}

impl Level {
    /// Lowercase because the threshold facade and config files use lowercase names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "crit",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Convenience for iteration — used by tests and the threshold query path.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Critical,
            Self::Error,
            Self::Warn,
            Self::Info,
            Self::Debug,
            Self::Trace,
        ]
    }

    /// Symmetric bounds check: anything outside `Critical..=Trace` is rejected.
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(Self::Critical),
            1 => Some(Self::Error),
            2 => Some(Self::Warn),
            3 => Some(Self::Info),
            4 => Some(Self::Debug),
            5 => Some(Self::Trace),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Case-sensitive lowercase names only; the threshold setter maps
    /// failures to `Info` itself.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "crit" => Ok(Self::Critical),
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// Lock-free severity gate, checked on every call before any lock or
/// allocation so disabled levels stay cheap.
#[derive(Debug)]
pub struct LevelFilter(AtomicU8);

impl LevelFilter {
    #[must_use]
    pub const fn new(level: Level) -> Self {
        Self(AtomicU8::new(level as u8))
    }

    #[must_use]
    pub fn get(&self) -> Level {
        // The store side only ever writes valid ranks, but decode defensively.
        Level::from_rank(self.0.load(Ordering::Relaxed)).unwrap_or(Level::Info)
    }

    pub fn set(&self, level: Level) {
        self.0.store(level as u8, Ordering::Relaxed);
    }

    /// Unrecognized names fall back to `Info` — a bad setting must not stop logging.
    pub fn set_by_name(&self, name: &str) {
        self.set(name.parse().unwrap_or(Level::Info));
    }

    /// True when a call at `level` should produce output.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        level as u8 <= self.0.load(Ordering::Relaxed)
    }
}

impl Default for LevelFilter {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}

/// Every instance consults this single threshold, including the default logger.
static SHARED: LevelFilter = LevelFilter::new(Level::Info);

/// The process-wide threshold.
#[must_use]
pub fn shared() -> &'static LevelFilter {
    &SHARED
}
