//! Stepwise construction so callers only name the knobs they change; the
//! defaults match the process-wide logger (stderr, date+time+short caller).

use super::{CritPolicy, Logger};
use crate::flags::Flags;
use std::io::{self, Write};

pub struct LoggerBuilder {
    out: Option<Box<dyn Write + Send>>,
    flags: Flags,
    prefix: String,
    crit_policy: CritPolicy,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            out: None,
            flags: Flags::STD.union(Flags::SHORT_FILE),
            prefix: String::new(),
            crit_policy: CritPolicy::Exit,
        }
    }

    /// Replaces the default stderr sink.
    #[must_use]
    pub fn sink(mut self, out: impl Write + Send + 'static) -> Self {
        self.out = Some(Box::new(out));
        self
    }

    /// Used by the config layer, which already holds a boxed sink.
    #[must_use]
    pub(crate) fn boxed_sink(mut self, out: Box<dyn Write + Send>) -> Self {
        self.out = Some(out);
        self
    }

    #[must_use]
    pub const fn flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    /// Stable module label written ahead of every line.
    #[must_use]
    pub fn prefix(mut self, prefix: &str) -> Self {
        prefix.clone_into(&mut self.prefix);
        self
    }

    /// Tests and hosts that must unwind resources opt into the panic variant.
    #[must_use]
    pub const fn crit_policy(mut self, policy: CritPolicy) -> Self {
        self.crit_policy = policy;
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        let out = self.out.unwrap_or_else(|| Box::new(io::stderr()));
        Logger::from_parts(out, self.flags, self.prefix, self.crit_policy)
    }
}
