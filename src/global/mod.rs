//! The process-wide default logger and its free-function facade, so callers
//! need not construct or thread a `Logger` to log.
//!
//! Uses `LazyLock` so the instance is built exactly once, on first use, even
//! when multiple threads race to log. Every forwarding function is
//! `#[track_caller]` so the reported call site is the caller's regardless of
//! whether the instance API or this facade was used.

use crate::error::Error;
use crate::flags::Flags;
use crate::level::{self, Level};
use crate::logger::{CritPolicy, Logger};
use std::fmt::{Arguments, Display};
use std::io::Write;
use std::sync::LazyLock;

/// stderr, date+time+short caller, empty prefix — the conventional default.
static DEFAULT: LazyLock<Logger> = LazyLock::new(|| Logger::builder().build());

/// The default instance, for callers that want to hold it directly.
#[must_use]
pub fn default_logger() -> &'static Logger {
    &DEFAULT
}

#[track_caller]
pub fn trace(msg: &str, ctx: &[&dyn Display]) {
    DEFAULT.trace(msg, ctx);
}

#[track_caller]
pub fn debug(msg: &str, ctx: &[&dyn Display]) {
    DEFAULT.debug(msg, ctx);
}

#[track_caller]
pub fn info(msg: &str, ctx: &[&dyn Display]) {
    DEFAULT.info(msg, ctx);
}

#[track_caller]
pub fn warn(msg: &str, ctx: &[&dyn Display]) {
    DEFAULT.warn(msg, ctx);
}

#[track_caller]
pub fn error(msg: &str, ctx: &[&dyn Display]) {
    DEFAULT.error(msg, ctx);
}

/// Logs at crit level and runs the default logger's termination policy.
#[track_caller]
pub fn crit(msg: &str, ctx: &[&dyn Display]) -> ! {
    DEFAULT.crit(msg, ctx)
}

#[track_caller]
pub fn tracef(args: Arguments<'_>) {
    DEFAULT.tracef(args);
}

#[track_caller]
pub fn debugf(args: Arguments<'_>) {
    DEFAULT.debugf(args);
}

#[track_caller]
pub fn infof(args: Arguments<'_>) {
    DEFAULT.infof(args);
}

#[track_caller]
pub fn warnf(args: Arguments<'_>) {
    DEFAULT.warnf(args);
}

#[track_caller]
pub fn errorf(args: Arguments<'_>) {
    DEFAULT.errorf(args);
}

/// Formatted variant of [`crit`].
#[track_caller]
pub fn critf(args: Arguments<'_>) -> ! {
    DEFAULT.critf(args)
}

/// The low-level primitive on the default instance.
///
/// # Errors
/// The sink's write error.
#[track_caller]
pub fn output(tag: &str, msg: &str) -> Result<(), Error> {
    DEFAULT.output(tag, msg)
}

/// Replaces the default logger's sink.
pub fn set_sink(out: impl Write + Send + 'static) {
    DEFAULT.set_sink(out);
}

#[must_use]
pub fn flags() -> Flags {
    DEFAULT.flags()
}

pub fn set_flags(flags: Flags) {
    DEFAULT.set_flags(flags);
}

#[must_use]
pub fn prefix() -> String {
    DEFAULT.prefix()
}

pub fn set_prefix(prefix: &str) {
    DEFAULT.set_prefix(prefix);
}

#[must_use]
pub fn crit_policy() -> CritPolicy {
    DEFAULT.crit_policy()
}

pub fn set_crit_policy(policy: CritPolicy) {
    DEFAULT.set_crit_policy(policy);
}

/// Sets the shared threshold consulted by every instance.
pub fn set_level(level: Level) {
    level::shared().set(level);
}

/// String form; unrecognized names fall back to `Info`.
pub fn set_level_by_name(name: &str) {
    level::shared().set_by_name(name);
}

#[must_use]
pub fn level() -> Level {
    level::shared().get()
}

/// The current threshold as its canonical lowercase name.
#[must_use]
pub fn level_name() -> &'static str {
    level::shared().get().as_str()
}
