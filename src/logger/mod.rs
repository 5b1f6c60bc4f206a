//! The logger instance: a mutex-protected sink, header flags, and a reusable
//! scratch buffer, with severity dispatch gated by the shared threshold.

mod builder;
mod from_config;

pub use builder::LoggerBuilder;

use crate::error::Error;
use crate::flags::Flags;
use crate::level::{self, Level};
use chrono::Local;
use std::fmt::{Arguments, Display, Write as _};
use std::io::Write;
use std::panic::Location;
use std::process;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// What a crit-level call does after the line reaches the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CritPolicy {
    /// Terminate the process with exit code 1.
    #[default]
    Exit,
    /// Panic with the formatted line, letting the host unwind resources first.
    Panic,
}

/// Everything the lock protects. The write path shares the scratch buffer and
/// must not interleave mid-line on the sink, so both stay behind one mutex.
struct Inner {
    out: Box<dyn Write + Send>,
    flags: Flags,
    /// Stable module label written ahead of every line; the severity tag is
    /// passed per call, never stored here.
    prefix: String,
    /// Truncated at the start of every output call, never read across calls.
    buf: Vec<u8>,
    crit_policy: CritPolicy,
}

/// A leveled line logger. Every method takes `&self`, so one instance can be
/// shared across threads behind an `Arc` without extra locking by the caller.
pub struct Logger {
    inner: Mutex<Inner>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Shorthand for the builder when sink, flags, and label are known up front.
    #[must_use]
    pub fn new(out: impl Write + Send + 'static, flags: Flags, prefix: &str) -> Self {
        Self::builder().sink(out).flags(flags).prefix(prefix).build()
    }

    pub(crate) fn from_parts(
        out: Box<dyn Write + Send>,
        flags: Flags,
        prefix: String,
        crit_policy: CritPolicy,
    ) -> Self {
        Self {
            inner: Mutex::new(Inner {
                out,
                flags,
                prefix,
                buf: Vec::new(),
                crit_policy,
            }),
        }
    }

    /// A panic on some unrelated thread must not silence logging for the rest
    /// of the process, so poisoning is absorbed.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Formats one line and writes it to the sink.
    ///
    /// The timestamp is captured before the lock so concurrent calls are
    /// stamped at call time, not at lock-acquisition time; under contention
    /// lines may land in an order that differs from their timestamps. The
    /// call site comes from `#[track_caller]`, so wrappers that are
    /// themselves `#[track_caller]` report their caller's location.
    ///
    /// # Errors
    /// The sink's write error, returned to the caller rather than panicked on.
    #[track_caller]
    pub fn output(&self, tag: &str, msg: &str) -> Result<(), Error> {
        let now = Local::now();
        let location = Location::caller();
        let mut guard = self.lock();
        let inner = &mut *guard;
        inner.buf.clear();
        let caller = inner
            .flags
            .wants_caller()
            .then(|| (location.file(), location.line()));
        crate::fmt::format_header(&mut inner.buf, inner.flags, now, caller, &inner.prefix, tag);
        inner.buf.extend_from_slice(msg.as_bytes());
        if !msg.ends_with('\n') {
            inner.buf.push(b'\n');
        }
        inner.out.write_all(&inner.buf)?;
        Ok(())
    }

    /// Message and context values space-separated on one line, like printing
    /// all arguments in sequence.
    fn join(msg: &str, ctx: &[&dyn Display]) -> String {
        let mut line = String::from(msg);
        for value in ctx {
            let _ = write!(line, " {value}");
        }
        line
    }

    /// Severity dispatch: threshold check first, then format, then write.
    /// Sink errors are swallowed — logging never perturbs the caller's
    /// control flow.
    #[track_caller]
    fn dispatch(&self, level: Level, msg: &str, ctx: &[&dyn Display]) {
        if !level::shared().enabled(level) {
            return;
        }
        if ctx.is_empty() {
            let _ = self.output(level.as_str(), msg);
        } else {
            let _ = self.output(level.as_str(), &Self::join(msg, ctx));
        }
    }

    #[track_caller]
    fn dispatch_fmt(&self, level: Level, args: Arguments<'_>) {
        if !level::shared().enabled(level) {
            return;
        }
        if let Some(s) = args.as_str() {
            let _ = self.output(level.as_str(), s);
        } else {
            let _ = self.output(level.as_str(), &args.to_string());
        }
    }

    /// High-volume instrumentation, visible only when the threshold allows Trace.
    #[track_caller]
    pub fn trace(&self, msg: &str, ctx: &[&dyn Display]) {
        self.dispatch(Level::Trace, msg, ctx);
    }

    /// Development-time diagnostics.
    #[track_caller]
    pub fn debug(&self, msg: &str, ctx: &[&dyn Display]) {
        self.dispatch(Level::Debug, msg, ctx);
    }

    /// Normal operational milestones.
    #[track_caller]
    pub fn info(&self, msg: &str, ctx: &[&dyn Display]) {
        self.dispatch(Level::Info, msg, ctx);
    }

    /// Non-fatal anomalies that may need attention.
    #[track_caller]
    pub fn warn(&self, msg: &str, ctx: &[&dyn Display]) {
        self.dispatch(Level::Warn, msg, ctx);
    }

    /// Failures that prevent an operation from completing.
    #[track_caller]
    pub fn error(&self, msg: &str, ctx: &[&dyn Display]) {
        self.dispatch(Level::Error, msg, ctx);
    }

    /// Logs at crit level and then runs the configured termination policy —
    /// an unrecoverable condition never returns to the caller. Critical
    /// outranks every threshold, so the line is always written.
    #[track_caller]
    pub fn crit(&self, msg: &str, ctx: &[&dyn Display]) -> ! {
        let line = if ctx.is_empty() {
            msg.to_string()
        } else {
            Self::join(msg, ctx)
        };
        let _ = self.output(Level::Critical.as_str(), &line);
        self.terminate(&line)
    }

    #[track_caller]
    pub fn tracef(&self, args: Arguments<'_>) {
        self.dispatch_fmt(Level::Trace, args);
    }

    #[track_caller]
    pub fn debugf(&self, args: Arguments<'_>) {
        self.dispatch_fmt(Level::Debug, args);
    }

    #[track_caller]
    pub fn infof(&self, args: Arguments<'_>) {
        self.dispatch_fmt(Level::Info, args);
    }

    #[track_caller]
    pub fn warnf(&self, args: Arguments<'_>) {
        self.dispatch_fmt(Level::Warn, args);
    }

    #[track_caller]
    pub fn errorf(&self, args: Arguments<'_>) {
        self.dispatch_fmt(Level::Error, args);
    }

    /// Formatted variant of [`Logger::crit`].
    #[track_caller]
    pub fn critf(&self, args: Arguments<'_>) -> ! {
        let line = args.to_string();
        let _ = self.output(Level::Critical.as_str(), &line);
        self.terminate(&line)
    }

    fn terminate(&self, line: &str) -> ! {
        match self.crit_policy() {
            CritPolicy::Exit => process::exit(1),
            CritPolicy::Panic => panic!("{line}"),
        }
    }

    /// Replaces the sink. The old sink is dropped unflushed; flushing is the
    /// sink owner's responsibility.
    pub fn set_sink(&self, out: impl Write + Send + 'static) {
        self.lock().out = Box::new(out);
    }

    #[must_use]
    pub fn flags(&self) -> Flags {
        self.lock().flags
    }

    pub fn set_flags(&self, flags: Flags) {
        self.lock().flags = flags;
    }

    #[must_use]
    pub fn prefix(&self) -> String {
        self.lock().prefix.clone()
    }

    pub fn set_prefix(&self, prefix: &str) {
        prefix.clone_into(&mut self.lock().prefix);
    }

    #[must_use]
    pub fn crit_policy(&self) -> CritPolicy {
        self.lock().crit_policy
    }

    pub fn set_crit_policy(&self, policy: CritPolicy) {
        self.lock().crit_policy = policy;
    }
}
