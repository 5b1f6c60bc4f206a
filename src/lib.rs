//! `linelog` - Leveled line logger with lock-free severity filtering.
//!
//! A mutex-protected writer that renders a compact header (timestamp,
//! call-site file:line, severity tag) and emits exactly one line per call:
//! - Per-instance sinks, header flags, and prefix labels
//! - A process-wide default logger behind free functions and macros
//! - An atomic severity threshold checked before any lock or allocation
//! - An injectable termination policy for crit-level events
//!
//! # Example
//!
//! ```
//! use linelog::{Flags, Logger};
//!
//! let logger = Logger::builder()
//!     .flags(Flags::STD.union(Flags::SHORT_FILE))
//!     .prefix("net: ")
//!     .build();
//!
//! let peer = "127.0.0.1:8080";
//! logger.info("listener started", &[&peer]);
//! logger.warn("handshake slow", &[&peer, &250]);
//! logger.errorf(format_args!("lost connection to {peer}"));
//! ```
//!
//! Or through the process-wide default:
//!
//! ```
//! linelog::global::set_prefix("app: ");
//! linelog::info!("ready in {} ms", 12);
//! ```

pub mod config;
pub mod error;
pub mod flags;
pub mod fmt;
pub mod global;
pub mod level;
pub mod logger;
mod macros;

pub use config::Config;
pub use error::Error;
pub use flags::Flags;
pub use global::default_logger;
pub use level::{Level, LevelFilter, ParseLevelError};
pub use logger::{CritPolicy, Logger, LoggerBuilder};
