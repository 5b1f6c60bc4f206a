//! Format-style sugar over the facade, mirroring the per-level functions.

/// Logs a formatted line at trace level through the default logger.
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        $crate::global::tracef(::core::format_args!($($arg)*))
    };
}

/// Logs a formatted line at debug level through the default logger.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::global::debugf(::core::format_args!($($arg)*))
    };
}

/// Logs a formatted line at info level through the default logger.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::global::infof(::core::format_args!($($arg)*))
    };
}

/// Logs a formatted line at warn level through the default logger.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::global::warnf(::core::format_args!($($arg)*))
    };
}

/// Logs a formatted line at error level through the default logger.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::global::errorf(::core::format_args!($($arg)*))
    };
}

/// Logs a formatted line at crit level, then runs the termination policy.
#[macro_export]
macro_rules! crit {
    ($($arg:tt)*) => {
        $crate::global::critf(::core::format_args!($($arg)*))
    };
}
