//! Leveled logging macros for a [`Logger`](crate::Logger).
//!
//! # Feature Flags
//! Each level macro is controlled by a cargo feature:
//! `log-trace`, `log-debug`, `log-info`, `log-warn`, `log-error`, `log-fatal`.
//!
//! If a feature is disabled, the corresponding macro expands to `()`,
//! removing all formatting and allocation overhead at compile time. Runtime
//! thresholds still apply to whatever is compiled in.

// ============================================================================
// 1. GENERIC INTERNAL MACRO (The "Worker")
// ============================================================================
// Available so the enabled macros below can use it. Call it directly only
// when the level is itself a runtime value.

#[macro_export]
macro_rules! log_msg {
    ($logger:expr, $lvl:expr, $($arg:tt)*) => {{
        $logger.log($lvl, file!(), line!(), format_args!($($arg)*));
    }};
}

// ============================================================================
// 2. LEVEL-SPECIFIC MACROS (Feature Gated)
// ============================================================================

// ---------------------- FATAL ----------------------
#[cfg(feature = "log-fatal")]
#[macro_export]
macro_rules! fatal { ($logger:expr, $($arg:tt)*) => { $crate::log_msg!($logger, $crate::Level::Fatal, $($arg)*) } }

#[cfg(not(feature = "log-fatal"))]
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- ERROR ----------------------
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! error { ($logger:expr, $($arg:tt)*) => { $crate::log_msg!($logger, $crate::Level::Error, $($arg)*) } }

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- WARN ----------------------
#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! warn { ($logger:expr, $($arg:tt)*) => { $crate::log_msg!($logger, $crate::Level::Warn, $($arg)*) } }

#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- INFO ----------------------
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! info { ($logger:expr, $($arg:tt)*) => { $crate::log_msg!($logger, $crate::Level::Info, $($arg)*) } }

#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- DEBUG ----------------------
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! debug { ($logger:expr, $($arg:tt)*) => { $crate::log_msg!($logger, $crate::Level::Debug, $($arg)*) } }

#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- TRACE ----------------------
#[cfg(feature = "log-trace")]
#[macro_export]
macro_rules! trace { ($logger:expr, $($arg:tt)*) => { $crate::log_msg!($logger, $crate::Level::Trace, $($arg)*) } }

#[cfg(not(feature = "log-trace"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        ()
    };
}
