use thiserror::Error;
use tracing::{error, warn};

/// Domain-specific errors for the portal core.
///
/// These are all construction-time failures. The interactive protocol
/// itself has no error states: a missing scroll/focus target is a
/// best-effort skip and a cancelled deferred action is a normal outcome,
/// neither is surfaced as an error.
#[derive(Error, Debug)]
pub enum PortalError {
    #[error("duplicate catalog entry id '{id}'")]
    DuplicateEntryId { id: String },

    #[error("catalog entry with empty id")]
    EmptyEntryId,

    #[error("catalog entry '{id}' has an empty external url")]
    EmptyExternalUrl { id: String },
}

pub type Result<T> = std::result::Result<T, PortalError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the user doesn't need to know.
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}

/// Panic in debug mode, log error in release mode.
///
/// Use for "impossible" states that should crash during development
/// but gracefully degrade in production.
#[macro_export]
macro_rules! debug_panic {
    ( $($fmt_arg:tt)* ) => {
        if cfg!(debug_assertions) {
            panic!( $($fmt_arg)* );
        } else {
            tracing::error!("IMPOSSIBLE STATE: {}", format_args!($($fmt_arg)*));
        }
    };
}
