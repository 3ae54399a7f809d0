//! Guards for values and conditions that must hold.
//!
//! `require` and `require_with` treat a missing value as a bug and panic at
//! the caller's location. The `*_or` and `ensure*` forms turn the same checks
//! into a caller-chosen error so they compose with `?`.
//!
//! ```
//! use sovran_typedict::{ensure, require_or};
//!
//! #[derive(Debug, PartialEq)]
//! enum ConfigError {
//!     MissingPort,
//!     PrivilegedPort(u16),
//! }
//!
//! fn port(raw: Option<u16>) -> Result<u16, ConfigError> {
//!     let port = require_or(raw, || ConfigError::MissingPort)?;
//!     ensure(port >= 1024, || ConfigError::PrivilegedPort(port))?;
//!     Ok(port)
//! }
//!
//! assert_eq!(port(Some(8080)), Ok(8080));
//! assert_eq!(port(Some(80)), Err(ConfigError::PrivilegedPort(80)));
//! assert_eq!(port(None), Err(ConfigError::MissingPort));
//! ```

use std::panic::Location;

use tracing::debug;

/// Unwraps `value`, panicking at the caller's location if it is `None`.
#[track_caller]
pub fn require<T>(value: Option<T>) -> T {
    require_with(value, || "required value was None".to_string())
}

/// Unwraps `value`, panicking with `message()` if it is `None`.
#[track_caller]
pub fn require_with<T>(value: Option<T>, message: impl FnOnce() -> String) -> T {
    match value {
        Some(value) => value,
        None => {
            let caller = Location::caller();
            debug!(file = caller.file(), line = caller.line(), "required value missing");
            panic!("{}", message())
        }
    }
}

/// Unwraps `value`, or returns the error built by `error`.
#[track_caller]
pub fn require_or<T, E>(value: Option<T>, error: impl FnOnce() -> E) -> Result<T, E> {
    match value {
        Some(value) => Ok(value),
        None => {
            let caller = Location::caller();
            debug!(file = caller.file(), line = caller.line(), "required value missing");
            Err(error())
        }
    }
}

/// Returns the error built by `error` unless `condition` holds.
#[track_caller]
pub fn ensure<E>(condition: bool, error: impl FnOnce() -> E) -> Result<(), E> {
    if condition {
        return Ok(());
    }
    let caller = Location::caller();
    debug!(file = caller.file(), line = caller.line(), "condition failed");
    Err(error())
}

/// Returns the error built by `error` unless `value` is `None`.
#[track_caller]
pub fn ensure_none<T, E>(value: &Option<T>, error: impl FnOnce() -> E) -> Result<(), E> {
    ensure(value.is_none(), error)
}
