//! Unrecoverable abort for contract violations.
//!
//! Every `expect`/`unwrap` style operation in this crate routes through
//! [`panic`] when it is called on the wrong variant. The abort is not a domain
//! failure: nothing in the crate catches it, and the return type `!` makes the
//! "never falls through" contract visible to the compiler.
//!
//! # Examples
//!
//! ```rust,should_panic
//! use effectum::control::panic;
//!
//! panic("configuration missing");
//! ```

use std::any::Any;
use std::fmt::Display;

const ABORT_PREFIX: &str = "panicked at '";

/// Default message of [`Optional::unwrap`](super::Optional::unwrap).
pub const OPTIONAL_UNWRAP_MESSAGE: &str = "called Option.unwrap() on a None value";

/// Default message of [`Outcome::unwrap`](super::Outcome::unwrap).
pub const OUTCOME_UNWRAP_MESSAGE: &str = "called Result.unwrap() on an Err value";

/// Default message of [`Outcome::unwrap_err`](super::Outcome::unwrap_err).
pub const OUTCOME_UNWRAP_ERR_MESSAGE: &str = "called Result.unwrapErr() on an Ok value";

/// Halts the current thread with a fatal signal carrying `message`.
///
/// The panic payload reads `panicked at '<message>'`.
///
/// # Panics
///
/// Always.
#[cold]
#[track_caller]
pub fn panic(message: impl Display) -> ! {
    tracing::debug!(%message, "aborting on contract violation");
    std::panic::panic_any(format!("{ABORT_PREFIX}{message}'"))
}

/// Returns `true` if `payload` was raised by [`panic`].
///
/// Operations that contain unwinding panics use this to let contract
/// violations through untouched.
pub fn is_abort(payload: &(dyn Any + Send)) -> bool {
    payload
        .downcast_ref::<String>()
        .is_some_and(|message| message.starts_with(ABORT_PREFIX) && message.ends_with('\''))
}

/// Resumes unwinding if `payload` was raised by [`panic`], otherwise hands
/// it back.
pub fn resume_if_abort(payload: Box<dyn Any + Send>) -> Box<dyn Any + Send> {
    if is_abort(payload.as_ref()) {
        std::panic::resume_unwind(payload);
    }
    payload
}

/// Extracts the textual payload of a caught panic, if it carried one.
///
/// Payloads produced by [`panic`] and by `std::panic!` with a formatted
/// message are `String`s; literal `panic!("...")` payloads are `&'static str`.
pub fn payload_message(payload: &(dyn Any + Send)) -> Option<&str> {
    payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&'static str>().copied())
}
