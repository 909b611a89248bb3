//! # effectum
//!
//! Three composable containers that make absence, failure and deferred
//! effects explicit in the type system.
//!
//! ## Overview
//!
//! - **[`Optional`](control::Optional)**: a value that is present (`Some`)
//!   or absent (`None`)
//! - **[`Outcome`](control::Outcome)**: a success value (`Ok`) or an error
//!   (`Err`)
//! - **[`Effect`](effect::Effect)**: a reusable asynchronous computation that
//!   runs only when asked to
//!
//! Failures travel as data and short-circuit through combinators. Calling
//! `expect`/`unwrap` on the wrong variant is a contract violation and aborts
//! through [`control::panic`].
//!
//! ## Feature Flags
//!
//! - `control`: `Optional`, `Outcome` and the abort helper
//! - `effect`: the `Effect` container
//! - `typeclass`: Functor, Applicative and Monad instances
//! - `serde`: `Serialize`/`Deserialize` for `Optional` and `Outcome`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use effectum::prelude::*;
//!
//! let configured: Optional<&str> = Optional::from_nullable(Some("3"));
//! let retries: Outcome<u32, String> = configured
//!     .ok_or_else(|| "retries not configured".to_string())
//!     .and_then(|text| Outcome::try_from_fn(|| text.parse::<u32>(), format!("bad value {text}")));
//!
//! assert_eq!(retries.to_string(), "Ok(3)");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use effectum::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::{Optional, OptionalMatcher, Outcome, OutcomeMatcher};

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
