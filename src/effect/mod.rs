//! Deferred asynchronous effects.
//!
//! The [`Effect`] type describes an asynchronous computation without running
//! it. Effects compose in strict sequence with [`Effect::chain`] and recover
//! from rejections with [`Effect::catch`]; nothing executes until
//! [`Effect::run`] is called.
//!
//! This module does not schedule, cancel, retry or cache anything. Running
//! several effects concurrently, timeouts and back-off are left to the caller,
//! layered on top of `chain`/`catch` or on the futures `run` returns.
//!
//! # Examples
//!
//! ```rust
//! use effectum::effect::Effect;
//!
//! # futures::executor::block_on(async {
//! let fetch: Effect<u32> = Effect::reject("connection refused");
//!
//! let with_fallback: Effect<u32> = fetch
//!     .catch(|_| Effect::from_value(0))
//!     .map(|count| count + 1);
//!
//! assert_eq!(with_fallback.run().await.unwrap(), 1);
//! // Running again re-executes every stage.
//! assert_eq!(with_fallback.run().await.unwrap(), 1);
//! # });
//! ```

mod deferred;
mod error;

pub use deferred::Effect;
pub use error::{BoxError, EffectError};
