//! Error types for the effect system.
//!
//! [`Effect`](super::Effect) rejects with an arbitrary error type `E`. When no
//! particular type is needed it defaults to [`BoxError`]. [`EffectError`]
//! covers the failures the effect system produces on its own behalf.

use std::fmt;

/// Boxed, thread-safe error; the default rejection type of an `Effect`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced by the effect system itself.
///
/// # Examples
///
/// ```rust
/// use effectum::effect::EffectError;
///
/// let error = EffectError::Failed("upstream unavailable".to_string());
/// assert_eq!(error.to_string(), "effect failed: upstream unavailable");
///
/// let error = EffectError::Panicked("index out of bounds".to_string());
/// assert_eq!(error.to_string(), "effect panicked: index out of bounds");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectError {
    /// The effect was rejected with a message.
    Failed(String),
    /// The producer panicked while it was running.
    Panicked(String),
}

impl EffectError {
    /// Returns the message carried by the error.
    pub fn message(&self) -> &str {
        match self {
            Self::Failed(message) | Self::Panicked(message) => message,
        }
    }
}

impl fmt::Display for EffectError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed(message) => write!(formatter, "effect failed: {message}"),
            Self::Panicked(message) => write!(formatter, "effect panicked: {message}"),
        }
    }
}

impl std::error::Error for EffectError {}
