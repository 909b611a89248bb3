//! Optional type - a value that may be absent.
//!
//! This module provides the `Optional<T>` type, which is either `Some(T)` or
//! `None`. Absence is explicit data: combinators skip their functions on
//! `None` and pass it through untouched.
//!
//! The absence value carries no payload. [`Optional::NONE`] names the single
//! shared absence value of each instantiation; it is a constant, so using it
//! never allocates.
//!
//! # Examples
//!
//! ```rust
//! use effectum::control::{Optional, Outcome};
//!
//! let port = Optional::from_nullable(std::env::var("NO_SUCH_VARIABLE").ok())
//!     .and_then(|text| Optional::try_from_fn(|| text.parse::<u16>()))
//!     .filter(|port| *port != 0);
//!
//! assert_eq!(port, Optional::NONE);
//! assert_eq!(port.unwrap_or(8080), 8080);
//! assert_eq!(port.ok_or("port not configured"), Outcome::Err("port not configured"));
//! ```

use std::fmt;
use std::panic::UnwindSafe;

use super::outcome::Outcome;
use super::panic::{OPTIONAL_UNWRAP_MESSAGE, panic, resume_if_abort};

/// A value that is either present (`Some`) or absent (`None`).
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use effectum::control::Optional;
///
/// let present = Optional::some(3);
/// let absent: Optional<i32> = Optional::none();
///
/// assert_eq!(present.map(|x| x * 2), Optional::Some(6));
/// assert_eq!(absent.map(|x| x * 2), Optional::None);
/// assert_eq!(present.to_string(), "Some(3)");
/// assert_eq!(absent.to_string(), "None");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    /// Absence of a value. Orders before every `Some`, as with `Option`.
    None,
    /// A present value.
    Some(T),
}

/// Branches for [`Optional::match_with`].
///
/// Both fields are required, so a matcher missing a branch does not compile:
///
/// ```rust,compile_fail
/// use effectum::control::{Optional, OptionalMatcher};
///
/// let optional = Optional::some(1);
/// let _ = optional.match_with(OptionalMatcher { some: |value: i32| value });
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OptionalMatcher<S, N> {
    /// Invoked with the value of a `Some`.
    pub some: S,
    /// Invoked when the optional is `None`.
    pub none: N,
}

impl<T> Optional<T> {
    /// The shared absence value.
    pub const NONE: Self = Self::None;

    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a present value.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Returns [`Optional::NONE`].
    #[inline]
    pub const fn none() -> Self {
        Self::NONE
    }

    /// Converts the language's nullable value into an `Optional`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::control::Optional;
    ///
    /// assert_eq!(Optional::from_nullable(Some("a")), Optional::Some("a"));
    /// assert_eq!(Optional::from_nullable(None::<&str>), Optional::None);
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }

    /// Runs a fallible function; a raised error yields `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::control::Optional;
    ///
    /// assert_eq!(Optional::try_from_fn(|| "12".parse::<i32>()), Optional::Some(12));
    /// assert_eq!(Optional::try_from_fn(|| "twelve".parse::<i32>()), Optional::None);
    /// ```
    #[inline]
    pub fn try_from_fn<X, F>(function: F) -> Self
    where
        F: FnOnce() -> Result<T, X>,
    {
        match function() {
            Ok(value) => Self::Some(value),
            Err(_) => Self::None,
        }
    }

    /// Runs a fallible function that may also return null.
    ///
    /// A raised error and a `None` result both yield `None`.
    #[inline]
    pub fn try_from_nullable_fn<X, F>(function: F) -> Self
    where
        F: FnOnce() -> Result<Option<T>, X>,
    {
        match function() {
            Ok(Some(value)) => Self::Some(value),
            Ok(None) | Err(_) => Self::None,
        }
    }

    /// Runs a function, turning an unwinding panic into `None`.
    ///
    /// Aborts raised by [`panic`] (a failed `unwrap` or `expect`) are not
    /// contained and keep unwinding.
    #[inline]
    pub fn catch_unwind<F>(function: F) -> Self
    where
        F: FnOnce() -> T + UnwindSafe,
    {
        match std::panic::catch_unwind(function) {
            Ok(value) => Self::Some(value),
            Err(payload) => {
                drop(resume_if_abort(payload));
                Self::None
            }
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if a value is present and satisfies `predicate`.
    ///
    /// `predicate` is not invoked on `None`.
    #[inline]
    pub fn is_some_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => false,
        }
    }

    // =========================================================================
    // Reference Access
    // =========================================================================

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }

    /// Converts from `&mut Optional<T>` to `Optional<&mut T>`.
    #[inline]
    pub const fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Aborts with `message` if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust,should_panic
    /// use effectum::control::Optional;
    ///
    /// let absent: Optional<u8> = Optional::NONE;
    /// absent.expect("a value was required");
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic(message),
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Aborts with `called Option.unwrap() on a None value` if this is `None`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        self.expect(OPTIONAL_UNWRAP_MESSAGE)
    }

    /// Returns the contained value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the contained value or computes a default.
    ///
    /// `function` is invoked only on `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::control::Optional;
    ///
    /// let absent: Optional<Vec<u8>> = Optional::NONE;
    /// assert_eq!(absent.unwrap_or_else(|| vec![0]), vec![0]);
    ///
    /// let present = Optional::some(vec![1]);
    /// assert_eq!(present.unwrap_or_else(|| unreachable!()), vec![1]);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => function(),
        }
    }

    /// Returns the contained value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to a present value.
    ///
    /// `function` is never invoked on `None`.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Optional::Some(function(value)),
            Self::None => Optional::None,
        }
    }

    /// Maps a present value, or returns `default`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => default,
        }
    }

    /// Maps a present value, or computes a fallback.
    ///
    /// `default_function` is invoked only on `None`.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default_function: D, function: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => default_function(),
        }
    }

    /// Calls `function` with a reference to a present value, then returns self.
    #[inline]
    #[must_use]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            function(value);
        }
        self
    }

    /// Keeps a present value only if it satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::control::Optional;
    ///
    /// assert_eq!(Optional::some(4).filter(|x| x % 2 == 0), Optional::Some(4));
    /// assert_eq!(Optional::some(3).filter(|x| x % 2 == 0), Optional::None);
    /// ```
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::None,
        }
    }

    // =========================================================================
    // Sequencing
    // =========================================================================

    /// Chains a computation that may itself produce nothing.
    ///
    /// `function` is invoked only on `Some`.
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Optional::None,
        }
    }

    /// Alias of [`Optional::and_then`].
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        self.and_then(function)
    }

    /// Returns `other` if self is `Some`, otherwise `None`.
    #[inline]
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match self {
            Self::Some(_) => other,
            Self::None => Optional::None,
        }
    }

    /// Returns self if `Some`, otherwise `other`.
    #[inline]
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => other,
        }
    }

    /// Returns self if `Some`, otherwise the result of `function`.
    ///
    /// `function` is not invoked on `Some`.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => function(),
        }
    }

    /// Returns the one present value if exactly one of the two is `Some`.
    #[inline]
    #[must_use]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Some(value), Self::None) | (Self::None, Self::Some(value)) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// Pairs two present values.
    #[inline]
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        match (self, other) {
            (Self::Some(left), Optional::Some(right)) => Optional::Some((left, right)),
            _ => Optional::None,
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into an [`Outcome`], using `error` for `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::control::{Optional, Outcome};
    ///
    /// assert_eq!(Optional::some(1).ok_or("missing"), Outcome::Ok(1));
    /// assert_eq!(Optional::<i32>::NONE.ok_or("missing"), Outcome::Err("missing"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Err(error),
        }
    }

    /// Converts into an [`Outcome`], computing the error only on `None`.
    #[inline]
    pub fn ok_or_else<E, F>(self, function: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Err(function()),
        }
    }

    /// Converts into the standard library `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }

    // =========================================================================
    // Pattern Application
    // =========================================================================

    /// Invokes exactly one branch of `matcher`, depending on the variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::control::{Optional, OptionalMatcher};
    ///
    /// let greeting = Optional::some("Ada").match_with(OptionalMatcher {
    ///     some: |name: &str| format!("Hello, {name}"),
    ///     none: || "Hello, stranger".to_string(),
    /// });
    /// assert_eq!(greeting, "Hello, Ada");
    /// ```
    #[inline]
    pub fn match_with<U, S, N>(self, matcher: OptionalMatcher<S, N>) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        match self {
            Self::Some(value) => (matcher.some)(value),
            Self::None => (matcher.none)(),
        }
    }

    /// Eliminates the `Optional` by applying one of two functions.
    #[inline]
    pub fn fold<U, N, S>(self, none_function: N, some_function: S) -> U
    where
        N: FnOnce() -> U,
        S: FnOnce(T) -> U,
    {
        self.map_or_else(none_function, some_function)
    }
}

impl<T> Optional<Optional<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::control::Optional;
    ///
    /// assert_eq!(Optional::some(Optional::some(1)).flatten(), Optional::Some(1));
    /// assert_eq!(Optional::some(Optional::<i32>::NONE).flatten(), Optional::None);
    ///
    /// let deep = Optional::some(Optional::some(Optional::some("x")));
    /// assert_eq!(deep.flatten().flatten(), Optional::Some("x"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        self.and_then(|inner| inner)
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::NONE
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::from_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Optional::Some(value) => Some(value),
            Optional::None => None,
        }
    }
}

// =============================================================================
// Iteration
// =============================================================================

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}
