//! Outcome type - a computation that either succeeded or failed.
//!
//! This module provides the `Outcome<T, E>` type, which is either `Ok(T)`
//! carrying a success value or `Err(E)` carrying an error. Unlike
//! [`Optional`](super::Optional), the negative variant carries a payload.
//!
//! Failures are plain data: combinators such as [`Outcome::map`] and
//! [`Outcome::and_then`] short-circuit on `Err` and thread the error through
//! unchanged. Only the `expect`/`unwrap` family escalates to an abort, and
//! only when called on the wrong variant.
//!
//! # Examples
//!
//! ```rust
//! use effectum::control::Outcome;
//!
//! let parsed = Outcome::try_from_fn(|| "42".parse::<i32>(), "not a number");
//! assert_eq!(parsed, Outcome::Ok(42));
//!
//! let doubled = parsed.map(|n| n * 2).unwrap_or(0);
//! assert_eq!(doubled, 84);
//!
//! let failed = Outcome::try_from_fn(|| "forty-two".parse::<i32>(), "not a number");
//! assert_eq!(failed.to_string(), "Err(not a number)");
//! ```

use std::fmt;
use std::panic::UnwindSafe;

use super::panic::{OUTCOME_UNWRAP_ERR_MESSAGE, OUTCOME_UNWRAP_MESSAGE, panic, resume_if_abort};

/// A value that is either a success (`Ok`) or a failure (`Err`).
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error
///
/// # Examples
///
/// ```rust
/// use effectum::control::Outcome;
///
/// let success: Outcome<i32, String> = Outcome::ok(42);
/// let failure: Outcome<i32, String> = Outcome::err("boom".to_string());
///
/// assert_eq!(success.map(|x| x + 1), Outcome::Ok(43));
/// assert_eq!(failure.map(|x| x + 1), Outcome::Err("boom".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this `Outcome` may be an `Err` variant, which should be handled"]
pub enum Outcome<T, E> {
    /// The success variant.
    Ok(T),
    /// The failure variant, carrying the error.
    Err(E),
}

/// Branches for [`Outcome::match_with`].
///
/// Both fields are required, so a matcher missing a branch does not compile:
///
/// ```rust,compile_fail
/// use effectum::control::{Outcome, OutcomeMatcher};
///
/// let outcome: Outcome<i32, String> = Outcome::ok(1);
/// let _ = outcome.match_with(OutcomeMatcher { ok: |value: i32| value });
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OutcomeMatcher<S, F> {
    /// Invoked with the value of an `Ok`.
    pub ok: S,
    /// Invoked with the error of an `Err`.
    pub err: F,
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a success.
    #[inline]
    pub const fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Creates a failure.
    #[inline]
    pub const fn err(error: E) -> Self {
        Self::Err(error)
    }

    /// Creates an `Outcome` from a nullable value.
    ///
    /// `Some(value)` becomes `Ok(value)`; `None` becomes `Err(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::control::Outcome;
    ///
    /// assert_eq!(Outcome::from_nullable(Some(1), "missing"), Outcome::Ok(1));
    /// assert_eq!(Outcome::from_nullable(None::<i32>, "missing"), Outcome::Err("missing"));
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<T>, error: E) -> Self {
        match value {
            Some(value) => Self::Ok(value),
            None => Self::Err(error),
        }
    }

    /// Runs a fallible function, replacing any error it raises with `error`.
    ///
    /// `error` is a value the caller has already built, not a factory: it is
    /// constructed whether or not the function fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::control::Outcome;
    ///
    /// let parsed = Outcome::try_from_fn(|| "7".parse::<u8>(), "invalid");
    /// assert_eq!(parsed.unwrap(), 7);
    ///
    /// let parsed = Outcome::try_from_fn(|| "seven".parse::<u8>(), "invalid");
    /// assert_eq!(parsed.unwrap_err(), "invalid");
    /// ```
    #[inline]
    pub fn try_from_fn<X, F>(function: F, error: E) -> Self
    where
        F: FnOnce() -> Result<T, X>,
    {
        match function() {
            Ok(value) => Self::Ok(value),
            Err(_) => Self::Err(error),
        }
    }

    /// Runs a fallible function that may also return null.
    ///
    /// A raised error and a `None` result both become `Err(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::control::Outcome;
    ///
    /// let lookup = |key: &str| -> Result<Option<u32>, String> {
    ///     match key {
    ///         "known" => Ok(Some(1)),
    ///         "unknown" => Ok(None),
    ///         _ => Err(format!("bad key {key}")),
    ///     }
    /// };
    ///
    /// assert_eq!(Outcome::try_from_nullable_fn(|| lookup("known"), 0), Outcome::Ok(1));
    /// assert_eq!(Outcome::try_from_nullable_fn(|| lookup("unknown"), 0), Outcome::Err(0));
    /// assert_eq!(Outcome::try_from_nullable_fn(|| lookup(""), 0), Outcome::Err(0));
    /// ```
    #[inline]
    pub fn try_from_nullable_fn<X, F>(function: F, error: E) -> Self
    where
        F: FnOnce() -> Result<Option<T>, X>,
    {
        match function() {
            Ok(Some(value)) => Self::Ok(value),
            Ok(None) | Err(_) => Self::Err(error),
        }
    }

    /// Runs a function, turning an unwinding panic into `Err(error)`.
    ///
    /// Aborts raised by [`panic`] (a failed `unwrap` or `expect`) are not
    /// contained and keep unwinding, and neither are panics that abort the
    /// process instead of unwinding.
    #[inline]
    pub fn catch_unwind<F>(function: F, error: E) -> Self
    where
        F: FnOnce() -> T + UnwindSafe,
    {
        match std::panic::catch_unwind(function) {
            Ok(value) => Self::Ok(value),
            Err(payload) => {
                drop(resume_if_abort(payload));
                Self::Err(error)
            }
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` if this is an `Ok` value.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is an `Err` value.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Returns `true` if this is `Ok` and the value satisfies `predicate`.
    ///
    /// `predicate` is not invoked on `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::control::Outcome;
    ///
    /// let success: Outcome<i32, &str> = Outcome::ok(4);
    /// assert!(success.is_ok_and(|x| *x > 3));
    ///
    /// let failure: Outcome<i32, &str> = Outcome::err("boom");
    /// assert!(!failure.is_ok_and(|_| unreachable!()));
    /// ```
    #[inline]
    pub fn is_ok_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Ok(value) => predicate(value),
            Self::Err(_) => false,
        }
    }

    /// Returns `true` if this is `Err` and the error satisfies `predicate`.
    ///
    /// `predicate` is not invoked on `Ok`.
    #[inline]
    pub fn is_err_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&E) -> bool,
    {
        match self {
            Self::Ok(_) => false,
            Self::Err(error) => predicate(error),
        }
    }

    // =========================================================================
    // Reference Access
    // =========================================================================

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Converts from `&mut Outcome<T, E>` to `Outcome<&mut T, &mut E>`.
    #[inline]
    pub const fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Aborts with `message` if this is an `Err`.
    ///
    /// # Examples
    ///
    /// ```rust,should_panic
    /// use effectum::control::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::err("boom");
    /// failure.expect("config must load");
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => panic(message),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Aborts with `called Result.unwrap() on an Err value` if this is an `Err`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        self.expect(OUTCOME_UNWRAP_MESSAGE)
    }

    /// Returns the error.
    ///
    /// # Panics
    ///
    /// Aborts with `message` if this is an `Ok`.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E {
        match self {
            Self::Ok(_) => panic(message),
            Self::Err(error) => error,
        }
    }

    /// Returns the error.
    ///
    /// # Panics
    ///
    /// Aborts with `called Result.unwrapErr() on an Ok value` if this is an `Ok`.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        self.expect_err(OUTCOME_UNWRAP_ERR_MESSAGE)
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value or computes one from the error.
    ///
    /// `function` is not invoked on `Ok`.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => function(error),
        }
    }

    /// Returns the success value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => T::default(),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the success value, leaving an `Err` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::control::Outcome;
    ///
    /// let success: Outcome<&str, i32> = Outcome::ok("hello");
    /// assert_eq!(success.map(str::len), Outcome::Ok(5));
    ///
    /// let failure: Outcome<&str, i32> = Outcome::err(-1);
    /// assert_eq!(failure.map(str::len), Outcome::Err(-1));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(function(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Applies `function` to the error, leaving an `Ok` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::control::Outcome;
    ///
    /// let failure: Outcome<i32, i32> = Outcome::err(404);
    /// assert_eq!(failure.map_err(|code| format!("status {code}")), Outcome::Err("status 404".to_string()));
    /// ```
    #[inline]
    pub fn map_err<F, O>(self, function: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(function(error)),
        }
    }

    /// Maps the success value, or returns `default` on `Err`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(_) => default,
        }
    }

    /// Maps the success value, or computes a fallback from the error.
    ///
    /// `default_function` is not invoked on `Ok`.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default_function: D, function: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => default_function(error),
        }
    }

    /// Calls `function` with a reference to the success value, then returns self.
    #[inline]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            function(value);
        }
        self
    }

    /// Calls `function` with a reference to the error, then returns self.
    #[inline]
    pub fn inspect_err<F>(self, function: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Err(error) = &self {
            function(error);
        }
        self
    }

    // =========================================================================
    // Sequencing
    // =========================================================================

    /// Returns `other` if this is `Ok`, otherwise propagates the error.
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Chains a computation that may itself fail.
    ///
    /// `function` is invoked only on `Ok`; an `Err` is propagated unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::control::Outcome;
    ///
    /// fn half(value: i32) -> Outcome<i32, String> {
    ///     if value % 2 == 0 {
    ///         Outcome::ok(value / 2)
    ///     } else {
    ///         Outcome::err(format!("{value} is odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::ok(8).and_then(half).and_then(half), Outcome::Ok(2));
    /// assert_eq!(Outcome::ok(6).and_then(half).and_then(half), Outcome::Err("3 is odd".to_string()));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Alias of [`Outcome::and_then`].
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        self.and_then(function)
    }

    /// Returns self if `Ok`, otherwise `other`.
    #[inline]
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(_) => other,
        }
    }

    /// Returns self if `Ok`, otherwise recovers from the error with `function`.
    ///
    /// `function` is not invoked on `Ok`.
    #[inline]
    pub fn or_else<F, O>(self, function: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => function(error),
        }
    }

    // =========================================================================
    // Pattern Application
    // =========================================================================

    /// Invokes exactly one branch of `matcher`, depending on the variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::control::{Outcome, OutcomeMatcher};
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::err("boom");
    /// let text = outcome.match_with(OutcomeMatcher {
    ///     ok: |value: i32| format!("value {value}"),
    ///     err: |error: &str| format!("error {error}"),
    /// });
    /// assert_eq!(text, "error boom");
    /// ```
    #[inline]
    pub fn match_with<U, S, F>(self, matcher: OutcomeMatcher<S, F>) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(E) -> U,
    {
        match self {
            Self::Ok(value) => (matcher.ok)(value),
            Self::Err(error) => (matcher.err)(error),
        }
    }

    /// Eliminates the `Outcome` by applying one of two functions.
    #[inline]
    pub fn fold<U, F, S>(self, err_function: F, ok_function: S) -> U
    where
        F: FnOnce(E) -> U,
        S: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => ok_function(value),
            Self::Err(error) => err_function(error),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into a standard library `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting.
    ///
    /// Deeper nesting is removed by calling `flatten` once per level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::control::Outcome;
    ///
    /// let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::ok(Outcome::ok(1));
    /// assert_eq!(nested.flatten(), Outcome::Ok(1));
    ///
    /// let inner_error: Outcome<Outcome<i32, &str>, &str> = Outcome::ok(Outcome::err("inner"));
    /// assert_eq!(inner_error.flatten(), Outcome::Err("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(|inner| inner)
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(formatter, "Ok({value})"),
            Self::Err(error) => write!(formatter, "Err({error})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn ok_is_ok() {
        let outcome: Outcome<i32, String> = Outcome::ok(1);
        assert!(outcome.is_ok());
        assert!(!outcome.is_err());
    }

    #[rstest]
    fn err_is_err() {
        let outcome: Outcome<i32, String> = Outcome::err("boom".to_string());
        assert!(outcome.is_err());
        assert!(!outcome.is_ok());
    }

    #[rstest]
    #[case(Outcome::Ok(5), true)]
    #[case(Outcome::Ok(1), false)]
    #[case(Outcome::Err("x"), false)]
    fn is_ok_and_checks_value(#[case] outcome: Outcome<i32, &str>, #[case] expected: bool) {
        assert_eq!(outcome.is_ok_and(|value| *value > 2), expected);
    }

    #[rstest]
    fn is_err_and_skips_predicate_on_ok() {
        let calls = Cell::new(0);
        let outcome: Outcome<i32, &str> = Outcome::ok(1);
        assert!(!outcome.is_err_and(|_| {
            calls.set(calls.get() + 1);
            true
        }));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    #[should_panic(expected = "called Result.unwrap() on an Err value")]
    fn unwrap_on_err_aborts() {
        let outcome: Outcome<i32, &str> = Outcome::err("boom");
        let _ = outcome.unwrap();
    }

    #[rstest]
    #[should_panic(expected = "called Result.unwrapErr() on an Ok value")]
    fn unwrap_err_on_ok_aborts() {
        let outcome: Outcome<i32, &str> = Outcome::ok(1);
        let _ = outcome.unwrap_err();
    }

    #[rstest]
    fn unwrap_or_else_is_lazy_on_ok() {
        let calls = Cell::new(0);
        let outcome: Outcome<i32, &str> = Outcome::ok(1);
        let value = outcome.unwrap_or_else(|_| {
            calls.set(calls.get() + 1);
            0
        });
        assert_eq!(value, 1);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn or_else_recovers_with_new_error_type() {
        let outcome: Outcome<i32, &str> = Outcome::err("boom");
        let recovered: Outcome<i32, usize> = outcome.or_else(|error| Outcome::err(error.len()));
        assert_eq!(recovered, Outcome::Err(4));
    }

    #[rstest]
    fn catch_unwind_converts_panics() {
        let outcome = Outcome::catch_unwind(|| -> i32 { std::panic!("boom") }, "caught");
        assert_eq!(outcome, Outcome::Err("caught"));
    }

    #[rstest]
    #[should_panic(expected = "called Result.unwrap() on an Err value")]
    fn catch_unwind_lets_unwrap_abort_through() {
        let _ = Outcome::catch_unwind(|| Outcome::<i32, &str>::err("e").unwrap(), "recovered");
    }

    #[rstest]
    fn result_conversion_roundtrip() {
        let result: Result<i32, String> = Outcome::ok(1).into_result();
        assert_eq!(result, Ok(1));
        let outcome: Outcome<i32, String> = Err("e".to_string()).into();
        assert_eq!(outcome, Outcome::Err("e".to_string()));
    }
}
