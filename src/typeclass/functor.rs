//! Functor type class - mapping over container values.
//!
//! A `Functor` transforms the contents of a container without changing its
//! shape: `Some` stays `Some`, `Err` stays the same `Err`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effectum::control::{Optional, Outcome};
//! use effectum::typeclass::Functor;
//!
//! let length = Optional::some("four").fmap(str::len);
//! assert_eq!(length, Optional::Some(4));
//!
//! let failure: Outcome<i32, &str> = Outcome::err("boom");
//! assert_eq!(failure.fmap(|x| x + 1), Outcome::Err("boom"));
//! ```

use super::higher::TypeConstructor;
use crate::control::{Optional, Outcome};

/// Containers whose values can be mapped over.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the contained value.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies `function` to a reference to the contained value.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the contained value with `value`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the contained value.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Optional<A> Implementation
// =============================================================================

impl<A> Functor for Optional<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Optional<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Outcome<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Functor for Outcome<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(function(value)),
            Outcome::Err(error) => Outcome::Err(error.clone()),
        }
    }
}
