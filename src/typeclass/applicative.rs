//! Applicative type class - combining independent computations.
//!
//! `Applicative` extends [`Functor`] with [`pure`](Applicative::pure), which
//! lifts a plain value into the container, and [`map2`](Applicative::map2),
//! which combines two containers whose values do not depend on each other.
//!
//! # Laws
//!
//! ```text
//! pure(x).map2(pure(y), f) == pure(f(x, y))
//! fa.map2(pure(()), |a, _| a) == fa
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effectum::control::{Optional, Outcome};
//! use effectum::typeclass::Applicative;
//!
//! let sum = Optional::some(1).map2(Optional::some(2), |a, b| a + b);
//! assert_eq!(sum, Optional::Some(3));
//!
//! // The first error wins.
//! let left: Outcome<i32, &str> = Outcome::err("left");
//! let right: Outcome<i32, &str> = Outcome::err("right");
//! assert_eq!(left.map2(right, |a, b| a + b), Outcome::Err("left"));
//! ```

use super::functor::Functor;
use crate::control::{Optional, Outcome};

/// Functors that can lift values and combine independent containers.
pub trait Applicative: Functor {
    /// Lifts `value` into the container.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two containers with `function`.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three containers with `function`.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs the values of two containers.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a contained function to a contained argument.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Optional<A> Implementation
// =============================================================================

impl<A> Applicative for Optional<A> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Optional<B>, function: F) -> Optional<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Some(a), Optional::Some(b)) => Optional::Some(function(a, b)),
            _ => Optional::None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Optional<B>, third: Optional<C>, function: F) -> Optional<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Some(a), Optional::Some(b), Optional::Some(c)) => {
                Optional::Some(function(a, b, c))
            }
            _ => Optional::None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Optional<B>) -> Optional<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Self::Some(function), Optional::Some(b)) => Optional::Some(function(b)),
            _ => Optional::None,
        }
    }
}

// =============================================================================
// Outcome<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Applicative for Outcome<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B, E> {
        Outcome::Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Outcome<B, E>, function: F) -> Outcome<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Ok(a), Outcome::Ok(b)) => Outcome::Ok(function(a, b)),
            (Self::Err(error), _) | (_, Outcome::Err(error)) => Outcome::Err(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Outcome<B, E>,
        third: Outcome<C, E>,
        function: F,
    ) -> Outcome<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Ok(a), Outcome::Ok(b), Outcome::Ok(c)) => Outcome::Ok(function(a, b, c)),
            (Self::Err(error), _, _) | (_, Outcome::Err(error), _) | (_, _, Outcome::Err(error)) => {
                Outcome::Err(error)
            }
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Outcome<B, E>) -> Outcome<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Self::Ok(function), Outcome::Ok(b)) => Outcome::Ok(function(b)),
            (Self::Err(error), _) | (_, Outcome::Err(error)) => Outcome::Err(error),
        }
    }
}
