//! Monad type class - sequencing dependent computations.
//!
//! `Monad` extends [`Applicative`] with [`flat_map`](Monad::flat_map): the
//! next computation is chosen from the value of the previous one. On
//! `Optional` and `Outcome` the negative variant short-circuits the chain.
//!
//! # Laws
//!
//! ```text
//! pure(a).flat_map(f) == f(a)                                 // left identity
//! m.flat_map(pure) == m                                       // right identity
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g)) // associativity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effectum::control::Optional;
//! use effectum::typeclass::Monad;
//!
//! fn first_char(text: &str) -> Optional<char> {
//!     Optional::from_nullable(text.chars().next())
//! }
//!
//! let found = Monad::flat_map(Optional::some("abc"), first_char);
//! assert_eq!(found, Optional::Some('a'));
//!
//! let skipped = Optional::some("abc").then(Optional::some(1));
//! assert_eq!(skipped, Optional::Some(1));
//! ```

use super::applicative::Applicative;
use crate::control::{Optional, Outcome};

/// Applicatives whose computations can depend on earlier results.
pub trait Monad: Applicative {
    /// Feeds the contained value to `function`, which picks the next container.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias of [`Monad::flat_map`].
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        Monad::flat_map(self, function)
    }

    /// Sequences `next` after self, discarding self's value.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        Monad::flat_map(self, |_| next)
    }
}

impl<A> Monad for Optional<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        Self::and_then(self, function)
    }
}

impl<T, E: Clone> Monad for Outcome<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> Outcome<B, E>,
    {
        Self::and_then(self, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn halve(value: i32) -> Optional<i32> {
        if value % 2 == 0 {
            Optional::some(value / 2)
        } else {
            Optional::none()
        }
    }

    #[rstest]
    #[case(Optional::Some(8), Optional::Some(4))]
    #[case(Optional::Some(3), Optional::None)]
    #[case(Optional::None, Optional::None)]
    fn optional_flat_map(#[case] input: Optional<i32>, #[case] expected: Optional<i32>) {
        assert_eq!(Monad::flat_map(input, halve), expected);
    }

    #[rstest]
    fn optional_left_identity_law() {
        let value = 12;
        let left = Monad::flat_map(<Optional<()>>::pure(value), halve);
        assert_eq!(left, halve(value));
    }

    #[rstest]
    fn outcome_then_propagates_error() {
        let failure: Outcome<i32, &str> = Outcome::err("first");
        assert_eq!(failure.then(Outcome::<i32, &str>::ok(2)), Outcome::Err("first"));
    }

    #[rstest]
    fn outcome_right_identity_law() {
        let success: Outcome<i32, &str> = Outcome::ok(5);
        let result = Monad::flat_map(success, <Outcome<i32, &str>>::pure);
        assert_eq!(result, success);
    }
}
