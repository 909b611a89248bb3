//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Optional<_>` or `Outcome<_, E>` as type
//! constructors directly. [`TypeConstructor`] names the contained type and
//! lets a trait swap it for another, which is what [`Functor`](super::Functor)
//! and [`Monad`](super::Monad) need to describe `map` and `flat_map`
//! generically.
//!
//! # Example
//!
//! ```rust
//! use effectum::control::Optional;
//! use effectum::typeclass::TypeConstructor;
//!
//! fn empty_like<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let present: Optional<i32> = Optional::some(42);
//! let absent: Optional<String> = empty_like(present);
//! assert_eq!(absent, Optional::None);
//! ```

use crate::control::{Optional, Outcome};

/// A type with a single swappable type parameter.
pub trait TypeConstructor {
    /// The contained type.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Optional<A> {
    type Inner = A;
    type WithType<B> = Optional<B>;
}

/// The error type is fixed; only the success type varies.
impl<T, E> TypeConstructor for Outcome<T, E> {
    type Inner = T;
    type WithType<B> = Outcome<B, E>;
}
