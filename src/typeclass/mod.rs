//! Type class traits for the crate's containers.
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation through GATs
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining independent containers
//! - [`Monad`]: Sequencing dependent computations
//!
//! [`Optional`](crate::control::Optional) and
//! [`Outcome`](crate::control::Outcome) implement all four, so generic code
//! written against these traits accepts either container.
//!
//! # Examples
//!
//! ```rust
//! use effectum::control::{Optional, Outcome};
//! use effectum::typeclass::Functor;
//!
//! fn describe<F: Functor<Inner = i32>>(container: F) -> F::WithType<String> {
//!     container.fmap(|value| format!("#{value}"))
//! }
//!
//! assert_eq!(describe(Optional::some(1)), Optional::Some("#1".to_string()));
//! assert_eq!(
//!     describe(Outcome::<i32, ()>::err(())),
//!     Outcome::Err(())
//! );
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
