//! Pure containers for absence and failure.
//!
//! - [`Optional`]: a value that may be absent
//! - [`Outcome`]: a success value or an error
//! - [`panic`]: the unrecoverable abort behind the `expect`/`unwrap` family
//!
//! Both containers are closed enums with no execution step. `Optional`
//! converts into `Outcome` through [`Optional::ok_or`] and
//! [`Optional::ok_or_else`]; `Outcome` does not depend on `Optional`.
//!
//! # Examples
//!
//! ```rust
//! use effectum::control::{Optional, Outcome};
//!
//! fn parse_port(text: Option<&str>) -> Outcome<u16, String> {
//!     Optional::from_nullable(text)
//!         .ok_or_else(|| "port missing".to_string())
//!         .and_then(|text| {
//!             Outcome::try_from_fn(|| text.parse::<u16>(), format!("invalid port {text}"))
//!         })
//! }
//!
//! assert_eq!(parse_port(Some("8080")), Outcome::Ok(8080));
//! assert_eq!(parse_port(Some("http")), Outcome::Err("invalid port http".to_string()));
//! assert_eq!(parse_port(None), Outcome::Err("port missing".to_string()));
//! ```

mod optional;
mod outcome;
pub mod panic;

pub use optional::{Optional, OptionalMatcher};
pub use outcome::{Outcome, OutcomeMatcher};
pub use self::panic::panic;
