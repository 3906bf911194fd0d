//! Comonad type class - extending with a way back out.
//!
//! A comonad is an [`Extendable`] kind that always holds a value to
//! `extract`. `Identity` is one; `Option` and `Vec` are not, since they can
//! be empty.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! extend(wa, extract) == wa
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! extract(extend(wa, f)) == f(wa)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::instances::{Identity, IdentityKind};
//! use kindred::typeclass::{Comonad, Extendable};
//!
//! let extended = IdentityKind::extend(Identity::new(20), |context: Identity<i32>| context.0 + 1);
//! assert_eq!(IdentityKind::extract(extended), 21);
//! ```

use super::extendable::Extendable;

/// An extendable kind that always contains a value.
pub trait Comonad: Extendable {
    /// The value in focus.
    fn extract<A>(wa: Self::WithType<A>) -> A;
}
