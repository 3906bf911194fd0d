//! # kindred
//!
//! Algebraic type classes for Rust, expressed as values and as traits over
//! emulated higher-kinded types.
//!
//! ## Overview
//!
//! - **Dictionaries**: [`Semigroup`](typeclass::Semigroup),
//!   [`Monoid`](typeclass::Monoid), [`Order`](typeclass::Order) and
//!   [`Bounded`](typeclass::Bounded) are plain values, so one type can carry
//!   many instances and instances are built from other instances.
//! - **Kind-level type classes**: `Invariant`, `Covariant`, `Contravariant`,
//!   `Of`, `SemiProduct`, `Product`, `Extendable` and `Comonad` are traits
//!   implemented by zero-sized markers that stand for a type constructor.
//! - **Derivation**: instances for tuples ([`NonEmptyTuple`](typeclass::NonEmptyTuple))
//!   and named structs ([`product_struct!`]) are assembled from instances
//!   for their parts, with arity and field mismatches rejected at compile
//!   time.
//! - **Instances**: `Option`, `Vec` and [`Identity`](instances::Identity)
//!   kinds to run the generic combinators on.
//!
//! ## Feature Flags
//!
//! - `typeclass`: dictionaries, kind-level traits and derivation
//! - `instances`: container kinds (`OptionKind`, `VecKind`, `IdentityKind`)
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use kindred::prelude::*;
//! use kindred::product_struct;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let semigroup = product_struct!(SemigroupKind => Person {
//!     name: Semigroup::string(),
//!     age: Semigroup::sum(),
//! });
//! let combined = semigroup.combine(
//!     Person { name: "a".into(), age: 10 },
//!     Person { name: "b".into(), age: 20 },
//! );
//! assert_eq!(combined, Person { name: "ab".into(), age: 30 });
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the type classes and, when enabled, the container kinds.
///
/// # Usage
///
/// ```rust
/// use kindred::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "instances")]
    pub use crate::instances::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "instances")]
pub mod instances;
