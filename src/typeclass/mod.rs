//! Type classes as values and as traits over emulated higher kinds.
//!
//! Two layers live here.
//!
//! ## Dictionaries
//!
//! - [`Semigroup`]: an associative `combine`
//! - [`Monoid`]: a semigroup with an `empty` identity
//! - [`Order`]: a total three-way comparison
//! - [`Bounded`]: an order with least and greatest elements
//!
//! These are ordinary structs holding reference-counted closures, so a type
//! may have any number of instances and new instances are derived from old
//! ones by plain functions.
//!
//! ## Kind-level type classes
//!
//! Rust has no higher-kinded types. A zero-sized marker implementing
//! [`Kind`] stands in for a type constructor (`SemigroupKind` for
//! `Semigroup<_>`, `OptionKind` for `Option<_>`), and the following traits
//! are implemented by those markers:
//!
//! - [`Invariant`]: `imap` through an isomorphism
//! - [`Covariant`]: `map`
//! - [`Contravariant`]: `contramap`
//! - [`Of`]: lift a value
//! - [`SemiProduct`]: pair two values
//! - [`Product`]: pair any number of values
//! - [`Extendable`]: `extend` over contexts
//! - [`Comonad`]: `extract` the value in focus
//!
//! Operations derived from these traits are free functions in the module of
//! the trait they need ([`covariant::flap`], [`semi_product::and_then_bind`],
//! ...). Tuples and structs of instances are combined by
//! [`NonEmptyTuple::tuple`] and [`product_struct!`](crate::product_struct).
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{NonEmptyTuple, Order, Semigroup};
//! use std::cmp::Ordering;
//!
//! let by_score_then_name = (Order::<u32>::number().reverse(), Order::<&str>::string()).tuple();
//! let mut results = vec![(3, "carol"), (7, "bob"), (7, "alice")];
//! results.sort_by(|left, right| by_score_then_name.compare(left, right));
//! assert_eq!(results, vec![(7, "alice"), (7, "bob"), (3, "carol")]);
//!
//! let totals = (Semigroup::<u32>::sum(), Semigroup::<u32>::max(Order::number())).tuple();
//! assert_eq!(totals.combine_many((0, 0), [(3, 3), (7, 7)]), (10, 7));
//! ```

mod bounded;
pub mod comonad;
pub mod contravariant;
pub mod covariant;
pub mod extendable;
pub mod invariant;
mod kind;
mod monoid;
pub mod of;
mod order;
pub mod product;
mod product_struct_macro;
pub mod semi_product;
mod semigroup;
mod tuple;

pub use bounded::{Bounded, BoundedValue};
pub use comonad::Comonad;
pub use contravariant::Contravariant;
pub use covariant::Covariant;
pub use extendable::Extendable;
pub use invariant::Invariant;
pub use kind::{Kind, TypeConstructor};
pub use monoid::{Monoid, MonoidKind};
pub use of::Of;
pub use order::{Order, OrderKind, TotalNumber};
pub use product::Product;
pub use semi_product::SemiProduct;
pub use semigroup::{Semigroup, SemigroupKind};
pub use tuple::{Append, NonEmptyTuple};
