//! Kind instances for standard containers.
//!
//! The type class dictionaries in [`typeclass`](crate::typeclass) are kinds
//! of their own (`SemigroupKind`, `OrderKind`, ...). This module adds the
//! container kinds the generic combinators are usually exercised with:
//!
//! | Kind | Constructor | Product | Extendable | Comonad |
//! |------|-------------|---------|------------|---------|
//! | [`OptionKind`] | `Option<_>` | zip | yes | no |
//! | [`VecKind`] | `Vec<_>` | cartesian | suffixes | no |
//! | [`IdentityKind`] | [`Identity<_>`] | pair | yes | yes |
//!
//! All three implement `Invariant`, `Covariant`, `Of`, `SemiProduct` and
//! `Product`.

mod identity;
mod option;
mod vec;

pub use identity::{Identity, IdentityKind};
pub use option::OptionKind;
pub use vec::VecKind;
