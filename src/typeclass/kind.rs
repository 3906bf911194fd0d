//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Option<_>` or
//! `Semigroup<_>` directly. This module works around that with two
//! complementary views of the same constructor:
//!
//! - [`Kind`] is implemented by a zero-sized *marker* (`SemigroupKind`,
//!   `OptionKind`, ...) and maps any type `A` to the constructor applied to
//!   it. Kind-level type classes ([`Invariant`](super::Invariant),
//!   [`Covariant`](super::Covariant), [`Product`](super::Product), ...) are
//!   traits over these markers with associated functions, so an instance is
//!   selected by naming its marker.
//! - [`TypeConstructor`] goes the other way: from an applied type such as
//!   `Semigroup<i32>` back to its marker and inner type. Generic tuple
//!   derivation uses it to require that every element shares one kind.
//!
//! # Example
//!
//! ```rust
//! use kindred::typeclass::{Kind, Semigroup, SemigroupKind, TypeConstructor};
//!
//! fn wrap<K: Kind>(value: K::WithType<i32>) -> K::WithType<i32> {
//!     value
//! }
//!
//! let sum: Semigroup<i32> = wrap::<SemigroupKind>(Semigroup::sum());
//! let applied: Semigroup<i32> = sum.into_kind();
//! assert_eq!(applied.combine(1, 2), 3);
//! ```

/// A marker standing for a unary type constructor.
///
/// # Laws
///
/// `WithType` must be a pure type-level function: the same `A` always maps
/// to the same type, and distinct markers may map to the same type only if
/// they share every type class instance.
pub trait Kind {
    /// The constructor applied to `A`.
    ///
    /// For `OptionKind`, `WithType<i32>` is `Option<i32>`.
    type WithType<A>;
}

/// An applied type constructor, seen from the value side.
///
/// For example, `Semigroup<i32>` has `Kind = SemigroupKind` and
/// `Inner = i32`.
///
/// # Laws
///
/// 1. **Consistency**: `<Self::Kind as Kind>::WithType<Self::Inner>` is `Self`.
/// 2. **Identity**: `into_kind` returns its argument unchanged.
pub trait TypeConstructor: Sized {
    /// The marker of the constructor.
    type Kind: Kind;

    /// The type parameter the constructor is currently applied to.
    type Inner;

    /// Views `self` through its marker.
    fn into_kind(self) -> <Self::Kind as Kind>::WithType<Self::Inner>;
}
