//! Of type class - lifting a plain value into a kind.
//!
//! `Of` is the "pure" half of an applicative. For a container such as
//! `Option` it wraps the value. For a dictionary such as `Semigroup` it
//! builds the instance that always yields the value.
//!
//! # Examples
//!
//! ```rust
//! use kindred::instances::{OptionKind, VecKind};
//! use kindred::typeclass::Of;
//!
//! assert_eq!(OptionKind::of(1), Some(1));
//! assert_eq!(VecKind::of("x"), vec!["x"]);
//! ```

use super::kind::Kind;

/// A kind that can lift any value.
pub trait Of: Kind {
    /// Lifts `value` into the kind.
    fn of<A: Clone + 'static>(value: A) -> Self::WithType<A>;
}

/// The kind applied to `()`.
///
/// This is the usual starting point of an [`and_then_bind`] chain.
///
/// [`and_then_bind`]: super::semi_product::and_then_bind
pub fn unit<F: Of>() -> F::WithType<()> {
    F::of(())
}

/// Lifts `value` through two nested kinds.
///
/// # Examples
///
/// ```rust
/// use kindred::instances::{OptionKind, VecKind};
/// use kindred::typeclass::of;
///
/// assert_eq!(of::of_composition::<VecKind, OptionKind, _>(3), vec![Some(3)]);
/// ```
pub fn of_composition<F, G, A>(value: A) -> F::WithType<G::WithType<A>>
where
    F: Of,
    G: Of,
    A: Clone + 'static,
    G::WithType<A>: Clone + 'static,
{
    F::of::<G::WithType<A>>(G::of::<A>(value))
}
