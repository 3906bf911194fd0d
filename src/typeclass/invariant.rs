//! Invariant type class - mapping through an isomorphism.
//!
//! An invariant kind can turn `F<A>` into `F<B>` when it is given functions
//! in both directions, `to: A -> B` and `from: B -> A`. Every type class
//! dictionary in this crate is invariant: a `Semigroup<A>` needs `from` to
//! feed its operands back to the `A` instance and `to` to return the result.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! imap(fa, |a| a, |a| a) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! imap(imap(fa, f1, g1), f2, g2) == imap(fa, |a| f2(f1(a)), |c| g1(g2(c)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Invariant, Semigroup, SemigroupKind};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Celsius(f64);
//!
//! let warmer = SemigroupKind::imap(
//!     Semigroup::sum(),
//!     Celsius,
//!     |Celsius(degrees): Celsius| degrees,
//! );
//! assert_eq!(warmer.combine(Celsius(1.5), Celsius(2.0)), Celsius(3.5));
//! ```

use std::rc::Rc;

use super::kind::Kind;

/// A kind whose values can be mapped through an isomorphism.
pub trait Invariant: Kind {
    /// Maps `fa` to the constructor applied to `B`.
    ///
    /// `to` and `from` are expected to be mutually inverse.
    fn imap<A, B, Forward, Backward>(
        fa: Self::WithType<A>,
        to: Forward,
        from: Backward,
    ) -> Self::WithType<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        Forward: Fn(A) -> B + 'static,
        Backward: Fn(B) -> A + 'static;
}

/// Maps through two nested invariant kinds at once.
///
/// # Examples
///
/// ```rust
/// use kindred::instances::OptionKind;
/// use kindred::typeclass::{Semigroup, SemigroupKind, invariant};
///
/// let nested = Some(Semigroup::sum());
/// let mapped = invariant::imap_composition::<OptionKind, SemigroupKind, _, _, _, _>(
///     nested,
///     |value: i32| value.to_string(),
///     |text: String| text.parse::<i32>().unwrap_or_default(),
/// );
/// let semigroup = mapped.expect("Some stays Some");
/// assert_eq!(semigroup.combine("2".into(), "3".into()), "5");
/// ```
pub fn imap_composition<F, G, A, B, Forward, Backward>(
    fga: F::WithType<G::WithType<A>>,
    to: Forward,
    from: Backward,
) -> F::WithType<G::WithType<B>>
where
    F: Invariant,
    G: Invariant,
    A: Clone + 'static,
    B: Clone + 'static,
    G::WithType<A>: Clone + 'static,
    G::WithType<B>: Clone + 'static,
    Forward: Fn(A) -> B + 'static,
    Backward: Fn(B) -> A + 'static,
{
    let to = Rc::new(to);
    let from = Rc::new(from);
    let (inner_to, inner_from) = (Rc::clone(&to), Rc::clone(&from));
    F::imap::<G::WithType<A>, G::WithType<B>, _, _>(
        fga,
        move |ga: G::WithType<A>| {
            let (to, from) = (Rc::clone(&inner_to), Rc::clone(&inner_from));
            G::imap::<A, B, _, _>(ga, move |value: A| to(value), move |value: B| from(value))
        },
        move |gb: G::WithType<B>| {
            let (to, from) = (Rc::clone(&to), Rc::clone(&from));
            G::imap::<B, A, _, _>(gb, move |value: B| from(value), move |value: A| to(value))
        },
    )
}

/// Wraps the inner type in a one-element tuple.
///
/// This is the arity-one case of tuple derivation.
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::{Semigroup, SemigroupKind, invariant};
///
/// let tupled = invariant::tupled::<SemigroupKind, _>(Semigroup::sum());
/// assert_eq!(tupled.combine((1,), (2,)), (3,));
/// ```
pub fn tupled<F, A>(fa: F::WithType<A>) -> F::WithType<(A,)>
where
    F: Invariant,
    A: Clone + 'static,
{
    F::imap::<A, (A,), _, _>(fa, |value| (value,), |(value,)| value)
}
