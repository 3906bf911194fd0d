//! Covariant type class - mapping over the values a kind produces.
//!
//! A covariant kind only needs the forward function to change its inner
//! type. [`imap`] derives the invariant map from [`Covariant::map`] by
//! ignoring the backward function, so a covariant instance implements
//! [`Invariant`] by delegating to it.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! map(fa, |a| a) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! map(map(fa, f), g) == map(fa, |a| g(f(a)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::instances::{OptionKind, VecKind};
//! use kindred::typeclass::Covariant;
//!
//! assert_eq!(OptionKind::map(Some(5), |value: i32| value * 2), Some(10));
//! assert_eq!(VecKind::map(vec![1, 2], |value: i32| value.to_string()), vec!["1", "2"]);
//! ```

use std::rc::Rc;

use super::invariant::Invariant;

/// A kind whose inner values can be mapped with a plain function.
pub trait Covariant: Invariant {
    /// Applies `function` to every value inside `fa`.
    fn map<A, B, Function>(fa: Self::WithType<A>, function: Function) -> Self::WithType<B>
    where
        A: 'static,
        B: 'static,
        Function: Fn(A) -> B + 'static;
}

/// Derives the invariant map of a covariant kind.
///
/// `from` is not needed and is dropped.
pub fn imap<F, A, B, Forward, Backward>(
    fa: F::WithType<A>,
    to: Forward,
    _from: Backward,
) -> F::WithType<B>
where
    F: Covariant,
    A: 'static,
    B: 'static,
    Forward: Fn(A) -> B + 'static,
{
    F::map::<A, B, Forward>(fa, to)
}

/// Maps through two nested covariant kinds at once.
///
/// # Examples
///
/// ```rust
/// use kindred::instances::{OptionKind, VecKind};
/// use kindred::typeclass::covariant;
///
/// let nested = vec![Some(1), None, Some(3)];
/// let mapped = covariant::map_composition::<VecKind, OptionKind, _, _, _>(nested, |value: i32| value + 1);
/// assert_eq!(mapped, vec![Some(2), None, Some(4)]);
/// ```
pub fn map_composition<F, G, A, B, Function>(
    fga: F::WithType<G::WithType<A>>,
    function: Function,
) -> F::WithType<G::WithType<B>>
where
    F: Covariant,
    G: Covariant,
    A: 'static,
    B: 'static,
    G::WithType<A>: 'static,
    G::WithType<B>: 'static,
    Function: Fn(A) -> B + 'static,
{
    let function = Rc::new(function);
    F::map::<G::WithType<A>, G::WithType<B>, _>(fga, move |ga: G::WithType<A>| {
        let function = Rc::clone(&function);
        G::map::<A, B, _>(ga, move |value: A| function(value))
    })
}

/// Applies every function inside `fab` to `value`.
///
/// # Examples
///
/// ```rust
/// use kindred::instances::VecKind;
/// use kindred::typeclass::covariant;
///
/// fn increment(value: i32) -> i32 { value + 1 }
/// fn scale(value: i32) -> i32 { value * 10 }
///
/// let functions = vec![increment as fn(i32) -> i32, scale];
/// assert_eq!(covariant::flap::<VecKind, _, _, _>(3, functions), vec![4, 30]);
/// ```
pub fn flap<F, A, B, Function>(value: A, fab: F::WithType<Function>) -> F::WithType<B>
where
    F: Covariant,
    A: Clone + 'static,
    B: 'static,
    Function: FnOnce(A) -> B + 'static,
{
    F::map::<Function, B, _>(fab, move |function: Function| function(value.clone()))
}

/// Replaces every value inside `fa` with `value`.
pub fn as_<F, A, B>(fa: F::WithType<A>, value: B) -> F::WithType<B>
where
    F: Covariant,
    A: 'static,
    B: Clone + 'static,
{
    F::map::<A, B, _>(fa, move |_: A| value.clone())
}

/// Replaces every value inside `fa` with `()`.
///
/// # Examples
///
/// ```rust
/// use kindred::instances::OptionKind;
/// use kindred::typeclass::covariant;
///
/// assert_eq!(covariant::as_unit::<OptionKind, _>(Some("ignored")), Some(()));
/// assert_eq!(covariant::as_unit::<OptionKind, i32>(None), None);
/// ```
pub fn as_unit<F, A>(fa: F::WithType<A>) -> F::WithType<()>
where
    F: Covariant,
    A: 'static,
{
    as_::<F, A, ()>(fa, ())
}
