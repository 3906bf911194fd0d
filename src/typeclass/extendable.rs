//! Extendable type class - mapping with access to the whole context.
//!
//! Where [`Covariant::map`] hands the function one value at a time,
//! `extend` hands it an entire `W<A>` and collects the results. For a
//! vector the function sees every suffix; for `Option` it sees the option
//! itself.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! extend(extend(wa, f), g) == extend(wa, |w| g(extend(w, f)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::instances::VecKind;
//! use kindred::typeclass::Extendable;
//!
//! let running_totals = VecKind::extend(vec![1, 2, 3], |suffix: Vec<i32>| suffix.iter().sum::<i32>());
//! assert_eq!(running_totals, vec![6, 5, 3]);
//! ```

use super::covariant::Covariant;

/// A covariant kind that can be extended over its contexts.
pub trait Extendable: Covariant {
    /// Applies `function` to every context inside `wa`.
    fn extend<A, B, Function>(wa: Self::WithType<A>, function: Function) -> Self::WithType<B>
    where
        A: Clone + 'static,
        B: 'static,
        Function: Fn(Self::WithType<A>) -> B + 'static;
}

/// Replaces every value with the context it was found in.
///
/// # Examples
///
/// ```rust
/// use kindred::instances::VecKind;
/// use kindred::typeclass::extendable;
///
/// assert_eq!(
///     extendable::duplicate::<VecKind, _>(vec![1, 2]),
///     vec![vec![1, 2], vec![2]]
/// );
/// ```
pub fn duplicate<W, A>(wa: W::WithType<A>) -> W::WithType<W::WithType<A>>
where
    W: Extendable,
    A: Clone + 'static,
    W::WithType<A>: 'static,
{
    W::extend::<A, W::WithType<A>, _>(wa, |context: W::WithType<A>| context)
}
