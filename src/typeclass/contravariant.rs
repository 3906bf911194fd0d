//! Contravariant type class - mapping over the values a kind consumes.
//!
//! An `Order<A>` consumes `A`s: to compare `B`s with it, each `B` has to be
//! projected to an `A` first. [`Contravariant::contramap`] takes that
//! projection. [`imap`] derives the invariant map from it by ignoring the
//! forward function.
//!
//! The projection borrows its input (`Fn(&B) -> A`) because consumers such
//! as orders only ever see their inputs by reference.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! contramap(fa, |a| a.clone()) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! contramap(contramap(fa, f), g) == contramap(fa, |c| f(&g(c)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Contravariant, Order, OrderKind};
//! use std::cmp::Ordering;
//!
//! let by_length = OrderKind::contramap(Order::number(), |text: &String| text.len());
//! assert_eq!(by_length.compare(&"abc".to_string(), &"de".to_string()), Ordering::Greater);
//! ```

use std::rc::Rc;

use super::covariant::Covariant;
use super::invariant::Invariant;

/// A kind whose values consume their inner type.
pub trait Contravariant: Invariant {
    /// Feeds `fa` with values projected through `function`.
    fn contramap<A, B, Function>(fa: Self::WithType<A>, function: Function) -> Self::WithType<B>
    where
        A: 'static,
        B: 'static,
        Function: Fn(&B) -> A + 'static;
}

/// Derives the invariant map of a contravariant kind.
///
/// `to` is not needed and is dropped.
pub fn imap<F, A, B, Forward, Backward>(
    fa: F::WithType<A>,
    _to: Forward,
    from: Backward,
) -> F::WithType<B>
where
    F: Contravariant,
    A: 'static,
    B: Clone + 'static,
    Backward: Fn(B) -> A + 'static,
{
    F::contramap::<A, B, _>(fa, move |value: &B| from(value.clone()))
}

/// Contramaps a contravariant kind nested inside a covariant one.
///
/// # Examples
///
/// ```rust
/// use kindred::instances::OptionKind;
/// use kindred::typeclass::{Order, OrderKind, contravariant};
/// use std::cmp::Ordering;
///
/// let nested = Some(Order::<i32>::number());
/// let by_negation = contravariant::contramap_composition::<OptionKind, OrderKind, _, _, _>(
///     nested,
///     |value: &i32| -value,
/// );
/// let order = by_negation.expect("Some stays Some");
/// assert_eq!(order.compare(&1, &2), Ordering::Greater);
/// ```
pub fn contramap_composition<F, G, A, B, Function>(
    fga: F::WithType<G::WithType<A>>,
    function: Function,
) -> F::WithType<G::WithType<B>>
where
    F: Covariant,
    G: Contravariant,
    A: 'static,
    B: 'static,
    G::WithType<A>: 'static,
    G::WithType<B>: 'static,
    Function: Fn(&B) -> A + 'static,
{
    let function = Rc::new(function);
    F::map::<G::WithType<A>, G::WithType<B>, _>(fga, move |ga: G::WithType<A>| {
        let function = Rc::clone(&function);
        G::contramap::<A, B, _>(ga, move |value: &B| function(value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instances::VecKind;
    use crate::typeclass::{Order, OrderKind};
    use rstest::rstest;
    use std::cmp::Ordering;

    #[rstest]
    #[case("apple", "fig", Ordering::Greater)]
    #[case("kiwi", "pear", Ordering::Equal)]
    #[case("", "a", Ordering::Less)]
    fn contramap_compares_lengths(
        #[case] left: &'static str,
        #[case] right: &'static str,
        #[case] expected: Ordering,
    ) {
        let order = OrderKind::contramap(Order::number(), |text: &&str| text.len());
        assert_eq!(order.compare(&left, &right), expected);
    }

    #[rstest]
    fn imap_discards_forward_function() {
        let order = imap::<OrderKind, _, _, _, _>(
            Order::<i32>::number(),
            |_: i32| -> String { unreachable!("forward function is never called") },
            |text: String| text.parse::<i32>().unwrap_or_default(),
        );
        assert_eq!(order.compare(&"10".to_string(), &"9".to_string()), Ordering::Greater);
    }

    #[rstest]
    fn contramap_composition_over_vec() {
        let orders = vec![Order::<i32>::number(), Order::<i32>::number().reverse()];
        let mapped = contramap_composition::<VecKind, OrderKind, _, _, _>(orders, |pair: &(i32, i32)| {
            pair.0 + pair.1
        });
        assert_eq!(mapped[0].compare(&(1, 1), &(0, 5)), Ordering::Less);
        assert_eq!(mapped[1].compare(&(1, 1), &(0, 5)), Ordering::Greater);
    }
}
