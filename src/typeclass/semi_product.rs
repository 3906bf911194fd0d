//! SemiProduct type class - pairing two values of one kind.
//!
//! `product(fa, fb)` builds an `F<(A, B)>` out of an `F<A>` and an `F<B>`.
//! For dictionaries this is how instances for compound types are assembled
//! from instances for their parts: the product of a string semigroup and a
//! sum semigroup combines `(String, i32)` pairs componentwise.
//!
//! Tuples and structs are assembled on top of `product` by
//! [`NonEmptyTuple`](super::NonEmptyTuple) and
//! [`product_struct!`](crate::product_struct).
//!
//! # Laws
//!
//! ## Associativity
//!
//! Up to the isomorphism `((a, b), c) <-> (a, (b, c))`:
//!
//! ```text
//! product(product(fa, fb), fc) ~ product(fa, product(fb, fc))
//! ```

use super::covariant::Covariant;
use super::invariant::Invariant;
use super::tuple::Append;

/// A kind whose values can be paired.
pub trait SemiProduct: Invariant {
    /// Pairs `fa` with `fb`.
    fn product<A, B>(fa: Self::WithType<A>, fb: Self::WithType<B>) -> Self::WithType<(A, B)>
    where
        A: Clone + 'static,
        B: Clone + 'static;

    /// Combines `head` and every element of `collection` into one value over
    /// vectors, the `i`-th element belonging to the `i`-th input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::instances::OptionKind;
    /// use kindred::typeclass::SemiProduct;
    ///
    /// assert_eq!(OptionKind::product_many(Some(1), [Some(2), Some(3)]), Some(vec![1, 2, 3]));
    /// assert_eq!(OptionKind::product_many(Some(1), [None, Some(3)]), None);
    /// ```
    fn product_many<A, I>(head: Self::WithType<A>, collection: I) -> Self::WithType<Vec<A>>
    where
        A: Clone + 'static,
        I: IntoIterator<Item = Self::WithType<A>>;
}

/// Pairs two semi-product kinds nested inside a covariant kind.
///
/// The outer kind is paired first; its paired contents are then paired
/// again with `G::product`.
///
/// # Examples
///
/// ```rust
/// use kindred::instances::OptionKind;
/// use kindred::typeclass::{Semigroup, SemigroupKind, semi_product};
///
/// let paired = semi_product::product_composition::<OptionKind, SemigroupKind, _, _>(
///     Some(Semigroup::string()),
///     Some(Semigroup::sum()),
/// );
/// let semigroup = paired.expect("both inputs are Some");
/// assert_eq!(semigroup.combine(("a".into(), 1), ("b".into(), 2)), ("ab".to_string(), 3));
/// ```
pub fn product_composition<F, G, A, B>(
    fga: F::WithType<G::WithType<A>>,
    fgb: F::WithType<G::WithType<B>>,
) -> F::WithType<G::WithType<(A, B)>>
where
    F: SemiProduct + Covariant,
    G: SemiProduct,
    A: Clone + 'static,
    B: Clone + 'static,
    G::WithType<A>: Clone + 'static,
    G::WithType<B>: Clone + 'static,
    G::WithType<(A, B)>: 'static,
{
    let paired = F::product::<G::WithType<A>, G::WithType<B>>(fga, fgb);
    F::map::<(G::WithType<A>, G::WithType<B>), G::WithType<(A, B)>, _>(
        paired,
        |(ga, gb): (G::WithType<A>, G::WithType<B>)| G::product::<A, B>(ga, gb),
    )
}

/// Extends a positional record by one field.
///
/// `fs` is an instance for a tuple `S` built so far (starting from `()`,
/// see [`unit`](super::of::unit)); the result is an instance for `S` with
/// `B` appended on the right. Records grow up to six fields.
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::{Semigroup, SemigroupKind, of::unit, semi_product::and_then_bind};
///
/// let record = and_then_bind::<SemigroupKind, _, _>(unit::<SemigroupKind>(), Semigroup::string());
/// let record = and_then_bind::<SemigroupKind, _, _>(record, Semigroup::<i32>::sum());
///
/// assert_eq!(
///     record.combine(("a".to_string(), 1), ("b".to_string(), 2)),
///     ("ab".to_string(), 3)
/// );
/// ```
pub fn and_then_bind<F, S, B>(
    fs: F::WithType<S>,
    fb: F::WithType<B>,
) -> F::WithType<<S as Append<B>>::Output>
where
    F: SemiProduct,
    S: Append<B> + Clone + 'static,
    B: Clone + 'static,
    <S as Append<B>>::Output: Clone + 'static,
{
    F::imap::<(S, B), <S as Append<B>>::Output, _, _>(
        F::product::<S, B>(fs, fb),
        |(record, field): (S, B)| record.append(field),
        <S as Append<B>>::split,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instances::{OptionKind, VecKind};
    use crate::typeclass::of::unit;
    use crate::typeclass::{Monoid, MonoidKind, Order, OrderKind, Semigroup, SemigroupKind};
    use rstest::rstest;
    use std::cmp::Ordering;

    #[rstest]
    fn and_then_bind_builds_semigroup_record() {
        let record = and_then_bind::<SemigroupKind, _, _>(unit::<SemigroupKind>(), Semigroup::string());
        let record = and_then_bind::<SemigroupKind, _, _>(record, Semigroup::<i32>::sum());
        let record = and_then_bind::<SemigroupKind, _, _>(record, Semigroup::boolean_any());

        assert_eq!(
            record.combine(("x".to_string(), 2, false), ("y".to_string(), 3, true)),
            ("xy".to_string(), 5, true)
        );
    }

    #[rstest]
    fn and_then_bind_builds_order_record() {
        let record = and_then_bind::<OrderKind, _, _>(unit::<OrderKind>(), Order::<i32>::number());
        let record = and_then_bind::<OrderKind, _, _>(record, Order::<bool>::boolean());

        assert_eq!(record.compare(&(1, true), &(1, false)), Ordering::Greater);
        assert_eq!(record.compare(&(0, true), &(1, false)), Ordering::Less);
    }

    #[rstest]
    fn and_then_bind_builds_monoid_record_empty() {
        let record = and_then_bind::<MonoidKind, _, _>(unit::<MonoidKind>(), Monoid::<i32>::sum());
        let record = and_then_bind::<MonoidKind, _, _>(record, Monoid::string());
        assert_eq!(record.empty(), (0, String::new()));
    }

    #[rstest]
    fn and_then_bind_over_option() {
        let record = and_then_bind::<OptionKind, _, _>(unit::<OptionKind>(), Some(1));
        let record = and_then_bind::<OptionKind, _, _>(record, Some("two"));
        assert_eq!(record, Some((1, "two")));

        let missing = and_then_bind::<OptionKind, _, _>(record, None::<bool>);
        assert_eq!(missing, None);
    }

    #[rstest]
    fn product_composition_over_vec_of_options() {
        let paired = product_composition::<VecKind, OptionKind, _, _>(
            vec![Some(1), None],
            vec![Some('a')],
        );
        assert_eq!(paired, vec![Some((1, 'a')), None]);
    }
}
