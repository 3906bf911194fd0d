//! Monoid type class - a semigroup with an identity element.
//!
//! A `Monoid<A>` pairs a [`Semigroup<A>`] with an `empty` value that is
//! neutral for `combine`. The identity makes folding total: combining an
//! empty collection yields `empty` instead of needing a start value.
//!
//! # Laws
//!
//! In addition to the semigroup laws, for all `a`:
//!
//! ## Left Identity
//!
//! ```text
//! combine(empty, a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! combine(a, empty) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::Monoid;
//!
//! let sum = Monoid::sum();
//! assert_eq!(sum.combine_all([1, 2, 3]), 6);
//! assert_eq!(sum.combine_all([]), 0);
//!
//! let string = Monoid::string();
//! assert_eq!(string.combine_all(["a".to_string(), "b".to_string()]), "ab");
//! ```

use std::fmt;
use std::ops::{Add, Mul};

use super::bounded::Bounded;
use super::invariant::Invariant;
use super::kind::{Kind, TypeConstructor};
use super::of::Of;
use super::product::Product;
use super::semi_product::SemiProduct;
use super::semigroup::{self, Semigroup, SemigroupKind};

/// A monoid instance for `A`.
pub struct Monoid<A> {
    semigroup: Semigroup<A>,
    empty: A,
}

impl<A: Clone> Clone for Monoid<A> {
    fn clone(&self) -> Self {
        Self {
            semigroup: self.semigroup.clone(),
            empty: self.empty.clone(),
        }
    }
}

impl<A: fmt::Debug> fmt::Debug for Monoid<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Monoid")
            .field("empty", &self.empty)
            .finish_non_exhaustive()
    }
}

impl<A> Monoid<A> {
    /// Pairs `semigroup` with its identity element.
    ///
    /// `empty` must be neutral for `semigroup`; this is not checked.
    pub const fn from_semigroup(semigroup: Semigroup<A>, empty: A) -> Self {
        Self { semigroup, empty }
    }

    /// The underlying semigroup.
    pub const fn semigroup(&self) -> &Semigroup<A> {
        &self.semigroup
    }

    /// Combines two values.
    #[inline]
    pub fn combine(&self, left: A, right: A) -> A {
        self.semigroup.combine(left, right)
    }

    /// Folds `collection` into `start`, left to right.
    pub fn combine_many<I>(&self, start: A, collection: I) -> A
    where
        I: IntoIterator<Item = A>,
    {
        self.semigroup.combine_many(start, collection)
    }

    /// Consumes the monoid and returns its parts.
    pub fn into_parts(self) -> (Semigroup<A>, A) {
        (self.semigroup, self.empty)
    }
}

impl<A: Clone> Monoid<A> {
    /// The identity element.
    pub fn empty(&self) -> A {
        self.empty.clone()
    }

    /// Folds `collection` starting from the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Monoid;
    ///
    /// assert_eq!(Monoid::multiply().combine_all([2, 3, 4]), 24);
    /// assert_eq!(Monoid::<i32>::multiply().combine_all([]), 1);
    /// ```
    pub fn combine_all<I>(&self, collection: I) -> A
    where
        I: IntoIterator<Item = A>,
    {
        self.semigroup.combine_many(self.empty(), collection)
    }
}

impl<A: Clone + 'static> Monoid<A> {
    /// Flips the argument order of `combine`, keeping the same identity.
    pub fn reverse(&self) -> Self {
        Self::from_semigroup(self.semigroup.reverse(), self.empty())
    }

    /// Keeps the smaller operand; the identity is the upper bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::{Bounded, Monoid};
    ///
    /// let min = Monoid::min(Bounded::<u8>::natural());
    /// assert_eq!(min.combine_all([7, 3, 9]), 3);
    /// assert_eq!(min.combine_all([]), u8::MAX);
    /// ```
    pub fn min(bounded: Bounded<A>) -> Self {
        Self::from_semigroup(Semigroup::min(bounded.order().clone()), bounded.max_bound())
    }

    /// Keeps the larger operand; the identity is the lower bound.
    pub fn max(bounded: Bounded<A>) -> Self {
        Self::from_semigroup(Semigroup::max(bounded.order().clone()), bounded.min_bound())
    }

    /// Transports this monoid across the isomorphism `to` / `from`.
    pub fn imap<B, Forward, Backward>(&self, to: Forward, from: Backward) -> Monoid<B>
    where
        B: 'static,
        Forward: Fn(A) -> B + 'static,
        Backward: Fn(B) -> A + 'static,
    {
        let empty = to(self.empty());
        Monoid::from_semigroup(self.semigroup.imap(to, from), empty)
    }
}

// =============================================================================
// Built-in Instances
// =============================================================================

impl Monoid<String> {
    /// String concatenation with `""` as identity.
    pub fn string() -> Self {
        Self::from_semigroup(Semigroup::string(), String::new())
    }
}

impl Monoid<bool> {
    /// Logical conjunction with `true` as identity.
    pub fn boolean_all() -> Self {
        Self::from_semigroup(Semigroup::boolean_all(), true)
    }

    /// Logical disjunction with `false` as identity.
    pub fn boolean_any() -> Self {
        Self::from_semigroup(Semigroup::boolean_any(), false)
    }
}

impl<A: Add<Output = A> + Default + 'static> Monoid<A> {
    /// Addition with `A::default()` as identity.
    pub fn sum() -> Self {
        Self::from_semigroup(Semigroup::sum(), A::default())
    }
}

impl<A: Mul<Output = A> + From<u8> + 'static> Monoid<A> {
    /// Multiplication with one as identity.
    pub fn multiply() -> Self {
        Self::from_semigroup(Semigroup::multiply(), A::from(1))
    }
}

impl<T: 'static> Monoid<Vec<T>> {
    /// Vector concatenation with `vec![]` as identity.
    pub fn array() -> Self {
        Self::from_semigroup(Semigroup::array(), Vec::new())
    }
}

// =============================================================================
// Kind Instances
// =============================================================================

/// Marker for the `Monoid<_>` constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MonoidKind;

impl Kind for MonoidKind {
    type WithType<A> = Monoid<A>;
}

impl<A> TypeConstructor for Monoid<A> {
    type Kind = MonoidKind;
    type Inner = A;

    #[inline]
    fn into_kind(self) -> Self {
        self
    }
}

impl Invariant for MonoidKind {
    fn imap<A, B, Forward, Backward>(fa: Monoid<A>, to: Forward, from: Backward) -> Monoid<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        Forward: Fn(A) -> B + 'static,
        Backward: Fn(B) -> A + 'static,
    {
        fa.imap(to, from)
    }
}

impl SemiProduct for MonoidKind {
    fn product<A, B>(fa: Monoid<A>, fb: Monoid<B>) -> Monoid<(A, B)>
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        let (semigroup_a, empty_a) = fa.into_parts();
        let (semigroup_b, empty_b) = fb.into_parts();
        Monoid::from_semigroup(
            SemigroupKind::product(semigroup_a, semigroup_b),
            (empty_a, empty_b),
        )
    }

    fn product_many<A, I>(head: Monoid<A>, collection: I) -> Monoid<Vec<A>>
    where
        A: Clone + 'static,
        I: IntoIterator<Item = Monoid<A>>,
    {
        Self::product_all(std::iter::once(head).chain(collection))
    }
}

impl Of for MonoidKind {
    fn of<A: Clone + 'static>(value: A) -> Monoid<A> {
        Monoid::from_semigroup(Semigroup::constant(value.clone()), value)
    }
}

impl Product for MonoidKind {
    fn product_all<A, I>(collection: I) -> Monoid<Vec<A>>
    where
        A: Clone + 'static,
        I: IntoIterator<Item = Monoid<A>>,
    {
        let (semigroups, empty): (Vec<_>, Vec<_>) =
            collection.into_iter().map(Monoid::into_parts).unzip();
        Monoid::from_semigroup(semigroup::positional(semigroups), empty)
    }
}

static_assertions::assert_impl_all!(MonoidKind: Copy, Send, Sync);
