//! Semigroup type class - an associative binary operation, as a value.
//!
//! A semigroup for `A` is a record holding a `combine` function and a
//! `combine_many` function. Because instances are ordinary values, one type
//! can have many of them (`i32` under addition, under multiplication, under
//! `min`, ...), and instances can be transformed and composed by plain
//! functions such as [`Semigroup::reverse`] or [`Semigroup::imap`].
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `A`:
//!
//! ## Associativity
//!
//! ```text
//! combine(combine(a, b), c) == combine(a, combine(b, c))
//! ```
//!
//! ## Folding
//!
//! ```text
//! combine_many(start, [x1, .., xn]) == combine(..combine(combine(start, x1), x2).., xn)
//! ```
//!
//! Neither law is checked at runtime. An instance built from a
//! non-associative function produces law-violating results without failing.
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::Semigroup;
//!
//! let string = Semigroup::string();
//! assert_eq!(string.combine("Hello, ".to_string(), "World!".to_string()), "Hello, World!");
//!
//! let reversed = string.reverse();
//! let strings = ["b", "c", "d"].map(String::from);
//! assert_eq!(reversed.combine_many("a".to_string(), strings), "dcba");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul};
use std::rc::Rc;

use super::invariant::Invariant;
use super::kind::{Kind, TypeConstructor};
use super::of::Of;
use super::order::Order;
use super::product::Product;
use super::semi_product::SemiProduct;

type CombineFunction<A> = Rc<dyn Fn(A, A) -> A>;
type CombineManyFunction<A> = Rc<dyn Fn(A, &mut dyn Iterator<Item = A>) -> A>;

/// A semigroup instance for `A`.
///
/// Cloning an instance is cheap: both operations are reference counted.
pub struct Semigroup<A> {
    combine: CombineFunction<A>,
    combine_many: CombineManyFunction<A>,
}

impl<A> Clone for Semigroup<A> {
    fn clone(&self) -> Self {
        Self {
            combine: Rc::clone(&self.combine),
            combine_many: Rc::clone(&self.combine_many),
        }
    }
}

impl<A> fmt::Debug for Semigroup<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Semigroup").finish_non_exhaustive()
    }
}

impl<A> Semigroup<A> {
    /// Combines two values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Semigroup;
    ///
    /// assert_eq!(Semigroup::sum().combine(3, 5), 8);
    /// ```
    #[inline]
    pub fn combine(&self, left: A, right: A) -> A {
        (self.combine)(left, right)
    }

    /// Folds `collection` into `start`, left to right.
    ///
    /// Returns `start` unchanged when `collection` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Semigroup;
    ///
    /// assert_eq!(Semigroup::sum().combine_many(1, [2, 3, 4]), 10);
    /// assert_eq!(Semigroup::sum().combine_many(1, []), 1);
    /// ```
    pub fn combine_many<I>(&self, start: A, collection: I) -> A
    where
        I: IntoIterator<Item = A>,
    {
        (self.combine_many)(start, &mut collection.into_iter())
    }

    /// Folds a non-empty collection, using its first element as the start.
    ///
    /// Returns `None` when the collection is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Semigroup;
    ///
    /// assert_eq!(Semigroup::sum().reduce_all([1, 2, 3]), Some(6));
    /// assert_eq!(Semigroup::<i32>::sum().reduce_all([]), None);
    /// ```
    pub fn reduce_all<I>(&self, collection: I) -> Option<A>
    where
        I: IntoIterator<Item = A>,
    {
        let mut iterator = collection.into_iter();
        let head = iterator.next()?;
        Some((self.combine_many)(head, &mut iterator))
    }
}

impl<A: 'static> Semigroup<A> {
    /// Builds an instance from both operations.
    ///
    /// The caller is responsible for `combine_many` agreeing with a left
    /// fold of `combine`. Use [`Semigroup::from_combine`] when there is no
    /// faster way to combine many values at once.
    pub fn make<Combine, CombineMany>(combine: Combine, combine_many: CombineMany) -> Self
    where
        Combine: Fn(A, A) -> A + 'static,
        CombineMany: Fn(A, &mut dyn Iterator<Item = A>) -> A + 'static,
    {
        Self {
            combine: Rc::new(combine),
            combine_many: Rc::new(combine_many),
        }
    }

    /// Builds an instance from `combine`, deriving `combine_many` as a left
    /// fold seeded by the start value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Semigroup;
    ///
    /// let joined = Semigroup::from_combine(|left: String, right: String| format!("{left}-{right}"));
    /// assert_eq!(joined.combine_many("a".into(), ["b".into(), "c".into()]), "a-b-c");
    /// ```
    pub fn from_combine<Combine>(combine: Combine) -> Self
    where
        Combine: Fn(A, A) -> A + 'static,
    {
        let combine = Rc::new(combine);
        let folding = Rc::clone(&combine);
        Self {
            combine,
            combine_many: Rc::new(move |start, collection| {
                collection.fold(start, |accumulator, element| folding(accumulator, element))
            }),
        }
    }

    /// Keeps the smaller operand according to `order`.
    ///
    /// The left operand is kept only when it is strictly less; on a tie the
    /// right operand wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::{Order, Semigroup};
    ///
    /// let min = Semigroup::min(Order::number());
    /// assert_eq!(min.combine_many(1, [3, 2]), 1);
    /// ```
    pub fn min(order: Order<A>) -> Self {
        Self::from_combine(move |left, right| {
            if order.compare(&left, &right) == Ordering::Less {
                left
            } else {
                right
            }
        })
    }

    /// Keeps the larger operand according to `order`.
    ///
    /// The left operand is kept only when it is strictly greater; on a tie
    /// the right operand wins.
    pub fn max(order: Order<A>) -> Self {
        Self::from_combine(move |left, right| {
            if order.compare(&left, &right) == Ordering::Greater {
                left
            } else {
                right
            }
        })
    }

    /// Ignores both operands and always yields `value`.
    ///
    /// `combine_many` still returns its start value when the collection is
    /// empty, as a left fold would.
    pub fn constant(value: A) -> Self
    where
        A: Clone,
    {
        Self::from_combine(move |_, _| value.clone())
    }

    /// Keeps the left operand.
    ///
    /// `combine_many` returns its start value.
    pub fn first() -> Self {
        Self::make(|left, _| left, |start, _| start)
    }

    /// Keeps the right operand.
    ///
    /// `combine_many` returns the final element of the collection, or the
    /// start value when the collection is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Semigroup;
    ///
    /// let last = Semigroup::last();
    /// assert_eq!(last.combine_many(1, [2, 3]), 3);
    /// assert_eq!(last.combine_many(1, []), 1);
    /// ```
    pub fn last() -> Self {
        Self::make(|_, right| right, |start, collection| collection.last().unwrap_or(start))
    }

    /// Flips the argument order of `combine`.
    ///
    /// `combine_many` walks the collection back to front so that it still
    /// agrees with a left fold of the flipped operation:
    /// `(xn ⊕ .. ⊕ x1) ⊕ start`.
    pub fn reverse(&self) -> Self {
        let flipped = self.clone();
        let inner = self.clone();
        Self::make(
            move |left, right| flipped.combine(right, left),
            move |start, collection| {
                let mut reversed: Vec<A> = collection.collect();
                reversed.reverse();
                let mut remaining = reversed.into_iter();
                match remaining.next() {
                    Some(head) => inner.combine(inner.combine_many(head, remaining), start),
                    None => start,
                }
            },
        )
    }

    /// Places `separator` between every pair of combined values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Semigroup;
    ///
    /// let csv = Semigroup::string().intercalate(", ".to_string());
    /// assert_eq!(csv.combine_many("a".into(), ["b".into(), "c".into()]), "a, b, c");
    /// ```
    pub fn intercalate(&self, separator: A) -> Self
    where
        A: Clone,
    {
        let inner = self.clone();
        Self::from_combine(move |left, right| inner.combine_many(left, [separator.clone(), right]))
    }

    /// Transports this semigroup across the isomorphism `to` / `from`.
    ///
    /// Operands are mapped through `from`, combined, and the result is mapped
    /// back through `to`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Semigroup;
    ///
    /// #[derive(Debug, Clone, PartialEq)]
    /// struct Meters(i32);
    ///
    /// let meters = Semigroup::sum().imap(Meters, |Meters(value)| value);
    /// assert_eq!(meters.combine(Meters(2), Meters(3)), Meters(5));
    /// ```
    pub fn imap<B, Forward, Backward>(&self, to: Forward, from: Backward) -> Semigroup<B>
    where
        B: 'static,
        Forward: Fn(A) -> B + 'static,
        Backward: Fn(B) -> A + 'static,
    {
        let to = Rc::new(to);
        let from = Rc::new(from);
        let (combine_to, combine_from) = (Rc::clone(&to), Rc::clone(&from));
        let inner = self.clone();
        let many_inner = self.clone();
        Semigroup::make(
            move |left, right| combine_to(inner.combine(combine_from(left), combine_from(right))),
            move |start, collection| {
                let mapped = collection.map(|element| from(element));
                to(many_inner.combine_many(from(start), mapped))
            },
        )
    }
}

// =============================================================================
// Built-in Instances
// =============================================================================

impl Semigroup<String> {
    /// String concatenation.
    pub fn string() -> Self {
        Self::make(
            |mut left, right| {
                left.push_str(&right);
                left
            },
            |mut start, collection| {
                for element in collection {
                    start.push_str(&element);
                }
                start
            },
        )
    }
}

impl Semigroup<bool> {
    /// Logical conjunction.
    pub fn boolean_all() -> Self {
        Self::from_combine(|left, right| left && right)
    }

    /// Logical disjunction.
    pub fn boolean_any() -> Self {
        Self::from_combine(|left, right| left || right)
    }
}

impl<A: Add<Output = A> + 'static> Semigroup<A> {
    /// Addition.
    pub fn sum() -> Self {
        Self::from_combine(|left, right| left + right)
    }
}

impl<A: Mul<Output = A> + 'static> Semigroup<A> {
    /// Multiplication.
    pub fn multiply() -> Self {
        Self::from_combine(|left, right| left * right)
    }
}

impl<T: 'static> Semigroup<Vec<T>> {
    /// Vector concatenation.
    pub fn array() -> Self {
        Self::make(
            |mut left, mut right| {
                left.append(&mut right);
                left
            },
            |mut start, collection| {
                for mut element in collection {
                    start.append(&mut element);
                }
                start
            },
        )
    }
}

// =============================================================================
// Kind Instances
// =============================================================================

/// Marker for the `Semigroup<_>` constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SemigroupKind;

impl Kind for SemigroupKind {
    type WithType<A> = Semigroup<A>;
}

impl<A> TypeConstructor for Semigroup<A> {
    type Kind = SemigroupKind;
    type Inner = A;

    #[inline]
    fn into_kind(self) -> Self {
        self
    }
}

impl Invariant for SemigroupKind {
    fn imap<A, B, Forward, Backward>(fa: Semigroup<A>, to: Forward, from: Backward) -> Semigroup<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        Forward: Fn(A) -> B + 'static,
        Backward: Fn(B) -> A + 'static,
    {
        fa.imap(to, from)
    }
}

impl SemiProduct for SemigroupKind {
    fn product<A, B>(fa: Semigroup<A>, fb: Semigroup<B>) -> Semigroup<(A, B)>
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        Semigroup::<(A, B)>::from_combine(move |(left_a, left_b), (right_a, right_b)| {
            (fa.combine(left_a, right_a), fb.combine(left_b, right_b))
        })
    }

    fn product_many<A, I>(head: Semigroup<A>, collection: I) -> Semigroup<Vec<A>>
    where
        A: Clone + 'static,
        I: IntoIterator<Item = Semigroup<A>>,
    {
        positional(std::iter::once(head).chain(collection).collect())
    }
}

impl Of for SemigroupKind {
    fn of<A: Clone + 'static>(value: A) -> Semigroup<A> {
        Semigroup::constant(value)
    }
}

impl Product for SemigroupKind {
    fn product_all<A, I>(collection: I) -> Semigroup<Vec<A>>
    where
        A: Clone + 'static,
        I: IntoIterator<Item = Semigroup<A>>,
    {
        positional(collection.into_iter().collect())
    }
}

/// Combines vectors position by position, the `i`-th element with the
/// `i`-th semigroup.
///
/// Both operands must have exactly one element per semigroup.
pub(crate) fn positional<A: 'static>(semigroups: Vec<Semigroup<A>>) -> Semigroup<Vec<A>> {
    Semigroup::<Vec<A>>::from_combine(move |left, right| {
        debug_assert!(
            left.len() == semigroups.len() && right.len() == semigroups.len(),
            "positional semigroup expects {} elements per operand, got {} and {}",
            semigroups.len(),
            left.len(),
            right.len()
        );
        semigroups
            .iter()
            .zip(left.into_iter().zip(right))
            .map(|(semigroup, (left, right))| semigroup.combine(left, right))
            .collect()
    })
}

static_assertions::assert_not_impl_any!(Semigroup<i32>: Send, Sync);
static_assertions::assert_impl_all!(SemigroupKind: Copy, Send, Sync);

// =============================================================================
// Tests
// =============================================================================


// =============================================================================
// Property-Based Tests
// =============================================================================
