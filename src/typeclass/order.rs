//! Order type class - a total ordering, as a value.
//!
//! An `Order<A>` wraps a three-way comparison returning
//! [`std::cmp::Ordering`] (`Less`, `Equal`, `Greater`). Unlike [`Ord`], an
//! order is a value: a type can have several, and new orders are derived
//! from existing ones with [`Order::contramap`], [`Order::reverse`], tuple and
//! struct products, or lexicographic combination through
//! [`Order::semigroup`].
//!
//! # Laws
//!
//! For all `a`, `b`, `c`:
//!
//! - **Antisymmetry**: `compare(a, b) == compare(b, a).reverse()`
//! - **Transitivity**: `compare(a, b) != Greater && compare(b, c) != Greater`
//!   implies `compare(a, c) != Greater`
//! - **Totality**: exactly one of `Less`, `Equal`, `Greater` holds
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{NonEmptyTuple, Order};
//! use std::cmp::Ordering;
//!
//! let order = (Order::<String>::string(), Order::<i32>::number(), Order::<bool>::boolean()).tuple();
//! assert_eq!(
//!     order.compare(&("a".to_string(), 1, true), &("b".to_string(), 2, true)),
//!     Ordering::Less
//! );
//! assert_eq!(Order::number().clamp(20, 1, 10), 10);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use super::contravariant::{self, Contravariant};
use super::invariant::Invariant;
use super::kind::{Kind, TypeConstructor};
use super::monoid::Monoid;
use super::of::Of;
use super::product::Product;
use super::semi_product::SemiProduct;
use super::semigroup::Semigroup;

type CompareFunction<A> = Rc<dyn Fn(&A, &A) -> Ordering>;

/// A total order for `A`.
pub struct Order<A> {
    compare: CompareFunction<A>,
}

impl<A> Clone for Order<A> {
    fn clone(&self) -> Self {
        Self {
            compare: Rc::clone(&self.compare),
        }
    }
}

impl<A> fmt::Debug for Order<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Order").finish_non_exhaustive()
    }
}

impl<A> Order<A> {
    /// Compares `left` with `right`.
    #[inline]
    pub fn compare(&self, left: &A, right: &A) -> Ordering {
        (self.compare)(left, right)
    }

    /// Tests whether `left` is strictly less than `right`.
    pub fn less_than(&self, left: &A, right: &A) -> bool {
        self.compare(left, right) == Ordering::Less
    }

    /// Tests whether `left` is less than or equal to `right`.
    pub fn less_than_or_equal_to(&self, left: &A, right: &A) -> bool {
        self.compare(left, right) != Ordering::Greater
    }

    /// Tests whether `left` is strictly greater than `right`.
    pub fn greater_than(&self, left: &A, right: &A) -> bool {
        self.compare(left, right) == Ordering::Greater
    }

    /// Tests whether `left` is greater than or equal to `right`.
    pub fn greater_than_or_equal_to(&self, left: &A, right: &A) -> bool {
        self.compare(left, right) != Ordering::Less
    }

    /// Returns the smaller operand. Ties keep `left`.
    pub fn min(&self, left: A, right: A) -> A {
        if self.compare(&left, &right) == Ordering::Greater {
            right
        } else {
            left
        }
    }

    /// Returns the larger operand. Ties keep `left`.
    pub fn max(&self, left: A, right: A) -> A {
        if self.compare(&left, &right) == Ordering::Less {
            right
        } else {
            left
        }
    }

    /// Restricts `value` to the closed range `minimum..=maximum`.
    ///
    /// Computed as `min(maximum, max(minimum, value))`, so a range with
    /// `minimum > maximum` yields `maximum`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Order;
    ///
    /// let order = Order::number();
    /// assert_eq!(order.clamp(20, 1, 10), 10);
    /// assert_eq!(order.clamp(-10, 1, 10), 1);
    /// assert_eq!(order.clamp(5, 1, 10), 5);
    /// ```
    pub fn clamp(&self, value: A, minimum: A, maximum: A) -> A {
        self.min(maximum, self.max(minimum, value))
    }

    /// Tests whether `value` lies in the closed range `minimum..=maximum`.
    pub fn between(&self, value: &A, minimum: &A, maximum: &A) -> bool {
        !self.less_than(value, minimum) && !self.greater_than(value, maximum)
    }
}

impl<A: 'static> Order<A> {
    /// Builds an order from a comparison function.
    pub fn make<Compare>(compare: Compare) -> Self
    where
        Compare: Fn(&A, &A) -> Ordering + 'static,
    {
        Self {
            compare: Rc::new(compare),
        }
    }

    /// Compares values through the projection `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Order;
    /// use std::cmp::Ordering;
    ///
    /// let by_length = Order::number().contramap(|text: &&str| text.len());
    /// assert_eq!(by_length.compare(&"abc", &"z"), Ordering::Greater);
    /// ```
    pub fn contramap<B, Function>(&self, function: Function) -> Order<B>
    where
        B: 'static,
        Function: Fn(&B) -> A + 'static,
    {
        let inner = self.clone();
        Order::make(move |left: &B, right: &B| inner.compare(&function(left), &function(right)))
    }

    /// Swaps the arguments of `compare`.
    pub fn reverse(&self) -> Self {
        let inner = self.clone();
        Self::make(move |left, right| inner.compare(right, left))
    }

    /// Lexicographic order over vectors.
    ///
    /// Elements are compared pairwise; when one vector is a prefix of the
    /// other, the shorter one sorts first.
    pub fn array(&self) -> Order<Vec<A>> {
        let inner = self.clone();
        Order::make(move |left: &Vec<A>, right: &Vec<A>| {
            left.iter()
                .zip(right)
                .map(|(left, right)| inner.compare(left, right))
                .find(|ordering| *ordering != Ordering::Equal)
                .unwrap_or_else(|| left.len().cmp(&right.len()))
        })
    }

    /// Combines orders lexicographically.
    ///
    /// The left order decides; the right order only breaks its ties.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Order;
    ///
    /// #[derive(Debug, Clone, PartialEq)]
    /// struct User { name: &'static str, age: u32 }
    ///
    /// let by_age = Order::number().contramap(|user: &User| user.age);
    /// let by_name = Order::string().contramap(|user: &User| user.name);
    /// let order = Order::semigroup().combine(by_age, by_name);
    ///
    /// let mut users = vec![
    ///     User { name: "b", age: 30 },
    ///     User { name: "a", age: 30 },
    ///     User { name: "c", age: 20 },
    /// ];
    /// users.sort_by(|left, right| order.compare(left, right));
    /// assert_eq!(users.iter().map(|user| user.name).collect::<String>(), "cab");
    /// ```
    pub fn semigroup() -> Semigroup<Self> {
        Semigroup::make(
            |first: Self, second: Self| {
                Self::make(move |left, right| {
                    first
                        .compare(left, right)
                        .then_with(|| second.compare(left, right))
                })
            },
            |start, collection| {
                let orders: Vec<Self> = std::iter::once(start).chain(collection).collect();
                Self::make(move |left, right| {
                    orders
                        .iter()
                        .map(|order| order.compare(left, right))
                        .find(|ordering| *ordering != Ordering::Equal)
                        .unwrap_or(Ordering::Equal)
                })
            },
        )
    }

    /// Lexicographic combination with the order that considers every pair
    /// equal as identity.
    pub fn monoid() -> Monoid<Self> {
        Monoid::from_semigroup(Self::semigroup(), Self::make(|_, _| Ordering::Equal))
    }
}

// =============================================================================
// Built-in Instances
// =============================================================================

impl<A: Ord + 'static> Order<A> {
    /// The order given by [`Ord`].
    pub fn natural() -> Self {
        Self::make(|left: &A, right: &A| left.cmp(right))
    }
}

impl<A: AsRef<str> + 'static> Order<A> {
    /// Lexicographic order on strings.
    ///
    /// Only string-like types qualify:
    ///
    /// ```compile_fail,E0599
    /// use kindred::typeclass::Order;
    ///
    /// let _ = Order::<i32>::string();
    /// ```
    pub fn string() -> Self {
        Self::make(|left: &A, right: &A| left.as_ref().cmp(right.as_ref()))
    }
}

impl Order<bool> {
    /// `false` before `true`.
    ///
    /// ```compile_fail,E0599
    /// use kindred::typeclass::Order;
    ///
    /// let _ = Order::<u8>::boolean();
    /// ```
    pub fn boolean() -> Self {
        Self::natural()
    }
}

impl<A: PartialOrd + 'static> Order<A> {
    /// The order given by [`PartialOrd`], treating incomparable values such
    /// as `NaN` as equal.
    ///
    /// This is not transitive once incomparable values appear:
    /// `1.0 == NaN == 2.0` while `1.0 < 2.0`. Prefer [`Order::number`] for
    /// floats.
    pub fn partial() -> Self {
        Self::make(|left: &A, right: &A| left.partial_cmp(right).unwrap_or(Ordering::Equal))
    }
}

impl<A: TotalNumber + 'static> Order<A> {
    /// Numeric order, integers and floats alike.
    ///
    /// Floats use [`f64::total_cmp`], so `NaN` sorts above positive infinity
    /// and `-0.0` sorts below `0.0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Order;
    /// use std::cmp::Ordering;
    ///
    /// let order = Order::<f64>::number();
    /// assert_eq!(order.compare(&1.0, &2.0), Ordering::Less);
    /// assert_eq!(order.compare(&f64::NAN, &f64::INFINITY), Ordering::Greater);
    /// ```
    pub fn number() -> Self {
        Self::make(|left: &A, right: &A| left.total_compare(right))
    }
}

/// Numeric types with a total comparison, used by [`Order::number`].
pub trait TotalNumber {
    /// Compares `self` with `other`; every pair of values is comparable.
    fn total_compare(&self, other: &Self) -> Ordering;
}

macro_rules! impl_total_number {
    (integer: $($integer:ty),*; float: $($float:ty),*) => {
        $(
            impl TotalNumber for $integer {
                #[inline]
                fn total_compare(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
        $(
            impl TotalNumber for $float {
                #[inline]
                fn total_compare(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }
            }
        )*
    };
}

impl_total_number!(
    integer: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize;
    float: f32, f64
);

// =============================================================================
// Kind Instances
// =============================================================================

/// Marker for the `Order<_>` constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OrderKind;

impl Kind for OrderKind {
    type WithType<A> = Order<A>;
}

impl<A> TypeConstructor for Order<A> {
    type Kind = OrderKind;
    type Inner = A;

    #[inline]
    fn into_kind(self) -> Self {
        self
    }
}

impl Contravariant for OrderKind {
    fn contramap<A, B, Function>(fa: Order<A>, function: Function) -> Order<B>
    where
        A: 'static,
        B: 'static,
        Function: Fn(&B) -> A + 'static,
    {
        fa.contramap(function)
    }
}

impl Invariant for OrderKind {
    fn imap<A, B, Forward, Backward>(fa: Order<A>, to: Forward, from: Backward) -> Order<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        Forward: Fn(A) -> B + 'static,
        Backward: Fn(B) -> A + 'static,
    {
        contravariant::imap::<Self, A, B, Forward, Backward>(fa, to, from)
    }
}

impl SemiProduct for OrderKind {
    fn product<A, B>(fa: Order<A>, fb: Order<B>) -> Order<(A, B)>
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        Order::make(move |left: &(A, B), right: &(A, B)| {
            fa.compare(&left.0, &right.0)
                .then_with(|| fb.compare(&left.1, &right.1))
        })
    }

    fn product_many<A, I>(head: Order<A>, collection: I) -> Order<Vec<A>>
    where
        A: Clone + 'static,
        I: IntoIterator<Item = Order<A>>,
    {
        positional(std::iter::once(head).chain(collection).collect())
    }
}

impl Of for OrderKind {
    fn of<A: Clone + 'static>(_value: A) -> Order<A> {
        Order::make(|_, _| Ordering::Equal)
    }
}

impl Product for OrderKind {
    fn product_all<A, I>(collection: I) -> Order<Vec<A>>
    where
        A: Clone + 'static,
        I: IntoIterator<Item = Order<A>>,
    {
        positional(collection.into_iter().collect())
    }
}

/// Compares vectors position by position with the matching order, stopping
/// at the first non-equal position or at the end of the shortest input.
fn positional<A: 'static>(orders: Vec<Order<A>>) -> Order<Vec<A>> {
    Order::make(move |left: &Vec<A>, right: &Vec<A>| {
        orders
            .iter()
            .zip(left.iter().zip(right))
            .map(|(order, (left, right))| order.compare(left, right))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    })
}

static_assertions::assert_not_impl_any!(Order<i32>: Send, Sync);
static_assertions::assert_impl_all!(OrderKind: Copy, Send, Sync);

// =============================================================================
// Tests
// =============================================================================
