//! Bounded type class - an order with a least and a greatest element.
//!
//! A `Bounded<A>` is an [`Order<A>`] together with its two bounds. It
//! supplies the identity elements of the `min` and `max` monoids: the upper
//! bound is neutral for `min`, the lower bound for `max`.
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Bounded, Order};
//!
//! let percent = Bounded::make(Order::number(), 0, 100);
//! assert_eq!(percent.clamp(130), 100);
//! assert_eq!(percent.clamp(-5), 0);
//! assert_eq!(percent.clamp(42), 42);
//! ```

use std::cmp::Ordering;
use std::fmt;

use super::order::Order;

/// An order together with its bounds.
///
/// `min_bound` must not be greater than `max_bound` under `order`.
pub struct Bounded<A> {
    order: Order<A>,
    max_bound: A,
    min_bound: A,
}

impl<A: Clone> Clone for Bounded<A> {
    fn clone(&self) -> Self {
        Self {
            order: self.order.clone(),
            max_bound: self.max_bound.clone(),
            min_bound: self.min_bound.clone(),
        }
    }
}

impl<A: fmt::Debug> fmt::Debug for Bounded<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Bounded")
            .field("min_bound", &self.min_bound)
            .field("max_bound", &self.max_bound)
            .finish_non_exhaustive()
    }
}

impl<A> Bounded<A> {
    /// Builds a bounded instance.
    ///
    /// `min_bound <= max_bound` is checked in debug builds only.
    pub fn make(order: Order<A>, min_bound: A, max_bound: A) -> Self {
        debug_assert!(
            order.compare(&min_bound, &max_bound) != Ordering::Greater,
            "lower bound must not exceed upper bound"
        );
        Self {
            order,
            max_bound,
            min_bound,
        }
    }

    /// The underlying order.
    pub const fn order(&self) -> &Order<A> {
        &self.order
    }

    /// Compares `left` with `right` using the underlying order.
    #[inline]
    pub fn compare(&self, left: &A, right: &A) -> Ordering {
        self.order.compare(left, right)
    }
}

impl<A: Clone> Bounded<A> {
    /// The greatest element.
    pub fn max_bound(&self) -> A {
        self.max_bound.clone()
    }

    /// The least element.
    pub fn min_bound(&self) -> A {
        self.min_bound.clone()
    }

    /// Restricts `value` to the bounds.
    pub fn clamp(&self, value: A) -> A {
        self.order.clamp(value, self.min_bound(), self.max_bound())
    }
}

impl<A: Clone + 'static> Bounded<A> {
    /// Reverses the order and swaps the bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Bounded;
    ///
    /// let reversed = Bounded::<u8>::natural().reverse();
    /// assert_eq!(reversed.min_bound(), u8::MAX);
    /// assert_eq!(reversed.max_bound(), u8::MIN);
    /// ```
    pub fn reverse(&self) -> Self {
        Self {
            order: self.order.reverse(),
            max_bound: self.min_bound(),
            min_bound: self.max_bound(),
        }
    }
}

impl<A: BoundedValue + Ord + 'static> Bounded<A> {
    /// The natural order of `A` between its [`BoundedValue`] limits.
    pub fn natural() -> Self {
        Self::make(Order::natural(), A::MIN_VALUE, A::MAX_VALUE)
    }
}

/// Types with compile-time minimum and maximum values.
pub trait BoundedValue {
    /// The minimum value of this type.
    const MIN_VALUE: Self;

    /// The maximum value of this type.
    const MAX_VALUE: Self;
}

macro_rules! impl_bounded_value {
    ($($numeric:ty),* $(,)?) => {
        $(
            impl BoundedValue for $numeric {
                const MIN_VALUE: Self = <$numeric>::MIN;
                const MAX_VALUE: Self = <$numeric>::MAX;
            }
        )*
    };
}

impl_bounded_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char);

impl BoundedValue for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}

impl BoundedValue for () {
    const MIN_VALUE: Self = ();
    const MAX_VALUE: Self = ();
}

static_assertions::assert_not_impl_any!(Bounded<i32>: Send, Sync);
