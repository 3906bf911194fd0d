//! Property-based tests for Order laws.
//!
//! - **Antisymmetry**: `compare(a, b) == compare(b, a).reverse()`
//! - **Transitivity**: `a <= b && b <= c` implies `a <= c`
//! - **Reflexivity**: `compare(a, a) == Equal`
//!
//! Along with the derived relations (`clamp`, `between`, `min`, `max`) for
//! built-in and derived orders.

#![cfg(feature = "typeclass")]

use std::cmp::Ordering;

use kindred::product_struct;
use kindred::typeclass::{NonEmptyTuple, Order, OrderKind};
use proptest::prelude::*;

fn assert_total_order<A>(order: &Order<A>, first: &A, second: &A, third: &A) -> Result<(), TestCaseError> {
    prop_assert_eq!(order.compare(first, first), Ordering::Equal);
    prop_assert_eq!(order.compare(first, second), order.compare(second, first).reverse());
    if order.less_than_or_equal_to(first, second) && order.less_than_or_equal_to(second, third) {
        prop_assert!(order.less_than_or_equal_to(first, third));
    }
    Ok(())
}

#[derive(Debug, Clone)]
struct Release {
    major: u8,
    minor: u8,
    tag: String,
}

fn release() -> impl Strategy<Value = Release> {
    (0_u8..3, 0_u8..3, "[ab]{0,2}").prop_map(|(major, minor, tag)| Release { major, minor, tag })
}

fn release_order() -> Order<Release> {
    product_struct!(OrderKind => Release {
        major: Order::number(),
        minor: Order::number(),
        tag: Order::string(),
    })
}

proptest! {
    #[test]
    fn prop_number_is_total(first: i64, second: i64, third: i64) {
        assert_total_order(&Order::number(), &first, &second, &third)?;
    }

    #[test]
    fn prop_float_number_is_total(
        first in prop_oneof![any::<f64>(), Just(f64::NAN), Just(-0.0_f64)],
        second in prop_oneof![any::<f64>(), Just(f64::NAN), Just(0.0_f64)],
        third in prop_oneof![any::<f64>(), Just(f64::NAN), Just(f64::INFINITY)]
    ) {
        assert_total_order(&Order::number(), &first, &second, &third)?;
    }

    #[test]
    fn prop_reverse_is_total(first: i64, second: i64, third: i64) {
        assert_total_order(&Order::number().reverse(), &first, &second, &third)?;
    }

    #[test]
    fn prop_contramap_is_total(first in "\\PC{0,5}", second in "\\PC{0,5}", third in "\\PC{0,5}") {
        let by_length = Order::number().contramap(|text: &String| text.len());
        assert_total_order(&by_length, &first, &second, &third)?;
    }

    #[test]
    fn prop_array_is_total(
        first in prop::collection::vec(0_u8..3, 0..4),
        second in prop::collection::vec(0_u8..3, 0..4),
        third in prop::collection::vec(0_u8..3, 0..4)
    ) {
        assert_total_order(&Order::<u8>::natural().array(), &first, &second, &third)?;
    }

    #[test]
    fn prop_tuple_is_total(
        first in (0_u8..3, any::<bool>()),
        second in (0_u8..3, any::<bool>()),
        third in (0_u8..3, any::<bool>())
    ) {
        let order = (Order::<u8>::number(), Order::<bool>::boolean()).tuple();
        assert_total_order(&order, &first, &second, &third)?;
    }

    #[test]
    fn prop_struct_is_total(first in release(), second in release(), third in release()) {
        assert_total_order(&release_order(), &first, &second, &third)?;
    }

    #[test]
    fn prop_tuple_agrees_with_std_ord(first: (u8, bool, char), second: (u8, bool, char)) {
        let order = (Order::<u8>::natural(), Order::<bool>::natural(), Order::<char>::natural()).tuple();
        prop_assert_eq!(order.compare(&first, &second), first.cmp(&second));
    }

    #[test]
    fn prop_array_agrees_with_std_ord(
        first in prop::collection::vec(any::<i8>(), 0..5),
        second in prop::collection::vec(any::<i8>(), 0..5)
    ) {
        prop_assert_eq!(Order::<i8>::natural().array().compare(&first, &second), first.cmp(&second));
    }

    #[test]
    fn prop_semigroup_is_lexicographic(first: (i8, i8), second: (i8, i8)) {
        let by_first = Order::<i8>::number().contramap(|pair: &(i8, i8)| pair.0);
        let by_second = Order::<i8>::number().contramap(|pair: &(i8, i8)| pair.1);
        let order = Order::semigroup().combine(by_first, by_second);
        prop_assert_eq!(order.compare(&first, &second), first.cmp(&second));
    }
}

// =============================================================================
// Derived relations
// =============================================================================

proptest! {
    #[test]
    fn prop_clamp_lands_between(value: i32, low in -100_i32..0, high in 0_i32..100) {
        let order = Order::number();
        let clamped = order.clamp(value, low, high);
        prop_assert!(order.between(&clamped, &low, &high));
    }

    #[test]
    fn prop_clamp_keeps_values_in_range(value in -50_i32..50) {
        prop_assert_eq!(Order::number().clamp(value, -50, 50), value);
    }

    #[test]
    fn prop_min_max_partition_operands(left: i16, right: i16) {
        let order = Order::number();
        let smaller = order.min(left, right);
        let larger = order.max(left, right);
        prop_assert!(order.less_than_or_equal_to(&smaller, &larger));
        prop_assert_eq!((smaller, larger), if left <= right { (left, right) } else { (right, left) });
    }

    #[test]
    fn prop_relations_agree_with_compare(left: u16, right: u16) {
        let order = Order::number();
        prop_assert_eq!(order.less_than(&left, &right), left < right);
        prop_assert_eq!(order.less_than_or_equal_to(&left, &right), left <= right);
        prop_assert_eq!(order.greater_than(&left, &right), left > right);
        prop_assert_eq!(order.greater_than_or_equal_to(&left, &right), left >= right);
    }
}
