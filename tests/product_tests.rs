//! Integration tests for instance derivation: tuples, structs,
//! `and_then_bind` records and `product_all`.

#![cfg(all(feature = "typeclass", feature = "instances"))]

use std::cmp::Ordering;

use kindred::instances::{Identity, IdentityKind, OptionKind, VecKind};
use kindred::product_struct;
use kindred::typeclass::{
    Monoid, MonoidKind, NonEmptyTuple, Of, Order, OrderKind, Product, SemiProduct, Semigroup,
    SemigroupKind, of::unit, semi_product,
};
use rstest::rstest;

#[derive(Debug, Clone, PartialEq)]
struct Person {
    name: String,
    age: u32,
}

fn person(name: &str, age: u32) -> Person {
    Person { name: name.to_string(), age }
}

// =============================================================================
// Reference scenarios
// =============================================================================

#[rstest]
fn reversed_string_semigroup_folds_backwards() {
    let semigroup = Semigroup::string().reverse();
    let collection = ["b", "c", "d"].map(String::from);
    assert_eq!(semigroup.combine_many("a".to_string(), collection), "dcba");
}

#[rstest]
fn min_semigroup_keeps_start_when_smallest() {
    let semigroup = Semigroup::min(Order::number());
    assert_eq!(semigroup.combine_many(1, [3, 2]), 1);
}

#[rstest]
fn tuple_order_of_string_number_boolean() {
    let order = (Order::<&str>::string(), Order::<i32>::number(), Order::<bool>::boolean()).tuple();
    assert_eq!(order.compare(&("a", 1, true), &("b", 2, true)), Ordering::Less);
    assert_eq!(order.compare(&("b", 2, true), &("a", 1, true)), Ordering::Greater);
}

#[rstest]
fn struct_semigroup_of_name_and_age() {
    let semigroup = product_struct!(SemigroupKind => Person {
        name: Semigroup::string(),
        age: Semigroup::sum(),
    });
    assert_eq!(semigroup.combine(person("a", 10), person("b", 20)), person("ab", 30));
}

#[rstest]
#[case(20, 10)]
#[case(-10, 1)]
#[case(5, 5)]
fn clamp_between_one_and_ten(#[case] value: i32, #[case] expected: i32) {
    assert_eq!(Order::number().clamp(value, 1, 10), expected);
}

// =============================================================================
// Tuples and structs across kinds
// =============================================================================

#[rstest]
fn struct_order_sorts_people() {
    let order = product_struct!(OrderKind => Person {
        age: Order::number(),
        name: Order::string(),
    });
    let mut people = vec![person("bo", 30), person("al", 30), person("cy", 20)];
    people.sort_by(|left, right| order.compare(left, right));
    assert_eq!(people, vec![person("cy", 20), person("al", 30), person("bo", 30)]);
}

#[rstest]
fn struct_monoid_combine_all() {
    let monoid = product_struct!(MonoidKind => Person {
        name: Monoid::string(),
        age: Monoid::sum(),
    });
    assert_eq!(monoid.combine_all(Vec::new()), person("", 0));
    assert_eq!(
        monoid.combine_all([person("x", 1), person("y", 2), person("z", 3)]),
        person("xyz", 6)
    );
}

#[rstest]
fn struct_over_vec_is_cartesian() {
    let people = product_struct!(VecKind => Person {
        name: vec!["a".to_string(), "b".to_string()],
        age: vec![1, 2],
    });
    assert_eq!(
        people,
        vec![person("a", 1), person("a", 2), person("b", 1), person("b", 2)]
    );
}

#[rstest]
fn tuple_over_identity() {
    let tupled = (Identity(1), Identity('b'), Identity("c"), Identity(4.0)).tuple();
    assert_eq!(tupled, Identity((1, 'b', "c", 4.0)));
}

#[rstest]
fn tuple_of_five_options() {
    assert_eq!(
        (Some(1), Some(2), Some(3), Some(4), Some(5)).tuple(),
        Some((1, 2, 3, 4, 5))
    );
    assert_eq!((Some(1), Some(2), None::<i32>, Some(4), Some(5)).tuple(), None);
}

// =============================================================================
// and_then_bind
// =============================================================================

#[rstest]
fn and_then_bind_grows_order_record() {
    let record = semi_product::and_then_bind::<OrderKind, _, _>(unit::<OrderKind>(), Order::<i32>::number());
    let record = semi_product::and_then_bind::<OrderKind, _, _>(record, Order::<&str>::string().reverse());
    assert_eq!(record.compare(&(1, "a"), &(1, "b")), Ordering::Greater);
    assert_eq!(record.compare(&(0, "a"), &(1, "b")), Ordering::Less);
}

#[rstest]
fn and_then_bind_matches_tuple() {
    let bound = semi_product::and_then_bind::<SemigroupKind, _, _>(
        semi_product::and_then_bind::<SemigroupKind, _, _>(unit::<SemigroupKind>(), Semigroup::<i32>::sum()),
        Semigroup::<i32>::multiply(),
    );
    let tupled = (Semigroup::<i32>::sum(), Semigroup::<i32>::multiply()).tuple();
    assert_eq!(bound.combine((2, 3), (4, 5)), tupled.combine((2, 3), (4, 5)));
}

#[rstest]
fn and_then_bind_over_vec_grows_each_pick() {
    let record = semi_product::and_then_bind::<VecKind, _, _>(unit::<VecKind>(), vec![1, 2]);
    let record = semi_product::and_then_bind::<VecKind, _, _>(record, vec![true]);
    assert_eq!(record, vec![(1, true), (2, true)]);
}

// =============================================================================
// product_all and product_many
// =============================================================================

#[rstest]
fn product_all_of_empty_collections_is_neutral() {
    assert_eq!(
        SemigroupKind::product_all(Vec::<Semigroup<i32>>::new()).combine(vec![], vec![]),
        Vec::<i32>::new()
    );
    assert_eq!(MonoidKind::product_all(Vec::<Monoid<i32>>::new()).empty(), Vec::<i32>::new());
    assert_eq!(
        OrderKind::product_all(Vec::<Order<i32>>::new()).compare(&vec![], &vec![]),
        Ordering::Equal
    );
    assert_eq!(OptionKind::product_all(Vec::<Option<i32>>::new()), Some(vec![]));
    assert_eq!(IdentityKind::product_all(Vec::<Identity<i32>>::new()), Identity(vec![]));
}

#[rstest]
fn product_many_order_compares_positionally() {
    let order = OrderKind::product_many(Order::<i32>::number(), [Order::<i32>::number().reverse()]);
    assert_eq!(order.compare(&vec![1, 5], &vec![1, 9]), Ordering::Greater);
    assert_eq!(order.compare(&vec![0, 5], &vec![1, 9]), Ordering::Less);
}

#[rstest]
fn of_instances_are_neutral_for_product() {
    let paired = MonoidKind::product(Monoid::<i32>::sum(), MonoidKind::of(()));
    assert_eq!(paired.combine_all([(1, ()), (2, ())]), (3, ()));
}
