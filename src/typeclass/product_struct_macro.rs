//! The `product_struct!` macro for deriving instances of named structs.
//!
//! This module provides the [`product_struct!`] macro, the named-field
//! counterpart of [`NonEmptyTuple`](super::NonEmptyTuple).

/// Derives an instance for a struct from one instance per field.
///
/// `product_struct!(Kind => Name { field: instance, .. })` pairs the field
/// instances with [`SemiProduct::product`](crate::typeclass::SemiProduct)
/// into a right-nested tuple and maps it onto `Name` with
/// [`Invariant::imap`](crate::typeclass::Invariant). Every field of `Name`
/// must be listed exactly once: a missing or unknown field is a compile
/// error.
///
/// # Examples
///
/// ```
/// use kindred::product_struct;
/// use kindred::typeclass::{Semigroup, SemigroupKind};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// let semigroup = product_struct!(SemigroupKind => Person {
///     name: Semigroup::string(),
///     age: Semigroup::sum(),
/// });
///
/// let combined = semigroup.combine(
///     Person { name: "a".into(), age: 10 },
///     Person { name: "b".into(), age: 20 },
/// );
/// assert_eq!(combined, Person { name: "ab".into(), age: 30 });
/// ```
///
/// Orders compare the fields in the listed order:
///
/// ```
/// use kindred::product_struct;
/// use kindred::typeclass::{Order, OrderKind};
/// use std::cmp::Ordering;
///
/// #[derive(Debug, Clone)]
/// struct Version { major: u32, minor: u32 }
///
/// let order = product_struct!(OrderKind => Version {
///     major: Order::number(),
///     minor: Order::number(),
/// });
/// let older = Version { major: 1, minor: 9 };
/// let newer = Version { major: 2, minor: 0 };
/// assert_eq!(order.compare(&older, &newer), Ordering::Less);
/// ```
///
/// # Compile errors
///
/// Leaving a field out is rejected:
///
/// ```compile_fail,E0063
/// use kindred::product_struct;
/// use kindred::typeclass::{Semigroup, SemigroupKind};
///
/// #[derive(Clone)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// let _ = product_struct!(SemigroupKind => Person {
///     name: Semigroup::string(),
/// });
/// ```
///
/// So is a field the struct does not have:
///
/// ```compile_fail,E0560
/// use kindred::product_struct;
/// use kindred::typeclass::{Semigroup, SemigroupKind};
///
/// #[derive(Clone)]
/// struct Person {
///     name: String,
/// }
///
/// let _ = product_struct!(SemigroupKind => Person {
///     name: Semigroup::string(),
///     age: Semigroup::<u32>::sum(),
/// });
/// ```
///
/// And an instance for the wrong field type:
///
/// ```compile_fail,E0308
/// use kindred::product_struct;
/// use kindred::typeclass::{Order, OrderKind};
///
/// #[derive(Clone)]
/// struct Version {
///     major: u32,
///     label: String,
/// }
///
/// let _ = product_struct!(OrderKind => Version {
///     major: Order::<u32>::number(),
///     label: Order::<bool>::boolean(),
/// });
/// ```
#[macro_export]
macro_rules! product_struct {
    ($kind:ty => $name:ident { $field:ident : $instance:expr $(,)? }) => {
        <$kind as $crate::typeclass::Invariant>::imap(
            $instance,
            move |$field| $name { $field },
            move |$name { $field }: $name| $field,
        )
    };

    ($kind:ty => $name:ident {
        $first_field:ident : $first_instance:expr
        $(, $field:ident : $instance:expr)+ $(,)?
    }) => {
        <$kind as $crate::typeclass::Invariant>::imap(
            $crate::__product_nested!($kind; $first_instance $(, $instance)+),
            move |nested| {
                let $crate::__nested_fields!($first_field $(, $field)+) = nested;
                $name { $first_field $(, $field)+ }
            },
            move |$name { $first_field $(, $field)+ }: $name| {
                $crate::__nested_fields!($first_field $(, $field)+)
            },
        )
    };
}

/// Right-nested product of instances: `a, b, c` becomes
/// `product(a, product(b, c))`.
#[doc(hidden)]
#[macro_export]
macro_rules! __product_nested {
    ($kind:ty; $last:expr) => {
        $last
    };
    ($kind:ty; $head:expr, $($rest:expr),+) => {
        <$kind as $crate::typeclass::SemiProduct>::product(
            $head,
            $crate::__product_nested!($kind; $($rest),+),
        )
    };
}

/// Right-nested tuple of field names, usable as a pattern or an expression.
#[doc(hidden)]
#[macro_export]
macro_rules! __nested_fields {
    ($last:ident) => {
        $last
    };
    ($head:ident, $($rest:ident),+) => {
        ($head, $crate::__nested_fields!($($rest),+))
    };
}
