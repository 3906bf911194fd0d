//! Tuple derivation for semi-product kinds.
//!
//! A tuple of instances that all share one kind, such as
//! `(Semigroup<String>, Semigroup<i32>)`, can be turned into a single
//! instance for the tuple of their inner types, here `Semigroup<(String, i32)>`.
//! [`NonEmptyTuple::tuple`] does this for arities one to six. Mixing kinds is
//! a compile error, and so is the empty tuple: there is nothing to derive the
//! instance from.
//!
//! [`Append`] is the positional record used by
//! [`and_then_bind`](super::semi_product::and_then_bind): it grows a tuple by
//! one element on the right and splits it back.
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{NonEmptyTuple, Semigroup};
//!
//! let semigroup = (Semigroup::string(), Semigroup::<i32>::sum(), Semigroup::boolean_all()).tuple();
//! assert_eq!(
//!     semigroup.combine(("a".to_string(), 1, true), ("b".to_string(), 2, false)),
//!     ("ab".to_string(), 3, false)
//! );
//! ```

use paste::paste;

use super::invariant;
use super::kind::{Kind, TypeConstructor};
use super::semi_product::{SemiProduct, and_then_bind};

/// A tuple of instances sharing one semi-product kind.
///
/// Instances of different kinds do not combine:
///
/// ```compile_fail,E0599
/// use kindred::typeclass::{NonEmptyTuple, Order, Semigroup};
///
/// let _ = (Semigroup::<String>::string(), Order::<i32>::number()).tuple();
/// ```
///
/// Neither does the empty tuple:
///
/// ```compile_fail,E0599
/// use kindred::typeclass::NonEmptyTuple;
///
/// let _ = ().tuple();
/// ```
pub trait NonEmptyTuple {
    /// The kind every element belongs to.
    type Kind: SemiProduct;

    /// The tuple of the elements' inner types.
    type Inner;

    /// Derives the instance for the tuple of inner types.
    fn tuple(self) -> <Self::Kind as Kind>::WithType<Self::Inner>;
}

impl<K, A, FA> NonEmptyTuple for (FA,)
where
    K: SemiProduct,
    A: Clone + 'static,
    FA: TypeConstructor<Kind = K, Inner = A>,
{
    type Kind = K;
    type Inner = (A,);

    fn tuple(self) -> K::WithType<(A,)> {
        invariant::tupled::<K, A>(self.0.into_kind())
    }
}

impl<K, A, B, FA, FB> NonEmptyTuple for (FA, FB)
where
    K: SemiProduct,
    A: Clone + 'static,
    B: Clone + 'static,
    FA: TypeConstructor<Kind = K, Inner = A>,
    FB: TypeConstructor<Kind = K, Inner = B>,
{
    type Kind = K;
    type Inner = (A, B);

    fn tuple(self) -> K::WithType<(A, B)> {
        let (fa, fb) = self;
        K::product::<A, B>(fa.into_kind(), fb.into_kind())
    }
}

/// Appends the remaining elements one by one, naming every intermediate
/// record type so that `and_then_bind` never has to infer it.
macro_rules! bind_remaining {
    ($kind:ident, $record:ident, ($($done:ident),+);) => {
        $record
    };
    ($kind:ident, $record:ident, ($($done:ident),+); $field:ident $next:ident $(, $rest_field:ident $rest:ident)*) => {{
        let $record = and_then_bind::<$kind, ($($done,)+), $next>($record, $field.into_kind());
        bind_remaining!($kind, $record, ($($done,)+ $next); $($rest_field $rest),*)
    }};
}

/// Implements `NonEmptyTuple` for arities three and up. `FA A` declares an
/// element of type `FA` over inner type `A`, bound as `fa`.
macro_rules! impl_non_empty_tuple {
    ($fa:ident $first:ident, $fb:ident $second:ident $(, $fr:ident $rest:ident)+) => {
        paste! {
            impl<K, $first, $second, $($rest,)+ $fa, $fb, $($fr,)+> NonEmptyTuple for ($fa, $fb, $($fr,)+)
            where
                K: SemiProduct,
                $first: Clone + 'static,
                $second: Clone + 'static,
                $($rest: Clone + 'static,)+
                $fa: TypeConstructor<Kind = K, Inner = $first>,
                $fb: TypeConstructor<Kind = K, Inner = $second>,
                $($fr: TypeConstructor<Kind = K, Inner = $rest>,)+
            {
                type Kind = K;
                type Inner = ($first, $second, $($rest,)+);

                fn tuple(self) -> K::WithType<($first, $second, $($rest,)+)> {
                    let ([<$fa:lower>], [<$fb:lower>], $([<$fr:lower>],)+) = self;
                    let record = K::product::<$first, $second>(
                        [<$fa:lower>].into_kind(),
                        [<$fb:lower>].into_kind(),
                    );
                    bind_remaining!(K, record, ($first, $second); $([<$fr:lower>] $rest),+)
                }
            }
        }
    };
}

impl_non_empty_tuple!(FA A, FB B, FC C);
impl_non_empty_tuple!(FA A, FB B, FC C, FD D);
impl_non_empty_tuple!(FA A, FB B, FC C, FD D, FE E);
impl_non_empty_tuple!(FA A, FB B, FC C, FD D, FE E, FF F);

/// A tuple that can grow by one element on the right.
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::Append;
///
/// let grown = (1, "two").append(3.0);
/// assert_eq!(grown, (1, "two", 3.0));
/// assert_eq!(<(i32, &str) as Append<f64>>::split(grown), ((1, "two"), 3.0));
/// ```
pub trait Append<Last>: Sized {
    /// The grown tuple.
    type Output;

    /// Adds `last` after every existing element.
    fn append(self, last: Last) -> Self::Output;

    /// Undoes [`Append::append`].
    fn split(output: Self::Output) -> (Self, Last);
}

macro_rules! impl_append {
    ($($element:ident),*) => {
        impl<$($element,)* Last> Append<Last> for ($($element,)*) {
            type Output = ($($element,)* Last,);

            #[allow(non_snake_case)]
            fn append(self, last: Last) -> Self::Output {
                let ($($element,)*) = self;
                ($($element,)* last,)
            }

            #[allow(non_snake_case)]
            fn split(output: Self::Output) -> (Self, Last) {
                let ($($element,)* last,) = output;
                (($($element,)*), last)
            }
        }
    };
}

impl_append!();
impl_append!(A);
impl_append!(A, B);
impl_append!(A, B, C);
impl_append!(A, B, C, D);
impl_append!(A, B, C, D, E);
