//! Kind instances for `Option`.
//!
//! `Option` pairs like a short-circuiting zip: a product is `Some` only when
//! every input is `Some`.

use crate::typeclass::{
    Covariant, Extendable, Invariant, Kind, Of, Product, SemiProduct, TypeConstructor, covariant,
};

/// Marker for the `Option<_>` constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OptionKind;

impl Kind for OptionKind {
    type WithType<A> = Option<A>;
}

impl<A> TypeConstructor for Option<A> {
    type Kind = OptionKind;
    type Inner = A;

    #[inline]
    fn into_kind(self) -> Self {
        self
    }
}

impl Invariant for OptionKind {
    fn imap<A, B, Forward, Backward>(fa: Option<A>, to: Forward, from: Backward) -> Option<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        Forward: Fn(A) -> B + 'static,
        Backward: Fn(B) -> A + 'static,
    {
        covariant::imap::<Self, A, B, Forward, Backward>(fa, to, from)
    }
}

impl Covariant for OptionKind {
    fn map<A, B, Function>(fa: Option<A>, function: Function) -> Option<B>
    where
        A: 'static,
        B: 'static,
        Function: Fn(A) -> B + 'static,
    {
        fa.map(function)
    }
}

impl Of for OptionKind {
    fn of<A: Clone + 'static>(value: A) -> Option<A> {
        Some(value)
    }
}

impl SemiProduct for OptionKind {
    fn product<A, B>(fa: Option<A>, fb: Option<B>) -> Option<(A, B)>
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        fa.zip(fb)
    }

    fn product_many<A, I>(head: Option<A>, collection: I) -> Option<Vec<A>>
    where
        A: Clone + 'static,
        I: IntoIterator<Item = Option<A>>,
    {
        Self::product_all(std::iter::once(head).chain(collection))
    }
}

impl Product for OptionKind {
    fn product_all<A, I>(collection: I) -> Option<Vec<A>>
    where
        A: Clone + 'static,
        I: IntoIterator<Item = Option<A>>,
    {
        collection.into_iter().collect()
    }
}

impl Extendable for OptionKind {
    fn extend<A, B, Function>(wa: Option<A>, function: Function) -> Option<B>
    where
        A: Clone + 'static,
        B: 'static,
        Function: Fn(Option<A>) -> B + 'static,
    {
        if wa.is_some() {
            Some(function(wa))
        } else {
            None
        }
    }
}

static_assertions::assert_impl_all!(OptionKind: Copy, Send, Sync);
