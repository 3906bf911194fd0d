//! Identity wrapper type - the simplest comonad.
//!
//! `Identity<A>` holds exactly one `A` and adds nothing else. That makes it
//! the reference model for the kind-level laws: every operation reduces to
//! plain function application.

use crate::typeclass::{
    Comonad, Covariant, Extendable, Invariant, Kind, Of, Product, SemiProduct, TypeConstructor,
    covariant,
};

/// A wrapper holding exactly one value.
///
/// # Examples
///
/// ```rust
/// use kindred::instances::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
/// assert_eq!(Identity(7).0, 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Returns the wrapped value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Borrows the wrapped value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

/// Marker for the `Identity<_>` constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IdentityKind;

impl Kind for IdentityKind {
    type WithType<A> = Identity<A>;
}

impl<A> TypeConstructor for Identity<A> {
    type Kind = IdentityKind;
    type Inner = A;

    #[inline]
    fn into_kind(self) -> Self {
        self
    }
}

impl Invariant for IdentityKind {
    fn imap<A, B, Forward, Backward>(fa: Identity<A>, to: Forward, from: Backward) -> Identity<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        Forward: Fn(A) -> B + 'static,
        Backward: Fn(B) -> A + 'static,
    {
        covariant::imap::<Self, A, B, Forward, Backward>(fa, to, from)
    }
}

impl Covariant for IdentityKind {
    fn map<A, B, Function>(fa: Identity<A>, function: Function) -> Identity<B>
    where
        A: 'static,
        B: 'static,
        Function: Fn(A) -> B + 'static,
    {
        Identity(function(fa.0))
    }
}

impl Of for IdentityKind {
    fn of<A: Clone + 'static>(value: A) -> Identity<A> {
        Identity(value)
    }
}

impl SemiProduct for IdentityKind {
    fn product<A, B>(fa: Identity<A>, fb: Identity<B>) -> Identity<(A, B)>
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        Identity((fa.0, fb.0))
    }

    fn product_many<A, I>(head: Identity<A>, collection: I) -> Identity<Vec<A>>
    where
        A: Clone + 'static,
        I: IntoIterator<Item = Identity<A>>,
    {
        Self::product_all(std::iter::once(head).chain(collection))
    }
}

impl Product for IdentityKind {
    fn product_all<A, I>(collection: I) -> Identity<Vec<A>>
    where
        A: Clone + 'static,
        I: IntoIterator<Item = Identity<A>>,
    {
        Identity(collection.into_iter().map(Identity::into_inner).collect())
    }
}

impl Extendable for IdentityKind {
    fn extend<A, B, Function>(wa: Identity<A>, function: Function) -> Identity<B>
    where
        A: Clone + 'static,
        B: 'static,
        Function: Fn(Identity<A>) -> B + 'static,
    {
        Identity(function(wa))
    }
}

impl Comonad for IdentityKind {
    fn extract<A>(wa: Identity<A>) -> A {
        wa.0
    }
}

static_assertions::assert_impl_all!(IdentityKind: Copy, Send, Sync);
static_assertions::assert_impl_all!(Identity<i32>: Copy, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(i32::MIN)]
    #[case(i32::MAX)]
    fn new_and_into_inner_round_trip(#[case] value: i32) {
        assert_eq!(Identity::new(value).into_inner(), value);
    }

    #[rstest]
    fn as_inner_borrows() {
        let wrapped = Identity::new(vec![1, 2, 3]);
        assert_eq!(wrapped.as_inner(), &vec![1, 2, 3]);
    }

    #[rstest]
    fn from_wraps_value() {
        let wrapped: Identity<String> = String::from("hello").into();
        assert_eq!(wrapped.into_inner(), "hello");
    }

    #[rstest]
    fn map_applies_function() {
        assert_eq!(IdentityKind::map(Identity(3), |value: i32| value * 3), Identity(9));
    }

    #[rstest]
    fn imap_uses_forward_function() {
        let mapped = IdentityKind::imap(Identity(2), |value: i32| value.to_string(), |text: String| {
            text.parse::<i32>().unwrap_or_default()
        });
        assert_eq!(mapped, Identity("2".to_string()));
    }

    #[rstest]
    fn product_pairs_values() {
        assert_eq!(IdentityKind::product(Identity(1), Identity('a')), Identity((1, 'a')));
    }

    #[rstest]
    fn product_many_keeps_order() {
        assert_eq!(
            IdentityKind::product_many(Identity(1), [Identity(2), Identity(3)]),
            Identity(vec![1, 2, 3])
        );
    }

    #[rstest]
    fn product_all_of_nothing_is_empty() {
        assert_eq!(
            IdentityKind::product_all(Vec::<Identity<u8>>::new()),
            Identity(Vec::new())
        );
    }

    #[rstest]
    fn extract_returns_value() {
        assert_eq!(IdentityKind::extract(Identity("focus")), "focus");
    }

    #[test]
    fn type_constructor_inner_type() {
        fn assert_inner<T: TypeConstructor<Inner = i32, Kind = IdentityKind>>() {}
        assert_inner::<Identity<i32>>();
    }
}
