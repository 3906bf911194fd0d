//! Kind instances for `Vec`.
//!
//! The product of two vectors is their cartesian product, taken in
//! row-major order: every element of the left input is paired with every
//! element of the right input before moving on.

use crate::typeclass::{
    Covariant, Extendable, Invariant, Kind, Of, Product, SemiProduct, TypeConstructor, covariant,
};

/// Marker for the `Vec<_>` constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VecKind;

impl Kind for VecKind {
    type WithType<A> = Vec<A>;
}

impl<A> TypeConstructor for Vec<A> {
    type Kind = VecKind;
    type Inner = A;

    #[inline]
    fn into_kind(self) -> Self {
        self
    }
}

impl Invariant for VecKind {
    fn imap<A, B, Forward, Backward>(fa: Vec<A>, to: Forward, from: Backward) -> Vec<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        Forward: Fn(A) -> B + 'static,
        Backward: Fn(B) -> A + 'static,
    {
        covariant::imap::<Self, A, B, Forward, Backward>(fa, to, from)
    }
}

impl Covariant for VecKind {
    fn map<A, B, Function>(fa: Vec<A>, function: Function) -> Vec<B>
    where
        A: 'static,
        B: 'static,
        Function: Fn(A) -> B + 'static,
    {
        fa.into_iter().map(function).collect()
    }
}

impl Of for VecKind {
    fn of<A: Clone + 'static>(value: A) -> Vec<A> {
        vec![value]
    }
}

impl SemiProduct for VecKind {
    fn product<A, B>(fa: Vec<A>, fb: Vec<B>) -> Vec<(A, B)>
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        let mut result = Vec::with_capacity(fa.len().saturating_mul(fb.len()));
        for a in fa {
            for b in &fb {
                result.push((a.clone(), b.clone()));
            }
        }
        result
    }

    fn product_many<A, I>(head: Vec<A>, collection: I) -> Vec<Vec<A>>
    where
        A: Clone + 'static,
        I: IntoIterator<Item = Vec<A>>,
    {
        Self::product_all(std::iter::once(head).chain(collection))
    }
}

impl Product for VecKind {
    /// Every way of picking one element from each input, in order.
    ///
    /// No inputs give the single empty pick, `vec![vec![]]`.
    fn product_all<A, I>(collection: I) -> Vec<Vec<A>>
    where
        A: Clone + 'static,
        I: IntoIterator<Item = Vec<A>>,
    {
        collection
            .into_iter()
            .fold(vec![Vec::new()], |picks: Vec<Vec<A>>, choices: Vec<A>| {
                picks
                    .iter()
                    .flat_map(|pick| {
                        choices.iter().map(move |choice| {
                            let mut extended = pick.clone();
                            extended.push(choice.clone());
                            extended
                        })
                    })
                    .collect()
            })
    }
}

impl Extendable for VecKind {
    fn extend<A, B, Function>(wa: Vec<A>, function: Function) -> Vec<B>
    where
        A: Clone + 'static,
        B: 'static,
        Function: Fn(Vec<A>) -> B + 'static,
    {
        (0..wa.len()).map(|start| function(wa[start..].to_vec())).collect()
    }
}

static_assertions::assert_impl_all!(VecKind: Copy, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn product_is_cartesian() {
        assert_eq!(
            VecKind::product(vec![1, 2], vec!['a', 'b']),
            vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]
        );
    }

    #[rstest]
    #[case(vec![], vec!['a'])]
    #[case(vec![1], vec![])]
    fn product_with_empty_side_is_empty(#[case] left: Vec<i32>, #[case] right: Vec<char>) {
        assert!(VecKind::product(left, right).is_empty());
    }

    #[rstest]
    fn product_all_of_nothing_is_single_empty_pick() {
        assert_eq!(VecKind::product_all(Vec::<Vec<i32>>::new()), vec![Vec::<i32>::new()]);
    }

    #[rstest]
    fn product_many_prepends_head() {
        assert_eq!(
            VecKind::product_many(vec![0], [vec![1, 2], vec![3]]),
            vec![vec![0, 1, 3], vec![0, 2, 3]]
        );
    }

    #[rstest]
    fn of_is_singleton() {
        assert_eq!(VecKind::of(5), vec![5]);
    }

    #[rstest]
    fn map_preserves_length() {
        assert_eq!(VecKind::map(vec![1, 2, 3], |value: i32| value > 1), vec![false, true, true]);
    }
}
