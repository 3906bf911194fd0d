//! Product type class - pairing with a neutral element.
//!
//! `Product` adds [`Of`] to [`SemiProduct`], which makes it possible to
//! combine any number of values, including none: `product_all` of an empty
//! collection is the neutral value over `vec![]`.
//!
//! # Laws
//!
//! ## Identity
//!
//! Up to the isomorphisms `(a, ()) <-> a` and `((), a) <-> a`:
//!
//! ```text
//! product(fa, of(())) ~ fa
//! product(of(()), fa) ~ fa
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::instances::OptionKind;
//! use kindred::typeclass::Product;
//!
//! assert_eq!(OptionKind::product_all([Some(1), Some(2)]), Some(vec![1, 2]));
//! assert_eq!(OptionKind::product_all(Vec::<Option<i32>>::new()), Some(vec![]));
//! ```

use super::of::Of;
use super::semi_product::SemiProduct;

/// A kind whose values can be paired any number of times.
pub trait Product: SemiProduct + Of {
    /// Combines every element of `collection` into one value over vectors.
    fn product_all<A, I>(collection: I) -> Self::WithType<Vec<A>>
    where
        A: Clone + 'static,
        I: IntoIterator<Item = Self::WithType<A>>;
}
