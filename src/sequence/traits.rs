use rand::Rng;

use crate::sequence::error::Result;

/// ### -> `Length Trait`
///
/// Element-count queries. Every other capability trait builds on this one.
pub trait Length {
    /// Number of live elements.
    fn len(&self) -> usize;

    /// True when the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// ### -> `Access<T> Trait`
///
/// Positional reads and writes. Valid positions form the half-open range
/// `[0, len)`; every method that takes an index checks it up front and
/// reports [`Error::OutOfRange`](crate::Error::OutOfRange) without touching
/// the sequence when the check fails.
///
/// ### -> `Usage`
///
/// ```
/// use sequent::sequence::prelude::*;
///
/// fn example() -> Result<()> {
///     let mut sequence = sequent::sequence![10, 20, 30];
///
///     assert_eq!(sequence.get(1)?, &20);
///     assert_eq!(sequence.first(), Some(&10));
///     assert_eq!(sequence.last(), Some(&30));
///
///     sequence.set(1, 25)?;
///     assert_eq!(sequence.get(1)?, &25);
///
///     assert!(sequence.get(3).is_err());
///     Ok(())
/// }
///
/// example().unwrap();
/// ```
pub trait Access<T>: Length {
    /// Borrows the element at `index`.
    fn get(&self, index: usize) -> Result<&T>;

    /// Mutably borrows the element at `index`.
    fn get_mut(&mut self, index: usize) -> Result<&mut T>;

    /// Replaces the element at `index` with `value`, returning the sequence
    /// for further chaining. The replaced element is dropped; use
    /// [`Edit::take`] first if it is still needed.
    fn set(&mut self, index: usize, value: T) -> Result<&mut Self>;

    /// Borrows the first element, if any.
    fn first(&self) -> Option<&T>;

    /// Borrows the last element, if any.
    fn last(&self) -> Option<&T>;
}

/// ### -> `Edit<T> Trait`
///
/// Structural mutation: growing, shrinking and emptying the sequence.
///
/// The bulk methods (`append`, `prepend`, `insert`) accept any
/// `IntoIterator<Item = T>` and preserve the relative order of the supplied
/// values, so a single value, an array, a `Vec` or an adapter chain all
/// work. Inserting or removing in the middle shifts the tail and is O(n);
/// that is the accepted cost of contiguous storage.
///
/// ### -> `Usage`
///
/// ```
/// use sequent::sequence::prelude::*;
///
/// fn example() -> Result<()> {
///     let mut sequence = Sequence::new();
///
///     sequence
///         .append(["b", "c"])
///         .prepend(["a"])
///         .insert(2, ["x", "y"])?;
///     assert_eq!(sequence.as_slice(), &["a", "b", "x", "y", "c"]);
///
///     sequence.remove(2)?;
///     assert_eq!(sequence.take(2)?, "y");
///     assert_eq!(sequence.as_slice(), &["a", "b", "c"]);
///
///     sequence.clear();
///     assert!(sequence.is_empty());
///     Ok(())
/// }
///
/// example().unwrap();
/// ```
pub trait Edit<T>: Length {
    /// Adds `values` at the end, preserving their relative order.
    fn append<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>;

    /// Inserts `values` at the front, preserving their relative order.
    /// Equivalent to `insert(0, values)`.
    fn prepend<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>;

    /// Inserts `values` starting at position `index`, shifting existing
    /// elements from `index` onward to the right. `index` may equal `len`,
    /// in which case this appends.
    fn insert<I>(&mut self, index: usize, values: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = T>;

    /// Deletes the element at `index`; subsequent elements shift left by
    /// one. The removed element is dropped.
    fn remove(&mut self, index: usize) -> Result<&mut Self>;

    /// Deletes the element at `index` and hands it back instead of dropping
    /// it. The non-chaining sibling of [`Edit::remove`].
    fn take(&mut self, index: usize) -> Result<T>;

    /// Removes all elements. The allocated capacity is retained.
    fn clear(&mut self) -> &mut Self;
}

/// ### -> `Transform<T> Trait`
///
/// Whole-sequence transformation in the functional style: `map`, `filter`,
/// `reduce` and `for_each`. Unlike iterator adapters, `map` and `filter`
/// mutate the sequence in place and return it for chaining.
///
/// ### -> `Usage`
///
/// ```
/// use sequent::sequence::prelude::*;
///
/// let mut sequence = sequent::sequence![1, 2, 3, 4];
///
/// sequence
///     .map(|value| value * 10)
///     .filter(|value| value % 20 != 0);
/// assert_eq!(sequence.as_slice(), &[10, 30]);
///
/// assert_eq!(sequence.reduce(|accumulator, value| accumulator + value), 40);
/// ```
pub trait Transform<T> {
    /// Replaces every element with `transform(element)`, applied in index
    /// order. A mutating, not a pure, map.
    fn map<F>(&mut self, transform: F) -> &mut Self
    where
        F: FnMut(T) -> T;

    /// Retains only the elements for which `predicate` returns true,
    /// preserving relative order. The backing storage is rebuilt rather
    /// than edited in place.
    fn filter<P>(&mut self, predicate: P) -> &mut Self
    where
        P: FnMut(&T) -> bool;

    /// Left-fold over the elements in index order: the accumulator starts
    /// as the first element and `combine` merges each subsequent one in.
    ///
    /// An empty sequence yields `T::default()` rather than an error; the
    /// `Default` bound makes that contract explicit at the call site.
    fn reduce<F>(&self, combine: F) -> T
    where
        F: FnMut(T, T) -> T,
        T: Clone + Default;

    /// Invokes `visit` once per element in index order.
    fn for_each<F>(&self, visit: F)
    where
        F: FnMut(&T);
}

/// ### -> `Search<T> Trait`
///
/// Linear scans using `T`'s structural equality. Requires `T: PartialEq`;
/// no index or hash is maintained, so both methods are O(n).
pub trait Search<T>
where
    T: PartialEq,
{
    /// True iff some element equals `value`.
    fn contains(&self, value: &T) -> bool;

    /// Index of the first element equal to `value`, or `None`.
    fn index_of(&self, value: &T) -> Option<usize>;
}

/// ### -> `Arrange<T> Trait`
///
/// Reordering: reversal, comparison sort, uniform shuffle and positional
/// swap.
///
/// ### -> `Usage`
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use sequent::sequence::prelude::*;
///
/// fn example() -> Result<()> {
///     let mut rng = StdRng::seed_from_u64(7);
///     let mut sequence = sequent::sequence![3, 1, 2];
///
///     sequence.sort(|a, b| a < b);
///     assert_eq!(sequence.as_slice(), &[1, 2, 3]);
///
///     sequence.reverse().swap(0, 2)?;
///     assert_eq!(sequence.as_slice(), &[1, 2, 3]);
///
///     sequence.shuffle(&mut rng);
///     assert_eq!(sequence.len(), 3);
///     Ok(())
/// }
///
/// example().unwrap();
/// ```
pub trait Arrange<T> {
    /// Reverses the element order in place.
    fn reverse(&mut self) -> &mut Self;

    /// Reorders the elements according to `less`, which must define a
    /// strict weak ordering (irreflexive, asymmetric, transitive).
    ///
    /// The sort is **unstable**: the relative order of elements the
    /// comparator considers equal is unspecified.
    fn sort<F>(&mut self, less: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> bool;

    /// Applies a uniform-random permutation (Fisher–Yates) driven by the
    /// supplied generator. The sequence never seeds or owns a random
    /// source; pass a seeded generator for reproducible orders.
    fn shuffle<R>(&mut self, rng: &mut R) -> &mut Self
    where
        R: Rng + ?Sized;

    /// Exchanges the elements at `i` and `j`. Both indices are validated
    /// before either element moves.
    fn swap(&mut self, i: usize, j: usize) -> Result<&mut Self>;
}
