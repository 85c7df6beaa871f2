use std::cmp::Ordering;
use std::fmt;
use std::mem;

use rand::Rng;

mod error;
pub mod prelude;
mod traits;

pub use error::{Error, Result};

use traits::{Access, Arrange, Edit, Length, Search, Transform};

#[cfg(test)]
mod tests;

/// ### -> `Sequence<T>` - a chainable, generic, in-memory sequence container.
///
/// `Sequence<T>` owns a contiguous, growable, ordered collection of elements
/// of a single type and layers a fluent API over it: every mutating
/// operation hands the sequence back, so edits, transformations and
/// reorderings compose into a single left-to-right chain.
///
/// ### -> `Chaining Explained`
///
/// Infallible mutators return `&mut Self`; mutators that validate an index
/// return `Result<&mut Self>` so a chain can be threaded with `?`. Chains
/// apply strictly in call order:
///
/// ```
/// use sequent::sequence::prelude::*;
///
/// fn example() -> Result<()> {
///     let mut sequence = sequent::sequence![4, 2, 3];
///     sequence.sort(|a, b| a < b).set(0, 1)?.reverse();
///     assert_eq!(sequence.as_slice(), &[4, 3, 1]);
///     Ok(())
/// }
///
/// example().unwrap();
/// ```
///
/// ### -> `Core Features`
///
/// - **Ordered storage**: insertion order is significant and preserved
///   except where an operation explicitly reorders (`sort`, `shuffle`,
///   `reverse`, `swap`).
/// - **Fluent editing**: `append`, `prepend`, `insert`, `remove`, `clear`,
///   all chainable; bulk variants accept any `IntoIterator`.
/// - **In-place transformation**: mutating `map` and `filter`, a left-fold
///   `reduce`, and `for_each`.
/// - **Search**: `contains` and `index_of` via `T`'s structural equality.
/// - **Injectable randomness**: `shuffle` runs against a caller-supplied
///   [`rand::Rng`], never a hidden global source.
/// - **Exclusive ownership**: the backing storage is owned by exactly one
///   sequence; [`Clone`] produces an independent copy with no aliasing.
///
/// ### -> `Type Parameters`
///
/// - `T`: the element type. The container itself imposes no bounds;
///   individual capabilities require only what they use (`PartialEq` for
///   searching, `Clone + Default` for reducing, `Display` for rendering).
///
/// ### -> `Traits Implemented`
///
/// The method surface is split into capability traits, re-exported through
/// [`prelude`]:
///
/// - **[`Length`](prelude::Length)**: `len`, `is_empty`.
/// - **[`Access<T>`](prelude::Access)**: `get`, `get_mut`, `set`, `first`,
///   `last`.
/// - **[`Edit<T>`](prelude::Edit)**: `append`, `prepend`, `insert`,
///   `remove`, `take`, `clear`.
/// - **[`Transform<T>`](prelude::Transform)**: `map`, `filter`, `reduce`,
///   `for_each`.
/// - **[`Search<T>`](prelude::Search)**: `contains`, `index_of`.
/// - **[`Arrange<T>`](prelude::Arrange)**: `reverse`, `sort`, `shuffle`,
///   `swap`.
///
/// ### -> `Error Handling`
///
/// Index validation is the only recoverable failure: operations taking a
/// position report [`Error::OutOfRange`] when it falls outside `[0, len)`
/// (`insert` additionally accepts `len`). Checks run before any mutation,
/// so a failed call leaves the sequence untouched. Everything else is
/// total; in particular, `reduce` on an empty sequence returns
/// `T::default()` instead of failing.
///
/// ### -> `Performance Characteristics`
///
/// - **Length / capacity**: O(1).
/// - **Get / set / swap**: O(1).
/// - **Append**: amortized O(1) per element.
/// - **Prepend / insert / remove**: O(n), the tail shifts.
/// - **Map / filter / for_each / reduce / contains / index_of / reverse /
///   shuffle**: O(n).
/// - **Sort**: O(n log n), comparison-based, unstable.
///
/// ### -> `Usage Example`
///
/// ```
/// use sequent::sequence::prelude::*;
///
/// fn example() -> Result<()> {
///     let mut sequence: Sequence<String> = ["a", "b", "c"]
///         .into_iter()
///         .map(String::from)
///         .collect();
///
///     sequence
///         .map(|part| part + "!")
///         .filter(|part| !part.contains('b'));
///     assert_eq!(sequence.to_string(), "[a! c!]");
///
///     sequence.insert(1, ["x".to_string()])?;
///     assert_eq!(sequence.as_slice(), &["a!", "x", "c!"]);
///
///     let index = sequence.index_of(&"x".to_string());
///     assert_eq!(index, Some(1));
///
///     sequence.remove(1)?;
///     let joined = sequence.reduce(|accumulator, part| accumulator + &part);
///     assert_eq!(joined, "a!c!");
///     Ok(())
/// }
///
/// example().unwrap();
/// ```
///
/// ### -> `Notes`
///
/// - `Sequence<T>` is a plain single-threaded value. It holds no locks and
///   is not safe for concurrent mutation without external synchronization;
///   share-and-mutate designs belong to a different tool.
/// - Clearing retains the allocated capacity; the sequence never shrinks
///   automatically.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Sequence<T> {
    items: Vec<T>,
}

impl<T> Sequence<T> {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty sequence with room for `capacity` elements before
    /// the backing storage reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Number of elements the sequence can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Borrows the live backing storage as a slice. This is an aliased
    /// view, not a copy.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Mutably borrows the live backing storage.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Clones the elements into an independent `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    /// Unwraps the sequence into its backing `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Iterates over the elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Mutably iterates over the elements in index order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    fn check_bounds(&self, index: usize) -> Result<()> {
        let length = self.items.len();
        if index >= length {
            return Err(Error::OutOfRange { index, length });
        }
        Ok(())
    }
}

impl<T> Length for Sequence<T> {
    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Access<T> for Sequence<T> {
    fn get(&self, index: usize) -> Result<&T> {
        self.check_bounds(index)?;
        Ok(&self.items[index])
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_bounds(index)?;
        Ok(&mut self.items[index])
    }

    fn set(&mut self, index: usize, value: T) -> Result<&mut Self> {
        self.check_bounds(index)?;
        self.items[index] = value;
        Ok(self)
    }

    fn first(&self) -> Option<&T> {
        self.items.first()
    }

    fn last(&self) -> Option<&T> {
        self.items.last()
    }
}

impl<T> Edit<T> for Sequence<T> {
    fn append<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(values);
        self
    }

    fn prepend<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        // Position 0 is valid for every length, so this cannot fail.
        self.items.splice(0..0, values);
        self
    }

    fn insert<I>(&mut self, index: usize, values: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = T>,
    {
        let length = self.items.len();
        if index > length {
            return Err(Error::OutOfRange { index, length });
        }
        self.items.splice(index..index, values);
        Ok(self)
    }

    fn remove(&mut self, index: usize) -> Result<&mut Self> {
        self.take(index)?;
        Ok(self)
    }

    fn take(&mut self, index: usize) -> Result<T> {
        self.check_bounds(index)?;
        Ok(self.items.remove(index))
    }

    fn clear(&mut self) -> &mut Self {
        self.items.clear();
        self
    }
}

impl<T> Transform<T> for Sequence<T> {
    fn map<F>(&mut self, transform: F) -> &mut Self
    where
        F: FnMut(T) -> T,
    {
        let items = mem::take(&mut self.items);
        self.items = items.into_iter().map(transform).collect();
        self
    }

    fn filter<P>(&mut self, mut predicate: P) -> &mut Self
    where
        P: FnMut(&T) -> bool,
    {
        // Rebuilds the backing storage instead of removing in place; the
        // discarded elements drop with the old buffer.
        let items = mem::take(&mut self.items);
        self.items = items.into_iter().filter(|item| predicate(item)).collect();
        self
    }

    fn reduce<F>(&self, combine: F) -> T
    where
        F: FnMut(T, T) -> T,
        T: Clone + Default,
    {
        let mut values = self.items.iter().cloned();
        match values.next() {
            Some(first) => values.fold(first, combine),
            None => T::default(),
        }
    }

    fn for_each<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.items.iter().for_each(visit);
    }
}

impl<T> Search<T> for Sequence<T>
where
    T: PartialEq,
{
    fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    fn index_of(&self, value: &T) -> Option<usize> {
        self.items.iter().position(|item| item == value)
    }
}

impl<T> Arrange<T> for Sequence<T> {
    fn reverse(&mut self) -> &mut Self {
        self.items.reverse();
        self
    }

    fn sort<F>(&mut self, mut less: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.items.sort_unstable_by(|a, b| {
            if less(a, b) {
                Ordering::Less
            } else if less(b, a) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
        self
    }

    fn shuffle<R>(&mut self, rng: &mut R) -> &mut Self
    where
        R: Rng + ?Sized,
    {
        // Fisher-Yates: position i trades places with a uniform pick from
        // [0, i].
        for i in 0..self.items.len() {
            let j = rng.gen_range(0..=i);
            self.items.swap(i, j);
        }
        self
    }

    fn swap(&mut self, i: usize, j: usize) -> Result<&mut Self> {
        self.check_bounds(i)?;
        self.check_bounds(j)?;
        self.items.swap(i, j);
        Ok(self)
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the sequence as a bracket-delimited, space-separated list of the
/// elements' display forms: `[a b c]`, or `[]` when empty.
impl<T> fmt::Display for Sequence<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (position, item) in self.items.iter().enumerate() {
            if position > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    /// Adopts the vector's elements in their given order.
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(items: [T; N]) -> Self {
        Self {
            items: items.into(),
        }
    }
}

impl<T> From<&[T]> for Sequence<T>
where
    T: Clone,
{
    fn from(items: &[T]) -> Self {
        Self {
            items: items.to_vec(),
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            items: Vec::from_iter(iter),
        }
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Sequence<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}
