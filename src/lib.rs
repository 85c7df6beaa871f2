//! `sequent` implements a generic, chainable sequence container. It is a
//! wrapper around a contiguous growable buffer with a fluent method surface:
//! appending, prepending, inserting, removing, mapping, filtering, reducing,
//! searching, sorting, shuffling, reversing and rendering, all callable in a
//! single left-to-right chain.
//!
//! The API is split into small capability traits (see
//! [`sequence::prelude`]); importing the prelude brings the whole surface
//! into scope:
//!
//! ```
//! use sequent::sequence::prelude::*;
//!
//! fn example() -> Result<()> {
//!     let mut sequence = sequent::sequence![3, 1, 2];
//!
//!     sequence
//!         .sort(|a, b| a < b)
//!         .append([4])
//!         .set(0, 10)?
//!         .reverse();
//!
//!     assert_eq!(sequence.as_slice(), &[4, 3, 2, 10]);
//!     Ok(())
//! }
//!
//! example().unwrap();
//! ```

/// Builds a [`Sequence`] from a comma-separated list of values, in the same
/// spirit as `vec!`.
///
/// ```
/// let sequence = sequent::sequence!["a", "b", "c"];
/// assert_eq!(sequence.to_string(), "[a b c]");
///
/// let empty: sequent::Sequence<i32> = sequent::sequence![];
/// assert_eq!(empty.to_string(), "[]");
/// ```
#[macro_export]
macro_rules! sequence {
    () => {
        $crate::sequence::Sequence::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::sequence::Sequence::from(vec![$($value),+])
    };
}

pub mod sequence;

pub use sequence::{Error, Result, Sequence};
