//! One-stop import for the whole sequence surface.

pub use {
    crate::sequence::error::{Error, Result},
    crate::sequence::traits::{Access, Arrange, Edit, Length, Search, Transform},
    crate::sequence::Sequence,
};
