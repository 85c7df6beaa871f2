/// The single recoverable failure a [`Sequence`](super::Sequence) can
/// report: an index outside the valid bound of the attempted operation.
///
/// Bounds are checked before any mutation begins, so an `Err` always leaves
/// the sequence exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("index {index} out of bounds for sequence of length {length}")]
    OutOfRange { index: usize, length: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
