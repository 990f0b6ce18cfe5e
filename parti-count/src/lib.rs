//! How many ways does a number split into parts drawn from a set of
//! positive addends? Parts may repeat, order never matters.

use thiserror::Error;

pub mod bounded;
pub mod recursive;
pub mod tabular;

/// one element of the addend set, strictly positive once validated
pub type Addend = u64;
/// number of distinct ways to reach a target sum
pub type Count = u64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PartitionError {
    /// a zero addend would make the fill recurrence reference its own cell
    /// (`c - 0 = c`), the count is undefined for it
    #[error("addend at index {index} is zero, every addend must be positive")]
    ZeroAddend { index: usize },
}

/// runs before any table or path is allocated
pub(crate) fn ensure_positive(addends: &[Addend]) -> Result<(), PartitionError> {
    match addends.iter().position(|addend| *addend == 0) {
        Some(index) => Err(PartitionError::ZeroAddend { index }),
        None => Ok(()),
    }
}
