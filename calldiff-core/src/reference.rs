//! Read access to a reference sequence store.
//!
//! Only the read interface lives here; storage and indexing belong to the
//! store implementation.
use crate::errors::ReferenceError;

///
/// Random access to named reference sequences.
///
pub trait ReferenceReader {
    ///
    /// Retrieve the bases of `contig` in `start..end`.
    ///
    /// # Arguments
    ///
    /// * `contig` - name of the sequence
    /// * `start` - 0-based start of the range (inclusive)
    /// * `end` - 0-based end of the range (exclusive)
    ///
    /// # Returns
    ///
    /// The substring, or an error if the contig is unknown, the range is
    /// empty or out of bounds, or the underlying store fails.
    ///
    fn get(&self, contig: &str, start: usize, end: usize) -> Result<String, ReferenceError>;
}

///
/// Hands out scoped access to a [`ReferenceReader`].
///
/// The reader given to `f` lives only for that call; whatever it holds
/// (open files, locks, maps) is released when `read` returns, on success or
/// error alike.
///
pub trait ReferenceProvider {
    fn read<T, F>(&self, f: F) -> Result<T, ReferenceError>
    where
        F: FnOnce(&dyn ReferenceReader) -> Result<T, ReferenceError>;
}

/// Check `start..end` against a sequence of `length` bases.
pub fn check_range(
    contig: &str,
    start: usize,
    end: usize,
    length: usize,
) -> Result<(), ReferenceError> {
    if start >= end || end > length {
        return Err(ReferenceError::InvalidRange {
            contig: contig.to_string(),
            start,
            end,
            length,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::*;

    #[rstest]
    #[case(0, 1, 1)]
    #[case(0, 10, 10)]
    #[case(4, 6, 10)]
    fn test_valid_range(#[case] start: usize, #[case] end: usize, #[case] length: usize) {
        assert!(check_range("chr1", start, end, length).is_ok());
    }

    #[rstest]
    #[case::empty(3, 3, 10)]
    #[case::reversed(5, 2, 10)]
    #[case::past_end(8, 11, 10)]
    #[case::empty_sequence(0, 1, 0)]
    fn test_invalid_range(#[case] start: usize, #[case] end: usize, #[case] length: usize) {
        let err = check_range("chr1", start, end, length).unwrap_err();
        assert!(matches!(err, ReferenceError::InvalidRange { .. }));
    }
}
