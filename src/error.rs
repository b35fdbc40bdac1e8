use thiserror::Error;

/// Broad category of a [`SortError`].
///
/// Every failure the sorter can report is a caller mistake (a bad radix or a
/// key function producing keys outside the supported domain), so there is a
/// single kind. Retrying with the same input always fails the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
}

/// Errors returned when a sort is rejected. The input is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("radix must be at least 2, got {radix}")]
    InvalidRadix { radix: usize },

    #[error("key {key} of element {index} is negative")]
    NegativeKey { index: usize, key: i128 },

    #[error("key {key} of element {index} does not fit in 64 bits")]
    KeyOutOfRange { index: usize, key: i128 },

    #[error("key range {min}..={max} does not fit in 64 bits")]
    KeyRangeOverflow { min: i128, max: i128 },

    #[error("key {key} needs more than {digits} digits in radix {radix}")]
    KeyExceedsDigitWidth { key: u64, digits: usize, radix: usize },
}

impl SortError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SortError::InvalidRadix { .. }
            | SortError::NegativeKey { .. }
            | SortError::KeyOutOfRange { .. }
            | SortError::KeyRangeOverflow { .. }
            | SortError::KeyExceedsDigitWidth { .. } => ErrorKind::InvalidArgument,
        }
    }

    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_all_errors_are_invalid_argument() {
        let errors = vec![
            SortError::InvalidRadix { radix: 1 },
            SortError::NegativeKey { index: 0, key: -1 },
            SortError::KeyOutOfRange {
                index: 3,
                key: u64::MAX as i128 + 1,
            },
            SortError::KeyRangeOverflow {
                min: i64::MIN as i128,
                max: u64::MAX as i128,
            },
            SortError::KeyExceedsDigitWidth {
                key: 1000,
                digits: 2,
                radix: 10,
            },
        ];

        for e in errors {
            assert_eq!(e.kind(), ErrorKind::InvalidArgument);
            assert!(e.is_invalid_argument());
        }
    }

    #[test]
    pub fn test_messages() {
        assert_eq!(
            SortError::InvalidRadix { radix: 1 }.to_string(),
            "radix must be at least 2, got 1"
        );
        assert_eq!(
            SortError::NegativeKey { index: 0, key: -1 }.to_string(),
            "key -1 of element 0 is negative"
        );
    }
}
