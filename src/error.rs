//! Error types for QR symbol encoding.

use thiserror::Error;

use crate::segment::QrSegmentMode;

/// Main error type for encoding operations.
///
/// Every failure is detected before a symbol is returned, so an `Err` never
/// leaves a partially built [`QrCode`](crate::QrCode) behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QrError {
    /// The text contains a character outside the alphabet of the requested mode
    #[error("Character {ch:?} at position {position} cannot be encoded in {mode:?} mode")]
    InvalidCharacter {
        mode: QrSegmentMode,
        ch: char,
        position: usize,
    },

    /// A numeric argument lies outside its legal range
    #[error("{what} out of range: {value}")]
    OutOfRange { what: &'static str, value: i64 },

    /// A value needs more bits than the field it is appended to
    #[error("Value {value:#x} does not fit in {len} bits")]
    ValueTooWide { value: u32, len: u8 },

    /// The minimum version is larger than the maximum version
    #[error("Invalid version range: {min} > {max}")]
    InvalidVersionRange { min: u8, max: u8 },

    /// The payload does not fit in any allowed version
    #[error(transparent)]
    DataTooLong(#[from] DataTooLong),

    /// Account number is not exactly ten digits
    #[error("Invalid account number: {0}")]
    InvalidAccountNumber(String),

    /// Holder name is empty, too long or has unsupported characters
    #[error("Invalid holder name: {0}")]
    InvalidHolderName(String),
}

/// Coarse classification of a [`QrError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Payload characters outside the selected alphabet.
    InputEncoding,
    /// Version, mask, ECI or bit-length argument outside its range.
    Range,
    /// Payload too large even at the largest allowed version.
    CapacityExceeded,
}

impl QrError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCharacter { .. }
            | Self::InvalidAccountNumber(_)
            | Self::InvalidHolderName(_) => ErrorKind::InputEncoding,
            Self::OutOfRange { .. }
            | Self::ValueTooWide { .. }
            | Self::InvalidVersionRange { .. } => ErrorKind::Range,
            Self::DataTooLong(_) => ErrorKind::CapacityExceeded,
        }
    }
}

/// Error type for when data exceeds QR code capacity.
///
/// Ways to handle this error include:
///
/// - Decrease the error correction level if it was greater than `QrCodeEcc::Low`.
/// - Increase the maxversion argument if it was less than `Version::MAX`.
/// - Change the text or binary data to be shorter.
/// - Change the text to fit the character set of a denser segment mode (e.g. alphanumeric).
/// - Propagate the error upward to the caller/user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataTooLong {
    /// A segment's character count does not fit its count field.
    #[error("Segment too long")]
    SegmentTooLong,
    /// Data length exceeds capacity: (used bits, capacity bits).
    #[error("Data length = {0} bits, Max capacity = {1} bits")]
    DataOverCapacity(usize, usize),
}

/// Result type alias for encoding operations
pub type Result<T> = std::result::Result<T, QrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QrError::DataTooLong(DataTooLong::DataOverCapacity(200, 152));
        assert_eq!(err.to_string(), "Data length = 200 bits, Max capacity = 152 bits");

        let err = QrError::OutOfRange { what: "Mask", value: 9 };
        assert_eq!(err.to_string(), "Mask out of range: 9");

        let err = QrError::InvalidCharacter {
            mode: QrSegmentMode::Numeric,
            ch: 'x',
            position: 3,
        };
        assert_eq!(
            err.to_string(),
            "Character 'x' at position 3 cannot be encoded in Numeric mode"
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(
            QrError::from(DataTooLong::SegmentTooLong).kind(),
            ErrorKind::CapacityExceeded
        );
        assert_eq!(QrError::ValueTooWide { value: 4, len: 2 }.kind(), ErrorKind::Range);
        assert_eq!(
            QrError::InvalidVersionRange { min: 5, max: 2 }.kind(),
            ErrorKind::Range
        );
        assert_eq!(
            QrError::InvalidAccountNumber("12".to_string()).kind(),
            ErrorKind::InputEncoding
        );
    }
}
