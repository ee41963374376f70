//! Data segments and their encoding modes.
//!
//! A segment is one typed, pre-encoded chunk of payload. Segments are built through the
//! mode-specific factories and are immutable afterwards; each one owns its bit payload.
use crate::bitbuffer::BitBuffer;
use crate::error::{QrError, Result};
use crate::qrcode::Version;

/// A segment of data in a QR code.
///
/// Supports numeric, alphanumeric, byte, or ECI modes. Segments are immutable and created using
/// factory functions like [`make_numeric`](QrSegment::make_numeric),
/// [`make_alphanumeric`](QrSegment::make_alphanumeric) or [`make_bytes`](QrSegment::make_bytes).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QrSegment {
    mode: QrSegmentMode,
    numchars: usize,
    data: Vec<bool>,
}

impl QrSegment {
    /// Creates a segment for binary data in byte mode.
    pub fn make_bytes(data: &[u8]) -> Self {
        let mut bb = BitBuffer::with_capacity(data.len() * 8);
        bb.append_bytes(data);
        QrSegment::new(QrSegmentMode::Byte, data.len(), bb.into_bits())
    }

    /// Creates a segment for a string of decimal digits in numeric mode.
    ///
    /// Groups of three digits take 10 bits; a trailing group of one or two digits
    /// takes 4 or 7 bits.
    ///
    /// # Errors
    ///
    /// Returns [`QrError::InvalidCharacter`] if `text` contains anything other than `0`–`9`.
    pub fn make_numeric(text: &str) -> Result<Self> {
        let mut bb = BitBuffer::with_capacity(text.len() * 10 / 3 + 1);
        let mut accumdata: u32 = 0;
        let mut accumcount: u8 = 0;
        for (position, c) in text.chars().enumerate() {
            let digit = c.to_digit(10).ok_or(QrError::InvalidCharacter {
                mode: QrSegmentMode::Numeric,
                ch: c,
                position,
            })?;
            accumdata = accumdata * 10 + digit;
            accumcount += 1;
            if accumcount == 3 {
                bb.append_bits(accumdata, 10)?;
                accumdata = 0;
                accumcount = 0;
            }
        }
        if accumcount > 0 {
            bb.append_bits(accumdata, accumcount * 3 + 1)?;
        }
        Ok(QrSegment::new(QrSegmentMode::Numeric, text.len(), bb.into_bits()))
    }

    /// Creates a segment for alphanumeric text.
    ///
    /// Allowed characters: 0–9, A–Z (uppercase), space, `$`, `%`, `*`, `+`, `-`, `.`, `/`, `:`.
    /// Pairs of characters take 11 bits, a trailing single character 6 bits.
    ///
    /// # Errors
    ///
    /// Returns [`QrError::InvalidCharacter`] for any character outside that set.
    pub fn make_alphanumeric(text: &str) -> Result<Self> {
        let mut bb = BitBuffer::with_capacity(text.len() * 11 / 2 + 1);
        let mut accumdata: u32 = 0;
        let mut accumcount: u8 = 0;
        for (position, c) in text.chars().enumerate() {
            let index = alphanumeric_index(c).ok_or(QrError::InvalidCharacter {
                mode: QrSegmentMode::Alphanumeric,
                ch: c,
                position,
            })?;
            accumdata = accumdata * 45 + index;
            accumcount += 1;
            if accumcount == 2 {
                bb.append_bits(accumdata, 11)?;
                accumdata = 0;
                accumcount = 0;
            }
        }
        if accumcount > 0 {
            bb.append_bits(accumdata, 6)?;
        }
        Ok(QrSegment::new(QrSegmentMode::Alphanumeric, text.len(), bb.into_bits()))
    }

    /// Returns the segments needed to encode `text`.
    ///
    /// The whole string is classified as numeric, else alphanumeric, else byte mode, and a
    /// single segment is produced. Empty text yields no segments.
    pub fn make_segments(text: &str) -> Vec<Self> {
        if text.is_empty() {
            return Vec::new();
        }
        let seg = QrSegment::make_numeric(text)
            .or_else(|_| QrSegment::make_alphanumeric(text))
            .unwrap_or_else(|_| QrSegment::make_bytes(text.as_bytes()));
        vec![seg]
    }

    /// Creates a segment representing an Extended Channel Interpretation
    /// (ECI) designator with the given assignment value.
    ///
    /// # Errors
    ///
    /// Returns [`QrError::OutOfRange`] if `assignval` is 1,000,000 or more.
    pub fn make_eci(assignval: u32) -> Result<Self> {
        let mut bb = BitBuffer::with_capacity(24);
        if assignval < 1 << 7 {
            bb.append_bits(assignval, 8)?;
        } else if assignval < 1 << 14 {
            bb.append_bits(0b10, 2)?;
            bb.append_bits(assignval, 14)?;
        } else if assignval < 1_000_000 {
            bb.append_bits(0b110, 3)?;
            bb.append_bits(assignval, 21)?;
        } else {
            return Err(QrError::OutOfRange {
                what: "ECI assignment value",
                value: i64::from(assignval),
            });
        }
        Ok(QrSegment::new(QrSegmentMode::Eci, 0, bb.into_bits()))
    }

    /// Creates a segment from already-encoded bits.
    ///
    /// The character count must agree with the mode and bit length; this is not checked
    /// here, but an oversized count is caught later by [`get_total_bits`](QrSegment::get_total_bits).
    pub fn new(mode: QrSegmentMode, numchars: usize, data: Vec<bool>) -> Self {
        Self {
            mode,
            numchars,
            data,
        }
    }

    pub fn mode(&self) -> QrSegmentMode {
        self.mode
    }

    pub fn num_chars(&self) -> usize {
        self.numchars
    }

    pub fn data(&self) -> &[bool] {
        &self.data
    }

    pub fn bit_len(&self) -> usize {
        self.data.len()
    }

    /// Calculates the number of bits needed to encode the given segments at the given version.
    ///
    /// Returns `None` if a segment has too many characters to fit its length field,
    /// or if the total overflows `usize`.
    pub fn get_total_bits(segs: &[Self], version: Version) -> Option<usize> {
        let mut result: usize = 0;
        for seg in segs {
            let ccbits: u8 = seg.mode.num_char_count_bits(version);
            if let Some(limit) = 1usize.checked_shl(ccbits.into()) {
                if seg.numchars >= limit {
                    return None;
                }
            }
            result = result.checked_add(4 + usize::from(ccbits))?;
            result = result.checked_add(seg.data.len())?;
        }
        Some(result)
    }

    pub fn is_numeric(text: &str) -> bool {
        text.chars().all(|c| c.is_ascii_digit())
    }

    pub fn is_alphanumeric(text: &str) -> bool {
        text.chars().all(|c| ALPHANUMERIC_CHARSET.contains(c))
    }
}

/// The 45 characters of alphanumeric mode, in code order.
pub const ALPHANUMERIC_CHARSET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

fn alphanumeric_index(c: char) -> Option<u32> {
    ALPHANUMERIC_CHARSET
        .find(c)
        .and_then(|i| u32::try_from(i).ok())
}

/// Describes how a segment's data bits are interpreted.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum QrSegmentMode {
    Numeric,
    Alphanumeric,
    Byte,
    Kanji,
    Eci,
}

impl QrSegmentMode {
    /// Returns the 4-bit mode indicator.
    pub fn mode_bits(self) -> u32 {
        use QrSegmentMode::*;
        match self {
            Numeric => 0x1,
            Alphanumeric => 0x2,
            Byte => 0x4,
            Kanji => 0x8,
            Eci => 0x7,
        }
    }

    /// Returns the character count field widths for versions 1–9, 10–26 and 27–40.
    pub fn char_count_widths(self) -> [u8; 3] {
        use QrSegmentMode::*;
        match self {
            Numeric => [10, 12, 14],
            Alphanumeric => [9, 11, 13],
            Byte => [8, 16, 16],
            Kanji => [8, 10, 12],
            Eci => [0, 0, 0],
        }
    }

    /// Returns the bit width of the character count field at the given version.
    pub fn num_char_count_bits(self, ver: Version) -> u8 {
        self.char_count_widths()[usize::from((ver.value() + 7) / 17)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bits_to_u32(bits: &[bool]) -> u32 {
        bits.iter().fold(0, |acc, &b| (acc << 1) | u32::from(b))
    }

    fn decode_numeric(seg: &QrSegment) -> String {
        let mut out = String::new();
        let mut bits = seg.data();
        let mut remaining = seg.num_chars();
        while remaining > 0 {
            let (width, digits) = match remaining {
                1 => (4, 1),
                2 => (7, 2),
                _ => (10, 3),
            };
            let value = bits_to_u32(&bits[..width]);
            out.push_str(&format!("{:0width$}", value, width = digits));
            bits = &bits[width..];
            remaining -= digits;
        }
        assert!(bits.is_empty());
        out
    }

    fn decode_alphanumeric(seg: &QrSegment) -> String {
        let charset: Vec<char> = ALPHANUMERIC_CHARSET.chars().collect();
        let mut out = String::new();
        let mut bits = seg.data();
        let mut remaining = seg.num_chars();
        while remaining > 0 {
            if remaining == 1 {
                out.push(charset[bits_to_u32(&bits[..6]) as usize]);
                bits = &bits[6..];
                remaining -= 1;
            } else {
                let value = bits_to_u32(&bits[..11]) as usize;
                out.push(charset[value / 45]);
                out.push(charset[value % 45]);
                bits = &bits[11..];
                remaining -= 2;
            }
        }
        assert!(bits.is_empty());
        out
    }

    #[test]
    fn test_is_numeric() {
        assert_eq!(QrSegment::is_numeric("1234567890"), true);
        assert_eq!(QrSegment::is_numeric("1234abc"), false);
    }

    #[test]
    fn test_is_alphanumeric() {
        assert_eq!(QrSegment::is_alphanumeric("HELLO WORLD"), true);
        assert_eq!(QrSegment::is_alphanumeric("Hello World"), false);
    }

    #[test]
    fn test_make_numeric_bit_lengths() {
        assert_eq!(QrSegment::make_numeric("").unwrap().bit_len(), 0);
        assert_eq!(QrSegment::make_numeric("9").unwrap().bit_len(), 4);
        assert_eq!(QrSegment::make_numeric("99").unwrap().bit_len(), 7);
        assert_eq!(QrSegment::make_numeric("999").unwrap().bit_len(), 10);
        // "123" -> 10 bits, "45" -> 7 bits
        let seg = QrSegment::make_numeric("12345").unwrap();
        assert_eq!(seg.bit_len(), 17);
        assert_eq!(bits_to_u32(&seg.data()[..10]), 123);
        assert_eq!(bits_to_u32(&seg.data()[10..]), 45);
    }

    #[test]
    fn test_make_numeric_rejects_non_digits() {
        let err = QrSegment::make_numeric("12a4").unwrap_err();
        assert_eq!(
            err,
            QrError::InvalidCharacter {
                mode: QrSegmentMode::Numeric,
                ch: 'a',
                position: 2,
            }
        );
        // Non-ASCII decimal digits are not part of the numeric alphabet.
        assert!(QrSegment::make_numeric("١٢").is_err());
    }

    #[test]
    fn test_make_alphanumeric() {
        let seg = QrSegment::make_alphanumeric("AC-42").unwrap();
        assert_eq!(seg.mode(), QrSegmentMode::Alphanumeric);
        assert_eq!(seg.num_chars(), 5);
        assert_eq!(seg.bit_len(), 11 + 11 + 6);
        // "AC" = 10 * 45 + 12
        assert_eq!(bits_to_u32(&seg.data()[..11]), 462);
        assert!(QrSegment::make_alphanumeric("lower").is_err());
    }

    #[test]
    fn test_make_bytes() {
        let seg = QrSegment::make_bytes(&[0x00, 0xFF]);
        assert_eq!(seg.mode(), QrSegmentMode::Byte);
        assert_eq!(seg.num_chars(), 2);
        assert_eq!(bits_to_u32(seg.data()), 0x00FF);
        assert_eq!(seg.bit_len(), 16);
    }

    #[test]
    fn test_make_eci_widths() {
        assert_eq!(QrSegment::make_eci(0).unwrap().bit_len(), 8);
        assert_eq!(QrSegment::make_eci(127).unwrap().bit_len(), 8);
        let seg = QrSegment::make_eci(128).unwrap();
        assert_eq!(seg.bit_len(), 16);
        assert_eq!(bits_to_u32(&seg.data()[..2]), 0b10);
        let seg = QrSegment::make_eci(999_999).unwrap();
        assert_eq!(seg.bit_len(), 24);
        assert_eq!(bits_to_u32(&seg.data()[..3]), 0b110);
        assert_eq!(bits_to_u32(&seg.data()[3..]), 999_999);
        assert!(QrSegment::make_eci(1_000_000).is_err());
        assert_eq!(seg.mode(), QrSegmentMode::Eci);
        assert_eq!(seg.num_chars(), 0);
    }

    #[test]
    fn test_make_segments_picks_one_mode() {
        assert!(QrSegment::make_segments("").is_empty());
        let modes = |s: &str| -> Vec<QrSegmentMode> {
            QrSegment::make_segments(s).iter().map(QrSegment::mode).collect()
        };
        assert_eq!(modes("0123"), vec![QrSegmentMode::Numeric]);
        assert_eq!(modes("HELLO WORLD"), vec![QrSegmentMode::Alphanumeric]);
        assert_eq!(modes("NAME: ANA, ACCOUNT: 1"), vec![QrSegmentMode::Byte]);
        let segs = QrSegment::make_segments("héllo");
        assert_eq!(segs[0].num_chars(), "héllo".len());
    }

    #[test]
    fn test_char_count_tiers() {
        let v = |n| Version::new(n).unwrap();
        assert_eq!(QrSegmentMode::Numeric.num_char_count_bits(v(1)), 10);
        assert_eq!(QrSegmentMode::Numeric.num_char_count_bits(v(9)), 10);
        assert_eq!(QrSegmentMode::Numeric.num_char_count_bits(v(10)), 12);
        assert_eq!(QrSegmentMode::Byte.num_char_count_bits(v(26)), 16);
        assert_eq!(QrSegmentMode::Alphanumeric.num_char_count_bits(v(27)), 13);
        assert_eq!(QrSegmentMode::Kanji.num_char_count_bits(v(40)), 12);
    }

    #[test]
    fn test_get_total_bits() {
        let v1 = Version::MIN;
        let segs = [QrSegment::make_numeric("12345").unwrap()];
        assert_eq!(QrSegment::get_total_bits(&segs, v1), Some(4 + 10 + 17));
        assert_eq!(QrSegment::get_total_bits(&[], v1), Some(0));
        let eci = [QrSegment::make_eci(3).unwrap()];
        assert_eq!(QrSegment::get_total_bits(&eci, v1), Some(4 + 8));
    }

    #[test]
    fn test_get_total_bits_count_field_overflow() {
        for ver in 1..=40 {
            let version = Version::new(ver).unwrap();
            for mode in [
                QrSegmentMode::Numeric,
                QrSegmentMode::Alphanumeric,
                QrSegmentMode::Byte,
                QrSegmentMode::Kanji,
            ] {
                let limit = 1usize << mode.num_char_count_bits(version);
                let fits = [QrSegment::new(mode, limit - 1, Vec::new())];
                let overflows = [QrSegment::new(mode, limit, Vec::new())];
                assert!(QrSegment::get_total_bits(&fits, version).is_some());
                assert_eq!(QrSegment::get_total_bits(&overflows, version), None);
            }
        }
    }

    proptest! {
        #[test]
        fn numeric_round_trip(text in "[0-9]{0,64}") {
            let seg = QrSegment::make_numeric(&text).unwrap();
            prop_assert_eq!(decode_numeric(&seg), text);
        }

        #[test]
        fn alphanumeric_round_trip(text in "[0-9A-Z $%*+./:-]{0,64}") {
            let seg = QrSegment::make_alphanumeric(&text).unwrap();
            prop_assert_eq!(decode_alphanumeric(&seg), text);
        }
    }
}
