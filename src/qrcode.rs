//! QR code symbol construction.
//!
//! Turns segments into a finished module matrix following the QR Code Model 2 rules:
//! version and ECC level selection, bitstream assembly, Reed-Solomon error correction and
//! interleaving, function pattern drawing, and mask selection by penalty score.

use tracing::{debug, trace};

use crate::bitbuffer::{get_bit, BitBuffer};
use crate::error::{DataTooLong, QrError, Result};
use crate::options::EncodeOptions;
use crate::penalty;
use crate::reed_solomon::ReedSolomonGenerator;
use crate::segment::QrSegment;

/// A QR Code symbol, representing a square grid of dark and light modules.
///
/// This struct supports QR Code Model 2, covering versions 1 to 40, all four error correction levels,
/// and the numeric, alphanumeric, byte and ECI encoding modes. Instances are immutable after creation.
///
/// # Creation
///
/// - High-level: Use [`encode_text`](QrCode::encode_text) or [`encode_binary`](QrCode::encode_binary).
/// - Mid-level: Use [`encode_segments`](QrCode::encode_segments),
///   [`encode_segments_advanced`](QrCode::encode_segments_advanced) or
///   [`encode_segments_with`](QrCode::encode_segments_with).
/// - Low-level: Build the data codewords with
///   [`encode_segments_to_codewords`](QrCode::encode_segments_to_codewords) and finish with
///   [`encode_codewords`](QrCode::encode_codewords).
///
/// # Example
///
/// ```rust
/// use qrsymbol::{QrCode, QrCodeEcc};
///
/// let qr = QrCode::encode_text("Hello, World!", QrCodeEcc::Low).unwrap();
///
/// println!("Version: {}", qr.version().value());
/// for y in 0..qr.size() {
///     let row: String = (0..qr.size())
///         .map(|x| if qr.get_module(x, y) { '#' } else { ' ' })
///         .collect();
///     println!("{row}");
/// }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct QrCode {
    // This QR Code's version, in the range [1, 40].
    version: Version,

    // The width and height of this QR Code, measured in modules, between
    // 21 and 177 (inclusive). This is equal to version * 4 + 17.
    size: i32,

    // The error correction level used in this QR Code.
    errorcorrectionlevel: QrCodeEcc,

    // The index of the mask pattern used in this QR Code, in the range [0, 7].
    mask: Mask,

    // The modules of this QR Code (false = light, true = dark), row-major.
    // Immutable after constructor finishes. Accessed through get_module().
    modules: Vec<bool>,
}

impl QrCode {
    /// Encodes a text string into a QR code.
    ///
    /// The whole text is encoded in a single segment (numeric, alphanumeric or byte mode,
    /// whichever fits first). The smallest fitting version is chosen, the error correction
    /// level may be boosted, and the mask is selected automatically.
    ///
    /// # Errors
    ///
    /// Returns [`QrError::DataTooLong`] if the text does not fit in a version 40 symbol at
    /// the requested level.
    pub fn encode_text(text: &str, ecl: QrCodeEcc) -> Result<Self> {
        let segs: Vec<QrSegment> = QrSegment::make_segments(text);
        QrCode::encode_segments(&segs, ecl)
    }

    /// Encodes binary data into a QR code using a single byte-mode segment.
    ///
    /// # Errors
    ///
    /// Returns [`QrError::DataTooLong`] if the data does not fit in a version 40 symbol at
    /// the requested level.
    pub fn encode_binary(data: &[u8], ecl: QrCodeEcc) -> Result<Self> {
        let segs = [QrSegment::make_bytes(data)];
        QrCode::encode_segments(&segs, ecl)
    }

    /// Encodes the given segments with default parameters: all versions, automatic mask,
    /// and ECC boosting.
    pub fn encode_segments(segs: &[QrSegment], ecl: QrCodeEcc) -> Result<Self> {
        QrCode::encode_segments_advanced(segs, ecl, Version::MIN, Version::MAX, None, true)
    }

    /// Encodes the given segments with parameters taken from `options`.
    pub fn encode_segments_with(
        segs: &[QrSegment],
        ecl: QrCodeEcc,
        options: &EncodeOptions,
    ) -> Result<Self> {
        QrCode::encode_segments_advanced(
            segs,
            ecl,
            options.min_version,
            options.max_version,
            options.mask,
            options.boost_ecl,
        )
    }

    /// Encodes the given segments with explicit parameters.
    ///
    /// The smallest possible QR Code version within `[minversion, maxversion]` is
    /// automatically chosen. If `boostecl` is `true`, the ECC level of the result may be
    /// higher than `ecl` if it can be done without increasing the version. The `mask` is
    /// either `None` for automatic selection (slower) or a fixed pattern.
    ///
    /// # Errors
    ///
    /// - [`QrError::InvalidVersionRange`] if `minversion > maxversion`.
    /// - [`QrError::DataTooLong`] if the segments do not fit in any version of the range.
    pub fn encode_segments_advanced(
        segs: &[QrSegment],
        ecl: QrCodeEcc,
        minversion: Version,
        maxversion: Version,
        mask: Option<Mask>,
        boostecl: bool,
    ) -> Result<Self> {
        let (datacodewords, ecl, version) =
            QrCode::encode_segments_to_codewords(segs, ecl, minversion, maxversion, boostecl)?;
        QrCode::encode_codewords(version, ecl, &datacodewords, mask)
    }

    /// Returns the data codewords for the given segments, together with the error
    /// correction level and version they were laid out for.
    ///
    /// This is the first half of [`encode_segments_advanced`](QrCode::encode_segments_advanced):
    /// version selection, ECC boosting, segment concatenation, terminator and padding.
    pub fn encode_segments_to_codewords(
        segs: &[QrSegment],
        mut ecl: QrCodeEcc,
        minversion: Version,
        maxversion: Version,
        boostecl: bool,
    ) -> Result<(Vec<u8>, QrCodeEcc, Version)> {
        if minversion > maxversion {
            return Err(QrError::InvalidVersionRange {
                min: minversion.value(),
                max: maxversion.value(),
            });
        }

        // Find the minimal version number to use
        let mut version: Version = minversion;
        let datausedbits: usize = loop {
            let datacapacitybits: usize = QrCode::num_data_codewords(version, ecl) * 8;
            let dataused: Option<usize> = QrSegment::get_total_bits(segs, version);
            match dataused {
                Some(n) if n <= datacapacitybits => break n,
                _ if version >= maxversion => {
                    return Err(match dataused {
                        None => DataTooLong::SegmentTooLong,
                        Some(n) => DataTooLong::DataOverCapacity(n, datacapacitybits),
                    }
                    .into());
                }
                _ => version = version.next(),
            }
        };

        // Increase the error correction level while the data still fits in the current version number
        if boostecl {
            for newecl in [QrCodeEcc::Medium, QrCodeEcc::Quartile, QrCodeEcc::High] {
                if newecl > ecl && datausedbits <= QrCode::num_data_codewords(version, newecl) * 8
                {
                    ecl = newecl;
                }
            }
        }
        debug!(
            "Selected version {} at {:?}: {} data bits",
            version.value(),
            ecl,
            datausedbits
        );

        // Concatenate all segments to create the data bit string
        let datacapacitybits: usize = QrCode::num_data_codewords(version, ecl) * 8;
        let mut bb = BitBuffer::with_capacity(datacapacitybits);
        for seg in segs {
            bb.append_bits(seg.mode().mode_bits(), 4)?;
            let numchars = u32::try_from(seg.num_chars()).map_err(|_| DataTooLong::SegmentTooLong)?;
            bb.append_bits(numchars, seg.mode().num_char_count_bits(version))?;
            bb.extend_from_bits(seg.data());
        }
        debug_assert_eq!(bb.len(), datausedbits);

        // Add terminator and pad up to a byte if applicable
        let numzerobits: usize = core::cmp::min(4, datacapacitybits - bb.len());
        bb.append_bits(0, numzerobits as u8)?;
        let numzerobits: usize = bb.len().wrapping_neg() & 7;
        bb.append_bits(0, numzerobits as u8)?;
        debug_assert_eq!(bb.len() % 8, 0);

        // Pad with alternating bytes until data capacity is reached
        for &padbyte in [0xEC, 0x11].iter().cycle() {
            if bb.len() >= datacapacitybits {
                break;
            }
            bb.append_bits(padbyte, 8)?;
        }

        Ok((bb.to_bytes(), ecl, version))
    }

    /// Creates a new QR Code with the given version number,
    /// error correction level, data codeword bytes, and mask.
    ///
    /// This is a low-level API that most users should not use directly.
    /// A mid-level API is [`encode_segments_advanced`](QrCode::encode_segments_advanced).
    ///
    /// # Errors
    ///
    /// Returns [`QrError::OutOfRange`] if `datacodewords` does not hold exactly
    /// [`num_data_codewords`](QrCode::num_data_codewords) bytes.
    pub fn encode_codewords(
        version: Version,
        ecl: QrCodeEcc,
        datacodewords: &[u8],
        mask: Option<Mask>,
    ) -> Result<Self> {
        let expected = QrCode::num_data_codewords(version, ecl);
        if datacodewords.len() != expected {
            return Err(QrError::OutOfRange {
                what: "Data codeword count",
                value: datacodewords.len() as i64,
            });
        }

        // Compute ECC, draw modules
        let allcodewords: Vec<u8> = QrCode::add_ecc_and_interleave(datacodewords, version, ecl)?;
        let mut canvas = Canvas::new(version);
        canvas.draw_function_patterns(ecl);
        canvas.draw_codewords(&allcodewords);

        // Do masking
        let mask: Mask = match mask {
            Some(mask) => mask,
            None => canvas.choose_mask(ecl),
        };
        canvas.apply_mask(mask);
        canvas.draw_format_bits(ecl, mask);

        Ok(Self {
            version,
            size: version.size(),
            errorcorrectionlevel: ecl,
            mask,
            modules: canvas.into_modules(),
        })
    }

    /// Returns this QR Code's version, in the range [1, 40].
    pub fn version(&self) -> Version {
        self.version
    }

    /// Returns this QR Code's size, in the range [21, 177].
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Returns this QR Code's error correction level.
    pub fn error_correction_level(&self) -> QrCodeEcc {
        self.errorcorrectionlevel
    }

    /// Returns this QR Code's mask, in the range [0, 7].
    pub fn mask(&self) -> Mask {
        self.mask
    }

    /// Returns the color of the module at the given coordinates.
    ///
    /// Returns `true` for dark modules and `false` for light modules. Coordinates outside the QR
    /// code's bounds return `false`.
    ///
    /// # Arguments
    ///
    /// * `x` - X-coordinate (0 is left).
    /// * `y` - Y-coordinate (0 is top).
    pub fn get_module(&self, x: i32, y: i32) -> bool {
        let range = 0..self.size;
        range.contains(&x) && range.contains(&y) && self.modules[(y * self.size + x) as usize]
    }

    #[cfg(test)]
    pub(crate) fn penalty_score(&self) -> i32 {
        penalty::score(&self.modules, self.size)
    }

    // Splits the data into blocks, appends each block's ECC codewords,
    // and interleaves the blocks into one codeword sequence.
    fn add_ecc_and_interleave(data: &[u8], ver: Version, ecl: QrCodeEcc) -> Result<Vec<u8>> {
        debug_assert_eq!(data.len(), QrCode::num_data_codewords(ver, ecl));

        // Calculate parameter numbers
        let numblocks: usize = QrCode::table_get(&NUM_ERROR_CORRECTION_BLOCKS, ver, ecl);
        let blockecclen: usize = QrCode::table_get(&ECC_CODEWORDS_PER_BLOCK, ver, ecl);
        let rawcodewords: usize = QrCode::num_raw_data_modules(ver) / 8;
        let numshortblocks: usize = numblocks - rawcodewords % numblocks;
        let shortblocklen: usize = rawcodewords / numblocks;

        // Split data into blocks and append ECC to each block
        let rs = ReedSolomonGenerator::new(blockecclen)?;
        let mut blocks = Vec::<Vec<u8>>::with_capacity(numblocks);
        let mut k: usize = 0;
        for i in 0..numblocks {
            let datlen: usize = shortblocklen - blockecclen + usize::from(i >= numshortblocks);
            let mut dat = data[k..k + datlen].to_vec();
            k += datlen;
            let ecc: Vec<u8> = rs.compute_remainder(&dat);
            if i < numshortblocks {
                dat.push(0);
            }
            dat.extend_from_slice(&ecc);
            blocks.push(dat);
        }
        debug_assert_eq!(k, data.len());

        // Interleave (not concatenate) the bytes from every block into a single sequence
        let mut result = Vec::<u8>::with_capacity(rawcodewords);
        for i in 0..=shortblocklen {
            for (j, block) in blocks.iter().enumerate() {
                // Skip the padding byte in short blocks
                if i != shortblocklen - blockecclen || j >= numshortblocks {
                    result.push(block[i]);
                }
            }
        }
        debug_assert_eq!(result.len(), rawcodewords);
        Ok(result)
    }

    /// Returns the number of data bits that can be stored in a QR Code of the given version
    /// number, after all function modules are excluded. This includes remainder bits, so it
    /// might not be a multiple of 8. The result is in the range [208, 29648].
    pub fn num_raw_data_modules(ver: Version) -> usize {
        let ver = usize::from(ver.value());
        let mut result: usize = (16 * ver + 128) * ver + 64;
        if ver >= 2 {
            let numalign: usize = ver / 7 + 2;
            result -= (25 * numalign - 10) * numalign - 55;
            if ver >= 7 {
                result -= 36;
            }
        }
        debug_assert!((208..=29648).contains(&result));
        result
    }

    /// Returns the number of 8-bit data (i.e. not error correction) codewords contained in any
    /// QR Code of the given version number and error correction level, with remainder bits discarded.
    pub fn num_data_codewords(ver: Version, ecl: QrCodeEcc) -> usize {
        QrCode::num_raw_data_modules(ver) / 8
            - QrCode::table_get(&ECC_CODEWORDS_PER_BLOCK, ver, ecl)
                * QrCode::table_get(&NUM_ERROR_CORRECTION_BLOCKS, ver, ecl)
    }

    // Returns an entry from the given table based on the given values.
    fn table_get(table: &'static [[i8; 41]; 4], ver: Version, ecl: QrCodeEcc) -> usize {
        table[ecl.ordinal()][usize::from(ver.value())] as usize
    }
}

/// Scratch state used while a symbol is being drawn.
///
/// `isfunction` marks the modules that belong to function patterns; it is dropped by
/// [`into_modules`](Canvas::into_modules) once the final mask is applied.
struct Canvas {
    version: Version,
    size: i32,
    modules: Vec<bool>,
    isfunction: Vec<bool>,
}

impl Canvas {
    fn new(version: Version) -> Self {
        let size = version.size();
        let len = (size * size) as usize;
        Self {
            version,
            size,
            modules: vec![false; len],
            isfunction: vec![false; len],
        }
    }

    fn into_modules(self) -> Vec<bool> {
        self.modules
    }

    fn index(&self, x: i32, y: i32) -> usize {
        debug_assert!((0..self.size).contains(&x) && (0..self.size).contains(&y));
        (y * self.size + x) as usize
    }

    fn set_function_module(&mut self, x: i32, y: i32, isdark: bool) {
        let i = self.index(x, y);
        self.modules[i] = isdark;
        self.isfunction[i] = true;
    }

    // Draws timing, finder and alignment patterns, plus placeholder format and version bits.
    fn draw_function_patterns(&mut self, ecl: QrCodeEcc) {
        let size: i32 = self.size;
        for i in 0..size {
            self.set_function_module(6, i, i % 2 == 0);
            self.set_function_module(i, 6, i % 2 == 0);
        }

        self.draw_finder_pattern(3, 3);
        self.draw_finder_pattern(size - 4, 3);
        self.draw_finder_pattern(3, size - 4);

        // Draw numerous alignment patterns, skipping the three finder corners
        let alignpatpos: Vec<i32> = self.alignment_pattern_positions();
        let numalign: usize = alignpatpos.len();
        for i in 0..numalign {
            for j in 0..numalign {
                if (i == 0 && j == 0) || (i == 0 && j == numalign - 1) || (i == numalign - 1 && j == 0)
                {
                    continue;
                }
                self.draw_alignment_pattern(alignpatpos[i], alignpatpos[j]);
            }
        }

        // Dummy mask value; overwritten once the mask is known
        self.draw_format_bits(ecl, Mask(0));
        self.draw_version();
    }

    // Draws a 9*9 finder pattern including the border separator,
    // with the center module at (x, y). Modules can be out of bounds.
    fn draw_finder_pattern(&mut self, x: i32, y: i32) {
        for dy in -4..=4 {
            for dx in -4..=4 {
                let xx: i32 = x + dx;
                let yy: i32 = y + dy;
                if (0..self.size).contains(&xx) && (0..self.size).contains(&yy) {
                    let dist: i32 = dx.abs().max(dy.abs()); // Chebyshev/infinity norm
                    self.set_function_module(xx, yy, dist != 2 && dist != 4);
                }
            }
        }
    }

    // Draws a 5*5 alignment pattern, with the center module at (x, y).
    fn draw_alignment_pattern(&mut self, x: i32, y: i32) {
        for dy in -2..=2 {
            for dx in -2..=2 {
                self.set_function_module(x + dx, y + dy, dx.abs().max(dy.abs()) != 1);
            }
        }
    }

    // Draws two copies of the format bits (with its own error correction code)
    // based on the given ECC level and mask, plus the always-dark module.
    fn draw_format_bits(&mut self, ecl: QrCodeEcc, mask: Mask) {
        let bits: u32 = {
            let data = u32::from((ecl.format_bits() << 3) | mask.value());
            let mut rem: u32 = data;
            for _ in 0..10 {
                rem = (rem << 1) ^ ((rem >> 9) * 0x537);
            }
            ((data << 10) | rem) ^ 0x5412
        };
        debug_assert_eq!(bits >> 15, 0);

        // Draw first copy
        for i in 0..6 {
            self.set_function_module(8, i, get_bit(bits, i as u8));
        }
        self.set_function_module(8, 7, get_bit(bits, 6));
        self.set_function_module(8, 8, get_bit(bits, 7));
        self.set_function_module(7, 8, get_bit(bits, 8));
        for i in 9..15 {
            self.set_function_module(14 - i, 8, get_bit(bits, i as u8));
        }

        // Draw second copy
        let size: i32 = self.size;
        for i in 0..8 {
            self.set_function_module(size - 1 - i, 8, get_bit(bits, i as u8));
        }
        for i in 8..15 {
            self.set_function_module(8, size - 15 + i, get_bit(bits, i as u8));
        }
        self.set_function_module(8, size - 8, true); // Always dark
    }

    // Draws two copies of the version bits (with its own error correction code),
    // if version is 7 or greater.
    fn draw_version(&mut self) {
        let ver = u32::from(self.version.value());
        if ver < 7 {
            return;
        }
        let bits: u32 = {
            let mut rem: u32 = ver;
            for _ in 0..12 {
                rem = (rem << 1) ^ ((rem >> 11) * 0x1F25);
            }
            (ver << 12) | rem
        };
        debug_assert_eq!(bits >> 18, 0);

        for i in 0..18 {
            let bit: bool = get_bit(bits, i as u8);
            let a: i32 = self.size - 11 + i % 3;
            let b: i32 = i / 3;
            self.set_function_module(a, b, bit);
            self.set_function_module(b, a, bit);
        }
    }

    // Draws the given sequence of 8-bit codewords (data and error correction) onto the
    // data area, in the zigzag order of two-column strips from the bottom right.
    fn draw_codewords(&mut self, data: &[u8]) {
        debug_assert_eq!(
            data.len(),
            QrCode::num_raw_data_modules(self.version) / 8,
            "Illegal argument"
        );
        let size: i32 = self.size;
        let mut i: usize = 0; // Bit index into the data
        let mut right: i32 = size - 1;
        while right >= 1 {
            if right == 6 {
                right = 5;
            }
            for vert in 0..size {
                for j in 0..2 {
                    let x: i32 = right - j;
                    let upward: bool = (right + 1) & 2 == 0;
                    let y: i32 = if upward { size - 1 - vert } else { vert };
                    let idx = self.index(x, y);
                    if !self.isfunction[idx] && i < data.len() * 8 {
                        self.modules[idx] = get_bit(data[i >> 3].into(), 7 - (i & 7) as u8);
                        i += 1;
                    }
                    // Any remainder bits (0 to 7) stay light
                }
            }
            right -= 2;
        }
        debug_assert_eq!(i, data.len() * 8);
    }

    // XORs the data modules with the given mask pattern. Calling it twice with the
    // same mask restores the original modules.
    fn apply_mask(&mut self, mask: Mask) {
        for y in 0..self.size {
            for x in 0..self.size {
                let idx = self.index(x, y);
                if !self.isfunction[idx] && mask.applies_at(x, y) {
                    self.modules[idx] = !self.modules[idx];
                }
            }
        }
    }

    // Tries every mask and returns the one with the lowest penalty; earlier masks win ties.
    fn choose_mask(&mut self, ecl: QrCodeEcc) -> Mask {
        let mut best = Mask(0);
        let mut minpenalty = i32::MAX;
        for i in 0u8..8 {
            let candidate = Mask(i);
            self.apply_mask(candidate);
            self.draw_format_bits(ecl, candidate);
            let penalty: i32 = penalty::score(&self.modules, self.size);
            trace!("Mask {} penalty {}", i, penalty);
            if penalty < minpenalty {
                best = candidate;
                minpenalty = penalty;
            }
            self.apply_mask(candidate); // Undoes the mask due to XOR
        }
        debug!("Chose mask {} with penalty {}", best.value(), minpenalty);
        best
    }

    // Returns an ascending list of positions of alignment patterns for this version number.
    // Each position is in the range [0,177), and are used on both the x and y axes.
    fn alignment_pattern_positions(&self) -> Vec<i32> {
        let ver = i32::from(self.version.value());
        if ver == 1 {
            return Vec::new();
        }
        let numalign: i32 = ver / 7 + 2;
        let step: i32 = if ver == 32 {
            26
        } else {
            (ver * 4 + numalign * 2 + 1) / (numalign * 2 - 2) * 2
        };
        let mut result: Vec<i32> = (0..numalign - 1)
            .map(|i| self.size - 7 - i * step)
            .collect();
        result.push(6);
        result.reverse();
        result
    }
}

// Error correction codewords per block, indexed by [ecl][version].
static ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
    // Version: (note that index 0 is for padding, and is set to an illegal value)
    //0,  1,  2,  3,  4,  5,  6,  7,  8,  9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40    Error correction level
    [
        -1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28, 30,
        30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        -1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        -1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30, 30,
        30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        -1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24, 30,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

// Number of error correction blocks, indexed by [ecl][version].
static NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
    // Version: (note that index 0 is for padding, and is set to an illegal value)
    //0, 1, 2, 3, 4, 5, 6, 7, 8, 9,10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40    Error correction level
    [
        -1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        -1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        -1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27, 29,
        34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        -1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32, 35,
        37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

/// Error correction level for a QR code.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QrCodeEcc {
    /// Tolerates ~7% erroneous codewords.
    Low,
    /// Tolerates ~15% erroneous codewords.
    Medium,
    /// Tolerates ~25% erroneous codewords.
    Quartile,
    /// Tolerates ~30% erroneous codewords.
    High,
}

impl QrCodeEcc {
    // Returns an unsigned 2-bit integer (in the range 0 to 3).
    fn ordinal(self) -> usize {
        use QrCodeEcc::*;
        match self {
            Low => 0,
            Medium => 1,
            Quartile => 2,
            High => 3,
        }
    }

    // Returns an unsigned 2-bit integer (in the range 0 to 3).
    fn format_bits(self) -> u8 {
        use QrCodeEcc::*;
        match self {
            Low => 1,
            Medium => 0,
            Quartile => 3,
            High => 2,
        }
    }
}

/// A QR code version (1–40).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Version(u8);

impl Version {
    /// The minimum version number supported in the QR Code Model 2 standard.
    pub const MIN: Version = Version(1);

    /// The maximum version number supported in the QR Code Model 2 standard.
    pub const MAX: Version = Version(40);

    /// Creates a version object from the given number.
    ///
    /// # Errors
    ///
    /// Returns [`QrError::OutOfRange`] if the number is outside the range [1, 40].
    pub fn new(ver: u8) -> Result<Self> {
        if (Version::MIN.value()..=Version::MAX.value()).contains(&ver) {
            Ok(Self(ver))
        } else {
            Err(QrError::OutOfRange {
                what: "Version number",
                value: i64::from(ver),
            })
        }
    }

    /// Returns the value, which is in the range [1, 40].
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the side length of a symbol of this version, in modules.
    pub const fn size(self) -> i32 {
        self.0 as i32 * 4 + 17
    }

    // Callers check against MAX first.
    fn next(self) -> Self {
        debug_assert!(self < Version::MAX);
        Self(self.0 + 1)
    }
}

impl TryFrom<u8> for Version {
    type Error = QrError;

    fn try_from(ver: u8) -> Result<Self> {
        Version::new(ver)
    }
}

impl From<Version> for u8 {
    fn from(ver: Version) -> u8 {
        ver.value()
    }
}

/// A mask pattern (0–7).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Mask(u8);

impl Mask {
    /// Creates a mask object from the given number.
    ///
    /// # Errors
    ///
    /// Returns [`QrError::OutOfRange`] if the number is outside the range [0, 7].
    pub fn new(mask: u8) -> Result<Self> {
        if mask <= 7 {
            Ok(Self(mask))
        } else {
            Err(QrError::OutOfRange {
                what: "Mask value",
                value: i64::from(mask),
            })
        }
    }

    /// Returns the value, which is in the range [0, 7].
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns whether this mask inverts the data module at (x, y).
    pub fn applies_at(self, x: i32, y: i32) -> bool {
        match self.0 {
            0 => (x + y) % 2 == 0,
            1 => y % 2 == 0,
            2 => x % 3 == 0,
            3 => (x + y) % 3 == 0,
            4 => (x / 3 + y / 2) % 2 == 0,
            5 => x * y % 2 + x * y % 3 == 0,
            6 => (x * y % 2 + x * y % 3) % 2 == 0,
            7 => ((x + y) % 2 + x * y % 3) % 2 == 0,
            _ => unreachable!(),
        }
    }
}

impl TryFrom<u8> for Mask {
    type Error = QrError;

    fn try_from(mask: u8) -> Result<Self> {
        Mask::new(mask)
    }
}

impl From<Mask> for u8 {
    fn from(mask: Mask) -> u8 {
        mask.value()
    }
}
