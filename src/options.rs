//! Encoding parameters with their defaults.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{QrError, Result};
use crate::qrcode::{Mask, Version};

/// Optional parameters of [`QrCode::encode_segments_with`](crate::QrCode::encode_segments_with).
///
/// The defaults search every version from 1 to 40, choose the mask automatically and
/// boost the error correction level while the data still fits.
///
/// ```rust
/// use qrsymbol::{EncodeOptions, Mask, Version};
///
/// let options = EncodeOptions::new()
///     .with_version_range(Version::MIN, Version::new(10).unwrap())
///     .with_mask(Mask::new(3).unwrap())
///     .with_boost_ecl(false);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct EncodeOptions {
    /// Smallest version to try.
    pub min_version: Version,
    /// Largest version to try.
    pub max_version: Version,
    /// Fixed mask, or `None` to pick the lowest-penalty mask.
    pub mask: Option<Mask>,
    /// Raise the ECC level if the data still fits in the chosen version.
    pub boost_ecl: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            min_version: Version::MIN,
            max_version: Version::MAX,
            mask: None,
            boost_ecl: true,
        }
    }
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version_range(mut self, min: Version, max: Version) -> Self {
        self.min_version = min;
        self.max_version = max;
        self
    }

    pub fn with_mask(mut self, mask: Mask) -> Self {
        self.mask = Some(mask);
        self
    }

    pub fn with_auto_mask(mut self) -> Self {
        self.mask = None;
        self
    }

    pub fn with_boost_ecl(mut self, boost: bool) -> Self {
        self.boost_ecl = boost;
        self
    }

    /// Checks that the version range is not empty.
    pub fn validate(&self) -> Result<()> {
        if self.min_version > self.max_version {
            return Err(QrError::InvalidVersionRange {
                min: self.min_version.value(),
                max: self.max_version.value(),
            });
        }
        Ok(())
    }
}
