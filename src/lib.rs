//! # qrsymbol
//!
//! A Rust library for encoding text or binary data into QR code symbols.
//!
//! `qrsymbol` follows the QR Code Model 2 standard. It supports versions 1 to 40, four error
//! correction levels and the numeric, alphanumeric, byte and ECI segment modes. The result is an
//! immutable grid of dark and light modules; drawing it (console, PDF, image) is left to the
//! caller, which reads it through [`QrCode::get_module`].
//!
//! ## Features
//!
//! - Encode data in numeric, alphanumeric, byte, or ECI modes.
//! - Support four error correction levels: Low, Medium, Quartile, High.
//! - Automatic version selection, error correction boosting and mask selection.
//! - Errors are returned as [`QrError`] values; nothing panics on bad input.
//! - Safe Rust implementation with no unsafe code.
//!
//! ## Installation
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! qrsymbol = "0.1" # Replace with the latest version
//! ```
//!
//! Enable the `serde` feature to load [`EncodeOptions`] from configuration files.
//!
//! ## Example
//!
//! Print a symbol to the console:
//!
//! ```rust
//! use qrsymbol::{QrCode, QrCodeEcc};
//!
//! fn main() -> Result<(), qrsymbol::QrError> {
//!     let qr = QrCode::encode_text("HELLO WORLD", QrCodeEcc::Low)?;
//!     let border = 4;
//!     for y in -border..qr.size() + border {
//!         for x in -border..qr.size() + border {
//!             print!("{}", if qr.get_module(x, y) { "██" } else { "  " });
//!         }
//!         println!();
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Use explicit segments and options:
//!
//! ```rust
//! use qrsymbol::{EncodeOptions, Mask, QrCode, QrCodeEcc, QrSegment, Version};
//!
//! let segs = vec![
//!     QrSegment::make_eci(26).unwrap(), // UTF-8
//!     QrSegment::make_bytes("Añorada".as_bytes()),
//! ];
//! let options = EncodeOptions::new()
//!     .with_version_range(Version::MIN, Version::new(5).unwrap())
//!     .with_mask(Mask::new(2).unwrap());
//! let qr = QrCode::encode_segments_with(&segs, QrCodeEcc::Medium, &options).unwrap();
//! assert_eq!(qr.mask().value(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`qrcode`]: Symbol construction, versions, masks and error correction levels.
//! - [`segment`]: Segment factories and mode tables.
//! - [`bitbuffer`]: Bit-granular sequence builder.
//! - [`reed_solomon`]: GF(256) arithmetic and error correction codewords.
//! - [`options`]: Encoding parameters.
//! - [`payload`]: Account identifier text for the banking front end.

#![forbid(unsafe_code)]

pub mod bitbuffer;
pub mod error;
pub mod options;
pub mod payload;
mod penalty;
pub mod qrcode;
pub mod reed_solomon;
pub mod segment;

pub use bitbuffer::BitBuffer;
pub use error::{DataTooLong, ErrorKind, QrError, Result};
pub use options::EncodeOptions;
pub use payload::AccountPayload;
pub use qrcode::{Mask, QrCode, QrCodeEcc, Version};
pub use segment::{QrSegment, QrSegmentMode};
