//! Yet another LZO codec binding
//!
//! Block compression with the nine LZO algorithms (LZO1, LZO1A, LZO1B,
//! LZO1C, LZO1F, LZO1X, LZO1Y, LZO1Z and LZO2A), with or without a length
//! header, plus the Adler-32 and CRC-32 checksums.
//!
//! The codec is written in Rust; liblzo is not linked. LZO1X, LZO1Y and
//! LZO1Z streams use liblzo's layouts, so raw LZO1X payloads can be
//! exchanged with liblzo and other LZO1X implementations. The other six
//! algorithms have formats of their own that only this crate reads; see
//! [`Algorithm`] for details.
//!
//! ```
//! use lzoo::{Algorithm, CompressionLevel, Framing};
//!
//! let data = b"It is a truth universally acknowledged, that a single man in possession of a good fortune, must be in want of a wife.";
//!
//! let comp = lzoo::compress(data, CompressionLevel::Default, Framing::Standard, Algorithm::Lzo1x)?;
//! let plain = lzoo::decompress(&comp, Framing::Standard, None, Algorithm::Lzo1x)?;
//!
//! assert_eq!(plain, &data[..]);
//! # Ok::<(), lzoo::Error>(())
//! ```
#![deny(unsafe_code)]

pub mod checksum;
mod common;
mod engine;
pub mod lzo;

pub use checksum::{adler32, crc32};
pub use common::{version_date, version_number, version_string, Error, ErrorKind, Report, Result};
pub use lzo::{
    compress, compress_to_vec, decompress, decompress_to_vec, max_compressed_size, optimize,
    Algorithm, Codec, CodecBuilder, CompressionLevel, Framing,
};
