//! Checksums commonly stored alongside LZO-compressed data.
//!
//! Both functions take the running value of a previous call as `seed`, so
//! data can be checksummed piecewise:
//!
//! ```
//! use lzoo::checksum::{adler32, ADLER32_INIT};
//!
//! let whole = adler32(b"hello, world", ADLER32_INIT);
//! let parts = adler32(b", world", adler32(b"hello", ADLER32_INIT));
//! assert_eq!(whole, parts);
//! ```

use crate::engine;

/// Initial value for [`adler32`].
pub const ADLER32_INIT: u32 = 1;

/// Initial value for [`crc32`].
pub const CRC32_INIT: u32 = 0;

/// Computes the Adler-32 checksum of `data`, starting from `seed`.
///
/// An empty `data` returns `seed` unchanged.
///
/// # Example
///
/// ```
/// use lzoo::checksum::{adler32, ADLER32_INIT};
///
/// assert_eq!(adler32(b"Wikipedia", ADLER32_INIT), 0x11e6_0398);
/// assert_eq!(adler32(b"", 42), 42);
/// ```
pub fn adler32(data: &[u8], seed: u32) -> u32 {
    engine::adler32(seed, data)
}

/// Computes the CRC-32 (IEEE) checksum of `data`, starting from `seed`.
///
/// # Example
///
/// ```
/// use lzoo::checksum::{crc32, CRC32_INIT};
///
/// assert_eq!(crc32(b"123456789", CRC32_INIT), 0xcbf4_3926);
/// assert_eq!(crc32(b"6789", crc32(b"12345", CRC32_INIT)), 0xcbf4_3926);
/// ```
pub fn crc32(data: &[u8], seed: u32) -> u32 {
    engine::crc32(seed, data)
}
