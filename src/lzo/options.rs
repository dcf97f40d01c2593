use super::Algorithm;
use crate::{Report, Result};

/// Predefined compression level (1).
pub const CLEVEL_MIN: i32 = 1;

/// Predefined compression level (9).
pub const CLEVEL_MAX: i32 = 9;

/// Compression level specifier
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CompressionLevel {
    /// Custom compression level.
    /// Any value between 1 and 9 is valid.
    Custom(i32),
    /// `Fast` is same as `Custom(1)`.
    Fast,
    /// `Default` is same as `Custom(1)`.
    Default,
    /// `Best` is same as `Custom(9)`.
    Best,
}

impl Default for CompressionLevel {
    fn default() -> Self {
        Self::Default
    }
}

impl CompressionLevel {
    pub(crate) fn as_i32(self) -> i32 {
        match self {
            Self::Custom(level) => level,
            Self::Fast | Self::Default => CLEVEL_MIN,
            Self::Best => CLEVEL_MAX,
        }
    }
}

impl From<i32> for CompressionLevel {
    fn from(level: i32) -> Self {
        Self::Custom(level)
    }
}

/// Compressed data layout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Framing {
    /// The payload is prefixed with its decoded length as a big-endian `u32`,
    /// so decompression needs no size hint.
    Standard,
    /// The bare payload. Decompression needs a size hint.
    Raw,
}

impl Default for Framing {
    fn default() -> Self {
        Self::Standard
    }
}

/// A reusable set of codec settings.
///
/// # Example
///
/// ```
/// use lzoo::{Algorithm, CodecBuilder, CompressionLevel, Framing};
///
/// let codec = CodecBuilder::new()
///     .algorithm(Algorithm::Lzo1y)
///     .level(CompressionLevel::Best)
///     .framing(Framing::Raw)
///     .build();
///
/// let data = b"Whan that Aprille with his shoures soote, the droghte of March hath perced to the roote";
/// let comp = codec.compress(data).unwrap();
/// let plain = codec.decompress(&comp, Some(data.len())).unwrap();
/// assert_eq!(plain, &data[..]);
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Codec {
    algorithm: Algorithm,
    level: CompressionLevel,
    framing: Framing,
}

impl Codec {
    /// Creates a codec with the default level and standard framing.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Default::default()
        }
    }

    /// Returns the algorithm.
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Returns the compression level.
    pub const fn level(&self) -> CompressionLevel {
        self.level
    }

    /// Returns the framing.
    pub const fn framing(&self) -> Framing {
        self.framing
    }

    /// See [`lzo::compress`](super::compress).
    pub fn compress(&self, src: &[u8]) -> Result<Vec<u8>> {
        super::compress(src, self.level, self.framing, self.algorithm)
    }

    /// See [`lzo::compress_to_vec`](super::compress_to_vec).
    pub fn compress_to_vec(&self, src: &[u8], dst: &mut Vec<u8>) -> Result<Report> {
        super::compress_to_vec(src, dst, self.level, self.framing, self.algorithm)
    }

    /// See [`lzo::decompress`](super::decompress).
    pub fn decompress(&self, src: &[u8], size_hint: Option<usize>) -> Result<Vec<u8>> {
        super::decompress(src, self.framing, size_hint, self.algorithm)
    }

    /// See [`lzo::decompress_to_vec`](super::decompress_to_vec).
    pub fn decompress_to_vec(
        &self,
        src: &[u8],
        dst: &mut Vec<u8>,
        size_hint: Option<usize>,
    ) -> Result<Report> {
        super::decompress_to_vec(src, dst, self.framing, size_hint, self.algorithm)
    }

    /// See [`lzo::optimize`](super::optimize).
    pub fn optimize(&self, src: &[u8], size_hint: Option<usize>) -> Result<Vec<u8>> {
        super::optimize(src, self.framing, size_hint, self.algorithm)
    }

    /// See [`lzo::max_compressed_size`](super::max_compressed_size).
    pub fn max_compressed_size(&self, len: usize) -> usize {
        super::max_compressed_size(len, self.framing)
    }
}

/// Builds a custom `Codec`.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CodecBuilder {
    codec: Codec,
}

impl CodecBuilder {
    /// Creates a new `CodecBuilder`.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the algorithm.
    pub fn algorithm(&mut self, algorithm: Algorithm) -> &mut Self {
        self.codec.algorithm = algorithm;
        self
    }

    /// Sets the compression level.
    pub fn level(&mut self, level: CompressionLevel) -> &mut Self {
        self.codec.level = level;
        self
    }

    /// Sets the framing.
    pub fn framing(&mut self, framing: Framing) -> &mut Self {
        self.codec.framing = framing;
        self
    }

    /// Builds a `Codec` with this configuration.
    pub const fn build(&self) -> Codec {
        self.codec
    }
}

impl From<Codec> for CodecBuilder {
    fn from(codec: Codec) -> Self {
        Self { codec }
    }
}
