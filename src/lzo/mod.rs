//! LZO Compressor/Decompressor
//!
//! Every function takes the [`Algorithm`] and [`Framing`] explicitly.
//! Neither is recorded in the compressed data, so a blob can only be
//! decompressed with the same pair it was compressed with.
mod algorithm;
mod api;
mod binding;
mod header;
mod options;

pub use algorithm::Algorithm;
pub use options::{Codec, CodecBuilder, CompressionLevel, Framing, CLEVEL_MAX, CLEVEL_MIN};

use crate::{Error, ErrorKind, Report, Result};
use api::WorkMem;
use header::HEADER_LEN;
use tracing::{debug, trace};

/// Returns the maximum size of the compressed data for `len` bytes of input.
///
/// # Example
///
/// ```
/// use lzoo::lzo::{self, Framing};
///
/// assert_eq!(lzo::max_compressed_size(0, Framing::Raw), 67);
/// assert_eq!(lzo::max_compressed_size(1600, Framing::Standard), 1600 + 100 + 67 + 4);
/// ```
pub fn max_compressed_size(len: usize, framing: Framing) -> usize {
    let header = match framing {
        Framing::Standard => HEADER_LEN,
        Framing::Raw => 0,
    };
    api::compress_bound(len) + header
}

fn invalid_argument(message: String) -> Error {
    debug!(%message, "argument refused");
    Error::new(ErrorKind::InvalidArgument, message)
}

fn check_level(level: CompressionLevel, algorithm: Algorithm) -> Result<i32> {
    let level = level.as_i32();
    let levels = &algorithm.traits().levels;
    if levels.contains(&level) {
        Ok(level)
    } else {
        Err(invalid_argument(format!(
            "compression level {} is outside {}..={} for {}",
            level,
            levels.start(),
            levels.end(),
            algorithm
        )))
    }
}

/// Returns the output capacity for a raw payload, capped at what `payload`
/// could possibly decode to.
fn raw_capacity(framing: Framing, size_hint: Option<usize>, payload: &[u8]) -> Result<usize> {
    let size_hint = size_hint.ok_or_else(|| {
        invalid_argument(format!("{:?} framing requires a size hint", framing))
    })?;
    Ok(size_hint.min(header::max_decoded_len(payload.len())))
}

/// Read data from a slice and append compressed data to `Vec<u8>`.
///
/// The existing contents of `dst` are kept. On failure `dst` is left as it
/// was.
///
/// # Example
///
/// ```
/// use lzoo::lzo::{self, Algorithm, CompressionLevel, Framing};
///
/// let data = "En un lugar de la Mancha, de cuyo nombre no quiero acordarme, no ha mucho tiempo";
/// let mut buf = b"header".to_vec();
///
/// let report = lzo::compress_to_vec(
///     data.as_bytes(),
///     &mut buf,
///     CompressionLevel::Default,
///     Framing::Standard,
///     Algorithm::Lzo1x,
/// )
/// .unwrap();
///
/// assert_eq!(&buf[..6], b"header");
/// assert_eq!(buf.len(), 6 + report.dst_len());
/// # let plain = lzo::decompress(&buf[6..], Framing::Standard, None, Algorithm::Lzo1x).unwrap();
/// # assert_eq!(plain, data.as_bytes());
/// ```
pub fn compress_to_vec(
    src: &[u8],
    dst: &mut Vec<u8>,
    level: CompressionLevel,
    framing: Framing,
    algorithm: Algorithm,
) -> Result<Report> {
    let level = check_level(level, algorithm)?;
    let header = header::encode(src.len())?;

    let orig_len = dst.len();
    dst.resize(orig_len + max_compressed_size(src.len(), framing), 0);
    let payload_at = match framing {
        Framing::Standard => {
            dst[orig_len..orig_len + HEADER_LEN].copy_from_slice(&header);
            orig_len + HEADER_LEN
        }
        Framing::Raw => orig_len,
    };

    let result = if src.is_empty() && !algorithm.traits().empty_input {
        Ok(Report::default())
    } else {
        let mut state = WorkMem::new(algorithm);
        api::compress(&mut state, algorithm, level, src, &mut dst[payload_at..])
    };

    match result {
        Ok(report) => {
            let end = payload_at + report.dst_len();
            dst.truncate(end);
            trace!(
                algorithm = %algorithm,
                ?framing,
                level,
                src_len = src.len(),
                dst_len = end - orig_len,
                "compressed"
            );
            Ok(Report {
                dst_len: end - orig_len,
                ..Default::default()
            })
        }
        Err(err) => {
            dst.truncate(orig_len);
            Err(err)
        }
    }
}

/// Compresses `src` and returns the compressed data.
///
/// `level` must be within `1..=9`. LZO1Z and LZO2A accept any valid level
/// and always compress as hard as they can.
///
/// # Examples
///
/// ### Standard framing
///
/// The decoded length is stored in front of the payload:
///
/// ```
/// use lzoo::lzo::{self, Algorithm, CompressionLevel, Framing};
///
/// let data = b"aaaaaaaaaaaaaaaaaaaaaaaa";
/// let comp = lzo::compress(data, CompressionLevel::Best, Framing::Standard, Algorithm::Lzo1x)
///     .unwrap();
///
/// assert_eq!(&comp[..4], &[0, 0, 0, 24]);
/// assert!(comp.len() < data.len());
/// # let plain = lzo::decompress(&comp, Framing::Standard, None, Algorithm::Lzo1x).unwrap();
/// # assert_eq!(plain, &data[..]);
/// ```
///
/// ### Raw framing
///
/// ```
/// use lzoo::lzo::{self, Algorithm, CompressionLevel, Framing};
///
/// let data = "Il était une fois, dans un pays lointain, une fois encore, un pays lointain.";
/// let comp = lzo::compress(
///     data.as_bytes(),
///     CompressionLevel::Default,
///     Framing::Raw,
///     Algorithm::Lzo1b,
/// )
/// .unwrap();
///
/// let plain = lzo::decompress(&comp, Framing::Raw, Some(data.len()), Algorithm::Lzo1b).unwrap();
/// assert_eq!(plain, data.as_bytes());
/// ```
pub fn compress(
    src: &[u8],
    level: CompressionLevel,
    framing: Framing,
    algorithm: Algorithm,
) -> Result<Vec<u8>> {
    let mut dst = Vec::new();
    compress_to_vec(src, &mut dst, level, framing, algorithm)?;
    Ok(dst)
}

/// Read compressed data from a slice and append the decompressed data to
/// `Vec<u8>`.
///
/// With [`Framing::Standard`] the declared length is used and `size_hint` is
/// ignored. With [`Framing::Raw`] `size_hint` is required and must be at
/// least the decompressed length; a larger hint is fine. The output buffer
/// never grows past 256 bytes per input byte, whatever the hint says.
///
/// The existing contents of `dst` are kept. On failure `dst` is left as it
/// was.
///
/// # Example
///
/// ```
/// use lzoo::lzo::{self, Algorithm, CompressionLevel, Framing};
///
/// let data = b"Kaum hatte er das Haus verlassen, als er das Haus verlassen wollte.";
/// let comp = lzo::compress(data, CompressionLevel::Default, Framing::Raw, Algorithm::Lzo1z)
///     .unwrap();
///
/// let mut buf = Vec::new();
/// let report = lzo::decompress_to_vec(
///     &comp,
///     &mut buf,
///     Framing::Raw,
///     Some(data.len() + 100),
///     Algorithm::Lzo1z,
/// )
/// .unwrap();
///
/// assert_eq!(report.dst_len(), data.len());
/// assert_eq!(buf, &data[..]);
/// ```
pub fn decompress_to_vec(
    src: &[u8],
    dst: &mut Vec<u8>,
    framing: Framing,
    size_hint: Option<usize>,
    algorithm: Algorithm,
) -> Result<Report> {
    let (capacity, payload) = match framing {
        Framing::Standard => header::decode(src)?,
        Framing::Raw => (raw_capacity(framing, size_hint, src)?, src),
    };

    let orig_len = dst.len();
    let result = if payload.is_empty() && !algorithm.traits().empty_input {
        Ok(Report::default())
    } else {
        dst.resize(orig_len + capacity, 0);
        api::decompress_safe(algorithm, payload, &mut dst[orig_len..])
    };

    let result = result.and_then(|report| match framing {
        Framing::Standard if report.dst_len() != capacity => {
            debug!(
                algorithm = %algorithm,
                declared = capacity,
                actual = report.dst_len(),
                "length mismatch"
            );
            Err(Error::new(
                ErrorKind::CorruptData,
                format!(
                    "{} bytes declared, {} bytes decoded",
                    capacity,
                    report.dst_len()
                ),
            ))
        }
        _ => Ok(report),
    });

    match result {
        Ok(report) => {
            dst.truncate(orig_len + report.dst_len());
            trace!(
                algorithm = %algorithm,
                ?framing,
                src_len = src.len(),
                dst_len = report.dst_len(),
                "decompressed"
            );
            Ok(Report {
                dst_len: report.dst_len(),
                src_len: Some(src.len()),
            })
        }
        Err(err) => {
            dst.truncate(orig_len);
            Err(err)
        }
    }
}

/// Decompresses `src` and returns the decompressed data.
///
/// See [`decompress_to_vec`] for the meaning of `size_hint`.
///
/// # Example
///
/// ```
/// use lzoo::{lzo::{self, Algorithm, Framing}, ErrorKind};
///
/// let err = lzo::decompress(b"xx", Framing::Standard, None, Algorithm::Lzo1x).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::CorruptData);
///
/// let err = lzo::decompress(b"xx", Framing::Raw, None, Algorithm::Lzo1x).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
/// ```
pub fn decompress(
    src: &[u8],
    framing: Framing,
    size_hint: Option<usize>,
    algorithm: Algorithm,
) -> Result<Vec<u8>> {
    let mut dst = Vec::new();
    decompress_to_vec(src, &mut dst, framing, size_hint, algorithm)?;
    Ok(dst)
}

/// Verifies compressed data and rewrites it into an equivalent form that
/// is never larger.
///
/// Matches that do not save space are turned back into literals. The
/// result decompresses to the same bytes as `src` with the same framing
/// and algorithm.
///
/// Only LZO1X and LZO1Y have an optimizer; every other algorithm fails
/// with [`ErrorKind::UnsupportedOperation`].
///
/// # Example
///
/// ```
/// use lzoo::lzo::{self, Algorithm, CompressionLevel, Framing};
///
/// let data = "Dans les champs de l'observation, le hasard ne favorise que les esprits préparés.";
/// let comp = lzo::compress(
///     data.as_bytes(),
///     CompressionLevel::Best,
///     Framing::Standard,
///     Algorithm::Lzo1x,
/// )
/// .unwrap();
///
/// let opt = lzo::optimize(&comp, Framing::Standard, None, Algorithm::Lzo1x).unwrap();
/// assert!(opt.len() <= comp.len());
///
/// let plain = lzo::decompress(&opt, Framing::Standard, None, Algorithm::Lzo1x).unwrap();
/// assert_eq!(plain, data.as_bytes());
/// ```
pub fn optimize(
    src: &[u8],
    framing: Framing,
    size_hint: Option<usize>,
    algorithm: Algorithm,
) -> Result<Vec<u8>> {
    if !algorithm.supports_optimize() {
        debug!(algorithm = %algorithm, "optimize refused");
        return Err(Error::new(
            ErrorKind::UnsupportedOperation,
            format!("{} has no optimizer", algorithm),
        ));
    }

    let (capacity, payload) = match framing {
        Framing::Standard => header::decode(src)?,
        Framing::Raw => (raw_capacity(framing, size_hint, src)?, src),
    };
    let (rewritten, len) = api::optimize(algorithm, payload, capacity)?;

    let mut dst = Vec::with_capacity(src.len());
    if framing == Framing::Standard {
        if len != capacity {
            return Err(Error::new(
                ErrorKind::CorruptData,
                format!("{} bytes declared, {} bytes decoded", capacity, len),
            ));
        }
        dst.extend_from_slice(&src[..HEADER_LEN]);
    }
    dst.extend_from_slice(&rewritten);
    trace!(
        algorithm = %algorithm,
        ?framing,
        src_len = src.len(),
        dst_len = dst.len(),
        "optimized"
    );
    Ok(dst)
}
