use super::{binding, Algorithm};
use crate::{engine::Fault, Error, ErrorKind, Report, Result};
use tracing::debug;

/// Scratch memory for a single compression call.
pub(crate) struct WorkMem(Box<[u32]>);

impl WorkMem {
    pub fn new(algo: Algorithm) -> Self {
        Self(vec![0; algo.traits().work_mem].into_boxed_slice())
    }
}

/// Upper bound of the payload size produced by compressing `len` bytes.
pub(crate) const fn compress_bound(len: usize) -> usize {
    len + len / 16 + 64 + 3
}

fn compression_failed(algo: Algorithm, fault: Fault) -> Error {
    debug!(algorithm = %algo, %fault, "compressor fault");
    Error::new(
        ErrorKind::CompressionFailed,
        format!("{} compressor: {}", algo, fault),
    )
}

fn corrupt_data(algo: Algorithm, fault: Fault) -> Error {
    debug!(algorithm = %algo, %fault, "rejected compressed data");
    Error::new(
        ErrorKind::CorruptData,
        format!("{} stream: {}", algo, fault),
    )
}

/// Compresses `src` into `dst`, which should hold [`compress_bound`] bytes.
pub(crate) fn compress(
    state: &mut WorkMem,
    algo: Algorithm,
    level: i32,
    src: &[u8],
    dst: &mut [u8],
) -> Result<Report> {
    let dst_len = binding::compress(algo, level, src, dst, &mut state.0)
        .map_err(|fault| compression_failed(algo, fault))?;
    Ok(Report {
        dst_len,
        ..Default::default()
    })
}

pub(crate) fn decompress_safe(algo: Algorithm, src: &[u8], dst: &mut [u8]) -> Result<Report> {
    let dst_len =
        binding::decompress(algo, src, dst).map_err(|fault| corrupt_data(algo, fault))?;
    Ok(Report {
        dst_len,
        src_len: Some(src.len()),
    })
}

/// Returns the optimized stream and its decoded length.
pub(crate) fn optimize(algo: Algorithm, src: &[u8], capacity: usize) -> Result<(Vec<u8>, usize)> {
    match binding::optimize(algo, src, capacity) {
        Some(result) => result.map_err(|fault| corrupt_data(algo, fault)),
        None => Err(Error::new(
            ErrorKind::UnsupportedOperation,
            format!("{} has no optimizer", algo),
        )),
    }
}
