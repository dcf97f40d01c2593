//! The standard framing header: the decoded length as a big-endian `u32`.

use crate::{Error, ErrorKind, Result};

pub(crate) const HEADER_LEN: usize = 4;

/// No stream decodes to more than this many bytes per payload byte.
const MAX_RATIO: usize = 256;

/// Upper bound of the decoded length of a `payload_len`-byte payload.
pub(crate) const fn max_decoded_len(payload_len: usize) -> usize {
    payload_len.saturating_mul(MAX_RATIO)
}

/// Longest payload a well-formed blob declaring `len` bytes can carry.
const fn max_payload_len(len: usize) -> usize {
    len.saturating_add(len / 64).saturating_add(16 + 3)
}

pub(crate) fn encode(len: usize) -> Result<[u8; HEADER_LEN]> {
    u32::try_from(len).map(u32::to_be_bytes).map_err(|_| {
        Error::new(
            ErrorKind::InvalidArgument,
            format!("{} bytes exceed the standard framing limit", len),
        )
    })
}

/// Splits a framed blob into the declared length and the payload.
pub(crate) fn decode(blob: &[u8]) -> Result<(usize, &[u8])> {
    if blob.len() < HEADER_LEN {
        return Err(corrupt("header truncated"));
    }
    let (header, payload) = blob.split_at(HEADER_LEN);
    let mut raw = [0u8; HEADER_LEN];
    raw.copy_from_slice(header);
    let len = u32::from_be_bytes(raw) as usize;

    if payload.len() > max_payload_len(len) {
        return Err(corrupt("payload too long for the declared length"));
    }
    if len > max_decoded_len(payload.len()) {
        return Err(corrupt("payload too short for the declared length"));
    }
    Ok((len, payload))
}

fn corrupt(message: &'static str) -> Error {
    Error::new(ErrorKind::CorruptData, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_big_endian() {
        assert_eq!(encode(0x0102_0304).unwrap(), [1, 2, 3, 4]);
        let blob = [0, 0, 0, 3, 0x14, b'a', b'b', b'c', 0x11, 0, 0];
        assert_eq!(decode(&blob).unwrap(), (3, &blob[4..]));
    }

    #[test]
    fn empty_payload_declares_nothing() {
        assert_eq!(decode(&[0, 0, 0, 0]).unwrap(), (0, &[][..]));
        assert_eq!(
            decode(&[0, 0, 0, 1]).unwrap_err().kind(),
            ErrorKind::CorruptData
        );
    }

    #[test]
    fn rejects_implausible_headers() {
        for blob in &[&b""[..], &b"xx"[..], &b"abc"[..]] {
            assert_eq!(decode(blob).unwrap_err().kind(), ErrorKind::CorruptData);
        }
        // 0xffffffff bytes cannot come out of a 3-byte payload.
        assert_eq!(
            decode(&[0xff, 0xff, 0xff, 0xff, 0x11, 0, 0])
                .unwrap_err()
                .kind(),
            ErrorKind::CorruptData
        );
        // A 100-byte payload is too long for a 4-byte output.
        let mut blob = vec![0, 0, 0, 4];
        blob.resize(104, 0);
        assert_eq!(decode(&blob).unwrap_err().kind(), ErrorKind::CorruptData);
    }

    #[test]
    fn bounds_saturate() {
        assert_eq!(max_payload_len(usize::MAX), usize::MAX);
        assert!(max_payload_len(u32::MAX as usize) >= u32::MAX as usize);
        assert_eq!(max_payload_len(64), 64 + 1 + 19);
        assert_eq!(max_decoded_len(usize::MAX / 2), usize::MAX);
        assert_eq!(max_decoded_len(3), 768);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn oversized_input_cannot_be_framed() {
        let err = encode(u32::MAX as usize + 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
