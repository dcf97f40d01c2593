const BASE: u32 = 65521;
/// Largest run of bytes the sums can absorb before they must be reduced.
const NMAX: usize = 5552;

/// Adler-32 of `buf`, continuing from `adler`.
pub(crate) fn adler32(adler: u32, buf: &[u8]) -> u32 {
    let mut s1 = adler & 0xffff;
    let mut s2 = adler >> 16;
    for chunk in buf.chunks(NMAX) {
        for &b in chunk {
            s1 += u32::from(b);
            s2 += s1;
        }
        s1 %= BASE;
        s2 %= BASE;
    }
    (s2 << 16) | s1
}

/// CRC-32 (IEEE) of `buf`, continuing from `crc`.
pub(crate) fn crc32(crc: u32, buf: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new_with_initial(crc);
    hasher.update(buf);
    hasher.finalize()
}
