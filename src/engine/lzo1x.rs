//! The LZO1X stream family: LZO1F, LZO1X, LZO1Y and LZO1Z.
//!
//! Every instruction is a marker byte, optionally followed by length
//! extension bytes and one or two distance bytes. The low two bits of a
//! match's "state byte" count the literals (0..3) that directly follow it;
//! longer runs get their own marker. What a marker `t < 16` means depends
//! on what preceded it:
//!
//! | preceded by            | `t < 16` is                              |
//! |------------------------|------------------------------------------|
//! | a match, no literals   | a literal run                            |
//! | a match + 1..3 literals| M1: 2-byte match, short distance          |
//! | a literal run (>= 4)   | M1: 3-byte match just beyond the M2 span |
//!
//! Markers `64..=255` are M2 matches, `32..=63` M3 matches (distance up to
//! 16 KiB) and `16..=31` M4 matches (16 KiB..48 KiB). An M4 with a zero
//! distance, `0x11 0x00 0x00`, ends the stream. A first byte above 17
//! introduces a leading literal run of `byte - 17` bytes.
//!
//! LZO1X, LZO1Y and LZO1Z follow liblzo's stream layouts. LZO1F here
//! is LZO1X capped at a 16 KiB window, not liblzo's LZO1F format.

use super::{Encoder, Fault, Output, Reader, Status, Trace, Writer, MIN_MATCH};

const M3_MAX_OFFSET: usize = 0x4000;
const M4_MAX_OFFSET: usize = 0xbfff;
const M4_MARKER: u8 = 16;
const EOF_MARKER: [u8; 3] = [M4_MARKER | 1, 0, 0];

/// Members of the family.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub(crate) enum Variant {
    /// LZO1X without long-distance matches.
    F,
    X,
    /// Smaller M2 window, longer M2 matches.
    Y,
    /// Big-endian distances and a one-byte "same distance again" M2 form.
    Z,
}

impl Variant {
    pub const fn m2_max_offset(self) -> usize {
        match self {
            Self::F | Self::X => 0x0800,
            Self::Y => 0x0400,
            Self::Z => 0x0700,
        }
    }

    pub const fn m2_max_len(self) -> usize {
        match self {
            Self::Y => 14,
            _ => 8,
        }
    }

    pub const fn window(self) -> usize {
        match self {
            Self::F => M3_MAX_OFFSET,
            _ => M4_MAX_OFFSET,
        }
    }

    const fn big_endian(self) -> bool {
        matches!(self, Self::Z)
    }

    /// Reads a two-byte distance field, returning `(distance, state)`.
    fn read_distance(self, r: &mut Reader<'_>) -> Status<(usize, usize)> {
        let b0 = r.byte()?;
        let b1 = r.byte()?;
        if self.big_endian() {
            Ok(((b0 << 6) | (b1 >> 2), b1 & 3))
        } else {
            Ok(((b0 | (b1 << 8)) >> 2, b0 & 3))
        }
    }
}

/// Encoder for one member of the family.
pub(crate) struct Compressor<'a> {
    variant: Variant,
    out: Output<'a>,
    /// Index of the byte holding the literal count of the last match.
    state_at: Option<usize>,
    last_distance: Option<usize>,
}

impl<'a> Compressor<'a> {
    pub fn new(variant: Variant, dst: &'a mut [u8]) -> Self {
        Self {
            variant,
            out: Output::new(dst),
            state_at: None,
            last_distance: None,
        }
    }

    /// Writes the end-of-stream marker and returns the compressed length.
    pub fn finish(mut self) -> Status<usize> {
        self.out.extend(&EOF_MARKER)?;
        Ok(self.out.len())
    }

    fn write_distance(&mut self, v: usize) -> Status<()> {
        debug_assert!(v < M3_MAX_OFFSET);
        if self.variant.big_endian() {
            self.out.push((v >> 6) as u8)?;
            self.state_at = Some(self.out.len());
            self.out.push(((v & 0x3f) << 2) as u8)
        } else {
            self.state_at = Some(self.out.len());
            self.out.push(((v & 0x3f) << 2) as u8)?;
            self.out.push((v >> 6) as u8)
        }
    }

    fn write_len(&mut self, marker: u8, len: usize, bits: usize) -> Status<()> {
        if len <= bits {
            self.out.push(marker | len as u8)
        } else {
            self.out.push(marker)?;
            self.out.extension(len - bits)
        }
    }

    fn m2(&mut self, distance: usize, len: usize) -> Status<()> {
        let v = distance - 1;
        match self.variant {
            Variant::F | Variant::X => {
                self.state_at = Some(self.out.len());
                self.out.push((((len - 1) << 5) | ((v & 7) << 2)) as u8)?;
                self.out.push((v >> 3) as u8)
            }
            Variant::Y => {
                self.state_at = Some(self.out.len());
                self.out.push((((len + 1) << 4) | ((v & 3) << 2)) as u8)?;
                self.out.push((v >> 2) as u8)
            }
            Variant::Z if self.last_distance == Some(distance) => {
                self.state_at = Some(self.out.len());
                self.out.push((((len - 1) << 5) | 0x1c) as u8)
            }
            Variant::Z => {
                self.out.push((((len - 1) << 5) | (v >> 6)) as u8)?;
                self.state_at = Some(self.out.len());
                self.out.push(((v & 0x3f) << 2) as u8)
            }
        }
    }

    fn is_m2(&self, distance: usize, len: usize) -> bool {
        len <= self.variant.m2_max_len()
            && (distance <= self.variant.m2_max_offset()
                || (self.variant == Variant::Z && self.last_distance == Some(distance)))
    }
}

impl Encoder for Compressor<'_> {
    fn window(&self) -> usize {
        self.variant.window()
    }

    fn worthwhile(&self, distance: usize, len: usize) -> bool {
        distance <= self.variant.window()
            && len >= MIN_MATCH
            && (len >= 4 || self.is_m2(distance, len))
    }

    fn rep_distance(&self) -> Option<usize> {
        match self.variant {
            Variant::Z => self.last_distance,
            _ => None,
        }
    }

    fn literals(&mut self, lits: &[u8]) -> Status<()> {
        let n = lits.len();
        if n == 0 {
            return Ok(());
        }
        if self.out.len() == 0 && n <= 238 {
            self.out.push((17 + n) as u8)?;
        } else if n <= 3 {
            let at = self.state_at.ok_or(Fault::Error)?;
            self.out.set_bits(at, n as u8);
        } else if n <= 18 {
            self.out.push((n - 3) as u8)?;
        } else {
            self.out.push(0)?;
            self.out.extension(n - 18)?;
        }
        self.state_at = None;
        self.out.extend(lits)
    }

    fn matched(&mut self, distance: usize, len: usize) -> Status<()> {
        if self.is_m2(distance, len) {
            self.m2(distance, len)?;
        } else if distance <= M3_MAX_OFFSET {
            self.write_len(32, len - 2, 31)?;
            self.write_distance(distance - 1)?;
        } else if distance <= self.variant.window() {
            let v = distance - M3_MAX_OFFSET;
            let marker = M4_MARKER | ((v & 0x4000) >> 11) as u8;
            self.write_len(marker, len - 2, 7)?;
            self.write_distance(v & 0x3fff)?;
        } else {
            return Err(Fault::Error);
        }
        self.last_distance = Some(distance);
        Ok(())
    }
}

/// Decodes a complete stream into `dst`, returning the decoded length.
pub(crate) fn decompress<T: Trace>(
    variant: Variant,
    src: &[u8],
    dst: &mut [u8],
    trace: &mut T,
) -> Status<usize> {
    let mut r = Reader::new(src);
    let mut w = Writer::new(dst);
    let mut last_distance = 0;

    // Literals copied since the last match; 4 stands for a full literal run.
    let mut state;
    let mut t = r.byte()?;
    if t > 17 {
        let n = t - 17;
        w.copy_literals(&mut r, n)?;
        trace.literals(n);
        state = n.min(4);
        t = r.byte()?;
    } else {
        state = 0;
    }

    loop {
        let (distance, len, next_state) = if t >= 64 {
            let len = match variant {
                Variant::Y => (t >> 4) - 1,
                _ => (t >> 5) + 1,
            };
            let (distance, next_state) = match variant {
                Variant::F | Variant::X => (1 + ((t >> 2) & 7) + (r.byte()? << 3), t & 3),
                Variant::Y => (1 + ((t >> 2) & 3) + (r.byte()? << 2), t & 3),
                Variant::Z if t & 0x1f >= 0x1c => (last_distance, t & 3),
                Variant::Z => {
                    let b = r.byte()?;
                    (1 + ((t & 0x1f) << 6) + (b >> 2), b & 3)
                }
            };
            (distance, len, next_state)
        } else if t >= 32 {
            let mut len = t & 31;
            if len == 0 {
                len = 31 + r.extension()?;
            }
            let (v, next_state) = variant.read_distance(&mut r)?;
            (v + 1, len + 2, next_state)
        } else if t >= 16 {
            let mut len = t & 7;
            if len == 0 {
                len = 7 + r.extension()?;
            }
            let (v, next_state) = variant.read_distance(&mut r)?;
            let v = v + ((t & 8) << 11);
            if v == 0 {
                return if r.at_end() {
                    Ok(w.len())
                } else {
                    Err(Fault::InputNotConsumed)
                };
            }
            if variant == Variant::F {
                return Err(Fault::Error);
            }
            (v + M3_MAX_OFFSET, len + 2, next_state)
        } else if state == 0 {
            let n = if t == 0 { 18 + r.extension()? } else { t + 3 };
            w.copy_literals(&mut r, n)?;
            trace.literals(n);
            state = 4;
            t = r.byte()?;
            continue;
        } else {
            let b = r.byte()?;
            let (v, next_state) = if variant.big_endian() {
                ((t << 6) | (b >> 2), b & 3)
            } else {
                ((t >> 2) | (b << 2), t & 3)
            };
            if state == 4 {
                (1 + variant.m2_max_offset() + v, 3, next_state)
            } else {
                (1 + v, 2, next_state)
            }
        };

        w.copy_match(distance, len)?;
        trace.matched(distance, len);
        last_distance = distance;

        state = next_state;
        if state > 0 {
            w.copy_literals(&mut r, state)?;
            trace.literals(state);
        }
        t = r.byte()?;
    }
}
