//! The LZO1 stream family: LZO1, LZO1A, LZO1B, LZO1C and LZO2A.
//!
//! These are formats of this crate. They keep liblzo's window sizes and
//! end-of-stream rules for each algorithm but share one marker scheme, so
//! liblzo cannot read them and they cannot read liblzo output.
//!
//! Markers are context free:
//!
//! - `1..=31`: that many literals follow.
//! - `0, u`: a long literal run, `32 + u` bytes for `u < 0xf8`, otherwise a
//!   bulk run of `256 << (u - 0xf7)` bytes (not in LZO1).
//! - `64..=255, b`: a 3 to 8 byte match within 8 KiB.
//! - `32..=63, lo, hi`: a longer match with a 16-bit distance. A zero
//!   distance ends the stream.
//!
//! LZO1 and LZO1A streams stop where the input stops; they have no end
//! marker and so no way to say "nothing".

use super::{Encoder, Fault, Output, Reader, Status, Trace, Writer};

const M2_MAX_OFFSET: usize = 0x2000;
const M2_MAX_LEN: usize = 8;
const M3_MARKER: u8 = 32;
const EOF_MARKER: [u8; 3] = [M3_MARKER | 1, 0, 0];
const MAX_SHORT_RUN: usize = 31;
const MAX_LONG_RUN: usize = 32 + 0xf7;
const MIN_BULK_RUN: usize = 512;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub(crate) enum Variant {
    One,
    OneA,
    OneB,
    OneC,
    TwoA,
}

impl Variant {
    pub const fn window(self) -> usize {
        match self {
            Self::One | Self::OneA => M2_MAX_OFFSET,
            _ => 0xffff,
        }
    }

    pub const fn has_eof(self) -> bool {
        !matches!(self, Self::One | Self::OneA)
    }

    const fn has_bulk_runs(self) -> bool {
        !matches!(self, Self::One)
    }

    const fn reuses_distance(self) -> bool {
        matches!(self, Self::OneC | Self::TwoA)
    }
}

pub(crate) struct Compressor<'a> {
    variant: Variant,
    out: Output<'a>,
    last_distance: Option<usize>,
}

impl<'a> Compressor<'a> {
    pub fn new(variant: Variant, dst: &'a mut [u8]) -> Self {
        Self {
            variant,
            out: Output::new(dst),
            last_distance: None,
        }
    }

    /// Terminates the stream, if the format has a terminator, and returns
    /// the compressed length.
    pub fn finish(mut self) -> Status<usize> {
        if self.variant.has_eof() {
            self.out.extend(&EOF_MARKER)?;
        }
        Ok(self.out.len())
    }

    /// Largest run a single marker can carry for `n` pending literals.
    fn chunk(&self, n: usize) -> usize {
        if n <= MAX_SHORT_RUN {
            n
        } else if n < MIN_BULK_RUN || !self.variant.has_bulk_runs() {
            n.min(MAX_LONG_RUN)
        } else {
            let k = (n / 256).ilog2().min(8);
            256 << k
        }
    }

    fn run_marker(&mut self, len: usize) -> Status<()> {
        if len <= MAX_SHORT_RUN {
            self.out.push(len as u8)
        } else if len <= MAX_LONG_RUN {
            self.out.push(0)?;
            self.out.push((len - 32) as u8)
        } else {
            let k = (len / 256).ilog2() as usize;
            self.out.push(0)?;
            self.out.push((0xf7 + k) as u8)
        }
    }
}

impl Encoder for Compressor<'_> {
    fn window(&self) -> usize {
        self.variant.window()
    }

    fn worthwhile(&self, distance: usize, len: usize) -> bool {
        distance <= self.variant.window()
            && (len >= 4 || (len >= 3 && distance <= M2_MAX_OFFSET))
    }

    fn rep_distance(&self) -> Option<usize> {
        if self.variant.reuses_distance() {
            self.last_distance
        } else {
            None
        }
    }

    fn literals(&mut self, mut lits: &[u8]) -> Status<()> {
        while !lits.is_empty() {
            let n = self.chunk(lits.len());
            self.run_marker(n)?;
            self.out.extend(&lits[..n])?;
            lits = &lits[n..];
        }
        Ok(())
    }

    fn matched(&mut self, distance: usize, len: usize) -> Status<()> {
        if distance == 0 || distance > self.variant.window() {
            return Err(Fault::Error);
        }
        if len <= M2_MAX_LEN && distance <= M2_MAX_OFFSET {
            let v = distance - 1;
            self.out.push((((len - 1) << 5) | (v & 31)) as u8)?;
            self.out.push((v >> 5) as u8)?;
        } else {
            let code = len - 2;
            if code <= 31 {
                self.out.push(M3_MARKER | code as u8)?;
            } else {
                self.out.push(M3_MARKER)?;
                self.out.extension(code - 31)?;
            }
            self.out.push(distance as u8)?;
            self.out.push((distance >> 8) as u8)?;
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
    if src.is_empty() {
        return Err(Fault::EofNotFound);
    }
    let mut r = Reader::new(src);
    let mut w = Writer::new(dst);

    loop {
        if r.at_end() {
            return if variant.has_eof() {
                Err(Fault::EofNotFound)
            } else {
                Ok(w.len())
            };
        }
        let t = r.byte()?;
        if t < 32 {
            let n = if t > 0 {
                t
            } else {
                match r.byte()? {
                    u if u < 0xf8 => 32 + u,
                    _ if !variant.has_bulk_runs() => return Err(Fault::Error),
                    u => 256 << (u - 0xf7),
                }
            };
            w.copy_literals(&mut r, n)?;
            trace.literals(n);
            continue;
        }

        let (distance, len) = if t >= 64 {
            let b = r.byte()?;
            (1 + (t & 31) + (b << 5), (t >> 5) + 1)
        } else {
            let mut code = t & 31;
            if code == 0 {
                code = 31 + r.extension()?;
            }
            let distance = r.byte()? | (r.byte()? << 8);
            if distance == 0 {
                if !variant.has_eof() {
                    return Err(Fault::Error);
                }
                return if r.at_end() {
                    Ok(w.len())
                } else {
                    Err(Fault::InputNotConsumed)
                };
            }
            (distance, code + 2)
        };
        w.copy_match(distance, len)?;
        trace.matched(distance, len);
    }
}
