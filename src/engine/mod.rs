//! The LZO engine driven by the binding layer.
//!
//! Everything in here works on caller-provided buffers: compressors write
//! into a conservatively-sized output slice and report the produced length,
//! decompressors are bounds-checked ("safe") decoders that report what went
//! wrong as a [`Fault`] instead of panicking.
//!
//! The binding in [`crate::lzo`] never reaches into the stream formats
//! directly; it only goes through `lzo::binding`.

mod checksum;
pub(crate) mod lzo1;
pub(crate) mod lzo1x;
mod matcher;
mod optimize;

use std::fmt;

pub(crate) use checksum::{adler32, crc32};
pub(crate) use matcher::{parse, Effort, MIN_MATCH};
pub(crate) use optimize::optimize;

/// `LZO_VERSION` of the liblzo release whose LZO1X family layouts the engine follows.
pub(crate) const LZO_VERSION: u32 = 0x20a0;
pub(crate) const LZO_VERSION_STRING: &str = "2.10";
pub(crate) const LZO_VERSION_DATE: &str = "Mar 01 2017";

/// The reason an engine call failed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub(crate) enum Fault {
    /// Generic failure, including instructions the stream format does not define.
    Error,
    /// The work memory handed to a compressor is smaller than it requires.
    WorkMemTooSmall,
    /// The decoder needed more input than was provided.
    InputOverrun,
    /// The output does not fit into the destination buffer.
    OutputOverrun,
    /// A match refers to data before the start of the output.
    LookbehindOverrun,
    /// The input ended without an end-of-stream marker.
    EofNotFound,
    /// Bytes follow the end-of-stream marker.
    InputNotConsumed,
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Error => "malformed stream",
            Self::WorkMemTooSmall => "work memory too small",
            Self::InputOverrun => "input overrun",
            Self::OutputOverrun => "output overrun",
            Self::LookbehindOverrun => "lookbehind overrun",
            Self::EofNotFound => "end of stream not found",
            Self::InputNotConsumed => "input not consumed",
        };
        f.write_str(msg)
    }
}

pub(crate) type Status<T> = std::result::Result<T, Fault>;

/// One decoded instruction of a compressed stream.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub(crate) enum Token {
    Literals(usize),
    Match { distance: usize, len: usize },
}

/// Receives the instructions a decoder executes.
pub(crate) trait Trace {
    fn literals(&mut self, len: usize);
    fn matched(&mut self, distance: usize, len: usize);
}

impl Trace for () {
    #[inline]
    fn literals(&mut self, _: usize) {}

    #[inline]
    fn matched(&mut self, _: usize, _: usize) {}
}

impl Trace for Vec<Token> {
    fn literals(&mut self, len: usize) {
        self.push(Token::Literals(len));
    }

    fn matched(&mut self, distance: usize, len: usize) {
        self.push(Token::Match { distance, len });
    }
}

/// A stream encoder fed by the match finder.
pub(crate) trait Encoder {
    /// Largest match distance the stream can address.
    fn window(&self) -> usize;

    /// Whether encoding this match saves space over literals.
    fn worthwhile(&self, distance: usize, len: usize) -> bool;

    /// A distance the format encodes cheaply when repeated.
    fn rep_distance(&self) -> Option<usize> {
        None
    }

    fn literals(&mut self, lits: &[u8]) -> Status<()>;

    fn matched(&mut self, distance: usize, len: usize) -> Status<()>;
}

/// Bounds-checked cursor over the compressed input.
pub(crate) struct Reader<'a> {
    src: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(src: &'a [u8]) -> Self {
        Self { src, pos: 0 }
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    pub fn byte(&mut self) -> Status<usize> {
        let b = *self.src.get(self.pos).ok_or(Fault::InputOverrun)?;
        self.pos += 1;
        Ok(b as usize)
    }

    pub fn take(&mut self, len: usize) -> Status<&'a [u8]> {
        let end = self.pos.checked_add(len).ok_or(Fault::InputOverrun)?;
        let bytes = self.src.get(self.pos..end).ok_or(Fault::InputOverrun)?;
        self.pos = end;
        Ok(bytes)
    }

    /// Reads a run of zero bytes followed by a non-zero byte,
    /// each zero counting for 255.
    pub fn extension(&mut self) -> Status<usize> {
        let mut len = 0usize;
        loop {
            match self.byte()? {
                0 => len += 255,
                b => return Ok(len + b),
            }
        }
    }
}

/// Bounds-checked cursor over the decompressed output.
pub(crate) struct Writer<'a> {
    dst: &'a mut [u8],
    pos: usize,
}

impl<'a> Writer<'a> {
    pub fn new(dst: &'a mut [u8]) -> Self {
        Self { dst, pos: 0 }
    }

    pub fn len(&self) -> usize {
        self.pos
    }

    pub fn copy_literals(&mut self, src: &mut Reader<'_>, len: usize) -> Status<()> {
        let lits = src.take(len)?;
        let end = self.pos + len;
        self.dst
            .get_mut(self.pos..end)
            .ok_or(Fault::OutputOverrun)?
            .copy_from_slice(lits);
        self.pos = end;
        Ok(())
    }

    pub fn copy_match(&mut self, distance: usize, len: usize) -> Status<()> {
        if distance == 0 || distance > self.pos {
            return Err(Fault::LookbehindOverrun);
        }
        let end = self.pos.checked_add(len).ok_or(Fault::OutputOverrun)?;
        if end > self.dst.len() {
            return Err(Fault::OutputOverrun);
        }
        let from = self.pos - distance;
        if distance >= len {
            self.dst.copy_within(from..from + len, self.pos);
        } else {
            for i in 0..len {
                self.dst[self.pos + i] = self.dst[from + i];
            }
        }
        self.pos = end;
        Ok(())
    }
}

/// Output cursor for encoders.
pub(crate) struct Output<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> Output<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn len(&self) -> usize {
        self.pos
    }

    pub fn push(&mut self, b: u8) -> Status<()> {
        *self.buf.get_mut(self.pos).ok_or(Fault::OutputOverrun)? = b;
        self.pos += 1;
        Ok(())
    }

    pub fn extend(&mut self, bytes: &[u8]) -> Status<()> {
        let end = self.pos + bytes.len();
        self.buf
            .get_mut(self.pos..end)
            .ok_or(Fault::OutputOverrun)?
            .copy_from_slice(bytes);
        self.pos = end;
        Ok(())
    }

    /// Writes `len` as zero bytes worth 255 each plus a final non-zero byte.
    /// `len` must be non-zero.
    pub fn extension(&mut self, mut len: usize) -> Status<()> {
        debug_assert!(len > 0);
        while len > 255 {
            self.push(0)?;
            len -= 255;
        }
        self.push(len as u8)
    }

    /// ORs `bits` into an already written byte.
    pub fn set_bits(&mut self, at: usize, bits: u8) {
        self.buf[at] |= bits;
    }
}
