use super::options::{CLEVEL_MAX, CLEVEL_MIN};
use crate::{engine::Effort, Error, ErrorKind};
use std::{fmt, ops::RangeInclusive, str::FromStr};

/// LZO algorithm selector.
///
/// A compressed blob does not record which algorithm produced it;
/// the same value must be passed again to decompress it.
///
/// # Compatibility with liblzo
///
/// `Lzo1x`, `Lzo1y` and `Lzo1z` read and write liblzo's stream layouts
/// for those formats: a raw LZO1X payload from `lzo1x_1_compress` or
/// `lzo1x_999_compress` decompresses here, and the other way around.
///
/// `Lzo1`, `Lzo1a`, `Lzo1b`, `Lzo1c`, `Lzo1f` and `Lzo2a` use formats of
/// this crate that borrow the names and window sizes of the liblzo
/// algorithms but not their bit layouts. Their output can only be read
/// back by this crate. See [`is_liblzo_compatible`](Self::is_liblzo_compatible).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Lzo1,
    Lzo1a,
    Lzo1b,
    Lzo1c,
    Lzo1f,
    Lzo1x,
    Lzo1y,
    Lzo1z,
    Lzo2a,
}

impl Default for Algorithm {
    fn default() -> Self {
        Self::Lzo1x
    }
}

/// Constant properties of an algorithm.
#[derive(Debug)]
pub(crate) struct Traits {
    pub name: &'static str,
    /// Whether the compression level changes the search effort.
    pub honors_level: bool,
    /// Whether the stream format can express an empty input.
    pub empty_input: bool,
    pub end_marker: bool,
    pub optimize: bool,
    /// Whether streams use liblzo's layout for the format.
    pub liblzo: bool,
    /// Largest match distance.
    pub window: usize,
    /// Accepted compression levels.
    pub levels: RangeInclusive<i32>,
    /// Work memory, in `u32` words, enough for every level.
    pub work_mem: usize,
}

const fn traits(
    name: &'static str,
    honors_level: bool,
    end_marker: bool,
    optimize: bool,
    liblzo: bool,
    window: usize,
) -> Traits {
    Traits {
        name,
        honors_level,
        empty_input: end_marker,
        end_marker,
        optimize,
        liblzo,
        window,
        levels: RangeInclusive::new(CLEVEL_MIN, CLEVEL_MAX),
        work_mem: Effort::for_level(CLEVEL_MAX).work_mem_words(window),
    }
}

static TRAITS: [Traits; 9] = [
    traits("LZO1", true, false, false, false, 0x2000),
    traits("LZO1A", true, false, false, false, 0x2000),
    traits("LZO1B", true, true, false, false, 0xffff),
    traits("LZO1C", true, true, false, false, 0xffff),
    traits("LZO1F", true, true, false, false, 0x4000),
    traits("LZO1X", true, true, true, true, 0xbfff),
    traits("LZO1Y", true, true, true, true, 0xbfff),
    traits("LZO1Z", false, true, false, true, 0xbfff),
    traits("LZO2A", false, true, false, false, 0xffff),
];

impl Algorithm {
    /// Every algorithm, in tag order.
    pub const ALL: [Self; 9] = [
        Self::Lzo1,
        Self::Lzo1a,
        Self::Lzo1b,
        Self::Lzo1c,
        Self::Lzo1f,
        Self::Lzo1x,
        Self::Lzo1y,
        Self::Lzo1z,
        Self::Lzo2a,
    ];

    pub(crate) fn traits(self) -> &'static Traits {
        &TRAITS[self as usize]
    }

    /// Returns the canonical upper-case name, e.g. `"LZO1X"`.
    pub fn name(self) -> &'static str {
        self.traits().name
    }

    /// Returns `true` if [`optimize`](crate::lzo::optimize) is defined for
    /// this algorithm.
    ///
    /// ```
    /// use lzoo::Algorithm;
    ///
    /// assert!(Algorithm::Lzo1x.supports_optimize());
    /// assert!(!Algorithm::Lzo1b.supports_optimize());
    /// ```
    pub fn supports_optimize(self) -> bool {
        self.traits().optimize
    }

    /// Returns `true` if the compression level affects the output.
    ///
    /// LZO1Z and LZO2A always search as hard as they can.
    pub fn honors_level(self) -> bool {
        self.traits().honors_level
    }

    /// Returns `true` if streams end with an explicit end marker.
    ///
    /// LZO1 and LZO1A streams stop where the data stops, so they have no
    /// encoding for an empty input; the binding stores an empty payload
    /// for it instead.
    pub fn has_end_marker(self) -> bool {
        self.traits().end_marker
    }

    /// Returns the largest distance a match may reach back.
    pub fn window_size(self) -> usize {
        self.traits().window
    }

    /// Returns the compression levels this algorithm accepts.
    ///
    /// ```
    /// use lzoo::Algorithm;
    ///
    /// assert_eq!(Algorithm::Lzo2a.level_range(), 1..=9);
    /// ```
    pub fn level_range(self) -> RangeInclusive<i32> {
        self.traits().levels.clone()
    }

    /// Returns `true` if the stream layout is the one liblzo uses for this
    /// algorithm, so raw payloads can be exchanged with it.
    ///
    /// ```
    /// use lzoo::Algorithm;
    ///
    /// assert!(Algorithm::Lzo1x.is_liblzo_compatible());
    /// assert!(!Algorithm::Lzo1b.is_liblzo_compatible());
    /// ```
    pub fn is_liblzo_compatible(self) -> bool {
        self.traits().liblzo
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Parses a canonical name, ignoring case.
    ///
    /// ```
    /// use lzoo::Algorithm;
    ///
    /// assert_eq!("lzo1y".parse::<Algorithm>().unwrap(), Algorithm::Lzo1y);
    /// assert!("lzo3".parse::<Algorithm>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|algo| algo.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::InvalidArgument,
                    format!("unknown algorithm {:?}", s),
                )
            })
    }
}
