//! Hash-chain match finder shared by every stream format.

use super::{Encoder, Fault, Status};

/// Shortest match any format encodes.
pub(crate) const MIN_MATCH: usize = 3;

const HASH_BITS_FAST: u32 = 14;
const HASH_BITS: u32 = 15;

/// How hard the match finder searches.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Effort {
    /// Candidates visited per position; `1` disables the chain table.
    pub chain: usize,
    /// Defer a match by one byte when the next position matches longer.
    pub lazy: bool,
    /// Stop searching once a match this long is found.
    pub nice: usize,
}

impl Effort {
    /// Maps a compression level in `1..=9` to a search effort.
    pub const fn for_level(level: i32) -> Self {
        const CHAIN: [usize; 9] = [1, 4, 8, 16, 32, 64, 128, 256, 512];
        const NICE: [usize; 9] = [32, 32, 64, 64, 128, 128, 256, 258, 2048];
        let i = if level < 1 {
            0
        } else if level > 9 {
            8
        } else {
            (level - 1) as usize
        };
        Self {
            chain: CHAIN[i],
            lazy: level >= 5,
            nice: NICE[i],
        }
    }

    const fn hash_bits(self) -> u32 {
        if self.chain > 1 {
            HASH_BITS
        } else {
            HASH_BITS_FAST
        }
    }

    /// Work memory, in `u32` words, needed to search a `window` with this effort.
    pub const fn work_mem_words(self, window: usize) -> usize {
        let head = 1 << self.hash_bits();
        if self.chain > 1 {
            head + window.next_power_of_two()
        } else {
            head
        }
    }
}

struct Matcher<'a> {
    src: &'a [u8],
    head: &'a mut [u32],
    chain: &'a mut [u32],
    shift: u32,
    mask: usize,
    effort: Effort,
}

impl<'a> Matcher<'a> {
    fn new(src: &'a [u8], wrkmem: &'a mut [u32], effort: Effort, window: usize) -> Status<Self> {
        if wrkmem.len() < effort.work_mem_words(window) {
            return Err(Fault::WorkMemTooSmall);
        }
        let bits = effort.hash_bits();
        let (head, rest) = wrkmem.split_at_mut(1 << bits);
        let chain = if effort.chain > 1 {
            &mut rest[..window.next_power_of_two()]
        } else {
            &mut rest[..0]
        };
        head.fill(0);
        let mask = chain.len().wrapping_sub(1);
        Ok(Self {
            src,
            head,
            chain,
            shift: 32 - bits,
            mask,
            effort,
        })
    }

    fn hash(&self, pos: usize) -> usize {
        let s = &self.src[pos..pos + MIN_MATCH];
        let v = u32::from(s[0]) | u32::from(s[1]) << 8 | u32::from(s[2]) << 16;
        (v.wrapping_mul(0x9e37_79b1) >> self.shift) as usize
    }

    fn insert(&mut self, pos: usize) {
        if pos + MIN_MATCH > self.src.len() {
            return;
        }
        let h = self.hash(pos);
        let prev = self.head[h];
        self.head[h] = pos as u32 + 1;
        if !self.chain.is_empty() {
            self.chain[pos & self.mask] = prev;
        }
    }

    fn common_len(&self, a: usize, b: usize, max: usize) -> usize {
        self.src[a..a + max]
            .iter()
            .zip(&self.src[b..b + max])
            .take_while(|(x, y)| x == y)
            .count()
    }

    fn find<E: Encoder>(&self, pos: usize, enc: &E) -> Option<(usize, usize)> {
        if pos + MIN_MATCH > self.src.len() {
            return None;
        }
        let max = self.src.len() - pos;
        let window = enc.window();
        let mut best: Option<(usize, usize)> = None;

        if let Some(distance) = enc.rep_distance() {
            if distance > 0 && distance <= pos && distance <= window {
                let len = self.common_len(pos - distance, pos, max);
                if len >= MIN_MATCH && enc.worthwhile(distance, len) {
                    best = Some((distance, len));
                }
            }
        }

        let mut cand = self.head[self.hash(pos)];
        let mut steps = self.effort.chain;
        while cand != 0 && steps > 0 {
            let at = cand as usize - 1;
            if at >= pos || pos - at > window {
                break;
            }
            let distance = pos - at;
            let len = self.common_len(at, pos, max);
            let best_len = best.map_or(0, |(_, l)| l);
            if len > best_len && len >= MIN_MATCH && enc.worthwhile(distance, len) {
                best = Some((distance, len));
                if len >= self.effort.nice {
                    break;
                }
            }
            steps -= 1;
            cand = if self.chain.is_empty() {
                0
            } else {
                self.chain[at & self.mask]
            };
        }
        best
    }
}

/// Splits `src` into literal runs and matches and feeds them to `enc`.
pub(crate) fn parse<E: Encoder>(
    src: &[u8],
    wrkmem: &mut [u32],
    effort: Effort,
    enc: &mut E,
) -> Status<()> {
    let mut m = Matcher::new(src, wrkmem, effort, enc.window())?;
    let mut anchor = 0;
    let mut pos = 0;

    while pos + MIN_MATCH <= src.len() {
        let (mut distance, mut len) = match m.find(pos, enc) {
            Some(found) => found,
            None => {
                m.insert(pos);
                pos += 1;
                continue;
            }
        };
        m.insert(pos);

        while effort.lazy && len < effort.nice {
            match m.find(pos + 1, enc) {
                Some((d, l)) if l > len => {
                    pos += 1;
                    m.insert(pos);
                    distance = d;
                    len = l;
                }
                _ => break,
            }
        }

        enc.literals(&src[anchor..pos])?;
        enc.matched(distance, len)?;

        let end = pos + len;
        if effort.chain > 1 {
            for p in pos + 1..end {
                m.insert(p);
            }
        }
        pos = end;
        anchor = end;
    }

    enc.literals(&src[anchor..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Collect {
        out: Vec<u8>,
        matches: usize,
        last: Option<usize>,
        rep: bool,
    }

    impl Encoder for Collect {
        fn window(&self) -> usize {
            0xffff
        }

        fn worthwhile(&self, _: usize, _: usize) -> bool {
            true
        }

        fn rep_distance(&self) -> Option<usize> {
            if self.rep {
                self.last
            } else {
                None
            }
        }

        fn literals(&mut self, lits: &[u8]) -> Status<()> {
            self.out.extend_from_slice(lits);
            Ok(())
        }

        fn matched(&mut self, distance: usize, len: usize) -> Status<()> {
            assert!(distance <= self.out.len());
            let from = self.out.len() - distance;
            for i in 0..len {
                let b = self.out[from + i];
                self.out.push(b);
            }
            self.matches += 1;
            self.last = Some(distance);
            Ok(())
        }
    }

    fn reproduce(src: &[u8], level: i32, rep: bool) -> Collect {
        let effort = Effort::for_level(level);
        let mut wrkmem = vec![0u32; effort.work_mem_words(0xffff)];
        let mut enc = Collect {
            rep,
            ..Collect::default()
        };
        parse(src, &mut wrkmem, effort, &mut enc).unwrap();
        enc
    }

    #[test]
    fn parse_reproduces_input() {
        let text = b"the quick brown fox jumps over the lazy dog; the quick brown fox".repeat(20);
        for level in 1..=9 {
            for &rep in &[false, true] {
                let enc = reproduce(&text, level, rep);
                assert_eq!(enc.out, text);
                assert!(enc.matches > 0);
            }
        }
    }

    #[test]
    fn run_of_one_byte_is_a_single_match() {
        let src = vec![b' '; 4096];
        let enc = reproduce(&src, 1, false);
        assert_eq!(enc.out, src);
        assert_eq!(enc.matches, 1);
    }

    #[test]
    fn short_input_is_all_literals() {
        let enc = reproduce(b"ab", 9, false);
        assert_eq!(enc.out, b"ab");
        assert_eq!(enc.matches, 0);
    }

    #[test]
    fn small_work_memory_is_rejected() {
        let effort = Effort::for_level(9);
        let mut wrkmem = vec![0u32; 16];
        let mut enc = Collect::default();
        assert_eq!(
            parse(b"abcabcabc", &mut wrkmem, effort, &mut enc),
            Err(Fault::WorkMemTooSmall)
        );
    }

    #[test]
    fn levels_map_to_increasing_effort() {
        let fast = Effort::for_level(1);
        let best = Effort::for_level(9);
        assert_eq!(fast.chain, 1);
        assert!(!fast.lazy);
        assert!(best.chain > fast.chain && best.lazy);
        assert!(fast.work_mem_words(0xbfff) < best.work_mem_words(0xbfff));
    }
}
