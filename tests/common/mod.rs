#![allow(dead_code)]

use lazy_static::lazy_static;
use lzoo::{Algorithm, CompressionLevel, Framing};
use rand::{distributions::Standard, rngs::SmallRng, Rng, SeedableRng};

lazy_static! {
    static ref DATA_SET: Vec<Vec<u8>> = {
        let mut set = vec![
            Vec::new(),
            b"a".to_vec(),
            b"aaaaaaaaaaaaaaaaaaaaaaaa".to_vec(),
            b"abcabcabcabcabcabcabcabc".to_vec(),
            vec![b' '; 131_072],
            text(64 << 10),
        ];
        set.extend([0, 4, 8, 12, 14].iter().map(|&n| {
            let rng = SmallRng::seed_from_u64(n as u64);
            rng.sample_iter(Standard).take(16 << n).collect()
        }));
        set
    };
}

/// Pseudo text: words drawn from a small vocabulary.
fn text(len: usize) -> Vec<u8> {
    const WORDS: &[&str] = &[
        "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed",
        "do", "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna",
    ];
    let mut rng = SmallRng::seed_from_u64(0x1020_3040);
    let mut out = Vec::with_capacity(len + 16);
    while out.len() < len {
        out.extend_from_slice(WORDS[rng.gen_range(0, WORDS.len())].as_bytes());
        out.push(if rng.gen_bool(0.1) { b'\n' } else { b' ' });
    }
    out.truncate(len);
    out
}

pub fn generate_data() -> impl Iterator<Item = Vec<u8>> {
    DATA_SET.clone().into_iter()
}

fn level_set() -> impl Iterator<Item = CompressionLevel> {
    vec![
        CompressionLevel::Fast,
        CompressionLevel::Custom(5),
        CompressionLevel::Best,
    ]
    .into_iter()
}

fn framing_set() -> impl Iterator<Item = Framing> {
    vec![Framing::Standard, Framing::Raw].into_iter()
}

/// Every data sample under every algorithm, framing and a few levels.
pub fn lzo_test_set() -> impl Iterator<Item = (Vec<u8>, Algorithm, Framing, CompressionLevel)> {
    generate_data().flat_map(|data| {
        Algorithm::ALL.iter().copied().flat_map(move |algo| {
            let data = data.clone();
            framing_set().flat_map(move |framing| {
                let data = data.clone();
                level_set().map(move |level| (data.clone(), algo, framing, level))
            })
        })
    })
}
