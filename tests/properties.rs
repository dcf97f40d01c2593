use lzoo::{checksum, lzo, Algorithm, CompressionLevel, Framing};
use proptest::prelude::*;

fn algorithm() -> impl Strategy<Value = Algorithm> {
    proptest::sample::select(Algorithm::ALL.to_vec())
}

fn framing() -> impl Strategy<Value = Framing> {
    prop_oneof![Just(Framing::Standard), Just(Framing::Raw)]
}

/// Short inputs with plenty of repetition, so matches of every kind occur.
fn payload() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        proptest::collection::vec(any::<u8>(), 0..2048),
        proptest::collection::vec(0u8..4, 0..4096),
        (proptest::collection::vec(any::<u8>(), 1..64), 1usize..200)
            .prop_map(|(unit, n)| unit.repeat(n)),
    ]
}

proptest! {
    #[test]
    fn round_trip(
        data in payload(),
        algo in algorithm(),
        framing in framing(),
        level in 1i32..=9,
    ) {
        let comp = lzo::compress(&data, CompressionLevel::Custom(level), framing, algo).unwrap();
        prop_assert!(comp.len() <= lzo::max_compressed_size(data.len(), framing));
        let plain = lzo::decompress(&comp, framing, Some(data.len()), algo).unwrap();
        prop_assert_eq!(plain, data);
    }

    #[test]
    fn optimize_is_transparent(data in payload(), level in 1i32..=9, y in any::<bool>()) {
        let algo = if y { Algorithm::Lzo1y } else { Algorithm::Lzo1x };
        let comp = lzo::compress(&data, CompressionLevel::Custom(level), Framing::Standard, algo)
            .unwrap();
        let opt = lzo::optimize(&comp, Framing::Standard, None, algo).unwrap();
        prop_assert!(opt.len() <= comp.len());
        prop_assert_eq!(lzo::decompress(&opt, Framing::Standard, None, algo).unwrap(), data);
    }

    #[test]
    fn decoders_never_panic(
        blob in proptest::collection::vec(any::<u8>(), 0..512),
        algo in algorithm(),
        framing in framing(),
    ) {
        let _ = lzo::decompress(&blob, framing, Some(4096), algo);
        let _ = lzo::optimize(&blob, framing, Some(4096), algo);
    }

    #[test]
    fn adler32_composes(a in proptest::collection::vec(any::<u8>(), 0..10_000),
                        b in proptest::collection::vec(any::<u8>(), 0..10_000),
                        seed in any::<u32>()) {
        let mut ab = a.clone();
        ab.extend_from_slice(&b);
        prop_assert_eq!(
            checksum::adler32(&b, checksum::adler32(&a, seed)),
            checksum::adler32(&ab, seed)
        );
    }
}
