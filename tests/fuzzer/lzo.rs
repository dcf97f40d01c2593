use lzoo::{lzo, Algorithm, CodecBuilder, CompressionLevel, Framing};
use rand::{distributions::Standard, rngs::SmallRng, Rng, SeedableRng};

#[test]
fn parallel_compression_decompression() {
    super::run("round trip", |state| {
        let data = generate_data(state, 4096);
        let codec = generate_codec(state).build();
        let err = |_| (data.clone(), codec);

        let mut comp = Vec::new();
        codec.compress_to_vec(&data, &mut comp).map_err(err)?;

        let mut decomp = Vec::new();
        codec
            .decompress_to_vec(&comp, &mut decomp, Some(data.len()))
            .map_err(err)?;

        if decomp != data {
            return Err((data, codec));
        }

        if codec.algorithm().supports_optimize() {
            let opt = codec.optimize(&comp, Some(data.len())).map_err(err)?;
            let decomp = codec.decompress(&opt, Some(data.len())).map_err(err)?;
            if opt.len() > comp.len() || decomp != data {
                return Err((data, codec));
            }
        }
        Ok(())
    });
}

#[test]
fn mutated_blobs() {
    super::run("mutation", |state| {
        let data = generate_data(state, 1024);
        let codec = generate_codec(state).build();
        let mut comp = codec.compress(&data).map_err(|_| (data.clone(), codec))?;

        let mut rng = SmallRng::seed_from_u64(state ^ 0x5eed);
        if comp.is_empty() {
            comp.push(rng.gen());
        }
        for _ in 0..rng.gen_range(1, 4) {
            let at = rng.gen_range(0, comp.len());
            comp[at] = rng.gen();
        }
        if rng.gen_bool(0.3) {
            let len = rng.gen_range(0, comp.len() + 1);
            comp.truncate(len);
        }

        // Any outcome but a panic is fine; a successful decode must honour
        // the length it was given.
        if let Ok(plain) = codec.decompress(&comp, Some(data.len())) {
            if codec.framing() == Framing::Raw && plain.len() > data.len() {
                return Err((data, codec));
            }
        }
        let _ = lzo::optimize(&comp, codec.framing(), Some(data.len()), codec.algorithm());
        Ok(())
    });
}

pub fn generate_data(state: u64, max_len: usize) -> Vec<u8> {
    let mut rng = SmallRng::seed_from_u64(state);
    let len = rng.gen_range(0, max_len + 1);
    match rng.gen_range(0, 3) {
        0 => rng.sample_iter(Standard).take(len).collect(),
        1 => {
            let alphabet: u8 = rng.gen_range(1, 8);
            (0..len).map(|_| rng.gen_range(0, alphabet)).collect()
        }
        _ => {
            let unit_len = rng.gen_range(1, 32);
            let unit: Vec<u8> = rng.sample_iter(Standard).take(unit_len).collect();
            unit.iter().copied().cycle().take(len).collect()
        }
    }
}

pub fn generate_codec(state: u64) -> CodecBuilder {
    let mut rng = SmallRng::seed_from_u64(state);
    let mut builder = CodecBuilder::new();
    builder
        .algorithm(Algorithm::ALL[rng.gen_range(0, Algorithm::ALL.len())])
        .level(match rng.gen_range(0, 4) {
            0 => CompressionLevel::Fast,
            1 => CompressionLevel::Best,
            2 => CompressionLevel::Default,
            _ => CompressionLevel::Custom(rng.gen_range(1, 10)),
        })
        .framing(if rng.gen_bool(0.5) {
            Framing::Standard
        } else {
            Framing::Raw
        });
    builder
}
