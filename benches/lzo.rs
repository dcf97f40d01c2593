use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lzoo::{checksum, lzo, Algorithm, CompressionLevel, Framing};

fn sample() -> Vec<u8> {
    let text = "Far out in the uncharted backwaters of the unfashionable end of the western \
                spiral arm of the Galaxy lies a small unregarded yellow sun. ";
    let mut data = Vec::with_capacity(64 << 10);
    let mut i = 0u32;
    while data.len() < 64 << 10 {
        data.extend_from_slice(text.as_bytes());
        data.extend_from_slice(i.to_string().as_bytes());
        i = i.wrapping_mul(1_103_515_245).wrapping_add(12345);
    }
    data
}

fn lzo_benchmark(c: &mut Criterion) {
    let data = sample();

    let mut group = c.benchmark_group("compress");
    group.throughput(Throughput::Bytes(data.len() as u64));
    for algo in &Algorithm::ALL {
        for level in &[CompressionLevel::Fast, CompressionLevel::Best] {
            group.bench_with_input(
                BenchmarkId::new(algo.name(), format!("{:?}", level)),
                &data,
                |b, data| {
                    b.iter(|| lzo::compress(black_box(data), *level, Framing::Raw, *algo).unwrap())
                },
            );
        }
    }
    group.finish();

    let mut group = c.benchmark_group("decompress");
    group.throughput(Throughput::Bytes(data.len() as u64));
    for algo in &Algorithm::ALL {
        let comp = lzo::compress(&data, CompressionLevel::Best, Framing::Standard, *algo).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(algo.name()), &comp, |b, comp| {
            b.iter(|| lzo::decompress(black_box(comp), Framing::Standard, None, *algo).unwrap())
        });
    }
    group.finish();

    let comp = lzo::compress(&data, CompressionLevel::Best, Framing::Standard, Algorithm::Lzo1x)
        .unwrap();
    c.bench_function("lzo::optimize (LZO1X)", |b| {
        b.iter(|| lzo::optimize(black_box(&comp), Framing::Standard, None, Algorithm::Lzo1x).unwrap())
    });

    c.bench_function("checksum::adler32", |b| {
        b.iter(|| checksum::adler32(black_box(&data), checksum::ADLER32_INIT))
    });
    c.bench_function("checksum::crc32", |b| {
        b.iter(|| checksum::crc32(black_box(&data), checksum::CRC32_INIT))
    });
}

criterion_group!(benches, lzo_benchmark);
criterion_main!(benches);
