use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::Rng;
use xxhash::{xxh32, xxh64};

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rnd = rand::thread_rng();
    let mut buf = vec![0u8; 64 * 1024];
    for i in buf.iter_mut() {
        *i = rnd.gen();
    }

    let mut group = c.benchmark_group("oneshot");
    for len in [7, 64, 600, 64 * 1024] {
        let input = &buf[..len];
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_function(format!("xxh32 {} bytes", len), |b| {
            b.iter(|| xxh32(black_box(input), 0))
        });
        group.bench_function(format!("xxh64 {} bytes", len), |b| {
            b.iter(|| xxh64(black_box(input), 0))
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
