use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use dnc_trace::run_karatsuba;
use num_bigint::BigUint;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_operand(rng: &mut StdRng, digits: usize) -> BigUint {
    let mut s = String::with_capacity(digits);
    s.push(char::from(b'1' + rng.gen_range(0..9u8)));
    for _ in 1..digits {
        s.push(char::from(b'0' + rng.gen_range(0..10u8)));
    }
    s.parse().unwrap()
}

fn bench_karatsuba_perf(c: &mut Criterion) {
    let mut group = c.benchmark_group("karatsuba_perf");
    for &digits in &[32usize, 128, 512] {
        group.bench_function(format!("karatsuba_digits_{digits}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    let x = random_operand(&mut rng, digits);
                    let y = random_operand(&mut rng, digits);
                    (x, y)
                },
                |(x, y)| {
                    let run = run_karatsuba(&x, &y).unwrap();
                    criterion::black_box(run.recursive_calls);
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_karatsuba_perf);
criterion_main!(benches);
