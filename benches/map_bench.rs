use cmap::{Merge, OctoMap};

use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

#[derive(Clone, Copy, Default)]
struct Mass(u64);

impl Merge for Mass {
    fn merge(&mut self, incoming: Self) {
        self.0 += incoming.0;
    }
}

fn random_coords(n: usize) -> Vec<[u32; 3]> {
    let mut rng = StdRng::seed_from_u64(0x00C0_FFEE);
    (0..n).map(|_| rng.gen()).collect()
}

fn bench_insert(c: &mut Criterion) {
    let coords = random_coords(10_000);
    c.bench_function("insert_10k_random", |b| {
        b.iter(|| {
            let mut map = OctoMap::<u32, Mass>::new();
            for &coord in &coords {
                map.insert(coord, Mass(1));
            }
            black_box(map.len())
        });
    });
}

fn bench_resize(c: &mut Criterion) {
    let coords = random_coords(10_000);
    c.bench_function("resize_until_dense", |b| {
        b.iter(|| {
            let mut map = OctoMap::<u32, Mass>::new();
            for &coord in &coords {
                map.insert(coord, Mass(1));
            }
            while 8 * map.len() > coords.len() {
                map.resize();
            }
            black_box((map.len(), map.num_resizes()))
        });
    });
}

fn bench_iterate(c: &mut Criterion) {
    let coords = random_coords(10_000);
    let mut map = OctoMap::<u32, Mass>::new();
    for &coord in &coords {
        map.insert(coord, Mass(1));
    }
    c.bench_function("iterate_10k", |b| {
        b.iter(|| {
            let total: u64 = map.iter().map(|(_, mass)| mass.0).sum();
            black_box(total)
        });
    });
}

criterion_group!(benches, bench_insert, bench_resize, bench_iterate);
criterion_main!(benches);
