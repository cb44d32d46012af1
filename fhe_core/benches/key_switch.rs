use algebra::decompose::GadgetBasis;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fhe_core::{KeySwitchingKey, LVL10};
use lattice::Lwe;
use rand::prelude::*;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = thread_rng();

    let basis: GadgetBasis<u32> = LVL10.basis().unwrap();
    let bg = basis.basis() as usize;
    let count = LVL10.input_dimension * basis.length() * bg;

    // Random entries are enough to measure the lookups and accumulation.
    let entries: Vec<Lwe<u32>> = (0..count)
        .map(|_| {
            let a = (0..LVL10.output_dimension).map(|_| rng.gen()).collect();
            Lwe::new(a, rng.gen())
        })
        .collect();
    let ksk = KeySwitchingKey::new(
        basis,
        LVL10.input_dimension,
        LVL10.output_dimension,
        entries,
    )
    .unwrap();

    let a: Vec<u32> = (0..LVL10.input_dimension).map(|_| rng.gen()).collect();
    let ct = Lwe::new(a, rng.gen());

    c.bench_function("key switch lvl10", |b| {
        b.iter(|| ksk.key_switch(black_box(&ct)))
    });

    c.bench_function("par key switch lvl10", |b| {
        b.iter(|| ksk.par_key_switch(black_box(&ct)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
