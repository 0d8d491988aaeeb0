use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hibe::{decrypt, encrypt, hash_to_gt, keygen_from_master, keygen_from_parent, setup, Params, Scalar};

const L: usize = 10;

fn sample_identity(depth: usize) -> Vec<Scalar> {
    (1..=depth as u64).map(Scalar::from).collect()
}

fn criterion_setup_benchmark(criterion: &mut Criterion) {
    criterion.bench_function("setup", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| setup(&mut rng, L))
    });
}

fn criterion_params_round_trip_benchmark(criterion: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let (params, _master) = setup(&mut rng, L).unwrap();
    let bytes = params.to_bytes();

    criterion.bench_function("params unpack", |b| {
        b.iter(|| Params::from_bytes(black_box(&bytes)))
    });
}

fn criterion_keygen_from_master_benchmark(criterion: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let (params, master) = setup(&mut rng, L).unwrap();
    let id = sample_identity(3);

    criterion.bench_function("keygen_from_master", move |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| keygen_from_master(&mut rng, black_box(&params), black_box(&master), black_box(&id)))
    });
}

fn criterion_keygen_from_parent_benchmark(criterion: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let (params, master) = setup(&mut rng, L).unwrap();
    let parent_id = sample_identity(3);
    let child_id = sample_identity(4);
    let parent_key = keygen_from_master(&mut rng, &params, &master, &parent_id).unwrap();

    criterion.bench_function("keygen_from_parent", move |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            keygen_from_parent(
                &mut rng,
                black_box(&params),
                black_box(&parent_key),
                black_box(&child_id),
            )
        })
    });
}

fn criterion_encrypt_decrypt_benchmark(criterion: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let (params, master) = setup(&mut rng, L).unwrap();
    let id = sample_identity(3);
    let key = keygen_from_master(&mut rng, &params, &master, &id).unwrap();
    let msg = hash_to_gt(b"benchmark message");
    let ct = encrypt(&mut rng, &params, &id, &msg).unwrap();

    criterion.bench_function("encrypt", move |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| encrypt(&mut rng, black_box(&params), black_box(&id), black_box(&msg)))
    });
    criterion.bench_function("decrypt", move |b| {
        b.iter(|| decrypt(black_box(&key), black_box(&ct)))
    });
}

criterion_group!(
    benches,
    criterion_setup_benchmark,
    criterion_params_round_trip_benchmark,
    criterion_keygen_from_master_benchmark,
    criterion_keygen_from_parent_benchmark,
    criterion_encrypt_decrypt_benchmark,
);
criterion_main!(benches);
