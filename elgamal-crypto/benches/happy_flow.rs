use criterion::{Criterion, black_box, criterion_group, criterion_main};
use elgamal_crypto::system::ElGamal;
use num_bigint::BigUint;

fn bench_happy_flow(c: &mut Criterion) {
    // 1) one‐time setup: 2^127 - 1 with a fixed private key
    let p = (BigUint::from(1u32) << 127usize) - 1u32;
    let alpha = BigUint::from(3u32);
    let a = "98765432109876543210987654321"
        .parse::<BigUint>()
        .expect("parse private key");
    let beta = alpha.modpow(&a, &p);

    let mut cryptosystem = ElGamal::try_with(p, alpha, beta).expect("build cryptosystem");
    cryptosystem.set_private_key(a);

    // the same message every iteration
    let message = BigUint::from(123_456_789u64);

    c.bench_function("happy_flow", |b| {
        b.iter(|| {
            // 2) encrypt
            let cipher = cryptosystem
                .encrypt(black_box(&message), None)
                .expect("encrypt");

            // 3) decrypt
            let decoded = cryptosystem.decrypt(&cipher).expect("decrypt");

            // 4) black_box the result so the optimizer can't drop it
            black_box(decoded);
        })
    });
}

criterion_group!(benches, bench_happy_flow);
criterion_main!(benches);
