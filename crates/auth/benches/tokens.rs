criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        hashing_password,
        verifying_password,
        issuing_token,
        verifying_token,
}

use quill_auth::*;
use std::sync::Arc;

fn hashing_password(c: &mut criterion::Criterion) {
    c.bench_function("hash a password", |b| {
        b.iter(|| Hashword::new("correct horse battery staple"))
    });
}

fn verifying_password(c: &mut criterion::Criterion) {
    let hashword = Hashword::new("correct horse battery staple").unwrap();
    c.bench_function("verify a password", |b| {
        b.iter(|| hashword.matches("correct horse battery staple"))
    });
}

fn issuing_token(c: &mut criterion::Criterion) {
    let crypto = Crypto::new(b"bench secret");
    c.bench_function("issue a token", |b| {
        b.iter(|| crypto.issue_default("a@x.com"))
    });
}

fn verifying_token(c: &mut criterion::Criterion) {
    let crypto = Arc::new(Crypto::new(b"bench secret"));
    let registry = Arc::new(Registry::new());
    registry
        .register("a@x.com", "Ada", "555-0100", "p1")
        .unwrap();
    let verifier = Verifier::new(crypto.clone(), registry);
    let token = crypto.issue_default("a@x.com").unwrap();
    c.bench_function("verify a token", |b| {
        b.iter(|| verifier.verify(token.as_str()))
    });
}
