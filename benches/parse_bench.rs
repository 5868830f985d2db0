use criterion::{black_box, criterion_group, criterion_main, Criterion};
use reviewparse::{
    corpus::parse,
    transformers::{CleanText, Transform},
};

fn corpus(nb: usize) -> Vec<String> {
    (0..nb)
        .flat_map(|i| {
            [
                format!("product/productId: B00{}", i % 100),
                format!("review/userId: A{}", i % 1000),
                "review/profileName: delmartian".to_string(),
                format!("review/helpfulness: {}/{}", i % 3, 3 + i % 5),
                "review/score: 5.0".to_string(),
                "review/time: 1303862400".to_string(),
                "review/summary: Good Quality Dog Food".to_string(),
                "review/text: I have bought several of the Vitality canned dog food products and have found them all to be of good quality.".to_string(),
            ]
        })
        .collect()
}

pub fn parsing(c: &mut Criterion) {
    let lines = corpus(10_000);
    c.bench_function("parse_10k", |b| b.iter(|| parse(black_box(&lines)).unwrap()));

    let reviews = parse(&lines).unwrap();
    c.bench_function("clean_10k", |b| {
        b.iter(|| CleanText.transform_all(black_box(reviews.clone())))
    });
}

criterion_group!(benches, parsing);
criterion_main!(benches);
