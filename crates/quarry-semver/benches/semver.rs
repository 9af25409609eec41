use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quarry_semver::{compare, parse_version, parse_version_range};

fn bench_parse_version(c: &mut Criterion) {
    let versions = [
        "1.2.3",
        "0.0.4",
        "1.0.0-alpha.1",
        "2.0.0-rc.1+build.123",
        "1.2.3----RC-SNAPSHOT.12.9.1--.12+788",
        "99999999999999999999999.999999999999999999.99999999999999999",
    ];

    c.bench_function("parse_version", |b| {
        b.iter(|| {
            for version in versions {
                black_box(parse_version(black_box(version)).ok());
            }
        })
    });
}

fn bench_parse_version_range(c: &mut Criterion) {
    let ranges = [
        "[1.0.0,2.0.0)",
        "(,4.5.6]",
        "1.2.+",
        "+",
        ">=1.0.0",
        "^1.2.3",
        "1.2.3",
    ];

    c.bench_function("parse_version_range", |b| {
        b.iter(|| {
            for range in ranges {
                black_box(parse_version_range(black_box(range)).ok());
            }
        })
    });
}

fn bench_compare(c: &mut Criterion) {
    let pairs = [
        ("1.2.3", "1.2.4"),
        ("1.0.0-alpha", "1.0.0"),
        ("1.0.0-alpha.1", "1.0.0-alpha.beta"),
        ("1.0.0+build.1", "1.0.0+build.2"),
        ("10.20.30", "10.20.30"),
    ];
    let parsed: Vec<_> = pairs
        .iter()
        .map(|(a, b)| {
            (
                parse_version(a).expect("parse version"),
                parse_version(b).expect("parse version"),
            )
        })
        .collect();

    c.bench_function("compare_versions", |b| {
        b.iter(|| {
            for (a, bver) in &parsed {
                black_box(compare(black_box(a), black_box(bver)));
            }
        })
    });
}

fn bench_satisfies_parsed(c: &mut Criterion) {
    let range = parse_version_range("[1.0.0,2.0.0)").expect("parse range");
    let versions: Vec<_> = [
        "0.9.9",
        "1.0.0",
        "1.2.3-alpha",
        "1.9999.9999",
        "2.0.0",
        "2.0.0-rc.1",
    ]
    .iter()
    .map(|v| parse_version(v).expect("parse version"))
    .collect();

    c.bench_function("range_satisfies_parsed", |b| {
        b.iter(|| {
            for version in &versions {
                black_box(range.is_satisfied_by(black_box(version)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_parse_version,
    bench_parse_version_range,
    bench_compare,
    bench_satisfies_parsed
);
criterion_main!(benches);
