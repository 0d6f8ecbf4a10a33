//! Benchmarks for parameter decoding

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use param_style::{ParamShape, Params, decode};
use std::hint::black_box;

/// Inputs per style for the array and object shapes
const CASES: &[(&str, bool, &str, &str)] = &[
    (
        "matrix",
        false,
        ";color=blue,black,brown",
        ";color=R,100,G,200,B,150",
    ),
    (
        "matrix",
        true,
        ";color=blue;color=black;color=brown",
        ";R=100;G=200;B=150",
    ),
    ("label", false, ".blue.black.brown", ".R.100.G.200.B.150"),
    ("label", true, ".blue.black.brown", ".R=100.G=200.B=150"),
    (
        "form",
        false,
        "color=blue,black,brown",
        "color=R,100,G,200,B,150",
    ),
    (
        "form",
        true,
        "color=blue&color=black&color=brown",
        "R=100&G=200&B=150",
    ),
    ("simple", false, "blue,black,brown", "R,100,G,200,B,150"),
    ("simple", true, "blue,black,brown", "R=100,G=200,B=150"),
    (
        "spaceDelimited",
        false,
        "blue%20black%20brown",
        "R%20100%20G%20200%20B%20150",
    ),
    ("pipeDelimited", false, "blue|black|brown", "R|100|G|200|B|150"),
    (
        "deepObject",
        true,
        "n/a",
        "color[R]=100&color[G]=200&color[B]=150",
    ),
];

fn benchmark_styles(c: &mut Criterion) {
    let mut group = c.benchmark_group("styles");

    for &(style, explode, array, object) in CASES {
        let id = format!("{style}/explode={explode}");
        for (shape, input) in [(ParamShape::Array, array), (ParamShape::Object, object)] {
            group.bench_with_input(
                BenchmarkId::new(format!("{shape:?}"), &id),
                &input,
                |b, input| {
                    b.iter(|| {
                        let mut bag = Params::new();
                        decode(black_box(input), style, explode, shape, &mut bag).unwrap();
                        black_box(bag);
                    });
                },
            );
        }
    }

    group.finish();
}

fn benchmark_long_query(c: &mut Criterion) {
    let query: String = (0..500)
        .map(|i| format!("filter[key{i}]=value{i}"))
        .collect::<Vec<_>>()
        .join("&");

    c.bench_function("deep_object_500_keys", |b| {
        b.iter(|| {
            let mut bag = Params::new();
            decode(
                black_box(&query),
                "deepObject",
                true,
                ParamShape::Object,
                &mut bag,
            )
            .unwrap();
            black_box(bag);
        });
    });
}

criterion_group!(benches, benchmark_styles, benchmark_long_query);
criterion_main!(benches);
