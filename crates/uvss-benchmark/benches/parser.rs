use std::hint::black_box;

use codspeed_criterion_compat::{
    BenchmarkId, Criterion, Throughput, criterion_group, criterion_main,
};

static SIMPLE: &str = "button { background-color: #ff0000; }";

static MEDIUM: &str = r#"
// Buttons across the application.
Button, RepeatButton
{
    background-color: #ff333333;
    foreground-color: White !important;
    font: "Segoe UI";

    transition (CommonStates, Normal, MouseOver): hover-in;

    trigger property IsPressed = true, IsEnabled <> false important
    {
        set background-color #ff555555;
        play-storyboard (#icon) @pulse;
    }
}

@pulse loop
{
    target (#icon)
    {
        animation Opacity
        {
            keyframe 0 ease-in { 0.5 }
            keyframe 500 { 1.0 }
        }
    }
}
"#;

static BROKEN: &str = "button { color: ; 42 } trigger { @ } target: { ( ";

fn benchmark_parser(c: &mut Criterion) {
    let files = [("Simple", SIMPLE), ("Medium", MEDIUM), ("Broken", BROKEN)];

    let mut group = c.benchmark_group("Parser Benchmark");

    for (name, text) in files {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse_code", name), &text, |b, &text| {
            b.iter(|| {
                let parse = uvss_parse::parse(text);
                black_box(parse);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_parser);
criterion_main!(benches);
