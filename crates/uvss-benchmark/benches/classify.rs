use std::hint::black_box;

use codspeed_criterion_compat::{Criterion, Throughput, criterion_group, criterion_main};

static SOURCE: &str = "
/* Shared chrome. */
Window > Grid #content .panel:focused
{
    border-thickness: 1 !important;
    trigger event Mouse.Click (handled) { set Opacity 0.25; }
}
@flash reverse { target Panel { animation Opacity { keyframe 100 { 0.0 } } } }
";

fn bench_classify(c: &mut Criterion) {
    let source = SOURCE.repeat(50);
    let parse = uvss_parse::parse(&source);

    let mut group = c.benchmark_group("classify");
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("classify", |b| {
        b.iter(|| black_box(uvss_ide::classify(parse.root())));
    });
    group.finish();
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
