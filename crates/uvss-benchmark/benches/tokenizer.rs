use codspeed_criterion_compat::{
    Criterion, Throughput, black_box, criterion_group, criterion_main,
};

static SOURCE: &str = "
Button.primary > #icon:hover, ListBox | Items [0] as Panel { margin: { 1 2 } !important; }
trigger property IsPressed <> true, Width >= 10 { set Opacity (#icon) 0.5; play-sfx click; }
@fade loop { target Image { animation Opacity { keyframe 250 ease-in { 1.0 } } } }
";

static IDENTIFIERS: &str =
    "background-color foreground-color border-thickness padding margin font-family \
     opacity visibility horizontal-alignment vertical-alignment text-wrapping \
     background-color foreground-color border-thickness padding margin font-family \
     opacity visibility horizontal-alignment vertical-alignment text-wrapping";

static CANDIDATES: [(&str, &str); 2] =
    [("identifiers", IDENTIFIERS), ("keywords_operators_and_punctuation", SOURCE)];

fn iterate(s: &str) {
    use uvss_syntax::SyntaxKind;
    use uvss_tokenizer::Tokenizer;

    let mut tokenizer = Tokenizer::new(s);

    loop {
        let token = tokenizer.next_token();
        if token.kind == SyntaxKind::EOF {
            break;
        }
        black_box(token);
    }
}

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");

    for (name, source) in CANDIDATES {
        let source = source.repeat(30);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(name, &source, |b, s| b.iter(|| iterate(s)));
    }
}

criterion_group!(benches, bench_iterate);
criterion_main!(benches);
