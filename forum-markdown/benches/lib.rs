use criterion::{criterion_group, criterion_main};

mod render {
    use criterion::{BenchmarkId, Criterion, Throughput};
    use forum_markdown::{Dialect, LineBreakMode, Options, ParserPool};

    const POST: &str = "# Release notes

Thanks to **everyone** who tested the *beta*. A few ~~known~~ fixed issues:

- uploads over `10MB` no longer time out
- quoted replies keep their [links](https://example.com/t/1 \"thread\")
  1. nested numbering
  2. works again

> Is the old theme still available?
>
> > Yes, under *settings*.

| Feature | Status |
|:--------|-------:|
| search  | done   |
| tags    | beta   |

```rust
fn main() {
    println!(\"hello\");
}
```
";

    pub fn ordinary_posts(c: &mut Criterion) {
        let mut group = c.benchmark_group("ordinary_posts");
        let pool = ParserPool::new();
        let text = POST.repeat(20);
        group.throughput(Throughput::Bytes(text.len() as u64));
        for dialect in [Dialect::Strict, Dialect::Lenient, Dialect::Lightweight] {
            let options = Options::new(dialect).with_line_breaks(LineBreakMode::all());
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{:?}", dialect)),
                &text,
                |b, text| b.iter(|| pool.get(options).parse(text, false)),
            );
        }
        group.finish();
    }

    pub fn pathological_nested_emphasis(c: &mut Criterion) {
        let mut group = c.benchmark_group("pathological_nested_emphasis");
        let mut buf = String::new();
        for i in 1..10 {
            buf.clear();
            buf.push_str(&"*a **a ".repeat(i * 500));
            buf.push_str(&"_b ".repeat(i * 500));
            group.throughput(Throughput::Bytes(buf.len() as u64));
            group.bench_with_input(BenchmarkId::from_parameter(i), &buf, |b, buf| {
                b.iter(|| render_strict(buf));
            });
        }
        group.finish();
    }

    pub fn pathological_brackets(c: &mut Criterion) {
        let mut group = c.benchmark_group("pathological_brackets");
        let mut buf = String::new();
        for i in 1..10 {
            buf.clear();
            buf.push_str(&"[a](".repeat(i * 200));
            buf.push_str(&"![".repeat(i * 200));
            group.throughput(Throughput::Bytes(buf.len() as u64));
            group.bench_with_input(BenchmarkId::from_parameter(i), &buf, |b, buf| {
                b.iter(|| render_strict(buf));
            });
        }
        group.finish();
    }

    pub fn pathological_link_def(c: &mut Criterion) {
        let mut group = c.benchmark_group("pathological_link_def");
        let mut buf = String::new();
        for i in 1..20 {
            buf.clear();
            buf.push_str("[x]: ");
            buf.push_str(&"x".repeat(i * 100));
            buf.push_str(&"\n[x]".repeat(i * 100));
            group.throughput(Throughput::Bytes(buf.len() as u64));
            group.bench_with_input(BenchmarkId::from_parameter(i), &buf, |b, buf| {
                b.iter(|| render_strict(buf));
            });
        }
        group.finish();
    }

    pub fn pathological_codeblocks(c: &mut Criterion) {
        let mut group = c.benchmark_group("pathological_codeblocks");
        let mut buf = String::new();
        for i in 1..10 {
            buf.push_str(&"`".repeat(i * 100));
            buf.push(' ');
            group.throughput(Throughput::Bytes(buf.len() as u64));
            group.bench_with_input(BenchmarkId::from_parameter(i), &buf, |b, buf| {
                b.iter(|| render_strict(buf));
            });
        }
        group.finish();
    }

    pub fn pathological_nested_quotes(c: &mut Criterion) {
        let mut group = c.benchmark_group("pathological_nested_quotes");
        let mut buf = String::new();
        for i in 1..10 {
            buf.clear();
            for depth in 0..i * 50 {
                buf.push_str(&"> ".repeat(depth));
                buf.push_str("- x\n");
            }
            group.throughput(Throughput::Bytes(buf.len() as u64));
            group.bench_with_input(BenchmarkId::from_parameter(i), &buf, |b, buf| {
                b.iter(|| render_strict(buf));
            });
        }
        group.finish();
    }

    fn render_strict(text: &str) -> String {
        forum_markdown::parse(text, false, Options::new(Dialect::Strict))
    }
}

criterion_group!(
    benches,
    render::ordinary_posts,
    render::pathological_nested_emphasis,
    render::pathological_brackets,
    render::pathological_link_def,
    render::pathological_codeblocks,
    render::pathological_nested_quotes
);
criterion_main!(benches);
