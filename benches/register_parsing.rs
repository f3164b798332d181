use std::fmt::Write;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use doc_register::parse_document;

/// Generate a synthetic narrative document with N sections
fn generate_document(num_sections: usize) -> String {
    let mut doc = String::from("# Threading and QObject Ownership\n\n> Synthetic benchmark document.\n\n");

    for i in 0..num_sections {
        let heading = if i % 2 == 0 { "What AI Writes" } else { "What to Write Instead" };
        write!(
            doc,
            "## {} {}\n\nRULE: rule number {}\nSee [other](doc-{}.md).\n\n```cpp\n// comment\nauto *t{} = new QTimer(this);\n```\n\n| Case | AI Pattern |\n|---|---|\n| c{} | `QThread` |\n\n",
            heading, i, i, i, i, i
        )
        .unwrap();
    }

    doc
}

fn bench_parse_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_document");

    for size in [10, 100, 1_000].iter() {
        let doc = generate_document(*size);

        group.throughput(Throughput::Bytes(doc.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| parse_document("cpp/threading.md", "cpp", black_box(&doc)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_document);
criterion_main!(benches);
