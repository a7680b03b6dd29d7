//! パフォーマンスベンチマーク
//!
//! ヘッダーラベル生成のパフォーマンスを測定します。
//! 最大サイズのドキュメント（1000列 × 1000行）の全ヘッダー生成を対象とします。

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tabulator::{
    format_header_label, header_labels, DocumentTable, HeaderLabel, PreferencesBuilder,
};

/// 最大セル数
const MAX_CELLS: u32 = 1000;

/// 種類ごとに1軸分（1000項目）のラベルを生成
fn benchmark_header_labels(c: &mut Criterion) {
    let mut group = c.benchmark_group("header_labels");
    group.throughput(Throughput::Elements(u64::from(MAX_CELLS)));

    for kind in HeaderLabel::ALL {
        let parameter = match kind {
            HeaderLabel::Custom => "Column #",
            _ => kind.default_parameter(),
        };

        group.bench_function(format!("{:?}", kind), |b| {
            b.iter(|| black_box(header_labels(black_box(MAX_CELLS), kind, parameter)));
        });
    }

    group.finish();
}

/// 大きなインデックスでのアルファベットラベル
fn benchmark_letter_large_index(c: &mut Criterion) {
    c.bench_function("letter_u32_max", |b| {
        b.iter(|| {
            black_box(format_header_label(
                black_box(u32::MAX),
                HeaderLabel::Letter,
                "upper",
            ))
        });
    });
}

/// 最大サイズの新規ドキュメント生成
fn benchmark_new_document(c: &mut Criterion) {
    let preferences = PreferencesBuilder::new()
        .with_default_cell_count_column(MAX_CELLS)
        .with_default_cell_count_row(MAX_CELLS)
        .build()
        .unwrap();

    c.bench_function("new_document_1000x1000", |b| {
        b.iter(|| black_box(DocumentTable::new(black_box(&preferences))));
    });
}

criterion_group!(
    benches,
    benchmark_header_labels,
    benchmark_letter_large_index,
    benchmark_new_document
);
criterion_main!(benches);
