// SPDX-FileCopyrightText: 2026 ctxpanel contributors
// SPDX-License-Identifier: MIT

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use ctxpanel::compose::{compose_context_tree, GroupSpec};
use ctxpanel::model::fixtures::{demo_record, sparse_record};
use ctxpanel::model::{CustomContextItem, DiagnosticRecord};

// Benchmark identity (keep stable):
// - Group name in this file: `compose.tree`
// - Case IDs (`sparse`, `full`, `many_custom_items`) must remain stable across
//   refactors so results stay comparable over time.
fn checksum_tree(tree: &[GroupSpec]) -> u64 {
    let mut acc = 0u64;
    for group in tree {
        acc = acc.wrapping_mul(131).wrapping_add(group.sections.len() as u64);
        for section in &group.sections {
            acc = acc.wrapping_mul(131).wrapping_add(section.anchor.as_str().len() as u64);
            acc = acc.wrapping_mul(131).wrapping_add(section.visible as u64);
        }
    }
    acc
}

fn many_custom_items_record() -> DiagnosticRecord {
    let mut record = demo_record();
    record.custom_context_items = (0..64)
        .map(|idx| CustomContextItem {
            name: format!("tenant_context_{idx:02}"),
            items: Default::default(),
        })
        .collect();
    record
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose.tree");

    for (case_id, record) in [
        ("sparse", sparse_record()),
        ("full", demo_record()),
        ("many_custom_items", many_custom_items_record()),
    ] {
        group.throughput(Throughput::Elements(1));
        group.bench_function(case_id, |b| {
            b.iter(|| {
                let tree = compose_context_tree(black_box(&record));
                black_box(checksum_tree(&tree))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compose);
criterion_main!(benches);
