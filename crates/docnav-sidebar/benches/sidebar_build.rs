//! Benchmarks for sidebar building and traversal.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use docnav_catalog::{DocumentId, DocumentInfo, MemoryCatalog};
use docnav_sidebar::{ItemSpec, Pagination, build, flatten};

/// Create nested categories with specified depth and breadth.
///
/// Every category holds `breadth` pages followed by `breadth` subcategories.
fn create_items(
    prefix: &str,
    depth: usize,
    breadth: usize,
    catalog: &mut MemoryCatalog,
) -> Vec<ItemSpec> {
    let mut items = Vec::new();
    for i in 0..breadth {
        let id = format!("{prefix}page-{i}");
        catalog
            .insert(DocumentInfo::new(DocumentId::new(id.as_str()).unwrap()))
            .unwrap();
        items.push(ItemSpec::doc(id));
    }
    if depth > 0 {
        for i in 0..breadth {
            let child_prefix = format!("{prefix}section-{i}/");
            let children = create_items(&child_prefix, depth - 1, breadth, catalog);
            items.push(ItemSpec::category(format!("Section {i}"), children));
        }
    }
    items
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for (depth, breadth) in [(2, 5), (3, 4), (4, 3)] {
        let mut catalog = MemoryCatalog::new();
        let items = create_items("", depth, breadth, &mut catalog);

        group.bench_with_input(
            BenchmarkId::new("build_tree", format!("d{depth}_b{breadth}")),
            &items,
            |b, items| b.iter(|| build("docs", items, &catalog)),
        );
    }

    group.finish();
}

fn bench_traversal(c: &mut Criterion) {
    let mut catalog = MemoryCatalog::new();
    let items = create_items("", 4, 4, &mut catalog);
    let tree = build("docs", &items, &catalog).unwrap();
    let pagination = Pagination::new(&tree);
    let deep = DocumentId::new("section-3/section-3/section-3/section-3/page-3").unwrap();

    let mut group = c.benchmark_group("traversal");

    group.bench_function("flatten", |b| b.iter(|| flatten(&tree)));

    group.bench_function("breadcrumbs_deep", |b| b.iter(|| tree.breadcrumbs(&deep)));

    group.bench_function("pagination_lookup", |b| b.iter(|| pagination.get(&deep)));

    group.finish();
}

criterion_group!(benches, bench_build, bench_traversal);
criterion_main!(benches);
