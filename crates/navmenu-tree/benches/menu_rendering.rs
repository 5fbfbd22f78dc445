//! Benchmarks for menu rendering and lookup.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use navmenu_tree::{ItemSpec, ListId, MenuTree, OptionsPatch, Whitespace};

/// Build a menu with `breadth` items per list, nested `depth` levels deep.
fn create_menu(depth: usize, breadth: usize) -> (MenuTree, ListId) {
    fn create_level(tree: &mut MenuTree, path: &str, depth: usize, breadth: usize) -> ListId {
        let list = tree.named_list(format!("list{path}"));
        for i in 0..breadth {
            let url = format!("{path}/section-{i}");
            let spec = if depth > 1 {
                ItemSpec::new().children(create_level(tree, &url, depth - 1, breadth))
            } else {
                ItemSpec::new()
            };
            tree.list_mut(list)
                .unwrap()
                .add_with(url.clone(), format!("Section {i}"), spec)
                .unwrap();
        }
        list
    }

    let mut tree = MenuTree::new();
    let root = create_level(&mut tree, "", depth, breadth);
    (tree, root)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for (depth, breadth) in [(2, 10), (4, 5), (6, 3)] {
        let (tree, root) = create_menu(depth, breadth);
        let id = format!("{depth}x{breadth}");

        group.bench_with_input(BenchmarkId::new("pretty", &id), &root, |b, &root| {
            b.iter(|| tree.render(root, &OptionsPatch::new()).unwrap());
        });

        let compact = OptionsPatch::new().whitespace(Whitespace::Compact);
        group.bench_with_input(BenchmarkId::new("compact", &id), &root, |b, &root| {
            b.iter(|| tree.render(root, &compact).unwrap());
        });

        let limited = OptionsPatch::new().max_depth(2);
        group.bench_with_input(BenchmarkId::new("max_depth_2", &id), &root, |b, &root| {
            b.iter(|| tree.render(root, &limited).unwrap());
        });
    }

    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let (tree, root) = create_menu(4, 5);

    let mut group = c.benchmark_group("find");

    group.bench_function("hit", |b| {
        b.iter(|| tree.find_name(root, "list/section-4/section-4").unwrap());
    });

    group.bench_function("miss", |b| {
        b.iter(|| tree.find_name(root, "nonexistent").unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_render, bench_find);
criterion_main!(benches);
