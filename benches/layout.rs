use criterion::{Criterion, black_box, criterion_group, criterion_main};

use alcove::{Block, Bounds, Component, ComponentRef, Flow, Grid, Layout, Panel, component_ref};

fn blocks(count: usize) -> Vec<ComponentRef> {
    (0..count)
        .map(|i| component_ref(Block::new(20.0 + (i % 7) as f32 * 4.0, 12.0)))
        .collect()
}

fn grid_pass(c: &mut Criterion) {
    let items = blocks(256);
    let grid = Grid::new().columns(16).hgap(2.0).vgap(2.0).items(items);
    let container = Panel::new().with_bounds(Bounds::new(0.0, 0.0, 800.0, 600.0));

    c.bench_function("grid_layout_256", |b| {
        b.iter(|| grid.layout(black_box(&container)))
    });
}

fn flow_pass(c: &mut Criterion) {
    let items = blocks(256);
    let flow = Flow::new().hgap(3.0).vgap(3.0).items(items);
    let container = Panel::new().with_bounds(Bounds::new(0.0, 0.0, 400.0, 0.0));

    c.bench_function("flow_layout_256", |b| {
        b.iter(|| {
            flow.layout(black_box(&container));
            black_box(flow.preferred(&container))
        })
    });
}

fn do_layout_tree(c: &mut Criterion) {
    c.bench_function("panel_do_layout_64", |b| {
        b.iter(|| {
            let items = blocks(64);
            let mut panel = Panel::new()
                .with_bounds(Bounds::new(0.0, 0.0, 640.0, 480.0))
                .with_layout(Grid::new().columns(8).items(items.clone()))
                .with_children(items);
            panel.do_layout();
            black_box(panel.metrics().snapshot(std::time::Duration::ZERO))
        })
    });
}

criterion_group!(benches, grid_pass, flow_pass, do_layout_tree);
criterion_main!(benches);
