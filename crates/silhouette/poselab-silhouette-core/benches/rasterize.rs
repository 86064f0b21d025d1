use criterion::{black_box, criterion_group, criterion_main, Criterion};
use poselab_silhouette_core::{rasterize, Dimensions, PolygonBoundary};

fn star_boundary(spikes: usize, cx: i32, cy: i32, r_outer: i32, r_inner: i32) -> PolygonBoundary {
    let mut boundary = PolygonBoundary::new();
    let steps = spikes * 2;
    for i in 0..steps {
        let r = if i % 2 == 0 { r_outer } else { r_inner };
        let angle = std::f64::consts::TAU * i as f64 / steps as f64;
        let x = cx + (angle.cos() * f64::from(r)).round() as i32;
        let y = cy + (angle.sin() * f64::from(r)).round() as i32;
        boundary.add_vertex(x, y);
    }
    boundary
}

fn bench_rasterize_star(c: &mut Criterion) {
    let boundary = star_boundary(24, 640, 512, 480, 220);
    let dims = Dimensions::new(1280, 1024);

    c.bench_function("rasterize_star_48_vertices_1280x1024", |b| {
        b.iter(|| {
            let mask = rasterize(black_box(&boundary), black_box(dims)).expect("enough vertices");
            black_box(mask.count_inside());
        });
    });
}

fn bench_rasterize_quad(c: &mut Criterion) {
    let mut boundary = PolygonBoundary::new();
    for &(x, y) in &[(100, 80), (1180, 120), (1100, 940), (140, 900)] {
        boundary.add_vertex(x, y);
    }
    let dims = Dimensions::new(1280, 1024);

    c.bench_function("rasterize_quad_1280x1024", |b| {
        b.iter(|| {
            let mask = rasterize(black_box(&boundary), black_box(dims)).expect("enough vertices");
            black_box(mask.count_inside());
        });
    });
}

criterion_group!(benches, bench_rasterize_star, bench_rasterize_quad);
criterion_main!(benches);
