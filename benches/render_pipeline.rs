use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use mandelbrot_explorer::core::data::viewport_size::ViewportSize;
use mandelbrot_explorer::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use mandelbrot_explorer::{MandelbrotConfig, render_frame};

fn bench_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");

    for (width, height) in [(320, 240), (800, 600)] {
        for kind in MandelbrotColourMapKinds::ALL.iter().copied() {
            let config = MandelbrotConfig {
                colour_map_kind: kind,
                ..MandelbrotConfig::default()
            };
            let size = ViewportSize::new(width, height).expect("bench size is non-empty");
            let request = config.build_render_request(size, config.initial_transform);

            group.bench_with_input(
                BenchmarkId::new(kind.display_name(), format!("{}x{}", width, height)),
                &request,
                |b, request| b.iter(|| render_frame(black_box(request))),
            );
        }
    }

    group.finish();
}

fn bench_known_interior_shortcut(c: &mut Criterion) {
    let mut group = c.benchmark_group("known_interior_shortcut");
    let size = ViewportSize::new(320, 240).expect("bench size is non-empty");

    for skip_known_interior in [false, true] {
        let config = MandelbrotConfig {
            skip_known_interior,
            max_iterations: 500,
            ..MandelbrotConfig::default()
        };
        let request = config.build_render_request(size, config.initial_transform);

        group.bench_with_input(
            BenchmarkId::from_parameter(skip_known_interior),
            &request,
            |b, request| b.iter(|| render_frame(black_box(request))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_render_frame, bench_known_interior_shortcut);
criterion_main!(benches);
