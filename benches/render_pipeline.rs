use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use mandelbrot_explorer::{
    Complex, MandelbrotColourMapKinds, Viewport, render_mandelbrot, render_mandelbrot_serial,
};

const MAX_ITERATIONS: u32 = 256;

fn viewport(width: u32, height: u32) -> Viewport {
    Viewport::new(width, height, Complex::new(-0.5, 0.0), 3.0 / f64::from(width))
        .expect("benchmark viewport is valid")
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_mandelbrot");
    group.sample_size(20);

    for (width, height) in [(320, 240), (800, 600)] {
        let viewport = viewport(width, height);
        let label = format!("{}x{}", width, height);

        group.bench_with_input(BenchmarkId::new("rayon", &label), &viewport, |b, &viewport| {
            b.iter(|| {
                render_mandelbrot(
                    black_box(viewport),
                    MAX_ITERATIONS,
                    MandelbrotColourMapKinds::DuskGradient,
                )
                .expect("render succeeds")
            })
        });

        group.bench_with_input(BenchmarkId::new("serial", &label), &viewport, |b, &viewport| {
            b.iter(|| {
                render_mandelbrot_serial(
                    black_box(viewport),
                    MAX_ITERATIONS,
                    MandelbrotColourMapKinds::DuskGradient,
                )
                .expect("render succeeds")
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
