use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use mirror_drawing::{
    render_frame, AppController, AppState, DrawSurface, DrawingSession, LineStyle,
    SurfaceLayout,
};
use std::hint::black_box;

/// Zählt Zeichenaufrufe, ohne tatsächlich zu rendern.
#[derive(Default)]
struct CountingSurface {
    segments: usize,
    rects: usize,
}

impl DrawSurface for CountingSurface {
    fn line_segment(&mut self, from: Vec2, to: Vec2, style: LineStyle) {
        black_box((from, to, style));
        self.segments += 1;
    }

    fn fill_rect(&mut self, min: Vec2, max: Vec2, color: [f32; 4]) {
        black_box((min, max, color));
        self.rects += 1;
    }
}

fn build_points(count: usize, x_offset: f32) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let t = i as f32 * 0.01;
            Vec2::new(x_offset + 150.0 * t.cos(), 300.0 + 150.0 * t.sin())
        })
        .collect()
}

fn draw_both_strokes(session: &mut DrawingSession, left: &[Vec2], right: &[Vec2]) {
    for points in [left, right] {
        session.pointer_down();
        for &point in points {
            session.pointer_move(point);
        }
        session.pointer_up();
    }
}

fn bench_stroke_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("stroke_append");

    for &count in &[1_000usize, 10_000usize] {
        let left = build_points(count, 200.0);
        let right = build_points(count, 600.0);

        group.bench_with_input(BenchmarkId::new("two_strokes", count), &count, |b, _| {
            b.iter(|| {
                let mut session = DrawingSession::new(SurfaceLayout::new(800.0, 600.0));
                session.begin();
                draw_both_strokes(&mut session, black_box(&left), black_box(&right));
                black_box(session.right_stroke().len())
            })
        });
    }

    group.finish();
}

fn bench_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");

    for &count in &[1_000usize, 10_000usize] {
        let mut state = AppState::new();
        state.session.resize(800.0, 600.0);
        state.session.begin();
        draw_both_strokes(
            &mut state.session,
            &build_points(count, 200.0),
            &build_points(count, 600.0),
        );
        state.session.request_result();

        let controller = AppController::new();
        let scene = controller.build_render_scene(&state);

        group.bench_with_input(BenchmarkId::new("checking", count), &scene, |b, scene| {
            b.iter(|| {
                let mut surface = CountingSurface::default();
                render_frame(black_box(scene), &mut surface);
                black_box(surface.segments + surface.rects)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_stroke_append, bench_render_frame);
criterion_main!(benches);
