//! Zeichenreihenfolge eines Frames.

use super::{DrawSurface, LineStyle};
use crate::core::{Pane, SurfaceLayout};
use crate::shared::RenderScene;
use glam::Vec2;

/// Zeichnet einen kompletten Frame auf die Fläche.
///
/// Reihenfolge: Abdunklung, rechte Linie (+ Spiegel-Overlay), linke Linie,
/// Trennlinie.
pub fn render_frame(scene: &RenderScene, surface: &mut dyn DrawSurface) {
    let layout = scene.layout;
    let opts = &scene.options;

    if let Some(pane) = scene.dimmed_pane() {
        let (min, max) = layout.pane_rect(pane);
        surface.fill_rect(min, max, opts.inactive_pane_color);
    }

    let stroke_style = LineStyle::new(opts.stroke_width_px, opts.stroke_color);

    draw_polyline(
        surface,
        &layout,
        Pane::Right,
        scene.right_stroke.points().iter().copied(),
        stroke_style,
    );

    if scene.shows_mirror() {
        draw_polyline(
            surface,
            &layout,
            Pane::Right,
            scene.left_stroke.mirrored(),
            LineStyle::new(opts.stroke_width_px, opts.mirror_color),
        );
    }

    draw_polyline(
        surface,
        &layout,
        Pane::Left,
        scene.left_stroke.points().iter().copied(),
        stroke_style,
    );

    let guide_x = layout.guide_x();
    surface.line_segment(
        Vec2::new(guide_x, 0.0),
        Vec2::new(guide_x, layout.height),
        LineStyle::new(opts.guide_width_px, opts.guide_color),
    );
}

/// Zeichnet Pane-Offsets als Polygonzug, verankert an der Mitte von `pane`.
fn draw_polyline(
    surface: &mut dyn DrawSurface,
    layout: &SurfaceLayout,
    pane: Pane,
    offsets: impl Iterator<Item = Vec2>,
    style: LineStyle,
) {
    let mut previous: Option<Vec2> = None;
    for offset in offsets {
        let point = layout.to_surface(pane, offset);
        if let Some(from) = previous {
            surface.line_segment(from, point, style);
        }
        previous = Some(point);
    }
}
