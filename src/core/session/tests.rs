use super::*;
use approx::assert_relative_eq;

const WIDTH: f32 = 800.0;
const HEIGHT: f32 = 600.0;

fn started_session() -> DrawingSession {
    let mut session = DrawingSession::new(SurfaceLayout::new(WIDTH, HEIGHT));
    session.begin();
    session
}

fn drawn_session() -> DrawingSession {
    let mut session = started_session();
    session.pointer_down();
    session.pointer_move(Vec2::new(100.0, 300.0));
    session.pointer_up();
    session.pointer_down();
    session.pointer_move(Vec2::new(500.0, 300.0));
    session.pointer_up();
    assert_eq!(session.phase(), DrawingPhase::Drawn);
    session
}

/// Vergleichbarer Schnappschuss des beobachtbaren Zustands.
fn snapshot(session: &DrawingSession) -> (DrawingPhase, bool, Vec<Vec2>, Vec<Vec2>) {
    (
        session.phase(),
        session.is_pointer_down(),
        session.left_stroke().points().to_vec(),
        session.right_stroke().points().to_vec(),
    )
}

#[test]
fn new_session_starts_in_init() {
    let session = DrawingSession::new(SurfaceLayout::new(WIDTH, HEIGHT));
    assert_eq!(session.phase(), DrawingPhase::Init);
    assert!(!session.is_pointer_down());
    assert!(session.left_stroke().is_empty());
    assert!(session.right_stroke().is_empty());
    assert_eq!(session.active_pane(), None);
}

#[test]
fn begin_moves_to_left_ready() {
    let session = started_session();
    assert_eq!(session.phase(), DrawingPhase::LeftReady);
    assert_eq!(session.active_pane(), Some(Pane::Left));
}

#[test]
fn pointer_move_without_pointer_down_never_mutates_strokes() {
    let mut session = started_session();

    session.pointer_move(Vec2::new(10.0, 10.0));
    session.pointer_move(Vec2::new(20.0, 20.0));

    assert!(session.left_stroke().is_empty());
    assert!(session.right_stroke().is_empty());
    assert_eq!(session.phase(), DrawingPhase::LeftReady);
}

#[test]
fn pointer_move_in_init_is_ignored_even_when_pressed() {
    let mut session = DrawingSession::new(SurfaceLayout::new(WIDTH, HEIGHT));
    session.pointer_down();
    session.pointer_move(Vec2::new(10.0, 10.0));

    assert_eq!(session.phase(), DrawingPhase::Init);
    assert!(session.is_pointer_down());
    assert!(session.left_stroke().is_empty());
}

#[test]
fn left_stroke_records_offsets_from_left_center() {
    let mut session = started_session();

    session.pointer_down();
    session.pointer_move(Vec2::new(10.0, 0.0));
    session.pointer_move(Vec2::new(20.0, 0.0));
    session.pointer_up();

    assert_eq!(session.phase(), DrawingPhase::RightReady);
    let points = session.left_stroke().points();
    assert_eq!(points.len(), 2);
    assert_relative_eq!(points[0].x, 10.0 - WIDTH / 4.0);
    assert_relative_eq!(points[0].y, -HEIGHT / 2.0);
    assert_relative_eq!(points[1].x, 20.0 - WIDTH / 4.0);
    assert_relative_eq!(points[1].y, -HEIGHT / 2.0);
    assert!(session.right_stroke().is_empty());
}

#[test]
fn right_stroke_records_offsets_from_right_center() {
    let mut session = started_session();
    session.pointer_down();
    session.pointer_up();

    session.pointer_down();
    assert_eq!(session.phase(), DrawingPhase::RightDrawing);
    session.pointer_move(Vec2::new(650.0, 310.0));
    session.pointer_up();

    let points = session.right_stroke().points();
    assert_eq!(points.len(), 1);
    assert_relative_eq!(points[0].x, 650.0 - WIDTH * 3.0 / 4.0);
    assert_relative_eq!(points[0].y, 10.0);
}

#[test]
fn full_sequence_yields_point_counts_and_drawn() {
    for (n, m) in [(0usize, 0usize), (1, 1), (5, 3), (40, 17)] {
        let mut session = started_session();

        session.pointer_down();
        for i in 0..n {
            session.pointer_move(Vec2::new(i as f32, 50.0));
        }
        session.pointer_up();
        session.pointer_down();
        for i in 0..m {
            session.pointer_move(Vec2::new(400.0 + i as f32, 50.0));
        }
        session.pointer_up();

        assert_eq!(session.left_stroke().len(), n);
        assert_eq!(session.right_stroke().len(), m);
        assert_eq!(session.phase(), DrawingPhase::Drawn);
        assert!(!session.is_pointer_down());
    }
}

#[test]
fn pointer_down_outside_ready_phases_only_sets_flag() {
    let mut session = drawn_session();
    let (_, _, left, right) = snapshot(&session);

    session.pointer_down();
    assert!(session.is_pointer_down());
    assert_eq!(session.phase(), DrawingPhase::Drawn);

    session.pointer_move(Vec2::new(1.0, 1.0));
    session.pointer_up();
    assert_eq!(snapshot(&session), (DrawingPhase::Drawn, false, left, right));
}

#[test]
fn begin_resets_from_every_phase() {
    let mut session = drawn_session();
    session.request_result();
    assert_eq!(session.phase(), DrawingPhase::Checking);

    session.pointer_down();
    session.begin();

    assert_eq!(session.phase(), DrawingPhase::LeftReady);
    assert!(session.left_stroke().is_empty());
    assert!(session.right_stroke().is_empty());
    assert!(!session.is_pointer_down());

    let mut mid_stroke = started_session();
    mid_stroke.pointer_down();
    mid_stroke.pointer_move(Vec2::new(3.0, 3.0));
    mid_stroke.begin();
    assert_eq!(mid_stroke.phase(), DrawingPhase::LeftReady);
    assert!(mid_stroke.left_stroke().is_empty());
    assert!(!mid_stroke.is_pointer_down());
}

#[test]
fn request_result_is_noop_outside_drawn() {
    let mut session = DrawingSession::new(SurfaceLayout::new(WIDTH, HEIGHT));
    session.request_result();
    assert_eq!(session.phase(), DrawingPhase::Init);

    let mut session = started_session();
    for _ in 0..2 {
        let before = snapshot(&session);
        session.request_result();
        assert_eq!(snapshot(&session), before);
        session.pointer_down();
        let before = snapshot(&session);
        session.request_result();
        assert_eq!(snapshot(&session), before);
        session.pointer_up();
    }
    assert_eq!(session.phase(), DrawingPhase::Drawn);
}

#[test]
fn dismiss_result_is_noop_outside_checking() {
    let mut session = drawn_session();
    let before = snapshot(&session);

    session.dismiss_result();

    assert_eq!(snapshot(&session), before);

    let mut session = started_session();
    session.dismiss_result();
    assert_eq!(session.phase(), DrawingPhase::LeftReady);
}

#[test]
fn result_toggle_cycles_between_drawn_and_checking() {
    let mut session = drawn_session();

    for _ in 0..3 {
        session.request_result();
        assert_eq!(session.phase(), DrawingPhase::Checking);
        session.request_result();
        assert_eq!(session.phase(), DrawingPhase::Checking);
        session.dismiss_result();
        assert_eq!(session.phase(), DrawingPhase::Drawn);
    }
    assert_eq!(session.left_stroke().len(), 1);
    assert_eq!(session.right_stroke().len(), 1);
}

#[test]
fn cancel_end_stroke_advances_like_pointer_up() {
    let mut session = started_session();
    assert_eq!(session.cancel_behavior(), PointerCancelBehavior::EndStroke);

    session.pointer_down();
    session.pointer_move(Vec2::new(50.0, 50.0));
    session.pointer_cancel();

    assert_eq!(session.phase(), DrawingPhase::RightReady);
    assert!(!session.is_pointer_down());
    assert_eq!(session.left_stroke().len(), 1);
}

#[test]
fn cancel_release_only_keeps_phase() {
    let mut session = DrawingSession::new(SurfaceLayout::new(WIDTH, HEIGHT))
        .with_cancel_behavior(PointerCancelBehavior::ReleaseOnly);
    session.begin();

    session.pointer_down();
    session.pointer_move(Vec2::new(50.0, 50.0));
    session.pointer_cancel();

    assert_eq!(session.phase(), DrawingPhase::LeftDrawing);
    assert!(!session.is_pointer_down());

    // Weitere Bewegung ohne erneutes Drücken wird ignoriert
    session.pointer_move(Vec2::new(60.0, 60.0));
    assert_eq!(session.left_stroke().len(), 1);

    // Erneutes Drücken setzt die linke Linie fort
    session.pointer_down();
    session.pointer_move(Vec2::new(70.0, 70.0));
    session.pointer_up();
    assert_eq!(session.left_stroke().len(), 2);
    assert_eq!(session.phase(), DrawingPhase::RightReady);
}

#[test]
fn resize_does_not_rescale_existing_points() {
    let mut session = started_session();
    session.pointer_down();
    session.pointer_move(Vec2::new(100.0, 100.0));

    session.resize(1600.0, 1200.0);
    session.pointer_move(Vec2::new(100.0, 100.0));

    let points = session.left_stroke().points();
    assert_relative_eq!(points[0].x, 100.0 - WIDTH / 4.0);
    assert_relative_eq!(points[0].y, 100.0 - HEIGHT / 2.0);
    assert_relative_eq!(points[1].x, 100.0 - 400.0);
    assert_relative_eq!(points[1].y, 100.0 - 600.0);
    assert_eq!(session.layout(), SurfaceLayout::new(1600.0, 1200.0));
}

#[test]
fn apply_pointer_event_dispatches_to_session_calls() {
    let mut session = started_session();

    for event in [
        PointerEvent::Down {
            pos: Vec2::new(10.0, 10.0),
        },
        PointerEvent::Move {
            pos: Vec2::new(11.0, 10.0),
        },
        PointerEvent::Move {
            pos: Vec2::new(12.0, 10.0),
        },
        PointerEvent::Up,
        PointerEvent::Down {
            pos: Vec2::new(600.0, 10.0),
        },
        PointerEvent::Move {
            pos: Vec2::new(601.0, 10.0),
        },
        PointerEvent::Cancel,
    ] {
        session.apply_pointer_event(event);
    }

    assert_eq!(session.left_stroke().len(), 2);
    assert_eq!(session.right_stroke().len(), 1);
    assert_eq!(session.phase(), DrawingPhase::Drawn);
}

#[test]
fn only_one_stroke_grows_per_phase() {
    let mut session = started_session();
    session.pointer_down();
    for i in 0..10 {
        session.pointer_move(Vec2::new(i as f32 * 80.0, 10.0));
    }
    // Auch Punkte über der rechten Pane landen in der linken Linie
    assert_eq!(session.left_stroke().len(), 10);
    assert!(session.right_stroke().is_empty());
}
