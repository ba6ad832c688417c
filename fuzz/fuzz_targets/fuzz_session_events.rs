#![no_main]

use glam::Vec2;
use libfuzzer_sys::fuzz_target;
use mirror_drawing::{
    DrawingPhase, DrawingSession, PointerCancelBehavior, PointerEvent, SurfaceLayout,
};

fn coord(bytes: &[u8]) -> f32 {
    let raw = u16::from_le_bytes([bytes[0], bytes[1]]);
    f32::from(raw) - 1024.0
}

fuzz_target!(|data: &[u8]| {
    let Some((&mode, ops)) = data.split_first() else {
        return;
    };

    let behavior = if mode & 1 == 0 {
        PointerCancelBehavior::EndStroke
    } else {
        PointerCancelBehavior::ReleaseOnly
    };
    let mut session =
        DrawingSession::new(SurfaceLayout::new(800.0, 600.0)).with_cancel_behavior(behavior);

    for chunk in ops.chunks_exact(5) {
        let pos = Vec2::new(coord(&chunk[1..3]), coord(&chunk[3..5]));
        let left_before = session.left_stroke().len();
        let right_before = session.right_stroke().len();

        match chunk[0] % 8 {
            0 => session.apply_pointer_event(PointerEvent::Down { pos }),
            1 => session.apply_pointer_event(PointerEvent::Move { pos }),
            2 => session.apply_pointer_event(PointerEvent::Up),
            3 => session.apply_pointer_event(PointerEvent::Cancel),
            4 => session.request_result(),
            5 => session.dismiss_result(),
            6 => session.resize(pos.x.abs(), pos.y.abs()),
            _ => {
                session.begin();
                assert_eq!(session.phase(), DrawingPhase::LeftReady);
                assert!(session.left_stroke().is_empty());
                assert!(session.right_stroke().is_empty());
                continue;
            }
        }

        assert!(DrawingPhase::ALL.contains(&session.phase()));
        assert!(session.left_stroke().len() >= left_before);
        assert!(session.right_stroke().len() >= right_before);
    }
});
