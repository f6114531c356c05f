#![no_main]

use arbitrary::Arbitrary;
use carousel_core::{
    Direction, MotionClass, NavPolicy, Navigator, SwipeAction, SwipeTranslator, classify_all,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Advance,
    Retreat,
    Jump(u8),
    Swipe(i16),
    Resize(u8),
}

#[derive(Debug, Arbitrary)]
struct NavInput {
    len: u8,
    wraparound: bool,
    strict_bounds: bool,
    swipe: bool,
    ops: Vec<Op>,
}

fuzz_target!(|input: NavInput| {
    // Cap sizes to keep fuzzing fast.
    let mut len = usize::from(input.len % 32);
    let policy = NavPolicy {
        wraparound: input.wraparound,
        strict_bounds: input.strict_bounds,
    };
    let mut nav = Navigator::new(len, policy);
    nav.initialize(0, true);
    let swipe = SwipeTranslator::new(input.swipe);

    for op in input.ops.iter().take(256) {
        let before = nav.active();
        let transition = match *op {
            Op::Advance => Some(nav.advance()),
            Op::Retreat => Some(nav.retreat()),
            Op::Jump(i) => Some(nav.jump_to(usize::from(i))),
            Op::Swipe(dx) => match swipe.translate(i32::from(dx)).action {
                Some(SwipeAction::Advance) => Some(nav.advance()),
                Some(SwipeAction::Retreat) => Some(nav.retreat()),
                None => None,
            },
            Op::Resize(n) => {
                len = usize::from(n % 32);
                nav.set_len(len);
                None
            }
        };

        let state = nav.state();
        if let Some(t) = transition {
            assert_eq!(t.from, before, "transition must start at the old active");
            assert_eq!(t.to, state.active);
            assert_eq!(state.previous_active, before);
            assert_eq!(state.direction, t.direction);
            if let Op::Jump(i) = *op {
                let forward = t.direction == Direction::Forward;
                assert_eq!(forward, usize::from(i) >= before);
            }
        }

        // Strict bounds keep every committed index in range (after a resize,
        // the next navigation clamps).
        if policy.strict_bounds && transition.is_some() && len > 0 {
            assert!(state.active < len, "active {} out of range {len}", state.active);
        }

        let classes = classify_all(&state, len);
        assert_eq!(classes.len(), len);
        let centers = classes.iter().filter(|c| **c == MotionClass::Center).count();
        assert!(centers <= 1, "more than one center: {classes:?}");
        if state.active < len {
            assert_eq!(classes[state.active], MotionClass::Center);
        }
        for (i, class) in classes.iter().enumerate() {
            if class.is_exiting() {
                assert_eq!(i, state.previous_active, "only the previous panel exits");
            }
        }
    }
});
