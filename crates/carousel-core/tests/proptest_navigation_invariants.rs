//! Property-based invariant tests for navigation and motion classification.
//!
//! 1. Strict bounds keep `active` and `previous_active` in range for any
//!    operation sequence.
//! 2. Every committed transition records `previous_active == old active`.
//! 3. `classify` is deterministic.
//! 4. An in-range active index yields exactly one `Center`; the exiting panel
//!    (if any) is `previous_active`.
//! 5. With wraparound, `len` advances return to the starting panel.
//! 6. Without wraparound, advance/retreat never move past either end.

use carousel_core::nav::{Direction, NavPolicy, NavState, Navigator};
use carousel_core::transition::{MotionClass, classify, classify_all};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum Op {
    Advance,
    Retreat,
    Jump(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Advance),
        Just(Op::Retreat),
        (0usize..40).prop_map(Op::Jump),
    ]
}

fn apply(nav: &mut Navigator, op: Op) {
    match op {
        Op::Advance => {
            nav.advance();
        }
        Op::Retreat => {
            nav.retreat();
        }
        Op::Jump(i) => {
            nav.jump_to(i);
        }
    }
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Forward), Just(Direction::Backward)]
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Strict bounds and previous_active bookkeeping
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn strict_bounds_hold(
        len in 0usize..12,
        wraparound in any::<bool>(),
        start in 0usize..40,
        ops in proptest::collection::vec(op(), 0..64),
    ) {
        let mut nav = Navigator::new(len, NavPolicy { wraparound, strict_bounds: true });
        nav.initialize(start, true);
        let last = len.saturating_sub(1);
        for op in ops {
            let before = nav.active();
            apply(&mut nav, op);
            let state = nav.state();
            prop_assert!(state.active <= last, "active {} > last {}", state.active, last);
            prop_assert!(state.previous_active <= last);
            prop_assert_eq!(state.previous_active, before);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3-4. Classification
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn classify_is_deterministic(
        index in 0usize..20,
        active in 0usize..20,
        previous in 0usize..20,
        dir in direction(),
        max_index in 0usize..20,
    ) {
        let state = NavState::new(active, previous, dir);
        prop_assert_eq!(classify(index, &state, max_index), classify(index, &state, max_index));
    }

    #[test]
    fn exactly_one_center(
        len in 1usize..30,
        active_seed in any::<usize>(),
        previous_seed in any::<usize>(),
        dir in direction(),
    ) {
        let active = active_seed % len;
        let previous = previous_seed % len;
        let state = NavState::new(active, previous, dir);
        let classes = classify_all(&state, len);

        let centers = classes.iter().filter(|c| **c == MotionClass::Center).count();
        prop_assert_eq!(centers, 1);
        prop_assert_eq!(classes[active], MotionClass::Center);

        for (i, class) in classes.iter().enumerate() {
            if class.is_exiting() {
                prop_assert_eq!(i, previous);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5-6. Wraparound policy
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn full_cycle_returns_home(len in 1usize..20, start_seed in any::<usize>()) {
        let start = start_seed % len;
        let mut nav = Navigator::new(len, NavPolicy::default());
        nav.initialize(start, true);
        for _ in 0..len {
            nav.advance();
        }
        prop_assert_eq!(nav.active(), start);
        for _ in 0..len {
            nav.retreat();
        }
        prop_assert_eq!(nav.active(), start);
    }

    #[test]
    fn no_wraparound_saturates(len in 1usize..20, steps in 0usize..50) {
        let mut nav = Navigator::new(len, NavPolicy { wraparound: false, strict_bounds: true });
        for _ in 0..steps {
            nav.advance();
        }
        prop_assert_eq!(nav.active(), steps.min(len - 1));
        for _ in 0..steps {
            nav.retreat();
        }
        prop_assert_eq!(nav.active(), (steps.min(len - 1)).saturating_sub(steps));
    }
}
