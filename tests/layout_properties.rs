//! Property-based tests for layout and window invariants.
//!
//! Tests validate:
//! 1. Offsets are weakly decreasing in index
//! 2. Every offset lies in `[0, budget]`
//! 3. Uncompressed layouts are exact multiples of normal spacing
//! 4. Interior spacing never drops below the compression floor
//! 5. Layout computation is idempotent
//! 6. The visible window holds `min(len, max_visible)` items at its anchor
//! 7. The next item out of a structure is always on screen

use algoviz::model::StructureKind;
use algoviz::state::{Action, StructureView, Verb};
use algoviz::view_state::{
    compute_layout, max_visible_items, LayoutConfig, LayoutPath, LayoutPolicy, VisibleWindow,
    WindowAnchor,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const EPS: f64 = 1e-6;

// ===== Strategies =====

fn config_strategy() -> impl Strategy<Value = LayoutConfig> {
    (1.0f64..64.0, 1.0f64..32.0, 0.05f64..=1.0, 1.0f64..64.0, 50.0f64..1000.0).prop_map(
        |(item_height, spacing, ratio, edge, max_budget)| {
            LayoutConfig::new(item_height, spacing, ratio, edge, max_budget)
                .expect("strategy produces valid configs")
        },
    )
}

fn budget_strategy() -> impl Strategy<Value = f64> {
    (1u32..2000).prop_map(f64::from)
}

fn action_strategy(kind: StructureKind) -> impl Strategy<Value = Action> {
    let (insert, remove) = match kind {
        StructureKind::Stack => (Verb::Push, Verb::Pop),
        StructureKind::Queue => (Verb::Enqueue, Verb::Dequeue),
    };
    prop_oneof![
        4 => "[a-z0-9]{1,5}".prop_map(move |value| Action::Insert { verb: insert, value }),
        2 => Just(Action::Remove { verb: remove }),
        1 => (1usize..60).prop_map(Action::AddRandom),
        1 => Just(Action::Peek),
    ]
}

// ===== Property 1-5: Compressor =====

proptest! {
    #[test]
    fn offsets_are_weakly_decreasing(
        count in 0usize..300,
        budget in budget_strategy(),
        config in config_strategy(),
    ) {
        let layout = compute_layout(count, budget, &config).unwrap();
        for pair in layout.offsets().windows(2) {
            prop_assert!(pair[0] >= pair[1] - EPS, "offsets increased: {:?}", pair);
        }
    }

    #[test]
    fn offsets_stay_within_budget(
        count in 0usize..300,
        budget in budget_strategy(),
        config in config_strategy(),
    ) {
        let layout = compute_layout(count, budget, &config).unwrap();
        prop_assert_eq!(layout.len(), count);
        for &offset in layout.offsets() {
            prop_assert!(offset >= 0.0 && offset <= budget + EPS, "offset {} outside [0, {}]", offset, budget);
        }
    }

    #[test]
    fn uncompressed_offsets_are_exact(count in 0usize..120, budget in budget_strategy()) {
        let config = LayoutConfig::default();
        let layout = compute_layout(count, budget, &config).unwrap();
        if count as f64 * config.normal_spacing() <= budget {
            prop_assert_eq!(layout.path(), LayoutPath::Uncompressed);
            for (i, &offset) in layout.offsets().iter().enumerate() {
                prop_assert_eq!(offset, (count - i) as f64 * config.normal_spacing());
            }
        }
    }

    #[test]
    fn interior_spacing_respects_floor(
        count in 4usize..300,
        budget in budget_strategy(),
        config in config_strategy(),
    ) {
        let layout = compute_layout(count, budget, &config).unwrap();
        if layout.path().is_compressed() {
            let offsets = layout.offsets();
            // Pairs from the second-oldest slot through the last interior item.
            for i in 1..count - 2 {
                let gap = offsets[i] - offsets[i + 1];
                prop_assert!(
                    gap >= config.min_spacing() - EPS || gap.abs() < EPS,
                    "gap {} between {} and {} is below the floor {}",
                    gap, i, i + 1, config.min_spacing()
                );
            }
        }
    }

    #[test]
    fn layout_is_idempotent(
        count in 0usize..300,
        budget in budget_strategy(),
        config in config_strategy(),
    ) {
        let first = compute_layout(count, budget, &config).unwrap();
        let second = compute_layout(count, budget, &config).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn floor_never_exceeds_pinned_maximum(count in 0usize..500, config in config_strategy()) {
        let layout = compute_layout(count, config.max_budget(), &config).unwrap();
        prop_assert!(layout.floor_offset() <= config.max_budget() + config.item_height() + EPS);
        prop_assert!(layout.floor_offset() >= config.item_height());
    }
}

// ===== Property 6: Visible window =====

proptest! {
    #[test]
    fn window_holds_min_of_len_and_capacity(
        len in 0usize..500,
        max_visible in 0usize..200,
        oldest in any::<bool>(),
    ) {
        let anchor = if oldest { WindowAnchor::Oldest } else { WindowAnchor::Newest };
        let window = VisibleWindow::compute(len, max_visible, anchor);

        prop_assert_eq!(window.len(), len.min(max_visible));
        prop_assert!(window.start() <= window.end() && window.end() <= len);
        match anchor {
            WindowAnchor::Newest => prop_assert_eq!(window.end(), len),
            WindowAnchor::Oldest => prop_assert_eq!(window.start(), 0),
        }
        prop_assert_eq!(window.hidden_count() + window.len(), len);
    }

    #[test]
    fn capacity_grows_with_budget(budget in budget_strategy(), extra in 0u32..500) {
        let config = LayoutConfig::default();
        let small = max_visible_items(budget, &config).unwrap();
        let large = max_visible_items(budget + f64::from(extra), &config).unwrap();
        prop_assert!(small <= large);
    }
}

// ===== Property 7: Structures =====

fn check_structure(kind: StructureKind, actions: &[Action], screen_height: f64) -> Result<(), TestCaseError> {
    let mut view = StructureView::new(kind, LayoutPolicy::default(), screen_height).unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    for action in actions {
        view.apply(action, &mut rng).unwrap();
        let frame = view.frame().unwrap();

        prop_assert_eq!(
            frame.placements.len(),
            view.collection().len().min(view.max_visible())
        );
        prop_assert_eq!(
            frame.next_out().map(|p| p.logical_index),
            view.collection().peek_index()
        );
        for placement in &frame.placements {
            prop_assert!(placement.offset >= 0.0 && placement.offset <= frame.budget);
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn stack_keeps_top_visible(
        actions in prop::collection::vec(action_strategy(StructureKind::Stack), 1..40),
        screen_height in 300.0f64..1400.0,
    ) {
        check_structure(StructureKind::Stack, &actions, screen_height)?;
    }

    #[test]
    fn queue_keeps_front_visible(
        actions in prop::collection::vec(action_strategy(StructureKind::Queue), 1..40),
        screen_height in 300.0f64..1400.0,
    ) {
        check_structure(StructureKind::Queue, &actions, screen_height)?;
    }
}
