use proptest::prelude::*;

use u_calendar_layout::config::LayoutConfig;
use u_calendar_layout::layout::{group_overlapping, peak_overlap, BestFit, IntervalExtractor, LayoutEngine};
use u_calendar_layout::models::{DayLayout, Frame, ScheduledItem, MS_PER_MINUTE};
use u_calendar_layout::validation::validate_layout;

// ===================
// Strategies
// ===================

/// An item on a one-day grid, sometimes unscheduled or open-ended.
fn item_strategy() -> impl Strategy<Value = (Option<i64>, Option<i64>)> {
    (
        prop::option::weighted(0.9, 0i64..1440),
        prop::option::weighted(0.8, -30i64..240),
    )
        .prop_map(|(start, length)| {
            let start_ms = start.map(|m| m * MS_PER_MINUTE);
            let end_ms = match (start, length) {
                (Some(s), Some(l)) => Some((s + l) * MS_PER_MINUTE),
                (None, Some(l)) => Some(l.max(0) * MS_PER_MINUTE),
                _ => None,
            };
            (start_ms, end_ms)
        })
}

fn items_strategy() -> impl Strategy<Value = Vec<ScheduledItem>> {
    prop::collection::vec(item_strategy(), 0..40).prop_map(|spans| {
        spans
            .into_iter()
            .enumerate()
            .map(|(i, (start_ms, end_ms))| ScheduledItem {
                id: format!("item-{i}"),
                start_ms,
                end_ms,
            })
            .collect()
    })
}

// ===================
// Property Test Functions
// ===================

fn check_every_scheduled_item_placed_once(
    items: &[ScheduledItem],
    layout: &DayLayout,
) -> Result<(), TestCaseError> {
    let scheduled: Vec<&ScheduledItem> = items.iter().filter(|i| i.start_ms.is_some()).collect();
    prop_assert_eq!(layout.len(), scheduled.len());
    for item in scheduled {
        let count = layout
            .results
            .iter()
            .filter(|r| r.item_id == item.id)
            .count();
        prop_assert_eq!(count, 1, "item {} placed {} times", item.id, count);
    }
    prop_assert_eq!(
        layout.unscheduled.len(),
        items.iter().filter(|i| i.start_ms.is_none()).count()
    );
    Ok(())
}

fn check_cluster_invariants(layout: &DayLayout) -> Result<(), TestCaseError> {
    if let Err(errors) = validate_layout(layout) {
        return Err(TestCaseError::fail(format!("{errors:?}")));
    }
    for r in &layout.results {
        prop_assert!(r.total_columns >= 1);
        prop_assert!(r.column < r.total_columns);
        prop_assert!(r.end_ms > r.start_ms);
    }
    Ok(())
}

fn check_frames_are_sane(layout: &DayLayout, config: &LayoutConfig) -> Result<(), TestCaseError> {
    for r in &layout.results {
        let Frame::Absolute(frame) = r.frame else {
            return Err(TestCaseError::fail("expected absolute frame"));
        };
        prop_assert!(frame.x.is_finite() && frame.y.is_finite());
        prop_assert!(frame.width >= config.minimum_block_width_px);
        prop_assert!(frame.height >= config.minimum_block_height_px);
        prop_assert!(frame.x < config.container_width + config.item_padding_px);
    }
    Ok(())
}

fn check_columns_reach_peak_overlap(items: &[ScheduledItem]) -> Result<(), TestCaseError> {
    let extraction = IntervalExtractor::new().extract(items);
    let layout = LayoutEngine::default().layout(items);
    for (idx, cluster) in group_overlapping(&extraction.intervals).iter().enumerate() {
        let members = layout.results_in_cluster(idx);
        prop_assert_eq!(members.len(), cluster.len());
        prop_assert_eq!(members[0].total_columns, peak_overlap(cluster.intervals()));
    }
    Ok(())
}

proptest! {
    #[test]
    fn every_scheduled_item_placed_once(items in items_strategy()) {
        let layout = LayoutEngine::default().layout(&items);
        check_every_scheduled_item_placed_once(&items, &layout)?;
    }

    #[test]
    fn cluster_invariants_hold(items in items_strategy()) {
        check_cluster_invariants(&LayoutEngine::default().layout(&items))?;
        check_cluster_invariants(&LayoutEngine::default().with_strategy(BestFit).layout(&items))?;
    }

    #[test]
    fn frames_are_sane(items in items_strategy(), width in 40.0f64..1200.0, pph in 10.0f64..200.0) {
        let config = LayoutConfig::default()
            .with_container_width(width)
            .with_pixels_per_hour(pph);
        let layout = LayoutEngine::new(config.clone()).layout(&items);
        check_frames_are_sane(&layout, &config)?;
    }

    #[test]
    fn column_count_is_peak_overlap(items in items_strategy()) {
        check_columns_reach_peak_overlap(&items)?;
    }

    #[test]
    fn layout_is_idempotent(items in items_strategy()) {
        let config = LayoutConfig::default();
        let first = serde_json::to_string(&u_calendar_layout::layout(&items, &config)).unwrap();
        let second = serde_json::to_string(&u_calendar_layout::layout(&items, &config)).unwrap();
        prop_assert_eq!(first, second);
    }
}
