// File: crates/insight-core/tests/tooltip.rs
// Purpose: Tooltip controller shows on hover and hides only after the debounce.

use std::time::{Duration, Instant};

use insight_core::tooltip::HIDE_DELAY;
use insight_core::{Point, TooltipController, TooltipData, TooltipLine};

fn datum(title: &str) -> TooltipData {
    TooltipData::new(title).line(TooltipLine::new("value", "1"))
}

#[test]
fn move_shows_and_leave_hides_after_delay() {
    let t0 = Instant::now();
    let mut tip = TooltipController::new();
    tip.pointer_move(Point::new(5.0, 5.0), Some(datum("A")), t0);
    assert!(tip.is_open());
    assert_eq!(tip.current().map(|(p, d)| (p, d.title.as_str())), Some((Point::new(5.0, 5.0), "A")));

    tip.schedule_hide(t0);
    assert_eq!(tip.next_deadline(), Some(t0 + HIDE_DELAY));
    assert!(!tip.tick(t0 + Duration::from_millis(299)));
    assert!(tip.is_open());
    assert!(tip.tick(t0 + Duration::from_millis(300)));
    assert!(!tip.is_open());
    assert_eq!(tip.next_deadline(), None);
}

#[test]
fn moving_back_cancels_pending_hide() {
    let t0 = Instant::now();
    let mut tip = TooltipController::new();
    tip.pointer_move(Point::new(1.0, 1.0), Some(datum("A")), t0);
    tip.pointer_move(Point::new(2.0, 2.0), None, t0 + Duration::from_millis(50));
    assert!(tip.next_deadline().is_some());

    tip.pointer_move(Point::new(3.0, 3.0), Some(datum("B")), t0 + Duration::from_millis(100));
    assert_eq!(tip.next_deadline(), None);
    assert!(!tip.tick(t0 + Duration::from_secs(1)));
    assert_eq!(tip.current().map(|(_, d)| d.title.clone()), Some("B".to_string()));
}

#[test]
fn repeated_leaves_keep_the_first_deadline() {
    let t0 = Instant::now();
    let mut tip = TooltipController::new();
    tip.pointer_move(Point::new(1.0, 1.0), Some(datum("A")), t0);
    tip.schedule_hide(t0);
    tip.schedule_hide(t0 + Duration::from_millis(200));
    assert_eq!(tip.next_deadline(), Some(t0 + HIDE_DELAY));
}

#[test]
fn anchor_overrides_pointer_position() {
    let mut tip = TooltipController::new();
    let data = datum("A").anchored_at(Point::new(40.0, 60.0));
    tip.pointer_move(Point::new(42.0, 10.0), Some(data), Instant::now());
    assert_eq!(tip.current().map(|(p, _)| p), Some(Point::new(40.0, 60.0)));
}

#[test]
fn hide_without_tooltip_is_a_no_op() {
    let mut tip = TooltipController::new();
    tip.schedule_hide(Instant::now());
    assert_eq!(tip.next_deadline(), None);
    tip.cancel();
    assert!(!tip.is_open());
}
