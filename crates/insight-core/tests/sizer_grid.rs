// File: crates/insight-core/tests/sizer_grid.rs
// Purpose: Per-slot size observation and the grid container: slot rects, pointer routing, unmount.

use std::time::{Duration, Instant};

use insight_core::chart::PieChart;
use insight_core::data::BrowserUsage;
use insight_core::tooltip::HIDE_DELAY;
use insight_core::{
    default_views, Breakpoint, GridConfig, GridMetrics, MeasurementCache, Point, RectI32, ResponsiveGrid, Size, Sizer,
    ViewDescriptor,
};

fn grid(views: Vec<ViewDescriptor>) -> ResponsiveGrid {
    ResponsiveGrid::new(GridConfig::default(), GridMetrics::default(), views).expect("grid")
}

#[test]
fn sizer_reports_only_changes() {
    let mut cache = MeasurementCache::new();
    let mut sizer = Sizer::new("a");
    assert_eq!(sizer.size(), Size::ZERO);

    let rect = RectI32::from_ltwh(10, 10, 300, 200);
    assert_eq!(sizer.observe(rect, &mut cache), Some(Size::new(300.0, 200.0)));
    assert_eq!(sizer.observe(rect, &mut cache), None);
    // a move without a resize is not a change
    assert_eq!(sizer.observe(RectI32::from_ltwh(50, 80, 300, 200), &mut cache), None);
    assert_eq!(sizer.observe(RectI32::from_ltwh(10, 10, 320, 200), &mut cache), Some(Size::new(320.0, 200.0)));
    assert_eq!(cache.get("a"), Some(Size::new(320.0, 200.0)));
    assert_eq!(cache.len(), 1);
}

#[test]
fn relayout_places_slots_like_the_grid_library() {
    let mut g = grid(default_views());
    let changed = g.relayout(1200);
    assert_eq!(changed.len(), 6);
    assert_eq!(g.breakpoint(), Breakpoint::Lg);

    let first = g.instance("insight-bar").expect("mounted").rect();
    assert_eq!(first, RectI32::from_ltwh(10, 10, 387, 470));
    let second = g.instance("browser-share").expect("mounted").rect();
    assert_eq!((second.left, second.top), (407, 10));
    let fourth = g.instance("temperature-stacked").expect("mounted").rect();
    assert_eq!((fourth.left, fourth.top), (10, 490));

    assert_eq!(g.cache().get("insight-bar"), Some(Size::new(387.0, 470.0)));
    assert_eq!(g.content_height(), 970);
}

#[test]
fn relayout_reports_only_resized_slots() {
    let mut g = grid(default_views());
    g.relayout(1200);
    assert!(g.relayout(1200).is_empty());
    assert_eq!(g.relayout(1300).len(), 6);

    g.relayout(400);
    assert_eq!(g.breakpoint(), Breakpoint::Xs);
    let only = g.instance("insight-bar").expect("mounted").rect();
    assert_eq!(only, RectI32::from_ltwh(10, 10, 380, 470));
}

#[test]
fn unknown_type_mounts_as_bar() {
    let g = grid(default_views());
    let legacy = g.instance("legacy-widget").expect("mounted");
    assert_eq!(legacy.kind, insight_core::ChartKind::Bar);
    assert_eq!(legacy.view.chart_type, "scatter");
}

#[test]
fn duplicate_views_fail_to_mount() {
    let views = vec![ViewDescriptor::new("a", "bar"), ViewDescriptor::new("a", "pie")];
    assert!(ResponsiveGrid::new(GridConfig::default(), GridMetrics::default(), views).is_err());
}

#[test]
fn pointer_over_a_bar_opens_only_that_tooltip() {
    let mut g = grid(vec![ViewDescriptor::new("bars", "bar"), ViewDescriptor::new("pie", "pie")]);
    g.relayout(1200);
    let t0 = Instant::now();

    // centre of the first bar, near its base
    assert!(g.pointer_move(Point::new(90.0, 430.0), t0));
    let bars = g.instance("bars").expect("mounted");
    assert_eq!(bars.tooltip().current().map(|(_, d)| d.title.clone()), Some("A".to_string()));
    assert!(!g.instance("pie").expect("mounted").tooltip().is_open());

    // outside every slot
    assert!(!g.pointer_move(Point::new(1250.0, 5.0), t0));
    assert_eq!(g.next_deadline(), Some(t0 + HIDE_DELAY));
    assert!(!g.tick(t0 + Duration::from_millis(100)));
    assert!(g.tick(t0 + HIDE_DELAY));
    assert!(!g.instance("bars").expect("mounted").tooltip().is_open());
}

#[test]
fn pointer_leave_schedules_hide() {
    let mut g = grid(vec![ViewDescriptor::new("bars", "bar")]);
    g.relayout(1200);
    let t0 = Instant::now();
    g.pointer_move(Point::new(90.0, 430.0), t0);
    g.pointer_leave(t0);
    assert_eq!(g.next_deadline(), Some(t0 + HIDE_DELAY));
}

#[test]
fn unmount_drops_listeners_and_measurements() {
    let mut g = grid(vec![ViewDescriptor::new("bars", "bar"), ViewDescriptor::new("pie", "pie")]);
    g.relayout(1200);
    let t0 = Instant::now();
    g.pointer_move(Point::new(90.0, 430.0), t0);
    g.pointer_leave(t0);
    assert!(g.next_deadline().is_some());

    assert!(g.unmount("bars"));
    assert_eq!(g.next_deadline(), None);
    assert_eq!(g.cache().get("bars"), None);
    assert!(g.instance("bars").is_none());
    assert!(!g.unmount("bars"));
    assert_eq!(g.instances().len(), 1);
}

#[test]
fn set_views_keeps_surviving_instances() {
    let mut g = grid(vec![ViewDescriptor::new("a", "bar"), ViewDescriptor::new("b", "pie")]);
    g.relayout(800);
    g.set_views(vec![ViewDescriptor::new("b", "pie"), ViewDescriptor::new("c", "threshold")], Instant::now())
        .expect("set views");
    let ids: Vec<&str> = g.instances().iter().map(|i| i.view.id.as_str()).collect();
    assert_eq!(ids, ["b", "c"]);
    assert_eq!(g.cache().get("a"), None);
    assert!(g.cache().get("c").is_some());
}

#[test]
fn set_views_starts_hide_for_hovered_survivor() {
    let views = vec![ViewDescriptor::new("bars", "bar"), ViewDescriptor::new("pie", "pie")];
    let mut g = grid(views.clone());
    g.relayout(1200);
    let t0 = Instant::now();
    g.pointer_move(Point::new(90.0, 430.0), t0);
    assert!(g.instance("bars").expect("mounted").tooltip().is_open());

    g.set_views(views, t0).expect("set views");
    assert_eq!(g.next_deadline(), Some(t0 + HIDE_DELAY));

    assert!(!g.pointer_move(Point::new(1250.0, 5.0), t0));
    g.pointer_leave(t0);
    assert!(g.tick(t0 + HIDE_DELAY));
    assert!(!g.instance("bars").expect("mounted").tooltip().is_open());
}

#[test]
fn unmount_replans_the_remaining_views() {
    let views = ["a", "b", "c", "d"].map(|id| ViewDescriptor::new(id, "bar")).to_vec();
    let mut g = grid(views);
    g.relayout(1200);
    assert_eq!(g.content_height(), 970);

    assert!(g.unmount("a"));
    assert_eq!(g.layouts().entries(Breakpoint::Lg).len(), 3);
    assert_eq!(g.content_height(), 490);
    let b = g.instance("b").expect("mounted").rect();
    assert_eq!((b.left, b.top), (10, 10));
    let d = g.instance("d").expect("mounted").rect();
    assert_eq!((d.left, d.top), (803, 10));
}

#[test]
fn set_component_swaps_content_in_place() {
    let mut g = grid(vec![ViewDescriptor::new("bars", "bar"), ViewDescriptor::new("share", "bar")]);
    g.relayout(1200);
    let only = PieChart::default().with_data(vec![BrowserUsage { label: "Firefox".into(), usage: 100.0 }]);
    assert!(g.set_component("share", Box::new(only)));
    assert!(!g.set_component("missing", Box::new(PieChart::default())));

    let share = g.instance("share").expect("mounted");
    assert_eq!(share.kind, insight_core::ChartKind::Pie);
    assert_eq!(share.view.chart_type, "bar");

    // on the donut ring, straight above its centre
    let t0 = Instant::now();
    assert!(g.pointer_move(Point::new(600.5, 95.0), t0));
    let open = g.instance("share").expect("mounted").tooltip().current().map(|(_, d)| d.title.clone());
    assert_eq!(open, Some("Firefox".to_string()));
}
