// File: crates/insight-core/tests/registry.rs
// Purpose: Chart-type tags resolve to components; unknown tags fall back to the bar chart.

use insight_core::{resolve_chart, ChartKind};

#[test]
fn known_tags_resolve_to_their_kind() {
    assert_eq!(resolve_chart("bar").kind(), ChartKind::Bar);
    assert_eq!(resolve_chart("pie").kind(), ChartKind::Pie);
    assert_eq!(resolve_chart("threshold").kind(), ChartKind::Threshold);
    assert_eq!(resolve_chart("stacked-bar").kind(), ChartKind::StackedBar);
    assert_eq!(resolve_chart("time-series").kind(), ChartKind::TimeSeries);
}

#[test]
fn unknown_tags_fall_back_to_bar() {
    for tag in ["", "scatter", "BAR", "time_series", "🥧"] {
        assert_eq!(resolve_chart(tag).kind(), ChartKind::Bar, "tag {tag:?}");
    }
}

#[test]
fn tags_round_trip() {
    for kind in ChartKind::ALL {
        assert_eq!(ChartKind::from_tag(kind.tag()), kind);
        assert_eq!(kind.to_string(), kind.tag());
        assert_eq!(kind.component().kind(), kind);
    }
}
