// File: crates/dashboard-core/tests/dashboard.rs
// Purpose: Chart presets, metric queries, date-range paging and page appends.

use dashboard_core::chart::DAY_HEADER;
use dashboard_core::error::Axis;
use dashboard_core::paging::DAY_MS;
use dashboard_core::{
    append_page, reshape, ChartKind, DateRange, Interval, MetricQuery, ReshapeError, ReshapeOptions, RowKey,
    Stat, TableSummary, TabularPayload,
};

fn strings(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|s| s.to_string()).collect()
}

fn daily() -> TabularPayload {
    TabularPayload::new(
        strings(&["timestamp"]),
        vec![strings(&["1362182400000", "1362268800000"])],
        strings(&["avg"]),
        vec![strings(&["1.5", "2.5"])],
    )
}

#[test]
fn chart_kind_parses_and_displays() {
    assert_eq!("bar".parse::<ChartKind>().unwrap(), ChartKind::Bar);
    assert_eq!(" HBar ".parse::<ChartKind>().unwrap(), ChartKind::HBar);
    assert_eq!(ChartKind::Line.to_string(), "line");
    assert_eq!("table".parse::<ChartKind>().unwrap(), ChartKind::Table);
    assert!("pie".parse::<ChartKind>().is_err());
    assert_eq!(serde_json::to_string(&ChartKind::HBar).unwrap(), r#""hbar""#);
}

#[test]
fn presets_select_facets() {
    assert!(ChartKind::Bar.reshape_options().group_by_x);
    assert!(ChartKind::HBar.reshape_options().group_by_x);
    let line = ChartKind::Line.reshape_options();
    assert!(line.time_series && !line.group_by_x);
    let table = ChartKind::Table.reshape_options();
    assert!(table.rows && !table.group_by_x && !table.time_series);
}

#[test]
fn bar_chart_labels_days() {
    let payload = daily();
    let prepared = ChartKind::Bar.prepare(&payload).unwrap();
    assert_eq!(prepared.x_headers, strings(&[DAY_HEADER]));
    assert_eq!(prepared.x_values[0], strings(&["03/02", "03/03"]));
    // The source payload keeps its timestamps.
    assert_eq!(payload.x_values[0][0], "1362182400000");

    let view = ChartKind::Bar.render(&payload, &ReshapeOptions::default()).unwrap();
    assert_eq!(view.x_headers, strings(&[DAY_HEADER]));
    let groups = view.x_groups.unwrap();
    assert_eq!(groups[0].x, RowKey::from("03/02"));
    assert_eq!(groups[1].values[0].y, 2.5);
}

#[test]
fn bar_chart_respects_date_format() {
    let payload = TabularPayload::new(
        strings(&["date"]),
        vec![strings(&["2013-03-02"])],
        strings(&["n"]),
        vec![strings(&["4"])],
    )
    .with_date_format("%Y-%m-%d");
    let prepared = ChartKind::Bar.prepare(&payload).unwrap();
    assert_eq!(prepared.x_values[0], strings(&["03/02"]));
    assert_eq!(prepared.x_headers[0], "date");
    assert!(prepared.date_format.is_none());
}

#[test]
fn bar_chart_keeps_text_keys() {
    let payload = TabularPayload::new(
        strings(&["project"]),
        vec![strings(&["syn1", "syn2"])],
        strings(&["n"]),
        vec![strings(&["3", "5"])],
    );
    assert_eq!(ChartKind::Bar.prepare(&payload).unwrap(), payload);

    let view = ChartKind::Bar.render(&payload, &ReshapeOptions::default()).unwrap();
    assert_eq!(view.x_headers, strings(&["project"]));
    let groups = view.x_groups.unwrap();
    assert_eq!(groups[0].x, RowKey::from("syn1"));
    assert_eq!(groups[1].x, RowKey::from("syn2"));
    assert_eq!(groups[1].values[0].y, 5.0);
}

#[test]
fn hbar_and_line_leave_payload_alone() {
    let payload = daily();
    assert_eq!(ChartKind::HBar.prepare(&payload).unwrap(), payload);

    let view = ChartKind::Line.render(&payload, &ReshapeOptions::new().with_y_series()).unwrap();
    assert_eq!(view.x_series.values[0], RowKey::date_from_millis(1_362_182_400_000).unwrap());
    assert!(view.y_series.is_some());
    assert!(view.x_groups.is_none());
}

#[test]
fn metric_query_string() {
    let q = MetricQuery::new(ChartKind::Line, "downloads")
        .with_stat(Stat::Avg)
        .with_interval(Interval::M3)
        .with_range(DateRange::new(1000, 2000));
    assert_eq!(
        q.to_query(),
        "data?type=line&metric=downloads&stat=avg&interval=m3&start=1000&end=2000"
    );
    assert_eq!(MetricQuery::new(ChartKind::HBar, "top users").to_query(), "data?type=hbar&metric=top%20users");
}

#[test]
fn metric_query_decodes_controller_state() {
    let q: MetricQuery =
        serde_json::from_str(r#"{"type": "bar", "id": "7", "stat": "n", "interval": "day"}"#).unwrap();
    assert_eq!(q.kind, ChartKind::Bar);
    assert_eq!(q.stat, Some(Stat::N));
    assert_eq!(q.interval, Some(Interval::Day));
    assert_eq!(q.range(), None);
}

#[test]
fn paging_moves_by_range_width() {
    let week = DateRange::new(7 * DAY_MS, 14 * DAY_MS);
    assert_eq!(week.previous(), DateRange::new(0, 7 * DAY_MS));
    assert_eq!(week.next(), DateRange::new(14 * DAY_MS, 21 * DAY_MS));
    assert_eq!(week.previous().next(), week);
}

#[test]
fn day_paging_collapses_range() {
    let range = DateRange::new(10 * DAY_MS, 12 * DAY_MS);
    assert_eq!(range.previous_day(), DateRange::new(9 * DAY_MS, 9 * DAY_MS));
    assert_eq!(range.next_day(), DateRange::new(11 * DAY_MS, 11 * DAY_MS));
}

#[test]
fn appended_page_extends_every_column() {
    let base = daily().with_y_label("users");
    let page = TabularPayload::new(
        strings(&["timestamp"]),
        vec![strings(&["1362355200000"])],
        strings(&["avg"]),
        vec![strings(&["3.5"])],
    );
    let merged = append_page(&base, &page).unwrap();
    assert_eq!(merged.row_count(), 3);
    assert_eq!(merged.y_values[0], strings(&["1.5", "2.5", "3.5"]));
    assert_eq!(merged.y_label.as_deref(), Some("users"));

    let view = reshape(&merged, &ReshapeOptions::new().with_rows()).unwrap();
    assert_eq!(view.rows.unwrap().len(), 3);
    assert_eq!(base.row_count(), 2);
}

#[test]
fn append_rejects_different_headers() {
    let mut page = daily();
    page.y_headers = strings(&["max"]);
    let err = append_page(&daily(), &page).unwrap_err();
    assert!(matches!(err, ReshapeError::HeaderMismatch { axis: Axis::Y }));
}

fn users() -> TabularPayload {
    TabularPayload::new(
        strings(&["timestamp", "id", "name", "url"]),
        vec![
            strings(&["1362182400000", "1328918400000", "1352419200000"]),
            strings(&["1", "2", "1"]),
            strings(&["ann", "bob", "ann"]),
            strings(&["a.example", "b.example", "a.example"]),
        ],
        strings(&["web", "python"]),
        vec![strings(&["3", "1", "4"]), strings(&["0", "2", "6"])],
    )
}

#[test]
fn table_summary_counts_results_and_unique_ids() {
    let view = ChartKind::Table.render(&users(), &ReshapeOptions::default()).unwrap();
    assert_eq!(view.rows.as_ref().map(Vec::len), Some(3));
    assert_eq!(view.table_summary("id"), Some(TableSummary { total: 3, unique: 2 }));
    assert_eq!(view.table_summary("name"), Some(TableSummary { total: 3, unique: 2 }));
    assert_eq!(view.table_summary("url"), Some(TableSummary { total: 3, unique: 2 }));
    assert_eq!(view.table_summary("missing"), None);
}

#[test]
fn table_summary_needs_rows() {
    let view = reshape(&users(), &ReshapeOptions::new().with_y_series()).unwrap();
    assert_eq!(view.table_summary("id"), None);

    let empty = TabularPayload::new(strings(&["timestamp", "id"]), vec![vec![], vec![]], strings(&["n"]), vec![vec![]]);
    let view = ChartKind::Table.render(&empty, &ReshapeOptions::default()).unwrap();
    assert_eq!(view.table_summary("id"), Some(TableSummary { total: 0, unique: 0 }));
}

#[test]
fn stat_and_interval_parse_from_cli_text() {
    assert_eq!("avg".parse::<Stat>().unwrap(), Stat::Avg);
    assert_eq!(" N ".parse::<Stat>().unwrap(), Stat::N);
    assert_eq!("M3".parse::<Interval>().unwrap(), Interval::M3);
    assert_eq!("hour".parse::<Interval>().unwrap(), Interval::Hour);

    let err = "median".parse::<Stat>().unwrap_err();
    assert_eq!(err.to_string(), "unknown stat 'median' (expected avg, max or n)");
    assert!("week".parse::<Interval>().is_err());
}
