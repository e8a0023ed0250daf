use report_charts::ChartError;
use report_charts::api::{ChartDataGenerator, ChartKind, ChartPayload, GraphRequest, ViewProperties};
use report_charts::core::{DataTable, Metric, Row, SiteCurrencies};

fn referrers() -> DataTable {
    DataTable::new(vec![
        Row::new("rust+charts")
            .with_column("nb_visits", 5)
            .with_column("nb_actions", 12)
            .with_column("revenue", 10.5),
        Row::new("caf%C3%A9")
            .with_column("nb_visits", 3)
            .with_column("nb_actions", 4),
        Row::new("plain")
            .with_column("nb_visits", 1)
            .with_column("nb_actions", 1)
            .with_column("revenue", 2.0),
    ])
}

#[test]
fn factory_accepts_known_kinds() {
    for (name, kind) in [
        ("evolution", ChartKind::Evolution),
        ("pie", ChartKind::Pie),
        ("bar", ChartKind::VerticalBar),
    ] {
        let generator = ChartDataGenerator::factory(name, ViewProperties::new()).expect("kind");
        assert_eq!(generator.kind(), kind);
        assert_eq!(kind.to_string(), name);
    }
}

#[test]
fn factory_rejects_unknown_kind() {
    let err = ChartDataGenerator::factory("radar", ViewProperties::new()).expect_err("unknown");
    assert!(matches!(err, ChartError::UnsupportedChartType(ref kind) if kind == "radar"));
    assert_eq!(err.to_string(), "unsupported chart type 'radar'");
}

#[test]
fn empty_table_yields_empty_series() {
    let props = ViewProperties::new()
        .with_selectable_columns(["nb_visits", "nb_actions"])
        .with_graph_limit(5)
        .add_total_row();
    let generator = ChartDataGenerator::new(ChartKind::Evolution, props);

    let payload = generator.generate(DataTable::default(), &GraphRequest::default());

    assert!(payload.series.is_empty());
    assert!(payload.x_axis_labels.is_empty());
    assert!(payload.series_picker.is_none());
    assert!(!payload.has_data());

    let json = generator
        .generate_json(DataTable::default(), &GraphRequest::default())
        .expect("json");
    assert!(json.contains("\"series\":[]"));
}

#[test]
fn evolution_payload_carries_labels_series_units_and_picker() {
    let props = ViewProperties::new()
        .with_columns_to_display(["label", "nb_visits", "revenue"])
        .with_selectable_columns(["nb_visits", "nb_actions", "revenue"]);
    let generator = ChartDataGenerator::new(ChartKind::Evolution, props)
        .with_site_currencies(SiteCurrencies::new().with_site(4, "EUR"));

    let payload = generator.generate(referrers(), &GraphRequest::for_site(4));

    assert_eq!(payload.x_axis_labels, vec!["rust charts", "café", "plain"]);
    assert_eq!(payload.series.len(), 2);

    let visits = payload.series("nb_visits").expect("visits series");
    assert_eq!(visits.label, "Visits");
    assert_eq!(visits.unit, None);
    assert_eq!(
        visits.values,
        vec![Metric::Int(5), Metric::Int(3), Metric::Int(1)]
    );

    let revenue = payload.series("revenue").expect("revenue series");
    assert_eq!(revenue.unit.as_deref(), Some("€"));
    assert_eq!(
        revenue.values,
        vec![Metric::Float(10.5), Metric::Int(0), Metric::Float(2.0)]
    );

    let picker = payload.series_picker.expect("picker");
    assert!(picker.multi_select);
    let displayed: Vec<bool> = picker.selectable_columns.iter().map(|c| c.displayed).collect();
    assert_eq!(displayed, vec![true, false, true]);
}

#[test]
fn graph_limit_and_totals_run_in_order() {
    let props = ViewProperties::new()
        .with_columns_to_display(["label", "nb_visits"])
        .with_graph_limit(2)
        .add_total_row();
    let generator = ChartDataGenerator::new(ChartKind::VerticalBar, props);

    let payload = generator.generate(referrers(), &GraphRequest::default());

    assert_eq!(payload.x_axis_labels, vec!["Total", "rust charts", "Others"]);
    assert_eq!(
        payload.series[0].values,
        vec![Metric::Int(9), Metric::Int(5), Metric::Int(4)]
    );
}

#[test]
fn pie_plots_first_metric_with_single_select_picker() {
    let props = ViewProperties::new()
        .with_columns_to_display(["label", "nb_actions", "nb_visits"])
        .with_selectable_columns(["nb_visits", "nb_actions"]);
    let generator = ChartDataGenerator::new(ChartKind::Pie, props);

    let payload = generator.generate(referrers(), &GraphRequest::default());

    assert_eq!(payload.series.len(), 1);
    assert_eq!(payload.series[0].column, "nb_actions");
    assert!(!payload.series_picker.expect("picker").multi_select);
}

#[test]
fn forced_unit_and_tooltip_flags_reach_the_payload() {
    let props = ViewProperties::new()
        .with_columns_to_display(["label", "nb_visits", "nb_actions"])
        .with_axis_y_unit(" hits")
        .disallow_percentage_in_graph_tooltip()
        .show_all_ticks();
    let generator = ChartDataGenerator::new(ChartKind::Evolution, props);

    let payload = generator.generate(referrers(), &GraphRequest::default());

    assert_eq!(payload.y_axis_unit.as_deref(), Some(" hits"));
    assert!(!payload.display_percentage_in_tooltip);
    assert!(payload.show_all_ticks);
    assert!(payload
        .series
        .iter()
        .all(|series| series.unit.as_deref() == Some(" hits")));
}

#[test]
fn json_is_single_line_and_round_trips() {
    let props = ViewProperties::new()
        .with_columns_to_display(["label", "nb_visits"])
        .with_column_translation("nb_visits", "Visits\nper day")
        .with_selectable_columns(["nb_visits"]);
    let generator = ChartDataGenerator::new(ChartKind::Evolution, props);
    let table = DataTable::new(vec![Row::new("line\r\nbreak").with_column("nb_visits", 2)]);

    let json = generator
        .generate_json(table.clone(), &GraphRequest::default())
        .expect("json");

    assert!(!json.contains('\n'));
    assert!(!json.contains('\r'));
    assert!(json.contains("\"xAxisLabels\""));
    assert!(json.contains("\"seriesPicker\""));

    let decoded = ChartPayload::from_json_str(&json).expect("decode");
    assert_eq!(decoded, generator.generate(table, &GraphRequest::default()));
}

#[test]
fn missing_translation_falls_back_to_column_name() {
    let props = ViewProperties::new().with_columns_to_display(["label", "custom_goal_metric"]);
    let generator = ChartDataGenerator::new(ChartKind::Evolution, props);

    let payload = generator.generate(referrers(), &GraphRequest::default());

    assert_eq!(payload.series[0].label, "custom_goal_metric");
    assert_eq!(payload.series[0].values, vec![Metric::ZERO; 3]);
}

#[test]
fn table_loaded_from_json_is_charted() {
    let table = DataTable::from_json_str(
        r#"{
            "rows": [
                {"label": "Firefox", "columns": {"nb_visits": 8, "bounce_rate": "25%"}},
                {"label": "Chrome", "columns": {"nb_visits": 12, "bounce_rate": "40%"}}
            ],
            "sorted_by": "nb_visits"
        }"#,
    )
    .expect("table");
    let props = ViewProperties::new().with_columns_to_display(["label", "bounce_rate"]);
    let generator = ChartDataGenerator::new(ChartKind::VerticalBar, props);

    let payload = generator.generate(table, &GraphRequest::default());

    assert_eq!(payload.x_axis_labels, vec!["Firefox", "Chrome"]);
    assert_eq!(payload.series[0].unit.as_deref(), Some("%"));
    assert_eq!(payload.series[0].values, vec![Metric::Int(25), Metric::Int(40)]);
}

#[test]
fn null_and_false_cells_chart_as_zero() {
    let table = DataTable::from_json_str(
        r#"{"rows": [
            {"label": "A", "columns": {"nb_visits": 5, "revenue": null}},
            {"label": "B", "columns": {"nb_visits": false, "revenue": 2.5}}
        ]}"#,
    )
    .expect("table");
    let props = ViewProperties::new().with_columns_to_display(["label", "nb_visits", "revenue"]);
    let generator = ChartDataGenerator::new(ChartKind::Evolution, props);

    let payload = generator.generate(table, &GraphRequest::default());

    assert_eq!(payload.series[0].values, vec![Metric::Int(5), Metric::ZERO]);
    assert_eq!(payload.series[1].values, vec![Metric::ZERO, Metric::Float(2.5)]);
}

#[test]
fn single_row_table_gets_no_total() {
    let table = DataTable::new(vec![Row::new("A").with_column("nb_visits", 5)]);
    let props = ViewProperties::new().add_total_row();
    let generator = ChartDataGenerator::new(ChartKind::VerticalBar, props);

    let payload = generator.generate(table, &GraphRequest::default());

    assert_eq!(payload.x_axis_labels, vec!["A"]);
    assert_eq!(payload.series[0].values, vec![Metric::Int(5)]);
}

#[test]
fn overflowing_float_totals_still_round_trip() {
    let table = DataTable::new(vec![
        Row::new("A").with_column("nb_visits", f64::MAX),
        Row::new("B").with_column("nb_visits", f64::MAX),
    ]);
    let props = ViewProperties::new().add_total_row();
    let generator = ChartDataGenerator::new(ChartKind::VerticalBar, props);

    let payload = generator.generate(table, &GraphRequest::default());
    let restored = ChartPayload::from_json_str(&payload.to_json().expect("json")).expect("payload");

    assert_eq!(restored.series[0].values[0], Metric::Float(f64::MAX));
}
