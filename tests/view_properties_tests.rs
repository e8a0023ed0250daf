use report_charts::api::{GraphRequest, ROW_EVOLUTION_SERIES_TOGGLE, ViewProperties};

#[test]
fn defaults_match_a_plain_visits_graph() {
    let props = ViewProperties::default();

    assert_eq!(props.columns_to_display, vec!["label", "nb_visits"]);
    assert_eq!(props.metric_columns(), vec!["nb_visits"]);
    assert!(props.selectable_columns.is_empty());
    assert!(props.display_percentage_in_tooltip);
    assert!(props.show_export_as_image_icon);
    assert_eq!(props.graph_limit, None);
    assert_eq!(props.summary_row_label, "Others");
    assert_eq!(props.total_row_label, "Total");
}

#[test]
fn selectable_columns_are_prepended_to_goal_metrics() {
    let props = ViewProperties::new()
        .enable_show_goals()
        .with_selectable_columns(["nb_visits"])
        .with_selectable_columns(["nb_actions"]);

    assert_eq!(
        props.selectable_columns,
        vec!["nb_actions", "nb_visits", "nb_conversions", "revenue"]
    );
    assert_eq!(props.column_translation("revenue"), "Total Revenue");
}

#[test]
fn row_evolution_toggle_is_recorded() {
    let props = ViewProperties::new().with_row_evolution_series_toggle(true);
    let toggle = props.external_series_toggle.expect("toggle");
    assert_eq!(toggle.name, ROW_EVOLUTION_SERIES_TOGGLE);
    assert!(toggle.initially_show_all_metrics);
}

#[test]
fn view_properties_json_roundtrip() {
    let props = ViewProperties::new()
        .with_columns_to_display(["label", "nb_visits", "nb_actions"])
        .with_selectable_columns(["nb_visits", "nb_actions"])
        .with_column_translation("nb_actions", "Pageviews")
        .with_graph_limit(8)
        .with_axis_y_unit("%")
        .add_total_row()
        .show_all_ticks()
        .without_export_as_image_icon();

    let json = props.to_json_pretty().expect("serialize");
    let restored = ViewProperties::from_json_str(&json).expect("deserialize");

    assert_eq!(restored, props);
}

#[test]
fn missing_json_fields_take_defaults() {
    let props = ViewProperties::from_json_str(r#"{"graph_limit": 4}"#).expect("deserialize");

    assert_eq!(props.graph_limit, Some(4));
    assert_eq!(props.columns_to_display, vec!["label", "nb_visits"]);
    assert!(props.display_percentage_in_tooltip);
    assert_eq!(props.summary_row_label, "Others");
}

#[test]
fn malformed_json_is_invalid_data() {
    let err = ViewProperties::from_json_str("{").expect_err("malformed");
    assert!(err.to_string().starts_with("invalid data: failed to parse view properties json"));
}

#[test]
fn graph_request_defaults_show_the_picker() {
    let request: GraphRequest = serde_json::from_str(r#"{"site_id": 12}"#).expect("request");
    assert_eq!(request, GraphRequest::for_site(12));
    assert!(request.show_series_picker);
}

#[test]
fn graph_request_json_roundtrip() {
    let request = GraphRequest::for_site(7).without_series_picker();

    let json = request.to_json_pretty().expect("serialize");
    let restored = GraphRequest::from_json_str(&json).expect("deserialize");

    assert_eq!(restored, request);
    let err = GraphRequest::from_json_str(r#"{"site_id": "x"}"#).expect_err("bad site id");
    assert!(err.to_string().starts_with("invalid data: failed to parse graph request json"));
}
