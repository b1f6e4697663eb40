use super::*;

#[test]
fn config_is_responsive_by_default() {
    let plot = PlotPayload::parse(r#"{"data":[],"layout":{}}"#).unwrap();
    assert_eq!(plot_config(&plot), json!({ "responsive": true }));
}

#[test]
fn config_keeps_figure_settings() {
    let plot =
        PlotPayload::parse(r#"{"data":[],"config":{"displaylogo":false,"responsive":false}}"#).unwrap();
    assert_eq!(plot_config(&plot), json!({ "displaylogo": false, "responsive": true }));
}
