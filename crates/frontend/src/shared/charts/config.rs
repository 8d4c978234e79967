//! Builds chart-library configurations from a derived table.
//!
//! The output is plain JSON data: the Chart.js config is handed to
//! `new Chart(canvas, config)`, the ECharts option to
//! `chart.setOption(option)`.

use serde_json::{json, Value};

use super::palette;
use super::table::ChartTable;
use super::ChartKind;

/// Chart.js configuration object
pub fn chartjs_config(kind: ChartKind, table: &ChartTable) -> Value {
    let background = if kind.is_category() {
        json!(palette::category_colors(table.labels.len()))
    } else {
        json!(palette::SERIES_COLOR)
    };

    json!({
        "type": kind.as_str(),
        "data": {
            "labels": table.labels,
            "datasets": [{
                "label": table.value_key,
                "data": table.values,
                "backgroundColor": background,
                "borderColor": palette::BORDER_COLOR,
                "borderWidth": 2,
            }],
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": true,
            "scales": chartjs_scales(kind),
            "plugins": {
                "legend": {
                    "position": "top",
                    "labels": { "color": palette::TEXT_COLOR },
                },
            },
        },
    })
}

/// Pie and doughnut have no axes; bar and line share the styled x/y pair.
fn chartjs_scales(kind: ChartKind) -> Value {
    if kind.is_category() {
        return json!({});
    }
    json!({
        "y": {
            "beginAtZero": true,
            "grid": { "color": palette::GRID_COLOR },
            "ticks": { "color": palette::TEXT_COLOR },
        },
        "x": {
            "grid": { "color": palette::GRID_COLOR },
            "ticks": { "color": palette::TEXT_COLOR },
        },
    })
}

/// ECharts option object
pub fn echarts_option(kind: ChartKind, table: &ChartTable) -> Value {
    let title = format!("{} Chart Visualization", kind.label());

    if kind.is_category() {
        let data: Vec<Value> = table
            .labels
            .iter()
            .zip(&table.values)
            .enumerate()
            .map(|(index, (label, value))| {
                json!({
                    "name": label,
                    "value": value,
                    "itemStyle": { "color": palette::echarts_pie_color(index) },
                })
            })
            .collect();
        let radius = if kind == ChartKind::Doughnut {
            json!(["40%", "70%"])
        } else {
            json!("50%")
        };
        return json!({
            "title": { "text": title },
            "tooltip": { "trigger": "item" },
            "series": [{
                "type": "pie",
                "radius": radius,
                "data": data,
            }],
        });
    }

    let color = if kind == ChartKind::Line {
        palette::ECHARTS_LINE_COLOR
    } else {
        palette::ECHARTS_BAR_COLOR
    };
    let mut series = json!({
        "type": kind.as_str(),
        "data": table.values,
        "itemStyle": { "color": color },
    });
    if kind == ChartKind::Line {
        series["smooth"] = json!(true);
    }

    json!({
        "title": { "text": title },
        "tooltip": {},
        "xAxis": { "data": table.labels },
        "yAxis": {},
        "series": [series],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> ChartTable {
        ChartTable {
            label_key: "month".to_string(),
            value_key: "sales".to_string(),
            labels: vec!["Jan".to_string(), "Feb".to_string()],
            values: vec![10.0, 20.0],
        }
    }

    #[test]
    fn test_bar_config_uses_single_color_and_scales() {
        let config = chartjs_config(ChartKind::Bar, &sample_table());
        assert_eq!(config["type"], "bar");
        assert_eq!(config["data"]["labels"], json!(["Jan", "Feb"]));
        let dataset = &config["data"]["datasets"][0];
        assert_eq!(dataset["label"], "sales");
        assert_eq!(dataset["data"], json!([10.0, 20.0]));
        assert_eq!(dataset["backgroundColor"], palette::SERIES_COLOR);
        assert_eq!(dataset["borderColor"], palette::BORDER_COLOR);
        assert_eq!(dataset["borderWidth"], 2);
        assert_eq!(config["options"]["scales"]["y"]["beginAtZero"], true);
        assert_eq!(
            config["options"]["scales"]["x"]["grid"]["color"],
            palette::GRID_COLOR
        );
    }

    #[test]
    fn test_pie_config_uses_palette_and_no_scales() {
        let config = chartjs_config(ChartKind::Pie, &sample_table());
        let background = config["data"]["datasets"][0]["backgroundColor"]
            .as_array()
            .unwrap();
        assert_eq!(background.len(), 2);
        assert_eq!(background[0], palette::CATEGORY_PALETTE[0]);
        assert_eq!(background[1], palette::CATEGORY_PALETTE[1]);
        assert_eq!(config["options"]["scales"], json!({}));
    }

    #[test]
    fn test_config_is_idempotent() {
        let table = sample_table();
        for kind in ChartKind::ALL {
            assert_eq!(chartjs_config(kind, &table), chartjs_config(kind, &table));
            assert_eq!(echarts_option(kind, &table), echarts_option(kind, &table));
        }
    }

    #[test]
    fn test_echarts_bar_shape() {
        let option = echarts_option(ChartKind::Bar, &sample_table());
        assert_eq!(option["title"]["text"], "Bar Chart Visualization");
        assert_eq!(option["xAxis"]["data"], json!(["Jan", "Feb"]));
        let series = &option["series"][0];
        assert_eq!(series["type"], "bar");
        assert_eq!(series["data"], json!([10.0, 20.0]));
        assert_eq!(series["itemStyle"]["color"], palette::ECHARTS_BAR_COLOR);
        assert!(series.get("smooth").is_none());
    }

    #[test]
    fn test_echarts_line_is_smooth() {
        let option = echarts_option(ChartKind::Line, &sample_table());
        let series = &option["series"][0];
        assert_eq!(series["type"], "line");
        assert_eq!(series["smooth"], true);
        assert_eq!(series["itemStyle"]["color"], palette::ECHARTS_LINE_COLOR);
    }

    #[test]
    fn test_echarts_pie_cycles_slice_colors() {
        let table = ChartTable {
            label_key: "city".to_string(),
            value_key: "count".to_string(),
            labels: vec![
                "c1".to_string(),
                "c2".to_string(),
                "c3".to_string(),
                "c4".to_string(),
            ],
            values: vec![1.0, 2.0, 3.0, 4.0],
        };
        let option = echarts_option(ChartKind::Pie, &table);
        assert_eq!(option["tooltip"]["trigger"], "item");
        let series = &option["series"][0];
        assert_eq!(series["radius"], "50%");
        let data = series["data"].as_array().unwrap();
        assert_eq!(data.len(), 4);
        assert_eq!(data[0]["name"], "c1");
        assert_eq!(data[0]["value"], 1.0);
        assert_eq!(
            data[0]["itemStyle"]["color"],
            palette::ECHARTS_PIE_PALETTE[0]
        );
        assert_eq!(
            data[2]["itemStyle"]["color"],
            palette::ECHARTS_PIE_PALETTE[2]
        );
        assert_eq!(
            data[3]["itemStyle"]["color"],
            palette::ECHARTS_PIE_PALETTE[0]
        );
    }

    #[test]
    fn test_echarts_doughnut_is_a_ring() {
        let option = echarts_option(ChartKind::Doughnut, &sample_table());
        assert_eq!(option["series"][0]["type"], "pie");
        assert_eq!(option["series"][0]["radius"], json!(["40%", "70%"]));
    }
}
