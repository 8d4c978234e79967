use leptos::logging::log;
use leptos::prelude::*;

use super::v101_chartjs_query::ChartJsQueryView;
use super::v102_echarts_query::EChartsQueryView;
use super::v103_image_query::ImageQueryView;
use super::v104_sql_chain::SqlChainView;
use super::v105_db_connect::DbConnectView;

/// Registered views: stable key (also the `?active=` value) and the
/// label shown in the header navigation.
pub const VIEWS: [(&str, &str); 5] = [
    ("v101_chartjs_query", "Chart.js"),
    ("v102_echarts_query", "ECharts"),
    ("v103_image_query", "Image"),
    ("v104_sql_chain", "SQL Chain"),
    ("v105_db_connect", "Database"),
];

pub fn is_registered(key: &str) -> bool {
    VIEWS.iter().any(|(k, _)| *k == key)
}

pub fn render_view(key: &str) -> AnyView {
    match key {
        "v101_chartjs_query" => view! { <ChartJsQueryView /> }.into_any(),
        "v102_echarts_query" => view! { <EChartsQueryView /> }.into_any(),
        "v103_image_query" => view! { <ImageQueryView /> }.into_any(),
        "v104_sql_chain" => view! { <SqlChainView /> }.into_any(),
        "v105_db_connect" => view! { <DbConnectView /> }.into_any(),
        _ => {
            log!("⚠️ Unknown view key: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_keys_are_unique() {
        for (index, (key, _)) in VIEWS.iter().enumerate() {
            assert!(
                VIEWS.iter().skip(index + 1).all(|(other, _)| other != key),
                "duplicate view key: {}",
                key
            );
        }
    }

    #[test]
    fn test_is_registered() {
        assert!(is_registered("v101_chartjs_query"));
        assert!(is_registered("v105_db_connect"));
        assert!(!is_registered("v999_missing"));
    }
}
