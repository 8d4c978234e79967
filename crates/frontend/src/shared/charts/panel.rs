//! Chart panels own the library instance for the lifetime of the panel.
//!
//! Both panels follow the same contract: the previous instance is dropped
//! (destroyed/disposed) before a replacement is created, and the instance is
//! dropped on unmount. Rows that cannot be charted render an inline message
//! instead of a chart.

use contracts::query::ResultRow;
use leptos::html;
use leptos::prelude::*;

use super::chartjs::ChartJsHandle;
use super::config;
use super::echarts::EChartsHandle;
use super::table::ChartTable;
use super::ChartKind;

/// Renders rows through Chart.js on an owned canvas
#[component]
pub fn ChartJsPanel(
    #[prop(into)] rows: Signal<Vec<ResultRow>>,
    #[prop(into)] kind: Signal<ChartKind>,
) -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    // Chart instance is a JS value, not Send; keep it thread-local.
    let chart = StoredValue::new_local(None::<ChartJsHandle>);
    let (shape_error, set_shape_error) = signal(None::<String>);

    Effect::new(move |_| {
        let kind_now = kind.get();
        let rows_now = rows.get();
        let canvas = canvas_ref.get();

        // The previous instance must go before a new one claims the canvas.
        chart.set_value(None);
        set_shape_error.set(None);

        let Some(canvas) = canvas else { return };
        if rows_now.is_empty() {
            return;
        }

        match ChartTable::from_rows(&rows_now) {
            Ok(table) => {
                let chart_config = config::chartjs_config(kind_now, &table);
                match ChartJsHandle::render(&canvas, &chart_config) {
                    Ok(handle) => chart.set_value(Some(handle)),
                    Err(e) => {
                        log::error!("Chart.js render failed: {}", e);
                        set_shape_error.set(Some(e));
                    }
                }
            }
            Err(e) => set_shape_error.set(Some(e.message())),
        }
    });

    on_cleanup(move || chart.set_value(None));

    view! {
        <div class="chart-panel">
            {move || {
                if let Some(message) = shape_error.get() {
                    view! { <p class="text-error">{message}</p> }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
            <canvas class="chart-panel__canvas" node_ref=canvas_ref></canvas>
        </div>
    }
}

/// Renders rows through ECharts in an owned container
#[component]
pub fn EChartsPanel(
    #[prop(into)] rows: Signal<Vec<ResultRow>>,
    #[prop(into)] kind: Signal<ChartKind>,
) -> impl IntoView {
    let container_ref = NodeRef::<html::Div>::new();
    let chart = StoredValue::new_local(None::<EChartsHandle>);
    let (shape_error, set_shape_error) = signal(None::<String>);

    Effect::new(move |_| {
        let kind_now = kind.get();
        let rows_now = rows.get();
        let container = container_ref.get();

        chart.set_value(None);
        set_shape_error.set(None);

        let Some(container) = container else { return };
        if rows_now.is_empty() {
            return;
        }

        match ChartTable::from_rows(&rows_now) {
            Ok(table) => {
                let option = config::echarts_option(kind_now, &table);
                match EChartsHandle::render(&container, &option) {
                    Ok(handle) => chart.set_value(Some(handle)),
                    Err(e) => {
                        log::error!("ECharts render failed: {}", e);
                        set_shape_error.set(Some(e));
                    }
                }
            }
            Err(e) => set_shape_error.set(Some(e.message())),
        }
    });

    on_cleanup(move || chart.set_value(None));

    view! {
        <div class="chart-panel">
            {move || {
                if let Some(message) = shape_error.get() {
                    view! { <p class="text-error">{message}</p> }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
            // ECharts reads the container size at init, so it is fixed here.
            <div
                class="chart-panel__container"
                style="width: 100%; height: 420px;"
                node_ref=container_ref
            ></div>
        </div>
    }
}
