use contracts::query::ResultRow;
use leptos::prelude::*;

use crate::shared::backend;
use crate::shared::charts::panel::EChartsPanel;
use crate::shared::charts::ChartKind;

/// ECharts offers no doughnut preset here, so the select is narrower
/// than on the Chart.js page.
const CHART_CHOICES: [ChartKind; 3] = [ChartKind::Bar, ChartKind::Line, ChartKind::Pie];

/// ECharts query page: the same question flow rendered through ECharts.
#[component]
pub fn EChartsQueryView() -> impl IntoView {
    let (question, set_question) = signal(String::new());
    let (kind_choice, set_kind_choice) = signal(ChartKind::default().as_str().to_string());
    let (rows, set_rows) = signal(None::<Vec<ResultRow>>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let question_value = question.get();
        if question_value.trim().is_empty() {
            return;
        }

        set_loading.set(true);
        set_error.set(None);
        set_rows.set(None);

        leptos::task::spawn_local(async move {
            match backend::ask(&question_value).await {
                Ok(result) => set_rows.set(Some(result)),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let chart_kind =
        Signal::derive(move || ChartKind::parse(&kind_choice.get()).unwrap_or_default());
    let chart_rows = Signal::derive(move || rows.get().unwrap_or_default());

    view! {
        <div id="v102_echarts_query--view" class="query-view" data-page-category="query">
            <h1 class="query-view__title">"SQL RESULT DATA TO VISUALIZATION"</h1>

            <form class="query-view__form" on:submit=on_submit>
                <div class="form__group">
                    <label class="form__label" for="v102-question">"Your question"</label>
                    <input
                        id="v102-question"
                        class="form__input"
                        type="text"
                        placeholder="Enter your question..."
                        required
                        prop:value=move || question.get()
                        on:input=move |ev| set_question.set(event_target_value(&ev))
                    />
                </div>

                <div class="form__group">
                    <label class="form__label" for="v102-chart-kind">
                        "Select Visualization Type:"
                    </label>
                    <select
                        id="v102-chart-kind"
                        class="form__select"
                        on:change=move |ev| set_kind_choice.set(event_target_value(&ev))
                    >
                        {CHART_CHOICES
                            .iter()
                            .map(|kind| {
                                let value = kind.as_str();
                                let selected = move || kind_choice.get() == value;
                                view! {
                                    <option value=value selected=selected>
                                        {kind.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <button class="button button--primary" type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Fetching Data..." } else { "Submit" }}
                </button>
            </form>

            <Show when=move || error.get().is_some()>
                <p class="text-error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show when=move || rows.get().is_some()>
                <section class="query-view__result">
                    <h2 class="query-view__subtitle">"Visualization"</h2>
                    <EChartsPanel rows=chart_rows kind=chart_kind />
                </section>
            </Show>
        </div>
    }
}
