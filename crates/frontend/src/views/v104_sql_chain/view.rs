use contracts::query::ResultRow;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::shared::backend;
use crate::shared::charts::panel::ChartJsPanel;
use crate::shared::charts::ChartKind;
use crate::shared::components::ImageResult;

/// SQL-chain dashboard: one question, two submission paths.
///
/// The image form renders the answer server side, the chart form pulls
/// rows through the SQL chain and charts them locally. Both paths share
/// the question, the loading flag, the error slot and the elapsed-time
/// counter; each clears only its own result.
#[component]
pub fn SqlChainView() -> impl IntoView {
    let (question, set_question) = signal(String::new());
    let (kind_choice, set_kind_choice) = signal(ChartKind::default().as_str().to_string());
    let (image, set_image) = signal(None::<Vec<u8>>);
    let (rows, set_rows) = signal(None::<Vec<ResultRow>>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (elapsed, set_elapsed) = signal(0u32);

    // Each new request invalidates the previous ticker loop.
    let timer_generation = StoredValue::new(0u64);

    Effect::new(move |_| {
        if !loading.get() {
            return;
        }
        let generation = timer_generation.with_value(|g| g + 1);
        timer_generation.set_value(generation);
        leptos::task::spawn_local(async move {
            loop {
                // Пауза 1 секунда между тиками
                TimeoutFuture::new(1_000).await;
                if !loading.get_untracked() || timer_generation.get_value() != generation {
                    break;
                }
                set_elapsed.update(|seconds| *seconds += 1);
            }
        });
    });

    let on_generate_image = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let question_value = question.get();
        if question_value.trim().is_empty() {
            return;
        }

        set_loading.set(true);
        set_error.set(None);
        set_image.set(None);
        set_elapsed.set(0);

        leptos::task::spawn_local(async move {
            match backend::code_to_visualization(&question_value).await {
                Ok(bytes) => set_image.set(Some(bytes)),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let on_fetch_rows = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let question_value = question.get();
        if question_value.trim().is_empty() {
            return;
        }

        set_loading.set(true);
        set_error.set(None);
        set_rows.set(None);
        set_elapsed.set(0);

        leptos::task::spawn_local(async move {
            match backend::ask_sql_chain(&question_value).await {
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
        <div id="v104_sql_chain--view" class="query-view" data-page-category="query">
            <h1 class="query-view__title">"NLB-QS"</h1>
            <p class="query-view__lead">
                "Ask any question related to the data, and we'll generate a visualization for you!"
            </p>
            <h3 class="query-view__timer">
                {move || format!("Time Elapsed: {} seconds", elapsed.get())}
            </h3>

            <section class="query-view__block">
                <h2 class="query-view__subtitle">"Generate Visualization as Image"</h2>
                <form class="query-view__form" on:submit=on_generate_image>
                    <div class="form__group">
                        <label class="form__label" for="v104-question-image">"Your question"</label>
                        <input
                            id="v104-question-image"
                            class="form__input"
                            type="text"
                            placeholder="Enter your question..."
                            required
                            prop:value=move || question.get()
                            on:input=move |ev| set_question.set(event_target_value(&ev))
                        />
                    </div>
                    <button
                        class="button button--primary"
                        type="submit"
                        disabled=move || loading.get()
                    >
                        {move || if loading.get() { "Generating Image..." } else { "Submit" }}
                    </button>
                </form>

                <Show when=move || error.get().is_some()>
                    <p class="text-error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <Show when=move || image.get().is_some()>
                    <div class="query-view__result">
                        <h2 class="query-view__subtitle">"Your Visualization as Image"</h2>
                        <ImageResult bytes=image alt="Generated visualization" />
                    </div>
                </Show>
            </section>

            <section class="query-view__block">
                <h2 class="query-view__subtitle">"Generate Visualization with Chart"</h2>
                <form class="query-view__form" on:submit=on_fetch_rows>
                    <div class="form__group">
                        <label class="form__label" for="v104-question-chart">"Your question"</label>
                        <input
                            id="v104-question-chart"
                            class="form__input"
                            type="text"
                            placeholder="Enter your question..."
                            required
                            prop:value=move || question.get()
                            on:input=move |ev| set_question.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label" for="v104-chart-kind">
                            "Select Visualization Type:"
                        </label>
                        <select
                            id="v104-chart-kind"
                            class="form__select"
                            on:change=move |ev| set_kind_choice.set(event_target_value(&ev))
                        >
                            {ChartKind::ALL
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
                    <button
                        class="button button--primary"
                        type="submit"
                        disabled=move || loading.get()
                    >
                        {move || if loading.get() { "Fetching Data..." } else { "Submit" }}
                    </button>
                </form>

                <Show when=move || error.get().is_some()>
                    <p class="text-error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <Show when=move || rows.get().is_some()>
                    <div class="query-view__result">
                        <h2 class="query-view__subtitle">"Visualization"</h2>
                        <ChartJsPanel rows=chart_rows kind=chart_kind />
                    </div>
                </Show>
            </section>
        </div>
    }
}
