use contracts::connect::DbType;
use leptos::prelude::*;

use super::view_model::DbConnectViewModel;
use crate::shared::components::ImageResult;

/// Connect-then-ask page: the credentials form is replaced by the
/// question form once the backend accepts the connection.
#[component]
pub fn DbConnectView() -> impl IntoView {
    let vm = DbConnectViewModel::new();

    let form = vm.form;
    let is_connecting = vm.is_connecting;
    let connected = vm.connected;
    let connection_error = vm.connection_error;
    let question = vm.question;
    let image_bytes = vm.image_bytes;
    let loading = vm.loading;
    let error = vm.error;

    let vm_connect = vm.clone();
    let vm_ask = vm.clone();

    view! {
        <div id="v105_db_connect--view" class="query-view" data-page-category="query">
            <h1 class="query-view__title">"Connect to Database and Ask Questions"</h1>

            {move || {
                if connected.get() {
                    let vm_ask = vm_ask.clone();
                    view! {
                        <section class="query-view__block">
                            <h2 class="query-view__subtitle">"Ask a Question"</h2>
                            <form
                                class="query-view__form"
                                on:submit=move |ev: leptos::ev::SubmitEvent| {
                                    ev.prevent_default();
                                    vm_ask.ask_command();
                                }
                            >
                                <div class="form__group">
                                    <label class="form__label" for="v105-question">
                                        "Your question"
                                    </label>
                                    <input
                                        id="v105-question"
                                        class="form__input"
                                        type="text"
                                        placeholder="Enter your question..."
                                        required
                                        prop:value=move || question.get()
                                        on:input=move |ev| question.set(event_target_value(&ev))
                                    />
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

                            <Show when=move || image_bytes.get().is_some()>
                                <div class="query-view__result">
                                    <h2 class="query-view__subtitle">"Visualization"</h2>
                                    <ImageResult bytes=image_bytes alt="Generated Visualization" />
                                </div>
                            </Show>
                        </section>
                    }
                        .into_any()
                } else {
                    let vm_connect = vm_connect.clone();
                    view! {
                        <section class="query-view__block">
                            <h2 class="query-view__subtitle">"Connect to Database"</h2>
                            <form
                                class="query-view__form"
                                on:submit=move |ev: leptos::ev::SubmitEvent| {
                                    ev.prevent_default();
                                    vm_connect.connect_command();
                                }
                            >
                                <div class="form__group">
                                    <label class="form__label" for="v105-db-type">
                                        "Database Type"
                                    </label>
                                    <select
                                        id="v105-db-type"
                                        class="form__select"
                                        on:change=move |ev| {
                                            let value = event_target_value(&ev);
                                            form.update(|f| {
                                                f.db_type = DbType::parse(&value).unwrap_or_default()
                                            });
                                        }
                                    >
                                        {DbType::ALL
                                            .iter()
                                            .map(|t| {
                                                let t = *t;
                                                let selected =
                                                    move || form.get().db_type == t;
                                                view! {
                                                    <option value=t.as_str() selected=selected>
                                                        {t.label()}
                                                    </option>
                                                }
                                            })
                                            .collect_view()}
                                    </select>
                                </div>
                                <div class="form__group">
                                    <label class="form__label" for="v105-user">"User"</label>
                                    <input
                                        id="v105-user"
                                        class="form__input"
                                        type="text"
                                        required
                                        prop:value=move || form.get().user
                                        on:input=move |ev| {
                                            form.update(|f| f.user = event_target_value(&ev))
                                        }
                                    />
                                </div>
                                <div class="form__group">
                                    <label class="form__label" for="v105-password">"Password"</label>
                                    <input
                                        id="v105-password"
                                        class="form__input"
                                        type="password"
                                        required
                                        prop:value=move || form.get().password
                                        on:input=move |ev| {
                                            form.update(|f| f.password = event_target_value(&ev))
                                        }
                                    />
                                </div>
                                <div class="form__group">
                                    <label class="form__label" for="v105-host">"Host"</label>
                                    <input
                                        id="v105-host"
                                        class="form__input"
                                        type="text"
                                        required
                                        prop:value=move || form.get().host
                                        on:input=move |ev| {
                                            form.update(|f| f.host = event_target_value(&ev))
                                        }
                                    />
                                </div>
                                <div class="form__group">
                                    <label class="form__label" for="v105-database">
                                        "Database Name"
                                    </label>
                                    <input
                                        id="v105-database"
                                        class="form__input"
                                        type="text"
                                        required
                                        prop:value=move || form.get().database
                                        on:input=move |ev| {
                                            form.update(|f| f.database = event_target_value(&ev))
                                        }
                                    />
                                </div>
                                <button
                                    class="button button--primary"
                                    type="submit"
                                    disabled=move || is_connecting.get()
                                >
                                    {move || {
                                        if is_connecting.get() {
                                            "Connecting..."
                                        } else {
                                            "Connect to Database"
                                        }
                                    }}
                                </button>
                            </form>

                            <Show when=move || connection_error.get().is_some()>
                                <p class="text-error">
                                    {move || connection_error.get().unwrap_or_default()}
                                </p>
                            </Show>
                        </section>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
