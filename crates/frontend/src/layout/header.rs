use leptos::prelude::*;

use super::global_context::AppGlobalContext;
use crate::views::registry::VIEWS;

/// Top bar: product name plus one navigation button per view.
#[component]
pub fn Header() -> impl IntoView {
    let app_context =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"NLQ Studio"</span>
                <nav class="header__nav">
                    {VIEWS
                        .iter()
                        .map(|(key, label)| {
                            let key = *key;
                            view! {
                                <button
                                    class="button button--ghost"
                                    class:button--active=move || app_context.active.get() == key
                                    on:click=move |_| app_context.activate(key)
                                >
                                    {*label}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
