use leptos::prelude::*;
use thaw::*;

use crate::shared::backend;
use crate::shared::components::ImageResult;

/// Image query page: the backend executes a generated Python script and
/// returns the rendered figure as a PNG.
#[component]
pub fn ImageQueryView() -> impl IntoView {
    let question = RwSignal::new(String::new());
    let (image, set_image) = signal(None::<Vec<u8>>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let on_generate = move |_| {
        let question_value = question.get();
        if question_value.trim().is_empty() {
            return;
        }

        set_loading.set(true);
        set_error.set(None);
        set_image.set(None);

        leptos::task::spawn_local(async move {
            match backend::code_to_visualization(&question_value).await {
                Ok(bytes) => set_image.set(Some(bytes)),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    view! {
        <div id="v103_image_query--view" class="query-view" data-page-category="query">
            <h1 class="query-view__title">"Python Script Execute To Visualization"</h1>

            <Flex vertical=true gap=FlexGap::Medium>
                <div class="form__group">
                    <Label>"Your question"</Label>
                    <Input value=question placeholder="Enter your question..." />
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || loading.get())
                    on_click=on_generate
                >
                    {move || if loading.get() { "Generating..." } else { "Generate Visualization" }}
                </Button>
            </Flex>

            <Show when=move || error.get().is_some()>
                <div class="warning-box">
                    <span class="text-error">{move || error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <Show when=move || image.get().is_some()>
                <section class="query-view__result">
                    <h2 class="query-view__subtitle">"Your Visualization"</h2>
                    <ImageResult bytes=image alt="Generated visualization" />
                </section>
            </Show>
        </div>
    }
}
