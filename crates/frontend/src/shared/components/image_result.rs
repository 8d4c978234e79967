//! Presents a binary image payload returned by the backend.

use leptos::prelude::*;

use crate::shared::blob_url::ObjectUrl;

/// Mounts the latest image payload as an `<img>`.
///
/// Holds exactly one object URL at a time: a replaced payload revokes the
/// previous URL, and unmount revokes the last one.
#[component]
pub fn ImageResult(
    #[prop(into)] bytes: Signal<Option<Vec<u8>>>,
    #[prop(optional)] alt: &'static str,
) -> impl IntoView {
    // Object URLs are JS-backed, not Send; keep the owner thread-local.
    let url_owner = StoredValue::new_local(None::<ObjectUrl>);
    let (src, set_src) = signal(None::<String>);

    Effect::new(move |_| {
        let payload = bytes.get();

        // Dropping the previous owner revokes its URL.
        url_owner.set_value(None);
        set_src.set(None);

        let Some(payload) = payload else { return };
        match ObjectUrl::from_png_bytes(&payload) {
            Ok(url) => {
                set_src.set(Some(url.as_str().to_string()));
                url_owner.set_value(Some(url));
            }
            Err(e) => log::error!("Failed to mount image payload: {}", e),
        }
    });

    on_cleanup(move || url_owner.set_value(None));

    view! {
        <Show when=move || src.get().is_some()>
            <img class="result-image" src=move || src.get() alt=alt />
        </Show>
    }
}
