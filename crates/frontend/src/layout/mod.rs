pub mod global_context;
pub mod header;

use leptos::prelude::*;

pub use global_context::AppGlobalContext;

use crate::views::registry;
use header::Header;

/// Application frame.
///
/// ```text
/// +------------------------------------------+
/// |           Header (navigation)            |
/// +------------------------------------------+
/// |               active view                |
/// +------------------------------------------+
/// ```
#[component]
pub fn AppShell() -> impl IntoView {
    let app_context =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    app_context.init_router_integration();

    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">
                {move || registry::render_view(&app_context.active.get())}
            </main>
        </div>
    }
}
