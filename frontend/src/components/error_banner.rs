//! Error banner shown when the last upload failed.

use leptos::*;

#[component]
pub fn ErrorBanner(
    /// Message of the last failed upload, if any
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show
            when=move || error.with(Option::is_some)
            fallback=|| view! { }
        >
            <div class="error-message" role="alert">
                <p>"Error: " {move || error.get().unwrap_or_default()}</p>
            </div>
        </Show>
    }
}
