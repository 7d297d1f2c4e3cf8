use leptos::*;
use crate::services::{backend_state, fetch_health};
use crate::{BackendState, BACKEND_URL};

#[component]
pub fn Header() -> impl IntoView {
    let (status, set_status) = create_signal(BackendState::Checking);

    // Probe the prediction service once on mount
    spawn_local(async move {
        let outcome = fetch_health(BACKEND_URL).await;
        match &outcome {
            Ok(health) => log::info!("🩺 Backend {} (model loaded: {})", health.status, health.model_loaded),
            Err(e) => log::warn!("🩺 Health check failed: {}", e),
        }
        set_status.set(backend_state(&outcome));
    });

    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">"SCANVIEW"</a>
            </div>
            <div class="header-right">
                <div class=move || format!("backend-status {}", status.get().css_class())>
                    <span class="status-dot"></span>
                    <span>{move || status.get().label()}</span>
                </div>
            </div>
        </header>
    }
}
