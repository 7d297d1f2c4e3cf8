//! Prediction result card.

use leptos::*;
use crate::PredictionResult;

#[component]
pub fn ResultCard(result: Signal<Option<PredictionResult>>) -> impl IntoView {
    view! {
        {move || result.get().map(|result| view! {
            <div class="result-section">
                <h2>"Prediction Result"</h2>
                <div class="result-card">
                    <p>
                        <strong>"Class:"</strong> " " {result.label.clone()}
                    </p>
                    <p>
                        <strong>"Confidence:"</strong> " " {result.confidence_label()}
                    </p>
                </div>
            </div>
        })}
    }
}
