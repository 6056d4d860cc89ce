use leptos::prelude::*;

use crate::view_model::HealthView;

/// API health indicator shown in the header.
#[component]
pub fn StatusBadge(
    /// Latest health poll outcome
    #[prop(into)]
    health: Signal<HealthView>,
) -> impl IntoView {
    view! {
        <div class="health-status">
            <span id="health-status-indicator" class=move || health.get().dot_class></span>
            <span id="health-status-text" class="health-status-text">{move || health.get().text}</span>
        </div>
    }
}
