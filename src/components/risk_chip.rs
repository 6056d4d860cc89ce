use leptos::prelude::*;

use crate::format::Chip;

#[component]
pub fn RiskChip(chip: Chip, #[prop(optional, into)] id: Option<String>) -> impl IntoView {
    view! { <span id=id class=chip.class>{chip.text}</span> }
}
