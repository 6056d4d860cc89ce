use leptos::prelude::*;

/// Single muted row spanning a whole table: loading, empty or failure text.
#[component]
pub fn MessageRow(colspan: u32, #[prop(into)] text: String) -> impl IntoView {
    view! {
        <tr>
            <td colspan=colspan.to_string() class="muted">{text}</td>
        </tr>
    }
}
