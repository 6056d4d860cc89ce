use leptos::prelude::*;

#[component]
pub fn Loader(#[prop(into)] when: Signal<bool>, text: &'static str) -> impl IntoView {
    view! {
        <Show when=move || when.get()>
            <div class="loading-spinner">
                <div class="spinner"></div>
                <span>{text}</span>
            </div>
        </Show>
    }
}
