use leptos::prelude::*;

/// Panel-scoped error banner. Hidden while `message` is `None`; the next
/// successful retry clears it.
#[component]
pub fn ErrorBanner(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(optional, into)] id: Option<String>,
) -> impl IntoView {
    view! {
        <div id=id class="error-banner" class:hidden=move || message.get().is_none()>
            {move || message.get().unwrap_or_default()}
        </div>
    }
}
