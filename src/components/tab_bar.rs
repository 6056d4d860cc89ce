use leptos::prelude::*;

use crate::tabs::{button_class, panel_class, Tab};

#[component]
pub fn TabBar(selected: RwSignal<Tab>) -> impl IntoView {
    view! {
        <nav class="tab-bar">
            {Tab::ALL.into_iter().map(|tab| {
                view! {
                    <button
                        type="button"
                        class=move || button_class(tab, selected.get())
                        data-tab=tab.key()
                        on:click=move |_| selected.set(tab)
                    >
                        {tab.label()}
                    </button>
                }
            }).collect::<Vec<_>>()}
        </nav>
    }
}

/// Panel body for one tab. Panels stay mounted; only the `active` class moves.
#[component]
pub fn TabPanel(tab: Tab, selected: RwSignal<Tab>, children: Children) -> impl IntoView {
    view! {
        <section id=tab.key() class=move || panel_class(tab, selected.get())>
            {children()}
        </section>
    }
}
