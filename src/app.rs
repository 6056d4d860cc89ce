use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::status_badge::StatusBadge;
use crate::components::tab_bar::{TabBar, TabPanel};
use crate::pages::analytics::AnalyticsPage;
use crate::pages::predict::PredictPage;
use crate::pages::simulation::SimulationPage;
use crate::pages::transactions::TransactionsPage;
use crate::tabs::Tab;
use crate::view_model::{health_view, HealthView};

#[component]
pub fn App() -> impl IntoView {
    let selected = RwSignal::new(Tab::default());
    let (health, set_health) = signal(HealthView::checking());

    // One-shot health poll; no retries
    spawn_local(async move {
        let result = api::fetch_health().await;
        if let Err(e) = &result {
            log::error!("health check failed: {}", e);
        }
        set_health.set(health_view(&result));
    });

    view! {
        <style>{include_str!("app.css")}</style>
        <div class="app-layout">
            <header class="app-header">
                <div>
                    <h1 class="app-title">"FraudShield"</h1>
                    <p class="app-subtitle">"Мониторинг мошеннических транзакций"</p>
                </div>
                <StatusBadge health=health />
            </header>
            <TabBar selected=selected />
            <main class="content">
                <TabPanel tab=Tab::Predict selected=selected>
                    <PredictPage />
                </TabPanel>
                <TabPanel tab=Tab::Transactions selected=selected>
                    <TransactionsPage />
                </TabPanel>
                <TabPanel tab=Tab::Analytics selected=selected>
                    <AnalyticsPage />
                </TabPanel>
                <TabPanel tab=Tab::Simulation selected=selected>
                    <SimulationPage />
                </TabPanel>
            </main>
        </div>
    }
}
