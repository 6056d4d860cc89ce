//! Aggregate views: dashboard cards, top risk patterns and model feature
//! importance. Each section fetches and fails on its own.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::error_banner::ErrorBanner;
use crate::components::message_row::MessageRow;
use crate::config::DEFAULT_PERIOD_DAYS;
use crate::error::ApiError;
use crate::models::parse_days;
use crate::view_model::{
    dashboard_cards, feature_table, pattern_list, DashboardCard, FeatureRow, PatternItem,
    TableState, LOADING,
};

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    view! {
        <div class="page analytics-page">
            <h2>"Аналитика"</h2>
            <DashboardStatsSection />
            <div class="analytics-columns">
                <RiskPatternsSection />
                <FeatureImportanceSection />
            </div>
        </div>
    }
}

#[component]
fn DashboardStatsSection() -> impl IntoView {
    let (days, set_days) = signal(DEFAULT_PERIOD_DAYS.to_string());
    let (cards, set_cards) = signal(TableState::<DashboardCard>::Loading);
    let (error, set_error) = signal::<Option<String>>(None);

    let load = move || {
        let days = parse_days(&days.get_untracked());
        set_error.set(None);
        set_cards.set(TableState::Loading);
        spawn_local(async move {
            match api::dashboard_stats(days).await {
                Ok(stats) => set_cards.set(TableState::Rows(dashboard_cards(&stats))),
                Err(e) => {
                    log::error!("dashboard failed: {}", e);
                    set_error.set(Some(format!("Ошибка загрузки дашборда: {}", e)));
                    set_cards.set(TableState::Blank);
                }
            }
        });
    };

    load();

    view! {
        <section class="analytics-section">
            <div class="section-header">
                <h3>"Дашборд"</h3>
                <div class="input-row">
                    <label for="analytics-days">"Период, дней"</label>
                    <input
                        id="analytics-days"
                        type="number"
                        min="1"
                        class="input"
                        prop:value=move || days.get()
                        on:input=move |ev| set_days.set(event_target_value(&ev))
                    />
                    <button
                        id="btn-load-dashboard"
                        type="button"
                        class="btn btn-secondary"
                        on:click=move |_| load()
                    >
                        "Обновить"
                    </button>
                </div>
            </div>
            <ErrorBanner message=error id="dashboard-error" />
            <div id="dashboard-content" class="dashboard-grid">
                {move || match cards.get() {
                    TableState::Loading => view! { <p class="muted">{LOADING}</p> }.into_any(),
                    TableState::Message(text) => view! { <p class="muted">{text}</p> }.into_any(),
                    TableState::Blank => ().into_any(),
                    TableState::Rows(cards) => cards.into_iter().map(|c| view! {
                        <div class="dashboard-card">
                            <div class="dashboard-label">{c.label}</div>
                            <div class="dashboard-value">{c.value}</div>
                            {c.sub.map(|sub| view! { <div class="dashboard-sub">{sub}</div> })}
                        </div>
                    }).collect::<Vec<_>>().into_any(),
                }}
            </div>
        </section>
    }
}

#[component]
fn RiskPatternsSection() -> impl IntoView {
    let (patterns, set_patterns) = signal(TableState::<PatternItem>::Loading);
    let (error, set_error) = signal::<Option<String>>(None);

    let load = move || {
        set_error.set(None);
        set_patterns.set(TableState::Loading);
        spawn_local(async move {
            match api::risk_patterns().await {
                Ok(p) => set_patterns.set(pattern_list(&p)),
                Err(e) => {
                    log::error!("risk patterns failed: {}", e);
                    set_error.set(Some(format!("Ошибка загрузки паттернов: {}", e)));
                    set_patterns.set(TableState::Blank);
                }
            }
        });
    };

    load();

    view! {
        <section class="analytics-section">
            <div class="section-header">
                <h3>"Паттерны риска"</h3>
                <button
                    id="btn-load-risk-patterns"
                    type="button"
                    class="btn btn-secondary"
                    on:click=move |_| load()
                >
                    "Обновить"
                </button>
            </div>
            <ErrorBanner message=error id="risk-patterns-error" />
            <ul id="risk-patterns-list" class="pattern-list">
                {move || match patterns.get() {
                    TableState::Loading => view! { <li class="muted">{LOADING}</li> }.into_any(),
                    TableState::Message(text) => view! { <li class="muted">{text}</li> }.into_any(),
                    TableState::Blank => ().into_any(),
                    TableState::Rows(items) => items.into_iter().map(|p| view! {
                        <li class="pattern-item">
                            <div class="pattern-title">{p.title}</div>
                            <div>{p.description}</div>
                            <div class="pattern-meta">{p.meta}</div>
                        </li>
                    }).collect::<Vec<_>>().into_any(),
                }}
            </ul>
        </section>
    }
}

#[component]
fn FeatureImportanceSection() -> impl IntoView {
    let (rows, set_rows) = signal(TableState::<FeatureRow>::Loading);
    let (model, set_model) = signal::<Option<String>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let load = move || {
        set_error.set(None);
        set_model.set(None);
        set_rows.set(TableState::Loading);
        spawn_local(async move {
            match api::feature_importance().await {
                Ok(report) => {
                    set_model.set(report.model.clone());
                    set_rows.set(feature_table(&report));
                }
                // Reported by the model service itself: shown in place of the data.
                Err(ApiError::Application(message)) => {
                    log::warn!("feature importance unavailable: {}", message);
                    set_rows.set(TableState::Message(message));
                }
                Err(e) => {
                    log::error!("feature importance failed: {}", e);
                    set_error.set(Some(format!("Ошибка загрузки важности признаков: {}", e)));
                    set_rows.set(TableState::failed());
                }
            }
        });
    };

    load();

    view! {
        <section class="analytics-section">
            <div class="section-header">
                <h3>"Важность признаков"</h3>
                <button
                    id="btn-load-feature-importance"
                    type="button"
                    class="btn btn-secondary"
                    on:click=move |_| load()
                >
                    "Обновить"
                </button>
            </div>
            <ErrorBanner message=error id="feature-importance-error" />
            {move || model.get().map(|m| view! { <p class="muted">{format!("Модель: {}", m)}</p> })}
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Признак"</th>
                        <th>"Важность"</th>
                    </tr>
                </thead>
                <tbody id="feature-importance-tbody">
                    {move || match rows.get() {
                        TableState::Loading => view! { <MessageRow colspan=2 text=LOADING /> }.into_any(),
                        TableState::Message(text) => view! { <MessageRow colspan=2 text=text /> }.into_any(),
                        TableState::Blank => ().into_any(),
                        TableState::Rows(rows) => rows.into_iter().map(|f| view! {
                            <tr>
                                <td>{f.feature}</td>
                                <td>{f.importance}</td>
                            </tr>
                        }).collect::<Vec<_>>().into_any(),
                    }}
                </tbody>
            </table>
        </section>
    }
}
