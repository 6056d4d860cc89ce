use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::error_banner::ErrorBanner;
use crate::components::message_row::MessageRow;
use crate::config::{DEFAULT_PERIOD_DAYS, DEFAULT_TRANSACTION_LIMIT};
use crate::format::RiskLevel;
use crate::models::{parse_days, TransactionQuery};
use crate::view_model::{summary_items, transaction_table, TableState, TransactionRow, LOADING};

const COLUMNS: u32 = 7;

#[component]
pub fn TransactionsPage() -> impl IntoView {
    let (limit, set_limit) = signal(DEFAULT_TRANSACTION_LIMIT.to_string());
    let (risk, set_risk) = signal(String::new());
    let (fraud, set_fraud) = signal(String::new());
    let (days, set_days) = signal(DEFAULT_PERIOD_DAYS.to_string());

    let (table, set_table) = signal(TableState::<TransactionRow>::Loading);
    let (summary, set_summary) = signal::<Option<Vec<(String, String)>>>(None);
    // Shared by the list and the summary, like the panel it sits in.
    let (error, set_error) = signal::<Option<String>>(None);

    let load_transactions = move || {
        let query = TransactionQuery::from_filters(
            &limit.get_untracked(),
            &risk.get_untracked(),
            &fraud.get_untracked(),
        );
        set_error.set(None);
        set_table.set(TableState::Loading);
        spawn_local(async move {
            match api::list_transactions(&query).await {
                Ok(records) => set_table.set(transaction_table(&records)),
                Err(e) => {
                    log::error!("transactions failed: {}", e);
                    set_error.set(Some(format!("Ошибка загрузки транзакций: {}", e)));
                    set_table.set(TableState::failed());
                }
            }
        });
    };

    let load_summary = move || {
        let days = parse_days(&days.get_untracked());
        set_error.set(None);
        set_summary.set(None);
        spawn_local(async move {
            match api::transactions_summary(days).await {
                Ok(s) => set_summary.set(Some(summary_items(&s))),
                Err(e) => {
                    log::error!("summary failed: {}", e);
                    set_error.set(Some(format!("Ошибка получения summary: {}", e)));
                }
            }
        });
    };

    load_transactions();
    load_summary();

    view! {
        <div class="page transactions-page">
            <h2>"Транзакции"</h2>

            <div class="filters">
                <div class="form-group">
                    <label for="filter-limit">"Лимит"</label>
                    <input
                        id="filter-limit"
                        type="number"
                        min="1"
                        max="1000"
                        class="input"
                        prop:value=move || limit.get()
                        on:input=move |ev| set_limit.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="filter-risk">"Уровень риска"</label>
                    <select
                        id="filter-risk"
                        class="input"
                        prop:value=move || risk.get()
                        on:change=move |ev| set_risk.set(event_target_value(&ev))
                    >
                        <option value="">"Все"</option>
                        {RiskLevel::ALL.into_iter().map(|level| {
                            view! { <option value=level.as_str()>{level.as_str()}</option> }
                        }).collect::<Vec<_>>()}
                    </select>
                </div>
                <div class="form-group">
                    <label for="filter-is-fraud">"Мошенничество"</label>
                    <select
                        id="filter-is-fraud"
                        class="input"
                        prop:value=move || fraud.get()
                        on:change=move |ev| set_fraud.set(event_target_value(&ev))
                    >
                        <option value="">"Все"</option>
                        <option value="true">"Да"</option>
                        <option value="false">"Нет"</option>
                    </select>
                </div>
                <button
                    id="btn-load-transactions"
                    type="button"
                    class="btn btn-primary"
                    on:click=move |_| load_transactions()
                >
                    "Загрузить"
                </button>

                <div class="form-group">
                    <label for="filter-days">"Период, дней"</label>
                    <input
                        id="filter-days"
                        type="number"
                        min="1"
                        max="365"
                        class="input"
                        prop:value=move || days.get()
                        on:input=move |ev| set_days.set(event_target_value(&ev))
                    />
                </div>
                <button
                    id="btn-load-summary"
                    type="button"
                    class="btn btn-secondary"
                    on:click=move |_| load_summary()
                >
                    "Summary"
                </button>
            </div>

            <ErrorBanner message=error id="transactions-error" />

            {move || summary.get().map(|items| view! {
                <div id="transactions-summary" class="summary-line">
                    {items.into_iter().map(|(label, value)| view! {
                        <span>{format!("{}: ", label)}<strong>{value}</strong></span>
                    }).collect::<Vec<_>>()}
                </div>
            })}

            <TransactionLookup />

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Создана"</th>
                        <th>"ID транзакции"</th>
                        <th>"Клиент"</th>
                        <th>"Сумма"</th>
                        <th>"Вероятность"</th>
                        <th>"Риск"</th>
                        <th>"Fraud"</th>
                    </tr>
                </thead>
                <tbody id="transactions-tbody">
                    {move || match table.get() {
                        TableState::Loading => view! { <MessageRow colspan=COLUMNS text=LOADING /> }.into_any(),
                        TableState::Message(text) => view! { <MessageRow colspan=COLUMNS text=text /> }.into_any(),
                        TableState::Blank => ().into_any(),
                        TableState::Rows(rows) => rows.into_iter().map(|t| view! {
                            <tr>
                                <td>{t.created_at}</td>
                                <td>{t.transaction_id}</td>
                                <td>{t.client_id}</td>
                                <td>{t.amount}</td>
                                <td>{t.probability}</td>
                                <td>{t.risk_level}</td>
                                <td>{t.is_fraud}</td>
                            </tr>
                        }).collect::<Vec<_>>().into_any(),
                    }}
                </tbody>
            </table>
        </div>
    }
}

/// Fetch one stored transaction by id.
#[component]
fn TransactionLookup() -> impl IntoView {
    let (lookup_id, set_lookup_id) = signal(String::new());
    let (searching, set_searching) = signal(false);
    let (found, set_found) = signal::<Option<TransactionRow>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let do_lookup = move |_| {
        let id = lookup_id.get_untracked();
        if id.trim().is_empty() {
            return;
        }
        set_error.set(None);
        set_found.set(None);
        set_searching.set(true);
        spawn_local(async move {
            match api::get_transaction(&id).await {
                Ok(record) => set_found.set(Some(TransactionRow::from(&record))),
                Err(e) => {
                    log::error!("lookup of {} failed: {}", id, e);
                    set_error.set(Some(format!("Ошибка поиска транзакции: {}", e)));
                }
            }
            set_searching.set(false);
        });
    };

    view! {
        <div class="transaction-lookup">
            <div class="input-row">
                <input
                    id="lookup-transaction-id"
                    type="text"
                    class="input"
                    placeholder="ID транзакции"
                    prop:value=move || lookup_id.get()
                    on:input=move |ev| set_lookup_id.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="btn btn-secondary"
                    on:click=do_lookup
                    disabled=move || searching.get() || lookup_id.get().trim().is_empty()
                >
                    {move || if searching.get() { "Поиск..." } else { "Найти" }}
                </button>
            </div>
            <ErrorBanner message=error />
            {move || found.get().map(|t| view! {
                <table class="details-table">
                    <tbody>
                        <tr><th>"ID транзакции"</th><td>{t.transaction_id}</td></tr>
                        <tr><th>"Клиент"</th><td>{t.client_id}</td></tr>
                        <tr><th>"Создана"</th><td>{t.created_at}</td></tr>
                        <tr><th>"Сумма"</th><td>{t.amount}</td></tr>
                        <tr><th>"Вероятность"</th><td>{t.probability}</td></tr>
                        <tr><th>"Риск"</th><td>{t.risk_level}</td></tr>
                        <tr><th>"Fraud"</th><td>{t.is_fraud}</td></tr>
                    </tbody>
                </table>
            })}
        </div>
    }
}
