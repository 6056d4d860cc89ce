use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::error_banner::ErrorBanner;
use crate::components::loader::Loader;
use crate::components::message_row::MessageRow;
use crate::components::risk_chip::RiskChip;
use crate::error::REQUEST_FAILED;
use crate::format::risk_chip;
use crate::models::{SimulationForm, TransactionType};
use crate::view_model::{SimulationView, TableState};

#[component]
pub fn SimulationPage() -> impl IntoView {
    let defaults = SimulationForm::default();
    let (count, set_count) = signal(defaults.count);
    let (kind, set_kind) = signal(defaults.transaction_type);
    let (ratio, set_ratio) = signal(defaults.fraud_ratio);

    let (generating, set_generating) = signal(false);
    let (result, set_result) = signal::<Option<SimulationView>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = SimulationForm {
            count: count.get_untracked(),
            transaction_type: kind.get_untracked(),
            fraud_ratio: ratio.get_untracked(),
        }
        .to_request();

        set_error.set(None);
        set_result.set(None);
        set_generating.set(true);

        spawn_local(async move {
            match api::generate_simulation(&request).await {
                Ok(batch) => set_result.set(Some(SimulationView::from(&batch))),
                Err(e) => {
                    log::error!("simulation failed: {}", e);
                    set_error.set(Some(format!("Ошибка генерации: {}", e.describe_or(REQUEST_FAILED))));
                }
            }
            set_generating.set(false);
        });
    };

    view! {
        <div class="page simulation-page">
            <h2>"Симуляция транзакций"</h2>
            <p class="page-description">
                "Сгенерировать тестовые транзакции и прогнать их через модель."
            </p>

            <form id="simulate-generate-form" class="filters" on:submit=on_submit>
                <div class="form-group">
                    <label for="sim-count">"Количество"</label>
                    <input
                        id="sim-count"
                        type="number"
                        min="1"
                        max="500"
                        class="input"
                        prop:value=move || count.get()
                        on:input=move |ev| set_count.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="sim-type">"Тип"</label>
                    <select
                        id="sim-type"
                        class="input"
                        prop:value=move || kind.get()
                        on:change=move |ev| set_kind.set(event_target_value(&ev))
                    >
                        {TransactionType::ALL.into_iter().map(|t| {
                            view! { <option value=t.as_str()>{t.label()}</option> }
                        }).collect::<Vec<_>>()}
                    </select>
                </div>
                <div class="form-group">
                    <label for="sim-fraud-ratio">"Доля fraud"</label>
                    <input
                        id="sim-fraud-ratio"
                        type="number"
                        min="0"
                        max="1"
                        step="0.01"
                        class="input"
                        prop:value=move || ratio.get()
                        on:input=move |ev| set_ratio.set(event_target_value(&ev))
                    />
                </div>
                <button
                    id="btn-sim-generate"
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || generating.get()
                >
                    "Сгенерировать"
                </button>
            </form>

            <Loader when=generating text="Генерация..." />
            <ErrorBanner message=error id="sim-generate-error" />

            {move || result.get().map(|r| {
                let rows = match r.rows {
                    TableState::Rows(rows) => rows.into_iter().map(|t| view! {
                        <tr>
                            <td><RiskChip chip=risk_chip(Some(t.risk.as_str())) /></td>
                            <td>{t.amount}</td>
                            <td>{t.probability}</td>
                            <td>{t.is_fraud}</td>
                        </tr>
                    }).collect::<Vec<_>>().into_any(),
                    TableState::Message(text) => view! { <MessageRow colspan=4 text=text /> }.into_any(),
                    TableState::Loading | TableState::Blank => ().into_any(),
                };
                view! {
                    <div id="sim-generate-result" class="card">
                        <div class="summary-line">
                            <span>"Сгенерировано: "<strong id="sim-total">{r.total}</strong></span>
                            <span>"Fraud: "<strong id="sim-fraud-count">{r.fraud_count}</strong></span>
                            <span>"Fraud rate: "<strong id="sim-fraud-rate">{r.fraud_rate}</strong></span>
                            <span>"Время: "<strong id="sim-generated-at">{r.generated_at}</strong></span>
                        </div>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Риск"</th>
                                    <th>"Сумма"</th>
                                    <th>"Вероятность"</th>
                                    <th>"Fraud"</th>
                                </tr>
                            </thead>
                            <tbody id="sim-transactions-tbody">{rows}</tbody>
                        </table>
                    </div>
                }
            })}
        </div>
    }
}
