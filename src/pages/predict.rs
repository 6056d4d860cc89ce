//! Single-transaction scoring form.
//!
//! Blank numeric inputs are sent as `null`, never zero, so the API can
//! reject an incomplete form instead of scoring made-up values.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::error_banner::ErrorBanner;
use crate::components::loader::Loader;
use crate::components::risk_chip::RiskChip;
use crate::error::REQUEST_FAILED;
use crate::models::{PredictForm, TransactionTemplate, PREDICT_FIELDS};
use crate::view_model::{PredictionView, TableState};

#[component]
pub fn PredictPage() -> impl IntoView {
    let form = RwSignal::new(PredictForm::default());
    let (submitting, set_submitting) = signal(false);
    let (result, set_result) = signal::<Option<PredictionView>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = form.with_untracked(PredictForm::to_payload);

        set_error.set(None);
        set_result.set(None);
        set_submitting.set(true);

        spawn_local(async move {
            match api::predict(&payload).await {
                Ok(r) => set_result.set(Some(PredictionView::from(&r))),
                Err(e) => {
                    log::error!("scoring failed: {}", e);
                    set_error.set(Some(format!("Ошибка скоринга: {}", e.describe_or(REQUEST_FAILED))));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="page predict-page">
            <h2>"Скоринг транзакции"</h2>
            <p class="page-description">
                "Введите признаки транзакции и поведения клиента. Пустые поля отправляются как отсутствующие."
            </p>

            <TemplatePicker form=form />

            <form id="predict-form" class="predict-form" on:submit=on_submit>
                <div class="form-grid">
                    <div class="form-group">
                        <label for="client_id">"ID клиента (необязательно)"</label>
                        <input
                            id="client_id"
                            type="text"
                            class="input"
                            prop:value=move || form.with(|f| f.client_id.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.client_id = value);
                            }
                        />
                    </div>
                    {PREDICT_FIELDS.into_iter().map(|field| {
                        let key = field.key;
                        view! {
                            <div class="form-group">
                                <label for=field.input_id>{field.label}</label>
                                <input
                                    id=field.input_id
                                    name=key
                                    type="number"
                                    step=field.step
                                    class="input"
                                    prop:value=move || form.with(|f| f.value(key).to_string())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| f.set(key, value));
                                    }
                                />
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>

                <div class="action-buttons">
                    <button
                        id="predict-submit"
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || submitting.get()
                    >
                        "Оценить риск"
                    </button>
                    <button
                        type="button"
                        class="btn btn-secondary"
                        on:click=move |_| form.set(PredictForm::default())
                    >
                        "Очистить"
                    </button>
                </div>
            </form>

            <Loader when=submitting text="Скоринг..." />
            <ErrorBanner message=error id="predict-error" />

            <Show when=move || result.get().is_none() && error.get().is_none() && !submitting.get()>
                <p id="predict-result-empty" class="muted">"Результат скоринга появится здесь."</p>
            </Show>

            {move || result.get().map(|r| view! { <PredictionCard result=r /> })}
        </div>
    }
}

#[component]
fn PredictionCard(result: PredictionView) -> impl IntoView {
    let PredictionView {
        transaction_id,
        chip,
        probability,
        bar_width,
        is_fraud,
        model_version,
        timestamp,
        reasons,
    } = result;

    let reasons = match reasons {
        TableState::Rows(items) => items
            .into_iter()
            .map(|r| view! { <li>{r}</li> })
            .collect::<Vec<_>>()
            .into_any(),
        TableState::Message(text) => view! { <li class="muted">{text}</li> }.into_any(),
        TableState::Loading | TableState::Blank => ().into_any(),
    };

    view! {
        <div id="predict-result" class="card predict-result">
            <div class="result-row">
                <span class="result-label">"ID транзакции"</span>
                <span id="result-transaction-id">{transaction_id}</span>
            </div>
            <div class="result-row">
                <span class="result-label">"Уровень риска"</span>
                <RiskChip chip=chip id="result-risk-level" />
            </div>
            <div class="result-row">
                <span class="result-label">"Вероятность мошенничества"</span>
                <span id="result-fraud-proba">{probability}</span>
            </div>
            <div class="probability-bar">
                <div id="result-fraud-bar" class="probability-bar-fill" style:width=bar_width></div>
            </div>
            <div class="result-row">
                <span class="result-label">"Мошенничество"</span>
                <span id="result-is-fraud">{is_fraud}</span>
            </div>
            <div class="result-row">
                <span class="result-label">"Версия модели"</span>
                <span id="result-model-version">{model_version}</span>
            </div>
            <div class="result-row">
                <span class="result-label">"Время"</span>
                <span id="result-timestamp">{timestamp}</span>
            </div>
            <h4>"Причины"</h4>
            <ul id="result-reasons" class="reasons-list">{reasons}</ul>
        </div>
    }
}

/// Sample transactions from the simulator that pre-fill the form.
#[component]
fn TemplatePicker(form: RwSignal<PredictForm>) -> impl IntoView {
    let (templates, set_templates) = signal::<Vec<TransactionTemplate>>(vec![]);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let load_templates = move |_| {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::transaction_templates().await {
                Ok(t) => set_templates.set(t),
                Err(e) => {
                    log::error!("templates failed: {}", e);
                    set_error.set(Some(format!("Ошибка загрузки шаблонов: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="template-picker">
            <button
                type="button"
                class="btn btn-small btn-secondary"
                on:click=load_templates
                disabled=move || loading.get()
            >
                {move || if loading.get() { "Загрузка..." } else { "Загрузить шаблоны" }}
            </button>
            {move || templates.get().into_iter().map(|t| {
                let name = t.name.clone();
                let title = t.scenario.clone().unwrap_or_default();
                view! {
                    <button
                        type="button"
                        class="btn btn-small"
                        title=title
                        on:click=move |_| form.set(PredictForm::from_template(&t))
                    >
                        {name}
                    </button>
                }
            }).collect::<Vec<_>>()}
            <ErrorBanner message=error />
        </div>
    }
}
