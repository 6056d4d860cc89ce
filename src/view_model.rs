//! Display-ready rows and cards built from API responses.
//!
//! Pages only turn these into markup, so every placeholder and fallback
//! rule lives here.

use crate::config::SIMULATION_PREVIEW_ROWS;
use crate::error::ApiError;
use crate::format::{
    classify_probability, format_date, format_datetime, format_percent, format_percent_precise,
    format_tenge, probability_bar_width, risk_chip, yes_no, Chip, RiskLevel, PLACEHOLDER,
};
use crate::models::{
    DashboardStats, FeatureImportanceReport, GeneratedTransaction, HealthStatus,
    PredictionResult, RiskPattern, SimulationBatch, TransactionRecord, TransactionsSummary,
};

pub const LOADING: &str = "Загрузка...";
pub const LOAD_FAILED: &str = "Не удалось загрузить данные.";
pub const NO_RECORDS: &str = "Записей не найдено.";
pub const NO_PATTERNS: &str = "Паттерны не найдены.";
pub const NO_FEATURES: &str = "Нет данных по важности признаков.";
pub const NO_SIMULATED: &str = "Нет транзакций.";
pub const NO_REASONS: &str = "Объяснения от модели отсутствуют.";
pub const HEALTH_UNAVAILABLE: &str = "Не удалось получить статус API";

/// Body of a table or list panel.
#[derive(Debug, Clone, PartialEq)]
pub enum TableState<R> {
    Loading,
    Rows(Vec<R>),
    /// A single muted row spanning the table.
    Message(String),
    /// Nothing rendered; the panel's banner carries the failure.
    Blank,
}

impl<R> TableState<R> {
    fn from_rows(rows: Vec<R>, empty: &str) -> Self {
        if rows.is_empty() {
            TableState::Message(empty.to_string())
        } else {
            TableState::Rows(rows)
        }
    }

    pub fn failed() -> Self {
        TableState::Message(LOAD_FAILED.to_string())
    }
}

// -- Health --

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthView {
    pub text: String,
    pub dot_class: &'static str,
}

impl HealthView {
    pub fn checking() -> Self {
        HealthView {
            text: "Проверка статуса API...".to_string(),
            dot_class: "status-dot",
        }
    }
}

pub fn health_view(result: &Result<HealthStatus, ApiError>) -> HealthView {
    match result {
        Ok(health) => {
            let c = &health.components;
            let text = format!(
                "API: {}, DB: {}, ML: {}",
                c.api.as_deref().unwrap_or("unknown"),
                c.database.as_deref().unwrap_or("unknown"),
                c.ml_models.as_deref().unwrap_or("unknown"),
            );
            let dot_class = match health.status.as_str() {
                "healthy" => "status-dot status-dot--ok",
                "degraded" => "status-dot status-dot--degraded",
                _ => "status-dot status-dot--unhealthy",
            };
            HealthView { text, dot_class }
        }
        Err(_) => HealthView {
            text: HEALTH_UNAVAILABLE.to_string(),
            dot_class: "status-dot status-dot--error",
        },
    }
}

// -- Prediction --

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionView {
    pub transaction_id: String,
    pub chip: Chip,
    pub probability: String,
    pub bar_width: String,
    pub is_fraud: &'static str,
    pub model_version: String,
    pub timestamp: String,
    /// Either the model's reasons or one muted placeholder.
    pub reasons: TableState<String>,
}

impl From<&PredictionResult> for PredictionView {
    fn from(r: &PredictionResult) -> Self {
        PredictionView {
            transaction_id: r.transaction_id.clone().unwrap_or_else(|| PLACEHOLDER.to_string()),
            chip: risk_chip(r.risk_level.as_deref()),
            probability: format_percent(r.fraud_probability),
            bar_width: probability_bar_width(r.fraud_probability),
            is_fraud: yes_no(r.is_fraud),
            model_version: r
                .model_version
                .clone()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "unknown".to_string()),
            timestamp: r.timestamp.clone().unwrap_or_else(|| PLACEHOLDER.to_string()),
            reasons: TableState::from_rows(r.reasons.clone(), NO_REASONS),
        }
    }
}

// -- Transactions --

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub created_at: String,
    pub transaction_id: String,
    pub client_id: String,
    pub amount: String,
    pub probability: String,
    pub risk_level: String,
    pub is_fraud: &'static str,
}

fn or_dash(value: &Option<String>) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or(PLACEHOLDER)
        .to_string()
}

impl From<&TransactionRecord> for TransactionRow {
    fn from(t: &TransactionRecord) -> Self {
        TransactionRow {
            created_at: t
                .created_at
                .as_deref()
                .map(format_datetime)
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            transaction_id: or_dash(&t.transaction_id),
            client_id: or_dash(&t.client_id),
            amount: format_tenge(Some(t.amount.unwrap_or(0.0))),
            probability: format_percent(t.fraud_probability),
            risk_level: or_dash(&t.risk_level),
            is_fraud: yes_no(t.is_fraud.unwrap_or(false)),
        }
    }
}

pub fn transaction_table(records: &[TransactionRecord]) -> TableState<TransactionRow> {
    TableState::from_rows(records.iter().map(TransactionRow::from).collect(), NO_RECORDS)
}

/// Label/value pairs of the summary line.
pub fn summary_items(s: &TransactionsSummary) -> Vec<(String, String)> {
    let mut items = vec![
        ("Всего транзакций".to_string(), s.total_transactions.to_string()),
        ("Fraud детект".to_string(), s.fraud_detected.to_string()),
        ("Fraud rate".to_string(), format_percent_precise(s.fraud_rate)),
        ("Avg fraud amount".to_string(), format_tenge(s.avg_fraud_amount)),
    ];
    // Known levels first by severity, anything else after.
    let mut levels: Vec<(&String, &u64)> = s.risk_distribution.iter().collect();
    levels.sort_by_key(|(level, _)| RiskLevel::parse(level).map_or(usize::MAX, |l| l as usize));
    for (level, count) in levels {
        items.push((level.clone(), count.to_string()));
    }
    items
}

// -- Analytics --

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardCard {
    pub label: &'static str,
    pub value: String,
    pub sub: Option<String>,
}

pub fn dashboard_cards(d: &DashboardStats) -> Vec<DashboardCard> {
    let start = d.period_start.as_deref().map(format_date);
    let end = d.period_end.as_deref().map(format_date);
    vec![
        DashboardCard {
            label: "Всего транзакций",
            value: d.total_transactions.to_string(),
            sub: Some(format!("за {} дней", d.period_days)),
        },
        DashboardCard {
            label: "Fraud детект",
            value: d.fraud_detected.to_string(),
            sub: Some(format!("rate {}", format_percent_precise(d.fraud_rate))),
        },
        DashboardCard {
            label: "Средняя сумма fraud",
            value: format_tenge(d.avg_fraud_amount),
            sub: None,
        },
        DashboardCard {
            label: "Период",
            value: format!(
                "{} — {}",
                start.as_deref().unwrap_or(PLACEHOLDER),
                end.as_deref().unwrap_or(PLACEHOLDER)
            ),
            sub: None,
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatternItem {
    pub title: String,
    pub description: String,
    pub meta: String,
}

pub fn pattern_list(patterns: &[RiskPattern]) -> TableState<PatternItem> {
    let items = patterns
        .iter()
        .map(|p| PatternItem {
            title: p.name.clone(),
            description: p.description.clone(),
            meta: format!("prevalence {}", format_percent(Some(p.prevalence))),
        })
        .collect();
    TableState::from_rows(items, NO_PATTERNS)
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    pub feature: String,
    pub importance: String,
}

pub fn feature_table(report: &FeatureImportanceReport) -> TableState<FeatureRow> {
    let rows = report
        .features
        .iter()
        .map(|f| FeatureRow {
            feature: f.feature.clone(),
            importance: format!("{:.4}", f.importance),
        })
        .collect();
    TableState::from_rows(rows, NO_FEATURES)
}

// -- Simulation --

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRow {
    pub risk: RiskLevel,
    pub amount: String,
    pub probability: String,
    pub is_fraud: &'static str,
}

impl From<&GeneratedTransaction> for SimulationRow {
    fn from(t: &GeneratedTransaction) -> Self {
        SimulationRow {
            risk: classify_probability(t.fraud_probability),
            amount: format_tenge(t.amount),
            probability: format_percent(Some(t.fraud_probability)),
            is_fraud: yes_no(t.is_fraud),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationView {
    pub total: String,
    pub fraud_count: String,
    pub fraud_rate: String,
    pub generated_at: String,
    pub rows: TableState<SimulationRow>,
}

impl From<&SimulationBatch> for SimulationView {
    fn from(b: &SimulationBatch) -> Self {
        let rows = b
            .transactions
            .iter()
            .take(SIMULATION_PREVIEW_ROWS)
            .map(SimulationRow::from)
            .collect();
        SimulationView {
            total: b.total_generated.to_string(),
            fraud_count: b.fraud_detected.to_string(),
            fraud_rate: format_percent_precise(b.fraud_rate),
            generated_at: b.generated_at.clone().unwrap_or_else(|| PLACEHOLDER.to_string()),
            rows: TableState::from_rows(rows, NO_SIMULATED),
        }
    }
}
