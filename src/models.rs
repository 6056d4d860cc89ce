//! Wire types for the fraud-scoring API plus the form state that produces
//! request payloads.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_FRAUD_RATIO, DEFAULT_PERIOD_DAYS, DEFAULT_SIMULATION_COUNT, DEFAULT_TRANSACTION_LIMIT,
};

// -- Health --

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub components: HealthComponents,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HealthComponents {
    pub api: Option<String>,
    pub database: Option<String>,
    pub ml_models: Option<String>,
}

// -- Prediction --

/// One numeric input of the scoring form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureField {
    /// Payload key.
    pub key: &'static str,
    /// DOM id of the input.
    pub input_id: &'static str,
    pub label: &'static str,
    pub step: &'static str,
}

const fn field(key: &'static str, label: &'static str, step: &'static str) -> FeatureField {
    FeatureField { key, input_id: key, label, step }
}

pub const PREDICT_FIELDS: [FeatureField; 16] = [
    field("amount", "Сумма транзакции, ₸", "1"),
    field("os_ver_count_30d", "Версий ОС за 30 дней", "1"),
    field("phone_model_count_30d", "Моделей телефона за 30 дней", "1"),
    field("logins_7d", "Логинов за 7 дней", "1"),
    field("logins_30d", "Логинов за 30 дней", "1"),
    field("logins_per_day_7", "Логинов в день (7д)", "any"),
    field("logins_per_day_30", "Логинов в день (30д)", "any"),
    field("rel_change_7_vs_30", "Изменение частоты 7д/30д", "any"),
    field("share_7_of_30", "Доля логинов 7д от 30д", "any"),
    field("mean_interval_30d", "Средний интервал, сек", "any"),
    field("std_interval_30d", "Ст. отклонение интервалов", "any"),
    field("var_interval_30d", "Дисперсия интервалов", "any"),
    field("ewm_interval_7d", "EWM интервала (7д)", "any"),
    field("burstiness", "Burstiness", "any"),
    field("fano_factor", "Fano-фактор", "any"),
    FeatureField {
        key: "z_score_7d_vs_30d",
        input_id: "z_score_7_vs_30d",
        label: "Z-скор 7д vs 30д",
        step: "any",
    },
];

/// Raw text of the scoring form, as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictForm {
    values: HashMap<&'static str, String>,
    pub client_id: String,
}

impl PredictForm {
    pub fn value(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, key: &'static str, value: String) {
        self.values.insert(key, value);
    }

    /// Blank or non-numeric text is absent, never zero.
    fn number(&self, key: &str) -> Option<f64> {
        let raw = self.value(key).trim();
        if raw.is_empty() {
            return None;
        }
        raw.parse::<f64>().ok().filter(|v| v.is_finite())
    }

    pub fn to_payload(&self) -> PredictRequest {
        let client_id = self.client_id.trim();
        PredictRequest {
            amount: self.number("amount"),
            client_id: (!client_id.is_empty()).then(|| client_id.to_string()),
            os_ver_count_30d: self.number("os_ver_count_30d"),
            phone_model_count_30d: self.number("phone_model_count_30d"),
            logins_7d: self.number("logins_7d"),
            logins_30d: self.number("logins_30d"),
            logins_per_day_7: self.number("logins_per_day_7"),
            logins_per_day_30: self.number("logins_per_day_30"),
            rel_change_7_vs_30: self.number("rel_change_7_vs_30"),
            share_7_of_30: self.number("share_7_of_30"),
            mean_interval_30d: self.number("mean_interval_30d"),
            std_interval_30d: self.number("std_interval_30d"),
            var_interval_30d: self.number("var_interval_30d"),
            ewm_interval_7d: self.number("ewm_interval_7d"),
            burstiness: self.number("burstiness"),
            fano_factor: self.number("fano_factor"),
            z_score_7d_vs_30d: self.number("z_score_7d_vs_30d"),
        }
    }

    /// Form pre-filled from a template's sample data. Keys the template
    /// does not carry stay blank.
    pub fn from_template(template: &TransactionTemplate) -> Self {
        let mut form = PredictForm::default();
        for f in PREDICT_FIELDS.iter() {
            if let Some(v) = template.data.get(f.key).and_then(serde_json::Value::as_f64) {
                form.set(f.key, v.to_string());
            }
        }
        form.client_id = match template.data.get("client_id") {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };
        form
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictRequest {
    pub amount: Option<f64>,
    pub client_id: Option<String>,
    pub os_ver_count_30d: Option<f64>,
    pub phone_model_count_30d: Option<f64>,
    pub logins_7d: Option<f64>,
    pub logins_30d: Option<f64>,
    pub logins_per_day_7: Option<f64>,
    pub logins_per_day_30: Option<f64>,
    pub rel_change_7_vs_30: Option<f64>,
    pub share_7_of_30: Option<f64>,
    pub mean_interval_30d: Option<f64>,
    pub std_interval_30d: Option<f64>,
    pub var_interval_30d: Option<f64>,
    pub ewm_interval_7d: Option<f64>,
    pub burstiness: Option<f64>,
    pub fano_factor: Option<f64>,
    pub z_score_7d_vs_30d: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionResult {
    pub transaction_id: Option<String>,
    pub risk_level: Option<String>,
    pub fraud_probability: Option<f64>,
    #[serde(default)]
    pub is_fraud: bool,
    pub model_version: Option<String>,
    pub timestamp: Option<String>,
    #[serde(default)]
    pub reasons: Vec<String>,
}

// -- Transactions --

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionRecord {
    pub created_at: Option<String>,
    pub transaction_id: Option<String>,
    pub client_id: Option<String>,
    pub amount: Option<f64>,
    pub fraud_probability: Option<f64>,
    pub risk_level: Option<String>,
    pub is_fraud: Option<bool>,
}

/// Filters of the transaction list.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionQuery {
    pub limit: u32,
    pub risk_level: Option<String>,
    pub is_fraud: Option<bool>,
}

impl TransactionQuery {
    /// Builds the query from the raw filter controls. An empty select means
    /// "any"; any fraud value other than `"true"` filters for non-fraud.
    pub fn from_filters(limit: &str, risk_level: &str, is_fraud: &str) -> Self {
        let risk_level = risk_level.trim();
        let is_fraud = is_fraud.trim();
        TransactionQuery {
            limit: parse_or(limit, DEFAULT_TRANSACTION_LIMIT),
            risk_level: (!risk_level.is_empty()).then(|| risk_level.to_string()),
            is_fraud: (!is_fraud.is_empty()).then(|| is_fraud == "true"),
        }
    }

    pub fn to_query_string(&self) -> String {
        let mut query = format!("skip=0&limit={}", self.limit);
        if let Some(risk) = &self.risk_level {
            query.push_str("&risk_level=");
            query.push_str(&urlencoding::encode(risk));
        }
        if let Some(flag) = self.is_fraud {
            query.push_str(if flag { "&is_fraud=true" } else { "&is_fraud=false" });
        }
        query
    }
}

impl Default for TransactionQuery {
    fn default() -> Self {
        TransactionQuery {
            limit: DEFAULT_TRANSACTION_LIMIT,
            risk_level: None,
            is_fraud: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionsSummary {
    #[serde(default)]
    pub total_transactions: u64,
    #[serde(default)]
    pub fraud_detected: u64,
    #[serde(default)]
    pub fraud_rate: f64,
    pub avg_fraud_amount: Option<f64>,
    #[serde(default)]
    pub risk_distribution: BTreeMap<String, u64>,
}

/// Day-window filters fall back to a week.
pub fn parse_days(raw: &str) -> u32 {
    parse_or(raw, DEFAULT_PERIOD_DAYS)
}

fn parse_or<T: std::str::FromStr>(raw: &str, default: T) -> T {
    let raw = raw.trim();
    if raw.is_empty() {
        return default;
    }
    raw.parse().unwrap_or(default)
}

// -- Analytics --

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_transactions: u64,
    #[serde(default)]
    pub fraud_detected: u64,
    #[serde(default)]
    pub fraud_rate: f64,
    pub avg_fraud_amount: Option<f64>,
    pub period_start: Option<String>,
    pub period_end: Option<String>,
    #[serde(default)]
    pub period_days: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RiskPattern {
    #[serde(rename = "pattern")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prevalence: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeatureImportance {
    pub feature: String,
    pub importance: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeatureImportanceReport {
    pub error: Option<String>,
    pub model: Option<String>,
    #[serde(default)]
    pub features: Vec<FeatureImportance>,
}

// -- Simulation --

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Normal,
    Suspicious,
    Fraud,
    #[default]
    Mixed,
}

impl TransactionType {
    pub const ALL: [TransactionType; 4] = [
        TransactionType::Mixed,
        TransactionType::Normal,
        TransactionType::Suspicious,
        TransactionType::Fraud,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Normal => "normal",
            TransactionType::Suspicious => "suspicious",
            TransactionType::Fraud => "fraud",
            TransactionType::Mixed => "mixed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TransactionType::Normal => "Обычные",
            TransactionType::Suspicious => "Подозрительные",
            TransactionType::Fraud => "Мошеннические",
            TransactionType::Mixed => "Смешанные",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        TransactionType::ALL
            .into_iter()
            .find(|t| t.as_str() == raw.trim())
    }
}

/// Raw text of the simulation controls.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationForm {
    pub count: String,
    pub transaction_type: String,
    pub fraud_ratio: String,
}

impl Default for SimulationForm {
    fn default() -> Self {
        SimulationForm {
            count: DEFAULT_SIMULATION_COUNT.to_string(),
            transaction_type: TransactionType::Mixed.as_str().to_string(),
            fraud_ratio: DEFAULT_FRAUD_RATIO.to_string(),
        }
    }
}

impl SimulationForm {
    /// Blank or unparseable controls fall back to the defaults.
    pub fn to_request(&self) -> SimulationRequest {
        SimulationRequest {
            count: parse_or(&self.count, DEFAULT_SIMULATION_COUNT),
            transaction_type: TransactionType::parse(&self.transaction_type).unwrap_or_default(),
            fraud_ratio: parse_or(&self.fraud_ratio, DEFAULT_FRAUD_RATIO),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationRequest {
    pub count: u32,
    pub transaction_type: TransactionType,
    pub fraud_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratedTransaction {
    pub amount: Option<f64>,
    #[serde(default)]
    pub fraud_probability: f64,
    #[serde(default)]
    pub is_fraud: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SimulationBatch {
    #[serde(default)]
    pub total_generated: u64,
    #[serde(default)]
    pub fraud_detected: u64,
    #[serde(default)]
    pub fraud_rate: f64,
    pub generated_at: Option<String>,
    #[serde(default)]
    pub transactions: Vec<GeneratedTransaction>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionTemplate {
    pub name: String,
    #[serde(rename = "type")]
    pub scenario: Option<String>,
    #[serde(default)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemplateList {
    #[serde(default)]
    pub templates: Vec<TransactionTemplate>,
}
