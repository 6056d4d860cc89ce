use std::path::PathBuf;

use serde::de::DeserializeOwned;

use fraudshield::format::RiskLevel;
use fraudshield::models::*;
use fraudshield::view_model::*;

fn fixture<T: DeserializeOwned>(name: &str) -> T {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    let raw = std::fs::read_to_string(&path).expect("Failed to read fixture");
    serde_json::from_str(&raw).unwrap_or_else(|e| panic!("Failed to parse {}: {}", name, e))
}

#[test]
fn test_health_fixture_is_degraded() {
    let health: HealthStatus = fixture("health.json");
    let view = health_view(&Ok(health));
    assert_eq!(view.text, "API: ok, DB: ok, ML: not_loaded");
    assert_eq!(view.dot_class, "status-dot status-dot--degraded");
}

#[test]
fn test_prediction_fixture_renders_all_fields() {
    let result: PredictionResult = fixture("prediction.json");
    let view = PredictionView::from(&result);

    assert_eq!(view.transaction_id, "550e8400-e29b-41d4-a716-446655440000");
    assert_eq!(view.chip.class, "chip chip-critical");
    assert_eq!(view.chip.text, "CRITICAL");
    assert_eq!(view.probability, "94.4%");
    assert_eq!(view.bar_width, "94.4%");
    assert_eq!(view.is_fraud, "Да");
    assert_eq!(view.model_version, "GradientBoosting_v1.0");
    assert_eq!(view.timestamp, "2025-11-28T10:00:00Z");
    match view.reasons {
        TableState::Rows(reasons) => {
            assert_eq!(reasons.len(), 3);
            assert!(reasons[0].starts_with("Крупная сумма"));
        }
        other => panic!("expected reasons, got {:?}", other),
    }
}

#[test]
fn test_transactions_fixture_rows() {
    let records: Vec<TransactionRecord> = fixture("transactions.json");
    let rows = match transaction_table(&records) {
        TableState::Rows(rows) => rows,
        other => panic!("expected rows, got {:?}", other),
    };
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].created_at, "28.11.2025, 10:00:00");
    assert_eq!(rows[0].transaction_id, "tx-001");
    assert_eq!(rows[0].amount, "1\u{a0}500\u{a0}000 ₸");
    assert_eq!(rows[0].probability, "94.4%");
    assert_eq!(rows[0].risk_level, "CRITICAL");
    assert_eq!(rows[0].is_fraud, "Да");

    // Server order is kept and nulls collapse to the dash placeholder.
    assert_eq!(rows[1].transaction_id, "tx-002");
    assert_eq!(rows[1].created_at, "27.11.2025, 08:30:15");
    assert_eq!(rows[1].client_id, "-");
    assert_eq!(rows[1].amount, "2\u{a0}501 ₸");
    assert_eq!(rows[1].probability, "-");
    assert_eq!(rows[1].risk_level, "-");
    assert_eq!(rows[1].is_fraud, "Нет");
}

#[test]
fn test_summary_fixture() {
    let summary: TransactionsSummary = fixture("summary.json");
    let items = summary_items(&summary);
    let values: Vec<_> = items.iter().map(|(_, v)| v.as_str()).collect();
    assert_eq!(
        values,
        vec!["240", "12", "5.00%", "812\u{a0}346 ₸", "180", "30", "18", "12"]
    );
    let labels: Vec<_> = items[4..].iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(labels, vec!["LOW", "MEDIUM", "HIGH", "CRITICAL"]);
}

#[test]
fn test_dashboard_fixture_cards() {
    let stats: DashboardStats = fixture("dashboard.json");
    let cards = dashboard_cards(&stats);
    let labels: Vec<_> = cards.iter().map(|c| c.label).collect();
    assert_eq!(labels, vec!["Всего транзакций", "Fraud детект", "Средняя сумма fraud", "Период"]);
    assert_eq!(cards[0].value, "240");
    assert_eq!(cards[1].sub.as_deref(), Some("rate 5.00%"));
    assert_eq!(cards[2].sub, None);
    assert_eq!(cards[3].value, "21.11.2025 — 28.11.2025");
}

#[test]
fn test_risk_patterns_fixture() {
    let patterns: Vec<RiskPattern> = fixture("risk_patterns.json");
    match pattern_list(&patterns) {
        TableState::Rows(items) => {
            assert_eq!(items[0].title, "Высокие суммы");
            assert_eq!(items[0].meta, "prevalence 80.0%");
            assert_eq!(items[1].meta, "prevalence 70.0%");
        }
        other => panic!("expected patterns, got {:?}", other),
    }
}

#[test]
fn test_feature_importance_fixture() {
    let report: FeatureImportanceReport = fixture("feature_importance.json");
    assert_eq!(report.model.as_deref(), Some("gradient_boosting"));
    match feature_table(&report) {
        TableState::Rows(rows) => {
            assert_eq!(rows[0].feature, "amount");
            assert_eq!(rows[0].importance, "0.3123");
            assert_eq!(rows[1].importance, "0.1000");
        }
        other => panic!("expected features, got {:?}", other),
    }
}

#[test]
fn test_simulation_fixture_reclassifies_on_client() {
    let batch: SimulationBatch = fixture("simulation.json");
    let view = SimulationView::from(&batch);
    assert_eq!(view.total, "4");
    assert_eq!(view.fraud_count, "2");
    assert_eq!(view.fraud_rate, "50.00%");
    assert_eq!(view.generated_at, "2025-11-28T10:00:00.123456");

    let rows = match view.rows {
        TableState::Rows(rows) => rows,
        other => panic!("expected rows, got {:?}", other),
    };
    let risks: Vec<_> = rows.iter().map(|r| r.risk).collect();
    assert_eq!(
        risks,
        vec![RiskLevel::Critical, RiskLevel::High, RiskLevel::Medium, RiskLevel::Low]
    );
    assert_eq!(rows[0].amount, "1\u{a0}500\u{a0}000 ₸");
    assert_eq!(rows[2].is_fraud, "Нет");
}

#[test]
fn test_template_fixture_fills_every_field() {
    let list: TemplateList = fixture("templates.json");
    let template = &list.templates[0];
    assert_eq!(template.scenario.as_deref(), Some("fraud"));

    let form = PredictForm::from_template(template);
    for f in PREDICT_FIELDS.iter() {
        assert!(!form.value(f.key).is_empty(), "{} left blank", f.key);
    }

    let payload = form.to_payload();
    assert_eq!(payload.client_id.as_deref(), Some("12345"));
    assert_eq!(payload.var_interval_30d, Some(160_000_000_000.0));
    assert_eq!(payload.z_score_7d_vs_30d, Some(3.0));
}
