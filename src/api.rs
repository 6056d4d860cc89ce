use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::config::{endpoint, RISK_PATTERN_LIMIT};
use crate::error::ApiError;
use crate::models::{
    DashboardStats, FeatureImportanceReport, HealthStatus, PredictRequest, PredictionResult,
    RiskPattern, SimulationBatch, SimulationRequest, TemplateList, TransactionQuery,
    TransactionRecord, TransactionTemplate, TransactionsSummary,
};

// -- Transport --

fn js_error_text(err: JsValue) -> String {
    if let Some(s) = err.as_string() {
        return s;
    }
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    format!("{:?}", err)
}

async fn send(method: &str, path: &str, body: Option<String>) -> Result<Response, ApiError> {
    let url = endpoint(path);
    log::debug!("{} {}", method, url);

    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = body.as_deref() {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| ApiError::Network(js_error_text(e)))?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| ApiError::Network(js_error_text(e)))?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network(js_error_text(e)))?;
    response
        .dyn_into::<Response>()
        .map_err(|_| ApiError::Network("fetch did not return a Response".to_string()))
}

async fn read_text(response: &Response) -> String {
    let promise = match response.text() {
        Ok(p) => p,
        Err(_) => return String::new(),
    };
    match JsFuture::from(promise).await {
        Ok(v) => v.as_string().unwrap_or_default(),
        Err(_) => String::new(),
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let body = read_text(&response).await;
        return Err(ApiError::Http {
            status: response.status(),
            body,
        });
    }
    let promise = response
        .json()
        .map_err(|e| ApiError::Decode(js_error_text(e)))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Decode(js_error_text(e)))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = send("GET", path, None).await?;
    read_json(response).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let body = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let response = send("POST", path, Some(body)).await?;
    read_json(response).await
}

// -- Endpoints --

pub async fn fetch_health() -> Result<HealthStatus, ApiError> {
    get_json("/health").await
}

/// Score a single transaction.
pub async fn predict(payload: &PredictRequest) -> Result<PredictionResult, ApiError> {
    post_json("/api/v1/fraud/predict", payload).await
}

pub async fn list_transactions(query: &TransactionQuery) -> Result<Vec<TransactionRecord>, ApiError> {
    get_json(&format!("/api/v1/transactions/?{}", query.to_query_string())).await
}

/// Look up one stored transaction by id.
pub async fn get_transaction(transaction_id: &str) -> Result<TransactionRecord, ApiError> {
    get_json(&format!(
        "/api/v1/transactions/{}",
        urlencoding::encode(transaction_id.trim())
    ))
    .await
}

pub async fn transactions_summary(days: u32) -> Result<TransactionsSummary, ApiError> {
    get_json(&format!("/api/v1/transactions/stats/summary?days={}", days)).await
}

pub async fn dashboard_stats(days: u32) -> Result<DashboardStats, ApiError> {
    get_json(&format!("/api/v1/analytics/dashboard?days={}", days)).await
}

pub async fn risk_patterns() -> Result<Vec<RiskPattern>, ApiError> {
    get_json(&format!(
        "/api/v1/analytics/risk-patterns?limit={}",
        RISK_PATTERN_LIMIT
    ))
    .await
}

/// Feature importance of the active model.
///
/// A body carrying `error` is returned as [`ApiError::Application`].
pub async fn feature_importance() -> Result<FeatureImportanceReport, ApiError> {
    let report: FeatureImportanceReport = get_json("/api/v1/analytics/feature-importance").await?;
    reject_reported_error(report)
}

fn reject_reported_error(report: FeatureImportanceReport) -> Result<FeatureImportanceReport, ApiError> {
    match report.error {
        Some(err) if !err.is_empty() => Err(ApiError::Application(err)),
        _ => Ok(report),
    }
}

pub async fn generate_simulation(request: &SimulationRequest) -> Result<SimulationBatch, ApiError> {
    post_json("/api/v1/simulation/generate", request).await
}

pub async fn transaction_templates() -> Result<Vec<TransactionTemplate>, ApiError> {
    let list: TemplateList = get_json("/api/v1/simulation/templates").await?;
    Ok(list.templates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reported_error_becomes_application_error() {
        let report: FeatureImportanceReport = serde_json::from_str(
            r#"{"error": "Модель не поддерживает feature_importances_"}"#,
        )
        .unwrap();
        assert_eq!(
            reject_reported_error(report),
            Err(ApiError::Application("Модель не поддерживает feature_importances_".to_string()))
        );
    }

    #[test]
    fn test_report_without_error_passes_through() {
        let report: FeatureImportanceReport = serde_json::from_str(
            r#"{"model": "gradient_boosting", "error": "", "features": [{"feature": "amount", "importance": 0.4}]}"#,
        )
        .unwrap();
        let report = reject_reported_error(report).unwrap();
        assert_eq!(report.features.len(), 1);
        assert_eq!(report.model.as_deref(), Some("gradient_boosting"));
    }
}
