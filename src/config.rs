//! Request configuration.
//!
//! The dashboard is served from the same origin as the API, so the base path
//! is empty unless the build sets `FRAUDSHIELD_API_BASE`
//! (e.g. `FRAUDSHIELD_API_BASE=https://api.example.kz trunk build`).

pub const DEFAULT_TRANSACTION_LIMIT: u32 = 50;
pub const DEFAULT_PERIOD_DAYS: u32 = 7;
pub const RISK_PATTERN_LIMIT: u32 = 10;

pub const DEFAULT_SIMULATION_COUNT: u32 = 10;
pub const DEFAULT_FRAUD_RATIO: f64 = 0.15;
/// Generated transactions shown in the preview table.
pub const SIMULATION_PREVIEW_ROWS: usize = 20;

pub fn api_base() -> &'static str {
    option_env!("FRAUDSHIELD_API_BASE").unwrap_or("")
}

/// Absolute or same-origin URL for an API path such as `/health`.
pub fn endpoint(path: &str) -> String {
    let base = api_base().trim_end_matches('/');
    format!("{}{}", base, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_prefixes_base() {
        let url = endpoint("/health");
        assert!(url.ends_with("/health"));
        assert!(url.starts_with(api_base().trim_end_matches('/')));
        assert!(!url.contains("//health"));
    }
}
