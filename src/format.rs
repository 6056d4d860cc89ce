//! Display formatting shared by every panel.
//!
//! Numbers follow the ru-RU conventions the operators read: no-break space
//! as the thousands separator, tenge suffix, comma-free percentages.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Shown wherever a value is absent.
pub const PLACEHOLDER: &str = "-";

const GROUP_SEPARATOR: char = '\u{a0}';
const CURRENCY_SUFFIX: &str = " ₸";

/// Categorical severity attached to a fraud probability band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    /// Case-insensitive; anything outside the four levels is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "LOW" => Some(RiskLevel::Low),
            "MEDIUM" => Some(RiskLevel::Medium),
            "HIGH" => Some(RiskLevel::High),
            "CRITICAL" => Some(RiskLevel::Critical),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }

    pub fn chip_class(self) -> &'static str {
        match self {
            RiskLevel::Low => "chip-low",
            RiskLevel::Medium => "chip-medium",
            RiskLevel::High => "chip-high",
            RiskLevel::Critical => "chip-critical",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CSS classes and text for a risk chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub class: String,
    pub text: String,
}

pub fn risk_chip(level: Option<&str>) -> Chip {
    match level.and_then(RiskLevel::parse) {
        Some(level) => Chip {
            class: format!("chip {}", level.chip_class()),
            text: level.as_str().to_string(),
        },
        None => Chip {
            class: "chip".to_string(),
            text: PLACEHOLDER.to_string(),
        },
    }
}

/// Client-side banding used for generated transactions.
pub fn classify_probability(probability: f64) -> RiskLevel {
    if probability >= 0.9 {
        RiskLevel::Critical
    } else if probability >= 0.7 {
        RiskLevel::High
    } else if probability >= 0.4 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v * 100.0),
        None => PLACEHOLDER.to_string(),
    }
}

/// Two decimals, for aggregate rates.
pub fn format_percent_precise(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Width of the probability bar, always inside `0%..=100%`.
pub fn probability_bar_width(value: Option<f64>) -> String {
    let p = value.filter(|v| !v.is_nan()).unwrap_or(0.0).clamp(0.0, 1.0);
    format!("{:.1}%", p * 100.0)
}

pub fn format_tenge(amount: Option<f64>) -> String {
    match amount {
        Some(a) => format!("{}{}", group_thousands(a.round() as i64), CURRENCY_SUFFIX),
        None => PLACEHOLDER.to_string(),
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Да"
    } else {
        "Нет"
    }
}

/// `dd.mm.yyyy, HH:MM:SS` in the browser's local zone; unparseable input
/// is returned as-is.
pub fn format_datetime(raw: &str) -> String {
    match parse_local(raw) {
        Some(dt) => dt.format("%d.%m.%Y, %H:%M:%S").to_string(),
        None => raw.to_string(),
    }
}

pub fn format_date(raw: &str) -> String {
    match parse_local(raw) {
        Some(dt) => dt.format("%d.%m.%Y").to_string(),
        None => raw.to_string(),
    }
}

// Offset-carrying timestamps are shifted to local time; naive ones are
// already local.
fn parse_local(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_one_decimal() {
        assert_eq!(format_percent(Some(0.153)), "15.3%");
        assert_eq!(format_percent(Some(0.0)), "0.0%");
        assert_eq!(format_percent(Some(1.0)), "100.0%");
        assert_eq!(format_percent(None), "-");
    }

    #[test]
    fn test_percent_precise() {
        assert_eq!(format_percent_precise(0.0512), "5.12%");
        assert_eq!(format_percent_precise(0.0), "0.00%");
    }

    #[test]
    fn test_tenge_grouping() {
        assert_eq!(format_tenge(Some(125000.0)), "125\u{a0}000 ₸");
        assert_eq!(format_tenge(Some(1500000.4)), "1\u{a0}500\u{a0}000 ₸");
        assert_eq!(format_tenge(Some(999.5)), "1\u{a0}000 ₸");
        assert_eq!(format_tenge(Some(42.0)), "42 ₸");
        assert_eq!(format_tenge(Some(0.0)), "0 ₸");
        assert_eq!(format_tenge(Some(-12345.0)), "-12\u{a0}345 ₸");
        assert_eq!(format_tenge(None), "-");
    }

    #[test]
    fn test_risk_chip_case_insensitive() {
        let expected = Chip {
            class: "chip chip-low".to_string(),
            text: "LOW".to_string(),
        };
        for raw in ["low", "LOW", "Low", " lOw "] {
            assert_eq!(risk_chip(Some(raw)), expected, "input {:?}", raw);
        }
    }

    #[test]
    fn test_risk_chip_each_level_has_exactly_one_severity_class() {
        for level in RiskLevel::ALL {
            let chip = risk_chip(Some(&level.as_str().to_lowercase()));
            let severity: Vec<_> = chip
                .class
                .split_whitespace()
                .filter(|c| c.starts_with("chip-"))
                .collect();
            assert_eq!(severity, vec![level.chip_class()]);
            assert_eq!(chip.text, level.as_str());
        }
    }

    #[test]
    fn test_risk_chip_unknown_or_missing_is_neutral() {
        for input in [None, Some(""), Some("SEVERE"), Some("lowish")] {
            let chip = risk_chip(input);
            assert_eq!(chip.class, "chip", "input {:?}", input);
            assert_eq!(chip.text, "-");
        }
    }

    #[test]
    fn test_classify_boundaries_are_inclusive() {
        assert_eq!(classify_probability(1.0), RiskLevel::Critical);
        assert_eq!(classify_probability(0.90), RiskLevel::Critical);
        assert_eq!(classify_probability(0.899999), RiskLevel::High);
        assert_eq!(classify_probability(0.70), RiskLevel::High);
        assert_eq!(classify_probability(0.699999), RiskLevel::Medium);
        assert_eq!(classify_probability(0.40), RiskLevel::Medium);
        assert_eq!(classify_probability(0.399999), RiskLevel::Low);
        assert_eq!(classify_probability(0.0), RiskLevel::Low);
    }

    #[test]
    fn test_bar_width_is_clamped() {
        assert_eq!(probability_bar_width(Some(0.4567)), "45.7%");
        assert_eq!(probability_bar_width(Some(1.7)), "100.0%");
        assert_eq!(probability_bar_width(Some(-0.3)), "0.0%");
        assert_eq!(probability_bar_width(Some(f64::NAN)), "0.0%");
        assert_eq!(probability_bar_width(None), "0.0%");
    }

    #[test]
    fn test_naive_timestamps_are_local() {
        assert_eq!(format_datetime("2025-11-28T10:05:03.123456"), "28.11.2025, 10:05:03");
        assert_eq!(format_datetime("2025-11-28 10:05:03"), "28.11.2025, 10:05:03");
        assert_eq!(format_date("2025-11-21T00:00:00"), "21.11.2025");
        assert_eq!(format_date("2025-11-21"), "21.11.2025");
    }

    #[test]
    fn test_offset_timestamps_convert_to_local() {
        let expected = DateTime::parse_from_rfc3339("2025-11-28T10:00:00Z")
            .unwrap()
            .with_timezone(&Local)
            .format("%d.%m.%Y, %H:%M:%S")
            .to_string();
        assert_eq!(format_datetime("2025-11-28T10:00:00Z"), expected);
    }

    #[test]
    fn test_unparseable_timestamp_is_verbatim() {
        assert_eq!(format_datetime("yesterday"), "yesterday");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(yes_no(true), "Да");
        assert_eq!(yes_no(false), "Нет");
    }
}
