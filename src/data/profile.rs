//! Company fundamentals with explicit optional-field defaults.

use serde::{Deserialize, Serialize};

/// Fundamentals for a ticker. Every field is optional on the wire; absent
/// values surface through the named-default accessors instead of ad hoc
/// fallbacks at each call site.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyProfile {
    #[serde(default)]
    pub symbol: String,
    pub name: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub summary: Option<String>,
    pub website: Option<String>,
    pub employees: Option<u64>,
    pub market_cap: Option<f64>,
    pub beta: Option<f64>,
    pub eps: Option<f64>,
    pub pe_ratio: Option<f64>,
    pub quick_ratio: Option<f64>,
    pub revenue_per_share: Option<f64>,
    pub profit_margin: Option<f64>,
    pub debt_to_equity: Option<f64>,
    pub return_on_equity: Option<f64>,
}

/// Placeholder for an absent text or metric field.
pub const UNAVAILABLE: &str = "N/A";

/// Placeholder for an absent business summary.
pub const NO_SUMMARY: &str = "No company summary available.";

impl CompanyProfile {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.symbol)
    }

    pub fn sector(&self) -> &str {
        self.sector.as_deref().unwrap_or(UNAVAILABLE)
    }

    pub fn industry(&self) -> &str {
        self.industry.as_deref().unwrap_or(UNAVAILABLE)
    }

    pub fn summary(&self) -> &str {
        self.summary.as_deref().unwrap_or(NO_SUMMARY)
    }

    pub fn website(&self) -> &str {
        self.website.as_deref().unwrap_or(UNAVAILABLE)
    }

    /// Render a numeric metric, substituting the unavailable marker.
    pub fn metric(value: Option<f64>) -> String {
        match value {
            Some(v) => format!("{v}"),
            None => UNAVAILABLE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_use_named_defaults() {
        let profile = CompanyProfile {
            symbol: "TSLA".to_string(),
            ..Default::default()
        };

        assert_eq!(profile.name(), "TSLA");
        assert_eq!(profile.sector(), UNAVAILABLE);
        assert_eq!(profile.summary(), NO_SUMMARY);
        assert_eq!(profile.website(), UNAVAILABLE);
        assert_eq!(CompanyProfile::metric(profile.pe_ratio), UNAVAILABLE);
    }

    #[test]
    fn present_fields_pass_through() {
        let profile = CompanyProfile {
            symbol: "TSLA".to_string(),
            name: Some("Tesla, Inc.".to_string()),
            sector: Some("Consumer Cyclical".to_string()),
            pe_ratio: Some(65.4),
            ..Default::default()
        };

        assert_eq!(profile.name(), "Tesla, Inc.");
        assert_eq!(profile.sector(), "Consumer Cyclical");
        assert_eq!(CompanyProfile::metric(profile.pe_ratio), "65.4");
    }

    #[test]
    fn deserializes_partial_payload() {
        let json = r#"{"symbol": "TSLA", "sector": "Consumer Cyclical"}"#;
        let profile: CompanyProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.symbol, "TSLA");
        assert_eq!(profile.sector(), "Consumer Cyclical");
        assert!(profile.market_cap.is_none());
    }
}
