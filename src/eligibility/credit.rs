//! Credit score bands and the starting-rate table keyed by them

use serde::{Deserialize, Serialize};
use std::fmt;

/// Credit score band as selected on the eligibility form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreditScoreBand {
    /// 750+
    Excellent,
    /// 700-749
    Good,
    /// 650-699
    Fair,
    /// Any other non-empty selection
    Other(String),
}

impl CreditScoreBand {
    /// Parse a form value. Blank input means no band was selected.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        match value {
            "" => None,
            "750+" => Some(CreditScoreBand::Excellent),
            "700-749" => Some(CreditScoreBand::Good),
            "650-699" => Some(CreditScoreBand::Fair),
            other => Some(CreditScoreBand::Other(other.to_string())),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CreditScoreBand::Excellent => "750+",
            CreditScoreBand::Good => "700-749",
            CreditScoreBand::Fair => "650-699",
            CreditScoreBand::Other(label) => label,
        }
    }
}

impl fmt::Display for CreditScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Starting annual rate (percent) advertised per credit band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateHintTable {
    pub excellent: Option<f64>,
    pub good: Option<f64>,
    pub fair: Option<f64>,
}

impl RateHintTable {
    /// Table with no advertised rates
    pub fn empty() -> Self {
        Self {
            excellent: None,
            good: None,
            fair: None,
        }
    }

    /// Rate hint for a band; unrecognized bands never get one
    pub fn lookup(&self, band: &CreditScoreBand) -> Option<f64> {
        match band {
            CreditScoreBand::Excellent => self.excellent,
            CreditScoreBand::Good => self.good,
            CreditScoreBand::Fair => self.fair,
            CreditScoreBand::Other(_) => None,
        }
    }

    /// Set the rate for a recognized band. Returns false for `Other`.
    pub fn set(&mut self, band: &CreditScoreBand, rate_pct: f64) -> bool {
        let slot = match band {
            CreditScoreBand::Excellent => &mut self.excellent,
            CreditScoreBand::Good => &mut self.good,
            CreditScoreBand::Fair => &mut self.fair,
            CreditScoreBand::Other(_) => return false,
        };
        *slot = Some(rate_pct);
        true
    }
}

impl Default for RateHintTable {
    fn default() -> Self {
        Self {
            excellent: Some(8.5),
            good: Some(9.0),
            fair: Some(9.5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bands() {
        assert_eq!(CreditScoreBand::parse("750+"), Some(CreditScoreBand::Excellent));
        assert_eq!(CreditScoreBand::parse(" 700-749 "), Some(CreditScoreBand::Good));
        assert_eq!(CreditScoreBand::parse("650-699"), Some(CreditScoreBand::Fair));
        assert_eq!(
            CreditScoreBand::parse("below-650"),
            Some(CreditScoreBand::Other("below-650".to_string()))
        );
        assert_eq!(CreditScoreBand::parse("   "), None);
    }

    #[test]
    fn test_default_hints() {
        let table = RateHintTable::default();
        assert_eq!(table.lookup(&CreditScoreBand::Excellent), Some(8.5));
        assert_eq!(table.lookup(&CreditScoreBand::Good), Some(9.0));
        assert_eq!(table.lookup(&CreditScoreBand::Fair), Some(9.5));
        assert_eq!(table.lookup(&CreditScoreBand::Other("600".into())), None);
    }

    #[test]
    fn test_set_ignores_other() {
        let mut table = RateHintTable::empty();
        assert!(table.set(&CreditScoreBand::Good, 9.25));
        assert!(!table.set(&CreditScoreBand::Other("x".into()), 1.0));
        assert_eq!(table.lookup(&CreditScoreBand::Good), Some(9.25));
        assert_eq!(table.lookup(&CreditScoreBand::Excellent), None);
    }

    #[test]
    fn test_label_round_trips_through_parse() {
        for band in [CreditScoreBand::Excellent, CreditScoreBand::Good, CreditScoreBand::Fair] {
            assert_eq!(CreditScoreBand::parse(band.label()), Some(band.clone()));
        }
    }
}
