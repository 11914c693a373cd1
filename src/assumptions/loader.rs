//! CSV-based assumption loader
//!
//! Loads eligibility assumptions from CSV files in data/assumptions/

use super::EligibilityPolicy;
use crate::eligibility::{CreditScoreBand, RateHintTable};
use crate::error::AssumptionsError;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

pub const POLICY_FILE: &str = "eligibility_policy.csv";
pub const RATE_HINTS_FILE: &str = "rate_hints.csv";

/// Load the eligibility policy from `eligibility_policy.csv`
pub fn load_eligibility_policy(path: &Path) -> Result<EligibilityPolicy, AssumptionsError> {
    let file = File::open(path.join(POLICY_FILE))?;
    read_eligibility_policy(file)
}

/// Parse `Key,Value` rows. Keys not present keep their default.
pub fn read_eligibility_policy<R: Read>(reader: R) -> Result<EligibilityPolicy, AssumptionsError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut policy = EligibilityPolicy::default();

    for result in reader.records() {
        let record = result?;
        let key = record.get(0).unwrap_or_default();
        let value = record.get(1).unwrap_or_default();

        match key {
            "MinAge" => policy.min_age = parse_value(key, value)?,
            "MaxAge" => policy.max_age = parse_value(key, value)?,
            "EmiCeilingRatio" => policy.emi_ceiling_ratio = parse_value(key, value)?,
            "LoanMultiplier" => policy.loan_multiplier = parse_value(key, value)?,
            other => return Err(AssumptionsError::UnknownKey(other.to_string())),
        }
    }

    policy.check()?;
    Ok(policy)
}

/// Load starting rates per credit band from `rate_hints.csv`
pub fn load_rate_hints(path: &Path) -> Result<RateHintTable, AssumptionsError> {
    let file = File::open(path.join(RATE_HINTS_FILE))?;
    read_rate_hints(file)
}

/// Parse `Band,RatePct` rows. Bands absent from the file get no hint.
pub fn read_rate_hints<R: Read>(reader: R) -> Result<RateHintTable, AssumptionsError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut table = RateHintTable::empty();

    for result in reader.records() {
        let record = result?;
        let label = record.get(0).unwrap_or_default();
        let value = record.get(1).unwrap_or_default();

        let rate: f64 = parse_value(label, value)?;
        if !rate.is_finite() || rate < 0.0 {
            return Err(AssumptionsError::InvalidValue {
                key: label.to_string(),
                value: value.to_string(),
            });
        }

        let recognized = CreditScoreBand::parse(label)
            .map(|band| table.set(&band, rate))
            .unwrap_or(false);
        if !recognized {
            return Err(AssumptionsError::UnknownKey(label.to_string()));
        }
    }

    Ok(table)
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, AssumptionsError> {
    value.parse().map_err(|_| AssumptionsError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_policy_overrides() {
        let csv = "Key,Value\nMinAge,18\nEmiCeilingRatio,0.4\n";
        let policy = read_eligibility_policy(csv.as_bytes()).unwrap();

        assert_eq!(policy.min_age, 18);
        assert_eq!(policy.max_age, 65);
        assert_eq!(policy.emi_ceiling_ratio, 0.4);
        assert_eq!(policy.loan_multiplier, 200.0);
    }

    #[test]
    fn test_read_policy_unknown_key() {
        let csv = "Key,Value\nMaxTenure,30\n";
        let err = read_eligibility_policy(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, AssumptionsError::UnknownKey(ref k) if k == "MaxTenure"));
    }

    #[test]
    fn test_read_policy_bad_number() {
        let csv = "Key,Value\nLoanMultiplier,lots\n";
        let err = read_eligibility_policy(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, AssumptionsError::InvalidValue { .. }));
    }

    #[test]
    fn test_read_policy_inconsistent_ages() {
        let csv = "Key,Value\nMinAge,60\nMaxAge,30\n";
        assert!(read_eligibility_policy(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_read_rate_hints() {
        let csv = "Band,RatePct\n750+, 8.25\n650-699,9.75\n";
        let table = read_rate_hints(csv.as_bytes()).unwrap();

        assert_eq!(table.lookup(&CreditScoreBand::Excellent), Some(8.25));
        assert_eq!(table.lookup(&CreditScoreBand::Good), None);
        assert_eq!(table.lookup(&CreditScoreBand::Fair), Some(9.75));
    }

    #[test]
    fn test_read_rate_hints_unknown_band() {
        let csv = "Band,RatePct\n600-649,11.0\n";
        let err = read_rate_hints(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, AssumptionsError::UnknownKey(_)));
    }

    #[test]
    fn test_read_rate_hints_negative_rate() {
        let csv = "Band,RatePct\n750+,-1\n";
        assert!(read_rate_hints(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_missing_directory() {
        let err = load_rate_hints(Path::new("does/not/exist")).unwrap_err();
        assert!(matches!(err, AssumptionsError::Io(_)));
    }
}
