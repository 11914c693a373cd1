//! Display formatting for calculator results
//!
//! Amounts are shown in Indian rupees with Indian digit grouping
//! (thousands, then lakhs and crores in groups of two).

use crate::assumptions::EligibilityPolicy;
use crate::eligibility::{CreditScoreBand, EligibilityInput, EligibilityResult};
use crate::loan::LoanResult;
use crate::savings::SavingsResult;
use serde::Serialize;

const RUPEE: &str = "₹";

/// Group an unsigned digit string as 12,34,56,789
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Whole-rupee currency string. NaN, infinite or negative amounts show as ₹0.
pub fn format_money(amount: f64) -> String {
    if !amount.is_finite() || amount < 0.0 {
        return format!("{}0", RUPEE);
    }
    // Round half away from zero first; `{:.0}` alone rounds ties to even
    let whole = format!("{:.0}", amount.round());
    format!("{}{}", RUPEE, group_indian(&whole))
}

/// Grouped number with up to three fraction digits
pub fn format_number(value: f64) -> String {
    if !value.is_finite() || value < 0.0 {
        return "0".to_string();
    }

    let fixed = format!("{:.3}", value);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    if frac.is_empty() {
        group_indian(int_part)
    } else {
        format!("{}.{}", group_indian(int_part), frac)
    }
}

/// Chart axis label in lakhs, e.g. ₹25L
pub fn format_lakhs(amount: f64) -> String {
    format!("{}{:.0}L", RUPEE, amount / 100_000.0)
}

/// Rate with one decimal place, or two when needed (8.5, 9.0, 8.25)
fn format_rate(rate_pct: f64) -> String {
    let fixed = format!("{:.2}", rate_pct);
    match fixed.strip_suffix('0') {
        Some(short) => short.to_string(),
        None => fixed,
    }
}

fn rate_sentence(band: &CreditScoreBand, rate_pct: f64) -> Option<String> {
    let rate = format_rate(rate_pct);
    match band {
        CreditScoreBand::Excellent => Some(format!(
            "With your excellent credit score, you qualify for the best interest rates starting from {}%!",
            rate
        )),
        CreditScoreBand::Good => Some(format!(
            "Your good credit score qualifies you for competitive rates starting from {}%.",
            rate
        )),
        CreditScoreBand::Fair => Some(format!(
            "Your credit score qualifies you for reasonable rates starting from {}%. \
             Consider improving your score for even better rates.",
            rate
        )),
        CreditScoreBand::Other(_) => None,
    }
}

/// Sentence shown to an eligible applicant
pub fn eligibility_message(input: &EligibilityInput, result: &EligibilityResult) -> String {
    let mut message = format!(
        "Based on your monthly income of {} and current EMI of {}, you may be eligible for a loan up to {}.",
        format_money(input.monthly_income),
        format_money(input.existing_monthly_emi),
        format_money(result.max_loan),
    );

    if let Some(sentence) = result
        .rate_hint_pct
        .and_then(|rate| rate_sentence(&result.credit_score_band, rate))
    {
        message.push(' ');
        message.push_str(&sentence);
    }

    message
}

/// Sentence shown when existing EMIs leave no headroom
pub fn rejection_message(policy: &EligibilityPolicy) -> String {
    format!(
        "Your current EMI obligations exceed {}% of your income. Please reduce existing EMIs before applying.",
        format_number(policy.emi_ceiling_ratio * 100.0)
    )
}

/// Principal vs interest split for a doughnut chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanBreakdown {
    pub principal: f64,
    pub interest: f64,
}

impl From<&LoanResult> for LoanBreakdown {
    fn from(result: &LoanResult) -> Self {
        Self {
            principal: result.total_principal,
            interest: result.total_interest,
        }
    }
}

impl LoanBreakdown {
    /// Interest as a share of everything paid
    pub fn interest_share(&self) -> f64 {
        let total = self.principal + self.interest;
        if total > 0.0 {
            self.interest / total
        } else {
            0.0
        }
    }
}

/// Total paid on the current loan vs the refinanced loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SavingsComparison {
    pub current_total: f64,
    pub new_total: f64,
}

impl From<&SavingsResult> for SavingsComparison {
    fn from(result: &SavingsResult) -> Self {
        Self {
            current_total: result.current_total_payable,
            new_total: result.new_total_payable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indian_grouping() {
        assert_eq!(group_indian("0"), "0");
        assert_eq!(group_indian("999"), "999");
        assert_eq!(group_indian("1000"), "1,000");
        assert_eq!(group_indian("100000"), "1,00,000");
        assert_eq!(group_indian("1000000"), "10,00,000");
        assert_eq!(group_indian("123456789"), "12,34,56,789");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(8997.26), "₹8,997");
        assert_eq!(format_money(1_000_000.0), "₹10,00,000");
        assert_eq!(format_money(2.5), "₹3");
        assert_eq!(format_money(-5.0), "₹0");
        assert_eq!(format_money(f64::NAN), "₹0");
        assert_eq!(format_money(f64::INFINITY), "₹0");
    }

    #[test]
    fn test_format_money_beyond_u64() {
        assert_eq!(format_money(1e20), "₹10,00,00,00,00,00,00,00,00,000");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(2_500_000.0), "25,00,000");
        assert_eq!(format_number(8.5), "8.5");
        assert_eq!(format_number(1234.5678), "1,234.568");
        assert_eq!(format_number(-1.0), "0");
    }

    #[test]
    fn test_format_lakhs() {
        assert_eq!(format_lakhs(2_500_000.0), "₹25L");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(8.5), "8.5");
        assert_eq!(format_rate(9.0), "9.0");
        assert_eq!(format_rate(8.25), "8.25");
    }

    #[test]
    fn test_eligibility_message_excellent() {
        let input = EligibilityInput::new(100_000.0, 35, Some(CreditScoreBand::Excellent))
            .with_existing_emi(10_000.0);
        let result = EligibilityResult {
            max_emi: 50_000.0,
            available_emi: 40_000.0,
            max_loan: 8_000_000.0,
            credit_score_band: CreditScoreBand::Excellent,
            rate_hint_pct: Some(8.5),
        };

        assert_eq!(
            eligibility_message(&input, &result),
            "Based on your monthly income of ₹1,00,000 and current EMI of ₹10,000, \
             you may be eligible for a loan up to ₹80,00,000. \
             With your excellent credit score, you qualify for the best interest rates starting from 8.5%!"
        );
    }

    #[test]
    fn test_eligibility_message_without_hint() {
        let band = CreditScoreBand::Other("600-649".into());
        let input = EligibilityInput::new(40_000.0, 30, Some(band.clone()));
        let result = EligibilityResult {
            max_emi: 20_000.0,
            available_emi: 20_000.0,
            max_loan: 4_000_000.0,
            credit_score_band: band,
            rate_hint_pct: None,
        };

        let message = eligibility_message(&input, &result);
        assert!(message.ends_with("up to ₹40,00,000."));
    }

    #[test]
    fn test_rejection_message() {
        assert_eq!(
            rejection_message(&EligibilityPolicy::default()),
            "Your current EMI obligations exceed 50% of your income. Please reduce existing EMIs before applying."
        );
    }

    #[test]
    fn test_breakdown_share() {
        let breakdown = LoanBreakdown { principal: 750.0, interest: 250.0 };
        assert_eq!(breakdown.interest_share(), 0.25);
    }
}
