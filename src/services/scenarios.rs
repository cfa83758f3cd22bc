//! Donation scenarios and the IRS documentation rules they fall under.

use crate::models::{AssetType, DocumentType, IrsRequirement, Money};

const CASH_RECEIPT_LIMIT: Money = Money::from_dollars(250);
const SMALL_NONCASH_LIMIT: Money = Money::from_dollars(500);
const SECTION_A_LIMIT: Money = Money::from_dollars(5000);

/// Documentation rule for a donation of `asset_type` worth `amount`.
///
/// Cash splits at $250 (below: receipt; at or above: acknowledgment). The
/// other assets split at $500 and $5,000, both limits inclusive on the
/// lower bracket.
pub fn required_forms(asset_type: AssetType, amount: Money) -> IrsRequirement {
    use DocumentType::*;

    let (rule, forms): (&str, &[DocumentType]) = match asset_type {
        AssetType::Cash if amount < CASH_RECEIPT_LIMIT => (
            "Cash under $250: bank record or written receipt",
            &[Receipt],
        ),
        AssetType::Cash => (
            "Cash of $250 or more: contemporaneous written acknowledgment",
            &[AcknowledgmentLetter, BankStatement],
        ),
        AssetType::Goods if amount <= SMALL_NONCASH_LIMIT => (
            "Non-cash property of $500 or less: receipt",
            &[Receipt],
        ),
        AssetType::Goods if amount <= SECTION_A_LIMIT => (
            "Non-cash property over $500 up to $5,000: Form 8283 Section A",
            &[AcknowledgmentLetter, Form8283SectionA],
        ),
        AssetType::Goods => (
            "Non-cash property over $5,000: Form 8283 Section B and qualified appraisal",
            &[AcknowledgmentLetter, Form8283SectionB, QualifiedAppraisal],
        ),
        AssetType::Vehicle if amount <= SMALL_NONCASH_LIMIT => (
            "Vehicle of $500 or less: receipt",
            &[Receipt],
        ),
        AssetType::Vehicle if amount <= SECTION_A_LIMIT => (
            "Vehicle over $500 up to $5,000: Form 1098-C and Form 8283 Section A",
            &[Form1098C, Form8283SectionA],
        ),
        AssetType::Vehicle => (
            "Vehicle over $5,000: Form 1098-C and Form 8283 Section B",
            &[Form1098C, Form8283SectionB],
        ),
        AssetType::Securities if amount <= SMALL_NONCASH_LIMIT => (
            "Publicly traded securities of $500 or less: broker confirmation",
            &[StockConfirmation],
        ),
        AssetType::Securities if amount <= SECTION_A_LIMIT => (
            "Publicly traded securities over $500 up to $5,000: Form 8283 Section A",
            &[StockConfirmation, Form8283SectionA],
        ),
        AssetType::Securities => (
            "Publicly traded securities over $5,000: acknowledgment and Form 8283 Section A, no appraisal",
            &[StockConfirmation, AcknowledgmentLetter, Form8283SectionA],
        ),
    };

    IrsRequirement {
        rule: rule.to_string(),
        forms: forms.to_vec(),
    }
}

/// A donation to assemble supporting documents for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DonationScenario {
    pub id: &'static str,
    pub asset_type: AssetType,
    pub amount: Money,
    pub description: &'static str,
}

impl DonationScenario {
    const fn new(id: &'static str, asset_type: AssetType, cents: i64, description: &'static str) -> Self {
        Self {
            id,
            asset_type,
            amount: Money::from_cents(cents),
            description,
        }
    }

    pub fn requirement(&self) -> IrsRequirement {
        required_forms(self.asset_type, self.amount)
    }
}

/// The fixed scenario list, one or more per bracket, linked in this order.
pub const SCENARIOS: &[DonationScenario] = &[
    DonationScenario::new("001", AssetType::Cash, 15_000, "Cash gift at weekly collection"),
    DonationScenario::new("002", AssetType::Cash, 24_999, "Online cash donation"),
    DonationScenario::new("003", AssetType::Cash, 25_000, "Year-end cash gift"),
    DonationScenario::new("004", AssetType::Cash, 120_000, "Annual fund pledge payment"),
    DonationScenario::new("005", AssetType::Goods, 7_500, "Bag of used clothing"),
    DonationScenario::new("006", AssetType::Goods, 50_000, "Household goods drop-off"),
    DonationScenario::new("007", AssetType::Goods, 180_000, "Living room furniture set"),
    DonationScenario::new("008", AssetType::Goods, 500_000, "Estate furniture lot"),
    DonationScenario::new("009", AssetType::Goods, 500_100, "Framed oil painting"),
    DonationScenario::new("010", AssetType::Goods, 1_250_000, "Antique clock collection"),
    DonationScenario::new("011", AssetType::Vehicle, 40_000, "Non-running sedan"),
    DonationScenario::new("012", AssetType::Vehicle, 320_000, "Used pickup truck"),
    DonationScenario::new("013", AssetType::Vehicle, 850_000, "Late-model SUV"),
    DonationScenario::new("014", AssetType::Securities, 45_000, "Fractional index fund shares"),
    DonationScenario::new("015", AssetType::Securities, 300_000, "Appreciated blue-chip stock"),
    DonationScenario::new("016", AssetType::Securities, 2_500_000, "Long-held technology shares"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use DocumentType::*;

    fn forms(asset_type: AssetType, cents: i64) -> Vec<DocumentType> {
        required_forms(asset_type, Money::from_cents(cents)).forms
    }

    #[test]
    fn test_cash_threshold() {
        assert_eq!(forms(AssetType::Cash, 24_999), vec![Receipt]);
        assert_eq!(
            forms(AssetType::Cash, 25_000),
            vec![AcknowledgmentLetter, BankStatement]
        );
    }

    #[test]
    fn test_goods_section_a_boundary_is_inclusive() {
        assert_eq!(
            forms(AssetType::Goods, 500_000),
            vec![AcknowledgmentLetter, Form8283SectionA]
        );
        assert_eq!(
            forms(AssetType::Goods, 500_100),
            vec![AcknowledgmentLetter, Form8283SectionB, QualifiedAppraisal]
        );
        assert_eq!(
            forms(AssetType::Goods, 500_001),
            vec![AcknowledgmentLetter, Form8283SectionB, QualifiedAppraisal]
        );
    }

    #[test]
    fn test_small_noncash_threshold() {
        assert_eq!(forms(AssetType::Goods, 50_000), vec![Receipt]);
        assert_eq!(
            forms(AssetType::Goods, 50_001),
            vec![AcknowledgmentLetter, Form8283SectionA]
        );
        assert_eq!(forms(AssetType::Vehicle, 50_000), vec![Receipt]);
        assert_eq!(forms(AssetType::Securities, 50_000), vec![StockConfirmation]);
    }

    #[test]
    fn test_vehicle_and_securities_brackets() {
        assert_eq!(
            forms(AssetType::Vehicle, 320_000),
            vec![Form1098C, Form8283SectionA]
        );
        assert_eq!(
            forms(AssetType::Vehicle, 850_000),
            vec![Form1098C, Form8283SectionB]
        );
        let large = forms(AssetType::Securities, 2_500_000);
        assert!(!large.contains(&QualifiedAppraisal));
        assert!(large.contains(&Form8283SectionA));
    }

    #[test]
    fn test_scenario_ids_are_sequential() {
        for (i, scenario) in SCENARIOS.iter().enumerate() {
            assert_eq!(scenario.id, format!("{:03}", i + 1));
        }
    }

    #[test]
    fn test_scenarios_cover_every_bracket() {
        let rules: HashSet<String> = SCENARIOS.iter().map(|s| s.requirement().rule).collect();
        assert_eq!(rules.len(), 11);
    }

    #[test]
    fn test_scenarios_include_section_a_boundary() {
        let at = SCENARIOS
            .iter()
            .find(|s| s.asset_type == AssetType::Goods && s.amount == Money::from_dollars(5000));
        let above = SCENARIOS
            .iter()
            .find(|s| s.asset_type == AssetType::Goods && s.amount == Money::from_dollars(5001));
        assert!(at.is_some());
        assert!(above.is_some());
    }
}
