use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::{
    MEALS_PER_BATCH, PEOPLE_PER_WATER_BATCH, RUPEES_PER_BOOK, RUPEES_PER_MEAL_BATCH,
    RUPEES_PER_WATER_BATCH, TAX_BENEFIT_RATE,
};

/// Percentage of the target raised, clamped to `[0, 100]`.
///
/// A zero (or negative) target yields 0 rather than dividing by zero.
pub fn progress_percentage(raised: Decimal, target: Decimal) -> Decimal {
    if target <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let pct = raised
        .checked_div(target)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .unwrap_or(dec!(100));
    pct.clamp(Decimal::ZERO, dec!(100))
}

/// Tax deduction available for a donation. Always floors.
pub fn tax_benefit(amount: Decimal) -> Decimal {
    (amount * TAX_BENEFIT_RATE).floor()
}

/// What a donation buys, in the units shown on the donate page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactEstimate {
    pub meals: u64,
    pub books: u64,
    pub water: u64,
}

impl ImpactEstimate {
    pub fn is_empty(&self) -> bool {
        self.meals == 0 && self.books == 0 && self.water == 0
    }
}

pub fn impact_estimate(amount: Decimal) -> ImpactEstimate {
    if amount <= Decimal::ZERO {
        return ImpactEstimate::default();
    }
    let batches = |per: Decimal| (amount / per).floor().to_u64().unwrap_or(u64::MAX);
    ImpactEstimate {
        meals: batches(RUPEES_PER_MEAL_BATCH).saturating_mul(MEALS_PER_BATCH),
        books: batches(RUPEES_PER_BOOK),
        water: batches(RUPEES_PER_WATER_BATCH).saturating_mul(PEOPLE_PER_WATER_BATCH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percentage() {
        assert_eq!(progress_percentage(dec!(600), dec!(1000)), dec!(60));
        assert_eq!(progress_percentage(dec!(18500), dec!(25000)), dec!(74));
        assert_eq!(progress_percentage(dec!(0), dec!(1000)), dec!(0));
    }

    #[test]
    fn test_progress_percentage_clamps_overfunded() {
        assert_eq!(progress_percentage(dec!(1500), dec!(1000)), dec!(100));
    }

    #[test]
    fn test_progress_percentage_zero_target() {
        assert_eq!(progress_percentage(dec!(0), dec!(0)), dec!(0));
        assert_eq!(progress_percentage(dec!(500), dec!(0)), dec!(0));
    }

    #[test]
    fn test_tax_benefit_floors() {
        assert_eq!(tax_benefit(dec!(5000)), dec!(2500));
        assert_eq!(tax_benefit(dec!(5001)), dec!(2500));
        assert_eq!(tax_benefit(dec!(1)), dec!(0));
        assert_eq!(tax_benefit(dec!(999.99)), dec!(499));
    }

    #[test]
    fn test_impact_estimate() {
        let impact = impact_estimate(dec!(1000));
        assert_eq!(
            impact,
            ImpactEstimate {
                meals: 200,
                books: 5,
                water: 5
            }
        );

        let small = impact_estimate(dec!(199));
        assert_eq!(small.meals, 30);
        assert_eq!(small.books, 0);
        assert_eq!(small.water, 0);

        assert!(impact_estimate(dec!(49)).is_empty());
        assert!(impact_estimate(dec!(-100)).is_empty());
    }
}
