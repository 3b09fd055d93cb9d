use std::sync::Arc;

use rust_decimal::Decimal;

use super::investments_model::{Investment, InvestmentGain, InvestmentPerformance};
use super::investments_traits::{InvestmentRepositoryTrait, InvestmentServiceTrait};
use crate::errors::Result;
use crate::utils::aggregate_utils::percent_of;

/// Derives per-investment and aggregate gain/loss from a snapshot.
/// A zero invested amount yields a gain percentage of zero.
pub fn calculate_investment_performance(investments: &[Investment]) -> InvestmentPerformance {
    let gains = investments
        .iter()
        .map(|investment| {
            let gain = investment.current_value - investment.invested_amount;
            InvestmentGain {
                investment_id: investment.id.clone(),
                name: investment.name.clone(),
                investment_type: investment.investment_type,
                current_value: investment.current_value,
                gain,
                gain_percent: percent_of(gain, investment.invested_amount),
            }
        })
        .collect();

    let total_value: Decimal = investments.iter().map(|i| i.current_value).sum();
    let total_invested: Decimal = investments.iter().map(|i| i.invested_amount).sum();
    let total_gain = total_value - total_invested;

    InvestmentPerformance {
        investments: gains,
        total_value,
        total_invested,
        total_gain,
        total_gain_percent: percent_of(total_gain, total_invested),
    }
}

/// Service exposing investment performance.
pub struct InvestmentService {
    investment_repository: Arc<dyn InvestmentRepositoryTrait>,
}

impl InvestmentService {
    pub fn new(investment_repository: Arc<dyn InvestmentRepositoryTrait>) -> Self {
        InvestmentService {
            investment_repository,
        }
    }
}

impl InvestmentServiceTrait for InvestmentService {
    fn get_investment_performance(&self) -> Result<InvestmentPerformance> {
        let investments = self.investment_repository.get_investments()?;
        Ok(calculate_investment_performance(&investments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::investments::InvestmentType;
    use chrono::{NaiveDate, NaiveDateTime};
    use rust_decimal_macros::dec;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn investment(id: &str, invested: Decimal, current: Decimal) -> Investment {
        Investment {
            id: id.to_string(),
            user_id: "user1".to_string(),
            name: format!("position {id}"),
            investment_type: InvestmentType::Stocks,
            invested_amount: invested,
            current_value: current,
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }

    #[test]
    fn test_gain_and_percent() {
        let performance =
            calculate_investment_performance(&[investment("i1", dec!(1000), dec!(1250))]);

        assert_eq!(performance.investments[0].gain, dec!(250));
        assert_eq!(performance.investments[0].gain_percent, dec!(25));
    }

    #[test]
    fn test_loss_goes_negative() {
        let performance =
            calculate_investment_performance(&[investment("i1", dec!(2000), dec!(1500))]);

        assert_eq!(performance.investments[0].gain, dec!(-500));
        assert_eq!(performance.investments[0].gain_percent, dec!(-25));
        assert_eq!(performance.total_gain, dec!(-500));
    }

    #[test]
    fn test_zero_invested_amount_yields_zero_percent() {
        let performance =
            calculate_investment_performance(&[investment("i1", Decimal::ZERO, dec!(100))]);

        assert_eq!(performance.investments[0].gain_percent, Decimal::ZERO);
    }

    #[test]
    fn test_aggregate_totals() {
        let performance = calculate_investment_performance(&[
            investment("i1", dec!(1000), dec!(1250)),
            investment("i2", dec!(3000), dec!(2750)),
        ]);

        assert_eq!(performance.total_value, dec!(4000));
        assert_eq!(performance.total_invested, dec!(4000));
        assert_eq!(performance.total_gain, Decimal::ZERO);
        assert_eq!(performance.total_gain_percent, Decimal::ZERO);
    }

    #[test]
    fn test_empty_portfolio() {
        let performance = calculate_investment_performance(&[]);

        assert!(performance.investments.is_empty());
        assert_eq!(performance.total_gain_percent, Decimal::ZERO);
    }
}
