use std::sync::Arc;

use rust_decimal::Decimal;

use super::debts_model::{Debt, DebtPayoff, DebtProgress};
use super::debts_traits::{DebtRepositoryTrait, DebtServiceTrait};
use crate::errors::Result;
use crate::utils::aggregate_utils::percent_of;

/// Derives per-debt and aggregate payoff progress from a debt snapshot.
///
/// A zero aggregate original amount yields an overall percentage of zero.
/// Per-debt percentages are not clamped: a balance above the original
/// amount produces a negative payoff percentage.
pub fn calculate_debt_progress(debts: &[Debt]) -> DebtProgress {
    let payoffs = debts
        .iter()
        .map(|debt| DebtPayoff {
            debt_id: debt.id.clone(),
            name: debt.name.clone(),
            debt_type: debt.debt_type,
            current_balance: debt.current_balance,
            payoff_percent: percent_of(
                debt.original_amount - debt.current_balance,
                debt.original_amount,
            ),
        })
        .collect();

    let total_current_balance: Decimal = debts.iter().map(|debt| debt.current_balance).sum();
    let total_original_amount: Decimal = debts.iter().map(|debt| debt.original_amount).sum();
    let total_paid = total_original_amount - total_current_balance;

    DebtProgress {
        debts: payoffs,
        total_current_balance,
        total_original_amount,
        total_paid,
        overall_percent: percent_of(total_paid, total_original_amount),
    }
}

/// Service exposing debt payoff progress.
pub struct DebtService {
    debt_repository: Arc<dyn DebtRepositoryTrait>,
}

impl DebtService {
    pub fn new(debt_repository: Arc<dyn DebtRepositoryTrait>) -> Self {
        DebtService { debt_repository }
    }
}

impl DebtServiceTrait for DebtService {
    fn get_debt_progress(&self) -> Result<DebtProgress> {
        let debts = self.debt_repository.get_debts()?;
        Ok(calculate_debt_progress(&debts))
    }
}
