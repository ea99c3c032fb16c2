//! Financial and investment totals.

use crate::model::financial::{FinancialItem, FinancialType};
use crate::model::investment::{InvestmentItem, InvestmentStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FinancialTotals {
    pub income: f64,
    pub expense: f64,
    pub saving: f64,
}

impl FinancialTotals {
    pub fn for_type(&self, kind: FinancialType) -> f64 {
        match kind {
            FinancialType::Income => self.income,
            FinancialType::Expense => self.expense,
            FinancialType::Saving => self.saving,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InvestmentTotals {
    /// Sum over `active` positions.
    pub invested: f64,
    /// Sum over `planned` positions.
    pub planned: f64,
    /// Mean return rate over `active` positions; `0.0` when none are active.
    pub average_return: f64,
}

pub fn financial_totals(items: &[FinancialItem]) -> FinancialTotals {
    items
        .iter()
        .fold(FinancialTotals::default(), |mut totals, item| {
            match item.kind {
                FinancialType::Income => totals.income += item.amount,
                FinancialType::Expense => totals.expense += item.amount,
                FinancialType::Saving => totals.saving += item.amount,
            }
            totals
        })
}

/// Entries shown under a type tab; `None` is the "all" tab.
pub fn financial_by_type(
    items: &[FinancialItem],
    filter: Option<FinancialType>,
) -> Vec<&FinancialItem> {
    items
        .iter()
        .filter(|item| filter.map_or(true, |kind| item.kind == kind))
        .collect()
}

pub fn investment_totals(items: &[InvestmentItem]) -> InvestmentTotals {
    let mut totals = InvestmentTotals::default();
    let mut active_count = 0_usize;
    let mut active_return = 0.0;

    for item in items {
        match item.status {
            InvestmentStatus::Active => {
                totals.invested += item.amount;
                active_return += item.return_rate;
                active_count += 1;
            }
            InvestmentStatus::Planned => totals.planned += item.amount,
            InvestmentStatus::Sold => {}
        }
    }

    if active_count > 0 {
        totals.average_return = active_return / active_count as f64;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::{financial_by_type, financial_totals, investment_totals};
    use crate::model::financial::{FinancialDraft, FinancialItem, FinancialType};
    use crate::model::investment::{InvestmentDraft, InvestmentItem, InvestmentStatus};
    use crate::repo::collection::insert;

    fn financial(kind: FinancialType, amount: f64) -> FinancialDraft {
        FinancialDraft {
            title: "entry".to_string(),
            amount,
            kind,
            ..FinancialDraft::default()
        }
    }

    fn investment(status: InvestmentStatus, amount: f64, return_rate: f64) -> InvestmentDraft {
        InvestmentDraft {
            title: "position".to_string(),
            amount,
            return_rate,
            status,
            ..InvestmentDraft::default()
        }
    }

    #[test]
    fn financial_totals_group_by_type() {
        let mut items: Vec<FinancialItem> = Vec::new();
        insert(&mut items, financial(FinancialType::Income, 3000.0));
        insert(&mut items, financial(FinancialType::Income, 500.0));
        insert(&mut items, financial(FinancialType::Expense, 1200.0));
        insert(&mut items, financial(FinancialType::Saving, 250.0));

        let totals = financial_totals(&items);
        assert_eq!(totals.income, 3500.0);
        assert_eq!(totals.expense, 1200.0);
        assert_eq!(totals.for_type(FinancialType::Saving), 250.0);

        assert_eq!(financial_by_type(&items, None).len(), 4);
        assert_eq!(financial_by_type(&items, Some(FinancialType::Income)).len(), 2);
    }

    #[test]
    fn investment_totals_average_active_only() {
        let mut items: Vec<InvestmentItem> = Vec::new();
        insert(&mut items, investment(InvestmentStatus::Active, 1000.0, 8.0));
        insert(&mut items, investment(InvestmentStatus::Active, 500.0, -2.0));
        insert(&mut items, investment(InvestmentStatus::Planned, 700.0, 20.0));
        insert(&mut items, investment(InvestmentStatus::Sold, 900.0, 50.0));

        let totals = investment_totals(&items);
        assert_eq!(totals.invested, 1500.0);
        assert_eq!(totals.planned, 700.0);
        assert_eq!(totals.average_return, 3.0);
    }

    #[test]
    fn investment_average_is_zero_without_active_positions() {
        let mut items: Vec<InvestmentItem> = Vec::new();
        insert(&mut items, investment(InvestmentStatus::Planned, 100.0, 12.0));
        assert_eq!(investment_totals(&items).average_return, 0.0);
    }
}
