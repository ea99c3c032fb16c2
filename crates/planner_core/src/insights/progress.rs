//! Percentage helpers for funds and progress bars.

use crate::model::fund::Fund;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FundProgress {
    pub percent: i64,
    pub complete: bool,
}

/// Aggregate across every fund.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FundSummary {
    pub total_target: f64,
    pub total_current: f64,
    pub percent: i64,
}

/// Clamps a stored progress value into `[0, 100]` for display.
pub fn display_progress(progress: i32) -> i32 {
    progress.clamp(0, 100)
}

/// `round(current / target * 100)`, or `0` when the target is not positive.
pub fn fund_progress(fund: &Fund) -> FundProgress {
    let percent = rounded_percent(fund.current_amount, fund.target_amount);
    FundProgress {
        percent,
        complete: percent >= 100,
    }
}

pub fn overall_fund_progress(funds: &[Fund]) -> FundSummary {
    let total_target: f64 = funds.iter().map(|fund| fund.target_amount).sum();
    let total_current: f64 = funds.iter().map(|fund| fund.current_amount).sum();
    FundSummary {
        total_target,
        total_current,
        percent: rounded_percent(total_current, total_target),
    }
}

fn rounded_percent(current: f64, target: f64) -> i64 {
    if target > 0.0 {
        (current / target * 100.0).round() as i64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::{display_progress, fund_progress, overall_fund_progress};
    use crate::model::fund::{Fund, FundDraft};
    use crate::repo::collection::insert;

    fn funds(pairs: &[(f64, f64)]) -> Vec<Fund> {
        let mut funds = Vec::new();
        for &(target_amount, current_amount) in pairs {
            insert(
                &mut funds,
                FundDraft {
                    name: "fund".to_string(),
                    target_amount,
                    current_amount,
                    ..FundDraft::default()
                },
            );
        }
        funds
    }

    #[test]
    fn fund_progress_rounds_and_flags_completion() {
        let funds = funds(&[(200.0, 150.0), (0.0, 80.0), (300.0, 301.0), (3.0, 2.0)]);

        assert_eq!(fund_progress(&funds[0]).percent, 75);
        assert!(!fund_progress(&funds[0]).complete);
        assert_eq!(fund_progress(&funds[1]).percent, 0);
        assert!(fund_progress(&funds[2]).complete);
        assert_eq!(fund_progress(&funds[3]).percent, 67);
    }

    #[test]
    fn overall_progress_uses_sums() {
        let summary = overall_fund_progress(&funds(&[(100.0, 50.0), (300.0, 50.0)]));
        assert_eq!(summary.total_target, 400.0);
        assert_eq!(summary.total_current, 100.0);
        assert_eq!(summary.percent, 25);

        assert_eq!(overall_fund_progress(&[]).percent, 0);
    }

    #[test]
    fn display_progress_clamps() {
        assert_eq!(display_progress(140), 100);
        assert_eq!(display_progress(-1), 0);
        assert_eq!(display_progress(55), 55);
    }
}
