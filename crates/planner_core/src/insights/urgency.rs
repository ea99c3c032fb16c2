//! Deadline urgency for targets.

use crate::model::record::Status;
use crate::model::target::Target;
use chrono::{Local, NaiveDate};

/// Days within which an open target counts as urgent.
pub const URGENT_WITHIN_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetUrgency {
    Completed,
    Overdue,
    /// Due within `URGENT_WITHIN_DAYS` days, today included.
    Urgent,
    OnTrack,
}

/// Today's date in the local time zone.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Whole days from `today` to `deadline`; negative when overdue.
pub fn days_until(deadline: NaiveDate, today: NaiveDate) -> i64 {
    deadline.signed_duration_since(today).num_days()
}

pub fn target_urgency(target: &Target, today: NaiveDate) -> TargetUrgency {
    if target.status == Status::Completed {
        return TargetUrgency::Completed;
    }
    match days_until(target.deadline, today) {
        days if days < 0 => TargetUrgency::Overdue,
        days if days <= URGENT_WITHIN_DAYS => TargetUrgency::Urgent,
        _ => TargetUrgency::OnTrack,
    }
}

#[cfg(test)]
mod tests {
    use super::{days_until, target_urgency, TargetUrgency};
    use crate::model::record::Status;
    use crate::model::target::{Target, TargetDraft};
    use crate::repo::collection::insert;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn target(deadline: NaiveDate, status: Status) -> Target {
        let mut targets = Vec::new();
        insert(
            &mut targets,
            TargetDraft {
                title: "ship it".to_string(),
                description: String::new(),
                status,
                progress: 0,
                deadline,
            },
        );
        targets.remove(0)
    }

    #[test]
    fn days_until_is_signed() {
        let today = date(2026, 3, 10);
        assert_eq!(days_until(date(2026, 3, 17), today), 7);
        assert_eq!(days_until(date(2026, 3, 9), today), -1);
        assert_eq!(days_until(today, today), 0);
    }

    #[test]
    fn urgency_boundaries() {
        let today = date(2026, 3, 10);
        let check = |deadline, status| target_urgency(&target(deadline, status), today);

        assert_eq!(check(date(2026, 3, 10), Status::Pending), TargetUrgency::Urgent);
        assert_eq!(check(date(2026, 3, 17), Status::InProgress), TargetUrgency::Urgent);
        assert_eq!(check(date(2026, 3, 18), Status::Pending), TargetUrgency::OnTrack);
        assert_eq!(check(date(2026, 3, 9), Status::Pending), TargetUrgency::Overdue);
        assert_eq!(check(date(2026, 3, 9), Status::Completed), TargetUrgency::Completed);
        assert_eq!(check(date(2026, 3, 12), Status::Completed), TargetUrgency::Completed);
    }
}
