use crate::assignment::Assignment;
use crate::completion::{CompletionEvent, CompletionState};
use crate::shared::entity::ID;
use crate::week::WeekdayTag;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Computes which bundle titles are due as reminders for the elapsed part of
/// the current week.
///
/// `events` must already be restricted to the querying user and to the
/// current week (Monday 00:00 up to now); `assignments` is the user's full
/// assignment list. Scheduled days are walked in week order, Monday first,
/// and every ended run covers exactly one scheduled day of its bundle. A day
/// left uncovered puts the bundle on the reminder list, at most once per
/// assignment. Titles come back in assignment order.
pub fn due_reminders(
    today: NaiveDate,
    assignments: &[Assignment],
    events: &[CompletionEvent],
) -> Vec<String> {
    let days_so_far = WeekdayTag::from_date(today).days_so_far();

    // Unconsumed runs per bundle. A run never covers a day of another
    // bundle, so a count per bundle id is all the matching needs.
    let mut unconsumed: HashMap<&ID, usize> = HashMap::new();
    for event in events {
        if event.state == CompletionState::Ended {
            *unconsumed.entry(&event.bundle_id).or_insert(0) += 1;
        }
    }

    let mut due = Vec::new();
    for assignment in assignments {
        if assignment.schedule.is_empty() {
            continue;
        }

        let mut remaining = unconsumed
            .get(&assignment.bundle_id)
            .copied()
            .unwrap_or(0);
        let mut marked = false;

        for day in days_so_far {
            if !assignment.schedule.contains(day) {
                continue;
            }
            if remaining > 0 {
                // Covered by one ended run
                remaining -= 1;
            } else if !marked {
                due.push(assignment.bundle_title.clone());
                marked = true;
            }
        }
    }

    due
}
