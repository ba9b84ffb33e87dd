use crate::shared::entity::ID;
use crate::week::{WeekdayTag, WEEK};

/// Prescribes an exercise bundle to a user, together with the weekdays on
/// which the bundle should surface as a reminder. The bundle title is
/// denormalized onto the assignment so reminder lists can be rendered without
/// a lookup into the bundle store.
///
/// There is at most one assignment per (user, bundle) pair.
#[derive(Debug, Clone)]
pub struct Assignment {
    pub user_id: ID,
    pub bundle_id: ID,
    pub bundle_title: String,
    pub schedule: Vec<WeekdayTag>,
}

impl Assignment {
    /// New assignment with an empty schedule, meaning "no reminders".
    pub fn new(user_id: ID, bundle_id: ID, bundle_title: &str) -> Self {
        Self {
            user_id,
            bundle_id,
            bundle_title: bundle_title.into(),
            schedule: Vec::new(),
        }
    }

    /// Replaces the schedule. Duplicates collapse and days are stored in week
    /// order, so the schedule always reads as a set.
    pub fn set_schedule(&mut self, days: &[WeekdayTag]) {
        self.schedule = WEEK.iter().copied().filter(|d| days.contains(d)).collect();
    }
}
