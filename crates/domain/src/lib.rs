mod assignment;
mod completion;
mod reminder;
mod shared;
mod user;
mod week;

pub use assignment::Assignment;
pub use completion::{CompletionEvent, CompletionState};
pub use reminder::due_reminders;
pub use shared::entity::{Entity, ID};
pub use user::User;
pub use week::{week_start, WeekdayTag, WEEK};
