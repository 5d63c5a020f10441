pub mod suggest;
pub mod confirm;

pub use confirm::{confirm_meeting, StatusOverride, StatusOverrides};
pub use suggest::{find_meeting_times, DEFAULT_SUGGESTION_LIMIT};
