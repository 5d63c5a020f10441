pub mod ids;
pub mod slot;
pub mod group;
pub mod member;
pub mod meeting;

// Re-exports for convenience
pub use ids::Id;
pub use slot::SlotId;
pub use group::Group;
pub use member::Member;
pub use meeting::{AttendeeStatus, ConfirmedMeeting, MeetingSuggestion, MemberStatus};
