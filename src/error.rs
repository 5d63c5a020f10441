use thiserror::Error;

#[derive(Debug, Error)]
pub enum HuddleError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("{entity_type} already exists: {name}")]
    DuplicateName { entity_type: String, name: String },

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("meeting duration must be between 1 and {max} slots, got {got}")]
    InvalidDuration { got: u32, max: u32 },

    #[error("{member} has no availability marked yet")]
    NoAvailabilityData { member: String },

    #[error("slot (day {day}, slot {slot}) is outside the weekly grid")]
    SlotOutOfRange { day: u8, slot: u8 },

    #[error("not a valid grid time: {value}")]
    InvalidClockTime { value: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type HuddleResult<T> = Result<T, HuddleError>;
