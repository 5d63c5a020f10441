pub mod schedule_queries;
pub mod stats_queries;

pub use schedule_queries::*;
pub use stats_queries::*;
