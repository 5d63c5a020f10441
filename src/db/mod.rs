pub mod schema;
pub mod group_repo;
pub mod member_repo;
pub mod availability_repo;
pub mod meeting_repo;

use crate::error::{HuddleError, HuddleResult};
use crate::model::Id;

pub(crate) fn parse_id<T>(s: &str) -> HuddleResult<Id<T>> {
    s.parse()
        .map_err(|e| HuddleError::Other(format!("Invalid UUID: {}", e)))
}
