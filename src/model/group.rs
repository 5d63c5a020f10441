use serde::{Deserialize, Serialize};

use super::ids::Id;

/// The roster owner. All members, availability, and confirmed meetings hang
/// off one group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: Id<Group>,
    pub name: String,
}

impl Group {
    pub fn create(name: String) -> Self {
        Self {
            id: Id::generate(),
            name,
        }
    }
}
