use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::ids::Id;
use super::slot::SlotId;

/// A member of the group, with the weekly slots they marked as free.
///
/// The availability set is a plain value: the engine works on whatever
/// snapshot it is handed and never mutates it. `location` is an opaque
/// reference for the surrounding app (the original backend stored a live
/// geo point there); the scheduler itself never interprets it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: Id<Member>,
    pub name: String,
    pub avatar_url: Option<String>,
    pub location: Option<String>,
    pub availability: BTreeSet<SlotId>,
}

impl Member {
    pub fn create(name: String) -> Self {
        Self {
            id: Id::generate(),
            name,
            avatar_url: None,
            location: None,
            availability: BTreeSet::new(),
        }
    }

    /// Flips one slot: marks it free if absent, clears it if present.
    /// Toggling twice restores the original set. Returns whether the slot
    /// is free afterwards.
    pub fn toggle_slot(&mut self, slot: SlotId) -> bool {
        if self.availability.remove(&slot) {
            false
        } else {
            self.availability.insert(slot);
            true
        }
    }

    pub fn is_free(&self, slot: SlotId) -> bool {
        self.availability.contains(&slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_marks_and_clears() {
        let mut m = Member::create("Alice".into());
        let slot = SlotId::new(0, 4).unwrap();

        assert!(m.toggle_slot(slot));
        assert!(m.is_free(slot));
        assert!(!m.toggle_slot(slot));
        assert!(!m.is_free(slot));
    }

    #[test]
    fn double_toggle_restores_the_set() {
        let mut m = Member::create("Alice".into());
        let kept = SlotId::new(2, 10).unwrap();
        m.toggle_slot(kept);
        let before = m.availability.clone();

        let slot = SlotId::new(3, 0).unwrap();
        m.toggle_slot(slot);
        m.toggle_slot(slot);
        assert_eq!(m.availability, before);
    }

    #[test]
    fn availability_holds_no_duplicates() {
        let mut m = Member::create("Alice".into());
        let slot = SlotId::new(1, 1).unwrap();
        m.availability.insert(slot);
        m.availability.insert(slot);
        assert_eq!(m.availability.len(), 1);
    }
}
