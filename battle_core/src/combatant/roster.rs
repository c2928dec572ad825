//! Roster - ordered team of combatants with the active one at the front

use super::Combatant;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// An ordered team. Index 0 is the active combatant.
///
/// Members only ever leave from the front; nothing is inserted or reordered
/// once a match has started.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    members: VecDeque<Combatant>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// The active combatant, if any remain
    pub fn front(&self) -> Option<&Combatant> {
        self.members.front()
    }

    pub fn front_mut(&mut self) -> Option<&mut Combatant> {
        self.members.front_mut()
    }

    /// Remove the active combatant, promoting the next one
    pub(crate) fn remove_front(&mut self) -> Option<Combatant> {
        self.members.pop_front()
    }

    pub fn get(&self, index: usize) -> Option<&Combatant> {
        self.members.get(index)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combatant> {
        self.members.iter()
    }

    /// Sum of remaining hp across members (negative hp counts as zero)
    pub fn total_hp(&self) -> i64 {
        self.members.iter().map(|c| c.hp.max(0) as i64).sum()
    }
}

impl From<Vec<Combatant>> for Roster {
    fn from(members: Vec<Combatant>) -> Self {
        Roster {
            members: members.into(),
        }
    }
}

impl FromIterator<Combatant> for Roster {
    fn from_iter<I: IntoIterator<Item = Combatant>>(iter: I) -> Self {
        Roster {
            members: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Combatant;
    type IntoIter = std::collections::vec_deque::Iter<'a, Combatant>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::Move;

    fn member(name: &str, hp: i32) -> Combatant {
        Combatant::new(name, hp, 50, std::array::from_fn(|_| Move::struggle()))
    }

    #[test]
    fn test_remove_front_promotes_next() {
        let mut roster: Roster = vec![member("A", 10), member("B", 20), member("C", 30)].into();
        assert_eq!(roster.front().unwrap().name, "A");

        let removed = roster.remove_front().unwrap();
        assert_eq!(removed.name, "A");
        assert_eq!(roster.front().unwrap().name, "B");
        assert_eq!(roster.get(1).unwrap().name, "C");
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_empty_roster() {
        let mut roster = Roster::new();
        assert!(roster.is_empty());
        assert!(roster.front().is_none());
        assert!(roster.remove_front().is_none());
    }

    #[test]
    fn test_total_hp_ignores_negative() {
        let mut roster: Roster = vec![member("A", 10), member("B", 20)].into();
        roster.front_mut().unwrap().take_damage(30);
        assert_eq!(roster.total_hp(), 20);
    }
}
