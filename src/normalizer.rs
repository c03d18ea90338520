use crate::model::OwnedGame;
use std::collections::HashSet;

/// Joins storefront titles against the owned library and counts how many
/// owned games have been credited so far.
pub struct MatchTracker<'a> {
    owned: &'a [OwnedGame],
    credited: HashSet<usize>,
}

impl<'a> MatchTracker<'a> {
    pub fn new(owned: &'a [OwnedGame]) -> Self {
        Self {
            owned,
            credited: HashSet::new(),
        }
    }

    /// Exact, case-sensitive lookup. The first owned game with this name
    /// supplies the result; every owned entry carrying the name is credited
    /// once, so the counter never exceeds the library size.
    pub fn credit(&mut self, name: &str) -> Option<&'a OwnedGame> {
        let owned = self.owned;
        let first = owned.iter().find(|g| g.name == name)?;
        for (idx, game) in owned.iter().enumerate() {
            if game.name == name {
                self.credited.insert(idx);
            }
        }
        Some(first)
    }

    pub fn matched(&self) -> usize {
        self.credited.len()
    }

    pub fn total(&self) -> usize {
        self.owned.len()
    }

    pub fn is_complete(&self) -> bool {
        self.matched() == self.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(name: &str, app_id: &str, hours: &str) -> OwnedGame {
        OwnedGame {
            name: name.into(),
            app_id: app_id.into(),
            hours_on_record: hours.into(),
        }
    }

    #[test]
    fn exact_match_only() {
        let owned = vec![game("Alpha", "1", "5"), game("Beta", "2", "N/A")];
        let mut tracker = MatchTracker::new(&owned);

        assert!(tracker.credit("alpha").is_none());
        assert!(tracker.credit("Alpha ").is_none());
        assert_eq!(tracker.matched(), 0);

        assert_eq!(tracker.credit("Alpha").unwrap().hours_on_record, "5");
        assert_eq!(tracker.matched(), 1);
        assert!(!tracker.is_complete());

        assert_eq!(tracker.credit("Beta").unwrap().hours_on_record, "N/A");
        assert!(tracker.is_complete());
    }

    #[test]
    fn repeat_listing_is_not_counted_twice() {
        let owned = vec![game("Alpha", "1", "5"), game("Beta", "2", "1")];
        let mut tracker = MatchTracker::new(&owned);
        tracker.credit("Alpha");
        tracker.credit("Alpha");
        assert_eq!(tracker.matched(), 1);
        assert!(!tracker.is_complete());
    }

    #[test]
    fn duplicate_owned_names_use_first_and_credit_all() {
        let owned = vec![game("Alpha", "1", "5"), game("Alpha", "9", "7")];
        let mut tracker = MatchTracker::new(&owned);
        assert_eq!(tracker.credit("Alpha").unwrap().app_id, "1");
        assert_eq!(tracker.matched(), 2);
        assert!(tracker.is_complete());
    }

    #[test]
    fn empty_library_is_complete() {
        let tracker = MatchTracker::new(&[]);
        assert!(tracker.is_complete());
        assert_eq!(tracker.total(), 0);
    }
}
