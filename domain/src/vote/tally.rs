//! Per-session vote tally

use super::side::Side;
use serde::{Deserialize, Serialize};

/// Two independent counters, one per side.
///
/// # Example
///
/// ```
/// use duel_domain::vote::{Side, VoteTally};
///
/// let mut tally = VoteTally::default();
/// assert_eq!(tally.record(Side::Dog), 1);
/// assert_eq!(tally.record(Side::Dog), 2);
/// assert_eq!(tally.get(Side::Cat), 0);
/// assert_eq!(tally.leader(), Some(Side::Dog));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    pub dog_votes: u64,
    pub cat_votes: u64,
}

impl VoteTally {
    /// Add one vote for `side` and return its new count
    pub fn record(&mut self, side: Side) -> u64 {
        let counter = match side {
            Side::Dog => &mut self.dog_votes,
            Side::Cat => &mut self.cat_votes,
        };
        *counter = counter.saturating_add(1);
        *counter
    }

    pub fn get(&self, side: Side) -> u64 {
        match side {
            Side::Dog => self.dog_votes,
            Side::Cat => self.cat_votes,
        }
    }

    pub fn total(&self) -> u64 {
        self.dog_votes + self.cat_votes
    }

    /// Side with strictly more votes, `None` on a tie
    pub fn leader(&self) -> Option<Side> {
        match self.dog_votes.cmp(&self.cat_votes) {
            std::cmp::Ordering::Greater => Some(Side::Dog),
            std::cmp::Ordering::Less => Some(Side::Cat),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Generate a visual summary (e.g., "dog 2 ●● | ○ 1 cat")
    pub fn summary(&self) -> String {
        format!(
            "dog {} {} | {} {} cat",
            self.dog_votes,
            "●".repeat(self.dog_votes.min(20) as usize),
            "○".repeat(self.cat_votes.min(20) as usize),
            self.cat_votes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_increments_only_one_side() {
        let mut tally = VoteTally::default();
        assert_eq!(tally.record(Side::Dog), 1);
        assert_eq!(tally.dog_votes, 1);
        assert_eq!(tally.cat_votes, 0);
    }

    #[test]
    fn test_repeated_votes_keep_counting() {
        let mut tally = VoteTally::default();
        tally.record(Side::Cat);
        tally.record(Side::Cat);
        assert_eq!(tally.get(Side::Cat), 2);
        assert_eq!(tally.total(), 2);
    }

    #[test]
    fn test_leader() {
        let mut tally = VoteTally::default();
        assert_eq!(tally.leader(), None);
        tally.record(Side::Cat);
        assert_eq!(tally.leader(), Some(Side::Cat));
        tally.record(Side::Dog);
        assert_eq!(tally.leader(), None);
    }

    #[test]
    fn test_summary() {
        let tally = VoteTally {
            dog_votes: 2,
            cat_votes: 1,
        };
        assert_eq!(tally.summary(), "dog 2 ●● | ○ 1 cat");
    }
}
