//! Last/high score tracking
//!
//! Two scalar slots persisted through a `ScoreStore`: the score of the last
//! match, and the best score ever. The last score is always written at match
//! end; the high score only when beaten. Missing stored values read as 0.

use serde::{Deserialize, Serialize};

use crate::persistence::{HIGH_SCORE_KEY, LAST_SCORE_KEY, ScoreStore};

/// The two persisted score slots
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub last_score: u64,
    pub high_score: u64,
}

impl ScoreBoard {
    /// Read both slots from the store; absent values default to 0
    pub fn load(store: &dyn ScoreStore) -> Self {
        Self {
            last_score: store.get(LAST_SCORE_KEY).unwrap_or(0),
            high_score: store.get(HIGH_SCORE_KEY).unwrap_or(0),
        }
    }

    /// Record a finished match. Returns true if this set a new high score.
    pub fn record(&mut self, score: u64) -> bool {
        self.last_score = score;
        if score > self.high_score {
            self.high_score = score;
            log::info!("new high score: {score}");
            true
        } else {
            false
        }
    }

    /// Write both slots back. `last_score` is always written; the stored
    /// high score is only replaced when exceeded, which `record` guarantees.
    pub fn save(&self, store: &mut dyn ScoreStore) {
        store.set(LAST_SCORE_KEY, self.last_score);
        store.set(HIGH_SCORE_KEY, self.high_score);
    }

    /// Whether the end screen should celebrate
    pub fn is_new_high(&self) -> bool {
        self.last_score > 0 && self.last_score >= self.high_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_empty_store_reads_zero() {
        let store = MemoryStore::new();
        let board = ScoreBoard::load(&store);
        assert_eq!(board.last_score, 0);
        assert_eq!(board.high_score, 0);
    }

    #[test]
    fn test_high_score_replaced_only_when_exceeded() {
        let mut store = MemoryStore::new();
        store.set(HIGH_SCORE_KEY, 30);
        store.set(LAST_SCORE_KEY, 50);
        let mut board = ScoreBoard::load(&store);

        // Match ends with 50: beats the stored 30
        assert!(board.record(50));
        board.save(&mut store);
        assert_eq!(store.get(HIGH_SCORE_KEY), Some(50));
        assert_eq!(store.get(LAST_SCORE_KEY), Some(50));

        // A worse match updates only the last score
        let mut board = ScoreBoard::load(&store);
        assert!(!board.record(20));
        board.save(&mut store);
        assert_eq!(store.get(HIGH_SCORE_KEY), Some(50));
        assert_eq!(store.get(LAST_SCORE_KEY), Some(20));
    }

    #[test]
    fn test_equal_score_is_not_a_new_high() {
        let mut board = ScoreBoard {
            last_score: 0,
            high_score: 100,
        };
        assert!(!board.record(100));
        assert_eq!(board.high_score, 100);
        // But the end screen still shows the banner for a tied best
        assert!(board.is_new_high());
    }
}
