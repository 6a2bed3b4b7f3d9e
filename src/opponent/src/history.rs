use std::collections::BTreeMap;

use common::model::{game::Move, round::Round};
use tracing::{debug, info};

use crate::error::HistoryError;

// How often each move would have beaten the human
pub type Aggregate = BTreeMap<Move, u32>;

pub type Game = Vec<Round>;

// Aggregate spans all games, start_new_game never clears it
#[derive(Debug, Default)]
pub struct HistoryTracker {
    games: Vec<Game>,
    aggregate: Aggregate,
}

impl HistoryTracker {
    pub fn new() -> Self {
        HistoryTracker {
            games: Vec::new(),
            aggregate: Aggregate::new(),
        }
    }

    pub fn start_new_game(&mut self) {
        self.games.push(Game::new());
        info!("Started game {}", self.games.len());
    }

    pub fn record_round(
        &mut self,
        human_move: Move,
        opponent_move: Move,
    ) -> Result<(), HistoryError> {
        let game = self.games.last_mut().ok_or(HistoryError::NoActiveGame)?;
        game.push(Round::new(human_move, opponent_move));
        for winner in Move::defeating_moves(human_move) {
            *self.aggregate.entry(winner).or_insert(0) += 1;
        }
        debug!(
            "Recorded {} vs {}, aggregate now {:?}",
            human_move, opponent_move, self.aggregate
        );
        Ok(())
    }

    pub fn aggregate_snapshot(&self) -> Aggregate {
        self.aggregate.clone()
    }

    pub fn aggregate(&self) -> &Aggregate {
        &self.aggregate
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn current_game(&self) -> Option<&Game> {
        self.games.last()
    }

    pub fn rounds_played(&self) -> usize {
        self.games.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn recording_without_a_game_fails() {
        let mut tracker = HistoryTracker::new();
        assert_eq!(
            tracker.record_round(Move::Rock, Move::Paper),
            Err(HistoryError::NoActiveGame)
        );
        assert!(tracker.aggregate_snapshot().is_empty());
    }

    #[test]
    fn empty_before_any_round() {
        let mut tracker = HistoryTracker::new();
        tracker.start_new_game();
        assert!(tracker.aggregate_snapshot().is_empty());
        assert_eq!(tracker.current_game(), Some(&Vec::new()));
    }

    #[test]
    fn only_defeating_moves_are_counted() {
        for (human_move, opponent_move) in Move::ALL.into_iter().cartesian_product(Move::ALL) {
            let mut tracker = HistoryTracker::new();
            tracker.start_new_game();
            tracker.record_round(Move::Lizard, Move::Lizard).unwrap();
            let before = tracker.aggregate_snapshot();
            tracker.record_round(human_move, opponent_move).unwrap();
            let after = tracker.aggregate_snapshot();

            let winners = Move::defeating_moves(human_move);
            for m in Move::ALL {
                let old = before.get(&m).copied().unwrap_or(0);
                let new = after.get(&m).copied().unwrap_or(0);
                let expected = if winners.contains(&m) { old + 1 } else { old };
                assert_eq!(new, expected, "count for {m} after {human_move} vs {opponent_move}");
            }
        }
    }

    #[test]
    fn three_rocks_in_a_row() {
        let mut tracker = HistoryTracker::new();
        tracker.start_new_game();
        for opponent_move in [Move::Rock, Move::Spock, Move::Scissors] {
            tracker.record_round(Move::Rock, opponent_move).unwrap();
        }
        let aggregate = tracker.aggregate_snapshot();
        assert_eq!(aggregate.get(&Move::Paper), Some(&3));
        assert_eq!(aggregate.get(&Move::Spock), Some(&3));
        for m in [Move::Rock, Move::Scissors, Move::Lizard] {
            assert_eq!(aggregate.get(&m).copied().unwrap_or(0), 0);
        }
    }

    #[test]
    fn new_game_keeps_the_aggregate() {
        let mut tracker = HistoryTracker::new();
        tracker.start_new_game();
        tracker.record_round(Move::Paper, Move::Rock).unwrap();
        tracker.start_new_game();
        tracker.record_round(Move::Paper, Move::Lizard).unwrap();

        assert_eq!(tracker.games().len(), 2);
        assert_eq!(tracker.games()[0].len(), 1);
        assert_eq!(tracker.current_game().map(Vec::len), Some(1));
        assert_eq!(tracker.rounds_played(), 2);
        assert_eq!(tracker.aggregate().get(&Move::Scissors), Some(&2));
        assert_eq!(tracker.aggregate().get(&Move::Lizard), Some(&2));
    }
}
