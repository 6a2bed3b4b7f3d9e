use common::model::{
    game::Move,
    round::{evaluate, RoundResult},
};
use rand::RngCore;
use tracing::{debug, info};

use crate::{
    config::OpponentConfig,
    error::HistoryError,
    history::{Aggregate, HistoryTracker},
    strategy::Strategy,
};

// Scoring and match end are left to the caller
pub struct Client {
    strategy: Box<dyn Strategy>,
    history: HistoryTracker,
    rng: Box<dyn RngCore>,
    last_move: Option<Move>,
}

impl Client {
    pub fn new(strategy: Box<dyn Strategy>, rng: Box<dyn RngCore>) -> Self {
        Client {
            strategy,
            history: HistoryTracker::new(),
            rng,
            last_move: None,
        }
    }

    pub fn from_config(config: &OpponentConfig) -> Self {
        info!(
            "Creating {} opponent (seed: {:?})",
            config.strategy, config.seed
        );
        Self::new(config.strategy.build(), config.rng())
    }

    pub fn start_game(&mut self) {
        self.history.start_new_game();
        self.last_move = None;
    }

    fn play(&mut self) -> Move {
        let next_move = self
            .strategy
            .make_move(self.history.aggregate(), self.rng.as_mut());
        self.last_move = Some(next_move);
        next_move
    }

    pub fn play_round(&mut self, human_move: Move) -> Result<RoundResult, HistoryError> {
        if self.history.current_game().is_none() {
            return Err(HistoryError::NoActiveGame);
        }
        let opponent_move = self.play();
        let outcome = evaluate(human_move, opponent_move);
        self.history.record_round(human_move, opponent_move)?;
        debug!("{} vs {}: {:?}", human_move, opponent_move, outcome);
        Ok(RoundResult {
            human_move,
            opponent_move,
            outcome,
        })
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn aggregate(&self) -> Aggregate {
        self.history.aggregate_snapshot()
    }

    pub fn history(&self) -> &HistoryTracker {
        &self.history
    }
}
