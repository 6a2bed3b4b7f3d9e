use serde::{Deserialize, Serialize};

use super::game::{Move, Outcome};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub human_move: Move,
    pub opponent_move: Move,
}

impl Round {
    pub fn new(human_move: Move, opponent_move: Move) -> Self {
        Round {
            human_move,
            opponent_move,
        }
    }

    pub fn outcome(&self) -> Outcome {
        evaluate(self.human_move, self.opponent_move)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    pub human_move: Move,
    pub opponent_move: Move,
    pub outcome: Outcome,
}

impl From<Round> for RoundResult {
    fn from(round: Round) -> Self {
        RoundResult {
            human_move: round.human_move,
            opponent_move: round.opponent_move,
            outcome: round.outcome(),
        }
    }
}

pub fn evaluate(human_move: Move, opponent_move: Move) -> Outcome {
    if human_move.beats(&opponent_move) {
        Outcome::HumanWins
    } else if opponent_move.beats(&human_move) {
        Outcome::OpponentWins
    } else {
        Outcome::Tie
    }
}
