use std::fmt;

use serde::{Deserialize, Serialize};

// Seen from the human's side
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    HumanWins,
    OpponentWins,
    Tie,
}

impl Outcome {
    pub fn flip(self) -> Outcome {
        match self {
            Outcome::HumanWins => Outcome::OpponentWins,
            Outcome::OpponentWins => Outcome::HumanWins,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
}

impl Move {
    pub const ALL: [Move; 5] = [
        Move::Rock,
        Move::Paper,
        Move::Scissors,
        Move::Lizard,
        Move::Spock,
    ];

    pub fn defeats(self) -> [Move; 2] {
        match self {
            Move::Rock => [Move::Scissors, Move::Lizard],
            Move::Paper => [Move::Rock, Move::Spock],
            Move::Scissors => [Move::Paper, Move::Lizard],
            Move::Lizard => [Move::Spock, Move::Paper],
            Move::Spock => [Move::Scissors, Move::Rock],
        }
    }

    pub fn beats(&self, other: &Move) -> bool {
        self.defeats().contains(other)
    }

    pub fn defeating_moves(target: Move) -> [Move; 2] {
        let mut winners = Move::ALL
            .into_iter()
            .filter(|candidate| candidate.beats(&target));
        match (winners.next(), winners.next()) {
            (Some(first), Some(second)) => [first, second],
            // Every move is beaten by exactly two others
            _ => unreachable!("{target} is not beaten by exactly two moves"),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Lizard => "lizard",
            Move::Spock => "spock",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
