use std::{fmt, str::FromStr};

use common::model::game::Move;
use itertools::Itertools;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::ConfigError, history::Aggregate, sampling};

const ADAPTIVE_CANDIDATES: usize = 3;

pub trait Strategy {
    fn make_move(&self, history: &Aggregate, rng: &mut dyn RngCore) -> Move;
}

// Plays anything
pub struct Uniform {}
impl Strategy for Uniform {
    fn make_move(&self, _: &Aggregate, rng: &mut dyn RngCore) -> Move {
        sampling::uniform(rng)
    }
}

// Mostly rock, never scissors
pub struct Biased {}
impl Biased {
    fn weight(m: Move) -> u32 {
        match m {
            Move::Rock => 5,
            Move::Paper | Move::Lizard | Move::Spock => 1,
            Move::Scissors => 0,
        }
    }
}
impl Strategy for Biased {
    fn make_move(&self, _: &Aggregate, rng: &mut dyn RngCore) -> Move {
        let pool = Move::ALL.map(|m| (m, Self::weight(m)));
        sampling::weighted(&pool, rng)
    }
}

/// Samples among the three highest aggregate counts, in proportion to count.
/// Equal counts keep move enumeration order, so on a tie at the cutoff the
/// later move is kept.
pub struct Adaptive {}
impl Adaptive {
    fn candidates(history: &Aggregate) -> Vec<(Move, u32)> {
        let ranked = history
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(m, count)| (*m, *count))
            .sorted_by_key(|(_, count)| *count)
            .collect_vec();
        let skip = ranked.len().saturating_sub(ADAPTIVE_CANDIDATES);
        ranked.into_iter().skip(skip).collect()
    }
}
impl Strategy for Adaptive {
    fn make_move(&self, history: &Aggregate, rng: &mut dyn RngCore) -> Move {
        let candidates = Self::candidates(history);
        if candidates.is_empty() {
            debug!("No history yet, playing uniformly");
            return sampling::uniform(rng);
        }
        debug!("Sampling from {:?}", candidates);
        sampling::weighted(&candidates, rng)
    }
}

// Deserialized through FromStr so config accepts every name lookup does
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum StrategyKind {
    #[default]
    Uniform,
    Biased,
    Adaptive,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Uniform,
        StrategyKind::Biased,
        StrategyKind::Adaptive,
    ];

    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Uniform => Box::new(Uniform {}),
            StrategyKind::Biased => Box::new(Biased {}),
            StrategyKind::Adaptive => Box::new(Adaptive {}),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::Uniform => "uniform",
            StrategyKind::Biased => "biased",
            StrategyKind::Adaptive => "adaptive",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uniform" | "random" => Ok(StrategyKind::Uniform),
            "biased" | "rocky" => Ok(StrategyKind::Biased),
            "adaptive" | "watson" => Ok(StrategyKind::Adaptive),
            _ => Err(ConfigError::UnknownStrategy(s.to_owned())),
        }
    }
}

impl TryFrom<String> for StrategyKind {
    type Error = ConfigError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

pub fn lookup(name: &str) -> Result<Box<dyn Strategy>, ConfigError> {
    Ok(name.parse::<StrategyKind>()?.build())
}
