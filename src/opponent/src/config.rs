use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64;
use serde::Deserialize;

use crate::strategy::StrategyKind;

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct OpponentConfig {
    #[serde(default)]
    pub strategy: StrategyKind,
    // Fixed seed for reproducible play, otherwise seeded from entropy
    #[serde(default)]
    pub seed: Option<u64>,
}

impl OpponentConfig {
    pub fn new(strategy: StrategyKind) -> Self {
        OpponentConfig {
            strategy,
            seed: None,
        }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        OpponentConfig {
            seed: Some(seed),
            ..self
        }
    }

    pub fn rng(&self) -> Box<dyn RngCore> {
        match self.seed {
            Some(seed) => Box::new(Pcg64::seed_from_u64(seed)),
            None => Box::new(Pcg64::from_entropy()),
        }
    }
}
