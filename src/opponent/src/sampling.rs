use common::model::game::Move;
use rand::{Rng, RngCore};

pub fn uniform(rng: &mut dyn RngCore) -> Move {
    Move::ALL[rng.gen_range(0..Move::ALL.len())]
}

// First entry whose running sum reaches r, so each wins with weight / total
pub fn weighted(entries: &[(Move, u32)], rng: &mut dyn RngCore) -> Move {
    let total: u32 = entries.iter().map(|(_, weight)| weight).sum();
    assert!(total > 0, "weighted sample over an empty pool: {:?}", entries);

    let r = rng.gen_range(1..=total);
    let mut running = 0;
    for &(candidate, weight) in entries {
        running += weight;
        if running >= r {
            return candidate;
        }
    }
    unreachable!("running sum {running} never reached {r}")
}
