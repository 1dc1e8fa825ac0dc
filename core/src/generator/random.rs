use rand::{Rng, SeedableRng, rngs::SmallRng, seq::index};

use super::*;

/// Uniform placement over the eligible cells, backed by any [`Rng`].
///
/// Not meant to be cryptographically strong. The same seed always yields the same layout.
#[derive(Clone, Debug)]
pub struct RandomMinePlacer<R = SmallRng> {
    rng: R,
}

impl RandomMinePlacer<SmallRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomMinePlacer<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> MinePlacer for RandomMinePlacer<R> {
    fn place(&mut self, eligible: &[Address], count: CellCount) -> Vec<Address> {
        if count > eligible.len() {
            log::warn!(
                "Requested {} mines but only {} cells are eligible, placing all of them",
                count,
                eligible.len()
            );
            return eligible.to_vec();
        }

        index::sample(&mut self.rng, eligible.len(), count)
            .into_iter()
            .map(|i| eligible[i])
            .collect()
    }
}
