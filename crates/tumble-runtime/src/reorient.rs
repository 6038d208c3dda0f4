//! Picks a replacement orientation for an activated block.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tumble_blocks::{BlockFamily, OrientedVariant};
use tumble_geom::Face;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ReorientError {
    #[error("every variant faces {direction}; there is no other orientation to switch to")]
    NoAlternativeOrientation { direction: Face },
}

/// Anything with an observable facing.
pub trait Oriented {
    fn direction(&self) -> Face;
}

impl Oriented for OrientedVariant {
    #[inline]
    fn direction(&self) -> Face {
        OrientedVariant::direction(self)
    }
}

/// Uniform choice among the candidates whose direction differs from the current one.
///
/// The eligible set is counted exactly before drawing, so families where several variants
/// share a direction still get a uniform pick. The policy never touches the world.
pub struct ReorientationPolicy<R> {
    rng: R,
    log_target: &'static str,
}

impl ReorientationPolicy<ChaCha8Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> ReorientationPolicy<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            log_target: "reorient",
        }
    }

    /// Routes this policy's log lines to `target`.
    pub fn with_log_target(mut self, target: &'static str) -> Self {
        self.log_target = target;
        self
    }

    pub fn pick<'a, T: Oriented>(
        &mut self,
        candidates: &'a [T],
        current: Face,
    ) -> Result<&'a T, ReorientError> {
        let eligible = candidates
            .iter()
            .filter(|c| c.direction() != current)
            .count();
        if eligible == 0 {
            return Err(ReorientError::NoAlternativeOrientation { direction: current });
        }
        let k = self.rng.random_range(0..eligible);
        debug!(
            target: self.log_target,
            "current={} eligible={}/{} draw={}",
            current,
            eligible,
            candidates.len(),
            k
        );
        candidates
            .iter()
            .filter(|c| c.direction() != current)
            .nth(k)
            .ok_or(ReorientError::NoAlternativeOrientation { direction: current })
    }

    /// Replacement for `current` drawn from its family's variants.
    pub fn reorient<'a>(
        &mut self,
        family: &'a BlockFamily,
        current: &OrientedVariant,
    ) -> Result<&'a OrientedVariant, ReorientError> {
        self.pick(family.blocks(), current.direction())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Facing(Face);

    impl Oriented for Facing {
        fn direction(&self) -> Face {
            self.0
        }
    }

    #[test]
    fn single_alternative_is_always_chosen() {
        let items = [Facing(Face::Top), Facing(Face::Top), Facing(Face::Left)];
        let mut policy = ReorientationPolicy::seeded(7);
        for _ in 0..32 {
            assert_eq!(policy.pick(&items, Face::Top).unwrap().0, Face::Left);
        }
    }

    #[test]
    fn empty_candidate_list_fails() {
        let items: [Facing; 0] = [];
        let mut policy = ReorientationPolicy::seeded(1);
        assert_eq!(
            policy.pick(&items, Face::Front).err(),
            Some(ReorientError::NoAlternativeOrientation {
                direction: Face::Front
            })
        );
    }

    #[test]
    fn same_seed_same_sequence() {
        let items: Vec<Facing> = Face::ALL.iter().map(|f| Facing(*f)).collect();
        let mut a = ReorientationPolicy::seeded(99).with_log_target("test");
        let mut b = ReorientationPolicy::seeded(99);
        for _ in 0..50 {
            let x = a.pick(&items, Face::Back).unwrap().0;
            let y = b.pick(&items, Face::Back).unwrap().0;
            assert_eq!(x, y);
        }
    }
}
