use log::{debug, info};
use rand::Rng;
use tumble_blocks::{Block, FamilyRegistry};
use tumble_geom::Vec3i;
use tumble_world::WorldStore;

use crate::components::{Components, EntityId};
use crate::reorient::{ReorientError, ReorientationPolicy};

/// A world write performed by a system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockChange {
    pub position: Vec3i,
    pub from: Block,
    pub to: Block,
}

/// Swaps an activated block for a differently oriented variant of the same family.
pub struct RotateOnActivationSystem<R> {
    policy: ReorientationPolicy<R>,
}

impl<R: Rng> RotateOnActivationSystem<R> {
    pub fn new(policy: ReorientationPolicy<R>) -> Self {
        Self { policy }
    }

    /// Handles one activation. Entities without both the marker and a block component, or whose
    /// cell no longer holds a known block, are ignored. Writes the world at most once.
    pub fn on_activate<W: WorldStore + ?Sized>(
        &mut self,
        entity: EntityId,
        components: &Components,
        registry: &FamilyRegistry,
        world: &mut W,
    ) -> Result<Option<BlockChange>, ReorientError> {
        if !components.rotates_on_activate(entity) {
            return Ok(None);
        }
        let Some(bc) = components.block(entity) else {
            return Ok(None);
        };
        let position = bc.position;
        let Some(from) = world.block_at(position) else {
            debug!(target: "rotate", "entity {} at {} has no block", entity, position);
            return Ok(None);
        };
        let family = registry.get(from.id);
        let current = registry.variant_for_block(from);
        let (Some(family), Some(current)) = (family, current) else {
            debug!(
                target: "rotate",
                "entity {} at {} holds unknown block {:?}",
                entity,
                position,
                from
            );
            return Ok(None);
        };
        let next = self.policy.reorient(family, current)?;
        let to = next.block();
        info!(target: "rotate", "{} -> {}", current.uri(), next.uri());
        world.set_block_at(position, to);
        Ok(Some(BlockChange { position, from, to }))
    }
}
