//! Activation handling: event queue, components, and the rotate-on-activate system.
#![forbid(unsafe_code)]

pub mod components;
pub mod event;
pub mod reorient;
pub mod system;

use std::sync::Arc;

use log::{debug, trace, warn};
use rand::Rng;
use tumble_blocks::{BlockError, FamilyId, FamilyRegistry, OrientedVariant};
use tumble_geom::{Face, Vec3i};
use tumble_world::WorldStore;

pub use components::{BlockComponent, Components, EntityId, RotateOnActivate};
pub use event::{Event, EventEnvelope, EventQueue};
pub use reorient::{Oriented, ReorientError, ReorientationPolicy};
pub use system::{BlockChange, RotateOnActivationSystem};

/// What one tick did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub tick: u64,
    pub changes: Vec<BlockChange>,
    pub failures: Vec<(EntityId, ReorientError)>,
}

/// Single-threaded simulation driver.
pub struct Runtime<W, R> {
    registry: Arc<FamilyRegistry>,
    pub world: W,
    pub components: Components,
    pub queue: EventQueue,
    rotate: RotateOnActivationSystem<R>,
}

impl<W: WorldStore, R: Rng> Runtime<W, R> {
    pub fn new(registry: Arc<FamilyRegistry>, world: W, policy: ReorientationPolicy<R>) -> Self {
        Self {
            registry,
            world,
            components: Components::new(),
            queue: EventQueue::new(),
            rotate: RotateOnActivationSystem::new(policy),
        }
    }

    #[inline]
    pub fn registry(&self) -> &FamilyRegistry {
        &self.registry
    }

    /// Places the family's block for `attachment` and spawns an entity for it.
    /// An entity already bound to `position` is despawned.
    pub fn place(
        &mut self,
        family: FamilyId,
        position: Vec3i,
        attachment: Face,
        direction: Face,
    ) -> Result<EntityId, BlockError> {
        let block = self
            .registry
            .block_for_placement(family, attachment, direction)?;
        if let Some(stale) = self.components.entity_at(position) {
            debug!(target: "events", "replacing entity {} at {}", stale, position);
            self.components.despawn(stale);
        }
        self.world.set_block_at(position, block);
        let entity = self.components.spawn();
        self.components
            .insert_block(entity, BlockComponent { position });
        if self.registry.rotates_on_activate(family) {
            self.components
                .insert_rotate_on_activate(entity, RotateOnActivate);
        }
        Ok(entity)
    }

    /// Queues an activation for the current tick.
    pub fn activate(&mut self, entity: EntityId) -> u64 {
        self.queue.emit_now(Event::Activate { entity })
    }

    pub fn variant_at(&self, position: Vec3i) -> Option<&OrientedVariant> {
        let block = self.world.block_at(position)?;
        self.registry.variant_for_block(block)
    }

    /// Drains every event due this tick, then advances the clock.
    pub fn step(&mut self) -> StepReport {
        let mut report = StepReport {
            tick: self.queue.now,
            ..StepReport::default()
        };
        while let Some(env) = self.queue.pop_ready() {
            match env.kind {
                Event::Tick => {}
                Event::Activate { entity } => {
                    match self.rotate.on_activate(
                        entity,
                        &self.components,
                        &self.registry,
                        &mut self.world,
                    ) {
                        Ok(Some(change)) => {
                            self.queue.emit_now(Event::BlockChanged {
                                position: change.position,
                                from: change.from,
                                to: change.to,
                            });
                            report.changes.push(change);
                        }
                        Ok(None) => {}
                        Err(e) => {
                            warn!(
                                target: "events",
                                "[tick {}] activation of {} failed: {}",
                                env.tick,
                                entity,
                                e
                            );
                            report.failures.push((entity, e));
                        }
                    }
                }
                Event::BlockChanged { position, from, to } => {
                    trace!(
                        target: "events",
                        "[tick {}] BlockChanged {} {:?} -> {:?}",
                        env.tick,
                        position,
                        from,
                        to
                    );
                }
            }
        }
        self.queue.advance_tick();
        report
    }
}
