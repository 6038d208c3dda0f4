use hashbrown::{HashMap, HashSet};
use tumble_geom::Vec3i;

pub type EntityId = u64;

/// Links an entity to the world cell holding its block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockComponent {
    pub position: Vec3i,
}

/// Marker: rotate this block to a new orientation when activated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RotateOnActivate;

/// Per-entity component storage.
#[derive(Debug)]
pub struct Components {
    next_id: EntityId,
    blocks: HashMap<EntityId, BlockComponent>,
    rotate_on_activate: HashSet<EntityId>,
}

impl Default for Components {
    fn default() -> Self {
        Self {
            next_id: 1,
            blocks: HashMap::new(),
            rotate_on_activate: HashSet::new(),
        }
    }
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1).max(1);
        id
    }

    pub fn despawn(&mut self, entity: EntityId) {
        self.blocks.remove(&entity);
        self.rotate_on_activate.remove(&entity);
    }

    pub fn insert_block(&mut self, entity: EntityId, block: BlockComponent) {
        self.blocks.insert(entity, block);
    }

    pub fn insert_rotate_on_activate(&mut self, entity: EntityId, _marker: RotateOnActivate) {
        self.rotate_on_activate.insert(entity);
    }

    #[inline]
    pub fn block(&self, entity: EntityId) -> Option<&BlockComponent> {
        self.blocks.get(&entity)
    }

    #[inline]
    pub fn rotates_on_activate(&self, entity: EntityId) -> bool {
        self.rotate_on_activate.contains(&entity)
    }

    pub fn entity_at(&self, position: Vec3i) -> Option<EntityId> {
        self.blocks
            .iter()
            .find(|(_, b)| b.position == position)
            .map(|(e, _)| *e)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
