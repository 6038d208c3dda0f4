//! Dice families: one base shape materialized in all 24 orientations.

use log::debug;
use tumble_geom::{Face, Rotation};

use crate::catalog::{OrientationCatalog, OrientationEntry};
use crate::error::BlockError;
use crate::family::FamilyDef;
use crate::shape::{ShapeHandle, ShapeMode, ShapeTransformer};
use crate::types::{Block, BlockState, BlockUri, FamilyId};

/// One built variant. Owned by its family; refers back to it by id only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrientedVariant {
    entry: OrientationEntry,
    family: FamilyId,
    index: BlockState,
    direction: Face,
    shape: ShapeHandle,
}

impl OrientedVariant {
    pub(crate) fn new(
        entry: OrientationEntry,
        family: FamilyId,
        index: BlockState,
        shape: ShapeHandle,
    ) -> Self {
        Self {
            entry,
            family,
            index,
            direction: entry.direction(),
            shape,
        }
    }

    #[inline]
    pub fn entry(&self) -> &OrientationEntry {
        &self.entry
    }

    #[inline]
    pub fn top(&self) -> Face {
        self.entry.top
    }

    #[inline]
    pub fn front(&self) -> Face {
        self.entry.front
    }

    #[inline]
    pub fn rotation(&self) -> Rotation {
        self.entry.rotation
    }

    #[inline]
    pub fn family(&self) -> FamilyId {
        self.family
    }

    #[inline]
    pub fn index(&self) -> BlockState {
        self.index
    }

    /// World facing of this variant's FRONT.
    #[inline]
    pub fn direction(&self) -> Face {
        self.direction
    }

    #[inline]
    pub fn uri(&self) -> &BlockUri {
        &self.shape.uri
    }

    #[inline]
    pub fn shape(&self) -> &ShapeHandle {
        &self.shape
    }

    /// Compact form for world storage.
    #[inline]
    pub fn block(&self) -> Block {
        Block::new(self.family, self.index)
    }
}

#[derive(Clone, Debug)]
pub struct OrientedBlockSet {
    uri: BlockUri,
    id: FamilyId,
    variants: Vec<OrientedVariant>,
    // Face index -> variant index, first variant seen with that face on top.
    placement: [Option<usize>; 6],
    archetype: usize,
}

impl OrientedBlockSet {
    pub fn build(
        def: &FamilyDef,
        id: FamilyId,
        transformer: &dyn ShapeTransformer,
    ) -> Result<Self, BlockError> {
        Self::build_with_catalog(def, id, OrientationCatalog::standard(), transformer)
    }

    /// Builds one variant per catalog entry, in table order. The catalog must contain TOP/FRONT.
    pub fn build_with_catalog(
        def: &FamilyDef,
        id: FamilyId,
        catalog: OrientationCatalog,
        transformer: &dyn ShapeTransformer,
    ) -> Result<Self, BlockError> {
        if def.shape.mode == ShapeMode::Freeform {
            return Err(BlockError::UnsupportedShapeMode {
                family: def.uri.to_string(),
            });
        }
        let family_uri = def.uri.family_uri();
        let mut variants = Vec::with_capacity(catalog.len());
        let mut placement: [Option<usize>; 6] = [None; 6];
        let mut archetype = None;
        for entry in catalog.entries() {
            let uri = family_uri.with_identifier(entry.identifier());
            let shape = transformer.transform(&def.shape, entry.rotation, &uri, id)?;
            let index = variants.len();
            variants.push(OrientedVariant::new(*entry, id, index as BlockState, shape));
            placement[entry.top.index()].get_or_insert(index);
            if entry.top == Face::Top && entry.front == Face::Front {
                archetype = Some(index);
            }
        }
        let archetype = archetype.ok_or(BlockError::UnknownOrientation {
            top: Face::Top,
            front: Face::Front,
        })?;
        debug!(
            target: "blocks",
            "built dice family {} with {} variants",
            family_uri,
            variants.len()
        );
        Ok(Self {
            uri: family_uri,
            id,
            variants,
            placement,
            archetype,
        })
    }

    #[inline]
    pub fn uri(&self) -> &BlockUri {
        &self.uri
    }

    #[inline]
    pub fn id(&self) -> FamilyId {
        self.id
    }

    /// Representative variant for a block attached to the world by `face`.
    pub fn variant_for_attachment(&self, face: Face) -> Result<&OrientedVariant, BlockError> {
        self.placement[face.index()]
            .map(|i| &self.variants[i])
            .ok_or_else(|| BlockError::NoPlacementForFace {
                face: face.name().to_string(),
            })
    }

    /// Same as [`Self::variant_for_attachment`] for face names from untrusted input.
    pub fn variant_for_attachment_name(&self, face: &str) -> Result<&OrientedVariant, BlockError> {
        let parsed: Face = face.parse().map_err(|_| BlockError::NoPlacementForFace {
            face: face.to_string(),
        })?;
        self.variant_for_attachment(parsed)
    }

    #[inline]
    pub fn archetype(&self) -> &OrientedVariant {
        &self.variants[self.archetype]
    }

    /// Looks up `TOPFACE-FRONTFACE`. Anything that does not name a built variant is `None`.
    pub fn variant_by_identifier(&self, id: &str) -> Option<&OrientedVariant> {
        let (top, front) = id.split_once('-')?;
        let top: Face = top.parse().ok()?;
        let front: Face = front.parse().ok()?;
        self.variants
            .iter()
            .find(|v| v.top() == top && v.front() == front)
    }

    /// Block state for an identifier, as stored in [`Block::state`].
    pub fn index_of_identifier(&self, id: &str) -> Option<BlockState> {
        self.variant_by_identifier(id).map(|v| v.index())
    }

    #[inline]
    pub fn all_variants(&self) -> &[OrientedVariant] {
        &self.variants
    }

    #[inline]
    pub fn variant(&self, state: BlockState) -> Option<&OrientedVariant> {
        self.variants.get(state as usize)
    }
}
