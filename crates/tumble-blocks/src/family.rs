//! Block families: how a block type picks its concrete variant for placement and lookup.

use tumble_geom::{Face, Rotation};

use crate::catalog::OrientationEntry;
use crate::dice::{OrientedBlockSet, OrientedVariant};
use crate::error::BlockError;
use crate::shape::{BlockShape, ShapeTransformer};
use crate::types::{BlockState, BlockUri, FamilyId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FamilyKind {
    Single,
    Dice,
}

impl FamilyKind {
    pub fn from_name(s: &str) -> Option<FamilyKind> {
        match s {
            "single" => Some(FamilyKind::Single),
            "dice" => Some(FamilyKind::Dice),
            _ => None,
        }
    }
}

/// Compiled family definition, ready to build.
#[derive(Clone, Debug)]
pub struct FamilyDef {
    pub uri: BlockUri,
    pub kind: FamilyKind,
    pub shape: BlockShape,
    pub rotate_on_activate: bool,
}

/// A family with exactly one unrotated block. Accepts freeform shapes.
#[derive(Clone, Debug)]
pub struct SingleShapeFamily {
    uri: BlockUri,
    id: FamilyId,
    block: OrientedVariant,
}

impl SingleShapeFamily {
    pub fn build(
        def: &FamilyDef,
        id: FamilyId,
        transformer: &dyn ShapeTransformer,
    ) -> Result<Self, BlockError> {
        let uri = def.uri.family_uri();
        let shape = transformer.transform(&def.shape, Rotation::IDENTITY, &uri, id)?;
        let entry = OrientationEntry::new(Face::Top, Face::Front, Rotation::IDENTITY);
        Ok(Self {
            block: OrientedVariant::new(entry, id, 0, shape),
            uri,
            id,
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

    #[inline]
    pub fn block(&self) -> &OrientedVariant {
        &self.block
    }
}

#[derive(Clone, Debug)]
pub enum BlockFamily {
    Single(SingleShapeFamily),
    Dice(OrientedBlockSet),
}

impl BlockFamily {
    pub fn build(
        def: &FamilyDef,
        id: FamilyId,
        transformer: &dyn ShapeTransformer,
    ) -> Result<Self, BlockError> {
        match def.kind {
            FamilyKind::Single => Ok(BlockFamily::Single(SingleShapeFamily::build(
                def,
                id,
                transformer,
            )?)),
            FamilyKind::Dice => Ok(BlockFamily::Dice(OrientedBlockSet::build(
                def,
                id,
                transformer,
            )?)),
        }
    }

    pub fn uri(&self) -> &BlockUri {
        match self {
            BlockFamily::Single(f) => f.uri(),
            BlockFamily::Dice(f) => f.uri(),
        }
    }

    pub fn id(&self) -> FamilyId {
        match self {
            BlockFamily::Single(f) => f.id(),
            BlockFamily::Dice(f) => f.id(),
        }
    }

    /// Variant to place when attaching to the world by `attachment`.
    /// `direction` is the placer's facing; no family currently uses it.
    pub fn block_for_placement(
        &self,
        attachment: Face,
        _direction: Face,
    ) -> Result<&OrientedVariant, BlockError> {
        match self {
            BlockFamily::Single(f) => Ok(f.block()),
            BlockFamily::Dice(f) => f.variant_for_attachment(attachment),
        }
    }

    pub fn archetype(&self) -> &OrientedVariant {
        match self {
            BlockFamily::Single(f) => f.block(),
            BlockFamily::Dice(f) => f.archetype(),
        }
    }

    /// Resolves a URI scoped to this family. A bare family URI yields the archetype.
    pub fn block_for(&self, uri: &BlockUri) -> Option<&OrientedVariant> {
        if uri.family_str() != self.uri().family_str() {
            return None;
        }
        match (self, uri.identifier()) {
            (_, None) => Some(self.archetype()),
            (BlockFamily::Single(_), Some(_)) => None,
            (BlockFamily::Dice(f), Some(ident)) => f.variant_by_identifier(ident),
        }
    }

    pub fn blocks(&self) -> &[OrientedVariant] {
        match self {
            BlockFamily::Single(f) => std::slice::from_ref(f.block()),
            BlockFamily::Dice(f) => f.all_variants(),
        }
    }

    #[inline]
    pub fn variant(&self, state: BlockState) -> Option<&OrientedVariant> {
        self.blocks().get(state as usize)
    }
}
