use serde::Deserialize;
use tumble_geom::{Face, Rotation};

use crate::error::BlockError;
use crate::types::{BlockUri, FamilyId, MaterialId};

/// How a family's shape is provided.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeMode {
    /// One base shape, transformed per variant.
    #[default]
    Fixed,
    /// Shape chosen per placed instance.
    Freeform,
}

/// Untransformed base shape: one material per block-local face.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockShape {
    pub name: String,
    pub mode: ShapeMode,
    pub faces: [MaterialId; 6],
}

impl BlockShape {
    pub fn uniform(name: impl Into<String>, material: MaterialId) -> Self {
        Self {
            name: name.into(),
            mode: ShapeMode::Fixed,
            faces: [material; 6],
        }
    }

    #[inline]
    pub fn material(&self, local: Face) -> MaterialId {
        self.faces[local.index()]
    }
}

/// Concrete shape produced for one variant. `faces` is indexed by world face.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapeHandle {
    pub uri: BlockUri,
    pub owner: FamilyId,
    pub rotation: Rotation,
    pub faces: [MaterialId; 6],
}

impl ShapeHandle {
    #[inline]
    pub fn material(&self, world: Face) -> MaterialId {
        self.faces[world.index()]
    }
}

/// Turns a base shape plus a rotation into a placed shape tagged with `uri`.
/// Must be deterministic for a given `(base, rotation)`.
pub trait ShapeTransformer {
    fn transform(
        &self,
        base: &BlockShape,
        rotation: Rotation,
        uri: &BlockUri,
        owner: FamilyId,
    ) -> Result<ShapeHandle, BlockError>;
}

/// Moves each local face's material onto the world face the rotation carries it to.
#[derive(Clone, Copy, Debug, Default)]
pub struct FaceMaterialTransformer;

impl ShapeTransformer for FaceMaterialTransformer {
    fn transform(
        &self,
        base: &BlockShape,
        rotation: Rotation,
        uri: &BlockUri,
        owner: FamilyId,
    ) -> Result<ShapeHandle, BlockError> {
        let mut faces = [MaterialId::default(); 6];
        for local in Face::ALL {
            faces[rotation.apply(local).index()] = base.material(local);
        }
        Ok(ShapeHandle {
            uri: uri.clone(),
            owner,
            rotation,
            faces,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tumble_geom::Turn;

    fn numbered() -> BlockShape {
        let mut faces = [MaterialId(0); 6];
        for f in Face::ALL {
            faces[f.index()] = MaterialId(f.index() as u16 + 1);
        }
        BlockShape {
            name: "numbered".into(),
            mode: ShapeMode::Fixed,
            faces,
        }
    }

    #[test]
    fn identity_keeps_materials_in_place() {
        let base = numbered();
        let uri = BlockUri::family("test:cube");
        let h = FaceMaterialTransformer
            .transform(&base, Rotation::IDENTITY, &uri, 3)
            .unwrap();
        assert_eq!(h.faces, base.faces);
        assert_eq!(h.owner, 3);
        assert_eq!(h.uri, uri);
    }

    #[test]
    fn pitch_moves_front_material_to_top() {
        let base = numbered();
        let uri = BlockUri::family("test:cube").with_identifier("FRONT-BOTTOM");
        let r = Rotation::new(Turn::None, Turn::Clockwise90, Turn::None);
        let h = FaceMaterialTransformer.transform(&base, r, &uri, 0).unwrap();
        assert_eq!(h.material(Face::Top), base.material(Face::Front));
        assert_eq!(h.material(Face::Left), base.material(Face::Left));
    }
}
