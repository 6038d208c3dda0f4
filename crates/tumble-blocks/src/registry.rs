use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::{debug, warn};
use tumble_geom::Face;

use super::config::{FacesDef, FamiliesConfig, FamilyConfig};
use super::dice::OrientedVariant;
use super::error::BlockError;
use super::family::{BlockFamily, FamilyDef, FamilyKind};
use super::material::MaterialCatalog;
use super::shape::{BlockShape, ShapeTransformer};
use super::types::{Block, BlockUri, FamilyId, MaterialId};

/// All registered block families, addressable by id (declaration order) or URI.
#[derive(Default, Clone, Debug)]
pub struct FamilyRegistry {
    pub materials: MaterialCatalog,
    families: Vec<BlockFamily>,
    by_uri: HashMap<BlockUri, FamilyId>,
    rotate_on_activate: Vec<bool>,
}

impl FamilyRegistry {
    pub fn new() -> Self {
        Self::with_materials(MaterialCatalog::new())
    }

    pub fn with_materials(materials: MaterialCatalog) -> Self {
        Self {
            materials,
            families: Vec::new(),
            by_uri: HashMap::new(),
            rotate_on_activate: Vec::new(),
        }
    }

    #[inline]
    pub fn get(&self, id: FamilyId) -> Option<&BlockFamily> {
        self.families.get(id as usize)
    }

    #[inline]
    pub fn families(&self) -> &[BlockFamily] {
        &self.families
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.families.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Family id for a family URI or any variant URI inside it.
    pub fn id_by_uri(&self, uri: &BlockUri) -> Option<FamilyId> {
        self.by_uri.get(&uri.family_uri()).copied()
    }

    pub fn family_for_uri(&self, uri: &BlockUri) -> Option<&BlockFamily> {
        self.id_by_uri(uri).and_then(|id| self.get(id))
    }

    pub fn variant_for_uri(&self, uri: &BlockUri) -> Option<&OrientedVariant> {
        self.family_for_uri(uri)?.block_for(uri)
    }

    /// Never fails on malformed text; unknown or unparsable URIs are `None`.
    pub fn variant_for_uri_str(&self, uri: &str) -> Option<&OrientedVariant> {
        let uri: BlockUri = uri.parse().ok()?;
        self.variant_for_uri(&uri)
    }

    pub fn block_for_uri(&self, uri: &BlockUri) -> Option<Block> {
        self.variant_for_uri(uri).map(|v| v.block())
    }

    pub fn variant_for_block(&self, block: Block) -> Option<&OrientedVariant> {
        self.get(block.id)?.variant(block.state)
    }

    pub fn block_for_placement(
        &self,
        id: FamilyId,
        attachment: Face,
        direction: Face,
    ) -> Result<Block, BlockError> {
        let family = self
            .get(id)
            .ok_or_else(|| BlockError::UnknownFamily(id.to_string()))?;
        Ok(family.block_for_placement(attachment, direction)?.block())
    }

    #[inline]
    pub fn rotates_on_activate(&self, id: FamilyId) -> bool {
        self.rotate_on_activate
            .get(id as usize)
            .copied()
            .unwrap_or(false)
    }

    /// Builds and registers one family; ids are handed out sequentially.
    pub fn register(
        &mut self,
        def: &FamilyDef,
        transformer: &dyn ShapeTransformer,
    ) -> Result<FamilyId, BlockError> {
        let uri = def.uri.family_uri();
        if self.by_uri.contains_key(&uri) {
            return Err(BlockError::DuplicateFamily(uri.to_string()));
        }
        let id = self.families.len() as FamilyId;
        let family = BlockFamily::build(def, id, transformer)?;
        debug!(
            target: "blocks",
            "registered family {} id={} kind={:?} variants={}",
            uri,
            id,
            def.kind,
            family.blocks().len()
        );
        self.families.push(family);
        self.rotate_on_activate.push(def.rotate_on_activate);
        self.by_uri.insert(uri, id);
        Ok(id)
    }

    pub fn load_from_paths(
        materials_path: impl AsRef<Path>,
        families_path: impl AsRef<Path>,
        transformer: &dyn ShapeTransformer,
    ) -> Result<Self, BlockError> {
        let materials = MaterialCatalog::from_path(materials_path)?;
        let families_toml = fs::read_to_string(families_path)?;
        let cfg: FamiliesConfig = toml::from_str(&families_toml)?;
        Self::from_configs(materials, cfg, transformer)
    }

    pub fn from_configs(
        materials: MaterialCatalog,
        cfg: FamiliesConfig,
        transformer: &dyn ShapeTransformer,
    ) -> Result<Self, BlockError> {
        let mut reg = FamilyRegistry::with_materials(materials);
        let fallback = cfg
            .unknown_material
            .as_deref()
            .and_then(|k| reg.materials.get_id(k))
            .or_else(|| reg.materials.get_id("unknown"))
            .unwrap_or(MaterialId(0));
        for fc in cfg.families.iter() {
            let def = compile_family(&reg.materials, fc, fallback)?;
            reg.register(&def, transformer)?;
        }
        Ok(reg)
    }
}

fn compile_family(
    materials: &MaterialCatalog,
    fc: &FamilyConfig,
    fallback: MaterialId,
) -> Result<FamilyDef, BlockError> {
    let uri: BlockUri = fc.uri.parse()?;
    if !uri.is_family() {
        return Err(BlockError::InvalidUri(fc.uri.clone()));
    }
    let kind = FamilyKind::from_name(&fc.kind).ok_or_else(|| BlockError::UnknownFamilyKind {
        family: fc.uri.clone(),
        kind: fc.kind.clone(),
    })?;
    let faces = compile_faces(materials, &fc.shape.faces, fallback, &fc.uri);
    Ok(FamilyDef {
        kind,
        shape: BlockShape {
            name: fc.shape.name.clone().unwrap_or_else(|| "cube".to_string()),
            mode: fc.shape.mode,
            faces,
        },
        rotate_on_activate: fc.rotate_on_activate.unwrap_or(false),
        uri,
    })
}

fn compile_faces(
    materials: &MaterialCatalog,
    def: &FacesDef,
    fallback: MaterialId,
    family: &str,
) -> [MaterialId; 6] {
    let resolve = |key: &Option<String>| -> Option<MaterialId> {
        let key = key.as_deref()?;
        match materials.get_id(key) {
            Some(id) => Some(id),
            None => {
                warn!(target: "blocks", "family {}: unknown material {:?}", family, key);
                Some(fallback)
            }
        }
    };
    let all = resolve(&def.all).unwrap_or(fallback);
    let mut out = [all; 6];
    for (face, key) in [
        (Face::Top, &def.top),
        (Face::Bottom, &def.bottom),
        (Face::Front, &def.front),
        (Face::Back, &def.back),
        (Face::Left, &def.left),
        (Face::Right, &def.right),
    ] {
        if let Some(id) = resolve(key) {
            out[face.index()] = id;
        }
    }
    out
}
