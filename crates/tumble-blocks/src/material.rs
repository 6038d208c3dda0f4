use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::BlockError;
use crate::types::MaterialId;

#[derive(Clone, Debug)]
pub struct Material {
    pub id: MaterialId,
    pub key: String,
    pub texture_candidates: Vec<PathBuf>,
}

/// Named face materials. Id 0 is an empty sentinel so an unresolved face is never a real material.
#[derive(Clone, Debug)]
pub struct MaterialCatalog {
    pub materials: Vec<Material>,
    pub by_key: HashMap<String, MaterialId>,
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialCatalog {
    pub fn new() -> Self {
        Self {
            materials: vec![Material {
                id: MaterialId(0),
                key: String::new(),
                texture_candidates: Vec::new(),
            }],
            by_key: HashMap::new(),
        }
    }

    pub fn get_id(&self, key: &str) -> Option<MaterialId> {
        self.by_key.get(key).copied()
    }

    pub fn get(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0 as usize)
    }

    pub fn insert(&mut self, key: impl Into<String>, paths: Vec<PathBuf>) -> MaterialId {
        let key = key.into();
        if let Some(id) = self.get_id(&key) {
            return id;
        }
        let id = MaterialId(self.materials.len() as u16);
        self.by_key.insert(key.clone(), id);
        self.materials.push(Material {
            id,
            key,
            texture_candidates: paths,
        });
        id
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, BlockError> {
        let cfg: MaterialsConfig = toml::from_str(toml_str)?;
        let mut catalog = MaterialCatalog::new();
        let mut entries: Vec<(String, Vec<String>)> = cfg.materials.into_iter().collect();
        // Sorted keys keep MaterialId assignment stable across runs.
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        for (key, paths) in entries {
            catalog.insert(key, paths.into_iter().map(PathBuf::from).collect());
        }
        Ok(catalog)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BlockError> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

// materials.toml: `[materials] pip_one = ["assets/dice/one.png"]`
#[derive(Deserialize)]
pub struct MaterialsConfig {
    pub materials: HashMap<String, Vec<String>>,
}
