use serde::Deserialize;

use crate::shape::ShapeMode;

// Top-level families config file
#[derive(Deserialize, Debug, Clone)]
pub struct FamiliesConfig {
    pub families: Vec<FamilyConfig>,
    // Material used for faces whose key is not in the catalog. Defaults to the
    // `unknown` key, then the empty sentinel.
    #[serde(default)]
    pub unknown_material: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct FamilyConfig {
    pub uri: String,
    #[serde(default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub shape: ShapeConfig,
    #[serde(default)]
    pub rotate_on_activate: Option<bool>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ShapeConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub mode: ShapeMode,
    #[serde(default)]
    pub faces: FacesDef,
}

// Face materials: `all` fills every face, specific faces override it.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct FacesDef {
    #[serde(default)]
    pub all: Option<String>,
    #[serde(default)]
    pub top: Option<String>,
    #[serde(default)]
    pub bottom: Option<String>,
    #[serde(default)]
    pub front: Option<String>,
    #[serde(default)]
    pub back: Option<String>,
    #[serde(default)]
    pub left: Option<String>,
    #[serde(default)]
    pub right: Option<String>,
}

fn default_kind() -> String {
    "single".to_string()
}
