use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Optional `tumble.toml` run settings; command-line flags take precedence.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct RunConfig {
    pub materials: Option<PathBuf>,
    pub families: Option<PathBuf>,
    pub seed: Option<u64>,
    pub activations: Option<u32>,
}

impl RunConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let s = fs::read_to_string(path)?;
        Ok(toml::from_str(&s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_stay_unset() {
        let cfg: RunConfig = toml::from_str("seed = 9").unwrap();
        assert_eq!(cfg.seed, Some(9));
        assert!(cfg.materials.is_none());
        assert!(cfg.activations.is_none());
    }

    #[test]
    fn paths_parse() {
        let cfg: RunConfig = toml::from_str(
            r#"
            materials = "assets/materials.toml"
            families = "assets/families.toml"
            activations = 3
            "#,
        )
        .unwrap();
        assert_eq!(cfg.families, Some(PathBuf::from("assets/families.toml")));
        assert_eq!(cfg.activations, Some(3));
    }
}
