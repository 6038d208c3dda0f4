use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BlockError;

pub type FamilyId = u16;
pub type BlockState = u16;

// Compact placed-block representation used by world storage: family id plus the
// variant index inside that family.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize)]
pub struct Block {
    pub id: FamilyId,
    pub state: BlockState,
}

impl Block {
    #[inline]
    pub const fn new(id: FamilyId, state: BlockState) -> Self {
        Self { id, state }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct MaterialId(pub u16);

/// Family-scoped block address: `namespace:family` or `namespace:family:IDENT`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct BlockUri {
    family: String,
    identifier: Option<String>,
}

impl BlockUri {
    /// Builds a family URI from `namespace:family` text.
    pub fn family(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            identifier: None,
        }
    }

    pub fn with_identifier(&self, identifier: impl Into<String>) -> Self {
        Self {
            family: self.family.clone(),
            identifier: Some(identifier.into()),
        }
    }

    /// Drops the identifier, leaving only the family part.
    pub fn family_uri(&self) -> BlockUri {
        BlockUri::family(self.family.clone())
    }

    #[inline]
    pub fn family_str(&self) -> &str {
        &self.family
    }

    #[inline]
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    #[inline]
    pub fn is_family(&self) -> bool {
        self.identifier.is_none()
    }
}

impl fmt::Display for BlockUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.identifier {
            Some(id) => write!(f, "{}:{}", self.family, id),
            None => f.write_str(&self.family),
        }
    }
}

impl FromStr for BlockUri {
    type Err = BlockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.iter().any(|p| p.is_empty() || p.trim() != *p) {
            return Err(BlockError::InvalidUri(s.to_string()));
        }
        match parts.as_slice() {
            [ns, name] => Ok(BlockUri::family(format!("{ns}:{name}"))),
            [ns, name, ident] => {
                Ok(BlockUri::family(format!("{ns}:{name}")).with_identifier(*ident))
            }
            _ => Err(BlockError::InvalidUri(s.to_string())),
        }
    }
}
