use thiserror::Error;
use tumble_geom::Face;

#[derive(Debug, Error)]
pub enum BlockError {
    #[error("family {family} is declared with a freeform shape; orientable families need a fixed base shape")]
    UnsupportedShapeMode { family: String },

    #[error("no orientation puts {top} on top with {front} in front")]
    UnknownOrientation { top: Face, front: Face },

    #[error("no placement variant for attachment face {face:?}")]
    NoPlacementForFace { face: String },

    #[error("family {family} has unknown kind {kind:?}")]
    UnknownFamilyKind { family: String, kind: String },

    #[error("family {0} is registered more than once")]
    DuplicateFamily(String),

    #[error("unknown block family {0}")]
    UnknownFamily(String),

    #[error("invalid block uri {0:?}")]
    InvalidUri(String),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
}
