//! Orientation catalog, block families, and the family registry.
#![forbid(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod dice;
pub mod error;
pub mod family;
pub mod material;
pub mod registry;
pub mod shape;
pub mod types;

pub use catalog::{OrientationCatalog, OrientationEntry};
pub use dice::{OrientedBlockSet, OrientedVariant};
pub use error::BlockError;
pub use family::{BlockFamily, FamilyDef, FamilyKind, SingleShapeFamily};
pub use material::MaterialCatalog;
pub use registry::FamilyRegistry;
pub use shape::{BlockShape, FaceMaterialTransformer, ShapeHandle, ShapeMode, ShapeTransformer};
pub use types::{Block, BlockState, BlockUri, FamilyId, MaterialId};
