//! 🍇欢迎光临🍓
//!
//! 涵盖了本 crate 一系列常用的功能.

pub use crate::{Idx3d, Spacing};

pub use crate::catalog::{lookup, CatalogEntry, Category, Rgb};
pub use crate::consts::label::{is_background, is_foreground, BACKGROUND};
pub use crate::consts::MM3_PER_ML;

pub use crate::{count_labels, LabelVolume, VoxelGeometry};
pub use crate::{
    extract, extract_file, extract_volume, CategorySummary, ExtractError, ExtractResult,
    VolumeKey, VolumeRecord, VolumeTable,
};

pub use crate::dataset::{self, discover, volume_loader};
pub use crate::export::{self, Format};
