#![warn(missing_docs)] // <= 合适时移除它.
// #![warn(clippy::missing_docs_in_private_items)]  // <= too strict.

//! 核心库. 根据 volBrain 分割流水线输出的 nifti 标签文件,
//! 计算每个脑结构的实际体积, 并将标签值解析为解剖学名称与显示颜色.
//!
//! 该 crate 目前仅提供 `safe` 接口.
//!
//! # 注意
//!
//! 1. 分割本身 (标签文件的生成) 由外部 volBrain 流水线完成, 本 crate 只消费其结果.
//! 2. 标签只被视为扁平的类别标记: 不做连通域分析, 同一标签的多个不相连区域合并计算.
//! 3. 体积计算完全信任图像 header 中自带的体素分辨率, 不与其它输入交叉验证.
//!
//! # 模块
//!
//! ### 标签目录 ✅
//!
//! `(类别, 标签值) -> (结构名称, 显示颜色)` 的静态只读映射.
//! 支持 `structures`, `tissues`, `lobes`, `macro` 四个类别.
//!
//! 实现位于 `brain-berry/src/catalog`.
//!
//! ### 标签体数据与体素几何 ✅
//!
//! 读取 nifti 标签文件, 获取体素分辨率, 单遍统计各标签体素个数.
//!
//! 实现位于 `brain-berry/src/data`.
//!
//! ### 体积提取 ✅
//!
//! 体素个数 × 单个体素体积 = 结构体积 (mm³, ml). 未收录的标签以 `Label_<id>`
//! 命名, 并以标签值派生的确定性颜色着色.
//!
//! 实现位于 `brain-berry/src/volume`.
//!
//! ### 小功能 ✅
//!
//! 1. 按 volBrain 文件命名约定自动发现各类别文件. ✅
//! 2. CSV / TSV 结果导出, 以及供 3D 场景使用的颜色表. ✅
//! 3. 类别汇总 (结构个数, 总体积). ✅
//!
//! # 例子
//!
//! ```
//! use brain_berry::prelude::*;
//! use ndarray::Array3;
//!
//! let mut data = Array3::<u32>::zeros((10, 10, 10));
//! data.iter_mut().take(300).for_each(|p| *p = 1);
//!
//! let table = brain_berry::extract(data.view(), (1.0, 1.0, 1.0), Category::Tissues).unwrap();
//! let csf = table.get(Category::Tissues, 1).unwrap();
//! assert_eq!(csf.name, "CSF");
//! assert_eq!(csf.volume_mm3, 300.0);
//! ```

/// 三维索引, 按 `(z, h, w)` 组织.
pub type Idx3d = (usize, usize, usize);

/// 体素分辨率, 按 `(x, y, z)` 组织, 以毫米为单位.
pub type Spacing = (f64, f64, f64);

pub mod catalog;

pub mod consts;

/// volBrain nifti 标签文件基础数据结构.
mod data;

pub use data::{count_labels, LabelVolume, VoxelGeometry};

#[cfg(feature = "rayon")]
pub use data::par_count_labels;

pub mod dataset;

pub mod export;

mod volume;

pub use volume::{
    extract, extract_file, extract_volume, CategorySummary, ExtractError, ExtractResult,
    ImageError, VolumeKey, VolumeRecord, VolumeTable,
};

pub mod prelude;
