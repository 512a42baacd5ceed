//! 体积记录与结果集.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use itertools::Itertools;

use crate::catalog::{self, Category, Rgb};
use crate::consts::MM3_PER_ML;
use crate::data::VoxelGeometry;

use super::color::fallback_color;

/// 结果集中一条记录的身份, 即 `(类别, 标签值)`. 不同类别的键永不冲突.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolumeKey {
    /// 类别.
    pub category: Category,

    /// 标签值.
    pub label_id: u32,
}

impl VolumeKey {
    /// 创建键.
    #[inline]
    pub const fn new(category: Category, label_id: u32) -> Self {
        Self {
            category,
            label_id,
        }
    }
}

impl fmt::Display for VolumeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.category, self.label_id)
    }
}

/// 单个结构的体积测量结果.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolumeRecord {
    /// 类别.
    pub category: Category,

    /// 标签值.
    pub label_id: u32,

    /// 结构名称. 未收录的标签为 `Label_<id>`.
    pub name: String,

    /// 显示颜色. 未收录的标签使用由标签值派生的确定性颜色.
    pub color: Rgb,

    /// 体素个数.
    pub voxels: u64,

    /// 体积, 以立方毫米为单位.
    pub volume_mm3: f64,

    /// 体积, 以毫升为单位.
    pub volume_ml: f64,

    /// 标签是否收录于标签目录.
    pub cataloged: bool,
}

impl VolumeRecord {
    /// 根据体素个数和体素几何创建记录, 并从标签目录解析名称和颜色.
    pub fn new(category: Category, label_id: u32, voxels: u64, geometry: &VoxelGeometry) -> Self {
        let volume_mm3 = voxels as f64 * geometry.voxel_volume_mm3();
        let (name, color, cataloged) = match catalog::lookup(category, label_id) {
            Some(entry) => (entry.name.to_owned(), entry.color, true),
            None => {
                log::warn!("{category} 类别中未收录标签 {label_id}, 使用回退名称与颜色");
                (
                    format!("Label_{label_id}"),
                    fallback_color(category, label_id),
                    false,
                )
            }
        };
        Self {
            category,
            label_id,
            name,
            color,
            voxels,
            volume_mm3,
            volume_ml: volume_mm3 / MM3_PER_ML,
            cataloged,
        }
    }

    /// 记录的键.
    #[inline]
    pub fn key(&self) -> VolumeKey {
        VolumeKey::new(self.category, self.label_id)
    }
}

/// 单个类别的汇总: 结构个数与总体积.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategorySummary {
    /// 类别.
    pub category: Category,

    /// 结构个数.
    pub structures: usize,

    /// 总体积, 以毫升为单位.
    pub total_ml: f64,
}

/// 一次 (或多次合并的) 体积提取的结果集.
///
/// 以 [`VolumeKey`] 为键, 迭代顺序为 `(类别, 标签值)` 升序. 该顺序没有语义,
/// 仅为输出稳定.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VolumeTable {
    records: BTreeMap<VolumeKey, VolumeRecord>,
}

impl VolumeTable {
    /// 创建空结果集.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录条数.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// 是否为空?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 插入一条记录. 若键已存在, 返回被替换的旧记录.
    #[inline]
    pub fn insert(&mut self, record: VolumeRecord) -> Option<VolumeRecord> {
        self.records.insert(record.key(), record)
    }

    /// 按类别和标签值获取记录.
    #[inline]
    pub fn get(&self, category: Category, label_id: u32) -> Option<&VolumeRecord> {
        self.records.get(&VolumeKey::new(category, label_id))
    }

    /// 按 `(类别, 标签值)` 升序迭代所有记录.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &VolumeRecord> {
        self.records.values()
    }

    /// 按标签值升序迭代某个类别的记录.
    pub fn category_iter(&self, category: Category) -> impl Iterator<Item = &VolumeRecord> {
        let lo = VolumeKey::new(category, 0);
        let hi = VolumeKey::new(category, u32::MAX);
        self.records.range(lo..=hi).map(|(_, r)| r)
    }

    /// 结果集中出现的类别, 升序排列.
    pub fn categories(&self) -> Vec<Category> {
        self.iter().map(|r| r.category).dedup().collect()
    }

    /// 将 `other` 并入自身. 不同类别的键不会冲突; 同键记录以 `other` 为准.
    pub fn merge(&mut self, other: VolumeTable) {
        self.records.extend(other.records);
    }

    /// 清空结果集.
    #[inline]
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// 按类别汇总结构个数与总体积.
    pub fn summary(&self) -> Vec<CategorySummary> {
        let groups = self.iter().group_by(|r| r.category);
        let summary: Vec<CategorySummary> = (&groups)
            .into_iter()
            .map(|(category, records)| {
                let (structures, total_ml) =
                    records.fold((0, 0.0), |(n, ml), r| (n + 1, ml + r.volume_ml));
                CategorySummary {
                    category,
                    structures,
                    total_ml,
                }
            })
            .collect();
        summary
    }

    /// 所有记录的总体积, 以毫升为单位.
    pub fn total_ml(&self) -> f64 {
        self.iter().map(|r| r.volume_ml).sum()
    }
}

impl Extend<VolumeRecord> for VolumeTable {
    fn extend<T: IntoIterator<Item = VolumeRecord>>(&mut self, iter: T) {
        iter.into_iter().for_each(|r| {
            self.insert(r);
        });
    }
}

impl FromIterator<VolumeRecord> for VolumeTable {
    fn from_iter<T: IntoIterator<Item = VolumeRecord>>(iter: T) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl IntoIterator for VolumeTable {
    type Item = VolumeRecord;
    type IntoIter = btree_map::IntoValues<VolumeKey, VolumeRecord>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.records.into_values()
    }
}

impl<'a> IntoIterator for &'a VolumeTable {
    type Item = &'a VolumeRecord;
    type IntoIter = btree_map::Values<'a, VolumeKey, VolumeRecord>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}
