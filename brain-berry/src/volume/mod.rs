//! 体积提取.
//!
//! 输入一个三维标签数组、体素分辨率和类别, 输出该类别每个非背景标签的体积记录.
//! 提取是关于输入的纯函数: 每次调用单遍扫描整个体数据, 构造并返回独立的结果集,
//! 调用之间不共享任何可变状态. 因此不同类别的提取可以直接并行.

mod color;
mod error;
mod table;

use std::collections::BTreeMap;
use std::path::Path;

use ndarray::ArrayView3;

use crate::catalog::Category;
use crate::data::{count_labels, LabelVolume, VoxelGeometry};
use crate::Spacing;

pub use error::{ExtractError, ExtractResult, ImageError};
pub use table::{CategorySummary, VolumeKey, VolumeRecord, VolumeTable};

/// 由各标签的体素个数生成结果集.
fn tabulate(counts: BTreeMap<u32, u64>, geometry: &VoxelGeometry, category: Category) -> VolumeTable {
    counts
        .into_iter()
        .map(|(label_id, voxels)| VolumeRecord::new(category, label_id, voxels, geometry))
        .collect()
}

/// 计算 `labels` 中每个非背景标签的体积.
///
/// `spacing` 按 `(x, y, z)` 组织, 以毫米为单位; 任一分量非正时返回
/// [`ExtractError::InvalidGeometry`]. 全为背景时返回空结果集.
///
/// 未收录于 `category` 标签表的标签不会导致失败, 而是以 `Label_<id>` 命名.
pub fn extract(
    labels: ArrayView3<'_, u32>,
    spacing: Spacing,
    category: Category,
) -> ExtractResult<VolumeTable> {
    let geometry = VoxelGeometry::new(spacing)?;
    let table = tabulate(count_labels(labels), &geometry, category);
    log::debug!("{category}: 提取到 {} 个结构", table.len());
    Ok(table)
}

/// 计算已加载的 [`LabelVolume`] 中每个非背景标签的体积.
///
/// 开启 `rayon` feature 时按切片并行计数, 结果与串行版本一致.
pub fn extract_volume(volume: &LabelVolume, category: Category) -> VolumeTable {
    #[cfg(feature = "rayon")]
    let counts = volume.par_label_counts();
    #[cfg(not(feature = "rayon"))]
    let counts = volume.label_counts();
    let table = tabulate(counts, volume.geometry(), category);
    log::debug!("{category}: 提取到 {} 个结构", table.len());
    table
}

/// 打开 nifti 标签文件并计算每个非背景标签的体积.
///
/// 文件读取失败时返回 [`ExtractError::UnreadableImage`], 不重试.
pub fn extract_file<P: AsRef<Path>>(path: P, category: Category) -> ExtractResult<VolumeTable> {
    let path = path.as_ref();
    log::info!("计算 {category} 体积: `{}`", path.display());
    let volume = LabelVolume::open(path)?;
    Ok(extract_volume(&volume, category))
}

#[cfg(test)]
mod tests {
    use super::{extract, extract_file, extract_volume};
    use crate::catalog::{Category, Rgb};
    use crate::{ExtractError, LabelVolume};
    use ndarray::Array3;

    /// 1000 个体素, 其中 300 个为标签 1.
    fn csf_image() -> Array3<u32> {
        let mut data = Array3::<u32>::zeros((10, 10, 10));
        data.iter_mut().take(300).for_each(|p| *p = 1);
        data
    }

    fn rel_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn test_csf_example() {
        let table = extract(csf_image().view(), (1.0, 1.0, 1.0), Category::Tissues).unwrap();
        assert_eq!(table.len(), 1);

        let csf = table.get(Category::Tissues, 1).unwrap();
        assert_eq!(csf.name, "CSF");
        assert_eq!(csf.voxels, 300);
        assert_eq!(csf.volume_mm3, 300.0);
        assert!(rel_eq(csf.volume_ml, 0.3));
        assert_eq!(csf.color, Rgb::new(0.3, 0.6, 0.9));
    }

    #[test]
    fn test_one_record_per_label() {
        let mut data = Array3::<u32>::zeros((3, 4, 5));
        for (i, p) in data.iter_mut().enumerate() {
            *p = (i % 7) as u32;
        }
        let table = extract(data.view(), (1.0, 1.0, 1.0), Category::Lobes).unwrap();
        assert_eq!(table.len(), 6);
        assert!(table.get(Category::Lobes, 0).is_none());
        assert_eq!(table.iter().map(|r| r.voxels).sum::<u64>(), 60 - 9);
    }

    #[test]
    fn test_volume_formula() {
        let spacing = (0.9375, 0.9375, 1.2);
        let table = extract(csf_image().view(), spacing, Category::Tissues).unwrap();
        let csf = table.get(Category::Tissues, 1).unwrap();
        let expected = 300.0 * 0.9375 * 0.9375 * 1.2;
        assert!(rel_eq(csf.volume_mm3, expected));
        assert_eq!(csf.volume_ml, csf.volume_mm3 / 1000.0);
    }

    #[test]
    fn test_invalid_geometry() {
        let err = extract(csf_image().view(), (0.0, 1.0, 1.0), Category::Tissues).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidGeometry { .. }));
    }

    #[test]
    fn test_background_only() {
        let data = Array3::<u32>::zeros((4, 4, 4));
        let table = extract(data.view(), (1.0, 1.0, 1.0), Category::Structures).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_uncataloged_fallback() {
        // 可能已被其它测试初始化.
        let _ = simple_logger::SimpleLogger::new().init();

        let mut data = Array3::<u32>::zeros((2, 2, 2));
        data[(0, 0, 0)] = 9999;
        data[(1, 1, 1)] = 6;
        let table = extract(data.view(), (1.0, 1.0, 1.0), Category::Macro).unwrap();
        assert_eq!(table.len(), 2);

        let unknown = table.get(Category::Macro, 9999).unwrap();
        assert_eq!(unknown.name, "Label_9999");
        assert!(unknown.color.is_valid());
        assert!(!unknown.cataloged);
        assert_eq!(table.get(Category::Macro, 6).unwrap().name, "Brainstem");
    }

    #[test]
    fn test_idempotent() {
        let mut data = csf_image();
        data[(9, 9, 9)] = 4242;
        let a = extract(data.view(), (1.0, 2.0, 0.5), Category::Tissues).unwrap();
        let b = extract(data.view(), (1.0, 2.0, 0.5), Category::Tissues).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_cross_category_union() {
        let mut structures = Array3::<u32>::zeros((5, 5, 5));
        structures[(0, 0, 0)] = 4;
        structures[(0, 0, 1)] = 47;
        structures[(0, 0, 2)] = 48;
        let mut tissues = Array3::<u32>::zeros((5, 5, 5));
        tissues[(0, 0, 0)] = 4;
        tissues[(1, 0, 0)] = 1;

        let mut all = extract(structures.view(), (1.0, 1.0, 1.0), Category::Structures).unwrap();
        let other = extract(tissues.view(), (1.0, 1.0, 1.0), Category::Tissues).unwrap();
        let (n1, n2) = (all.len(), other.len());
        all.merge(other);
        assert_eq!(all.len(), n1 + n2);
        assert_eq!(all.get(Category::Structures, 4).unwrap().name, "3rd_Ventricle");
        assert_eq!(all.get(Category::Tissues, 4).unwrap().name, "Subcortical_GM");
    }

    #[test]
    fn test_extract_volume_matches_extract() {
        let volume = LabelVolume::from_raw(csf_image(), (1.0, 1.0, 2.0)).unwrap();
        let a = extract_volume(&volume, Category::Tissues);
        let b = extract(csf_image().view(), (1.0, 1.0, 2.0), Category::Tissues).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_extract_file_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract_file(dir.path().join("nope.nii"), Category::Lobes).unwrap_err();
        assert!(matches!(err, ExtractError::UnreadableImage { .. }));
    }

    #[test]
    fn test_extract_file_uses_header_spacing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("native_lobes_job1.nii.gz");
        let mut raw = Array3::<u8>::zeros((4, 3, 2));
        raw[(3, 0, 1)] = 5;
        raw[(0, 2, 0)] = 5;
        let header = nifti::NiftiHeader {
            pixdim: [1.0, 0.5, 2.0, 3.0, 1.0, 1.0, 1.0, 1.0],
            ..Default::default()
        };
        nifti::writer::WriterOptions::new(&path)
            .reference_header(&header)
            .write_nifti(&raw)
            .unwrap();

        let table = extract_file(&path, Category::Lobes).unwrap();
        assert_eq!(table.len(), 1);
        let parietal = table.get(Category::Lobes, 5).unwrap();
        assert_eq!(parietal.name, "Right_Parietal_Lobe");
        assert_eq!(parietal.voxels, 2);
        assert!(rel_eq(parietal.volume_mm3, 6.0));
        assert!(rel_eq(parietal.volume_ml, 0.006));
    }
}
