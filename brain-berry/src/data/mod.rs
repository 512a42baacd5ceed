use std::collections::BTreeMap;
use std::ops::Index;
use std::path::Path;

use ndarray::{Array3, ArrayD, ArrayView, ArrayView3, Axis, Ix3};
use nifti::{IntoNdArray, NiftiHeader, NiftiObject, ReaderOptions};

use crate::consts::label::is_foreground;
use crate::volume::{ExtractError, ExtractResult, ImageError};
use crate::Idx3d;

mod geometry;

pub use geometry::VoxelGeometry;

/// 从 header 读取 `(x, y, z)` 体素分辨率.
#[inline]
fn get_spacing_from_header(h: &NiftiHeader) -> (f64, f64, f64) {
    // [_, W, H, z, ..]. 毫米.
    let [_, w, h, z, ..] = h.pixdim;
    (w as f64, h as f64, z as f64)
}

/// 去掉多余的单例维度 (如 `[W, H, z, 1]`), 得到三维数组.
///
/// 不是三维体数据时返回原形状.
fn into_volume3(mut data: ArrayD<u32>) -> Result<Array3<u32>, Vec<usize>> {
    while data.ndim() > 3 && data.shape()[data.ndim() - 1] == 1 {
        let last = data.ndim() - 1;
        data = data.index_axis_move(Axis(last), 0);
    }
    let shape = data.shape().to_vec();
    data.into_dimensionality::<Ix3>().map_err(|_| shape)
}

/// 体素值能否无损地作为标签值?
#[inline]
fn is_label_value(p: f64) -> bool {
    p.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&p)
}

/// 将解码后的体素值转换为标签值. 存在非法值时返回第一个.
///
/// 不能直接解码为 `u32`: 那样负数会回绕, 小数会被截断.
fn into_labels(data: ArrayD<f64>) -> Result<ArrayD<u32>, ImageError> {
    if let Some(&bad) = data.iter().find(|p| !is_label_value(**p)) {
        return Err(ImageError::InvalidLabel(bad));
    }
    Ok(data.mapv(|p| p as u32))
}

/// nii 格式 3D 脑分割标签, 包括体素几何和标签值. 标签值以 `u32` 保存.
///
/// 数据按 `(z, H, W)` 组织, 体素分辨率按 `(x, y, z)` 即 `(W, H, z)` 组织.
#[derive(Debug, Clone)]
pub struct LabelVolume {
    geometry: VoxelGeometry,
    data: Array3<u32>,
}

impl Index<Idx3d> for LabelVolume {
    type Output = u32;

    #[inline]
    fn index(&self, index: Idx3d) -> &Self::Output {
        &self.data[index]
    }
}

impl LabelVolume {
    /// 打开 nii (或 nii.gz) 文件格式的 3D 标签. `path` 为 nifti 文件的本地路径.
    ///
    /// 文件无法读取、解码失败、含有非法标签值 (负数或小数) 或不是三维体数据时
    /// 返回 [`ExtractError::UnreadableImage`];
    /// header 中的体素分辨率非法时返回 [`ExtractError::InvalidGeometry`].
    pub fn open<P: AsRef<Path>>(path: P) -> ExtractResult<Self> {
        let path = path.as_ref();
        let unreadable = |reason: ImageError| ExtractError::UnreadableImage {
            path: path.to_owned(),
            reason,
        };

        let obj = ReaderOptions::new()
            .read_file(path)
            .map_err(|e| unreadable(e.into()))?;
        let geometry = VoxelGeometry::new(get_spacing_from_header(obj.header()))?;

        let data = obj
            .into_volume()
            .into_ndarray::<f64>()
            .map_err(|e| unreadable(e.into()))?;
        let data = into_labels(data).map_err(unreadable)?;
        let data = into_volume3(data).map_err(|shape| unreadable(ImageError::NotVolumetric(shape)))?;

        // [W, H, z] -> [z, H, W].
        let data = data.permuted_axes([2, 1, 0]);
        let data = if data.is_standard_layout() {
            data
        } else {
            data.as_standard_layout().into_owned()
        };

        log::debug!(
            "已读取 `{}`: 形状 {:?}, 体素分辨率 {:?} mm",
            path.display(),
            data.dim(),
            geometry.spacing()
        );
        Ok(Self { geometry, data })
    }

    /// 根据裸标签数据和体素分辨率直接创建 `LabelVolume`.
    ///
    /// `data` 按 `(z, H, W)` 组织, `spacing` 按 `(x, y, z)` 组织.
    /// 分辨率非法时返回 [`ExtractError::InvalidGeometry`].
    pub fn from_raw(data: Array3<u32>, spacing: (f64, f64, f64)) -> ExtractResult<Self> {
        Ok(Self {
            geometry: VoxelGeometry::new(spacing)?,
            data,
        })
    }

    /// 获取体素几何.
    #[inline]
    pub fn geometry(&self) -> &VoxelGeometry {
        &self.geometry
    }

    /// 获取数据形状大小.
    #[inline]
    pub fn shape(&self) -> Idx3d {
        self.data.dim()
    }

    /// 获取数据体素个数.
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// 获得数据的一份不可变 shallow copy.
    #[inline]
    pub fn data(&self) -> ArrayView<'_, u32, Ix3> {
        self.data.view()
    }

    /// 获取 3D 标签中值为 `label` 的体素个数.
    #[inline]
    pub fn count(&self, label: u32) -> usize {
        self.data.iter().filter(|p| **p == label).count()
    }

    /// 单遍统计所有非背景标签的体素个数.
    #[inline]
    pub fn label_counts(&self) -> BTreeMap<u32, u64> {
        count_labels(self.data())
    }

    /// 出现过的所有非背景标签, 升序排列.
    pub fn labels(&self) -> Vec<u32> {
        self.label_counts().into_keys().collect()
    }

    /// 是否全为背景?
    #[inline]
    pub fn is_background(&self) -> bool {
        !self.data.iter().copied().any(is_foreground)
    }
}

/// 单遍统计 `data` 中所有非背景标签的体素个数. 结果按标签值升序.
///
/// 标签只被视为类别标记, 同一标签的多个不相连区域合并计数.
pub fn count_labels(data: ArrayView3<'_, u32>) -> BTreeMap<u32, u64> {
    let mut counts = BTreeMap::new();
    for &p in data.iter().filter(|p| is_foreground(**p)) {
        *counts.entry(p).or_insert(0u64) += 1;
    }
    counts
}

cfg_if::cfg_if! {
    if #[cfg(feature = "rayon")] {
        use rayon::iter::{IntoParallelIterator, ParallelIterator};
    }
}

/// 借助 `rayon`, 按水平切片并行地统计所有非背景标签的体素个数.
///
/// 结果与 [`count_labels`] 完全一致.
#[cfg(feature = "rayon")]
pub fn par_count_labels(data: ArrayView3<'_, u32>) -> BTreeMap<u32, u64> {
    data.axis_iter(Axis(0))
        .into_par_iter()
        .map(|slice| {
            let mut counts = BTreeMap::new();
            for &p in slice.iter().filter(|p| is_foreground(**p)) {
                *counts.entry(p).or_insert(0u64) += 1;
            }
            counts
        })
        .reduce(BTreeMap::new, |mut acc, part| {
            for (label, n) in part {
                *acc.entry(label).or_insert(0) += n;
            }
            acc
        })
}

/// 并发操作部分
#[cfg(feature = "rayon")]
impl LabelVolume {
    /// 借助 `rayon`, 并行地统计所有非背景标签的体素个数.
    #[inline]
    pub fn par_label_counts(&self) -> BTreeMap<u32, u64> {
        par_count_labels(self.data())
    }
}
