//! 体素几何.

use crate::volume::{ExtractError, ExtractResult};
use crate::Spacing;

/// 单个标签图像的体素几何信息.
///
/// 构造时保证三个方向的分辨率均为正的有限值, 因此体素体积永远大于 0.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoxelGeometry {
    spacing: Spacing,
}

impl VoxelGeometry {
    /// 由 `(x, y, z)` 三个方向的体素分辨率 (毫米) 创建.
    ///
    /// 任一分量非正或不是有限值时返回 [`ExtractError::InvalidGeometry`].
    pub fn new(spacing: Spacing) -> ExtractResult<Self> {
        let (x, y, z) = spacing;
        if [x, y, z].iter().all(|s| s.is_finite() && *s > 0.0) {
            Ok(Self { spacing })
        } else {
            Err(ExtractError::InvalidGeometry { spacing })
        }
    }

    /// 各向同性的 1mm 体素.
    #[inline]
    pub const fn unit() -> Self {
        Self {
            spacing: (1.0, 1.0, 1.0),
        }
    }

    /// 获取 `(x, y, z)` 体素分辨率, 以毫米为单位.
    #[inline]
    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    /// 获取体素的实际体积值, 以立方毫米为单位.
    #[inline]
    pub fn voxel_volume_mm3(&self) -> f64 {
        let (x, y, z) = self.spacing;
        x * y * z
    }
}

impl Default for VoxelGeometry {
    #[inline]
    fn default() -> Self {
        Self::unit()
    }
}

#[cfg(test)]
mod tests {
    use super::VoxelGeometry;
    use crate::ExtractError;

    #[test]
    fn test_invalid_spacing() {
        for spacing in [
            (0.0, 1.0, 1.0),
            (1.0, -1.0, 1.0),
            (1.0, 1.0, f64::NAN),
            (1.0, f64::INFINITY, 1.0),
        ] {
            let err = VoxelGeometry::new(spacing).unwrap_err();
            assert!(matches!(err, ExtractError::InvalidGeometry { .. }));
        }
    }

    #[test]
    fn test_voxel_volume() {
        let g = VoxelGeometry::new((0.5, 2.0, 1.5)).unwrap();
        assert!((g.voxel_volume_mm3() - 1.5).abs() < 1e-12);

        assert_eq!(VoxelGeometry::default().voxel_volume_mm3(), 1.0);
        assert_eq!(VoxelGeometry::unit().spacing(), (1.0, 1.0, 1.0));
    }
}
