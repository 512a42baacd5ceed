//! 运行时错误.

use std::path::PathBuf;

use crate::Spacing;

/// 标签图像解码错误的具体原因.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    /// nifti 文件读取或解码失败.
    #[error(transparent)]
    Nifti(#[from] nifti::NiftiError),

    /// 数据不是三维体数据. 参数为实际形状.
    #[error("不是三维体数据, 实际形状为 {0:?}")]
    NotVolumetric(Vec<usize>),

    /// 体素值不是合法的标签 (负数、非整数或超出 `u32` 范围). 参数为第一个非法值.
    #[error("非法的标签值 {0}")]
    InvalidLabel(f64),
}

/// 体积提取的运行时错误.
///
/// 任何错误都会中止整次提取, 不会返回部分结果.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// 体素分辨率存在非正 (或非有限) 分量.
    #[error("非法的体素分辨率 {spacing:?}, 每个分量必须为正")]
    InvalidGeometry {
        /// 实际的 `(x, y, z)` 分辨率.
        spacing: Spacing,
    },

    /// 外部标签图像无法读取. 不重试, 原样向上传递.
    #[error("无法读取标签图像 `{}`: {reason}", path.display())]
    UnreadableImage {
        /// 图像路径.
        path: PathBuf,

        /// 具体原因.
        #[source]
        reason: ImageError,
    },
}

/// 体积提取运行时结果.
pub type ExtractResult<T> = Result<T, ExtractError>;
