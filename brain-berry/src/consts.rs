//! 通用常量.

/// 标签值.
pub mod label {
    /// volBrain 标签文件中, 背景的体素值. 背景永远不会作为结构出现.
    pub const BACKGROUND: u32 = 0;

    /// 体素是否是背景?
    #[inline]
    pub const fn is_background(p: u32) -> bool {
        p == BACKGROUND
    }

    /// 体素是否属于某个结构?
    #[inline]
    pub const fn is_foreground(p: u32) -> bool {
        !is_background(p)
    }
}

/// 1 毫升对应的立方毫米数.
pub const MM3_PER_ML: f64 = 1000.0;

/// 导出表格的列名, 依次为类别、标签值、结构名称、体积 (mm³)、体积 (ml).
pub const EXPORT_COLUMNS: [&str; 5] = ["Category", "Label_ID", "Yapi_Adi", "Hacim_mm3", "Hacim_ml"];

/// 导出时 mm³ 体积保留的小数位数.
pub const MM3_DECIMALS: usize = 2;

/// 导出时 ml 体积保留的小数位数.
pub const ML_DECIMALS: usize = 4;

/// 默认导出文件名, 位于用户主目录下.
pub const DEFAULT_EXPORT_FILENAME: &str = "volbrain_volumes.csv";
