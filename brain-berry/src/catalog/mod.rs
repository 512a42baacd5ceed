//! 标签目录.
//!
//! 提供 `(类别, 标签值) -> (结构名称, 显示颜色)` 的静态只读映射. 四个类别的表格均在编译期确定,
//! 运行时只做二分查找, 因此天然线程安全.
//!
//! 标签 0 保留为背景, 不在任何表格中出现.

mod structures;
mod tables;

use std::fmt;
use std::str::FromStr;

/// 分割粒度, 即标签文件所属的类别. 每个类别有自己独立的标签表.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    /// 全脑皮层下结构 + 皮层分区, 约 150 个标签.
    Structures,

    /// 7 类脑组织.
    Tissues,

    /// 12 个脑叶区域.
    Lobes,

    /// 6 个宏观结构.
    Macro,
}

impl Category {
    /// 全部类别, 按 volBrain 输出的惯常顺序排列.
    pub const ALL: [Category; 4] = [
        Category::Structures,
        Category::Tissues,
        Category::Lobes,
        Category::Macro,
    ];

    /// 类别的字符串形式.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Structures => "structures",
            Category::Tissues => "tissues",
            Category::Lobes => "lobes",
            Category::Macro => "macro",
        }
    }

    /// 类别在 [`Category::ALL`] 中的下标.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 该类别的标签表, 按标签值升序排列.
    #[inline]
    fn table(self) -> &'static [(u32, &'static str, Rgb)] {
        match self {
            Category::Structures => structures::STRUCTURES,
            Category::Tissues => tables::TISSUES,
            Category::Lobes => tables::LOBES,
            Category::Macro => tables::MACRO,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 从字符串解析 [`Category`] 错误.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("未知的标签类别 `{0}`, 可选值为 structures, tissues, lobes, macro")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCategoryError(s.to_owned()))
    }
}

/// RGB 显示颜色. 每个通道取值于 `[0.0, 1.0]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// 红色通道.
    pub r: f64,

    /// 绿色通道.
    pub g: f64,

    /// 蓝色通道.
    pub b: f64,
}

impl Rgb {
    /// 创建颜色. 调用者保证每个通道位于 `[0.0, 1.0]`.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// 三个通道是否都位于 `[0.0, 1.0]`?
    #[inline]
    pub fn is_valid(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }

    /// 转换为 8-bit 通道值.
    #[inline]
    pub fn to_u8(self) -> [u8; 3] {
        [self.r, self.g, self.b].map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

/// 标签目录中的一项.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CatalogEntry {
    /// 所属类别.
    pub category: Category,

    /// 标签值, 在类别内唯一, 永远大于 0.
    pub label_id: u32,

    /// 结构名称 (ASCII 标识符).
    pub name: &'static str,

    /// 显示颜色.
    pub color: Rgb,
}

/// 在 `category` 的标签表中查找 `label_id`.
///
/// 未收录的标签 (包括背景 0) 返回 `None`, 由调用者决定回退名称和颜色.
pub fn lookup(category: Category, label_id: u32) -> Option<CatalogEntry> {
    let table = category.table();
    let index = table.binary_search_by_key(&label_id, |(id, ..)| *id).ok()?;
    let (label_id, name, color) = table[index];
    Some(CatalogEntry {
        category,
        label_id,
        name,
        color,
    })
}

/// 按标签值升序迭代 `category` 的全部目录项.
pub fn entries(category: Category) -> impl ExactSizeIterator<Item = CatalogEntry> {
    category
        .table()
        .iter()
        .map(move |&(label_id, name, color)| CatalogEntry {
            category,
            label_id,
            name,
            color,
        })
}

#[cfg(test)]
mod tests {
    use super::{entries, lookup, Category, Rgb};

    #[test]
    fn test_tables_sorted_and_without_background() {
        for category in Category::ALL {
            let ids: Vec<u32> = entries(category).map(|e| e.label_id).collect();
            assert!(ids.windows(2).all(|w| w[0] < w[1]), "{category} 未排序");
            assert!(!ids.contains(&0));
            assert!(lookup(category, 0).is_none());
        }
    }

    #[test]
    fn test_small_tables_complete() {
        for (category, n) in [
            (Category::Tissues, 7),
            (Category::Lobes, 12),
            (Category::Macro, 6),
        ] {
            assert_eq!(entries(category).len(), n);
            for id in 1..=n as u32 {
                assert!(lookup(category, id).is_some(), "{category}:{id} 缺失");
            }
            assert!(lookup(category, n as u32 + 1).is_none());
        }
    }

    #[test]
    fn test_all_colors_valid() {
        for category in Category::ALL {
            assert!(entries(category).all(|e| e.color.is_valid()));
        }
    }

    #[test]
    fn test_tissue_lookup() {
        let csf = lookup(Category::Tissues, 1).unwrap();
        assert_eq!(csf.name, "CSF");
        assert_eq!(csf.color, Rgb::new(0.3, 0.6, 0.9));

        let bs = lookup(Category::Macro, 6).unwrap();
        assert_eq!(bs.name, "Brainstem");
        assert_eq!(bs.color, Rgb::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_unknown_labels() {
        assert!(lookup(Category::Macro, 9999).is_none());
        assert!(lookup(Category::Structures, 1).is_none());
        assert!(lookup(Category::Structures, 110).is_none());
    }

    #[test]
    fn test_category_parse() {
        for c in Category::ALL {
            assert_eq!(c.as_str().parse::<Category>().unwrap(), c);
            assert_eq!(c.to_string(), c.as_str());
        }
        assert_eq!(" Macro ".parse::<Category>().unwrap(), Category::Macro);
        assert!("macrostructures".parse::<Category>().is_err());
    }

    #[test]
    fn test_rgb_to_u8() {
        assert_eq!(Rgb::new(0.0, 0.5, 1.0).to_u8(), [0, 128, 255]);
    }
}
