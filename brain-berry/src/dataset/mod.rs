//! 数据集操作.
//!
//! volBrain 为每个被试输出一组 nifti 文件, 文件名中包含 `native` 与类别关键字,
//! 例如 `native_structures_job1.nii.gz`, `native_macrostructures_job1.nii.gz`.
//! 本模块按该约定在目录中发现各类别文件, 并提供迭代器风格的批量提取.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::catalog::Category;
use crate::consts::DEFAULT_EXPORT_FILENAME;
use crate::volume::{extract_file, ExtractResult, VolumeTable};

/// 获取 `{用户主目录}/dataset` 目录.
pub fn home_dataset_dir() -> Option<PathBuf> {
    let mut ans = dirs::home_dir()?;
    ans.push("dataset");
    Some(ans)
}

/// 获取 `{用户主目录}/dataset` 目录下给定继续项组成的全路径.
pub fn home_dataset_dir_with<P: AsRef<Path>, I: IntoIterator<Item = P>>(it: I) -> Option<PathBuf> {
    let mut ans = home_dataset_dir()?;
    ans.extend(it);
    Some(ans)
}

/// 获取默认导出路径 `{用户主目录}/volbrain_volumes.csv`.
pub fn default_export_path() -> Option<PathBuf> {
    let mut ans = dirs::home_dir()?;
    ans.push(DEFAULT_EXPORT_FILENAME);
    Some(ans)
}

/// 文件名是否是 nifti 文件 (`.nii` 或 `.nii.gz`)?
fn is_nifti(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    name.ends_with(".nii") || name.ends_with(".nii.gz")
}

impl Category {
    /// 按 volBrain 命名约定, 由文件名推断类别.
    ///
    /// 文件名 (不区分大小写) 必须包含 `native`, 且:
    ///
    /// 1. 包含 `structures` 但不包含 `macro` → `structures`;
    /// 2. 包含 `tissues` → `tissues`;
    /// 3. 包含 `lobes` → `lobes`;
    /// 4. 包含 `macrostructures` → `macro`.
    ///
    /// 按上述顺序匹配, 都不满足时返回 `None`.
    pub fn from_filename(name: &str) -> Option<Category> {
        let name = name.to_ascii_lowercase();
        if !name.contains("native") {
            return None;
        }
        if name.contains("structures") && !name.contains("macro") {
            Some(Category::Structures)
        } else if name.contains("tissues") {
            Some(Category::Tissues)
        } else if name.contains("lobes") {
            Some(Category::Lobes)
        } else if name.contains("macrostructures") {
            Some(Category::Macro)
        } else {
            None
        }
    }
}

/// 在目录 `dir` (不递归) 下发现各类别的 nifti 标签文件.
///
/// 每个类别至多返回一个文件, 结果按 [`Category::ALL`] 排序.
/// 同一类别有多个候选时, 取文件名字典序最大者.
pub fn discover<P: AsRef<Path>>(dir: P) -> io::Result<Vec<(Category, PathBuf)>> {
    let mut names: Vec<(String, PathBuf)> = fs::read_dir(dir.as_ref())?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter_map(|path| {
            let name = path.file_name()?.to_str()?.to_owned();
            Some((name, path))
        })
        .filter(|(name, _)| is_nifti(name))
        .collect();
    names.sort();

    let mut found: [Option<PathBuf>; 4] = Default::default();
    for (name, path) in names {
        if let Some(category) = Category::from_filename(&name) {
            log::debug!("发现 {category} 文件 `{name}`");
            found[category.index()] = Some(path);
        }
    }

    Ok(Category::ALL
        .into_iter()
        .zip(found)
        .filter_map(|(c, p)| Some((c, p?)))
        .collect())
}

/// 从 `(类别, 文件路径)` 列表创建体积提取加载器.
pub fn volume_loader<I: IntoIterator<Item = (Category, PathBuf)>>(files: I) -> VolumeLoader {
    let mut data: Vec<(Category, PathBuf)> = files.into_iter().collect();
    data.reverse();

    VolumeLoader { data_rev: data }
}

/// 批量体积提取加载器. 每次迭代处理一个 `(文件, 类别)`.
///
/// 单个文件失败只体现在该项的 `Result` 中, 不影响后续文件.
#[derive(Debug)]
pub struct VolumeLoader {
    data_rev: Vec<(Category, PathBuf)>,
}

impl Iterator for VolumeLoader {
    type Item = (Category, ExtractResult<VolumeTable>);

    fn next(&mut self) -> Option<Self::Item> {
        let (category, path) = self.data_rev.pop()?;
        Some((category, extract_file(path, category)))
    }
}

impl ExactSizeIterator for VolumeLoader {
    #[inline]
    fn len(&self) -> usize {
        self.data_rev.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{discover, volume_loader};
    use crate::catalog::Category;
    use crate::ExtractError;
    use std::fs;

    #[test]
    fn test_category_from_filename() {
        let c = Category::from_filename;
        assert_eq!(c("native_structures_job42.nii.gz"), Some(Category::Structures));
        assert_eq!(c("NATIVE_Tissues_job42.nii"), Some(Category::Tissues));
        assert_eq!(c("native_lobes_job42.nii.gz"), Some(Category::Lobes));
        assert_eq!(c("native_macrostructures_job42.nii.gz"), Some(Category::Macro));
        assert_eq!(c("mni_structures_job42.nii.gz"), None);
        assert_eq!(c("native_t1_job42.nii.gz"), None);
    }

    #[test]
    fn test_discover() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "native_lobes_job1.nii.gz",
            "native_structures_job1.nii.gz",
            "native_macrostructures_job1.nii.gz",
            "native_structures_job1.csv",
            "mni_tissues_job1.nii.gz",
            "report_job1.pdf",
        ] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        fs::create_dir(dir.path().join("native_tissues_dir.nii")).unwrap();

        let found = discover(dir.path()).unwrap();
        let categories: Vec<Category> = found.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            categories,
            vec![Category::Structures, Category::Lobes, Category::Macro]
        );
        assert!(found[0].1.ends_with("native_structures_job1.nii.gz"));
        assert!(found[2].1.ends_with("native_macrostructures_job1.nii.gz"));
    }

    #[test]
    fn test_loader_isolates_failures() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![
            (Category::Tissues, dir.path().join("a.nii")),
            (Category::Lobes, dir.path().join("b.nii")),
        ];
        let mut loader = volume_loader(files);
        assert_eq!(loader.len(), 2);

        let (c, r) = loader.next().unwrap();
        assert_eq!(c, Category::Tissues);
        assert!(matches!(r, Err(ExtractError::UnreadableImage { .. })));

        let (c, r) = loader.next().unwrap();
        assert_eq!(c, Category::Lobes);
        assert!(r.is_err());
        assert!(loader.next().is_none());
    }
}
