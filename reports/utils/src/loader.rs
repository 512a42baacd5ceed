//! 对 `brain-berry::dataset` 的更一层封装. 提供更直接的文件定位.

use brain_berry::catalog::Category;
use brain_berry::dataset;
use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// 获取 volBrain 输出目录.
///
/// 1. 若环境变量 `$VOLBRAIN_DIR` 非空, 则返回其值;
/// 2. 否则, 返回 `$HOME/dataset/volbrain`.
pub fn volbrain_dir_from_env_or_home() -> Option<PathBuf> {
    match env::var("VOLBRAIN_DIR") {
        Ok(d) if !d.is_empty() => Some(PathBuf::from(d)),
        _ => dataset::home_dataset_dir_with(["volbrain"]),
    }
}

/// 在 `dir` 下发现各类别文件, 再用 `overrides` 中显式给出的文件覆盖.
///
/// `dir` 为 `None` 时只使用 `overrides`. 结果按 [`Category::ALL`] 排序.
pub fn collect_files<P: AsRef<Path>>(
    dir: Option<P>,
    overrides: &[(Category, Option<PathBuf>)],
) -> io::Result<Vec<(Category, PathBuf)>> {
    let mut found: Vec<(Category, PathBuf)> = match dir {
        Some(d) => dataset::discover(d)?,
        None => Vec::new(),
    };
    for (category, path) in overrides {
        if let Some(path) = path {
            found.retain(|(c, _)| c != category);
            found.push((*category, path.clone()));
        }
    }
    found.sort_by_key(|(c, _)| c.index());
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::collect_files;
    use brain_berry::catalog::Category;
    use std::path::PathBuf;

    #[test]
    fn test_overrides_only() {
        let files = collect_files(
            None::<PathBuf>,
            &[
                (Category::Macro, Some(PathBuf::from("m.nii"))),
                (Category::Tissues, None),
                (Category::Structures, Some(PathBuf::from("s.nii"))),
            ],
        )
        .unwrap();
        assert_eq!(
            files,
            vec![
                (Category::Structures, PathBuf::from("s.nii")),
                (Category::Macro, PathBuf::from("m.nii")),
            ]
        );
    }
}
