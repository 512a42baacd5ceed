//! 程序运行函数.

use crate::args::Args;
use crate::result::Report;
use brain_berry::catalog::Category;
use brain_berry::dataset::volume_loader;
use brain_berry::{extract_file, ExtractResult, VolumeTable};
use std::io;
use std::path::PathBuf;
use std::thread;
use utils::loader;

/// 运行前的配置错误. 单个文件的提取失败不属于此类.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// 既没有给出目录也没有显式文件, 且无法定位默认目录.
    #[error("未指定 volBrain 输出目录, 且无法定位用户主目录")]
    NoDirectory,

    /// 目录读取失败.
    #[error("读取目录失败: {0}")]
    Io(#[from] io::Error),

    /// 没有找到任何可处理的文件.
    #[error("没有找到任何标签文件, 请至少指定一个")]
    NoFiles,
}

/// 确定需要处理的 `(类别, 文件)` 列表.
fn plan(args: &Args) -> Result<Vec<(Category, PathBuf)>, RunError> {
    let dir = match &args.dir {
        Some(d) => Some(d.clone()),
        // 显式给出文件时不强求默认目录存在.
        None if args.has_overrides() => None,
        None => Some(loader::volbrain_dir_from_env_or_home().ok_or(RunError::NoDirectory)?),
    };

    let mut files = loader::collect_files(dir, &args.overrides())?;
    if !args.only.is_empty() {
        files.retain(|(c, _)| args.only.contains(c));
    }
    if files.is_empty() {
        return Err(RunError::NoFiles);
    }
    Ok(files)
}

/// 逐个文件计算.
fn run_sequential(files: &[(Category, PathBuf)]) -> Vec<(Category, ExtractResult<VolumeTable>)> {
    volume_loader(files.iter().cloned()).collect()
}

/// 每个文件一个线程. 各次提取互不共享状态, 因此无需加锁.
fn run_parallel(files: &[(Category, PathBuf)]) -> Vec<(Category, ExtractResult<VolumeTable>)> {
    thread::scope(|s| {
        let handles: Vec<_> = files
            .iter()
            .map(|(c, p)| s.spawn(move || (*c, extract_file(p, *c))))
            .collect();
        handles
            .into_iter()
            .map(|th| th.join().expect("Thread joining error"))
            .collect()
    })
}

/// 实际运行.
pub fn run(args: &Args) -> Result<Report, RunError> {
    let files = plan(args)?;
    for (category, path) in files.iter() {
        log::info!("{category}: `{}`", path.display());
    }

    let outcomes = if args.parallel && utils::cpus() > 1 && files.len() > 1 {
        run_parallel(&files)
    } else {
        run_sequential(&files)
    };

    let mut report = Report::default();
    for ((category, result), (_, path)) in outcomes.into_iter().zip(files) {
        match result {
            Ok(table) => {
                log::info!("{category}: {} 个结构", table.len());
                report.table.merge(table);
            }
            Err(e) => {
                // 单个类别失败不影响其它类别.
                log::error!("{category} 计算失败: {e}");
                report.failures.push((category, path, e));
            }
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::{plan, run, RunError};
    use crate::args::Args;
    use brain_berry::catalog::Category;
    use clap::Parser;
    use std::fs;

    #[test]
    fn test_plan_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let d = dir.path().to_str().unwrap();
        let args = Args::parse_from(["volcalc", "-D", d]);
        assert!(matches!(plan(&args), Err(RunError::NoFiles)));
    }

    #[test]
    fn test_run_isolates_failures() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["native_tissues_j.nii", "native_lobes_j.nii.gz"] {
            fs::write(dir.path().join(name), b"broken").unwrap();
        }
        let d = dir.path().to_str().unwrap();

        for parallel in [false, true] {
            let mut argv = vec!["volcalc", "-D", d];
            if parallel {
                argv.push("-p");
            }
            let report = run(&Args::parse_from(argv)).unwrap();
            assert!(report.table.is_empty());
            let failed: Vec<Category> = report.failures.iter().map(|(c, ..)| *c).collect();
            assert_eq!(failed, vec![Category::Tissues, Category::Lobes]);
        }
    }

    #[test]
    fn test_plan_only_filter() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["native_tissues_j.nii", "native_lobes_j.nii"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        let d = dir.path().to_str().unwrap();
        let args = Args::parse_from(["volcalc", "-D", d, "--only", "lobes"]);
        let files = plan(&args).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].0, Category::Lobes);
    }
}
