//! 命令行参数.

use brain_berry::catalog::Category;
use brain_berry::dataset;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// 计算 volBrain 分割结果中各脑结构的体积.
#[derive(Parser, Debug)]
#[command(name = "volcalc", version)]
pub struct Args {
    /// volBrain 输出目录, 按文件名自动发现各类别文件.
    /// 缺省时使用 `$VOLBRAIN_DIR`, 再缺省时使用 `$HOME/dataset/volbrain`.
    #[arg(long = "dir", short = 'D')]
    pub dir: Option<PathBuf>,

    /// 显式指定 `structures` 标签文件, 覆盖自动发现的结果.
    #[arg(long)]
    pub structures: Option<PathBuf>,

    /// 显式指定 `tissues` 标签文件.
    #[arg(long)]
    pub tissues: Option<PathBuf>,

    /// 显式指定 `lobes` 标签文件.
    #[arg(long)]
    pub lobes: Option<PathBuf>,

    /// 显式指定 `macro` (macrostructures) 标签文件.
    #[arg(long = "macro")]
    pub macro_: Option<PathBuf>,

    /// 只处理这些类别, 以逗号分隔.
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<Category>,

    /// 导出 CSV 文件路径. 只给出 `--csv` 时导出到 `$HOME/volbrain_volumes.csv`.
    #[arg(long, value_name = "OUT")]
    pub csv: Option<Option<PathBuf>>,

    /// 导出 TSV 文件路径.
    #[arg(long)]
    pub tsv: Option<PathBuf>,

    /// 将每个类别的标签颜色表写进该目录.
    #[arg(long = "color-table")]
    pub color_table: Option<PathBuf>,

    /// 各类别文件并行计算.
    #[arg(long, short)]
    pub parallel: bool,

    /// 不打印结果表格, 只打印汇总.
    #[arg(long, short)]
    pub quiet: bool,

    /// 日志详细程度, 可重复 (`-v`, `-vv`).
    #[arg(long, short, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// 显式指定的文件, 按 [`Category::ALL`] 排列.
    pub fn overrides(&self) -> [(Category, Option<PathBuf>); 4] {
        [
            (Category::Structures, self.structures.clone()),
            (Category::Tissues, self.tissues.clone()),
            (Category::Lobes, self.lobes.clone()),
            (Category::Macro, self.macro_.clone()),
        ]
    }

    /// CSV 导出路径. 未给出路径时使用默认路径, 无法定位主目录时返回 `None`.
    pub fn csv_path(&self) -> Option<PathBuf> {
        match &self.csv {
            Some(Some(p)) => Some(p.clone()),
            Some(None) => dataset::default_export_path(),
            None => None,
        }
    }

    /// 是否显式指定了任一文件?
    pub fn has_overrides(&self) -> bool {
        self.overrides().iter().any(|(_, p)| p.is_some())
    }

    /// 对应 `-v` 个数的日志等级.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
