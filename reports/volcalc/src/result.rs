//! 计算结果.

use brain_berry::catalog::Category;
use brain_berry::export::{self, Format};
use brain_berry::{ExtractError, VolumeTable};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// 一次运行的最终结果: 所有成功类别的合并结果集, 以及失败的类别.
#[derive(Debug, Default)]
pub struct Report {
    /// 合并后的结果集.
    pub table: VolumeTable,

    /// 失败的 `(类别, 文件, 错误)`.
    pub failures: Vec<(Category, PathBuf, ExtractError)>,
}

/// 将类别汇总写进 `w` 中.
fn describe_into<W: Write>(table: &VolumeTable, w: &mut W) -> io::Result<()> {
    const S4: &str = "    ";

    writeln!(w, "Category summary:")?;
    for s in table.summary() {
        writeln!(
            w,
            "{S4}{}: {} structures, total {:.2} ml",
            s.category.as_str().to_uppercase(),
            s.structures,
            s.total_ml
        )?;
    }
    write!(w, "{S4}{} structures in total", table.len())?;
    Ok(())
}

impl Report {
    /// 是否所有类别都失败了?
    pub fn is_total_failure(&self) -> bool {
        self.table.is_empty() && !self.failures.is_empty()
    }

    /// 打印运行结果.
    pub fn analyze(&self, quiet: bool) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        utils::sep_to(&mut out)?;
        if !quiet {
            export::write_table(&self.table, Format::Tsv, &mut out)?;
            utils::sep_to(&mut out)?;
        }
        describe_into(&self.table, &mut out)?;
        writeln!(out)?;
        for (category, path, e) in self.failures.iter() {
            writeln!(out, "FAILED {category}: `{}`: {e}", path.display())?;
        }
        utils::sep_to(&mut out)
    }

    /// 导出为 `path`, 格式固定为 `format`.
    #[inline]
    pub fn save(&self, path: &Path, format: Format) -> io::Result<()> {
        export::save_table_as(&self.table, path, format)
    }

    /// 将每个类别的颜色表写进目录 `dir`, 文件名为 `volBrain_<category>_ColorTable.ctbl`.
    pub fn save_color_tables(&self, dir: &Path) -> io::Result<()> {
        fs::create_dir_all(dir)?;
        for category in self.table.categories() {
            let path = dir.join(format!("volBrain_{category}_ColorTable.ctbl"));
            let mut w = io::BufWriter::new(fs::File::create(&path)?);
            export::write_color_table(&self.table, category, &mut w)?;
            w.flush()?;
            log::info!("已写出颜色表 `{}`", path.display());
        }
        Ok(())
    }
}
