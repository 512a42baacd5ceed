//! 结果导出.
//!
//! 1. CSV / TSV 表格: 列依次为类别、标签值、结构名称、体积 (mm³, 2 位小数)、
//!   体积 (ml, 4 位小数). 行按 `(类别名, 标签值)` 升序.
//! 2. 标签颜色表: 每行 `<id> <name> <r> <g> <b> <a>`, 通道为 0~255 整数,
//!   首行为背景. 供 3D 场景按标签着色使用.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use itertools::Itertools;

use crate::catalog::Category;
use crate::consts::{EXPORT_COLUMNS, ML_DECIMALS, MM3_DECIMALS};
use crate::{VolumeRecord, VolumeTable};

/// 表格格式.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Format {
    /// 逗号分隔.
    #[default]
    Csv,

    /// 制表符分隔. 可直接粘贴进电子表格.
    Tsv,
}

impl Format {
    /// 列分隔符.
    #[inline]
    pub const fn delimiter(self) -> u8 {
        match self {
            Format::Csv => b',',
            Format::Tsv => b'\t',
        }
    }

    /// 根据文件扩展名推断格式. `.tsv`, `.tab`, `.txt` 为 TSV, 其余均为 CSV.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("tsv" | "tab" | "txt") => Format::Tsv,
            _ => Format::Csv,
        }
    }
}

/// 电子表格软件据此识别 UTF-8 编码.
const UTF8_BOM: &str = "\u{feff}";

/// 按导出顺序排列记录.
fn export_order(table: &VolumeTable) -> impl Iterator<Item = &VolumeRecord> {
    table
        .iter()
        .sorted_by_key(|r| (r.category.as_str(), r.label_id))
}

/// 将 `table` 以 `format` 格式写进 `w` 中, 包括表头.
///
/// 含分隔符或引号的字段会被加上引号.
pub fn write_table<W: Write>(table: &VolumeTable, format: Format, w: W) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(format.delimiter())
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(w);

    wtr.write_record(EXPORT_COLUMNS)?;
    for r in export_order(table) {
        let id = r.label_id.to_string();
        let mm3 = format!("{:.prec$}", r.volume_mm3, prec = MM3_DECIMALS);
        let ml = format!("{:.prec$}", r.volume_ml, prec = ML_DECIMALS);
        wtr.write_record([
            r.category.as_str(),
            id.as_str(),
            r.name.as_str(),
            mm3.as_str(),
            ml.as_str(),
        ])?;
    }
    wtr.flush()
}

/// 将 `table` 格式化为字符串, 例如用于剪贴板. 不带 BOM.
pub fn table_to_string(table: &VolumeTable, format: Format) -> String {
    let mut buf = Vec::with_capacity(64 * (table.len() + 1));
    // 写进 `Vec<u8>` 不会失败.
    write_table(table, format, &mut buf).expect("writing into Vec<u8> never fails");
    String::from_utf8(buf).expect("export output is valid UTF-8")
}

/// 将 `table` 保存到 `path`, 格式由扩展名决定.
#[inline]
pub fn save_table<P: AsRef<Path>>(table: &VolumeTable, path: P) -> io::Result<()> {
    let path = path.as_ref();
    save_table_as(table, path, Format::from_path(path))
}

/// 将 `table` 以 `format` 格式保存到 `path`.
///
/// TSV 文件以 UTF-8 BOM 开头, 以便电子表格软件直接打开.
pub fn save_table_as<P: AsRef<Path>>(
    table: &VolumeTable,
    path: P,
    format: Format,
) -> io::Result<()> {
    let path = path.as_ref();
    let mut w = BufWriter::new(File::create(path)?);
    if format == Format::Tsv {
        w.write_all(UTF8_BOM.as_bytes())?;
    }
    write_table(table, format, &mut w)?;
    w.flush()?;
    log::info!("已导出 {} 条结果到 `{}`", table.len(), path.display());
    Ok(())
}

/// 将 `table` 中 `category` 类别的标签颜色表写进 `w` 中.
pub fn write_color_table<W: Write>(
    table: &VolumeTable,
    category: Category,
    mut w: W,
) -> io::Result<()> {
    writeln!(w, "# volBrain {category} color table")?;
    writeln!(w, "0 Background 0 0 0 0")?;
    for r in table.category_iter(category) {
        let [red, green, blue] = r.color.to_u8();
        writeln!(w, "{} {} {red} {green} {blue} 255", r.label_id, r.name)?;
    }
    Ok(())
}
