mod args;
mod result;
mod runner;

use brain_berry::export::Format;
use clap::Parser;
use simple_logger::SimpleLogger;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = args::Args::parse();
    SimpleLogger::new()
        .with_level(args.log_level())
        .init()
        .expect("logger is initialised only once");

    let report = match runner::run(&args) {
        Ok(report) => report,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if args.csv.is_some() && args.csv_path().is_none() {
        log::warn!("无法定位用户主目录, 跳过 CSV 导出");
    }
    let exports = [(args.csv_path(), Format::Csv), (args.tsv.clone(), Format::Tsv)];
    let written = report.analyze(args.quiet).and_then(|_| {
        for (path, format) in exports {
            if let Some(path) = path {
                report.save(&path, format)?;
            }
        }
        match &args.color_table {
            Some(dir) => report.save_color_tables(dir),
            None => Ok(()),
        }
    });
    if let Err(e) = written {
        log::error!("输出结果失败: {e}");
        return ExitCode::FAILURE;
    }

    if report.is_total_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
