//! # sweep 子命令实现
//!
//! 沿一个变量生成网格，并行求值，导出 CSV/XY 或绘制曲线。
//!
//! ## 依赖关系
//! - 使用 `cli/sweep.rs` 定义的参数
//! - 使用 `sweep/` 模块进行网格、并行求值和导出
//! - 使用 `query/` 引擎

use crate::cli::sweep::{Spacing, SweepArgs, SweepOutputFormat};
use crate::commands::resolve_system;
use crate::error::{AlloyError, Result};
use crate::query::{GapSource, ParameterEngine};
use crate::sweep::{self, export, plot, SweepRange, SweepResult, SweepRunner};
use crate::utils::output;

use std::path::Path;
use tabled::{Table, Tabled};

/// 预览表中显示的最多行数
const PREVIEW_ROWS: usize = 8;

/// 执行参数扫描
pub fn execute(args: SweepArgs) -> Result<()> {
    let system = resolve_system(&args.point.material)?;
    output::print_header(&format!("{} Parameter Sweep", system.name));

    let range = SweepRange::parse(&args.range)?;
    let values = range.values(args.spacing)?;
    output::print_info(&format!(
        "Sweeping {} from {} to {} ({} points, {:?} spacing)",
        args.axis, range.start, range.end, range.points, args.spacing
    ));

    let gap = if args.varshni_gap {
        GapSource::TemperatureCorrected
    } else {
        GapSource::Reference
    };

    let base = args.point.context();
    let engine = ParameterEngine::new(system);
    let runner = SweepRunner::new(args.jobs);
    output::print_info(&format!("Using {} parallel jobs", runner.jobs()));

    let result = runner.run(&values, |value| {
        engine.evaluate_all(&sweep::context_at(&base, args.axis, value), gap)
    })?;

    report_failures(&result);
    if result.succeeded == 0 {
        return Err(AlloyError::InvalidArgument(
            "Every sweep point was rejected, nothing to write".to_string(),
        ));
    }

    let format = args
        .format
        .unwrap_or_else(|| guess_format_from_extension(&args.output));
    let data = sweep::series(&result, args.quantity);

    match format {
        SweepOutputFormat::Csv => export::to_csv(&result, args.axis, &args.output)?,
        SweepOutputFormat::Xy => {
            export::to_xy(&data, system.name, args.axis, args.quantity, &args.output)?
        }
        SweepOutputFormat::Png | SweepOutputFormat::Svg => {
            let settings = plot::PlotSettings {
                title: args
                    .title
                    .clone()
                    .unwrap_or_else(|| format!("{}: {}", system.name, args.quantity.label())),
                x_desc: args.axis.label().to_string(),
                y_desc: args.quantity.label().to_string(),
                log_x: args.spacing == Spacing::Log,
                width: args.width,
                height: args.height,
                use_svg: format == SweepOutputFormat::Svg,
            };
            plot::generate_sweep_plot(&data, &args.output, &settings)?
        }
    }

    print_preview(&data, args.axis.column(), args.quantity.label());

    output::print_separator();
    output::print_written(
        &format!("{} points ({:?})", result.succeeded, format),
        &args.output.display().to_string(),
    );
    output::print_success(&format!(
        "Sweep complete: {} evaluated, {} rejected",
        result.succeeded, result.failed
    ));

    Ok(())
}

/// 汇报被拒绝的点
fn report_failures(result: &SweepResult) {
    if result.failed == 0 {
        return;
    }
    output::print_warning(&format!(
        "{} of {} points were rejected:",
        result.failed,
        result.total()
    ));
    for (value, err) in result.failures().take(10) {
        output::print_error(&format!("  {:e}: {} (status {})", value, err, err.status()));
    }
    if result.failed > 10 {
        output::print_warning(&format!("  ... and {} more", result.failed - 10));
    }
}

/// 从文件扩展名推断输出格式
fn guess_format_from_extension(path: &Path) -> SweepOutputFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("png") => SweepOutputFormat::Png,
        Some("svg") => SweepOutputFormat::Svg,
        Some("xy") | Some("dat") | Some("txt") => SweepOutputFormat::Xy,
        _ => SweepOutputFormat::Csv,
    }
}

/// 打印首尾若干行
fn print_preview(data: &[(f64, f64)], axis: &str, quantity: &str) {
    #[derive(Tabled)]
    struct PreviewRow {
        #[tabled(rename = "#")]
        index: usize,
        #[tabled(rename = "Axis")]
        value: String,
        #[tabled(rename = "Quantity")]
        quantity: String,
    }

    let half = PREVIEW_ROWS / 2;
    let rows: Vec<PreviewRow> = data
        .iter()
        .enumerate()
        .filter(|(i, _)| data.len() <= PREVIEW_ROWS || *i < half || *i >= data.len() - half)
        .map(|(i, (v, q))| PreviewRow {
            index: i + 1,
            value: format!("{:.6e}", v),
            quantity: format!("{:.6e}", q),
        })
        .collect();

    if !rows.is_empty() {
        output::print_info(&format!("{} vs {}", quantity, axis));
        println!("{}", Table::new(&rows));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_format() {
        assert_eq!(guess_format_from_extension(Path::new("a.PNG")), SweepOutputFormat::Png);
        assert_eq!(guess_format_from_extension(Path::new("a.svg")), SweepOutputFormat::Svg);
        assert_eq!(guess_format_from_extension(Path::new("a.dat")), SweepOutputFormat::Xy);
        assert_eq!(guess_format_from_extension(Path::new("a.csv")), SweepOutputFormat::Csv);
        assert_eq!(guess_format_from_extension(Path::new("noext")), SweepOutputFormat::Csv);
    }
}
