//! # 扫描曲线绘制
//!
//! 使用 `plotters` 把所选物理量对扫描变量画成曲线，支持 PNG 和 SVG。
//! 对数采样时横轴取 log10。
//!
//! ## 依赖关系
//! - 被 `commands/sweep.rs` 调用
//! - 使用 `plotters` 渲染图表

use crate::error::{AlloyError, Result};

use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

/// 图表设置
#[derive(Debug, Clone)]
pub struct PlotSettings {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    /// 横轴取 log10
    pub log_x: bool,
    pub width: u32,
    pub height: u32,
    pub use_svg: bool,
}

/// 生成扫描曲线
pub fn generate_sweep_plot(
    data: &[(f64, f64)],
    output_path: &Path,
    settings: &PlotSettings,
) -> Result<()> {
    let points = prepare_points(data, settings.log_x);
    if points.is_empty() {
        return Err(AlloyError::PlotError(
            "No finite data points to plot".to_string(),
        ));
    }

    let size = (settings.width, settings.height);
    if settings.use_svg {
        let root = SVGBackend::new(output_path, size).into_drawing_area();
        draw_chart(&root, &points, settings)?;
        root.present()
            .map_err(|e| AlloyError::PlotError(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, size).into_drawing_area();
        draw_chart(&root, &points, settings)?;
        root.present()
            .map_err(|e| AlloyError::PlotError(e.to_string()))?;
    }
    Ok(())
}

/// 去掉非有限点，必要时横轴取 log10
fn prepare_points(data: &[(f64, f64)], log_x: bool) -> Vec<(f64, f64)> {
    data.iter()
        .filter(|(x, _)| !log_x || *x > 0.0)
        .map(|&(x, y)| if log_x { (x.log10(), y) } else { (x, y) })
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect()
}

/// 数据范围，两侧留 5% 边距；退化时展开为非零宽度
fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    let span = max - min;
    if span > 0.0 {
        (min - 0.05 * span)..(max + 0.05 * span)
    } else {
        let half = if min != 0.0 { 0.05 * min.abs() } else { 1.0 };
        (min - half)..(max + half)
    }
}

/// 绘制曲线
fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    points: &[(f64, f64)],
    settings: &PlotSettings,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| AlloyError::PlotError(format!("{:?}", e)))?;

    let x_range = padded_range(points.iter().map(|(x, _)| *x));
    let y_range = padded_range(points.iter().map(|(_, y)| *y));

    let x_desc = if settings.log_x {
        format!("log10 {}", settings.x_desc)
    } else {
        settings.x_desc.clone()
    };

    let mut chart = ChartBuilder::on(root)
        .caption(&settings.title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(90)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| AlloyError::PlotError(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(settings.y_desc.as_str())
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .y_label_formatter(&|v| format!("{:.3e}", v))
        .draw()
        .map_err(|e| AlloyError::PlotError(format!("{:?}", e)))?;

    let line_color = RGBColor(0, 102, 204);
    chart
        .draw_series(LineSeries::new(
            points.iter().copied(),
            line_color.stroke_width(2),
        ))
        .map_err(|e| AlloyError::PlotError(format!("{:?}", e)))?;

    chart
        .draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 3, line_color.filled())),
        )
        .map_err(|e| AlloyError::PlotError(format!("{:?}", e)))?;

    Ok(())
}
