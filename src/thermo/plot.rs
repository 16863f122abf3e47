//! # 温度扫描图表
//!
//! 使用 `plotters` 绘制 Gibbs 自由能热校正随温度的变化。
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 调用
//! - 使用 `models/summary.rs` 的 ThermodynamicSummary

use crate::error::{Result, ThermoError};
use crate::models::ThermodynamicSummary;

use plotters::prelude::*;
use std::path::Path;

/// 生成 G(T) 曲线，扩展名为 .svg 时输出 SVG，否则输出 PNG
pub fn generate_scan_plot(
    summaries: &[ThermodynamicSummary],
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
) -> Result<()> {
    let data: Vec<(f64, f64)> = summaries
        .iter()
        .map(|s| (s.temperature, s.gibbs_hartree))
        .collect();

    if data.len() < 2 {
        return Err(ThermoError::Other(
            "At least two temperatures are required to plot".to_string(),
        ));
    }
    if let Some(s) = summaries.iter().find(|s| !s.gibbs_hartree.is_finite()) {
        return Err(ThermoError::NonFiniteResult {
            quantity: format!("G at T = {} K", s.temperature),
            value: s.gibbs_hartree,
        });
    }

    let use_svg = output_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("svg"))
        .unwrap_or(false);

    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_scan_chart(&root, &data, title)?;
        root.present()
            .map_err(|e| ThermoError::Other(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_scan_chart(&root, &data, title)?;
        root.present()
            .map_err(|e| ThermoError::Other(e.to_string()))?;
    }
    Ok(())
}

/// 绘制图表的核心逻辑
fn draw_scan_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    data: &[(f64, f64)],
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| ThermoError::Other(format!("{:?}", e)))?;

    let x_min = data.iter().map(|(x, _)| *x).fold(f64::INFINITY, f64::min);
    let x_max = data.iter().map(|(x, _)| *x).fold(f64::NEG_INFINITY, f64::max);
    let y_min = data.iter().map(|(_, y)| *y).fold(f64::INFINITY, f64::min);
    let y_max = data.iter().map(|(_, y)| *y).fold(f64::NEG_INFINITY, f64::max);
    let y_margin = ((y_max - y_min).abs() * 0.1).max(1e-4);

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(x_min..x_max, (y_min - y_margin)..(y_max + y_margin))
        .map_err(|e| ThermoError::Other(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("Temperature (K)")
        .y_desc("G correction (Hartree)")
        .y_label_formatter(&|y| format!("{:.4}", y))
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| ThermoError::Other(format!("{:?}", e)))?;

    let line_color = RGBColor(0, 102, 204);
    chart
        .draw_series(LineSeries::new(
            data.iter().copied(),
            line_color.stroke_width(2),
        ))
        .map_err(|e| ThermoError::Other(format!("{:?}", e)))?;

    chart
        .draw_series(
            data.iter()
                .map(|(x, y)| Circle::new((*x, *y), 4, line_color.filled())),
        )
        .map_err(|e| ThermoError::Other(format!("{:?}", e)))?;

    Ok(())
}
