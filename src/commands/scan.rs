//! # scan 命令实现
//!
//! 对同一分子在一系列温度下计算 Gibbs 自由能热校正。
//!
//! ## 功能
//! - 解析温度范围与步长
//! - 各温度点并行计算（rayon）
//! - 终端表格输出
//! - 可选 CSV 导出与 G(T) 曲线
//!
//! ## 依赖关系
//! - 使用 `cli/scan.rs` 定义的参数
//! - 使用 `batch/` 模块进行并行计算
//! - 使用 `thermo/` 模块进行计算、导出与绘图

use crate::batch::{BatchRunner, ProcessResult};
use crate::cli::scan::ScanArgs;
use crate::error::{Result, ThermoError};
use crate::models::{ThermodynamicConditions, ThermodynamicSummary};
use crate::thermo::{export, plot};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 扫描结果行
#[derive(Debug, Clone, Tabled)]
struct ScanRow {
    #[tabled(rename = "T (K)")]
    temperature: String,
    #[tabled(rename = "S (J/mol·K)")]
    entropy: String,
    #[tabled(rename = "H (kJ/mol)")]
    enthalpy: String,
    #[tabled(rename = "G (kJ/mol)")]
    gibbs_kj: String,
    #[tabled(rename = "G (Hartree)")]
    gibbs_hartree: String,
}

impl From<&ThermodynamicSummary> for ScanRow {
    fn from(s: &ThermodynamicSummary) -> Self {
        ScanRow {
            temperature: format!("{:.2}", s.temperature),
            entropy: format!("{:.6}", s.entropy),
            enthalpy: format!("{:.3}", s.enthalpy / 1000.0),
            gibbs_kj: format!("{:.3}", s.gibbs_kj_per_mol()),
            gibbs_hartree: format!("{:.6}", s.gibbs_hartree),
        }
    }
}

/// 执行温度扫描
pub fn execute(args: ScanArgs) -> Result<()> {
    output::print_header("Temperature Scan of the Gibbs Free Energy Correction");

    let molecule = args.molecule.to_molecule()?;
    let calculator = args.calc.calculator();
    let base = ThermodynamicConditions::new(
        ThermodynamicConditions::STANDARD_TEMPERATURE,
        args.calc.pressure,
    );

    let temperatures = parse_temperature_range(&args.range, args.step)?;

    let runner = BatchRunner::new(args.jobs);
    output::print_info(&format!(
        "{} temperatures from {} K to {} K using {} threads",
        temperatures.len(),
        temperatures[0],
        temperatures[temperatures.len() - 1],
        runner.jobs()
    ));

    let result = runner.run(&temperatures, |&t| {
        match calculator.calculate(&molecule, &base.at_temperature(t)) {
            Ok(summary) => ProcessResult::Success(summary),
            Err(e) => ProcessResult::Failed(format!("T = {} K", t), e.to_string()),
        }
    })?;

    if !result.failures.is_empty() {
        output::print_warning(&format!(
            "{} of {} temperatures failed:",
            result.failed,
            result.total()
        ));
        for (label, err) in result.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", label, err));
        }
        if result.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
        }
    }

    let summaries = result.items;
    if summaries.is_empty() {
        return Err(ThermoError::Other(
            "No temperature point could be computed".to_string(),
        ));
    }

    let rows: Vec<ScanRow> = summaries.iter().map(ScanRow::from).collect();
    println!("{}", Table::new(&rows));

    let warnings = non_finite_warnings(&summaries);
    for warning in warnings.iter().take(10) {
        output::print_warning(warning);
    }
    if warnings.len() > 10 {
        output::print_warning(&format!("  ... and {} more", warnings.len() - 10));
    }

    if let Some(ref path) = args.output {
        export::to_csv(&summaries, path)?;
        output::print_success(&format!("Scan saved to '{}'", path.display()));
    }

    if let Some(ref path) = args.plot {
        plot::generate_scan_plot(&summaries, path, &args.title, args.width, args.height)?;
        output::print_success(&format!("Plot saved to '{}'", path.display()));
    }

    output::print_done(&format!(
        "Computed {} of {} temperatures",
        summaries.len(),
        temperatures.len()
    ));

    Ok(())
}

/// 单次扫描的温度点上限
const MAX_SCAN_POINTS: usize = 100_000;

/// 解析温度范围字符串 (e.g., "200-500") 并按步长展开，端点在步长整除时包含在内
fn parse_temperature_range(range: &str, step: f64) -> Result<Vec<f64>> {
    let parts: Vec<&str> = range.split('-').map(str::trim).collect();
    if parts.len() != 2 {
        return Err(ThermoError::InvalidRange(range.to_string()));
    }

    let start: f64 = parts[0]
        .parse()
        .map_err(|_| ThermoError::InvalidRange(range.to_string()))?;
    let end: f64 = parts[1]
        .parse()
        .map_err(|_| ThermoError::InvalidRange(range.to_string()))?;

    if !(start.is_finite() && end.is_finite()) || end < start {
        return Err(ThermoError::InvalidRange(range.to_string()));
    }
    if step <= 0.0 || !step.is_finite() {
        return Err(ThermoError::InvalidArgument(format!(
            "Temperature step must be positive, got {}",
            step
        )));
    }

    let intervals = ((end - start) / step + 1e-9).floor();
    if intervals >= MAX_SCAN_POINTS as f64 {
        return Err(ThermoError::InvalidArgument(format!(
            "Range '{}' with step {} K gives more than {} temperatures",
            range, step, MAX_SCAN_POINTS
        )));
    }

    let n = intervals as usize;
    Ok((0..=n).map(|i| start + i as f64 * step).collect())
}

/// 列出含非有限值的温度点
fn non_finite_warnings(summaries: &[ThermodynamicSummary]) -> Vec<String> {
    summaries
        .iter()
        .filter_map(|s| {
            s.check_finite()
                .err()
                .map(|e| format!("T = {} K: {}", s.temperature, e))
        })
        .collect()
}
