//! # scan 子命令 CLI 定义
//!
//! 对同一分子在一系列温度下并行计算热校正。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/scan.rs`

use super::molecule::{CalcArgs, MoleculeArgs};
use clap::Args;
use std::path::PathBuf;

/// scan 子命令参数
#[derive(Args, Debug)]
pub struct ScanArgs {
    #[command(flatten)]
    pub molecule: MoleculeArgs,

    #[command(flatten)]
    pub calc: CalcArgs,

    /// Temperature range in K (e.g., "200-500")
    #[arg(short, long, default_value = "200-500")]
    pub range: String,

    /// Temperature step in K
    #[arg(short, long, default_value_t = 25.0)]
    pub step: f64,

    /// Save the scan to a CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Plot G correction vs temperature (PNG, or SVG by extension)
    #[arg(long)]
    pub plot: Option<PathBuf>,

    /// Title for the plot
    #[arg(long, default_value = "Thermal correction to Gibbs free energy")]
    pub title: String,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,
}
