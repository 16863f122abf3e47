//! # gibbs 子命令 CLI 定义
//!
//! 单一温度下的 Gibbs 自由能热校正。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/gibbs.rs`

use super::molecule::{CalcArgs, MoleculeArgs};
use clap::Args;
use std::path::PathBuf;

/// gibbs 子命令参数
#[derive(Args, Debug)]
pub struct GibbsArgs {
    #[command(flatten)]
    pub molecule: MoleculeArgs,

    #[command(flatten)]
    pub calc: CalcArgs,

    /// Temperature in K
    #[arg(
        short = 'T',
        long,
        default_value_t = 298.15,
        allow_hyphen_values = true,
        env = "THERMOCORR_TEMPERATURE"
    )]
    pub temperature: f64,

    /// Print a per-contribution breakdown table
    #[arg(long, default_value_t = false)]
    pub table: bool,

    /// Save the full summary to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Print input summary before the results
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
