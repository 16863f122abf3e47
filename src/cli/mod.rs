//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `gibbs`: 单一温度下的 Gibbs 自由能热校正
//! - `scan`: 温度扫描
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: molecule, gibbs, scan

pub mod gibbs;
pub mod molecule;
pub mod scan;

use clap::{Parser, Subcommand};

/// thermocorr - RRHO 热校正计算
#[derive(Parser)]
#[command(name = "thermocorr")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Thermal correction to Gibbs free energy from RRHO partition functions", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Compute the thermal correction to Gibbs free energy at one temperature
    Gibbs(gibbs::GibbsArgs),

    /// Scan the thermal correction over a temperature range
    Scan(scan::ScanArgs),
}
