//! # thermocorr - Gibbs 自由能热校正
//!
//! 在理想气体 / 刚性转子 / 谐振子近似下，由分子质量、主转动惯量与振动频率
//! 计算平动、转动、振动、电子配分函数贡献，得到 Gibbs 自由能热校正。
//!
//! ## 子命令
//! - `gibbs` - 单一温度下的热校正（默认输出与参考脚本逐行一致）
//! - `scan`  - 温度扫描（并行计算，可导出 CSV 与曲线）
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── thermo/    (配分函数与汇总)
//!   │     ├── batch/     (并行执行)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod thermo;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
