//! # 批量处理模块
//!
//! 对相互独立的计算单元（如扫描中的各个温度点）做并行求值。
//!
//! ## 功能
//! - 并行处理，保持输入顺序
//! - 进度反馈与失败统计
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod runner;

pub use runner::{BatchResult, BatchRunner, ProcessResult};
