//! # 电子贡献
//!
//! 仅考虑电子基态简并度，不考虑激发态的热布居。
//!
//! ## 依赖关系
//! - 被 `thermo/aggregate.rs` 调用

use crate::models::{ContributionResult, PhysicalConstants};

/// 计算电子内能（恒为 0）与熵 R ln g
pub fn contribution(degeneracy: u32, constants: &PhysicalConstants) -> ContributionResult {
    ContributionResult {
        internal_energy: 0.0,
        entropy: constants.gas_constant * (degeneracy as f64).ln(),
    }
}
