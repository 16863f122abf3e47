//! # 振动贡献
//!
//! 谐振子配分函数，对所有振动模式求和（含零点能）。
//!
//! ## 说明
//! 频率为零或负（虚频）时 x ≤ 0，结果为 NaN/inf，此处不做处理；
//! 严格模式下由 `thermo/validate.rs` 提前拦截。
//!
//! ## 依赖关系
//! - 被 `thermo/aggregate.rs` 调用

use crate::models::{ContributionResult, PhysicalConstants, ThermodynamicConditions};

/// 特征振动温度 θ = h c ν / k_B (K)
pub fn characteristic_temperature(wavenumber: f64, constants: &PhysicalConstants) -> f64 {
    constants.planck * constants.speed_of_light * wavenumber / constants.boltzmann
}

/// 单个振动模式的内能与熵
pub fn mode_contribution(
    wavenumber: f64,
    conditions: &ThermodynamicConditions,
    constants: &PhysicalConstants,
) -> ContributionResult {
    let r = constants.gas_constant;
    let theta = characteristic_temperature(wavenumber, constants);
    let x = theta / conditions.temperature;
    let boltz = x.exp_m1();

    ContributionResult {
        internal_energy: r * theta / boltz + 0.5 * r * theta,
        entropy: r * (x / boltz - (-(-x).exp()).ln_1p()),
    }
}

/// 所有振动模式之和
pub fn contribution(
    wavenumbers: &[f64],
    conditions: &ThermodynamicConditions,
    constants: &PhysicalConstants,
) -> ContributionResult {
    wavenumbers
        .iter()
        .map(|&nu| mode_contribution(nu, conditions, constants))
        .fold(ContributionResult::default(), |acc, mode| acc + mode)
}

/// 零点能 Σ ½ R θ (J/mol)
pub fn zero_point_energy(wavenumbers: &[f64], constants: &PhysicalConstants) -> f64 {
    wavenumbers
        .iter()
        .map(|&nu| 0.5 * constants.gas_constant * characteristic_temperature(nu, constants))
        .sum()
}
