//! # 平动贡献
//!
//! 三维理想气体平动配分函数（Sackur-Tetrode 形式）。
//!
//! ## 依赖关系
//! - 被 `thermo/aggregate.rs` 调用
//! - 使用 `models/conditions.rs`

use crate::models::{ContributionResult, PhysicalConstants, ThermodynamicConditions};
use crate::thermo::constants::AMU_TO_KG;

use std::f64::consts::PI;

/// 平动配分函数 q_trans = (2π m k_B T / h²)^(3/2) · k_B T / P
pub fn partition_function(
    mass_amu: f64,
    conditions: &ThermodynamicConditions,
    constants: &PhysicalConstants,
) -> f64 {
    let mass_kg = mass_amu * AMU_TO_KG;
    let t = conditions.temperature;
    let kb = constants.boltzmann;

    ((2.0 * PI * mass_kg * kb * t) / constants.planck.powi(2)).powf(1.5)
        * (kb * t / conditions.pressure)
}

/// 计算平动内能与熵
pub fn contribution(
    mass_amu: f64,
    conditions: &ThermodynamicConditions,
    constants: &PhysicalConstants,
) -> ContributionResult {
    let r = constants.gas_constant;
    let q = partition_function(mass_amu, conditions, constants);

    ContributionResult {
        internal_energy: 1.5 * r * conditions.temperature,
        entropy: r * (1.0 + 1.5 + q.ln()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_entropy() {
        let result = contribution(
            129.018780,
            &ThermodynamicConditions::default(),
            &PhysicalConstants::default(),
        );
        assert!((result.entropy - 169.357773).abs() < 1e-5);
    }

    #[test]
    fn test_equipartition_energy() {
        let k = PhysicalConstants::default();
        let result = contribution(18.0, &ThermodynamicConditions::new(500.0, 1.0e5), &k);
        assert!((result.internal_energy - 1.5 * k.gas_constant * 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_heavier_molecule_has_more_entropy() {
        let k = PhysicalConstants::default();
        let cond = ThermodynamicConditions::default();
        let light = contribution(18.0, &cond, &k);
        let heavy = contribution(180.0, &cond, &k);
        // ΔS = 1.5 R ln(10)
        let expected = 1.5 * k.gas_constant * 10.0_f64.ln();
        assert!((heavy.entropy - light.entropy - expected).abs() < 1e-9);
    }

    #[test]
    fn test_non_positive_mass_is_not_finite() {
        let k = PhysicalConstants::default();
        let result = contribution(0.0, &ThermodynamicConditions::default(), &k);
        assert!(!result.entropy.is_finite());
    }
}
