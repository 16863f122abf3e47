//! # 转动贡献
//!
//! 刚性转子配分函数。非线性分子使用三个主转动惯量，线性分子使用最大主转动惯量。
//!
//! ## 依赖关系
//! - 被 `thermo/aggregate.rs` 调用
//! - 使用 `models/molecule.rs` 的 RotorType

use crate::models::{ContributionResult, PhysicalConstants, RotorType, ThermodynamicConditions};
use crate::thermo::constants::AMU_BOHR2_TO_KG_M2;

use std::f64::consts::PI;

/// amu·bohr² → kg·m²
pub fn moments_to_si(moments_amu_bohr2: &[f64; 3]) -> [f64; 3] {
    moments_amu_bohr2.map(|i| i * AMU_BOHR2_TO_KG_M2)
}

/// 转动配分函数
pub fn partition_function(
    moments_amu_bohr2: &[f64; 3],
    symmetry_number: u32,
    rotor: RotorType,
    conditions: &ThermodynamicConditions,
    constants: &PhysicalConstants,
) -> f64 {
    let moments = moments_to_si(moments_amu_bohr2);
    let sigma = symmetry_number as f64;
    let kt = constants.boltzmann * conditions.temperature;
    let h2 = constants.planck.powi(2);

    match rotor {
        RotorType::NonLinear => {
            let i_prod = moments[0] * moments[1] * moments[2];
            PI.sqrt() * ((8.0 * PI.powi(2) * kt) / h2).powf(1.5) * i_prod.sqrt() / sigma
        }
        RotorType::Linear => {
            let i = moments.iter().copied().fold(0.0_f64, f64::max);
            8.0 * PI.powi(2) * i * kt / (sigma * h2)
        }
    }
}

/// 计算转动内能与熵
pub fn contribution(
    moments_amu_bohr2: &[f64; 3],
    symmetry_number: u32,
    rotor: RotorType,
    conditions: &ThermodynamicConditions,
    constants: &PhysicalConstants,
) -> ContributionResult {
    let r = constants.gas_constant;
    let t = conditions.temperature;
    let q = partition_function(moments_amu_bohr2, symmetry_number, rotor, conditions, constants);

    match rotor {
        RotorType::NonLinear => ContributionResult::new(1.5 * r * t, r * (1.5 + q.ln())),
        RotorType::Linear => ContributionResult::new(r * t, r * (1.0 + q.ln())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOMENTS: [f64; 3] = [641.28469, 1712.41424, 2129.86756];

    fn s_rot(sigma: u32, rotor: RotorType, t: f64) -> f64 {
        contribution(
            &MOMENTS,
            sigma,
            rotor,
            &ThermodynamicConditions::new(t, 101_325.0),
            &PhysicalConstants::default(),
        )
        .entropy
    }

    #[test]
    fn test_reference_entropy() {
        let s = s_rot(1, RotorType::NonLinear, 298.15);
        assert!((s - 122.331048).abs() < 1e-5);
    }

    #[test]
    fn test_doubling_symmetry_number() {
        let r = PhysicalConstants::default().gas_constant;
        for rotor in [RotorType::NonLinear, RotorType::Linear] {
            let s1 = s_rot(1, rotor, 298.15);
            let s2 = s_rot(2, rotor, 298.15);
            assert!((s1 - s2 - r * 2.0_f64.ln()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_linear_rotor_energy() {
        let k = PhysicalConstants::default();
        let cond = ThermodynamicConditions::default();
        let lin = contribution(&[0.0, 80.0, 80.0], 2, RotorType::Linear, &cond, &k);
        assert!((lin.internal_energy - k.gas_constant * 298.15).abs() < 1e-9);
        assert!(lin.entropy.is_finite());
        assert!(lin.entropy > 0.0);
    }

    #[test]
    fn test_zero_symmetry_number_propagates() {
        let s = s_rot(0, RotorType::NonLinear, 298.15);
        assert!(s.is_infinite() && s > 0.0);
    }

    #[test]
    fn test_entropy_increases_with_temperature() {
        let low = s_rot(1, RotorType::NonLinear, 200.0);
        let high = s_rot(1, RotorType::NonLinear, 400.0);
        assert!(high > low);
    }
}
