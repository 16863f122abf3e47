//! # Gibbs 自由能热校正计算器
//!
//! 汇总四项配分函数贡献，得到 U、S、H、G 及 Hartree 单位的热校正。
//!
//! ## 算法概述
//! 1. （严格模式）检查输入前提条件
//! 2. 分别计算平动、转动、振动、电子贡献
//! 3. U = ΣU_i，S = ΣS_i
//! 4. H = U + RT（理想气体 pV = RT）
//! 5. G = H − TS，再换算为 Hartree
//!
//! ## 依赖关系
//! - 被 `commands/gibbs.rs`, `commands/scan.rs` 调用
//! - 使用 `thermo/` 下各贡献模块与 `thermo/validate.rs`

use crate::error::Result;
use crate::models::{
    MoleculeProperties, PhysicalConstants, ThermodynamicConditions, ThermodynamicSummary,
};
use crate::thermo::{constants, electronic, rotational, translational, validate, vibrational};

/// 计算模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalculationMode {
    /// 不检查输入，NaN/inf 直接传播
    #[default]
    Lenient,
    /// 计算前检查前提条件，违反时报错
    Strict,
}

/// 热校正计算器
#[derive(Debug, Clone, Copy, Default)]
pub struct ThermoCalculator {
    constants: PhysicalConstants,
    mode: CalculationMode,
}

impl ThermoCalculator {
    /// 创建新的计算器
    pub fn new(constants: PhysicalConstants, mode: CalculationMode) -> Self {
        Self { constants, mode }
    }

    pub fn mode(&self) -> CalculationMode {
        self.mode
    }

    /// 计算单个分子在给定条件下的热力学汇总
    pub fn calculate(
        &self,
        molecule: &MoleculeProperties,
        conditions: &ThermodynamicConditions,
    ) -> Result<ThermodynamicSummary> {
        if self.mode == CalculationMode::Strict {
            validate::check_inputs(molecule, conditions)?;
        }

        let k = &self.constants;
        let t = conditions.temperature;
        let r = k.gas_constant;

        let trans = translational::contribution(molecule.mass_amu, conditions, k);
        let rot = rotational::contribution(
            &molecule.moments_of_inertia,
            molecule.symmetry_number,
            molecule.rotor,
            conditions,
            k,
        );
        let vib = vibrational::contribution(&molecule.vib_frequencies, conditions, k);
        let elec = electronic::contribution(molecule.electronic_degeneracy, k);

        let total = trans + rot + vib + elec;
        let enthalpy = total.internal_energy + r * t;
        let gibbs = enthalpy - t * total.entropy;

        Ok(ThermodynamicSummary {
            temperature: t,
            pressure: conditions.pressure,
            translational: trans,
            rotational: rot,
            vibrational: vib,
            electronic: elec,
            zero_point_energy: vibrational::zero_point_energy(&molecule.vib_frequencies, k),
            internal_energy: total.internal_energy,
            entropy: total.entropy,
            enthalpy,
            gibbs,
            gibbs_hartree: constants::joule_per_mol_to_hartree(gibbs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThermoError;

    fn reference_summary() -> ThermodynamicSummary {
        ThermoCalculator::default()
            .calculate(
                &MoleculeProperties::reference(),
                &ThermodynamicConditions::default(),
            )
            .unwrap()
    }

    #[test]
    fn test_reference_report() {
        let lines = reference_summary().report_lines();
        assert_eq!(lines[0], "S_trans : 169.357773 J/mol·K");
        assert_eq!(lines[1], "S_rot : 122.331048 J/mol·K");
        assert_eq!(lines[2], "S_vib : 129.067751 J/mol·K");
        assert_eq!(
            lines[3],
            "Thermal correction to Gibbs Free Energy: 0.059336 Hartree"
        );
    }

    #[test]
    fn test_reference_totals() {
        let summary = reference_summary();
        assert!((summary.enthalpy - 282_954.815_371_933).abs() < 1e-4);
        assert!((summary.gibbs - 155_787.961_114_771).abs() < 1e-4);
        assert!((summary.gibbs_hartree - 0.059_336_492_521).abs() < 1e-10);
    }

    #[test]
    fn test_hartree_round_trip() {
        let summary = reference_summary();
        let back = constants::hartree_to_joule_per_mol(summary.gibbs_hartree);
        assert!((back - summary.gibbs).abs() / summary.gibbs < 1e-12);
    }

    #[test]
    fn test_totals_are_sums() {
        let s = reference_summary();
        let r = PhysicalConstants::default().gas_constant;
        let u = s.translational.internal_energy
            + s.rotational.internal_energy
            + s.vibrational.internal_energy
            + s.electronic.internal_energy;
        assert!((s.internal_energy - u).abs() < 1e-9);
        assert!((s.enthalpy - (u + r * s.temperature)).abs() < 1e-9);
        assert!((s.gibbs - (s.enthalpy - s.entropy_term())).abs() < 1e-9);
        assert!(s.zero_point_energy < s.vibrational.internal_energy);
    }

    #[test]
    fn test_entropy_monotonic_in_temperature() {
        let calc = ThermoCalculator::default();
        let mol = MoleculeProperties::reference();
        let low = calc
            .calculate(&mol, &ThermodynamicConditions::new(250.0, 101_325.0))
            .unwrap();
        let high = calc
            .calculate(&mol, &ThermodynamicConditions::new(350.0, 101_325.0))
            .unwrap();

        assert!(high.translational.entropy > low.translational.entropy);
        assert!(high.rotational.entropy > low.rotational.entropy);
        assert!(high.vibrational.entropy > low.vibrational.entropy);
        assert!(high.electronic.entropy >= low.electronic.entropy);
        assert!(high.entropy > low.entropy);
    }

    #[test]
    fn test_lenient_mode_propagates_nan() {
        let mut mol = MoleculeProperties::reference();
        mol.vib_frequencies.push(0.0);
        let summary = ThermoCalculator::default()
            .calculate(&mol, &ThermodynamicConditions::default())
            .unwrap();
        assert!(summary.gibbs_hartree.is_nan());
        assert!(matches!(
            summary.check_finite(),
            Err(ThermoError::NonFiniteResult { .. })
        ));
    }

    #[test]
    fn test_strict_mode_rejects_imaginary_mode() {
        let mut mol = MoleculeProperties::reference();
        mol.vib_frequencies[0] = -411.7;
        let calc = ThermoCalculator::new(PhysicalConstants::default(), CalculationMode::Strict);
        let err = calc
            .calculate(&mol, &ThermodynamicConditions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            ThermoError::Precondition { ref contribution, .. } if contribution == "vibrational"
        ));
    }

    #[test]
    fn test_strict_mode_matches_lenient_on_valid_input() {
        let mol = MoleculeProperties::reference();
        let cond = ThermodynamicConditions::default();
        let strict = ThermoCalculator::new(PhysicalConstants::default(), CalculationMode::Strict)
            .calculate(&mol, &cond)
            .unwrap();
        assert_eq!(strict, reference_summary());
    }

    #[test]
    fn test_gas_constant_consistent_with_avogadro() {
        let k = PhysicalConstants::default();
        assert!((k.avogadro * k.boltzmann - k.gas_constant).abs() < 1e-8);
    }
}
