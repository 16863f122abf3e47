//! # 热力学结果数据模型
//!
//! 各配分函数贡献的结果与汇总后的 H、S、G。
//!
//! ## 依赖关系
//! - 由 `thermo/aggregate.rs` 生成
//! - 被 `commands/` 与 `thermo/export.rs` 使用

use crate::error::{Result, ThermoError};
use crate::thermo::constants;

use serde::Serialize;

/// 单项贡献：内能 (J/mol) 与熵 (J/(mol·K))
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ContributionResult {
    pub internal_energy: f64,
    pub entropy: f64,
}

impl ContributionResult {
    pub fn new(internal_energy: f64, entropy: f64) -> Self {
        ContributionResult {
            internal_energy,
            entropy,
        }
    }
}

impl std::ops::Add for ContributionResult {
    type Output = ContributionResult;

    fn add(self, rhs: ContributionResult) -> ContributionResult {
        ContributionResult {
            internal_energy: self.internal_energy + rhs.internal_energy,
            entropy: self.entropy + rhs.entropy,
        }
    }
}

/// 热力学汇总
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThermodynamicSummary {
    /// 温度 (K)
    pub temperature: f64,
    /// 压力 (Pa)
    pub pressure: f64,

    pub translational: ContributionResult,
    pub rotational: ContributionResult,
    pub vibrational: ContributionResult,
    pub electronic: ContributionResult,

    /// 零点能 (J/mol)，已包含在振动内能中
    pub zero_point_energy: f64,

    /// 总内能 (J/mol)
    pub internal_energy: f64,
    /// 总熵 (J/(mol·K))
    pub entropy: f64,
    /// 焓 (J/mol)
    pub enthalpy: f64,
    /// Gibbs 自由能 (J/mol)
    pub gibbs: f64,
    /// Gibbs 自由能热校正 (Hartree)
    pub gibbs_hartree: f64,
}

impl ThermodynamicSummary {
    /// T·S (J/mol)
    pub fn entropy_term(&self) -> f64 {
        self.temperature * self.entropy
    }

    /// Gibbs 校正 (kJ/mol)
    pub fn gibbs_kj_per_mol(&self) -> f64 {
        self.gibbs / constants::J_PER_KJ
    }

    /// Gibbs 校正 (kcal/mol)
    pub fn gibbs_kcal_per_mol(&self) -> f64 {
        constants::joule_per_mol_to_kcal(self.gibbs)
    }

    /// 检查所有量是否为有限值，返回第一个非有限量
    pub fn check_finite(&self) -> Result<()> {
        let quantities = [
            ("S_trans", self.translational.entropy),
            ("S_rot", self.rotational.entropy),
            ("U_vib", self.vibrational.internal_energy),
            ("S_vib", self.vibrational.entropy),
            ("S_elec", self.electronic.entropy),
            ("G", self.gibbs),
        ];

        match quantities.iter().find(|(_, v)| !v.is_finite()) {
            Some((name, value)) => Err(ThermoError::NonFiniteResult {
                quantity: name.to_string(),
                value: *value,
            }),
            None => Ok(()),
        }
    }

    /// 参考格式的四行输出
    pub fn report_lines(&self) -> [String; 4] {
        [
            format!("S_trans : {} J/mol·K", fixed6(self.translational.entropy)),
            format!("S_rot : {} J/mol·K", fixed6(self.rotational.entropy)),
            format!("S_vib : {} J/mol·K", fixed6(self.vibrational.entropy)),
            format!(
                "Thermal correction to Gibbs Free Energy: {} Hartree",
                fixed6(self.gibbs_hartree)
            ),
        ]
    }
}

/// 六位小数；NaN 写作 `nan`（inf/-inf 与 `{:.6}` 一致）
fn fixed6(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{:.6}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MoleculeProperties, ThermodynamicConditions};
    use crate::thermo::ThermoCalculator;

    #[test]
    fn test_report_lines_zero_frequency() {
        let mut mol = MoleculeProperties::reference();
        mol.vib_frequencies.push(0.0);
        let summary = ThermoCalculator::default()
            .calculate(&mol, &ThermodynamicConditions::default())
            .unwrap();
        let lines = summary.report_lines();

        assert_eq!(lines[0], "S_trans : 169.357773 J/mol·K");
        assert_eq!(lines[2], "S_vib : nan J/mol·K");
        assert_eq!(
            lines[3],
            "Thermal correction to Gibbs Free Energy: nan Hartree"
        );
    }

    #[test]
    fn test_fixed6_special_values() {
        assert_eq!(fixed6(f64::NAN), "nan");
        assert_eq!(fixed6(f64::INFINITY), "inf");
        assert_eq!(fixed6(f64::NEG_INFINITY), "-inf");
        assert_eq!(fixed6(0.0593364925), "0.059336");
    }
}
