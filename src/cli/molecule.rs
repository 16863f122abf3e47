//! # 分子与计算参数 CLI 定义
//!
//! `gibbs` 和 `scan` 共用的分子输入与计算选项，默认值为内置参考分子。
//!
//! ## 依赖关系
//! - 被 `cli/gibbs.rs`, `cli/scan.rs` 展开 (flatten)
//! - 转换为 `models/` 中的 MoleculeProperties 和 ThermoCalculator

use crate::error::{Result, ThermoError};
use crate::models::{MoleculeProperties, PhysicalConstants, RotorType};
use crate::thermo::{CalculationMode, ThermoCalculator};

use clap::{Args, ValueEnum};

/// 转子类型
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum RotorArg {
    /// Linear molecule (2 rotational degrees of freedom)
    Linear,
    /// Non-linear molecule (3 rotational degrees of freedom)
    #[default]
    NonLinear,
}

impl From<RotorArg> for RotorType {
    fn from(arg: RotorArg) -> Self {
        match arg {
            RotorArg::Linear => RotorType::Linear,
            RotorArg::NonLinear => RotorType::NonLinear,
        }
    }
}

/// 分子输入参数（未指定的字段取参考分子的值）
#[derive(Args, Debug, Clone)]
pub struct MoleculeArgs {
    /// Molecular mass in amu [default: reference molecule]
    #[arg(long)]
    pub mass: Option<f64>,

    /// Rotational symmetry number [default: reference molecule]
    #[arg(long)]
    pub symmetry: Option<u32>,

    /// Three principal moments of inertia in amu·bohr², comma-separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub moments: Option<Vec<f64>>,

    /// Vibrational wavenumbers in cm⁻¹, comma-separated
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        conflicts_with = "no_vibrations"
    )]
    pub frequencies: Option<Vec<f64>>,

    /// Treat the species as having no vibrational modes
    #[arg(long, default_value_t = false)]
    pub no_vibrations: bool,

    /// Electronic ground-state degeneracy [default: reference molecule]
    #[arg(long)]
    pub degeneracy: Option<u32>,

    /// Rigid-rotor type
    #[arg(long, value_enum, default_value = "non-linear")]
    pub rotor: RotorArg,
}

impl MoleculeArgs {
    /// 构造 MoleculeProperties
    pub fn to_molecule(&self) -> Result<MoleculeProperties> {
        let reference = MoleculeProperties::reference();

        let moments_of_inertia = match &self.moments {
            Some(values) => <[f64; 3]>::try_from(values.as_slice()).map_err(|_| {
                ThermoError::InvalidArgument(format!(
                    "--moments expects exactly 3 values, got {}",
                    values.len()
                ))
            })?,
            None => reference.moments_of_inertia,
        };

        let vib_frequencies = if self.no_vibrations {
            Vec::new()
        } else {
            self.frequencies
                .clone()
                .unwrap_or(reference.vib_frequencies)
        };

        Ok(MoleculeProperties {
            mass_amu: self.mass.unwrap_or(reference.mass_amu),
            symmetry_number: self.symmetry.unwrap_or(reference.symmetry_number),
            moments_of_inertia,
            vib_frequencies,
            electronic_degeneracy: self.degeneracy.unwrap_or(reference.electronic_degeneracy),
            rotor: self.rotor.into(),
        })
    }
}

/// 计算选项
#[derive(Args, Debug, Clone)]
pub struct CalcArgs {
    /// Pressure in Pa
    #[arg(
        short = 'P',
        long,
        default_value_t = 101325.0,
        allow_hyphen_values = true,
        env = "THERMOCORR_PRESSURE"
    )]
    pub pressure: f64,

    /// Reject non-physical inputs (σ < 1, ν ≤ 0, g < 1, ...) instead of propagating NaN/inf
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

impl CalcArgs {
    pub fn calculator(&self) -> ThermoCalculator {
        let mode = if self.strict {
            CalculationMode::Strict
        } else {
            CalculationMode::Lenient
        };
        ThermoCalculator::new(PhysicalConstants::default(), mode)
    }
}
