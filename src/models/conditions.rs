//! # 物理常数与热力学条件
//!
//! 计算中共享的不可变输入：基本物理常数和 (T, P)。
//!
//! ## 依赖关系
//! - 被 `thermo/` 各贡献模块使用
//! - 被 `cli/` 参数转换使用

use serde::{Deserialize, Serialize};

/// 基本物理常数 (SI，光速为 cm/s)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalConstants {
    /// Planck 常数 (J·s)
    pub planck: f64,
    /// Boltzmann 常数 (J/K)
    pub boltzmann: f64,
    /// 光速 (cm/s)，与 cm⁻¹ 波数配套
    pub speed_of_light: f64,
    /// 摩尔气体常数 (J/(mol·K))
    pub gas_constant: f64,
    /// Avogadro 常数 (1/mol)
    pub avogadro: f64,
}

impl PhysicalConstants {
    /// CODATA 2018
    pub const CODATA_2018: PhysicalConstants = PhysicalConstants {
        planck: 6.62607015e-34,
        boltzmann: 1.380649e-23,
        speed_of_light: 2.99792458e10,
        gas_constant: 8.314462618,
        avogadro: 6.02214076e23,
    };
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::CODATA_2018
    }
}

/// 热力学条件
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThermodynamicConditions {
    /// 温度 (K)
    pub temperature: f64,
    /// 压力 (Pa)
    pub pressure: f64,
}

impl ThermodynamicConditions {
    pub const STANDARD_TEMPERATURE: f64 = 298.15;
    pub const STANDARD_PRESSURE: f64 = 101_325.0;

    pub fn new(temperature: f64, pressure: f64) -> Self {
        ThermodynamicConditions {
            temperature,
            pressure,
        }
    }

    /// 同一压力下的另一个温度
    pub fn at_temperature(&self, temperature: f64) -> Self {
        ThermodynamicConditions {
            temperature,
            pressure: self.pressure,
        }
    }
}

impl Default for ThermodynamicConditions {
    fn default() -> Self {
        Self::new(Self::STANDARD_TEMPERATURE, Self::STANDARD_PRESSURE)
    }
}
