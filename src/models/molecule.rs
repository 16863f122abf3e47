//! # 分子性质数据模型
//!
//! 一次计算所需的全部分子输入：质量、转动惯量、振动频率等。
//!
//! ## 依赖关系
//! - 被 `thermo/` 各贡献模块使用
//! - 由 `cli/` 参数构造

use serde::{Deserialize, Serialize};

/// 刚性转子类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RotorType {
    /// 线性分子（2 个转动自由度）
    Linear,
    /// 非线性分子（3 个转动自由度）
    #[default]
    NonLinear,
}

impl std::fmt::Display for RotorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RotorType::Linear => write!(f, "linear"),
            RotorType::NonLinear => write!(f, "non-linear"),
        }
    }
}

/// 分子性质
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoleculeProperties {
    /// 分子质量 (amu)
    pub mass_amu: f64,

    /// 转动对称数 σ
    pub symmetry_number: u32,

    /// 主转动惯量 (amu·bohr²)
    pub moments_of_inertia: [f64; 3],

    /// 振动波数 (cm⁻¹)
    pub vib_frequencies: Vec<f64>,

    /// 电子基态简并度
    pub electronic_degeneracy: u32,

    /// 转子类型
    pub rotor: RotorType,
}

impl MoleculeProperties {
    /// 内置参考分子（129.02 amu，36 个振动模式，二重态）
    pub fn reference() -> Self {
        MoleculeProperties {
            mass_amu: 129.018780,
            symmetry_number: 1,
            moments_of_inertia: [641.28469, 1712.41424, 2129.86756],
            vib_frequencies: REFERENCE_FREQUENCIES.to_vec(),
            electronic_degeneracy: 2,
            rotor: RotorType::NonLinear,
        }
    }

    /// 振动模式数
    pub fn mode_count(&self) -> usize {
        self.vib_frequencies.len()
    }
}

/// 参考分子的振动波数 (cm⁻¹)
pub const REFERENCE_FREQUENCIES: [f64; 36] = [
    11.8, 54.3, 66.9, 111.8, 184.8, 193.6, 253.2, 262.5, 509.2, 602.1, 612.0, 654.6, 771.6, 804.1,
    890.9, 906.5, 945.2, 982.9, 1042.3, 1050.6, 1141.0, 1204.6, 1269.3, 1281.0, 1293.3, 1423.0,
    1472.4, 1517.8, 1545.8, 1654.2, 1791.3, 3020.3, 3285.1, 3295.2, 3310.3, 3361.2,
];
