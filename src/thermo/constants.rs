//! # 物理常数与单位换算
//!
//! CODATA 2018 精确值及本程序使用的固定换算因子。
//!
//! ## 依赖关系
//! - 被 `models/conditions.rs` 和 `thermo/` 各贡献模块使用
//! - 无外部模块依赖

/// 原子质量单位 → kg
pub const AMU_TO_KG: f64 = 1.66053906660e-27;

/// Bohr 半径 (m)
pub const BOHR_TO_M: f64 = 5.29177210903e-11;

/// amu·bohr² → kg·m²
pub const AMU_BOHR2_TO_KG_M2: f64 = AMU_TO_KG * BOHR_TO_M * BOHR_TO_M;

/// J/mol → kJ/mol
pub const J_PER_KJ: f64 = 1000.0;

/// 1 Hartree 对应的 kJ/mol
pub const KJ_MOL_PER_HARTREE: f64 = 2625.5;

/// 1 kcal 对应的 kJ
pub const KJ_PER_KCAL: f64 = 4.184;

/// J/mol → Hartree
pub fn joule_per_mol_to_hartree(value: f64) -> f64 {
    value / J_PER_KJ / KJ_MOL_PER_HARTREE
}

/// Hartree → J/mol
pub fn hartree_to_joule_per_mol(value: f64) -> f64 {
    value * KJ_MOL_PER_HARTREE * J_PER_KJ
}

/// J/mol → kcal/mol
pub fn joule_per_mol_to_kcal(value: f64) -> f64 {
    value / J_PER_KJ / KJ_PER_KCAL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hartree_round_trip() {
        let g = 155_787.961_114_770_97;
        let back = hartree_to_joule_per_mol(joule_per_mol_to_hartree(g));
        assert!((back - g).abs() / g < 1e-12);
    }

    #[test]
    fn test_one_hartree() {
        assert!((joule_per_mol_to_hartree(2_625_500.0) - 1.0).abs() < 1e-15);
    }
}
