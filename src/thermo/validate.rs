//! # 严格模式前提条件检查
//!
//! 在计算前检查输入是否落在各配分函数的定义域内，违反时给出具体的贡献项和字段。
//!
//! ## 依赖关系
//! - 被 `thermo/aggregate.rs` 在 `CalculationMode::Strict` 下调用
//! - 使用 `error.rs` 的 `ThermoError::Precondition`

use crate::error::{Result, ThermoError};
use crate::models::{MoleculeProperties, RotorType, ThermodynamicConditions};

/// 检查分子与条件是否满足全部前提条件
pub fn check_inputs(
    molecule: &MoleculeProperties,
    conditions: &ThermodynamicConditions,
) -> Result<()> {
    check_conditions(conditions)?;
    check_translational(molecule)?;
    check_rotational(molecule)?;
    check_vibrational(molecule)?;
    check_electronic(molecule)?;
    Ok(())
}

/// NaN 也视为非正
fn is_positive(value: f64) -> bool {
    value > 0.0
}

fn check_conditions(conditions: &ThermodynamicConditions) -> Result<()> {
    if !is_positive(conditions.temperature) {
        return Err(ThermoError::precondition(
            "all",
            "temperature",
            conditions.temperature,
            "> 0 K",
        ));
    }
    if !is_positive(conditions.pressure) {
        return Err(ThermoError::precondition(
            "translational",
            "pressure",
            conditions.pressure,
            "> 0 Pa",
        ));
    }
    Ok(())
}

fn check_translational(molecule: &MoleculeProperties) -> Result<()> {
    if !is_positive(molecule.mass_amu) {
        return Err(ThermoError::precondition(
            "translational",
            "mass_amu",
            molecule.mass_amu,
            "> 0 amu",
        ));
    }
    Ok(())
}

fn check_rotational(molecule: &MoleculeProperties) -> Result<()> {
    if molecule.symmetry_number < 1 {
        return Err(ThermoError::precondition(
            "rotational",
            "symmetry_number",
            molecule.symmetry_number as f64,
            ">= 1",
        ));
    }

    match molecule.rotor {
        RotorType::NonLinear => {
            for (i, &moment) in molecule.moments_of_inertia.iter().enumerate() {
                if !is_positive(moment) {
                    return Err(ThermoError::precondition(
                        "rotational",
                        format!("moments_of_inertia[{}]", i),
                        moment,
                        "> 0 for a non-linear rotor",
                    ));
                }
            }
        }
        RotorType::Linear => {
            let largest = molecule
                .moments_of_inertia
                .iter()
                .copied()
                .fold(f64::NEG_INFINITY, f64::max);
            if !is_positive(largest) {
                return Err(ThermoError::precondition(
                    "rotational",
                    "moments_of_inertia",
                    largest,
                    "largest moment > 0 for a linear rotor",
                ));
            }
        }
    }
    Ok(())
}

fn check_vibrational(molecule: &MoleculeProperties) -> Result<()> {
    match molecule
        .vib_frequencies
        .iter()
        .enumerate()
        .find(|(_, nu)| !is_positive(**nu))
    {
        Some((i, &nu)) => Err(ThermoError::precondition(
            "vibrational",
            format!("vib_frequencies[{}]", i),
            nu,
            "> 0 cm^-1 (zero or imaginary mode)",
        )),
        None => Ok(()),
    }
}

fn check_electronic(molecule: &MoleculeProperties) -> Result<()> {
    if molecule.electronic_degeneracy < 1 {
        return Err(ThermoError::precondition(
            "electronic",
            "electronic_degeneracy",
            molecule.electronic_degeneracy as f64,
            ">= 1",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: ThermoError) -> String {
        match err {
            ThermoError::Precondition { field, .. } => field,
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_reference_molecule_passes() {
        let mol = MoleculeProperties::reference();
        assert!(check_inputs(&mol, &ThermodynamicConditions::default()).is_ok());
    }

    #[test]
    fn test_imaginary_frequency_reports_index() {
        let mut mol = MoleculeProperties::reference();
        mol.vib_frequencies[4] = -85.3;
        let err = check_inputs(&mol, &ThermodynamicConditions::default()).unwrap_err();
        assert_eq!(field_of(err), "vib_frequencies[4]");
    }

    #[test]
    fn test_zero_symmetry_number() {
        let mut mol = MoleculeProperties::reference();
        mol.symmetry_number = 0;
        let err = check_inputs(&mol, &ThermodynamicConditions::default()).unwrap_err();
        assert_eq!(field_of(err), "symmetry_number");
    }

    #[test]
    fn test_zero_degeneracy() {
        let mut mol = MoleculeProperties::reference();
        mol.electronic_degeneracy = 0;
        let err = check_inputs(&mol, &ThermodynamicConditions::default()).unwrap_err();
        assert_eq!(field_of(err), "electronic_degeneracy");
    }

    #[test]
    fn test_non_positive_conditions() {
        let mol = MoleculeProperties::reference();
        let err = check_inputs(&mol, &ThermodynamicConditions::new(0.0, 101_325.0)).unwrap_err();
        assert_eq!(field_of(err), "temperature");
        let err = check_inputs(&mol, &ThermodynamicConditions::new(298.15, -1.0)).unwrap_err();
        assert_eq!(field_of(err), "pressure");
    }

    #[test]
    fn test_linear_rotor_allows_zero_moment() {
        let mut mol = MoleculeProperties::reference();
        mol.rotor = RotorType::Linear;
        mol.moments_of_inertia = [0.0, 45.2, 45.2];
        assert!(check_inputs(&mol, &ThermodynamicConditions::default()).is_ok());

        mol.rotor = RotorType::NonLinear;
        let err = check_inputs(&mol, &ThermodynamicConditions::default()).unwrap_err();
        assert_eq!(field_of(err), "moments_of_inertia[0]");
    }

    #[test]
    fn test_nan_mass_is_rejected() {
        let mut mol = MoleculeProperties::reference();
        mol.mass_amu = f64::NAN;
        let err = check_inputs(&mol, &ThermodynamicConditions::default()).unwrap_err();
        assert_eq!(field_of(err), "mass_amu");
    }
}
