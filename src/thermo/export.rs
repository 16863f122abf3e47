//! # 热力学结果导出
//!
//! 将单点计算或温度扫描结果写入 CSV。
//!
//! ## 依赖关系
//! - 被 `commands/gibbs.rs`, `commands/scan.rs` 调用
//! - 使用 `models/summary.rs` 的 ThermodynamicSummary
//! - 使用 `csv` + `serde` 写入记录

use crate::error::{Result, ThermoError};
use crate::models::ThermodynamicSummary;

use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// CSV 中的一行（扁平结构）
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRecord {
    #[serde(rename = "T_K")]
    pub temperature: f64,
    #[serde(rename = "P_Pa")]
    pub pressure: f64,
    #[serde(rename = "S_trans_J_molK")]
    pub s_trans: f64,
    #[serde(rename = "S_rot_J_molK")]
    pub s_rot: f64,
    #[serde(rename = "S_vib_J_molK")]
    pub s_vib: f64,
    #[serde(rename = "S_elec_J_molK")]
    pub s_elec: f64,
    #[serde(rename = "S_total_J_molK")]
    pub s_total: f64,
    #[serde(rename = "ZPE_J_mol")]
    pub zero_point_energy: f64,
    #[serde(rename = "U_J_mol")]
    pub internal_energy: f64,
    #[serde(rename = "H_J_mol")]
    pub enthalpy: f64,
    #[serde(rename = "G_J_mol")]
    pub gibbs: f64,
    #[serde(rename = "G_Hartree")]
    pub gibbs_hartree: f64,
}

impl From<&ThermodynamicSummary> for SummaryRecord {
    fn from(s: &ThermodynamicSummary) -> Self {
        SummaryRecord {
            temperature: s.temperature,
            pressure: s.pressure,
            s_trans: s.translational.entropy,
            s_rot: s.rotational.entropy,
            s_vib: s.vibrational.entropy,
            s_elec: s.electronic.entropy,
            s_total: s.entropy,
            zero_point_energy: s.zero_point_energy,
            internal_energy: s.internal_energy,
            enthalpy: s.enthalpy,
            gibbs: s.gibbs,
            gibbs_hartree: s.gibbs_hartree,
        }
    }
}

/// 导出结果到 CSV 文件
pub fn to_csv(summaries: &[ThermodynamicSummary], output_path: &Path) -> Result<()> {
    let wtr = csv::Writer::from_path(output_path)?;
    write_records(wtr, summaries, &output_path.display().to_string())
}

fn write_records<W: Write>(
    mut wtr: csv::Writer<W>,
    summaries: &[ThermodynamicSummary],
    path: &str,
) -> Result<()> {
    for summary in summaries {
        wtr.serialize(SummaryRecord::from(summary))?;
    }

    wtr.flush().map_err(|e| ThermoError::FileWriteError {
        path: path.to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MoleculeProperties, ThermodynamicConditions};
    use crate::thermo::ThermoCalculator;

    #[test]
    fn test_write_csv_header_and_rows() {
        let calc = ThermoCalculator::default();
        let mol = MoleculeProperties::reference();
        let summaries: Vec<_> = [250.0, 298.15]
            .iter()
            .map(|&t| {
                calc.calculate(&mol, &ThermodynamicConditions::new(t, 101_325.0))
                    .unwrap()
            })
            .collect();

        let mut buf = Vec::new();
        write_records(csv::Writer::from_writer(&mut buf), &summaries, "<buffer>").unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("T_K,P_Pa,S_trans_J_molK"));
        assert!(lines[0].ends_with("G_Hartree"));
        assert!(lines[2].starts_with("298.15,101325"));
    }
}
