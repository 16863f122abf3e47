//! # gibbs 命令实现
//!
//! 计算单一温度下的 Gibbs 自由能热校正。
//!
//! ## 功能
//! - 默认输出四行：S_trans, S_rot, S_vib, Gibbs 热校正 (Hartree)
//! - 可选各贡献分解表格
//! - 可选 CSV 导出
//!
//! ## 依赖关系
//! - 使用 `cli/gibbs.rs` 定义的参数
//! - 使用 `thermo/aggregate.rs`, `thermo/export.rs`
//! - 使用 `utils/output.rs`

use crate::cli::gibbs::GibbsArgs;
use crate::error::Result;
use crate::models::{MoleculeProperties, ThermodynamicConditions, ThermodynamicSummary};
use crate::thermo::{export, ThermoCalculator};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 贡献分解表格行
#[derive(Debug, Clone, Tabled)]
struct ContributionRow {
    #[tabled(rename = "Contribution")]
    name: &'static str,
    #[tabled(rename = "U (J/mol)")]
    internal_energy: String,
    #[tabled(rename = "S (J/mol·K)")]
    entropy: String,
}

/// 能量汇总表格行
#[derive(Debug, Clone, Tabled)]
struct EnergyRow {
    #[tabled(rename = "Quantity")]
    name: &'static str,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Unit")]
    unit: &'static str,
}

/// 执行 gibbs 命令
pub fn execute(args: GibbsArgs) -> Result<()> {
    let molecule = args.molecule.to_molecule()?;
    let conditions = ThermodynamicConditions::new(args.temperature, args.calc.pressure);
    let calculator = args.calc.calculator();

    if args.verbose {
        print_inputs(&molecule, &conditions, &calculator);
    }

    let summary = calculator.calculate(&molecule, &conditions)?;

    for line in summary.report_lines() {
        println!("{}", line);
    }

    if let Err(e) = summary.check_finite() {
        output::print_warning(&format!(
            "{} (zero/imaginary frequency, σ = 0 or g = 0?); rerun with --strict to locate it",
            e
        ));
    }

    if args.table {
        print_breakdown(&summary);
    }

    if let Some(ref path) = args.csv {
        export::to_csv(std::slice::from_ref(&summary), path)?;
        output::print_success(&format!("Summary saved to '{}'", path.display()));
    }

    Ok(())
}

/// 打印输入信息
fn print_inputs(
    molecule: &MoleculeProperties,
    conditions: &ThermodynamicConditions,
    calculator: &ThermoCalculator,
) {
    output::print_header("Thermal Correction to Gibbs Free Energy");
    output::print_info("Input");
    output::print_field("Mass", &format!("{} amu", molecule.mass_amu));
    output::print_field("Symmetry number", &molecule.symmetry_number.to_string());
    output::print_field("Rotor", &molecule.rotor.to_string());
    output::print_field(
        "Moments of inertia",
        &format!("{:?} amu·bohr²", molecule.moments_of_inertia),
    );
    output::print_field("Vibrational modes", &molecule.mode_count().to_string());
    output::print_field(
        "Electronic degeneracy",
        &molecule.electronic_degeneracy.to_string(),
    );
    output::print_field("Temperature", &format!("{} K", conditions.temperature));
    output::print_field("Pressure", &format!("{} Pa", conditions.pressure));
    output::print_field("Mode", &format!("{:?}", calculator.mode()));
    output::print_separator();
}

/// 打印贡献分解表格
fn print_breakdown(summary: &ThermodynamicSummary) {
    let contributions = [
        ("Translational", &summary.translational),
        ("Rotational", &summary.rotational),
        ("Vibrational", &summary.vibrational),
        ("Electronic", &summary.electronic),
    ];

    let mut rows: Vec<ContributionRow> = contributions
        .iter()
        .map(|(name, c)| ContributionRow {
            name: *name,
            internal_energy: format!("{:.3}", c.internal_energy),
            entropy: format!("{:.6}", c.entropy),
        })
        .collect();
    rows.push(ContributionRow {
        name: "Total",
        internal_energy: format!("{:.3}", summary.internal_energy),
        entropy: format!("{:.6}", summary.entropy),
    });

    output::print_header("Partition Function Contributions");
    println!("{}", Table::new(&rows));

    let energies = vec![
        EnergyRow {
            name: "Zero-point energy",
            value: format!("{:.3}", summary.zero_point_energy),
            unit: "J/mol",
        },
        EnergyRow {
            name: "Enthalpy H",
            value: format!("{:.3}", summary.enthalpy),
            unit: "J/mol",
        },
        EnergyRow {
            name: "T·S",
            value: format!("{:.3}", summary.entropy_term()),
            unit: "J/mol",
        },
        EnergyRow {
            name: "G correction",
            value: format!("{:.3}", summary.gibbs_kj_per_mol()),
            unit: "kJ/mol",
        },
        EnergyRow {
            name: "G correction",
            value: format!("{:.3}", summary.gibbs_kcal_per_mol()),
            unit: "kcal/mol",
        },
        EnergyRow {
            name: "G correction",
            value: format!("{:.6}", summary.gibbs_hartree),
            unit: "Hartree",
        },
    ];

    output::print_header(&format!("Energies at {} K", summary.temperature));
    println!("{}", Table::new(&energies));
}
