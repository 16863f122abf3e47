//! # 数据模型模块
//!
//! 定义分子输入、热力学条件和计算结果数据模型。
//!
//! ## 依赖关系
//! - 被 `thermo/` 和 `commands/` 使用
//! - 子模块: conditions, molecule, summary

pub mod conditions;
pub mod molecule;
pub mod summary;

pub use conditions::{PhysicalConstants, ThermodynamicConditions};
pub use molecule::{MoleculeProperties, RotorType};
pub use summary::{ContributionResult, ThermodynamicSummary};
