//! # 热化学计算模块
//!
//! 刚性转子 / 谐振子 / 理想气体近似下的配分函数与 Gibbs 自由能热校正。
//!
//! ## 子模块
//! - `constants`: 单位换算因子
//! - `translational`, `rotational`, `vibrational`, `electronic`: 四项贡献
//! - `validate`: 严格模式前提条件检查
//! - `aggregate`: 汇总计算器
//! - `export`: CSV 导出
//! - `plot`: 温度扫描图
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/`

pub mod aggregate;
pub mod constants;
pub mod electronic;
pub mod export;
pub mod plot;
pub mod rotational;
pub mod translational;
pub mod validate;
pub mod vibrational;

pub use aggregate::{CalculationMode, ThermoCalculator};
