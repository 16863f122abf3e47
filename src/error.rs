//! # 统一错误处理模块
//!
//! 定义 thermocorr 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// thermocorr 统一错误类型
#[derive(Error, Debug)]
pub enum ThermoError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid range format: {0}")]
    InvalidRange(String),

    // ─────────────────────────────────────────────────────────────
    // 物理前提条件错误（严格模式）
    // ─────────────────────────────────────────────────────────────
    #[error("{contribution} contribution: {field} = {value} violates requirement {requirement}")]
    Precondition {
        contribution: String,
        field: String,
        value: f64,
        requirement: String,
    },

    #[error("Non-finite result in {quantity}: {value}")]
    NonFiniteResult { quantity: String, value: f64 },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

impl ThermoError {
    /// 构造前提条件错误
    pub fn precondition(
        contribution: &str,
        field: impl Into<String>,
        value: f64,
        requirement: &str,
    ) -> Self {
        ThermoError::Precondition {
            contribution: contribution.to_string(),
            field: field.into(),
            value,
            requirement: requirement.to_string(),
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ThermoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_message() {
        let err = ThermoError::precondition("vibrational", "vib_frequencies[3]", -12.5, "> 0");
        let msg = err.to_string();
        assert!(msg.contains("vibrational"));
        assert!(msg.contains("vib_frequencies[3]"));
        assert!(msg.contains("-12.5"));
    }
}
