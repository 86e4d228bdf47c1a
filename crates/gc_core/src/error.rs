// crates/gc_core/src/error.rs

//! 错误处理模块，定义统一错误类型
//!
//! 提供 `GcError` 枚举和 `GcResult` 类型别名，用于整个项目的错误处理。
//! IO 驱动相关的错误在 gc_io 中定义，并在其错误枚举中包装本类型。
//!
//! # 示例
//!
//! ```
//! use gc_core::error::{GcError, GcResult};
//!
//! fn check_bits(bits: u8) -> GcResult<()> {
//!     if bits == 0 {
//!         return Err(GcError::invalid_input("位深不能为 0"));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// 统一结果类型
pub type GcResult<T> = Result<T, GcError>;

/// GrayCast 错误类型
#[derive(Error, Debug)]
pub enum GcError {
    /// 无效输入
    #[error("无效的输入数据: {message}")]
    InvalidInput {
        /// 说明无效原因
        message: String,
    },

    /// 数据超出范围
    #[error("数据超出范围: {field}={value}, 期望范围=[{min}, {max}]")]
    OutOfRange {
        /// 字段名
        field: &'static str,
        /// 实际值
        value: f64,
        /// 最小允许值
        min: f64,
        /// 最大允许值
        max: f64,
    },

    /// 数组大小不匹配
    #[error("数组大小不匹配: {name} 期望{expected}, 实际{actual}")]
    SizeMismatch {
        /// 数据名称
        name: &'static str,
        /// 期望大小
        expected: usize,
        /// 实际大小
        actual: usize,
    },
}

impl GcError {
    /// 构造无效输入错误
    pub fn invalid_input(message: impl Into<String>) -> Self {
        GcError::InvalidInput {
            message: message.into(),
        }
    }

    /// 构造范围错误
    pub fn out_of_range(field: &'static str, value: f64, min: f64, max: f64) -> Self {
        GcError::OutOfRange {
            field,
            value,
            min,
            max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = GcError::invalid_input("没有波段数据");
        assert!(err.to_string().contains("没有波段数据"));
    }

    #[test]
    fn test_out_of_range_display() {
        let err = GcError::out_of_range("bits", 33.0, 1.0, 32.0);
        let msg = err.to_string();
        assert!(msg.contains("bits"));
        assert!(msg.contains("33"));
    }
}
