// crates/gc_io/src/error.rs
//! IO 错误类型定义
//!
//! 提供 IO 模块的统一错误枚举，通过 thiserror 自动转换底层错误。

use thiserror::Error;

use crate::drivers::gdal::GdalError;
use gc_core::error::GcError;

/// IO 模块结果类型别名
pub type IoResult<T> = Result<T, IoError>;

/// IO 错误枚举
#[derive(Error, Debug)]
pub enum IoError {
    /// GDAL 驱动错误
    #[error("GDAL 驱动错误: {0}")]
    Driver(#[from] GdalError),

    /// 核心数据错误
    #[error("数据错误: {0}")]
    Core(#[from] GcError),
}
