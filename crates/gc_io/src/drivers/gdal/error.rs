// crates/gc_io/src/drivers/gdal/error.rs

//! GDAL 错误类型

use std::fmt;

/// GDAL 驱动错误
#[derive(Debug)]
pub enum GdalError {
    /// 文件不存在
    FileNotFound(String),
    /// 波段不存在
    BandNotFound(usize),
    /// 波段像元类型与首波段不一致
    BandTypeMismatch(usize),
    /// GDAL 不可用
    NotAvailable,
    /// 其他错误
    Other(String),
}

impl fmt::Display for GdalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GdalError::FileNotFound(path) => write!(f, "文件不存在: {}", path),
            GdalError::BandNotFound(idx) => write!(f, "波段 {} 不存在", idx),
            GdalError::BandTypeMismatch(idx) => {
                write!(f, "波段 {} 的像元类型与首波段不一致", idx)
            }
            GdalError::NotAvailable => write!(f, "GDAL 不可用 (编译时未启用 gdal feature)"),
            GdalError::Other(msg) => write!(f, "GDAL 错误: {}", msg),
        }
    }
}

impl std::error::Error for GdalError {}

#[cfg(feature = "gdal")]
impl From<gdal::errors::GdalError> for GdalError {
    fn from(e: gdal::errors::GdalError) -> Self {
        GdalError::Other(e.to_string())
    }
}
