// crates/gc_io/src/drivers/gdal/mod.rs

//! GDAL 栅格驱动模块
//!
//! 读取 GDAL 支持的任意栅格格式，写出 GeoTIFF。
//!
//! # 功能
//!
//! - 读取栅格元数据（尺寸、波段数、地理变换、投影、NoData）
//! - 按波段读取像元数据
//! - 写出量化后的灰度 GeoTIFF
//!
//! # 依赖
//!
//! 需要启用 `gdal` feature 并安装 GDAL 库。

mod driver;
mod error;
mod writer;

pub use driver::*;
pub use error::*;
pub use writer::*;
