// crates/gc_io/src/lib.rs

//! GrayCast IO 模块
//!
//! 提供栅格影像的读取与写出。
//!
//! # 模块
//!
//! - [`drivers`]: GDAL 栅格驱动（读取任意 GDAL 支持的格式，写出 GeoTIFF）
//! - [`error`]: IO 错误类型
//!
//! # 可选依赖
//!
//! - `gdal`: 启用 GDAL 栅格驱动。未启用时读写接口返回"GDAL 不可用"错误，
//!   但空波段列表的写出仍是无操作。

pub mod drivers;
pub mod error;

// 重导出常用类型
pub use drivers::gdal::{read_metadata, read_raster, GdalDriver, GdalError, RasterDataset, RasterMetadata};
pub use drivers::write_gray;
pub use error::{IoError, IoResult};
