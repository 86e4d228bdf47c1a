// crates/gc_io/src/drivers/mod.rs

//! 栅格驱动模块

pub mod gdal;

pub use gdal::{write_gray, GdalError, RasterDataset, RasterMetadata};
