// crates/gc_core/src/lib.rs

//! GrayCast 核心模块
//!
//! 提供灰度离散化的数值管线：波段数据模型、幂律辐射变换、
//! 位深量化以及转换配置。
//!
//! # 模块
//!
//! - [`band`]: 波段数据模型
//! - [`transform`]: 幂律强度变换
//! - [`quantize`]: 位深量化器
//! - [`config`]: 转换配置
//! - [`error`]: 统一错误类型
//!
//! # 使用示例
//!
//! ```
//! use gc_core::{Band, BitDepth, power_law_bands, quantize_bands};
//!
//! let band = Band::new(vec![0.0, 1.0, 2.0, 3.0], 2, 2).unwrap();
//! let depth = BitDepth::new(8).unwrap();
//! let transformed = power_law_bands(&[band]);
//! let quantized = quantize_bands(&transformed, depth).unwrap();
//! assert_eq!(quantized.len(), 1);
//! ```

pub mod band;
pub mod config;
pub mod error;
pub mod quantize;
pub mod transform;

// 重导出常用类型
pub use band::Band;
pub use config::ConvertConfig;
pub use error::{GcError, GcResult};
pub use quantize::{quantize, quantize_bands, BitDepth, GrayPixels, QuantizedBand};
pub use transform::{power_law, power_law_bands, power_law_value, GAIN, GAMMA};
