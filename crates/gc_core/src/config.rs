// crates/gc_core/src/config.rs

//! 转换配置
//!
//! 定义一次灰度转换的全部参数，可从 JSON 反序列化，
//! 字段缺省时使用与原始流程一致的默认值。

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::GcResult;
use crate::quantize::BitDepth;

/// 灰度转换配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// 目标位深
    #[serde(default = "default_bits")]
    pub bits: u8,

    /// 输出文件路径
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_bits() -> u8 {
    10
}

fn default_output() -> PathBuf {
    PathBuf::from("cvtImg.tif")
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            bits: default_bits(),
            output: default_output(),
        }
    }
}

impl ConvertConfig {
    /// 校验并返回位深
    ///
    /// # Errors
    /// 位深不在 1..=32 范围内时返回错误
    pub fn bit_depth(&self) -> GcResult<BitDepth> {
        BitDepth::new(self.bits)
    }
}
