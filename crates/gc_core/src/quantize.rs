// crates/gc_core/src/quantize.rs

//! 位深量化器
//!
//! 将变换后的浮点波段线性缩放到 `[0, 2^bits - 1]` 并截断为整型灰度。
//! 缩放系数由全部波段的联合最值决定，输出像元类型由位深一次性选定，
//! 对所有波段统一适用。
//!
//! # 量化公式
//!
//! `scale = (2^bits - 1) / (max - min)`，每个值乘以 `scale` 后
//! 向零截断转换为整型。注意不减去最小值，与原始辐射定标流程一致。
//!
//! # 退化情形
//!
//! 当全部像元相等时 `max == min`，缩放系数为无穷大，输出未定义：
//! 浮点到整型的饱和转换将 +∞ 映射为类型最大值、NaN 映射为 0。
//! 此情形不做防护，仅在此处说明。

use crate::band::Band;
use crate::error::{GcError, GcResult};

/// 目标位深，合法范围 1..=32
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitDepth(u8);

impl BitDepth {
    /// 最小合法位深
    pub const MIN: u8 = 1;
    /// 最大合法位深
    pub const MAX: u8 = 32;

    /// 创建位深
    ///
    /// # Errors
    /// 位深不在 1..=32 范围内时返回错误
    pub fn new(bits: u8) -> GcResult<Self> {
        if bits < Self::MIN || bits > Self::MAX {
            return Err(GcError::out_of_range(
                "bits",
                f64::from(bits),
                f64::from(Self::MIN),
                f64::from(Self::MAX),
            ));
        }
        Ok(Self(bits))
    }

    /// 位深数值
    #[must_use]
    pub fn bits(&self) -> u8 {
        self.0
    }

    /// 最大灰度级 `2^bits - 1`
    #[must_use]
    pub fn max_level(&self) -> u64 {
        (1_u64 << self.0) - 1
    }
}

/// 量化后的灰度像元，宽度由位深决定
///
/// 1-8 位用 8 位无符号，9-16 位用 16 位无符号，17-32 位用 32 位无符号。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrayPixels {
    /// 8 位无符号灰度
    U8(Vec<u8>),
    /// 16 位无符号灰度
    U16(Vec<u16>),
    /// 32 位无符号灰度
    U32(Vec<u32>),
}

impl GrayPixels {
    /// 像元总数
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            GrayPixels::U8(v) => v.len(),
            GrayPixels::U16(v) => v.len(),
            GrayPixels::U32(v) => v.len(),
        }
    }

    /// 是否为空
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 量化后的波段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantizedBand {
    pixels: GrayPixels,
    width: usize,
    height: usize,
}

impl QuantizedBand {
    /// 宽度 (像素)
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// 高度 (像素)
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// 像元总数
    #[must_use]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// 是否为空波段
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// 灰度像元数据
    #[must_use]
    pub fn pixels(&self) -> &GrayPixels {
        &self.pixels
    }

    /// 8 位像元切片（类型不符时为 None）
    #[must_use]
    pub fn as_u8(&self) -> Option<&[u8]> {
        match &self.pixels {
            GrayPixels::U8(v) => Some(v),
            _ => None,
        }
    }

    /// 16 位像元切片（类型不符时为 None）
    #[must_use]
    pub fn as_u16(&self) -> Option<&[u16]> {
        match &self.pixels {
            GrayPixels::U16(v) => Some(v),
            _ => None,
        }
    }

    /// 32 位像元切片（类型不符时为 None）
    #[must_use]
    pub fn as_u32(&self) -> Option<&[u32]> {
        match &self.pixels {
            GrayPixels::U32(v) => Some(v),
            _ => None,
        }
    }
}

/// 量化全部波段
///
/// 最值在所有波段的全部像元上联合统计，缩放系数与输出类型对
/// 各波段统一适用。
///
/// # Errors
/// 波段列表为空或各波段形状不一致时返回错误
pub fn quantize_bands(bands: &[Band], depth: BitDepth) -> GcResult<Vec<QuantizedBand>> {
    let first = bands
        .first()
        .ok_or_else(|| GcError::invalid_input("没有波段数据，无法量化"))?;

    for band in bands {
        if band.width() != first.width() || band.height() != first.height() {
            return Err(GcError::SizeMismatch {
                name: "band",
                expected: first.len(),
                actual: band.len(),
            });
        }
    }

    let (min, max) = joint_range(bands);
    let scale = depth.max_level() as f64 / (max - min);

    Ok(bands
        .iter()
        .map(|band| quantize_with_scale(band, depth, scale))
        .collect())
}

/// 量化单个波段
///
/// # Errors
/// 错误条件与 [`quantize_bands`] 相同
pub fn quantize(band: &Band, depth: BitDepth) -> GcResult<QuantizedBand> {
    let mut result = quantize_bands(std::slice::from_ref(band), depth)?;
    Ok(result.remove(0))
}

/// 全部波段的联合最值
fn joint_range(bands: &[Band]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for band in bands {
        for &v in band.values() {
            min = min.min(v);
            max = max.max(v);
        }
    }
    (min, max)
}

fn quantize_with_scale(band: &Band, depth: BitDepth, scale: f64) -> QuantizedBand {
    let pixels = match depth.bits() {
        1..=8 => GrayPixels::U8(band.values().iter().map(|&v| (v * scale) as u8).collect()),
        9..=16 => GrayPixels::U16(band.values().iter().map(|&v| (v * scale) as u16).collect()),
        // BitDepth 构造已保证 17..=32
        _ => GrayPixels::U32(band.values().iter().map(|&v| (v * scale) as u32).collect()),
    };
    QuantizedBand {
        pixels,
        width: band.width(),
        height: band.height(),
    }
}
