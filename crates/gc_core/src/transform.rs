// crates/gc_core/src/transform.rs

//! 幂律强度变换
//!
//! 对每个像元应用 `v^1.5 * 1e-10`，形状不变，纯函数。
//! 负值输入经分数次幂运算产生 NaN，由调用方保证输入非负。

use num_traits::Float;

use crate::band::Band;

/// 幂律指数
pub const GAMMA: f64 = 1.5;

/// 辐射增益系数
pub const GAIN: f64 = 1e-10;

/// 对单个值应用幂律变换
#[inline]
#[must_use]
pub fn power_law_value<T: Float>(value: T) -> T {
    let gamma = T::from(GAMMA).unwrap_or_else(T::one);
    let gain = T::from(GAIN).unwrap_or_else(T::one);
    value.powf(gamma) * gain
}

/// 对单个波段应用幂律变换
#[must_use]
pub fn power_law(band: &Band) -> Band {
    let data: Vec<f64> = band.values().iter().map(|&v| power_law_value(v)).collect();
    // 形状不变，重建不会失败
    Band::new(data, band.width(), band.height()).expect("变换不改变波段形状")
}

/// 对全部波段应用幂律变换
#[must_use]
pub fn power_law_bands(bands: &[Band]) -> Vec<Band> {
    bands.iter().map(power_law).collect()
}
