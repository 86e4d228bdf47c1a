// crates/gc_core/src/band.rs

//! 波段数据模型
//!
//! 一个波段是多波段栅格影像的一层二维数据，按行主序存储为 `f64`。
//! 同一影像的所有波段宽高相同。

use crate::error::{GcError, GcResult};

/// 栅格波段数据
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    /// 行主序像元数据
    data: Vec<f64>,
    /// 宽度 (像素)
    width: usize,
    /// 高度 (像素)
    height: usize,
}

impl Band {
    /// 从行主序数据创建波段
    ///
    /// # Errors
    /// 数据长度与宽高乘积不一致时返回错误
    pub fn new(data: Vec<f64>, width: usize, height: usize) -> GcResult<Self> {
        if data.len() != width * height {
            return Err(GcError::SizeMismatch {
                name: "band",
                expected: width * height,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

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
        self.data.len()
    }

    /// 是否为空波段
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// 行主序像元切片
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// 获取指定位置的值
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y * self.width + x])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_new() {
        let band = Band::new(vec![0.0, 1.0, 2.0, 3.0], 2, 2).unwrap();
        assert_eq!(band.width(), 2);
        assert_eq!(band.height(), 2);
        assert_eq!(band.len(), 4);
        assert!(!band.is_empty());
    }

    #[test]
    fn test_band_size_mismatch() {
        // 3 个值装不进 2x2
        let result = Band::new(vec![0.0, 1.0, 2.0], 2, 2);
        assert!(matches!(result, Err(GcError::SizeMismatch { .. })));
    }

    #[test]
    fn test_band_get() {
        let band = Band::new(vec![0.0, 1.0, 2.0, 3.0], 2, 2).unwrap();
        assert_eq!(band.get(0, 0), Some(0.0));
        assert_eq!(band.get(1, 1), Some(3.0));
        assert_eq!(band.get(2, 0), None);
        assert_eq!(band.get(0, 2), None);
    }
}
