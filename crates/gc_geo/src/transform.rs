// crates/gc_geo/src/transform.rs
//! 仿射变换
//!
//! 像素坐标到地理坐标的六参数仿射映射。
//!
//! 变换公式：
//! - x' = a*x + b*y + c
//! - y' = d*x + e*y + f
//!
//! # 示例
//!
//! ```
//! use gc_geo::transform::AffineTransform;
//!
//! let affine = AffineTransform::from_gdal_geotransform([100.0, 1.0, 0.0, 200.0, 0.0, -1.0]);
//! let (x, y) = affine.apply(10.0, 20.0);
//! assert!((x - 110.0).abs() < 1e-10);
//! assert!((y - 180.0).abs() < 1e-10);
//! ```

/// 仿射变换矩阵
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    /// x 方向缩放系数
    pub a: f64,
    /// x 方向倾斜系数
    pub b: f64,
    /// x 平移量
    pub c: f64,
    /// y 方向倾斜系数
    pub d: f64,
    /// y 方向缩放系数
    pub e: f64,
    /// y 平移量
    pub f: f64,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform {
    /// 恒等变换
    #[must_use]
    pub fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 0.0,
            e: 1.0,
            f: 0.0,
        }
    }

    /// 从 GDAL `GeoTransform` 数组创建
    ///
    /// GDAL 格式: [c, a, b, f, d, e]
    #[must_use]
    pub fn from_gdal_geotransform(gt: [f64; 6]) -> Self {
        Self {
            c: gt[0],
            a: gt[1],
            b: gt[2],
            f: gt[3],
            d: gt[4],
            e: gt[5],
        }
    }

    /// 转换为 GDAL `GeoTransform` 格式
    #[must_use]
    pub fn to_gdal_geotransform(&self) -> [f64; 6] {
        [self.c, self.a, self.b, self.f, self.d, self.e]
    }

    /// 应用正向变换（像素坐标 → 地理坐标）
    #[inline]
    #[must_use]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.b * y + self.c,
            self.d * x + self.e * y + self.f,
        )
    }

    /// 计算逆变换（地理坐标 → 像素坐标）
    ///
    /// 矩阵奇异时返回 None
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let det = self.a * self.e - self.b * self.d;
        if det.abs() < 1e-15 {
            return None;
        }
        let inv_det = 1.0 / det;
        Some(Self {
            a: self.e * inv_det,
            b: -self.b * inv_det,
            c: (self.b * self.f - self.e * self.c) * inv_det,
            d: -self.d * inv_det,
            e: self.a * inv_det,
            f: (self.d * self.c - self.a * self.f) * inv_det,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let affine = AffineTransform::identity();
        let (x, y) = affine.apply(12.5, -3.0);
        assert!((x - 12.5).abs() < 1e-12);
        assert!((y + 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_gdal_roundtrip() {
        let gt = [116.0, 0.001, 0.0, 40.0, 0.0, -0.001];
        let affine = AffineTransform::from_gdal_geotransform(gt);
        assert_eq!(affine.to_gdal_geotransform(), gt);
    }

    #[test]
    fn test_apply_north_up() {
        // 北朝上影像：原点 (100, 200)，分辨率 1，y 向下递减
        let affine = AffineTransform::from_gdal_geotransform([100.0, 1.0, 0.0, 200.0, 0.0, -1.0]);
        let (x, y) = affine.apply(10.0, 20.0);
        assert!((x - 110.0).abs() < 1e-12);
        assert!((y - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_inverse_composes_to_identity() {
        let affine = AffineTransform::from_gdal_geotransform([100.0, 0.5, 0.0, 200.0, 0.0, -0.5]);
        let inv = affine.inverse().unwrap();
        let (gx, gy) = affine.apply(7.0, 11.0);
        let (px, py) = inv.apply(gx, gy);
        assert!((px - 7.0).abs() < 1e-10);
        assert!((py - 11.0).abs() < 1e-10);
    }

    #[test]
    fn test_singular_has_no_inverse() {
        let singular = AffineTransform {
            a: 0.0,
            b: 0.0,
            c: 1.0,
            d: 0.0,
            e: 0.0,
            f: 1.0,
        };
        assert!(singular.inverse().is_none());
    }
}
