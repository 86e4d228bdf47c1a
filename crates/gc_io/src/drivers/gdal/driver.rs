// crates/gc_io/src/drivers/gdal/driver.rs

//! GDAL 栅格读取驱动

use std::path::Path;

use gc_core::band::Band;

use super::error::GdalError;
use crate::error::IoResult;
use gc_geo::transform::AffineTransform;

/// 栅格元数据
#[derive(Debug, Clone)]
pub struct RasterMetadata {
    /// 宽度 (像素)
    pub width: usize,
    /// 高度 (像素)
    pub height: usize,
    /// 波段数
    pub band_count: usize,
    /// 地理变换参数 [x_origin, x_res, x_rot, y_origin, y_rot, y_res]
    pub geo_transform: [f64; 6],
    /// 投影 WKT
    pub projection: Option<String>,
    /// NoData 值
    pub nodata: Option<f64>,
}

impl RasterMetadata {
    /// 获取像素分辨率
    #[must_use]
    pub fn resolution(&self) -> (f64, f64) {
        (self.geo_transform[1].abs(), self.geo_transform[5].abs())
    }

    /// 像素坐标到地理坐标的仿射变换
    #[must_use]
    pub fn affine(&self) -> AffineTransform {
        AffineTransform::from_gdal_geotransform(self.geo_transform)
    }

    /// 获取地理范围 (min_x, min_y, max_x, max_y)
    #[must_use]
    pub fn extent(&self) -> (f64, f64, f64, f64) {
        let affine = self.affine();
        let (x0, y0) = affine.apply(0.0, 0.0);
        let (x1, y1) = affine.apply(self.width as f64, self.height as f64);
        (x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1))
    }
}

/// 读取到内存的栅格数据集
#[derive(Debug, Clone)]
pub struct RasterDataset {
    /// 元数据
    pub metadata: RasterMetadata,
    /// 按波段序号排列的波段数据
    pub bands: Vec<Band>,
}

/// GDAL 栅格驱动
#[cfg(feature = "gdal")]
pub struct GdalDriver {
    dataset: gdal::Dataset,
    metadata: RasterMetadata,
}

#[cfg(feature = "gdal")]
impl GdalDriver {
    /// 打开栅格文件
    ///
    /// # Errors
    /// 文件不存在或 GDAL 无法识别时返回错误
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GdalError> {
        use gdal::Dataset;

        let path = path.as_ref();
        if !path.exists() && !path.starts_with("/vsimem") {
            return Err(GdalError::FileNotFound(path.display().to_string()));
        }

        let dataset = Dataset::open(path)?;
        let (width, height) = dataset.raster_size();
        let band_count = dataset.raster_count();
        // 数据集缺少地理变换时 GDAL 约定返回单位变换
        let geo_transform = dataset
            .geo_transform()
            .unwrap_or([0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
        let projection = dataset.projection();
        let projection = if projection.is_empty() {
            None
        } else {
            Some(projection)
        };

        let nodata = if band_count > 0 {
            dataset.rasterband(1).ok().and_then(|b| b.no_data_value())
        } else {
            None
        };

        let metadata = RasterMetadata {
            width,
            height,
            band_count,
            geo_transform,
            projection,
            nodata,
        };

        Ok(Self { dataset, metadata })
    }

    /// 获取元数据
    #[must_use]
    pub fn metadata(&self) -> &RasterMetadata {
        &self.metadata
    }

    /// 读取波段数据（波段序号从 1 起）
    ///
    /// # Errors
    /// 波段不存在或读取失败时返回错误
    pub fn read_band(&self, band_idx: usize) -> Result<Band, GdalError> {
        if band_idx == 0 || band_idx > self.metadata.band_count {
            return Err(GdalError::BandNotFound(band_idx));
        }

        let band = self.dataset.rasterband(band_idx)?;
        let (width, height) = (self.metadata.width, self.metadata.height);
        let buffer = band.read_as::<f64>((0, 0), (width, height), (width, height), None)?;
        let (_, data) = buffer.into_shape_and_vec();

        Band::new(data, width, height).map_err(|e| GdalError::Other(e.to_string()))
    }

    /// 读取所有波段
    ///
    /// # Errors
    /// 任一波段读取失败时返回错误
    pub fn read_all_bands(&self) -> Result<Vec<Band>, GdalError> {
        let mut bands = Vec::with_capacity(self.metadata.band_count);
        for i in 1..=self.metadata.band_count {
            bands.push(self.read_band(i)?);
            tracing::info!("波段 {} 读取完成", i);
        }
        Ok(bands)
    }
}

/// 无 GDAL 支持时的占位实现
#[cfg(not(feature = "gdal"))]
pub struct GdalDriver;

#[cfg(not(feature = "gdal"))]
impl GdalDriver {
    /// 打开栅格文件 (无 GDAL 支持)
    ///
    /// # Errors
    /// 始终返回 `NotAvailable`
    pub fn open(_path: impl AsRef<Path>) -> Result<Self, GdalError> {
        Err(GdalError::NotAvailable)
    }
}

/// 读取栅格元数据，不读取像元
///
/// # Errors
/// 打开失败时返回错误
#[cfg(feature = "gdal")]
pub fn read_metadata(path: impl AsRef<Path>) -> IoResult<RasterMetadata> {
    let driver = GdalDriver::open(path)?;
    Ok(driver.metadata().clone())
}

/// 读取栅格元数据 (无 GDAL 支持)
///
/// # Errors
/// 始终返回 `NotAvailable`
#[cfg(not(feature = "gdal"))]
pub fn read_metadata(_path: impl AsRef<Path>) -> IoResult<RasterMetadata> {
    Err(GdalError::NotAvailable.into())
}

/// 读取整幅栅格影像到内存
///
/// 打开失败会先记录日志再返回错误。
///
/// # Errors
/// 打开或读取失败时返回错误
#[cfg(feature = "gdal")]
pub fn read_raster(path: impl AsRef<Path>) -> IoResult<RasterDataset> {
    let path = path.as_ref();
    let driver = match GdalDriver::open(path) {
        Ok(driver) => driver,
        Err(e) => {
            tracing::error!("无法打开影像文件: {}", e);
            return Err(e.into());
        }
    };

    let metadata = driver.metadata().clone();
    tracing::info!("打开影像成功: {}", path.display());
    tracing::info!("影像高度: {} 像素, 宽度: {} 像素", metadata.height, metadata.width);
    tracing::info!("共 {} 个波段", metadata.band_count);

    let bands = driver.read_all_bands()?;
    Ok(RasterDataset { metadata, bands })
}

/// 读取整幅栅格影像 (无 GDAL 支持)
///
/// # Errors
/// 始终返回 `NotAvailable`
#[cfg(not(feature = "gdal"))]
pub fn read_raster(_path: impl AsRef<Path>) -> IoResult<RasterDataset> {
    Err(GdalError::NotAvailable.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta() -> RasterMetadata {
        RasterMetadata {
            width: 100,
            height: 100,
            band_count: 1,
            geo_transform: [0.0, 1.0, 0.0, 100.0, 0.0, -1.0],
            projection: None,
            nodata: None,
        }
    }

    #[test]
    fn test_raster_metadata_extent() {
        let (min_x, min_y, max_x, max_y) = meta().extent();
        assert!((min_x - 0.0).abs() < 1e-10);
        assert!((max_x - 100.0).abs() < 1e-10);
        assert!((min_y - 0.0).abs() < 1e-10);
        assert!((max_y - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_raster_metadata_resolution() {
        let (rx, ry) = meta().resolution();
        assert!((rx - 1.0).abs() < 1e-10);
        assert!((ry - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_raster_metadata_affine() {
        // 仿射变换与地理变换数组一致
        let m = meta();
        assert_eq!(m.affine().to_gdal_geotransform(), m.geo_transform);
        let (x, y) = m.affine().apply(10.0, 20.0);
        assert!((x - 10.0).abs() < 1e-10);
        assert!((y - 80.0).abs() < 1e-10);
    }
}
