// crates/gc_io/src/drivers/gdal/writer.rs

//! GeoTIFF 写出驱动
//!
//! 将量化后的灰度波段写为 GeoTIFF。输出尺寸与波段数由首波段决定，
//! GDAL 像元类型跟随量化结果的整型宽度 (Byte / UInt16 / UInt32)。
//! 投影字符串先经别名解析，命中 EPSG:4326 / EPSG:3857 时写入完整 WKT，
//! 否则按自定义 WKT 原样写入。

use std::path::Path;

use gc_core::quantize::QuantizedBand;

use crate::error::IoResult;

#[cfg(feature = "gdal")]
use gc_core::error::GcError;
#[cfg(feature = "gdal")]
use gc_core::quantize::GrayPixels;

use super::error::GdalError;

/// 写出灰度 GeoTIFF
///
/// 波段列表为空时不创建文件，直接返回成功。
///
/// # Errors
/// 创建数据集、写入元数据或写入波段失败时返回错误
#[cfg(feature = "gdal")]
pub fn write_gray(
    bands: &[QuantizedBand],
    path: impl AsRef<Path>,
    geo_transform: Option<[f64; 6]>,
    projection: Option<&str>,
) -> IoResult<()> {
    let path = path.as_ref();
    let Some(first) = bands.first() else {
        tracing::info!("没有波段数据，跳过写出");
        return Ok(());
    };

    let (width, height) = (first.width(), first.height());
    for (i, band) in bands.iter().enumerate() {
        if band.width() != width || band.height() != height {
            // GDAL 的缓冲区写入要求与数据集尺寸一致，提前报告
            return Err(GcError::SizeMismatch {
                name: "band",
                expected: first.len(),
                actual: band.len(),
            }
            .into());
        }
        if std::mem::discriminant(band.pixels()) != std::mem::discriminant(first.pixels()) {
            return Err(GdalError::BandTypeMismatch(i + 1).into());
        }
    }

    let mut dataset = match first.pixels() {
        GrayPixels::U8(_) => create_gtiff::<u8>(path, width, height, bands.len())?,
        GrayPixels::U16(_) => create_gtiff::<u16>(path, width, height, bands.len())?,
        GrayPixels::U32(_) => create_gtiff::<u32>(path, width, height, bands.len())?,
    };

    if let Some(gt) = geo_transform {
        dataset.set_geo_transform(&gt).map_err(GdalError::from)?;
    }
    if let Some(proj) = projection {
        let wkt = gc_geo::resolve_projection(proj);
        dataset.set_projection(&wkt).map_err(GdalError::from)?;
    }

    for (i, band) in bands.iter().enumerate() {
        let index = i + 1;
        match band.pixels() {
            GrayPixels::U8(v) => write_band(&dataset, index, width, height, v.clone())?,
            GrayPixels::U16(v) => write_band(&dataset, index, width, height, v.clone())?,
            GrayPixels::U32(v) => write_band(&dataset, index, width, height, v.clone())?,
        }
    }

    tracing::info!("影像保存成功: {}", path.display());
    Ok(())
}

#[cfg(feature = "gdal")]
fn create_gtiff<T: gdal::raster::GdalType>(
    path: &Path,
    width: usize,
    height: usize,
    band_count: usize,
) -> Result<gdal::Dataset, GdalError> {
    let driver = gdal::DriverManager::get_driver_by_name("GTiff")?;
    Ok(driver.create_with_band_type::<T, _>(path, width, height, band_count)?)
}

#[cfg(feature = "gdal")]
fn write_band<T: gdal::raster::GdalType + Copy>(
    dataset: &gdal::Dataset,
    index: usize,
    width: usize,
    height: usize,
    data: Vec<T>,
) -> Result<(), GdalError> {
    let mut band = dataset.rasterband(index)?;
    let mut buffer = gdal::raster::Buffer::new((width, height), data);
    band.write((0, 0), (width, height), &mut buffer)?;
    Ok(())
}

/// 写出灰度 GeoTIFF (无 GDAL 支持)
///
/// 空波段列表仍为无操作；否则返回 `NotAvailable`。
///
/// # Errors
/// 波段列表非空时返回 `NotAvailable`
#[cfg(not(feature = "gdal"))]
pub fn write_gray(
    bands: &[QuantizedBand],
    _path: impl AsRef<Path>,
    _geo_transform: Option<[f64; 6]>,
    _projection: Option<&str>,
) -> IoResult<()> {
    if bands.is_empty() {
        tracing::info!("没有波段数据，跳过写出");
        return Ok(());
    }
    Err(GdalError::NotAvailable.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_band_list_is_noop() {
        // 空波段列表：不产生文件，也不报错
        let path = std::env::temp_dir().join("gc_writer_empty_test.tif");
        let result = write_gray(&[], &path, None, None);
        assert!(result.is_ok());
        assert!(!path.exists());
    }
}

#[cfg(all(test, feature = "gdal"))]
mod gdal_tests {
    use super::*;
    use crate::drivers::gdal::driver::read_raster;
    use gc_core::band::Band;
    use gc_core::quantize::{quantize_bands, BitDepth};
    use gc_geo::parse_epsg;

    fn quantized_pair() -> Vec<QuantizedBand> {
        let a = Band::new(vec![0.0, 1.0, 2.0, 3.0], 2, 2).unwrap();
        let b = Band::new(vec![3.0, 2.0, 1.0, 0.0], 2, 2).unwrap();
        quantize_bands(&[a, b], BitDepth::new(8).unwrap()).unwrap()
    }

    #[test]
    fn test_roundtrip_metadata() {
        let path = "/vsimem/gc_roundtrip.tif";
        let gt = [116.0, 0.5, 0.0, 40.0, 0.0, -0.5];
        let bands = quantized_pair();
        write_gray(&bands, path, Some(gt), Some("wgs84")).unwrap();

        let dataset = read_raster(path).unwrap();
        assert_eq!(dataset.metadata.width, 2);
        assert_eq!(dataset.metadata.height, 2);
        assert_eq!(dataset.metadata.band_count, 2);
        assert_eq!(dataset.metadata.geo_transform, gt);
        // 别名写出后应能解析回 EPSG:4326
        let proj = dataset.metadata.projection.as_deref().unwrap();
        assert_eq!(parse_epsg(proj), Some(4326));
    }

    #[test]
    fn test_roundtrip_pixels() {
        let path = "/vsimem/gc_pixels.tif";
        let bands = quantized_pair();
        write_gray(&bands, path, None, None).unwrap();

        let dataset = read_raster(path).unwrap();
        // 首波段最大值在右下角
        assert_eq!(dataset.bands[0].values()[3], 255.0);
        // 次波段最大值在左上角
        assert_eq!(dataset.bands[1].values()[0], 255.0);
    }

    #[test]
    fn test_custom_wkt_passthrough() {
        let path = "/vsimem/gc_custom_proj.tif";
        let bands = quantized_pair();
        // 未命中别名的字符串按自定义 WKT 写入
        let custom = gc_geo::crs::WEB_MERCATOR_WKT;
        write_gray(&bands, path, None, Some(custom)).unwrap();

        let dataset = read_raster(path).unwrap();
        let proj = dataset.metadata.projection.as_deref().unwrap();
        assert_eq!(parse_epsg(proj), Some(3857));
    }
}
