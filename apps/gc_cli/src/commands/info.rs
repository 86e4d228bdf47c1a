// apps/gc_cli/src/commands/info.rs

//! 信息显示命令
//!
//! 显示影像元数据，不做转换。

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use gc_geo::parse_epsg;
use gc_io::read_metadata;

/// 信息显示参数
#[derive(Args)]
pub struct InfoArgs {
    /// 输入影像路径
    pub input: PathBuf,
}

/// 执行信息命令
pub fn execute(args: InfoArgs) -> Result<()> {
    let meta = read_metadata(&args.input).context("读取影像元数据失败")?;

    println!("=== 影像信息 ===");
    println!("路径: {}", args.input.display());
    println!("尺寸: {} x {} 像素", meta.width, meta.height);
    println!("波段数: {}", meta.band_count);

    let (rx, ry) = meta.resolution();
    println!("分辨率: {} x {}", rx, ry);

    let (min_x, min_y, max_x, max_y) = meta.extent();
    println!("范围: ({}, {}) - ({}, {})", min_x, min_y, max_x, max_y);
    println!("地理变换: {:?}", meta.geo_transform);

    match &meta.projection {
        Some(proj) => {
            println!("投影: {}", proj);
            if let Some(code) = parse_epsg(proj) {
                println!("EPSG 代码: {}", code);
            }
        }
        None => println!("投影: (未定义)"),
    }

    if let Some(nodata) = meta.nodata {
        println!("NoData 值: {}", nodata);
    }

    Ok(())
}
