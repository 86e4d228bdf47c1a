// apps/gc_cli/src/commands/convert.rs

//! 转换命令
//!
//! 读取影像 → 幂律变换 → 位深量化 → 写出灰度 GeoTIFF。
//! 输出固定为工作目录下的 cvtImg.tif。

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

use gc_core::{power_law_bands, quantize_bands, ConvertConfig};
use gc_io::{read_raster, write_gray};

/// 转换参数
#[derive(Args)]
pub struct ConvertArgs {
    /// 输入影像路径
    pub input: PathBuf,

    /// 目标位深 (1-32)
    #[arg(short, long, default_value_t = 10)]
    pub bits: u8,
}

/// 执行转换命令
pub fn execute(args: ConvertArgs) -> Result<()> {
    info!("=== GrayCast 转换启动 ===");

    let config = ConvertConfig {
        bits: args.bits,
        ..ConvertConfig::default()
    };
    let depth = config.bit_depth().context("位深参数无效")?;
    info!("目标位深: {} 位, 灰度级: 0..={}", depth.bits(), depth.max_level());

    let start = Instant::now();

    let dataset = read_raster(&args.input).context("读取影像失败")?;

    let transformed = power_law_bands(&dataset.bands);
    let quantized = quantize_bands(&transformed, depth).context("量化失败")?;

    write_gray(
        &quantized,
        &config.output,
        Some(dataset.metadata.geo_transform),
        dataset.metadata.projection.as_deref(),
    )
    .context("写出影像失败")?;

    info!(
        "=== 转换完成: {} ({:.2} s) ===",
        config.output.display(),
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
