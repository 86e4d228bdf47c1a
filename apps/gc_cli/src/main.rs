// apps/gc_cli/src/main.rs

//! GrayCast 命令行界面
//!
//! 将多波段栅格影像经幂律变换离散化为灰度 GeoTIFF 的命令行工具。

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// GrayCast 灰度离散化命令行工具
#[derive(Parser)]
#[command(name = "gc_cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Multi-band raster to discretized grayscale GeoTIFF converter", long_about = None)]
struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 转换影像
    Convert(commands::convert::ConvertArgs),
    /// 显示影像信息
    Info(commands::info::InfoArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // 执行命令，所有失败汇入同一出口
    let result = match cli.command {
        Commands::Convert(args) => commands::convert::execute(args),
        Commands::Info(args) => commands::info::execute(args),
    };

    if let Err(err) = result {
        tracing::error!("执行失败: {:#}", err);
        eprintln!("用法: gc_cli convert <输入影像> --bits 10");
        std::process::exit(1);
    }

    Ok(())
}
