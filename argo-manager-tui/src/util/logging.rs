//! 日志初始化
//!
//! 终端被 UI 占用，日志写入文件。
//! 各模块统一通过 `log` 门面记录，由 tracing-subscriber 接收并格式化。

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backend::AppConfig;

/// 初始化文件日志，返回日志文件路径
pub fn init_logging(config: &AppConfig) -> Result<PathBuf> {
    let path = config.log_file_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(build_filter(&config.log_level))
        .try_init()?;

    Ok(path)
}

/// 解析日志过滤器；非法表达式退回 info
fn build_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives)
        .unwrap_or_else(|_| EnvFilter::default().add_directive(Level::INFO.into()))
}
