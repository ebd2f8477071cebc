//! Argo Application Manager TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 请求执行与配置 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     load_config()           // 读取 ~/.config/argo-manager-tui/config.json，应用环境变量覆盖
//!     init_logging()          // 文件日志
//!     ArgoApiClient::builder  // 按配置构建 HTTP 客户端
//!     ApiService::new()       // 启动后台运行时
//!     init_terminal()         // 初始化终端
//!     app::run()              // 运行 app.rs 主循环
//!     service.shutdown()      // 取消在途请求
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//! 终端初始化之前的错误直接打印到 stderr；之后的错误先恢复终端再返回。

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::{Context, Result};
use argo_manager_client::ArgoApiClient;

use backend::{ApiService, AppConfig, ConfigService, LocalConfigService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 加载配置
    let config = load_config()?;

    // 2. 初始化日志
    let log_path = init_logging(&config)?;
    log::info!(
        "Starting argo-manager v{} against {} (log: {})",
        env!("CARGO_PKG_VERSION"),
        config.api_base_url,
        log_path.display()
    );
    view::theme::set_theme(config.theme);

    // 3. 构建客户端与请求执行服务
    let client = ArgoApiClient::builder(config.api_base_url.as_str())
        .timeout(config.request_timeout())
        .max_retries(config.max_retries)
        .build()
        .with_context(|| format!("Invalid API base URL {:?}", config.api_base_url))?;
    let mut service = ApiService::new(Arc::new(client))?;

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例并运行主循环
    let mut app = model::App::new();
    let result = app::run(&mut terminal, &mut app, &mut service);

    // 6. 视图销毁：不再接收任何请求结果
    service.shutdown();

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        log::error!("Exited with error: {e:#}");
    } else {
        log::info!("Exited");
    }
    result
}

/// 读取配置；首次运行时写入默认配置文件
fn load_config() -> Result<AppConfig> {
    let service = LocalConfigService::default_location();
    let first_run = !service.path().exists();

    let mut config = service.load()?;
    if first_run {
        // 写入失败不影响启动（例如只读的配置目录）
        if let Err(e) = service.save(&config) {
            eprintln!("warning: {e}");
        }
    }

    config.apply_env_overrides();
    Ok(config)
}
