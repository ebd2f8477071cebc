//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│     Update 层 ── Command ──▶ ApiService::dispatch()                        │
//！│                                   │                                        │
//！│                                   │ tokio 任务                             │
//！│                                   ▼                                        │
//！│                         Arc<dyn ApplicationApi>                            │
//！│                          (argo-manager-client)                             │
//！│                                   │                                        │
//！│                                   │ BackendMessage（经 channel）           │
//！│                                   ▼                                        │
//！│     主循环 ◀── ApiService::try_recv() ──▶ update(AppMessage::Backend(..))  │
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//!
//! src/backend/mod.rs
//! Backend 层：请求执行与配置
//!
//! Backend 层与 UI 完全解耦。Update 层不直接发请求，
//! 而是返回一个 `Command`，由主循环交给 `ApiService` 异步执行。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod api_service;        // 请求执行服务（tokio 运行时 + 取消令牌）
//!         mod config_service;     // 配置加载/保存（JSON 文件）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、命令（Command）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         Command::Load { version }       // 加载列表，结果携带版本号
//!         Command::Create(request)        // 创建应用
//!         Command::Delete { name }        // 删除应用
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、请求执行服务（ApiService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/api_service.rs 中定义：
//!
//!         - dispatch(command)     派发命令，立即返回
//!         - try_recv()            取出已完成的结果（非阻塞）
//!         - shutdown()            取消在途请求
//!
//!     视图销毁后不会再有结果被投递，因而不会在视图消失后修改状态。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、配置服务（LocalConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/config_service.rs 中定义：
//!
//!         存储位置：~/.config/argo-manager-tui/config.json
//!
//!         - load()                文件不存在时返回默认配置
//!         - save(config)          以格式化 JSON 写入
//!
//!     环境变量覆盖：
//!         ARGO_MANAGER_API_URL    后端地址
//!         ARGO_MANAGER_LOG        日志过滤器
//!

mod api_service;
mod config_service;

use argo_manager_client::CreateApplicationRequest;

pub use api_service::ApiService;
pub use config_service::{AppConfig, ConfigService, LocalConfigService};

/// Update 层发出的请求命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 加载应用列表
    Load { version: u64 },
    /// 创建应用
    Create(CreateApplicationRequest),
    /// 删除应用
    Delete { name: String },
}
