//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│   ┌─────────┐          ┌───────────┐          ┌──────────┐                 │
//！│   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │ ──── Command ─┐ │
//！│   │   层    │   翻译    │    层     │   消费    │    层    │               │ │
//！│   └─────────┘          └───────────┘          └────┬─────┘               │ │
//！│        ▲                     ▲                     │ 修改                │ │
//！│        │                     │ BackendMessage      ▼                     ▼ │
//！│   ┌─────────┐                │               ┌──────────┐        ┌─────────┐│
//！│   │  View   │ ◀──── 读取 ────┼────────────── │  Model   │        │ Backend ││
//！│   │   层    │                └────────────── │    层    │ ◀───── │   层    ││
//！│   └─────────┘                                └──────────┘        └────┬────┘│
//！│                                                                        │     │
//！│                                                                        ▼     │
//！│                                                          argo-manager-client │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含纯数据结构，所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Form / List）
//!         pub mod state;      // 列表、表单、弹窗状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,                  // 退出标志
//!             pub focus: FocusPanel,                  // 当前焦点
//!             pub status_message: Option<String>,     // 状态栏消息
//!             pub applications: ApplicationsState,    // 应用列表
//!             pub form: CreateFormState,              // 创建表单
//!             pub modal: ModalState,                  // 弹窗
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、应用列表（ApplicationsState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     records 为 None 表示尚未加载；加载成功后整体替换，从不在本地增删。
//!     刷新通过单调递增的版本号驱动：
//!
//!         创建/删除成功
//!             ↓
//!         update/backend.rs 调用 request_refresh()      // 版本号 +1
//!             ↓
//!         app.rs 主循环调用 take_pending_load()          // 版本号变化才发出加载
//!             ↓
//!         Backend 层返回 BackendMessage::Loaded { version, .. }
//!             ↓
//!         apply_loaded()：旧版本结果被丢弃
//!
//!     每个操作（加载 / 创建 / 删除）都有独立的错误字段，在对应面板内联显示。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、创建表单（CreateFormState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     四个原始文本字段：application_name, repository_url, cluster_url, path。
//!     提交时按当时的值构造请求，不做校验，提交后不清空。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 四、弹窗（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         Modal::ConfirmDelete { name, focus }    // 删除前确认
//!         Modal::Help                             // 快捷键帮助
//!

mod app;
mod focus;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use state::{ApplicationsState, CreateFormState, FormField, Modal, ModalState};
