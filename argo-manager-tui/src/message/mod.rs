//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event / Backend —→ Update 之间的桥梁。
//! 所有的用户操作与请求结果都通过 Message 来表达，
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息 AppMessage
//!         mod backend;        // 请求结果 BackendMessage
//!         mod content;        // 列表面板子消息
//!         mod form;           // 创建表单子消息
//!         mod modal;          // 弹窗子消息
//!
//!
//!     按键来源：
//!         event/handler.rs   handle_event(event, &app) -> AppMessage
//!
//!     请求结果来源：
//!         backend/api_service.rs   try_recv() -> Option<BackendMessage>
//!         在 app.rs 中包装为 AppMessage::Backend(..)
//!
//!     两者最终都交给：
//!         update::update(&mut app, msg) -> Option<Command>
//!

mod app;
mod backend;
mod content;
mod form;
mod modal;

pub use app::AppMessage;
pub use backend::BackendMessage;
pub use content::ContentMessage;
pub use form::FormMessage;
pub use modal::ModalMessage;
