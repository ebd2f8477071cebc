//!
//! src/view/mod.rs
//! View 层：界面渲染
//!
//! View 层只读取 Model，不修改任何状态。
//! 每一轮主循环都会以最新的 Model 整体重绘一次。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局（标题栏 / 表单 / 列表 / 状态栏）
//!         pub mod theme;          // 主题与常用样式
//!         mod components;         // 表单、状态栏、弹窗组件
//!         mod pages;              // 应用列表
//!
//!
//!     布局：
//!         ┌──────────────────────────────────────────────┐
//!         │ 标题栏                                        │
//!         ├──────────────────────────────────────────────┤
//!         │ 创建表单（四个输入框 + 内联错误）               │
//!         ├──────────────────────────────────────────────┤
//!         │ 应用列表（序号 / 名称 / 状态 / 创建时间）        │
//!         ├──────────────────────────────────────────────┤
//!         │ 状态栏（快捷键提示 + 状态消息）                 │
//!         └──────────────────────────────────────────────┘
//!         弹窗绘制在最上层。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
