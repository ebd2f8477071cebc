//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长阻塞 timeout
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件
//!             Event::Resize(width, height)        // 终端窗口大小发生变化，下一轮自动重绘
//!             其他                                 // 忽略
//!
//!             键盘事件的判断顺序：
//!                 1. Ctrl+C                           → 退出（任何状态下）
//!                 2. 有弹窗打开                        → handle_modal_keys
//!                 3. 带修饰键的全局快捷键、Esc、Tab     → 就地处理
//!                 4. 焦点位于表单                      → handle_form_keys（字符即输入）
//!                 5. 焦点位于列表                      → handle_list_keys（q / d / r / ? / j / k）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 按键一览
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Tab / Shift+Tab         在表单字段与列表之间移动焦点
//!     Enter（表单）            提交创建请求
//!     ↑ ↓ j k Home End        移动列表选择
//!     d / Alt+d               删除选中应用（先确认）
//!     r / Alt+r / F5          刷新
//!     ? / Alt+h               帮助
//!     Esc                     关闭弹窗 / 离开表单
//!     q / Alt+q / Ctrl+C      退出
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
pub use keymap::DefaultKeymap;
