//! 应用主消息枚举

use super::{BackendMessage, ContentMessage, FormMessage, ModalMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 焦点前移（Tab）
    FocusNext,

    /// 焦点后移（Shift+Tab）
    FocusPrev,

    /// 列表面板相关消息
    Content(ContentMessage),

    /// 创建表单相关消息
    Form(FormMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// Backend 层返回的请求结果
    Backend(BackendMessage),

    /// 返回（关闭弹窗；从表单回到列表；在列表中清除状态消息）
    GoBack,

    /// 重新加载应用列表
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
