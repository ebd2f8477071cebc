//! 列表面板消息

/// 列表面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 删除当前选中项（先弹出确认）
    Delete,
}
