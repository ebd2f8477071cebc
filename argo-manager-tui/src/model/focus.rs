//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 顶部创建表单
    Form,
    /// 应用列表
    #[default]
    List,
}

impl FocusPanel {
    /// 是否是表单面板
    pub fn is_form(self) -> bool {
        matches!(self, FocusPanel::Form)
    }

    /// 是否是列表面板
    pub fn is_list(self) -> bool {
        matches!(self, FocusPanel::List)
    }
}
