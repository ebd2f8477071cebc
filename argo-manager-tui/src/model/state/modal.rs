//! 弹窗/对话框状态

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 确认删除
    ConfirmDelete {
        /// 应用名称
        name: String,
        /// 焦点：0=取消, 1=确认
        focus: usize,
    },
    /// 帮助
    Help,
}

/// 弹窗状态容器
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否有弹窗打开
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 显示确认删除弹窗（默认焦点在 “取消”）
    pub fn show_confirm_delete(&mut self, name: &str) {
        self.active = Some(Modal::ConfirmDelete {
            name: name.to_string(),
            focus: 0,
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}
