//! 应用主状态结构

use super::{ApplicationsState, CreateFormState, FocusPanel, FormField, ModalState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 应用列表状态
    pub applications: ApplicationsState,
    /// 创建表单状态
    pub form: CreateFormState,

    /// 弹窗状态
    pub modal: ModalState,
}

impl App {
    /// 创建新的应用实例
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::default(),
            status_message: None,
            applications: ApplicationsState::new(),
            form: CreateFormState::new(),
            modal: ModalState::new(),
        }
    }

    /// 焦点前移：表单字段依次向后，最后一个字段之后进入列表，列表之后回到第一个字段
    pub fn focus_next(&mut self) {
        match self.focus {
            FocusPanel::Form => match self.form.focused.next() {
                Some(field) => self.form.focused = field,
                None => self.focus = FocusPanel::List,
            },
            FocusPanel::List => {
                self.focus = FocusPanel::Form;
                self.form.focused = FormField::ApplicationName;
            }
        }
    }

    /// 焦点后移（`focus_next` 的逆序）
    pub fn focus_prev(&mut self) {
        match self.focus {
            FocusPanel::Form => match self.form.focused.prev() {
                Some(field) => self.form.focused = field,
                None => self.focus = FocusPanel::List,
            },
            FocusPanel::List => {
                self.focus = FocusPanel::Form;
                self.form.focused = FormField::Path;
            }
        }
    }

    /// 离开表单，回到列表
    pub fn focus_list(&mut self) {
        self.focus = FocusPanel::List;
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
