//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
///
/// 带修饰键的绑定在任何焦点下都生效；
/// 单字符绑定（q / d / r / ?）只在列表获得焦点时生效，表单中它们是普通输入。
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const QUIT_ALT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const HELP_ALT: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const REFRESH_ALT: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const REFRESH_F5: KeyBinding = KeyBinding::key(KeyCode::F(5));
    pub const DELETE_ALT: KeyBinding = KeyBinding::alt(KeyCode::Char('d'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 列表
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const REFRESH: KeyBinding = KeyBinding::key(KeyCode::Char('r'));
    pub const DELETE: KeyBinding = KeyBinding::key(KeyCode::Char('d'));

    // 表单
    pub const SUBMIT: KeyBinding = KeyBinding::key(KeyCode::Enter);

    /// 帮助弹窗与状态栏中展示的按键说明
    pub const HINTS: &'static [(&'static str, &'static str)] = &[
        ("Tab/Shift+Tab", "Move focus between form fields and list"),
        ("Enter", "Create application (in form)"),
        ("↑/↓ j/k", "Select application"),
        ("Home/End", "First / last application"),
        ("d / Alt+d", "Delete selected application"),
        ("r / Alt+r / F5", "Refresh list"),
        ("? / Alt+h", "Show this help"),
        ("Esc", "Close dialog / leave form"),
        ("q / Alt+q / Ctrl+C", "Quit"),
    ];
}
