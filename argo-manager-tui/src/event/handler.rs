//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, FormMessage, ModalMessage};
use crate::model::{App, Modal};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        Event::Resize(_, _) => AppMessage::Noop,                   // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::QUIT_ALT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP_ALT.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH_ALT.matches(&key) || DefaultKeymap::REFRESH_F5.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::DELETE_ALT.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    // Tab / Shift+Tab: 切换焦点
    match key.code {
        KeyCode::Tab => return AppMessage::FocusNext,
        KeyCode::BackTab => return AppMessage::FocusPrev,
        _ => {}
    }

    if app.focus.is_form() {
        handle_form_keys(key)
    } else {
        handle_list_keys(key)
    }
}

/// 处理创建表单的按键
fn handle_form_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Form(FormMessage::Submit);
    }

    match key.code {
        KeyCode::Backspace => AppMessage::Form(FormMessage::Backspace),

        // ↑ ↓: 在字段间移动
        KeyCode::Up => AppMessage::FocusPrev,
        KeyCode::Down => AppMessage::FocusNext,

        // 字符输入（允许 Shift 输入大写与符号）
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Form(FormMessage::Input(ch))
        }

        _ => AppMessage::Noop,
    }
}

/// 处理应用列表的按键
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    // 部分终端为 '?' 附带 SHIFT
    if DefaultKeymap::HELP.matches(&key)
        || (key.code == KeyCode::Char('?') && key.modifiers == KeyModifiers::SHIFT)
    {
        return AppMessage::ShowHelp;
    }

    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        // End: 跳到最后一项
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    if key.code == KeyCode::Esc {
        return AppMessage::Modal(ModalMessage::Close);
    }

    match app.modal.active {
        Some(Modal::ConfirmDelete { .. }) => handle_confirm_delete_keys(key),
        // 帮助弹窗只响应关闭按键
        Some(Modal::Help) => match key.code {
            KeyCode::Enter | KeyCode::Char('?' | 'q') => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
        None => AppMessage::Noop,
    }
}

/// 处理确认删除弹窗的按键
fn handle_confirm_delete_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Tab 或 ← →: 切换焦点
        KeyCode::Tab
        | KeyCode::BackTab
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Char('h' | 'l') => AppMessage::Modal(ModalMessage::ToggleDeleteFocus),

        // Enter: 确认
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),

        _ => AppMessage::Noop,
    }
}
