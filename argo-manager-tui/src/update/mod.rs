//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod backend;            // 请求结果处理
//!         mod content;            // 列表面板子消息处理
//!         mod form;               // 创建表单子消息处理
//!         mod modal;              // 弹窗子消息处理
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {...}
//!
//!
//!     update 不直接发起网络请求。需要请求时返回一个 `Command`，
//!     由主循环交给 Backend 层执行；请求结果再以 `AppMessage::Backend(..)`
//!     的形式回到这里。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 请求顺序
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     表单提交                    → Command::Create
//!     BackendMessage::Created Ok  → request_refresh()
//!
//!     确认删除                    → Command::Delete
//!     BackendMessage::Deleted Ok  → request_refresh()（恰好一次）
//!
//!     失败时只写入对应的内联错误，不请求刷新。
//!
//!     刷新本身由主循环通过 take_pending_load() 发出，
//!     因此同一轮中的多次刷新请求只会产生一次加载。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod backend;
mod content;
mod form;
mod modal;

use crate::backend::Command;
use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态；需要发起请求时返回命令
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::FocusNext => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus_next();
            }
            None
        }

        AppMessage::FocusPrev => {
            if !app.modal.is_open() {
                app.focus_prev();
            }
            None
        }

        AppMessage::Content(content_msg) => content::update(app, content_msg),

        AppMessage::Form(form_msg) => form::update(app, form_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Backend(backend_msg) => {
            backend::update(app, backend_msg);
            None
        }

        AppMessage::GoBack => {
            if app.modal.is_open() {
                app.modal.close();
            } else if app.focus.is_form() {
                app.focus_list();
            } else {
                app.clear_status();
            }
            None
        }

        AppMessage::Refresh => {
            let version = app.applications.request_refresh();
            log::debug!("Refresh requested (version {version})");
            app.set_status("Refreshing...");
            None
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
            None
        }

        AppMessage::Noop => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FocusPanel;

    #[test]
    fn quit_sets_flag() {
        let mut app = App::new();
        assert!(update(&mut app, AppMessage::Quit).is_none());
        assert!(app.should_quit);
    }

    #[test]
    fn refresh_coalesces_into_one_load() {
        let mut app = App::new();
        // 首次加载
        assert_eq!(app.applications.take_pending_load(), Some(1));

        update(&mut app, AppMessage::Refresh);
        update(&mut app, AppMessage::Refresh);
        assert_eq!(app.applications.take_pending_load(), Some(3));
        assert_eq!(app.applications.take_pending_load(), None);
    }

    #[test]
    fn focus_is_locked_while_modal_open() {
        let mut app = App::new();
        app.modal.show_help();
        update(&mut app, AppMessage::FocusNext);
        assert_eq!(app.focus, FocusPanel::List);
    }

    #[test]
    fn go_back_unwinds_modal_then_form() {
        let mut app = App::new();
        app.focus = FocusPanel::Form;
        app.modal.show_help();

        update(&mut app, AppMessage::GoBack);
        assert!(!app.modal.is_open());
        assert!(app.focus.is_form());

        update(&mut app, AppMessage::GoBack);
        assert!(app.focus.is_list());

        app.set_status("something");
        update(&mut app, AppMessage::GoBack);
        assert!(app.status_message.is_none());
    }
}
