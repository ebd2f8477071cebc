//! 弹窗更新逻辑

use crate::backend::Command;
use crate::message::ModalMessage;
use crate::model::{App, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) -> Option<Command> {
    match app.modal.active {
        Some(Modal::ConfirmDelete { .. }) => handle_confirm_delete(app, msg),
        Some(Modal::Help) => {
            handle_simple_modal(app, msg);
            None
        }
        None => None,
    }
}

/// 处理确认删除弹窗
fn handle_confirm_delete(app: &mut App, msg: ModalMessage) -> Option<Command> {
    let Some(Modal::ConfirmDelete {
        ref name,
        ref mut focus,
    }) = app.modal.active
    else {
        return None;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            None
        }

        ModalMessage::ToggleDeleteFocus => {
            *focus = usize::from(*focus == 0);
            None
        }

        ModalMessage::Confirm => {
            let confirmed = *focus == 1;
            let name = name.clone();
            app.modal.close();

            if !confirmed {
                return None;
            }

            app.applications.deleting = Some(name.clone());
            app.applications.delete_error = None;
            app.set_status(format!("Deleting \"{name}\"..."));
            Some(Command::Delete { name })
        }
    }
}

/// 处理简单弹窗（帮助）
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close | ModalMessage::Confirm => app.modal.close(),
        ModalMessage::ToggleDeleteFocus => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confirming(name: &str) -> App {
        let mut app = App::new();
        app.modal.show_confirm_delete(name);
        app
    }

    #[test]
    fn confirm_on_cancel_closes_without_request() {
        let mut app = confirming("demo");
        assert!(update(&mut app, ModalMessage::Confirm).is_none());
        assert!(!app.modal.is_open());
        assert!(app.applications.deleting.is_none());
    }

    #[test]
    fn confirm_on_delete_issues_request() {
        let mut app = confirming("demo");
        update(&mut app, ModalMessage::ToggleDeleteFocus);

        let command = update(&mut app, ModalMessage::Confirm);
        assert_eq!(
            command,
            Some(Command::Delete {
                name: "demo".to_string()
            })
        );
        assert_eq!(app.applications.deleting.as_deref(), Some("demo"));
        assert!(!app.modal.is_open());
    }

    #[test]
    fn toggle_flips_focus_back() {
        let mut app = confirming("demo");
        update(&mut app, ModalMessage::ToggleDeleteFocus);
        update(&mut app, ModalMessage::ToggleDeleteFocus);
        assert!(update(&mut app, ModalMessage::Confirm).is_none());
    }

    #[test]
    fn help_closes_on_confirm() {
        let mut app = App::new();
        app.modal.show_help();
        update(&mut app, ModalMessage::ToggleDeleteFocus);
        assert!(app.modal.is_open());
        update(&mut app, ModalMessage::Confirm);
        assert!(!app.modal.is_open());
    }
}
