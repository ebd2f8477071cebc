//! 创建表单更新逻辑

use crate::backend::Command;
use crate::message::FormMessage;
use crate::model::App;

/// 处理创建表单消息
pub fn update(app: &mut App, msg: FormMessage) -> Option<Command> {
    match msg {
        FormMessage::Input(c) => {
            app.form.input(c);
            None
        }
        FormMessage::Backspace => {
            app.form.backspace();
            None
        }
        FormMessage::Submit => handle_submit(app),
    }
}

/// 以当前输入构造创建请求（不校验、不清空表单）
fn handle_submit(app: &mut App) -> Option<Command> {
    if app.applications.creating {
        app.set_status("A create request is already in flight");
        return None;
    }

    let request = app.form.to_request();
    app.applications.creating = true;
    app.applications.create_error = None;
    app.set_status(format!("Creating \"{}\"...", request.application_name));
    Some(Command::Create(request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use argo_manager_client::CreateApplicationRequest;

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            update(app, FormMessage::Input(c));
        }
    }

    #[test]
    fn submit_snapshots_fields() {
        let mut app = App::new();
        type_text(&mut app, "demo");
        app.form.focused = crate::model::FormField::Path;
        type_text(&mut app, "manifests/demox");
        update(&mut app, FormMessage::Backspace);

        let command = update(&mut app, FormMessage::Submit);
        assert_eq!(
            command,
            Some(Command::Create(CreateApplicationRequest::new(
                "demo",
                "",
                "",
                "manifests/demo"
            )))
        );
        assert!(app.applications.creating);
        // 提交后不清空
        assert_eq!(app.form.application_name, "demo");
    }

    #[test]
    fn empty_form_is_submitted_as_is() {
        let mut app = App::new();
        let command = update(&mut app, FormMessage::Submit);
        assert_eq!(
            command,
            Some(Command::Create(CreateApplicationRequest::default()))
        );
    }

    #[test]
    fn second_submit_waits_for_first() {
        let mut app = App::new();
        assert!(update(&mut app, FormMessage::Submit).is_some());
        assert!(update(&mut app, FormMessage::Submit).is_none());
    }

    #[test]
    fn submit_clears_previous_error() {
        let mut app = App::new();
        app.applications.create_error = Some("HTTP 400".to_string());
        update(&mut app, FormMessage::Submit);
        assert!(app.applications.create_error.is_none());
    }
}
