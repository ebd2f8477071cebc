//! 列表面板更新逻辑

use crate::backend::Command;
use crate::message::ContentMessage;
use crate::model::App;

/// 处理列表面板消息
pub fn update(app: &mut App, msg: ContentMessage) -> Option<Command> {
    match msg {
        // ========== 列表导航 ==========
        ContentMessage::SelectPrevious => app.applications.select_previous(),
        ContentMessage::SelectNext => app.applications.select_next(),
        ContentMessage::SelectFirst => app.applications.select_first(),
        ContentMessage::SelectLast => app.applications.select_last(),

        // ========== 删除 ==========
        ContentMessage::Delete => handle_delete(app),
    }
    None
}

/// 打开确认删除弹窗；实际请求在确认后发出
fn handle_delete(app: &mut App) {
    if let Some(name) = app.applications.deleting.clone() {
        app.set_status(format!("Still deleting \"{name}\""));
        return;
    }

    match app.applications.selected_application() {
        Some(application) => {
            let name = application.name.clone();
            app.modal.show_confirm_delete(&name);
        }
        None => app.set_status("No application selected"),
    }
}
