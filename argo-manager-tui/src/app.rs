//!
//! app.rs
//! 应用主循环
//!
//!
//! 在应用启动时，创建终端并初始化为以下状态：
//!
//! App {
//!     should_quit: false,                             // 决定应用是否应该退出
//!     focus: FocusPanel::List,                        // 焦点默认在列表
//!     status_message: None,                           // 状态栏消息
//!     applications: ApplicationsState {              // records = None（尚未加载）
//!         refresh_version: 1, issued_version: 0       // 首轮循环即发出版本 1 的加载
//!     },
//!     form: CreateFormState::default(),               // 四个空输入框
//!     modal: ModalState::default(),                   // 无弹窗
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     if let Some(v) = app.applications.take_pending_load() {   // 刷新版本有变化
//!         service.dispatch(Command::Load { version: v })        // 发出一次加载
//!     }
//!     terminal.draw(|f| view::render(&app, f))                  // 渲染 UI
//!     if app.should_quit { break }                              // 检查是否应该退出
//!     while let Some(result) = service.try_recv() {             // 处理已完成的请求
//!         update(&mut app, AppMessage::Backend(result))
//!     }
//!     if let Some(event) = poll_event(100ms) {                  // 轮询输入，最长等待 100ms
//!         let msg = handle_event(event, &app);
//!         if let Some(cmd) = update(&mut app, msg) {            // 创建/删除
//!             service.dispatch(cmd)
//!         }
//!     }
//! }

use std::time::Duration;

use anyhow::Result;

use crate::backend::{ApiService, Command};
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, service: &mut ApiService) -> Result<()> {
    loop {
        // 1. 刷新版本变化时发出加载
        if let Some(version) = app.applications.take_pending_load() {
            service.dispatch(Command::Load { version });
        }

        // 2. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 4. 处理已完成的请求
        while let Some(result) = service.try_recv() {
            dispatch_all(app, service, AppMessage::Backend(result));
        }

        // 5. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            dispatch_all(app, service, msg);
        }
    }

    Ok(())
}

/// 更新状态，并执行 update 返回的命令
fn dispatch_all(app: &mut App, service: &ApiService, msg: AppMessage) {
    if let Some(command) = update::update(app, msg) {
        service.dispatch(command);
    }
}
