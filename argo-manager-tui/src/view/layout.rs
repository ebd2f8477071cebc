//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 四层布局：标题栏 + 表单 + 列表 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                        // 标题栏
            Constraint::Length(components::form::HEIGHT), // 创建表单
            Constraint::Min(3),                           // 应用列表
            Constraint::Length(1),                        // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    components::form::render(app, frame, main_layout[1]);
    render_list_panel(app, frame, main_layout[2]);
    components::statusbar::render(app, frame, main_layout[3]);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let mut title = format!(" Argo Application Manager v{}", env!("CARGO_PKG_VERSION"));
    if app.applications.loading {
        title.push_str("  ·  loading...");
    }
    let title =
        Paragraph::new(title).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 渲染应用列表面板
fn render_list_panel(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let title = match &app.applications.records {
        Some(records) => format!(" Applications ({}) ", records.len()),
        None => " Applications ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_list()));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    pages::applications::render(app, frame, inner_area);
}
