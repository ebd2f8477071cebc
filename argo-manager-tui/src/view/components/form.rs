//! 创建表单组件

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{App, FormField};
use crate::view::theme::{colors, Styles};

/// 表单面板高度：外边框 2 + 输入框 3 + 提示行 1
pub const HEIGHT: u16 = 6;

/// 渲染创建表单
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let form_focused = app.focus.is_form();

    let block = Block::default()
        .title(" New Application ")
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Styles::border(form_focused));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(inner);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(rows[0]);

    for (field, column) in FormField::ALL.into_iter().zip(columns.iter()) {
        let focused = form_focused && app.form.focused == field;
        render_input(app.form.value(field), field, focused, frame, *column);
    }

    frame.render_widget(Paragraph::new(feedback_line(app)), rows[1]);
}

/// 渲染单个输入框
fn render_input(value: &str, field: FormField, focused: bool, frame: &mut Frame, area: Rect) {
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", field.placeholder()))
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let line = if focused {
        Line::styled(format!("{value}▎"), Style::default().fg(c.fg))
    } else if value.is_empty() {
        Line::styled(field.placeholder(), Styles::muted())
    } else {
        Line::styled(value.to_string(), Style::default().fg(c.fg))
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// 提交状态 / 内联错误 / 操作提示
fn feedback_line(app: &App) -> Line<'static> {
    let state = &app.applications;

    if state.creating {
        Line::styled(" Creating application...", Styles::muted())
    } else if let Some(err) = &state.create_error {
        Line::styled(format!(" ✗ Failed to create application: {err}"), Styles::error())
    } else if app.focus.is_form() {
        Line::styled(" Enter: Create   Tab: Next field   Esc: Back to list", Styles::muted())
    } else {
        Line::styled(" Tab: Fill in the form", Styles::muted())
    }
}
