//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FocusPanel};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前焦点生成快捷键提示
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在最后
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(colors().border));

    frame.render_widget(paragraph, area);
}

/// 根据当前焦点生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![("Tab", "Focus")];

    match app.focus {
        FocusPanel::Form => {
            hints.push(("Enter", "Create"));
            hints.push(("Esc", "List"));
            hints.push(("Alt+r", "Refresh"));
            hints.push(("Alt+q", "Quit"));
        }
        FocusPanel::List => {
            hints.push(("↑↓", "Select"));
            hints.push(("d", "Delete"));
            hints.push(("r", "Refresh"));
            hints.push(("?", "Help"));
            hints.push(("q", "Quit"));
        }
    }

    hints
}
