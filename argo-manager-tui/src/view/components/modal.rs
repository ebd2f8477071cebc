//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::event::DefaultKeymap;
use crate::model::{App, Modal};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ConfirmDelete { name, focus } => render_confirm_delete(frame, name, *focus),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗内边距区域
fn inner(area: Rect) -> Rect {
    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

/// 渲染确认删除弹窗
fn render_confirm_delete(frame: &mut Frame, name: &str, focus: usize) {
    let area = centered_rect(48, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm Deletion ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let cancel_style = if focus == 0 {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(Color::White)
    };

    let confirm_style = if focus == 1 {
        Style::default().fg(Color::Black).bg(Color::Red)
    } else {
        Style::default().fg(Color::Red)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            "  Are you sure to delete application?",
            Style::default().fg(Color::White),
        ),
        Line::styled(format!("  \"{name}\""), Style::default().fg(Color::Yellow)),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(" Cancel ", cancel_style),
            Span::raw("    "),
            Span::styled(" Delete ", confirm_style),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner(area));
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let height = DefaultKeymap::HINTS.len() as u16 + 6;
    let area = centered_rect(64, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let mut lines = vec![
        Line::styled(
            "Shortcuts",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];

    lines.extend(DefaultKeymap::HINTS.iter().map(|(key, desc)| {
        Line::from(vec![
            Span::styled(format!("  {key:<20}"), Style::default().fg(Color::Yellow)),
            Span::styled(*desc, Style::default().fg(Color::White)),
        ])
    }));

    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Press Esc to close the help",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(lines), inner(area));
}
