//! 应用列表视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::model::App;
use crate::view::theme::{colors, Styles};

const NAME_MIN_WIDTH: usize = 16;
const NAME_MAX_WIDTH: usize = 40;
const STATUS_WIDTH: usize = 12;

/// 渲染应用列表
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let errors = error_lines(app);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(errors.len() as u16),
            Constraint::Min(0),
        ])
        .split(area);

    if !errors.is_empty() {
        frame.render_widget(Paragraph::new(errors), chunks[0]);
    }

    match &app.applications.records {
        None => render_loading(frame, chunks[1]),
        Some(records) if records.is_empty() => render_empty(frame, chunks[1]),
        Some(_) => render_list(app, frame, chunks[1]),
    }
}

/// 加载 / 删除失败的内联错误
fn error_lines(app: &App) -> Vec<Line<'static>> {
    let state = &app.applications;
    let mut lines = Vec::new();

    if let Some(err) = &state.load_error {
        lines.push(Line::styled(
            format!("  ✗ Failed to load applications: {err}"),
            Styles::error(),
        ));
    }
    if let Some(err) = &state.delete_error {
        lines.push(Line::styled(
            format!("  ✗ Failed to delete application: {err}"),
            Styles::error(),
        ));
    }
    lines
}

/// 渲染加载中状态
fn render_loading(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::styled("  Loading applications...", Styles::muted()),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染空状态
fn render_empty(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::styled("  No applications found.", Styles::muted()),
        Line::from(""),
        Line::styled(
            "  Press Tab to fill in the form above and Enter to create one.",
            Styles::muted(),
        ),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染应用行：序号 / 名称 / 状态 / 创建时间
fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let state = &app.applications;
    let records = state.records.as_deref().unwrap_or_default();

    let name_width = records
        .iter()
        .map(|a| a.name.width())
        .max()
        .unwrap_or(0)
        .clamp(NAME_MIN_WIDTH, NAME_MAX_WIDTH);
    let ordinal_width = records.len().to_string().len();

    let items: Vec<ListItem> = records
        .iter()
        .enumerate()
        .map(|(i, application)| {
            let is_selected = i == state.selected && app.focus.is_list();

            let base = if is_selected {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };
            let status_style = base
                .fg(c.status(application.is_healthy()))
                .add_modifier(Modifier::BOLD);
            let muted_style = if is_selected { base } else { Styles::muted() };

            let created = application
                .created_at_display()
                .unwrap_or_else(|| "-".to_string());

            let mut spans = vec![
                Span::styled(format!("  {:>ordinal_width$}. ", i + 1), muted_style),
                Span::styled(fit(&application.name, name_width), base),
                Span::styled("  ", base),
                Span::styled(fit(&application.status, STATUS_WIDTH), status_style),
                Span::styled("  ", base),
                Span::styled(created, muted_style),
            ];

            if state.deleting.as_deref() == Some(application.name.as_str()) {
                spans.push(Span::styled("  (deleting...)", Style::default().fg(c.warning)));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default())
        .highlight_style(Style::default());

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));

    frame.render_stateful_widget(list, area, &mut list_state);
}

/// 按显示宽度填充或截断到固定列宽
fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        let padding = width - text.width();
        return format!("{text}{}", " ".repeat(padding));
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use argo_manager_client::Application;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn record(name: &str, status: &str) -> Application {
        Application {
            name: name.to_string(),
            status: status.to_string(),
            created_at: Some("2024-05-01T12:00:00Z".to_string()),
        }
    }

    fn loaded(records: Vec<Application>) -> App {
        let mut app = App::new();
        let version = app.applications.take_pending_load().unwrap();
        app.applications.apply_loaded(version, records);
        app
    }

    fn draw(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| crate::view::render(app, frame))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn lines(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .filter_map(|x| buffer.cell((x, y)).map(|c| c.symbol().to_string()))
                    .collect()
            })
            .collect()
    }

    /// 查找文本首字符所在的单元格
    fn find(buffer: &Buffer, text: &str) -> Option<(u16, u16)> {
        let chars: Vec<String> = text.chars().map(|c| c.to_string()).collect();
        let area = buffer.area;
        for y in 0..area.height {
            for x in 0..area.width {
                let matched = chars.iter().enumerate().all(|(i, ch)| {
                    buffer
                        .cell((x + i as u16, y))
                        .is_some_and(|cell| cell.symbol() == ch)
                });
                if matched {
                    return Some((x, y));
                }
            }
        }
        None
    }

    #[test]
    fn renders_one_row_per_record() {
        let app = loaded(vec![
            record("guestbook", "Healthy"),
            record("payments", "Degraded"),
            record("search", ""),
        ]);
        let rendered = lines(&draw(&app));

        for (ordinal, name) in [(1, "guestbook"), (2, "payments"), (3, "search")] {
            assert!(
                rendered
                    .iter()
                    .any(|l| l.contains(&format!("{ordinal}. ")) && l.contains(name)),
                "missing row for {name}"
            );
        }
        assert!(!rendered.iter().any(|l| l.contains("4. ")));
        assert!(rendered.iter().any(|l| l.contains("Applications (3)")));
    }

    #[test]
    fn status_colour_follows_health() {
        let app = loaded(vec![
            record("guestbook", "Healthy"),
            record("payments", "Progressing"),
            record("orphan", ""),
        ]);
        let buffer = draw(&app);
        let c = colors();

        let (status_x, y) = find(&buffer, "Healthy").unwrap();
        assert_eq!(buffer.cell((status_x, y)).unwrap().fg, c.success);

        let (x, y) = find(&buffer, "Progressing").unwrap();
        assert_eq!(buffer.cell((x, y)).unwrap().fg, c.error);

        // 空状态：状态列为空白，但仍按非健康着色
        let (_, y) = find(&buffer, "orphan").unwrap();
        let cell = buffer.cell((status_x, y)).unwrap();
        assert_eq!(cell.symbol(), " ");
        assert_eq!(cell.fg, c.error);
    }

    #[test]
    fn empty_list_renders_no_rows() {
        let app = loaded(Vec::new());
        let rendered = lines(&draw(&app));

        assert!(rendered.iter().any(|l| l.contains("No applications found.")));
        assert!(!rendered.iter().any(|l| l.contains("1. ")));
        assert!(rendered.iter().any(|l| l.contains("Applications (0)")));
    }

    #[test]
    fn unloaded_list_shows_loading() {
        let app = App::new();
        let rendered = lines(&draw(&app));
        assert!(rendered.iter().any(|l| l.contains("Loading applications...")));
    }

    #[test]
    fn load_error_renders_inline() {
        let mut app = loaded(vec![record("guestbook", "Healthy")]);
        app.applications.request_refresh();
        let version = app.applications.take_pending_load().unwrap();
        app.applications
            .apply_load_failed(version, "Network error: connection refused".to_string());

        let rendered = lines(&draw(&app));
        assert!(rendered
            .iter()
            .any(|l| l.contains("Failed to load applications: Network error")));
        // 保留旧数据
        assert!(rendered.iter().any(|l| l.contains("guestbook")));
    }

    #[test]
    fn fit_pads_and_truncates_by_width() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdef", 4), "abc…");
        // 全角字符占两列
        assert_eq!(fit("应用", 6).width(), 6);
        assert_eq!(fit("应用名称", 5).width(), 5);
    }
}
