use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, NoticeKind};
use crate::delay::SubmitDelay;
use crate::session::Page;

const SIDEBAR_WIDTH: u16 = 18;

pub fn render(frame: &mut Frame, app: &App) {
    let rows = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(frame.area());
    let columns = Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(rows[0]);

    render_sidebar(frame, columns[0], app.session.page());

    match app.session.page() {
        Page::AddTask => app.add_page.render(frame, columns[1]),
        Page::ListView => app
            .list_page
            .render(frame, columns[1], app.session.store().records()),
        Page::Settings => app.settings_page.render(frame, columns[1]),
    }

    render_status_bar(frame, rows[1], app);

    if let Some(delay) = &app.busy {
        render_busy_overlay(frame, delay);
    } else if app.help_visible {
        render_help_overlay(frame, app);
    }
}

fn render_sidebar(frame: &mut Frame, area: Rect, selected: Page) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Menu ")
        .title_style(Style::default().fg(Color::White));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = vec![Line::from("")];
    for (i, page) in Page::all().into_iter().enumerate() {
        let number = i + 1;
        if page == selected {
            lines.push(Line::from(vec![
                Span::styled("> ", Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!("{number} {}", page.title()),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        } else {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{number} {}", page.title()),
                    Style::default().fg(Color::Gray),
                ),
            ]));
        }
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(notice) = &app.notice {
        let color = match notice.kind {
            NoticeKind::Info => Color::Blue,
            NoticeKind::Success => Color::Green,
            NoticeKind::Warning => Color::Yellow,
            NoticeKind::Error => Color::Red,
        };
        Line::from(Span::styled(
            format!(" {}", notice.text),
            Style::default().fg(color),
        ))
    } else {
        Line::from(vec![
            Span::styled(
                format!(" Page: {}", app.session.page().title()),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw("  "),
            Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
            Span::styled(" Switch ", Style::default().fg(Color::DarkGray)),
            Span::styled("[?]", Style::default().fg(Color::Yellow)),
            Span::styled(" Help ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
        ])
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_busy_overlay(frame: &mut Frame, delay: &SubmitDelay) {
    let overlay_area = centered_rect(frame.area(), 34, 5);
    let inner = render_overlay_frame(frame, overlay_area, " Saving ", Color::Cyan);

    let rows = Layout::vertical([
        Constraint::Length(1), // pad
        Constraint::Length(1), // message
        Constraint::Min(0),    // pad
    ])
    .split(inner);

    let message = Line::from(vec![
        Span::styled(delay.spinner(), Style::default().fg(Color::Cyan)),
        Span::raw(" Saving your to-do..."),
    ]);
    frame.render_widget(
        Paragraph::new(message).centered(),
        rows[1],
    );
}

fn render_help_overlay(frame: &mut Frame, app: &App) {
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));

    let shortcuts = app.page_shortcuts();
    if !shortcuts.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  {} Page", app.session.page().title()),
            Style::default().fg(Color::White),
        )));
        for shortcut in &shortcuts {
            lines.push(shortcut_line(shortcut.key, shortcut.description));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  Global",
        Style::default().fg(Color::White),
    )));
    let global_shortcuts = [
        ("Tab", "Next Page"),
        ("1-3", "Select Page"),
        ("?", "Toggle Help"),
        ("q/Esc", "Quit"),
    ];
    for (key, desc) in global_shortcuts {
        lines.push(shortcut_line(key, desc));
    }

    lines.push(Line::from(""));

    let content_height = lines.len() as u16 + 2;
    let overlay_width = 30u16;
    let overlay_height = content_height.min(frame.area().height.saturating_sub(4));

    let overlay_area = centered_rect(frame.area(), overlay_width, overlay_height);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, overlay_area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

fn render_overlay_frame(frame: &mut Frame, area: Rect, title: &str, color: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

fn shortcut_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw("    "),
        Span::styled(format!("[{key}]"), Style::default().fg(Color::Yellow)),
        Span::raw(format!(" {description}")),
    ])
}
