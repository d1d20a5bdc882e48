//! Main layout rendering for the picker.

use crate::app::App;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Draw the picker UI: menu on the left, preview on the right, footer below
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Menu and preview
            Constraint::Length(1), // Footer
        ])
        .split(area);

    // Labels get their preferred width plus the border, capped at half the screen
    let menu_width = u16::try_from(app.picker.preferred_width())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .max(12)
        .min(chunks[0].width / 2);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(menu_width), Constraint::Min(0)])
        .split(chunks[0]);

    draw_menu(frame, app, columns[0]);
    draw_preview(frame, app, columns[1]);
    draw_footer(frame, app, chunks[1]);
}

fn draw_menu(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(&mut app.picker, inner);
}

fn draw_preview(frame: &mut Frame, app: &App, area: Rect) {
    let (title, body) = match app.picker.current() {
        Some(item) => (format!(" {} ", item.label), item.payload.as_str()),
        None => (" Preview ".to_string(), ""),
    };

    let preview = Paragraph::new(body)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(title),
        );
    frame.render_widget(preview, area);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let (shown, total) = app.picker.counts();
    let text = format!(" {}/{} | ↑/↓: Navigate | Enter: Choose | Esc: Quit ", shown, total);
    let footer = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, area);
}
