// UI module for portfolio_tui
// Handles all UI rendering functions

pub mod detail;
pub mod help;
pub mod menu;
pub mod popup;
pub mod text;

use crate::app::App;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let area = f.area();
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title area
            Constraint::Min(5),    // Content area
            Constraint::Length(1), // Status line
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(area.inner(Margin::new(1, 0)));

    render_title(app, f, main_layout[0]);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(32), Constraint::Percentage(68)])
        .split(main_layout[1]);
    menu::render_menu(app, f, content[0]);
    detail::render_detail(app, f, content[1]);

    render_status(app, f, main_layout[2]);
    render_shortcuts(f, main_layout[3]);

    if app.show_help {
        help::render_help(f, area);
    }

    if let Some(notice) = app.current_notice() {
        popup::render_notice(notice, f, area);
    }
}

fn render_title(app: &App, f: &mut Frame<'_>, area: Rect) {
    let catalogue = app.session.catalogue();
    let line = TextLine::from(vec![
        Span::styled(
            "Portfolio ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} projects", catalogue.len()),
            Style::default().fg(Color::White),
        ),
        Span::raw("  "),
        Span::styled(app.source_label.clone(), Style::default().fg(Color::Gray)),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(paragraph, area);
}

fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let paragraph = Paragraph::new(app.status_message.as_str())
        .style(Style::default().fg(Color::Yellow));
    f.render_widget(paragraph, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let paragraph = Paragraph::new("↑/↓ move  Enter open/select  r reload  ? help  q quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(paragraph, area);
}
