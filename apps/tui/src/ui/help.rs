use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::cli::CliArgs;
use crate::ui::popup::{centered_rect, ClearWidget};

const KEYS: [(&str, &str); 6] = [
    ("↑/k ↓/j", "move through the menu"),
    ("Home/End", "jump to first or last row"),
    ("Enter/Space", "open a tag or show a project"),
    ("r", "reload the catalogue"),
    ("?/F1", "toggle this help"),
    ("q/Esc", "quit"),
];

pub fn help_lines() -> Vec<TextLine<'static>> {
    let heading = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![TextLine::from(Span::styled("Keys:", heading))];

    lines.extend(KEYS.iter().map(|(key, action)| {
        TextLine::from(vec![
            Span::styled(format!("  {key:<12}"), Style::default().fg(Color::Cyan)),
            Span::raw(*action),
        ])
    }));

    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled("CLI Options:", heading)));

    let help_text = CliArgs::help_text();
    for line in help_text.lines() {
        if line.starts_with("Usage") || line.starts_with("Options") || line.trim().is_empty() {
            continue;
        }
        lines.push(TextLine::from(line.to_string()));
    }

    lines
}

pub fn render_help(f: &mut Frame<'_>, area: Rect) {
    let popup = centered_rect(70, 70, area);
    f.render_widget(ClearWidget, popup);

    let block = Block::default()
        .title("Help (Esc to close)")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(Text::from(help_lines()))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, popup);
}
