use crate::app::{App, LoadState, MenuRow};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const HIGHLIGHT: Color = Color::Rgb(0, 0, 238);

pub fn render_menu(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Tags")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let menu = app.session.menu();
    if menu.is_empty() {
        let message = if app.load_state == LoadState::Ready {
            "No tagged projects"
        } else {
            "Loading catalogue..."
        };
        let paragraph = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, inner);
        return;
    }

    let lines = app
        .menu_rows()
        .into_iter()
        .enumerate()
        .filter_map(|(row_index, row)| {
            let line = match row {
                MenuRow::Category(index) => {
                    let entry = menu.entries().get(index)?;
                    let marker = if entry.expanded { "▾ " } else { "▸ " };
                    let style = if entry.active {
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    TextLine::from(vec![
                        Span::styled(marker, Style::default().fg(Color::Gray)),
                        Span::styled(entry.label(), style),
                    ])
                }
                MenuRow::Item { entry, item } => {
                    let sub_item = menu.entries().get(entry)?.items.get(item)?;
                    let style = if sub_item.active {
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::Gray)
                    };
                    TextLine::from(vec![
                        Span::raw("    "),
                        Span::styled(sub_item.label.clone(), style),
                    ])
                }
            };

            Some(if row_index == app.cursor {
                line.style(Style::default().bg(HIGHLIGHT))
            } else {
                line
            })
        })
        .collect::<Vec<_>>();

    let offset = app.cursor.saturating_sub(inner.height.saturating_sub(1) as usize);
    let paragraph = Paragraph::new(Text::from(lines)).scroll((offset as u16, 0));
    f.render_widget(paragraph, inner);
}
