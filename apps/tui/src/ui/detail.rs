use crate::app::App;
use crate::ui::text::markup_to_text;
use portfolio_core::Pane;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_detail(app: &App, f: &mut Frame<'_>, area: Rect) {
    let view = app.session.view();
    let block = Block::default()
        .title("Project")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),        // Title
            Constraint::Percentage(30),   // Header pane
            Constraint::Length(2),        // Back to overview
            Constraint::Min(3),           // Body pane
        ])
        .split(inner);

    let title = if view.title.is_empty() {
        Span::styled("Select a project from the menu", Style::default().fg(Color::Gray))
    } else {
        Span::styled(
            view.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )
    };
    f.render_widget(Paragraph::new(TextLine::from(title)), layout[0]);

    let budgets = app.session.config().width_budgets;
    render_pane(view.header(), budgets[0], f, layout[1]);

    if view.overview_visible {
        let link = TextLine::from(Span::styled(
            "← Back to overview",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
        ));
        f.render_widget(Paragraph::new(link), layout[2]);
    }

    render_pane(view.body(), budgets[1], f, layout[3]);
}

fn render_pane(pane: &Pane, budget: f64, f: &mut Frame<'_>, area: Rect) {
    if !pane.visible || pane.content.is_empty() {
        return;
    }

    let area = Rect {
        width: pane_width(pane.width, budget, area.width),
        ..area
    };
    let paragraph = Paragraph::new(markup_to_text(&pane.content))
        .style(Style::default().fg(brightness(pane.opacity)))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// Scales the rolled-out pixel width onto the available columns.
fn pane_width(width: Option<f64>, budget: f64, columns: u16) -> u16 {
    let Some(width) = width else {
        return columns;
    };
    if budget <= 0.0 {
        return columns;
    }
    let ratio = (width / budget).clamp(0.0, 1.0);
    ((ratio * f64::from(columns)).round() as u16).clamp(1, columns.max(1))
}

/// Terminal stand-in for CSS opacity: a grey level on a dark background.
fn brightness(opacity: f64) -> Color {
    let level = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color::Rgb(level, level, level)
}
