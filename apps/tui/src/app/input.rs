use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_input(app: &mut App, key: KeyCode) {
    // A notice blocks everything else until it is dismissed.
    if app.current_notice().is_some() {
        app.dismiss_notice();
        return;
    }

    if key == KeyCode::F(1) || key == KeyCode::Char('?') {
        app.show_help = !app.show_help;
        return;
    }
    if app.show_help {
        if key == KeyCode::Esc {
            app.show_help = false;
        }
        return;
    }

    match key {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
        }
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor_down(),
        KeyCode::Home => app.cursor = 0,
        KeyCode::End => {
            app.cursor = app.menu_rows().len().saturating_sub(1);
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_selected(),
        KeyCode::Char('r') => app.request_reload(),
        _ => {}
    }
}
