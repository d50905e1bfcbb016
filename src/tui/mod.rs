pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
pub use theme::{resolve_theme, ThemeColors};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};

pub async fn run_tui(mut app: App) -> anyhow::Result<()> {
    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();

    let mut events = EventHandler::new(250); // 250ms tick drives flash expiry

    // Main loop. Every key press that changes the form re-evaluates the
    // catalog synchronously; ten rows, no background work needed.
    loop {
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        match events.next().await {
            Event::Key(key) => handle_key_event(&mut app, key),
            Event::Tick => app.update_flash(),
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    ratatui::restore();

    Ok(())
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        app::InputMode::Normal => match key.code {
            // Quit
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.should_quit = true
            }

            // Field focus
            KeyCode::Char('j') | KeyCode::Down => app.next_field(),
            KeyCode::Char('k') | KeyCode::Up => app.previous_field(),

            // Value adjustment (Shift or upper-case for the coarse step)
            KeyCode::Char('h') => app.adjust(-1, false),
            KeyCode::Char('H') => app.adjust(-1, true),
            KeyCode::Char('l') => app.adjust(1, false),
            KeyCode::Char('L') => app.adjust(1, true),
            KeyCode::Left => app.adjust(-1, key.modifiers.contains(KeyModifiers::SHIFT)),
            KeyCode::Right => app.adjust(1, key.modifiers.contains(KeyModifiers::SHIFT)),

            // Tab switching
            KeyCode::Tab => app.toggle_view(),

            // Criterion breakdown
            KeyCode::Char('b') | KeyCode::Enter => app.show_breakdown(),

            // Reset form to defaults
            KeyCode::Char('r') => app.reset(),

            // Help
            KeyCode::Char('?') => app.show_help(),

            _ => {}
        },
        app::InputMode::Breakdown => match key.code {
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('q') => app.dismiss_breakdown(),
            KeyCode::Char('j') | KeyCode::Down => app.next_row(),
            KeyCode::Char('k') | KeyCode::Up => app.previous_row(),
            _ => {}
        },
        app::InputMode::Help => {
            // Any key exits help
            app.dismiss_help();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::tui::app::{FormField, InputMode};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn new_app() -> App {
        App::new(&Config::default(), ThemeColors::dark())
    }

    #[test]
    fn test_quit_keys() {
        let mut app = new_app();
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = new_app();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_jk_move_field_focus() {
        let mut app = new_app();
        handle_key_event(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.focused, FormField::Ph);
        handle_key_event(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.focused, FormField::Soil);
    }

    #[test]
    fn test_shift_arrow_is_coarse() {
        let mut app = new_app();
        handle_key_event(&mut app, key(KeyCode::Char('j'))); // focus pH
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Right, KeyModifiers::SHIFT),
        );
        assert_eq!(app.conditions.ph, 7.5);
    }

    #[test]
    fn test_help_opens_and_any_key_closes() {
        let mut app = new_app();
        handle_key_event(&mut app, key(KeyCode::Char('?')));
        assert_eq!(app.input_mode, InputMode::Help);
        handle_key_event(&mut app, key(KeyCode::Char('x')));
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_breakdown_mode_navigates_rows() {
        let mut app = new_app();
        handle_key_event(&mut app, key(KeyCode::Char('b')));
        assert_eq!(app.input_mode, InputMode::Breakdown);
        assert_eq!(app.table_state.selected(), Some(0));
        handle_key_event(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.table_state.selected(), Some(1));
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert_eq!(app.input_mode, InputMode::Normal);
    }
}
