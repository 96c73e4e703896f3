use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Tab};

pub fn handle_key_event(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('1') => {
            app.select_tab(Tab::Overview);
        }
        KeyCode::Char('2') => {
            app.select_tab(Tab::Campaigns);
        }
        KeyCode::Char('3') => {
            app.select_tab(Tab::Platforms);
        }
        KeyCode::Tab | KeyCode::Right => {
            app.next_tab();
        }
        KeyCode::BackTab | KeyCode::Left => {
            app.prev_tab();
        }
        KeyCode::Up => {
            app.scroll_up();
        }
        KeyCode::Down => {
            app.scroll_down();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_number_keys_jump_to_tab() {
        let mut app = App::new(Tab::Overview);
        handle_key_event(key(KeyCode::Char('3')), &mut app);
        assert_eq!(app.tab, Tab::Platforms);
        handle_key_event(key(KeyCode::Char('2')), &mut app);
        assert_eq!(app.tab, Tab::Campaigns);
    }

    #[test]
    fn test_tab_key_cycles() {
        let mut app = App::new(Tab::Platforms);
        handle_key_event(key(KeyCode::Tab), &mut app);
        assert_eq!(app.tab, Tab::Overview);
        handle_key_event(key(KeyCode::Left), &mut app);
        assert_eq!(app.tab, Tab::Platforms);
    }
}
