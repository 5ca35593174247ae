use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// create a mock terminal for testing without actual TTY
pub fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(80, 24); // standard terminal size
    Terminal::new(backend).unwrap()
}

/// key event builders
pub mod events {
    use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

    pub fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    pub fn char(c: char) -> Event {
        key(KeyCode::Char(c))
    }

    pub fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    pub fn enter() -> Event {
        key(KeyCode::Enter)
    }

    pub fn tab() -> Event {
        key(KeyCode::Tab)
    }

    pub fn esc() -> Event {
        key(KeyCode::Esc)
    }

    pub fn backspace() -> Event {
        key(KeyCode::Backspace)
    }

    pub fn left() -> Event {
        key(KeyCode::Left)
    }

    pub fn up() -> Event {
        key(KeyCode::Up)
    }

    pub fn down() -> Event {
        key(KeyCode::Down)
    }

    /// one char event per char of `text`
    pub fn text(text: &str) -> Vec<Event> {
        text.chars().map(char).collect()
    }
}
