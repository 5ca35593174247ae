use quill::app::app_error::AppResult;
use quill::app::{App, Focus};
use quill::config::Config;
use quill::document_holder::{BufferSurface, KeyValueStore};
use quill::state_holder::EditorState;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::Event;
use ratatui::layout::Position;
use ratatui::Terminal;
use std::path::PathBuf;

pub struct TestApp {
    pub app: App,
    pub terminal: Terminal<TestBackend>,
}

impl TestApp {
    /// create a new test app whose store lives at `store_path`
    pub fn new(store_path: PathBuf) -> AppResult<Self> {
        Self::with_config(Config::default().with_store_path(Some(store_path)))
    }

    pub fn with_config(config: Config) -> AppResult<Self> {
        let terminal = super::mock_terminal::create_test_terminal();
        let app = App::new(&config)?;

        Ok(Self { app, terminal })
    }

    /// send an event to the app and process it, as the main loop would after polling
    pub fn send_event(&mut self, event: Event) -> AppResult<()> {
        self.app.handle_terminal_event(event)
    }

    /// send a sequence of events
    pub fn send_events(&mut self, events: Vec<Event>) -> AppResult<()> {
        for event in events {
            self.send_event(event)?;
        }

        Ok(())
    }

    pub fn state(&self) -> EditorState {
        self.app.document.state().clone()
    }

    pub fn label(&self) -> String {
        self.app.document.label().to_string()
    }

    pub fn content(&self) -> String {
        self.app.document.buffer().content()
    }

    pub fn focus(&self) -> Focus {
        self.app.focus.clone()
    }

    pub fn is_prompting(&self) -> bool {
        matches!(self.app.focus, Focus::FilenamePrompt(_))
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        self.app.document.store().get(key).unwrap()
    }

    pub fn files(&self) -> Vec<String> {
        self.app.document.files().to_vec()
    }

    /// render the current frame and return the screen, one line per row
    pub fn render_screen(&mut self) -> String {
        self.terminal.draw(|frame| self.app.draw(frame)).unwrap();
        let buffer = self.terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// cursor position of the last rendered frame
    pub fn cursor(&mut self) -> Position {
        self.terminal.get_cursor_position().unwrap()
    }
}
