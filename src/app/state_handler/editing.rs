use ratatui::crossterm::event::{Event, KeyCode, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::Stylize,
    text::{Line, Text},
    widgets::Paragraph,
    Frame,
};

use crate::app::app_error::AppResult;
use crate::app::{App, Focus};
use crate::state_holder::EditorEvent;

impl App {
    pub fn handle_editing_event(&mut self, event: Event) -> AppResult<()> {
        if let Event::Key(key_event) = event {
            if key_event.modifiers.contains(KeyModifiers::CONTROL) {
                match key_event.code {
                    KeyCode::Char('s') => self.dispatch(EditorEvent::Save)?,
                    KeyCode::Char('a') => self.dispatch(EditorEvent::SaveAs)?,
                    KeyCode::Char('n') => self.dispatch(EditorEvent::New)?,
                    KeyCode::Char('q') => self.exit = true,
                    _ => (),
                }
                return Ok(());
            }

            let buffer = self.document.buffer_mut();
            let changed = match key_event.code {
                KeyCode::Char(c) => buffer.insert_char(c),
                KeyCode::Enter => buffer.insert_newline(),
                KeyCode::Backspace => buffer.backspace(),
                KeyCode::Delete => buffer.delete(),
                KeyCode::Left => {
                    buffer.move_left();
                    false
                }
                KeyCode::Right => {
                    buffer.move_right();
                    false
                }
                KeyCode::Home => {
                    buffer.move_home();
                    false
                }
                KeyCode::End => {
                    buffer.move_end();
                    false
                }
                KeyCode::Tab => {
                    self.focus = Focus::FileList;
                    false
                }
                _ => false,
            };
            if changed {
                self.dispatch(EditorEvent::Input)?;
            }
        }
        Ok(())
    }

    pub fn draw_help_editing(&self, help_area: Rect, frame: &mut Frame) {
        let instructions = Text::from(Line::from(vec![
            "Editing ".bold(),
            " Save ".into(),
            "<CTRL+S>".light_blue().bold(),
            " Save As ".into(),
            "<CTRL+A>".light_blue().bold(),
            " New ".into(),
            "<CTRL+N>".light_blue().bold(),
            " Files ".into(),
            "<Tab>".light_blue().bold(),
            " Quit ".into(),
            "<CTRL+Q>".light_blue().bold(),
        ]));
        let help_message = Paragraph::new(instructions);
        frame.render_widget(help_message, help_area);
    }
}
