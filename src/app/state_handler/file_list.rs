use ratatui::crossterm::event::{Event, KeyCode};
use ratatui::{
    layout::Rect,
    style::Stylize,
    text::{Line, Text},
    widgets::Paragraph,
    Frame,
};

use crate::app::app_error::{AppError, AppResult};
use crate::app::{App, Focus};
use crate::state_holder::EditorEvent;

impl App {
    pub fn handle_file_list_event(&mut self, event: Event) -> AppResult<()> {
        if let Event::Key(key_event) = event {
            match key_event.code {
                KeyCode::Tab | KeyCode::Esc => self.focus = Focus::Editing,
                KeyCode::Char('k') | KeyCode::Up => {
                    self.highlight_index = self.selected_index().saturating_sub(1);
                }
                KeyCode::Char('j') | KeyCode::Down => {
                    self.highlight_index = self.selected_index().saturating_add(1);
                    self.highlight_index = self.selected_index();
                }
                KeyCode::Enter => {
                    let filename = self
                        .document
                        .files()
                        .get(self.selected_index())
                        .cloned()
                        .ok_or(AppError::State("No stored files to open".into()))?;
                    self.focus = Focus::Editing;
                    self.dispatch(EditorEvent::OpenFile(filename))?;
                }
                _ => (),
            }
        }
        Ok(())
    }

    pub fn draw_help_file_list(&self, help_area: Rect, frame: &mut Frame) {
        let instructions = Text::from(Line::from(vec![
            "Files ".bold(),
            " Move ".into(),
            "<J/K>".light_blue().bold(),
            " Open ".into(),
            "<Enter>".light_blue().bold(),
            " Back ".into(),
            "<Tab/Esc>".light_blue().bold(),
        ]));
        let help_message = Paragraph::new(instructions);
        frame.render_widget(help_message, help_area);
    }
}
