use ratatui::crossterm::event::{Event, KeyCode};
use ratatui::{
    layout::Rect,
    style::Stylize,
    text::{Line, Text},
    widgets::Paragraph,
    Frame,
};
use tui_input::backend::crossterm::EventHandler;

use crate::app::app_error::AppResult;
use crate::app::App;

impl App {
    pub fn handle_filename_prompt_event(&mut self, event: Event) -> AppResult<()> {
        if let Event::Key(key_event) = event {
            match key_event.code {
                KeyCode::Enter => {
                    let answer = self.input.value().to_string();
                    self.resolve_prompt(Some(answer))?;
                }
                KeyCode::Esc => self.resolve_prompt(None)?,
                _ => {
                    self.input.handle_event(&event);
                }
            }
        }
        Ok(())
    }

    pub fn draw_help_filename_prompt(&self, help_area: Rect, frame: &mut Frame) {
        let instructions = Text::from(Line::from(vec![
            "Save As ".bold(),
            " Confirm ".into(),
            "<Enter>".light_blue().bold(),
            " Cancel ".into(),
            "<Esc>".light_blue().bold(),
            format!(" .{} is added when missing", self.document.extension()).italic(),
        ]));
        let help_message = Paragraph::new(instructions);
        frame.render_widget(help_message, help_area);
    }
}
