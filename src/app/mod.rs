use chrono::Local;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::time::Duration;
use tracing::{info, warn};
use tui_input::Input;

use crate::app::app_error::{AppError, AppResult};
use crate::config::Config;
use crate::document_holder::{DocumentHolder, FileStore, TextBuffer};
use crate::state_holder::{Effect, EditorEvent, PromptAnswer};

pub mod app_error;
pub mod state_handler;

const MIN_INPUT_WIDTH: u16 = 3;
const INPUT_WIDTH_PADDING: u16 = 3;
const FILE_LIST_WIDTH: u16 = 24;

/// Which pane receives key events
///
/// Independent of the document's save/dirty state.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub enum Focus {
    /// Typing into the buffer
    #[default]
    Editing,
    /// Choosing a stored file to open
    FileList,
    /// Waiting for a filename; holds the event to finish once it resolves
    FilenamePrompt(EditorEvent),
}

#[derive(Debug)]
pub struct App {
    pub document: DocumentHolder<FileStore, TextBuffer>,
    pub focus: Focus,
    pub input: Input,
    pub highlight_index: usize,
    pub notice: Option<String>,
    pub exit: bool,
    tick_rate: Duration,
}

impl App {
    /// Opens the configured store and starts an empty, unsaved document
    ///
    /// # Returns
    ///
    /// Returns `AppResult<Self>` which may contain `AppError::Storage` if the
    /// store file exists but cannot be read
    pub fn new(config: &Config) -> AppResult<Self> {
        let store = FileStore::open(config.store_path())?;
        let document =
            DocumentHolder::with_extension(store, TextBuffer::default(), config.extension())?;
        Ok(App {
            document,
            focus: Focus::default(),
            input: Input::default(),
            highlight_index: 0,
            notice: None,
            exit: false,
            tick_rate: config.tick_rate(),
        })
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> AppResult<()> {
        loop {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_event()?;
            if self.exit {
                return Ok(());
            }
        }
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let vertical = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ]);
        let [main_area, input_area, help_area] = vertical.areas(frame.area());
        let horizontal =
            Layout::horizontal([Constraint::Length(FILE_LIST_WIDTH), Constraint::Min(1)]);
        let [files_area, buffer_area] = horizontal.areas(main_area);

        self.draw_file_list(files_area, frame);
        self.draw_buffer(buffer_area, frame);
        self.draw_input_area(input_area, frame);
        match self.focus {
            Focus::Editing => self.draw_help_editing(help_area, frame),
            Focus::FileList => self.draw_help_file_list(help_area, frame),
            Focus::FilenamePrompt(_) => self.draw_help_filename_prompt(help_area, frame),
        }
    }

    pub fn draw_file_list(&self, area: Rect, frame: &mut Frame) {
        let items: Vec<ListItem> = self
            .document
            .files()
            .iter()
            .map(|name| ListItem::new(name.as_str()))
            .collect();
        let border_style = if self.focus == Focus::FileList {
            Color::Yellow.into()
        } else {
            Style::default()
        };
        let list = List::new(items)
            .block(Block::bordered().title("Files").border_style(border_style))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        let mut list_state = ListState::default();
        if self.focus == Focus::FileList && !self.document.files().is_empty() {
            list_state.select(Some(self.selected_index()));
        }
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    pub fn draw_buffer(&self, area: Rect, frame: &mut Frame) {
        let buffer = self.document.buffer();
        let (line, column) = buffer.cursor_position();
        // 2 rows and 2 columns of border
        let visible_rows = area.height.saturating_sub(2).max(1) as usize;
        let visible_columns = area.width.saturating_sub(2).max(1) as usize;
        let row_scroll = line.saturating_sub(visible_rows - 1);
        let col_scroll = column.saturating_sub(visible_columns - 1);

        let style = if self.focus == Focus::Editing {
            Color::Yellow.into()
        } else {
            Style::default()
        };
        let paragraph = Paragraph::new(buffer.text())
            .scroll((row_scroll as u16, col_scroll as u16))
            .block(
                Block::bordered()
                    .title(self.document.label().to_string())
                    .border_style(style),
            );
        frame.render_widget(paragraph, area);

        if self.focus == Focus::Editing {
            let x = (column - col_scroll) as u16 + 1;
            let y = (line - row_scroll) as u16 + 1;
            frame.set_cursor_position((area.x + x, area.y + y));
        }
    }

    pub fn draw_input_area(&self, area: Rect, frame: &mut Frame) {
        if !matches!(self.focus, Focus::FilenamePrompt(_)) {
            let status = Paragraph::new(self.notice.clone().unwrap_or_default())
                .block(Block::bordered().title("Status"));
            frame.render_widget(status, area);
            return;
        }

        // keep 2 for boarders and 1 for cursor
        let width = area.width.max(MIN_INPUT_WIDTH) - INPUT_WIDTH_PADDING;
        let scroll = self.input.visual_scroll(width as usize);
        let input = Paragraph::new(self.input.value())
            .style(Color::Yellow)
            .scroll((0, scroll as u16))
            .block(Block::bordered().title("Save as"));
        frame.render_widget(input, area);

        // https://github.com/sayanarijit/tui-input/blob/main/examples/ratatui_crossterm_input.rs
        let x = self.input.visual_cursor().max(scroll) - scroll + 1;
        frame.set_cursor_position((area.x + x as u16, area.y + 1));
    }

    /// Polls for one terminal event and handles it
    pub fn handle_event(&mut self) -> AppResult<()> {
        if event::poll(self.tick_rate)? {
            let event = event::read()?;
            match self.handle_terminal_event(event) {
                Ok(()) => (),
                Err(e @ AppError::Io(_)) => return Err(e),
                Err(e) => {
                    warn!(target: "app", %e, "event_failed");
                    self.notice = Some(e.to_string());
                }
            }
        }
        Ok(())
    }

    /// Routes a terminal event to the handler of the current focus
    pub fn handle_terminal_event(&mut self, event: Event) -> AppResult<()> {
        if let Event::Key(key_event) = &event {
            if key_event.kind != KeyEventKind::Press {
                return Ok(());
            }
            if key_event.code == KeyCode::Char('c')
                && key_event.modifiers.contains(KeyModifiers::CONTROL)
            {
                self.exit = true;
                return Ok(());
            }
        }

        match self.focus {
            Focus::Editing => self.handle_editing_event(event),
            Focus::FileList => self.handle_file_list_event(event),
            Focus::FilenamePrompt(_) => self.handle_filename_prompt_event(event),
        }
    }

    /// Sends an editor event to the document
    ///
    /// Events that need a filename suspend here: focus moves to the prompt
    /// and no other editor event is dispatched until it resolves.
    pub fn dispatch(&mut self, event: EditorEvent) -> AppResult<()> {
        if self.document.needs_prompt(&event) {
            info!(target: "app", ?event, "filename_prompt_opened");
            self.input.reset();
            self.focus = Focus::FilenamePrompt(event);
            return Ok(());
        }
        self.finish_dispatch(event, PromptAnswer::cancelled())
    }

    /// Completes the suspended event with the prompt's answer
    ///
    /// `None` is a cancel. Cancelled and blank answers still go through the
    /// document, which leaves everything unchanged for them.
    pub fn resolve_prompt(&mut self, answer: Option<String>) -> AppResult<()> {
        let Focus::FilenamePrompt(pending) = self.focus.clone() else {
            return Err(AppError::State("No filename prompt is pending".into()));
        };
        self.focus = Focus::Editing;
        self.input.reset();
        info!(target: "app", ?pending, cancelled = answer.is_none(), "filename_prompt_resolved");
        self.finish_dispatch(pending, PromptAnswer::from(answer))
    }

    /// Index into the file list, clamped to its current length
    pub fn selected_index(&self) -> usize {
        self.highlight_index
            .min(self.document.files().len().saturating_sub(1))
    }

    fn finish_dispatch(&mut self, event: EditorEvent, mut prompt: PromptAnswer) -> AppResult<()> {
        let is_save = matches!(event, EditorEvent::Save | EditorEvent::SaveAs);
        let effects = self.document.dispatch(event, &mut prompt)?;
        let mut notice = None;
        for effect in &effects {
            match effect {
                Effect::PersistBuffer(name) => {
                    notice = Some(format!("saved {name} at {}", Local::now().format("%H:%M:%S")))
                }
                Effect::LoadEntry(name) => notice = Some(format!("opened {name}")),
                Effect::ClearBuffer => notice = Some("new document".to_string()),
                Effect::RefreshFileList => (),
            }
        }
        if is_save && effects.is_empty() {
            notice = Some("nothing saved".to_string());
        }
        if notice.is_some() {
            self.notice = notice;
        }
        Ok(())
    }
}
