use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::game::{Game, Notice, SubmitOutcome, TickOutcome};

pub enum Screen {
    Title,
    Playing,
}

pub enum MenuOption {
    NewGame,
    Quit,
}

impl MenuOption {
    fn next(&self) -> Self {
        match self {
            MenuOption::NewGame => MenuOption::Quit,
            MenuOption::Quit => MenuOption::NewGame,
        }
    }
}

pub struct App<'a> {
    pub game: Game,
    pub editor: TextArea<'a>,
    pub screen: Screen,
    pub menu_selection: MenuOption,
    pub notice: Option<Notice>,
    pub message: String,
    pub message_style: Style,
    pub command_mode: bool,
    pub command_buffer: String,
    pub should_quit: bool,
}

const DEFAULT_MESSAGE: &str = "Type a CSS rule and press ENTER to try it.";

fn new_editor<'a>(text: &str) -> TextArea<'a> {
    let mut editor = TextArea::new(vec![text.to_string()]);
    editor.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" CSS [ENTER: Try | F1: Hint | F2: Retry | Esc: Command] "),
    );
    editor.set_cursor_line_style(Style::default());
    editor.set_placeholder_text("Type CSS rule here (e.g., justify-content: center;)");
    editor.move_cursor(tui_textarea::CursorMove::End);
    editor
}

impl<'a> App<'a> {
    pub fn new(game: Game) -> Self {
        App {
            game,
            editor: new_editor(""),
            screen: Screen::Title,
            menu_selection: MenuOption::NewGame,
            notice: None,
            message: DEFAULT_MESSAGE.to_string(),
            message_style: Style::default().fg(Color::Yellow),
            command_mode: false,
            command_buffer: String::new(),
            should_quit: false,
        }
    }

    pub fn start_game(&mut self) {
        self.screen = Screen::Playing;
        self.sync_editor();
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.screen, Screen::Playing)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Title => self.handle_title_key(key),
            Screen::Playing => self.handle_playing_key(key),
        }
    }

    /// Ticks are dropped while a notice is waiting to be acknowledged.
    pub fn on_tick(&mut self) {
        if !self.is_playing() || self.notice.is_some() {
            return;
        }

        if self.game.tick() == TickOutcome::Expired {
            self.notice = Some(Notice::TimeUp);
            self.message = DEFAULT_MESSAGE.to_string();
            self.message_style = Style::default().fg(Color::Yellow);
            self.sync_editor();
        }
    }

    fn handle_title_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('k') => {
                self.menu_selection = self.menu_selection.next();
            }
            KeyCode::Enter => match self.menu_selection {
                MenuOption::NewGame => self.start_game(),
                MenuOption::Quit => self.should_quit = true,
            },
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_playing_key(&mut self, key: KeyEvent) {
        if self.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.notice = None;
            }
            return;
        }

        if self.command_mode {
            self.handle_command_key(key);
            return;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => self.try_answer(),
            (KeyCode::F(1), _) => self.show_hint(),
            (KeyCode::F(2), _) | (KeyCode::Char('r'), KeyModifiers::CONTROL) => self.retry(),
            (KeyCode::Esc, _) => {
                self.command_mode = true;
                self.command_buffer.clear();
            }
            _ => {
                self.editor.input(key);
                let text = self.editor.lines().join(" ");
                self.game.set_input(text);
            }
        }
    }

    // Vim-style command line, opened with Esc since ':' belongs to the CSS.
    fn handle_command_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.command_mode = false;
                self.command_buffer.clear();
            }
            KeyCode::Enter => {
                let command = std::mem::take(&mut self.command_buffer);
                match command.trim_start_matches(':') {
                    "q" | "quit" => self.should_quit = true,
                    "hint" => self.show_hint(),
                    "retry" => self.retry(),
                    "help" => {
                        self.message =
                            "Commands: :q (quit), :hint (show hint), :retry (clear input, -3)"
                                .to_string();
                        self.message_style = Style::default().fg(Color::Cyan);
                    }
                    "" => {}
                    other => {
                        self.message = format!("Unknown command: {}", other);
                        self.message_style = Style::default().fg(Color::Red);
                    }
                }
                self.command_mode = false;
            }
            KeyCode::Backspace => {
                if self.command_buffer.pop().is_none() {
                    self.command_mode = false;
                }
            }
            KeyCode::Char(c) => self.command_buffer.push(c),
            _ => {}
        }
    }

    fn try_answer(&mut self) {
        let points_before = self.game.state().points;
        let outcome = self.game.submit();
        if let SubmitOutcome::Advanced { level } = outcome {
            let earned = self.game.state().points - points_before;
            self.message = format!(
                "*** LEVEL CLEARED! ***  +{} points. On to level {}.",
                earned, level
            );
            self.message_style = Style::default().fg(Color::Green);
        }
        self.notice = outcome.notice();
        self.sync_editor();
    }

    fn show_hint(&mut self) {
        self.game.request_hint();
        self.message = "Hints are free. Use them wisely anyway.".to_string();
        self.message_style = Style::default().fg(Color::Cyan);
    }

    fn retry(&mut self) {
        let points_before = self.game.state().points;
        self.game.retry();
        self.message = format!(
            "Input cleared. -{} points.",
            points_before - self.game.state().points
        );
        self.message_style = Style::default().fg(Color::Magenta);
        self.sync_editor();
    }

    fn editor_text(&self) -> String {
        self.editor.lines().join(" ")
    }

    /// Rebuilds the input box when the game changed the text under it.
    fn sync_editor(&mut self) {
        if self.editor_text() != self.game.input() {
            self.editor = new_editor(self.game.input());
        }
    }
}
