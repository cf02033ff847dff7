//! Main TUI application state and logic

use crate::codegen::{DeclarationOptions, MathOptions};
use crate::convert::{convert, Target};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;

/// Which notation the input is read as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    LeetCode,
    Wolfram,
}

impl Mode {
    pub fn toggle(self) -> Self {
        match self {
            Mode::LeetCode => Mode::Wolfram,
            Mode::Wolfram => Mode::LeetCode,
        }
    }
}

/// The main application state
pub struct App {
    /// Text being converted
    pub input: String,

    pub mode: Mode,

    /// Options for each target, kept while the other one is active
    pub leetcode: DeclarationOptions,
    pub wolfram: MathOptions,

    /// Last conversion result; errors are kept as their message
    pub output: Result<String, String>,

    pub output_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        App {
            input: String::new(),
            mode: Mode::LeetCode,
            leetcode: DeclarationOptions::default(),
            wolfram: MathOptions::default(),
            output: Ok(String::new()),
            output_scroll: 0,
            should_quit: false,
            status_message: String::from("Type a test case"),
        }
    }

    /// Start from `target` with `input` already converted
    pub fn with_target(target: Target, input: impl Into<String>) -> Self {
        let mut app = App::new();
        match target {
            Target::LeetCode(options) => app.leetcode = options,
            Target::Wolfram(options) => {
                app.mode = Mode::Wolfram;
                app.wolfram = options;
            }
        }
        app.input = input.into();
        app.refresh();
        app
    }

    /// The target the output is generated for
    pub fn target(&self) -> Target {
        match self.mode {
            Mode::LeetCode => Target::LeetCode(self.leetcode.clone()),
            Mode::Wolfram => Target::Wolfram(self.wolfram),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(main_chunks[0]);

        let target = self.target();
        super::panes::render_input_pane(frame, columns[0], &self.input, &target.to_string());
        super::panes::render_output_pane(frame, columns[1], &self.output, &mut self.output_scroll);
        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            target.name(),
            &self.status_message,
            self.output.is_err(),
            self.option_labels(),
        );
    }

    fn option_labels(&self) -> (&'static str, &'static str) {
        match self.mode {
            Mode::LeetCode => ("format", "call"),
            Mode::Wolfram => ("power", "mint"),
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('l') => {
                    self.input.clear();
                    self.refresh();
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.mode = self.mode.toggle();
                self.refresh();
            }
            KeyCode::F(2) => {
                match self.mode {
                    Mode::LeetCode => {
                        self.leetcode.int_vector_format = self.leetcode.int_vector_format.next();
                    }
                    Mode::Wolfram => {
                        self.wolfram.power_style = self.wolfram.power_style.next();
                    }
                }
                self.refresh();
            }
            KeyCode::F(3) => {
                match self.mode {
                    Mode::LeetCode => self.leetcode.append_call = !self.leetcode.append_call,
                    Mode::Wolfram => self.wolfram.wrap_literal = !self.wolfram.wrap_literal,
                }
                self.refresh();
            }
            KeyCode::Up => {
                self.output_scroll = self.output_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                self.output_scroll = self.output_scroll.saturating_add(1);
            }
            KeyCode::Enter => {
                self.input.push('\n');
                self.refresh();
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.refresh();
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                self.refresh();
            }
            _ => {}
        }
    }

    /// Re-run the conversion for the current input and target
    fn refresh(&mut self) {
        if self.input.trim().is_empty() {
            self.output = Ok(String::new());
            self.status_message = String::from("Type a test case");
            return;
        }

        let target = self.target();
        self.output = convert(&self.input, &target).map_err(|e| e.to_string());
        self.status_message = match &self.output {
            Ok(code) => format!("Converted ({} lines)", code.lines().count()),
            Err(_) => String::from("Cannot convert"),
        };
        log::debug!("refreshed output for {target}: {}", self.status_message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::{IntVectorFormat, PowerStyle};
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_converts_after_every_key() {
        let mut app = App::new();
        type_text(&mut app, "x = 4");
        assert_eq!(app.output, Ok("int x = 4;\n".to_string()));

        press(&mut app, KeyCode::Backspace);
        assert!(app.output.is_err());
        assert_eq!(app.status_message, "Cannot convert");
    }

    #[test]
    fn test_tab_switches_target() {
        let mut app = App::new();
        type_text(&mut app, "2^n");
        assert_eq!(app.output, Ok("2 ^ n;\n".to_string()));

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.mode, Mode::Wolfram);
        assert_eq!(app.output, Ok("2.pow(n)".to_string()));

        press(&mut app, KeyCode::F(3));
        assert_eq!(app.output, Ok("mint(2).pow(n)".to_string()));

        press(&mut app, KeyCode::F(2));
        assert_eq!(app.wolfram.power_style, PowerStyle::Hat);
        assert_eq!(app.output, Ok("(mint(2) ^ n)".to_string()));
    }

    #[test]
    fn test_option_keys_in_leetcode_mode() {
        let mut app = App::new();
        type_text(&mut app, "head = [1]");
        press(&mut app, KeyCode::F(2));
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.leetcode.int_vector_format, IntVectorFormat::LinkedList);
        let code = app.output.clone().unwrap();
        assert!(code.starts_with("vector<ListNode *> nodes_head(1, nullptr);\n"));

        press(&mut app, KeyCode::F(3));
        assert!(app.output.clone().unwrap().contains("auto ans = sol.solve(head);"));
    }

    #[test]
    fn test_ctrl_keys() {
        let mut app = App::with_target(Target::default(), "k = 1");
        app.handle_key_event(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL));
        assert!(app.input.is_empty());
        assert_eq!(app.output, Ok(String::new()));

        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_shows_panes() {
        let mut app = App::with_target(Target::default(), "nums = [1,2]");
        let mut terminal = Terminal::new(TestBackend::new(100, 12)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Input: leetcode"));
        assert!(screen.contains("Output"));
        assert!(screen.contains("vector<int> nums = {1, 2};"));
        assert!(screen.contains("LEETCODE"));
    }
}
