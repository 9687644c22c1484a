use super::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use quire_core::Command;
use ratatui::layout::Position;

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            return;
        }

        if self.show_help || self.show_overview {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('o') => {
                    self.show_help = false;
                    self.show_overview = false;
                }
                _ => {}
            }
            return;
        }

        match key.code {
            // Digit keys for vim-style counts (e.g., 3l)
            KeyCode::Char(c @ '0'..='9') => {
                if c == '0' && self.pending_count.is_none() {
                    self.reset_count();
                    self.run(Command::Home);
                } else {
                    self.push_count_digit(c as u8 - b'0');
                }
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.reset_count();
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Left => self.run_counted(Command::Left),
            KeyCode::Right => self.run_counted(Command::Right),
            KeyCode::Up => self.run_counted(Command::Up),
            KeyCode::Down => self.run_counted(Command::Down),
            KeyCode::Home | KeyCode::Char('g') => {
                self.reset_count();
                self.run(Command::Home);
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.reset_count();
                self.run(Command::End);
            }
            KeyCode::Char(':') => {
                self.reset_count();
                self.open_prompt();
            }
            KeyCode::Char('?') => {
                self.reset_count();
                self.toggle_help();
            }
            KeyCode::Char('o') => {
                self.reset_count();
                self.toggle_overview();
            }
            KeyCode::Char('Z') => {
                self.reset_count();
                self.toggle_zen();
            }
            KeyCode::Char(c) => match Command::from_key_char(c) {
                Some(command) => self.run_counted(command),
                None => self.reset_count(),
            },
            _ => self.reset_count(),
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_prompt(),
            KeyCode::Esc => self.prompt = None,
            KeyCode::Backspace => {
                if let Some(prompt) = self.prompt.as_mut() {
                    prompt.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(prompt) = self.prompt.as_mut() {
                    prompt.push(c);
                }
            }
            _ => {}
        }
    }

    /// Clicks on a control arrow navigate in its direction
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.show_help || self.show_overview || self.prompt.is_some() {
            return;
        }
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let point = Position::new(mouse.column, mouse.row);
        let hit = self
            .control_areas
            .iter()
            .find(|(_, area)| area.contains(point));
        if let Some(&(control, _)) = hit {
            self.reset_count();
            self.run(control.command());
        }
    }

    fn run_counted(&mut self, command: Command) {
        let count = self.take_count();
        for _ in 0..count {
            if !self.run(command) {
                break;
            }
        }
    }

    fn run(&mut self, command: Command) -> bool {
        self.navigator.apply(command)
    }
}
