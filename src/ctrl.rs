use crate::tui::{Event, KeyCode};
use crate::util::Result;
use crossterm::event::KeyModifiers;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Normal,
    // Keys edit the pending label of the focused node
    Input,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Down,
    Up,
    Top,
    Bottom,
    Toggle,
    Expand,
    Collapse,
    Remove,
    AddChild,
    Push(char),
    Pop,
    SwitchMode(Mode),
}

pub struct Commander {
    mode: Mode,
    commands: Vec<Command>,
}

impl Commander {
    pub fn new() -> Commander {
        let mut res = Commander {
            mode: Mode::Normal,
            commands: Vec::new(),
        };
        res.commands.push(Command::SwitchMode(res.mode));
        res
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn process(&mut self, event: Event) -> Result<()> {
        let key = match event {
            Event::Key(key) => key,
            _ => return Ok(()),
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.commands.push(Command::Quit);
            }
            return Ok(());
        }

        match self.mode {
            Mode::Normal => match key.code {
                KeyCode::Char(ch) => match ch {
                    'q' => self.commands.push(Command::Quit),

                    'j' => self.commands.push(Command::Down),
                    'k' => self.commands.push(Command::Up),
                    'g' => self.commands.push(Command::Top),
                    'G' => self.commands.push(Command::Bottom),

                    ' ' => self.commands.push(Command::Toggle),
                    'l' => self.commands.push(Command::Expand),
                    'h' => self.commands.push(Command::Collapse),

                    'x' => self.commands.push(Command::Remove),
                    '+' => self.commands.push(Command::AddChild),

                    'i' | 'a' => self.switch_mode(Mode::Input),

                    _ => {}
                },
                KeyCode::Down => self.commands.push(Command::Down),
                KeyCode::Up => self.commands.push(Command::Up),
                KeyCode::Home => self.commands.push(Command::Top),
                KeyCode::End => self.commands.push(Command::Bottom),
                KeyCode::Right => self.commands.push(Command::Expand),
                KeyCode::Left => self.commands.push(Command::Collapse),
                KeyCode::Enter => self.commands.push(Command::Toggle),
                KeyCode::Delete => self.commands.push(Command::Remove),
                _ => {}
            },
            Mode::Input => match key.code {
                KeyCode::Char(ch) => self.commands.push(Command::Push(ch)),
                KeyCode::Backspace => self.commands.push(Command::Pop),
                KeyCode::Enter => {
                    self.commands.push(Command::AddChild);
                    self.switch_mode(Mode::Normal);
                }
                KeyCode::Esc => self.switch_mode(Mode::Normal),
                _ => {}
            },
        }

        Ok(())
    }

    pub fn commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    fn switch_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.commands.push(Command::SwitchMode(mode));
    }
}

impl Default for Commander {
    fn default() -> Commander {
        Commander::new()
    }
}
