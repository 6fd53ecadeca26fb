use crate::ctrl::{Command, Mode};
use crate::data::{self, status, ui};
use crate::view;
use std::rc::Rc;

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

const MESSAGE_MS: u64 = 2000;

// Ties the store, the ephemeral view state and the focus together, independent of the terminal
pub struct Editor {
    store: data::Store,
    ui: ui::State,
    focus: data::Focus,
    pub status_line: status::Line,
}

impl Editor {
    pub fn new(forest: data::Forest) -> Editor {
        let mut editor = Editor {
            store: data::Store::new(forest),
            ui: ui::State::new(),
            focus: data::Focus::new(),
            status_line: status::Line::new(),
        };
        editor.rows();
        editor
    }

    pub fn store(&self) -> &data::Store {
        &self.store
    }

    pub fn ui(&self) -> &ui::State {
        &self.ui
    }

    pub fn focus(&self) -> &data::Focus {
        &self.focus
    }

    pub fn focused_key(&self) -> Option<&str> {
        self.focus.key.as_deref()
    }

    pub fn pending(&self) -> &str {
        self.focused_key().map_or("", |key| self.ui.pending(key))
    }

    // Renders the current forest and resolves the focus against it
    pub fn rows(&mut self) -> Vec<view::Row> {
        let rows = view::render(&view::Ctx {
            forest: self.store.forest(),
            ui: &self.ui,
        });
        let ids: Vec<data::focus::Id<'_>> = rows
            .iter()
            .map(|row| (row.path.as_slice(), row.key.as_str()))
            .collect();
        self.focus.update(&ids);
        rows
    }

    // The node behind the focused row, resolved by its index path
    pub fn focused_node(&self) -> Option<Rc<data::Node>> {
        self.focus.key.as_ref()?;
        data::node::at_path(self.store.forest(), &self.focus.path).cloned()
    }

    pub fn apply(&mut self, command: Command) -> Flow {
        match command {
            Command::Quit => return Flow::Quit,

            Command::Down => self.focus.step(1),
            Command::Up => self.focus.step(-1),
            Command::Top => self.focus.top(),
            Command::Bottom => self.focus.bottom(),

            Command::Toggle => {
                if let Some(key) = self.focus.key.clone() {
                    self.ui.toggle(&key);
                }
            }
            Command::Expand => {
                if let Some(key) = self.focus.key.clone() {
                    self.ui.set_expanded(&key, true);
                }
            }
            Command::Collapse => {
                if let Some(key) = self.focus.key.clone() {
                    self.ui.set_expanded(&key, false);
                }
            }

            Command::Remove => {
                if let Some(key) = self.focus.key.clone() {
                    self.store.apply_remove(&key);
                    self.ui.prune(self.store.forest());
                    self.status_line
                        .set_timed_message(format!("Removed '{key}'"), MESSAGE_MS);
                }
            }
            Command::AddChild => {
                if let Some(parent) = self.focused_node() {
                    let label = self.ui.take_pending(&parent.key);
                    let child_key = self.store.add_child_to(&parent, label);
                    self.status_line
                        .set_timed_message(format!("Added '{child_key}'"), MESSAGE_MS);
                }
            }

            Command::Push(ch) => {
                if let Some(key) = self.focus.key.clone() {
                    self.ui.goc(&key).pending.push(ch);
                }
            }
            Command::Pop => {
                if let Some(key) = self.focus.key.clone() {
                    self.ui.goc(&key).pending.pop();
                }
            }

            Command::SwitchMode(mode) => {
                self.status_line.mode = mode;
            }
        }

        self.rows();
        Flow::Continue
    }

    pub fn mode(&self) -> Mode {
        self.status_line.mode
    }
}
