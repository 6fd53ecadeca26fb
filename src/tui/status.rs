use crate::ctrl;
use crate::data;
use crate::tui::{self, term};
use crate::util::Result;

pub struct Line {
    region: tui::Region,
}

impl Line {
    pub fn new(region: tui::Region) -> Line {
        Line { region }
    }

    pub fn draw(&mut self, term: &mut term::Term, line: &mut data::status::Line) -> Result<()> {
        let is_input_mode = matches!(line.mode, ctrl::Mode::Input);
        let mode = mode_name(line.mode);
        let str = format!("[{}] {}", mode, line.message());
        tui::Text::new(self.region)
            .set_mark(is_input_mode)
            .draw(term, str)
    }
}

fn mode_name(mode: ctrl::Mode) -> &'static str {
    match mode {
        ctrl::Mode::Normal => "normal",
        ctrl::Mode::Input => "input",
    }
}
