use crate::tui::{self, term};
use crate::util::Result;
use crossterm::{
    cursor,
    style::{self, Stylize},
    QueueableCommand,
};
use unicode_width::UnicodeWidthChar;

pub struct Text {
    region: tui::Region,
    marked: bool,
}

impl Text {
    pub fn new(region: tui::Region) -> Text {
        Text {
            region,
            marked: false,
        }
    }

    pub fn set_mark(&mut self, marked: bool) -> &mut Self {
        self.marked = marked;
        self
    }

    pub fn draw(&mut self, term: &mut term::Term, str: impl Into<String>) -> Result<()> {
        term.queue(cursor::MoveTo(
            self.region.col as u16,
            self.region.row as u16,
        ))?;

        let line = clip(&str.into(), self.region.width);
        let content = if self.marked {
            line.with(style::Color::Green).on(style::Color::DarkGrey)
        } else {
            line.stylize()
        };
        term.queue(style::PrintStyledContent(content))?;

        Ok(())
    }
}

// Fits `str` into exactly `width` terminal columns: characters without a display width are
// dropped, the tail that does not fit is cut and the rest is padded with spaces
pub fn clip(str: &str, width: usize) -> String {
    let mut res = String::with_capacity(width);
    let mut used = 0;
    let visible = str
        .chars()
        .filter_map(|ch| ch.width().map(|w| (ch, w)))
        .filter(|(_, w)| *w > 0);
    for (ch, w) in visible {
        if used + w > width {
            break;
        }
        res.push(ch);
        used += w;
    }
    res.push_str(&" ".repeat(width - used));
    res
}
