use crate::tui::{self, term};
use crate::util::Result;
use crate::view;

pub struct Tree {
    region: tui::Region,
}

impl Tree {
    pub fn new(region: tui::Region) -> Tree {
        Tree { region }
    }

    pub fn draw(
        &mut self,
        term: &mut term::Term,
        rows: &[view::Row],
        focus: Option<usize>,
    ) -> Result<()> {
        let mut region = self.region;

        let mut ix = first_row(focus, self.region.height);

        while let Some(line) = region.pop(1, tui::Side::Top) {
            let mut text = tui::Text::new(line);
            text.set_mark(focus == Some(ix));

            match rows.get(ix) {
                Some(row) => text.draw(term, row.display())?,
                None => text.draw(term, "")?,
            }

            ix += 1;
        }

        Ok(())
    }
}

// First row to show so that `focus` stays within `height` lines
fn first_row(focus: Option<usize>, height: usize) -> usize {
    match focus {
        Some(focus_ix) if focus_ix >= height => focus_ix - height + 1,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_row() {
        assert_eq!(first_row(None, 10), 0);
        assert_eq!(first_row(Some(3), 10), 0);
        assert_eq!(first_row(Some(10), 10), 1);
        assert_eq!(first_row(Some(25), 10), 16);
    }
}
