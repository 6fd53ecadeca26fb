use crate::tui::term;
use crate::{fail, util};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Region {
    pub row: usize,
    pub col: usize,
    pub width: usize,
    pub height: usize,
}

impl Region {
    // Splits `count` lines off the given side, `None` when fewer lines are left
    pub fn pop(&mut self, count: usize, side: Side) -> Option<Region> {
        if count > self.height {
            return None;
        }
        self.height -= count;

        let row = match side {
            Side::Top => {
                let row = self.row;
                self.row += count;
                row
            }
            Side::Bottom => self.row + self.height,
        };

        Some(Region {
            row,
            height: count,
            ..*self
        })
    }
}

pub enum Side {
    Top,
    Bottom,
}

#[derive(Default, Debug)]
pub struct Layout {
    pub title: Region,
    pub tree: Region,
    pub input: Region,
    pub status: Region,
}

impl Layout {
    pub fn new() -> Layout {
        Default::default()
    }

    pub fn create(term: &term::Term) -> util::Result<Layout> {
        Layout::split(term.region()?)
    }

    pub fn split(mut region: Region) -> util::Result<Layout> {
        let mut res = Layout::new();
        let Some(title) = region.pop(1, Side::Top) else {
            fail!("Could not pop region for title");
        };
        let Some(status) = region.pop(1, Side::Bottom) else {
            fail!("Could not pop region for status");
        };
        let Some(input) = region.pop(1, Side::Bottom) else {
            fail!("Could not pop region for input");
        };
        res.title = title;
        res.status = status;
        res.input = input;
        res.tree = region;

        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop() {
        let mut region = Region {
            row: 0,
            col: 0,
            width: 10,
            height: 5,
        };
        let top = region.pop(2, Side::Top);
        assert_eq!(top.map(|r| (r.row, r.height)), Some((0, 2)));
        let bottom = region.pop(1, Side::Bottom);
        assert_eq!(bottom.map(|r| (r.row, r.height)), Some((4, 1)));
        assert_eq!((region.row, region.height), (2, 2));
        assert!(region.pop(3, Side::Top).is_none());
    }

    #[test]
    fn test_split() -> util::Result<()> {
        let layout = Layout::split(Region {
            row: 0,
            col: 0,
            width: 80,
            height: 24,
        })?;
        assert_eq!(layout.title.row, 0);
        assert_eq!(layout.tree.row, 1);
        assert_eq!(layout.tree.height, 21);
        assert_eq!(layout.input.row, 22);
        assert_eq!(layout.status.row, 23);
        Ok(())
    }

    #[test]
    fn test_split_too_small() {
        let res = Layout::split(Region {
            row: 0,
            col: 0,
            width: 80,
            height: 2,
        });
        assert!(res.is_err());
    }
}
