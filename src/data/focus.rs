use std::cmp;

// Identity of a visible row: the index path from the root and the node key
pub type Id<'a> = (&'a [usize], &'a str);

// Selected row: `ix` is the row index, `path` and `key` identify the node it belongs to.
// After a re-render the focus stays on the row with the same path and key, then on the first
// row with the same key. Otherwise `ix` is clamped.
#[derive(Debug)]
pub struct Focus {
    pub ix: i64,
    pub path: Vec<usize>,
    pub key: Option<String>,
}

impl Focus {
    pub fn new() -> Focus {
        Focus {
            ix: 0,
            path: Vec::new(),
            key: None,
        }
    }

    pub fn update(&mut self, ids: &[Id<'_>]) {
        if let Some(wanted_key) = &self.key {
            let same_node = ids
                .iter()
                .position(|(path, key)| *path == self.path.as_slice() && *key == wanted_key.as_str());
            let same_key = || ids.iter().position(|(_, key)| *key == wanted_key.as_str());
            if let Some(ix) = same_node.or_else(same_key) {
                self.set_(ix, ids);
                return;
            }
        }

        self.ix = cmp::max(self.ix, 0);

        let max_ix = (ids.len() as i64) - 1;
        self.ix = cmp::min(self.ix, max_ix);

        if self.ix < 0 {
            self.path.clear();
            self.key = None;
        } else {
            self.set_(self.ix as usize, ids);
        }
    }

    // Moves `delta` rows, the node is resolved again during the next `update()`
    pub fn step(&mut self, delta: i64) {
        self.ix = self.ix.saturating_add(delta);
        self.key = None;
    }

    pub fn top(&mut self) {
        self.ix = 0;
        self.key = None;
    }

    pub fn bottom(&mut self) {
        self.ix = i64::MAX;
        self.key = None;
    }

    pub fn row(&self) -> Option<usize> {
        (self.ix >= 0 && self.key.is_some()).then_some(self.ix as usize)
    }

    fn set_(&mut self, ix: usize, ids: &[Id<'_>]) {
        let (path, key) = ids[ix];
        self.ix = ix as i64;
        self.path = path.to_vec();
        self.key = Some(key.to_owned());
    }
}

impl Default for Focus {
    fn default() -> Focus {
        Focus::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC: [Id<'static>; 3] = [(&[0], "a"), (&[1], "b"), (&[2], "c")];

    #[test]
    fn test_follow_key() {
        let mut focus = Focus::new();
        focus.update(&ABC);
        assert_eq!(focus.key.as_deref(), Some("a"));

        focus.step(2);
        focus.update(&ABC);
        assert_eq!(focus.key.as_deref(), Some("c"));
        assert_eq!(focus.path, vec![2]);

        // "c" moved up after "a" was removed
        let bc: [Id<'static>; 2] = [(&[0], "b"), (&[1], "c")];
        focus.update(&bc);
        assert_eq!(focus.ix, 1);
        assert_eq!(focus.row(), Some(1));
        assert_eq!(focus.path, vec![1]);
    }

    #[test]
    fn test_follow_path_for_duplicate_keys() {
        let ids: [Id<'static>; 3] = [(&[0], "0"), (&[0, 0], "0-1"), (&[0, 1], "0-1")];
        let mut focus = Focus::new();
        focus.step(2);
        focus.update(&ids);
        assert_eq!(focus.path, vec![0, 1]);

        focus.update(&ids);
        assert_eq!(focus.ix, 2);

        // The path is gone, the first row with the key takes over
        let single: [Id<'static>; 2] = [(&[0], "0"), (&[0, 0], "0-1")];
        focus.update(&single);
        assert_eq!(focus.ix, 1);
        assert_eq!(focus.path, vec![0, 0]);
    }

    #[test]
    fn test_clamp() {
        let ids: [Id<'static>; 2] = [(&[0], "a"), (&[1], "b")];
        let mut focus = Focus::new();
        focus.bottom();
        focus.update(&ids);
        assert_eq!(focus.key.as_deref(), Some("b"));

        focus.step(-10);
        focus.update(&ids);
        assert_eq!(focus.key.as_deref(), Some("a"));

        focus.update(&[]);
        assert_eq!(focus.key, None);
        assert!(focus.path.is_empty());
        assert_eq!(focus.row(), None);
    }
}
