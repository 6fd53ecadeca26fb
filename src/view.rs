use crate::data::{ui, Node};
use std::rc::Rc;

// Everything the render recursion needs, passed down by reference
pub struct Ctx<'a> {
    pub forest: &'a [Rc<Node>],
    pub ui: &'a ui::State,
}

// A single visible node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    // Index path from the root, distinguishes nodes that share a key
    pub path: Vec<usize>,
    pub key: String,
    pub depth: usize,
    pub label: String,
    pub expanded: bool,
    pub has_children: bool,
}

impl Row {
    pub fn toggle(&self) -> &'static str {
        if self.expanded {
            "v"
        } else {
            ">"
        }
    }

    pub fn display(&self) -> String {
        format!(
            "{}{} {}  [x] [+ child]",
            "  ".repeat(self.depth),
            self.toggle(),
            self.label
        )
    }
}

pub fn render(ctx: &Ctx<'_>) -> Vec<Row> {
    let mut rows = Vec::new();
    render_nodes_(ctx, ctx.forest, &mut Vec::new(), &mut rows);
    rows
}

fn render_nodes_(
    ctx: &Ctx<'_>,
    nodes: &[Rc<Node>],
    path: &mut Vec<usize>,
    rows: &mut Vec<Row>,
) {
    let depth = path.len();
    for (ix, node) in nodes.iter().enumerate() {
        path.push(ix);
        let expanded = ctx.ui.is_expanded(&node.key);
        rows.push(Row {
            path: path.clone(),
            key: node.key.clone(),
            depth,
            label: node.label.clone(),
            expanded,
            has_children: node.has_children(),
        });
        if expanded && node.has_children() {
            render_nodes_(ctx, &node.children, path, rows);
        }
        path.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forest() -> Vec<Rc<Node>> {
        vec![
            Node::new(
                "0",
                "a",
                vec![Node::new("0-0", "b", vec![Node::leaf("0-0-0", "c")])],
            ),
            Node::leaf("1", "d"),
        ]
    }

    fn keys(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|row| row.key.as_str()).collect()
    }

    #[test]
    fn test_render_expanded() {
        let forest = forest();
        let ui = ui::State::new();
        let rows = render(&Ctx {
            forest: &forest,
            ui: &ui,
        });
        assert_eq!(keys(&rows), vec!["0", "0-0", "0-0-0", "1"]);
        assert_eq!(rows[2].depth, 2);
        assert_eq!(rows[2].path, vec![0, 0, 0]);
        assert_eq!(rows[3].path, vec![1]);
        assert!(rows[1].has_children);
        assert!(!rows[3].has_children);
    }

    #[test]
    fn test_render_collapsed() {
        let forest = forest();
        let mut ui = ui::State::new();
        ui.set_expanded("0-0", false);
        let rows = render(&Ctx {
            forest: &forest,
            ui: &ui,
        });
        assert_eq!(keys(&rows), vec!["0", "0-0", "1"]);
        assert_eq!(rows[1].toggle(), ">");
        assert_eq!(rows[1].display(), "  > b  [x] [+ child]");
    }

    #[test]
    fn test_render_empty() {
        let ui = ui::State::new();
        let rows = render(&Ctx {
            forest: &[],
            ui: &ui,
        });
        assert!(rows.is_empty());
    }
}
