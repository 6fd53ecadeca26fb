use crate::data::{node, Node};
use colored::Colorize;
use std::io;
use std::rc::Rc;

// Writes `forest` as an indented outline, one node per line
pub fn write(out: &mut impl io::Write, forest: &[Rc<Node>]) -> io::Result<()> {
    let mut res = Ok(());
    node::dfs(forest, |depth, node| {
        if res.is_ok() {
            res = writeln!(
                out,
                "{}{} {}",
                "  ".repeat(depth),
                node.label.bold(),
                format!("({})", node.key).dimmed()
            );
        }
    });
    res
}
