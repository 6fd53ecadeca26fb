use crate::data::node::{Forest, Node, Nodes};
use crate::{fail, util};
use anyhow::Context;
use serde::Deserialize;
use std::collections;
use std::path;

#[derive(Deserialize, Debug)]
struct SeedFile {
    #[serde(default, rename = "node")]
    nodes: Vec<SeedNode>,
}

#[derive(Deserialize, Debug)]
struct SeedNode {
    key: String,
    label: String,
    #[serde(default)]
    children: Vec<SeedNode>,
}

// Forest used when no seed file is given
pub fn builtin() -> Forest {
    vec![
        Node::new(
            "0",
            "Documents",
            vec![
                Node::new(
                    "0-0",
                    "Work",
                    vec![
                        Node::leaf("0-0-0", "Expenses.doc"),
                        Node::leaf("0-0-1", "Resume.doc"),
                    ],
                ),
                Node::new("0-1", "Home", vec![Node::leaf("0-1-0", "Invoices.txt")]),
            ],
        ),
        Node::new(
            "1",
            "Desktop",
            vec![
                Node::leaf("1-0", "Meeting.pdf"),
                Node::leaf("1-1", "Slides.pptx"),
            ],
        ),
        Node::new("2", "Downloads", vec![Node::leaf("2-0", "Arbor.zip")]),
    ]
}

pub fn from_str(content: &str) -> util::Result<Forest> {
    let seed: SeedFile = toml::from_str(content)?;
    convert_(seed.nodes, "<root>")
}

pub fn from_path(fp: &path::Path) -> util::Result<Forest> {
    let content = std::fs::read_to_string(fp)
        .with_context(|| format!("Could not read seed file '{}'", fp.display()))?;
    let forest = from_str(&content)?;
    log::info!("Loaded seed from '{}'", fp.display());
    Ok(forest)
}

// Sibling keys must be unique when the forest is created
fn convert_(seed_nodes: Vec<SeedNode>, parent: &str) -> util::Result<Nodes> {
    let mut keys = collections::BTreeSet::new();
    let mut nodes = Nodes::with_capacity(seed_nodes.len());
    for seed_node in seed_nodes {
        if !keys.insert(seed_node.key.clone()) {
            fail!("Duplicate key '{}' under '{}'", seed_node.key, parent);
        }
        let children = convert_(seed_node.children, &seed_node.key)?;
        nodes.push(Node::new(seed_node.key, seed_node.label, children));
    }
    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::node;

    #[test]
    fn test_builtin() {
        let forest = builtin();
        assert_eq!(forest.len(), 3);
        assert_eq!(node::count(&forest), 11);
    }

    #[test]
    fn test_from_str() -> util::Result<()> {
        let forest = from_str(
            r#"
[[node]]
key = "0"
label = "Fruit"

[[node.children]]
key = "0-0"
label = "Apple"

[[node.children]]
key = "0-1"
label = "Pear"

[[node]]
key = "1"
label = "Vegetable"
"#,
        )?;
        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].children.len(), 2);
        assert_eq!(forest[0].children[1].label, "Pear");
        assert!(forest[1].children.is_empty());
        Ok(())
    }

    #[test]
    fn test_empty() -> util::Result<()> {
        assert!(from_str("")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_duplicate_siblings() {
        let res = from_str(
            r#"
[[node]]
key = "0"
label = "a"
[[node]]
key = "0"
label = "b"
"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(from_path(path::Path::new("/does/not/exist.toml")).is_err());
    }
}
