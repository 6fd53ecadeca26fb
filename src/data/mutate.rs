use crate::data::node::{Forest, Node, Nodes};
use std::rc::Rc;

// Shallow set of field overrides for a Node. Fields left at `None` are preserved.
#[derive(Default, Debug, Clone)]
pub struct Patch {
    pub key: Option<String>,
    pub label: Option<String>,
    pub children: Option<Nodes>,
}

impl Patch {
    pub fn new() -> Patch {
        Default::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn children(mut self, children: Nodes) -> Self {
        self.children = Some(children);
        self
    }

    pub fn apply(&self, node: &Node) -> Node {
        Node {
            key: self.key.clone().unwrap_or_else(|| node.key.clone()),
            label: self.label.clone().unwrap_or_else(|| node.label.clone()),
            children: self
                .children
                .clone()
                .unwrap_or_else(|| node.children.clone()),
        }
    }
}

// Replaces every node with `key` by `patch` merged onto it.
// Only the ancestors of a match are rebuilt, all other subtrees are shared with `forest`.
// An unknown `key` leaves the forest as is.
pub fn update_node(forest: &[Rc<Node>], key: &str, patch: &Patch) -> Forest {
    update_nodes_(forest, key, patch).unwrap_or_else(|| forest.to_vec())
}

// Removes every node with `key`. Below the root level, the children of a removed node take
// its place in the parent. Matching roots are dropped together with their children.
pub fn remove_node(forest: &[Rc<Node>], key: &str) -> Forest {
    let mut res = Forest::with_capacity(forest.len());
    for root in forest {
        if root.key == key {
            continue;
        }
        res.push(remove_below_(root, key).unwrap_or_else(|| root.clone()));
    }
    res
}

// Returns `None` when nothing in `nodes` changed
fn update_nodes_(nodes: &[Rc<Node>], key: &str, patch: &Patch) -> Option<Nodes> {
    let mut changed = false;
    let res: Nodes = nodes
        .iter()
        .map(|node| match update_one_(node, key, patch) {
            Some(node) => {
                changed = true;
                node
            }
            None => node.clone(),
        })
        .collect();
    changed.then_some(res)
}

fn update_one_(node: &Rc<Node>, key: &str, patch: &Patch) -> Option<Rc<Node>> {
    if node.key == key {
        return Some(Rc::new(patch.apply(node)));
    }
    let children = update_nodes_(&node.children, key, patch)?;
    Some(rebuild_(node, children))
}

// The promoted children of a removed node are not searched again
fn remove_from_children_(nodes: &[Rc<Node>], key: &str) -> Option<Nodes> {
    let mut changed = false;
    let mut res = Nodes::with_capacity(nodes.len());
    for child in nodes {
        if child.key == key {
            changed = true;
            res.extend(child.children.iter().cloned());
        } else if let Some(child) = remove_below_(child, key) {
            changed = true;
            res.push(child);
        } else {
            res.push(child.clone());
        }
    }
    changed.then_some(res)
}

fn remove_below_(node: &Rc<Node>, key: &str) -> Option<Rc<Node>> {
    let children = remove_from_children_(&node.children, key)?;
    Some(rebuild_(node, children))
}

fn rebuild_(node: &Node, children: Nodes) -> Rc<Node> {
    Rc::new(Node {
        key: node.key.clone(),
        label: node.label.clone(),
        children,
    })
}
