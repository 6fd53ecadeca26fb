use crate::data::mutate::{self, Patch};
use crate::data::node::{self, Forest, Node};
use std::rc::Rc;

// Holds the current forest snapshot. Every mutation replaces the snapshot as a whole.
#[derive(Default, Debug)]
pub struct Store {
    forest: Forest,
}

impl Store {
    pub fn new(forest: Forest) -> Store {
        Store { forest }
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    pub fn find(&self, key: &str) -> Option<&Rc<Node>> {
        node::find(&self.forest, key)
    }

    pub fn apply_update(&mut self, key: &str, patch: &Patch) {
        log::debug!("update({key}): {:?}", patch.label);
        self.forest = mutate::update_node(&self.forest, key, patch);
    }

    pub fn apply_remove(&mut self, key: &str) {
        log::debug!("remove({key})");
        self.forest = mutate::remove_node(&self.forest, key);
    }

    // Appends a child with `label` to the first node with `parent_key` and returns its key
    pub fn add_child(&mut self, parent_key: &str, label: impl Into<String>) -> Option<String> {
        let parent = Rc::clone(self.find(parent_key)?);
        Some(self.add_child_to(&parent, label))
    }

    // Appends a child with `label` to `parent` and returns its key.
    // The key and the new children are derived from `parent` itself, the resulting patch is
    // applied to every node with `parent.key`.
    pub fn add_child_to(&mut self, parent: &Node, label: impl Into<String>) -> String {
        let key = format!("{}-{}", parent.key, parent.children.len());
        if self.find(&key).is_some() {
            log::warn!("Key '{key}' is already present in the forest");
        }

        let mut children = parent.children.clone();
        children.push(Node::leaf(key.clone(), label));

        self.apply_update(&parent.key, &Patch::new().children(children));
        key
    }
}
