use crate::data::node::{self, Node};
use std::collections;
use std::rc::Rc;

// View state of a single node, never part of the forest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeState {
    pub expanded: bool,
    pub pending: String,
}

impl Default for NodeState {
    fn default() -> NodeState {
        NodeState {
            expanded: true,
            pending: String::new(),
        }
    }
}

type Key__NodeState = collections::HashMap<String, NodeState>;

// Ephemeral per-node state, keyed by node key so it survives re-renders and mutations elsewhere.
// Nodes that share a key share their state.
#[derive(Default, Debug)]
pub struct State {
    key__state: Key__NodeState,
}

impl State {
    pub fn new() -> State {
        Default::default()
    }

    pub fn get(&self, key: &str) -> Option<&NodeState> {
        self.key__state.get(key)
    }

    // Get-or-create
    pub fn goc(&mut self, key: &str) -> &mut NodeState {
        self.key__state.entry(key.to_owned()).or_default()
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.get(key).map_or(true, |state| state.expanded)
    }

    pub fn pending(&self, key: &str) -> &str {
        self.get(key).map_or("", |state| state.pending.as_str())
    }

    pub fn toggle(&mut self, key: &str) {
        let state = self.goc(key);
        state.expanded = !state.expanded;
    }

    pub fn set_expanded(&mut self, key: &str, expanded: bool) {
        self.goc(key).expanded = expanded;
    }

    // Returns the pending text of `key` and resets it to empty
    pub fn take_pending(&mut self, key: &str) -> String {
        self.key__state
            .get_mut(key)
            .map(|state| std::mem::take(&mut state.pending))
            .unwrap_or_default()
    }

    // Drops the state of nodes that are no longer present in `forest`
    pub fn prune(&mut self, forest: &[Rc<Node>]) {
        let mut present = collections::HashSet::new();
        node::dfs(forest, |_, node| {
            present.insert(node.key.as_str());
        });
        let before = self.key__state.len();
        self.key__state
            .retain(|key, _| present.contains(key.as_str()));
        log::debug!("prune: {} -> {} node states", before, self.key__state.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = State::new();
        assert!(state.is_expanded("0"));
        assert_eq!(state.pending("0"), "");
        assert!(state.get("0").is_none());
    }

    #[test]
    fn test_toggle_and_pending() {
        let mut state = State::new();
        state.toggle("0");
        assert!(!state.is_expanded("0"));
        state.toggle("0");
        assert!(state.is_expanded("0"));

        state.goc("1").pending.push_str("hi");
        assert_eq!(state.pending("1"), "hi");
        assert_eq!(state.take_pending("1"), "hi");
        assert_eq!(state.pending("1"), "");
        assert_eq!(state.take_pending("unknown"), "");
    }

    #[test]
    fn test_prune() {
        let forest = vec![Node::new("0", "a", vec![Node::leaf("0-0", "b")])];
        let mut state = State::new();
        state.set_expanded("0-0", false);
        state.set_expanded("gone", false);
        state.prune(&forest);
        assert!(state.get("gone").is_none());
        assert!(!state.is_expanded("0-0"));
        assert!(state.is_expanded("gone"));
    }
}
