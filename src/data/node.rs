use std::rc::Rc;

pub type Nodes = Vec<Rc<Node>>;

// Ordered sequence of root nodes
pub type Forest = Nodes;

// Nodes are shared between successive forests and never mutated once created
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub key: String,
    pub label: String,
    pub children: Nodes,
}

impl Node {
    pub fn new(key: impl Into<String>, label: impl Into<String>, children: Nodes) -> Rc<Node> {
        Rc::new(Node {
            key: key.into(),
            label: label.into(),
            children,
        })
    }

    pub fn leaf(key: impl Into<String>, label: impl Into<String>) -> Rc<Node> {
        Node::new(key, label, Nodes::new())
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

// Pre-order walk over `nodes`, `cb` receives the depth and the node
pub fn dfs<'a>(nodes: &'a [Rc<Node>], mut cb: impl FnMut(usize, &'a Rc<Node>)) {
    fn rec<'a>(nodes: &'a [Rc<Node>], depth: usize, cb: &mut impl FnMut(usize, &'a Rc<Node>)) {
        for node in nodes {
            cb(depth, node);
            rec(&node.children, depth + 1, cb);
        }
    }
    rec(nodes, 0, &mut cb);
}

pub fn find<'a>(nodes: &'a [Rc<Node>], key: &str) -> Option<&'a Rc<Node>> {
    for node in nodes {
        if node.key == key {
            return Some(node);
        }
        if let Some(found) = find(&node.children, key) {
            return Some(found);
        }
    }
    None
}

// Node reached by following the child indices in `path`
pub fn at_path<'a>(nodes: &'a [Rc<Node>], path: &[usize]) -> Option<&'a Rc<Node>> {
    let (first, rest) = path.split_first()?;
    let node = nodes.get(*first)?;
    if rest.is_empty() {
        Some(node)
    } else {
        at_path(&node.children, rest)
    }
}

pub fn count(nodes: &[Rc<Node>]) -> usize {
    let mut n = 0;
    dfs(nodes, |_, _| n += 1);
    n
}
