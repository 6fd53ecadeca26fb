pub use crate::data::focus::Focus;
pub use crate::data::mutate::{remove_node, update_node, Patch};
pub use crate::data::node::{Forest, Node, Nodes};
pub use crate::data::store::Store;

pub mod focus;
pub mod mutate;
pub mod node;
pub mod seed;
pub mod status;
mod store;
pub mod ui;
