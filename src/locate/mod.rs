// src/locate/mod.rs

pub mod minimize;
pub mod node;
pub mod path;
pub mod targets;

use ego_tree::NodeId;

use crate::core::Dom;

/// Full pipeline for one target element: raw chain, then the shortest
/// unique rendering (or a positional index when no rendering is unique).
pub fn locate(dom: &Dom, target: NodeId) -> (String, Option<usize>) {
    let chain = path::build_chain(dom, target);
    minimize::minimize(dom, &chain, target)
}
