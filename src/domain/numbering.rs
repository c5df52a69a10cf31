//! Hierarchical numbering (`1`, `1.2`, `1.2.3`) of tree nodes.

use generational_arena::Index;
use tracing::instrument;

use crate::domain::arena::DependencyTree;

/// Assigns every coordinate node its dot-separated sibling path.
///
/// Top-level nodes get `1`, `2`, ...; a child gets its parent's numbering
/// plus `.` and its 1-based position among siblings. Walks with an explicit
/// stack, so arbitrarily deep reports cannot overflow the call stack.
#[instrument(level = "debug", skip(tree))]
pub fn assign_numbering(tree: &mut DependencyTree) {
    let mut stack: Vec<(Index, String)> = vec![(tree.root(), String::new())];

    while let Some((idx, prefix)) = stack.pop() {
        let children = match tree.get_node(idx) {
            Some(node) => node.children.clone(),
            None => continue,
        };

        for (position, child) in children.into_iter().enumerate() {
            let numbering = if prefix.is_empty() {
                (position + 1).to_string()
            } else {
                format!("{}.{}", prefix, position + 1)
            };
            if let Some(node) = tree.get_node_mut(child) {
                node.numbering.clone_from(&numbering);
            }
            stack.push((child, numbering));
        }
    }
}
