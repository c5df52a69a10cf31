use generational_arena::{Arena, Index};
use tracing::instrument;

/// Depth of the synthetic root every project tree hangs from.
pub const ROOT_DEPTH: i32 = -1;

const ROOT_NAME: &str = "root";

/// One dependency coordinate occurrence in the tree.
#[derive(Debug)]
pub struct TreeNode {
    /// Raw coordinate, e.g. `group:artifact:type:version:scope`
    pub name: String,
    /// Indentation depth, `ROOT_DEPTH` for the synthetic root
    pub depth: i32,
    /// Hierarchical index such as `2.1.3`, empty until numbered
    pub numbering: String,
    /// Index of parent node in the arena, None for the synthetic root
    pub parent: Option<Index>,
    /// Indices of child nodes in source order
    pub children: Vec<Index>,
}

impl TreeNode {
    pub fn is_root(&self) -> bool {
        self.depth == ROOT_DEPTH
    }
}

/// Arena-based dependency tree for one project.
///
/// The root is always a synthetic node at `ROOT_DEPTH`; top-level
/// coordinates are its children.
#[derive(Debug)]
pub struct DependencyTree {
    arena: Arena<TreeNode>,
    root: Index,
}

impl Default for DependencyTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyTree {
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(TreeNode {
            name: ROOT_NAME.to_string(),
            depth: ROOT_DEPTH,
            numbering: String::new(),
            parent: None,
            children: Vec::new(),
        });
        Self { arena, root }
    }

    /// Appends a node as the last child of `parent`.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, name: &str, depth: i32, parent: Index) -> Index {
        let node = TreeNode {
            name: name.to_string(),
            depth,
            numbering: String::new(),
            parent: Some(parent),
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent) = self.arena.get_mut(parent) {
            parent.children.push(node_idx);
        }

        node_idx
    }

    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    pub fn get_node_mut(&mut self, idx: Index) -> Option<&mut TreeNode> {
        self.arena.get_mut(idx)
    }

    pub fn root(&self) -> Index {
        self.root
    }

    /// Top-level coordinates (children of the synthetic root).
    pub fn top_level(&self) -> &[Index] {
        self.arena
            .get(self.root)
            .map(|root| root.children.as_slice())
            .unwrap_or(&[])
    }

    /// Number of coordinate nodes, the synthetic root excluded.
    pub fn len(&self) -> usize {
        self.arena.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Depth-first pre-order walk over coordinate nodes, siblings in source order.
    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self)
    }

    /// Longest root-to-leaf chain of coordinate nodes.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(Index, usize)> = self.top_level().iter().map(|&i| (i, 1)).collect();

        while let Some((idx, level)) = stack.pop() {
            max_depth = max_depth.max(level);
            if let Some(node) = self.get_node(idx) {
                stack.extend(node.children.iter().map(|&child| (child, level + 1)));
            }
        }
        max_depth
    }
}

pub struct TreeIterator<'a> {
    tree: &'a DependencyTree,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(tree: &'a DependencyTree) -> Self {
        // Push in reverse for left-to-right traversal
        let stack = tree.top_level().iter().rev().copied().collect();
        Self { tree, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_new_tree_when_inspecting_then_only_synthetic_root_exists() {
        let tree = DependencyTree::new();

        assert!(tree.is_empty());
        assert_eq!(tree.depth(), 0);
        assert!(tree.get_node(tree.root()).unwrap().is_root());
        assert_eq!(tree.iter().count(), 0);
    }

    #[test]
    fn given_nested_nodes_when_iterating_then_visits_pre_order() {
        let mut tree = DependencyTree::new();
        let root = tree.root();
        let a = tree.insert_node("g:a", 0, root);
        let b = tree.insert_node("g:b", 1, a);
        tree.insert_node("g:c", 2, b);
        tree.insert_node("g:d", 1, a);
        tree.insert_node("g:e", 0, root);

        let names: Vec<&str> = tree.iter().map(|(_, n)| n.name.as_str()).collect();

        assert_eq!(names, vec!["g:a", "g:b", "g:c", "g:d", "g:e"]);
        assert_eq!(tree.len(), 5);
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.top_level().len(), 2);
    }
}
