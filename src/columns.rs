//! Table columns: the variables and the intermediate sub-expressions.

use std::collections::{BTreeSet, HashSet};

use log::debug;

use crate::tree::{ExprTree, NodeId};

/// An intermediate column of the truth table.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Column {
    /// Header text, e.g. `(q && r)` or `!p`.
    pub label: String,
    /// Node whose value fills the column.
    pub node: NodeId,
}

impl ExprTree {
    /// Distinct variables of the expression, in alphabetical order.
    ///
    /// Every token counts, including ones a malformed parse left out of the tree.
    pub fn variables(&self) -> Vec<char> {
        let vars: BTreeSet<char> = self.nodes().iter().filter_map(|n| n.token.var()).collect();
        vars.into_iter().collect()
    }

    /// Intermediate columns in post-order: one per reachable node that is
    /// neither the root nor a variable, each node visited once.
    ///
    /// Labels are shallow: a binary node `op` over children `l` and `r` is
    /// labeled `(l op r)` using the children's own token text, so `p || q && r`
    /// yields a single column `(q && r)`.
    pub fn columns(&self) -> Vec<Column> {
        let mut seen = HashSet::new();
        let mut columns = Vec::new();
        if let Some(root) = self.root() {
            self.collect_columns(root, &mut seen, &mut columns);
        }
        debug!("columns of {:?}: {:?}", self.source(), columns.iter().map(|c| &c.label).collect::<Vec<_>>());
        columns
    }

    fn collect_columns(&self, id: NodeId, seen: &mut HashSet<NodeId>, columns: &mut Vec<Column>) {
        if !seen.insert(id) {
            return;
        }
        let node = self.node(id);
        if let Some(left) = node.left {
            self.collect_columns(left, seen, columns);
        }
        if let Some(right) = node.right {
            self.collect_columns(right, seen, columns);
        }
        if node.is_var() || Some(id) == self.root() {
            return;
        }
        columns.push(Column {
            label: self.label(id),
            node: id,
        });
    }

    /// Shallow one-level label of a node.
    pub fn label(&self, id: NodeId) -> String {
        let node = self.node(id);
        if node.is_leaf() {
            return node.text().to_string();
        }
        match (node.left, node.right) {
            (Some(l), Some(r)) => format!("({} {} {})", self.node(l).text(), node.text(), self.node(r).text()),
            (_, Some(r)) => format!("{}{}", node.text(), self.node(r).text()),
            _ => node.text().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn labels(source: &str) -> Vec<String> {
        ExprTree::parse(source).columns().into_iter().map(|c| c.label).collect()
    }

    #[test]
    fn test_variables_sorted_distinct() {
        assert_eq!(ExprTree::parse("q && p || q").variables(), ['p', 'q']);
        assert_eq!(ExprTree::parse("z -> a").variables(), ['a', 'z']);
        assert!(ExprTree::parse("!").variables().is_empty());
    }

    #[test]
    fn test_variables_include_unreachable_tokens() {
        // `q` is hidden behind the stray `)` and never reaches the tree.
        let tree = ExprTree::parse("p) && q");
        assert_eq!(tree.to_bracket_string(), "p");
        assert_eq!(tree.variables(), ['p', 'q']);
    }

    #[test]
    fn test_columns_exclude_root_and_leaves() {
        assert!(labels("p").is_empty());
        assert!(labels("p && q").is_empty());
        assert!(labels("!p").is_empty());
    }

    #[test]
    fn test_columns_post_order() {
        assert_eq!(labels("p || q && r"), ["(q && r)"]);
        assert_eq!(labels("!p && (q -> r)"), ["!p", "(q -> r)"]);
        assert_eq!(labels("(a && b) || (c && d) -> e"), ["(a && b)", "(c && d)", "(&& || &&)"]);
    }

    #[test]
    fn test_columns_shallow_labels() {
        assert_eq!(labels("!!p && q"), ["!p"]);
        assert_eq!(labels("!(p || q) && r"), ["(p || q)", "!||"]);
    }

    #[test]
    fn test_columns_textually_equal_nodes_are_distinct() {
        let tree = ExprTree::parse("(p && q) || (p && q)");
        let columns = tree.columns();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].label, columns[1].label);
        assert_ne!(columns[0].node, columns[1].node);
    }

    #[test]
    fn test_columns_malformed() {
        // `p && (q || r` resolves the right side to a bare `(` leaf.
        assert_eq!(labels("p && (q || r"), ["("]);
        assert_eq!(labels("(p &&) || q"), ["&&"]);
    }
}
