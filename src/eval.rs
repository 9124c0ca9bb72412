use std::collections::HashMap;

use crate::token::{Op, TokenKind};
use crate::tree::{ExprTree, Node, NodeId};

/// Truth values of variables, one table row.
///
/// Variables missing from the assignment read as `false`.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Assignment {
    values: HashMap<char, bool>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assignment for row `bits` of a table over `vars`.
    ///
    /// The first variable takes the most significant bit.
    pub fn from_bits(vars: &[char], bits: u64) -> Self {
        let k = vars.len();
        let mut assignment = Self::new();
        for (j, &v) in vars.iter().enumerate() {
            assignment.set(v, (bits >> (k - j - 1)) & 1 == 1);
        }
        assignment
    }

    pub fn set(&mut self, var: char, value: bool) {
        self.values.insert(var, value);
    }

    pub fn get(&self, var: char) -> Option<bool> {
        self.values.get(&var).copied()
    }
}

impl FromIterator<(char, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (char, bool)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl ExprTree {
    /// Evaluates the whole expression.
    pub fn eval(&self, assignment: &Assignment) -> bool {
        self.eval_node(self.root(), assignment)
    }

    /// Evaluates the subtree rooted at `node`.
    ///
    /// An absent node, an unassigned variable and a leftover parenthesis all
    /// evaluate to `false`.
    pub fn eval_node(&self, node: Option<NodeId>, assignment: &Assignment) -> bool {
        let Some(id) = node else {
            return false;
        };
        let node = self.node(id);
        match node.token.kind {
            TokenKind::Op(Op::Not) => !self.eval_node(node.right, assignment),
            TokenKind::Op(Op::And) => {
                let (left, right) = self.eval_children(node, assignment);
                left && right
            }
            TokenKind::Op(Op::Or) => {
                let (left, right) = self.eval_children(node, assignment);
                left || right
            }
            TokenKind::Op(Op::Implies) => {
                let (left, right) = self.eval_children(node, assignment);
                !left || right
            }
            TokenKind::Op(Op::Iff) => {
                let (left, right) = self.eval_children(node, assignment);
                left == right
            }
            TokenKind::Var(v) => assignment.get(v).unwrap_or(false),
            TokenKind::LParen | TokenKind::RParen => false,
        }
    }

    fn eval_children(&self, node: &Node, assignment: &Assignment) -> (bool, bool) {
        (self.eval_node(node.left, assignment), self.eval_node(node.right, assignment))
    }
}
