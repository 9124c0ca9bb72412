//! Expression tree built from a token stream.
//!
//! The tree is an arena: every token becomes exactly one [`Node`], and building
//! only links nodes together by [`NodeId`]. A node id is the index of the token
//! it was created from, so identity is stable and cheap to compare.
//!
//! # Building
//!
//! The builder splits a token range on its loosest-binding connective that is
//! not nested inside parentheses:
//!
//! ```text
//! precedence:  <-> (0)  ->  (1)  || (2)  && (3)  ! (4)
//! ```
//!
//! Ties are resolved towards the rightmost occurrence, which makes binary
//! connectives left-associative: `p -> q -> r` reads as `(p -> q) -> r`.
//! A range with no such connective is either unwrapped (when it starts with `(`
//! and ends with `)`) or resolved to its first token.
//!
//! In [`ParseMode::Lenient`] malformed input never fails: dangling parentheses
//! hide the connectives behind them, missing operands become absent children,
//! and the result is whatever partial tree falls out. [`ParseMode::Strict`]
//! validates the token stream first and reports a [`ParseError`] instead.

use log::{debug, trace};

use crate::config::ParseMode;
use crate::error::ParseError;
use crate::token::{tokenize, tokenize_all, Op, Token, TokenKind};

/// Handle to a node inside an [`ExprTree`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Index of the originating token in the token stream.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Node {
    pub token: Token,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl Node {
    fn new(token: Token) -> Self {
        Self {
            token,
            left: None,
            right: None,
        }
    }

    /// Source text of this node's own token.
    pub fn text(&self) -> &str {
        &self.token.text
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn is_var(&self) -> bool {
        matches!(self.token.kind, TokenKind::Var(_))
    }
}

/// Parsed expression: the source string, the node arena and the root.
#[derive(Debug, Clone)]
pub struct ExprTree {
    source: String,
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl ExprTree {
    /// Parses `source` in lenient mode. Never fails.
    pub fn parse(source: &str) -> Self {
        Self::from_tokens(source, tokenize(source), ParseMode::Lenient)
    }

    /// Parses `source` in the given mode.
    ///
    /// Lenient mode always returns `Ok`.
    pub fn parse_with(source: &str, mode: ParseMode) -> Result<Self, ParseError> {
        match mode {
            ParseMode::Lenient => Ok(Self::parse(source)),
            ParseMode::Strict => {
                let (tokens, skipped) = tokenize_all(source);
                if let Some(s) = skipped.first() {
                    return Err(ParseError::UnrecognizedChar {
                        ch: s.ch,
                        position: s.position,
                    });
                }
                validate(&tokens)?;
                Ok(Self::from_tokens(source, tokens, ParseMode::Strict))
            }
        }
    }

    /// Builds the tree over an already tokenized source.
    pub fn from_tokens(source: &str, tokens: Vec<Token>, mode: ParseMode) -> Self {
        let mut nodes: Vec<Node> = tokens.into_iter().map(Node::new).collect();
        let len = nodes.len();
        let root = Builder {
            nodes: &mut nodes,
            mode,
        }
        .build(0, len);
        debug!("parsed {:?} into {} nodes, root = {:?}", source, len, root);
        Self {
            source: source.to_string(),
            nodes,
            root,
        }
    }

    /// The expression text as given.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// All nodes in token order, including those not reachable from the root.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Fully parenthesized rendering of the tree, e.g. `(p || (q && r))`.
    ///
    /// Absent children are shown as `_`.
    pub fn to_bracket_string(&self) -> String {
        let mut out = String::new();
        self.write_bracket(self.root, &mut out);
        out
    }

    fn write_bracket(&self, id: Option<NodeId>, out: &mut String) {
        let Some(id) = id else {
            out.push('_');
            return;
        };
        let node = self.node(id);
        match node.token.op() {
            Some(Op::Not) => {
                out.push('!');
                self.write_bracket(node.right, out);
            }
            Some(_) => {
                out.push('(');
                self.write_bracket(node.left, out);
                out.push(' ');
                out.push_str(node.text());
                out.push(' ');
                self.write_bracket(node.right, out);
                out.push(')');
            }
            None => out.push_str(node.text()),
        }
    }
}

struct Builder<'a> {
    nodes: &'a mut [Node],
    mode: ParseMode,
}

impl Builder<'_> {
    /// Builds the subtree over the half-open token range `start..end`.
    fn build(&mut self, start: usize, end: usize) -> Option<NodeId> {
        if start >= end {
            return None;
        }
        if end - start == 1 {
            return Some(NodeId(start));
        }

        let Some((i, op)) = self.split_point(start, end) else {
            let wrapped = self.nodes[start].token.kind == TokenKind::LParen
                && self.nodes[end - 1].token.kind == TokenKind::RParen;
            if wrapped {
                return self.build(start + 1, end - 1);
            }
            trace!("no split in {}..{}, falling back to '{}'", start, end, self.nodes[start].text());
            return Some(NodeId(start));
        };

        trace!("split {}..{} at {} on '{}'", start, end, i, self.nodes[i].text());
        if op.is_unary() {
            self.nodes[i].right = self.build(i + 1, end);
        } else {
            self.nodes[i].left = self.build(start, i);
            self.nodes[i].right = self.build(i + 1, end);
        }
        Some(NodeId(i))
    }

    /// Finds the loosest-binding connective at parenthesis depth zero.
    fn split_point(&self, start: usize, end: usize) -> Option<(usize, Op)> {
        let mut balance = 0i32;
        let mut best: Option<(usize, Op)> = None;
        for i in start..end {
            match self.nodes[i].token.kind {
                TokenKind::LParen => balance += 1,
                TokenKind::RParen => balance -= 1,
                TokenKind::Op(op) if balance == 0 => {
                    let replace = match best {
                        None => true,
                        Some((_, cur)) if op.precedence() < cur.precedence() => true,
                        // Strict mode keeps the leftmost `!` so that `!!p` nests.
                        Some((_, cur)) if op.precedence() == cur.precedence() => {
                            !(op.is_unary() && self.mode == ParseMode::Strict)
                        }
                        Some(_) => false,
                    };
                    if replace {
                        best = Some((i, op));
                    }
                }
                _ => {}
            }
        }
        best
    }
}

/// Checks that `tokens` form a well-formed expression.
fn validate(tokens: &[Token]) -> Result<(), ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut open: Vec<usize> = Vec::new();
    let mut expect_operand = true;
    for token in tokens {
        match (expect_operand, token.kind) {
            (true, TokenKind::Var(_)) => expect_operand = false,
            (true, TokenKind::Op(Op::Not)) => {}
            (true, TokenKind::LParen) => open.push(token.position),
            (true, _) => {
                return Err(ParseError::ExpectedOperand {
                    found: token.text.clone(),
                    position: token.position,
                })
            }
            (false, TokenKind::Op(op)) if !op.is_unary() => expect_operand = true,
            (false, TokenKind::RParen) => {
                if open.pop().is_none() {
                    return Err(ParseError::UnmatchedParen(token.position));
                }
            }
            (false, _) => {
                return Err(ParseError::ExpectedOperator {
                    found: token.text.clone(),
                    position: token.position,
                })
            }
        }
    }

    if expect_operand {
        return Err(ParseError::UnexpectedEnd);
    }
    if let Some(position) = open.pop() {
        return Err(ParseError::UnclosedParen(position));
    }
    Ok(())
}
