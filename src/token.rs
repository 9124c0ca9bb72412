//! Tokenizer for propositional expressions.
//!
//! Recognition is longest-match-first: `<->`, then `->`, then `&&` / `||`,
//! then the single-character tokens `!`, `(`, `)` and ASCII letters.
//! Everything else, a lone `|` included, is skipped without a diagnostic. The
//! skipped characters are still collected by [`tokenize_all`], so strict
//! parsing can report them.

use std::fmt;

use log::trace;

/// Logical connective.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Op {
    Not,
    And,
    Or,
    Implies,
    Iff,
}

impl Op {
    /// All connectives, loosest-binding first.
    pub const ALL: [Op; 5] = [Op::Iff, Op::Implies, Op::Or, Op::And, Op::Not];

    /// Binding strength of the connective.
    ///
    /// Lower values bind looser, so the tree builder splits on them first.
    pub const fn precedence(self) -> u8 {
        match self {
            Op::Iff => 0,
            Op::Implies => 1,
            Op::Or => 2,
            Op::And => 3,
            Op::Not => 4,
        }
    }

    pub const fn is_unary(self) -> bool {
        matches!(self, Op::Not)
    }

    /// Canonical spelling of the connective.
    pub const fn symbol(self) -> &'static str {
        match self {
            Op::Not => "!",
            Op::And => "&&",
            Op::Or => "||",
            Op::Implies => "->",
            Op::Iff => "<->",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Lexical class of a token.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    Var(char),
    Op(Op),
    LParen,
    RParen,
}

/// A lexical token: what it is, how it was spelled, and where it started.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Source spelling.
    pub text: String,
    /// Character offset of the first character in the source.
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    pub fn op(&self) -> Option<Op> {
        match self.kind {
            TokenKind::Op(op) => Some(op),
            _ => None,
        }
    }

    pub fn var(&self) -> Option<char> {
        match self.kind {
            TokenKind::Var(c) => Some(c),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A character the tokenizer did not recognize.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Skipped {
    pub position: usize,
    pub ch: char,
}

/// Multi-character tokens, longest first.
const MULTI: [(&str, Op); 4] = [("<->", Op::Iff), ("->", Op::Implies), ("&&", Op::And), ("||", Op::Or)];

/// Splits `source` into tokens, silently dropping unrecognized characters.
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_all(source).0
}

/// Splits `source` into tokens and also returns the unrecognized characters.
pub fn tokenize_all(source: &str) -> (Vec<Token>, Vec<Skipped>) {
    let chars: Vec<char> = source.chars().collect();
    let mut tokens = Vec::new();
    let mut skipped = Vec::new();

    let mut i = 0;
    'outer: while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
            continue;
        }

        for (text, op) in MULTI {
            if starts_with_at(&chars, i, text) {
                tokens.push(Token::new(TokenKind::Op(op), text, i));
                i += text.len();
                continue 'outer;
            }
        }

        let kind = match c {
            '!' => Some(TokenKind::Op(Op::Not)),
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            c if c.is_ascii_alphabetic() => Some(TokenKind::Var(c)),
            _ => None,
        };
        match kind {
            Some(kind) => tokens.push(Token::new(kind, c, i)),
            None => skipped.push(Skipped { position: i, ch: c }),
        }
        i += 1;
    }

    trace!("tokenize({:?}) -> {} tokens, {} skipped", source, tokens.len(), skipped.len());
    (tokens, skipped)
}

// Patterns are ASCII, so byte length equals char count.
fn starts_with_at(chars: &[char], at: usize, pattern: &str) -> bool {
    let n = pattern.len();
    at + n <= chars.len() && chars[at..at + n].iter().copied().eq(pattern.chars())
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn texts(source: &str) -> Vec<String> {
        tokenize(source).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_tokenize_all_connectives() {
        assert_eq!(texts("p <-> q -> r || s && !t"), ["p", "<->", "q", "->", "r", "||", "s", "&&", "!", "t"]);
    }

    #[test]
    fn test_tokenize_longest_match() {
        // `<->` must not be read as `<` followed by `->`
        let tokens = tokenize("a<->b");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].kind, TokenKind::Op(Op::Iff));
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[2].position, 4);
    }

    #[test]
    fn test_tokenize_single_bar_is_skipped() {
        let (tokens, skipped) = tokenize_all("p | q");
        assert_eq!(tokens.iter().map(|t| t.text.as_str()).collect::<Vec<_>>(), ["p", "q"]);
        assert_eq!(skipped, [Skipped { position: 2, ch: '|' }]);

        // `|||` is `||` followed by a stray `|`.
        let (tokens, skipped) = tokenize_all("p ||| q");
        let ops: Vec<_> = tokens.iter().filter_map(|t| t.op()).collect();
        assert_eq!(ops, [Op::Or]);
        assert_eq!(tokens[1].text, "||");
        assert_eq!(skipped, [Skipped { position: 4, ch: '|' }]);
    }

    #[test]
    fn test_tokenize_positions() {
        let tokens = tokenize("  (p && q)");
        let positions: Vec<_> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, [2, 3, 5, 8, 9]);
    }

    #[test]
    fn test_tokenize_skips_unknown() {
        let (tokens, skipped) = tokenize_all("p & 1 -> q?");
        assert_eq!(tokens.iter().map(|t| t.text.as_str()).collect::<Vec<_>>(), ["p", "->", "q"]);
        assert_eq!(
            skipped,
            [
                Skipped { position: 2, ch: '&' },
                Skipped { position: 4, ch: '1' },
                Skipped { position: 10, ch: '?' },
            ]
        );
    }

    #[test]
    fn test_tokenize_non_ascii_offsets() {
        let (tokens, skipped) = tokenize_all("¬p");
        assert_eq!(skipped, [Skipped { position: 0, ch: '¬' }]);
        assert_eq!(tokens[0].var(), Some('p'));
        assert_eq!(tokens[0].position, 1);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t").is_empty());
    }

    #[test]
    fn test_precedence_order() {
        let precs: Vec<_> = Op::ALL.iter().map(|op| op.precedence()).collect();
        assert_eq!(precs, [0, 1, 2, 3, 4]);
        assert!(Op::Not.is_unary());
        assert!(!Op::And.is_unary());
    }
}
