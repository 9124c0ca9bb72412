//! # truthtable-rs: truth tables for propositional logic
//!
//! **`truthtable-rs`** parses propositional expressions and prints their truth
//! tables, with one column per variable, one per intermediate sub-expression,
//! and one for the whole expression.
//!
//! ## Syntax
//!
//! | Connective     | Spelling   | Precedence (lower binds looser) |
//! |----------------|------------|---------------------------------|
//! | biconditional  | `<->`      | 0                               |
//! | implication    | `->`       | 1                               |
//! | disjunction    | `\|\|`     | 2                               |
//! | conjunction    | `&&`       | 3                               |
//! | negation       | `!`        | 4                               |
//!
//! Variables are single ASCII letters. Binary connectives group to the left,
//! and parentheses override precedence. Any other character is ignored.
//!
//! ## Basic Usage
//!
//! ```rust
//! use truthtable_rs::config::Config;
//!
//! let text = truthtable_rs::render("p -> q", &Config::default()).unwrap();
//! assert_eq!(
//!     text,
//!     " p | q | p -> q\n\
//!      ---------------\n \
//!      V | V |      V\n \
//!      V | F |      F\n \
//!      F | V |      V\n \
//!      F | F |      V\n"
//! );
//! ```
//!
//! ## Pipeline
//!
//! - **[`token`]**: source text to tokens.
//! - **[`tree`]**: tokens to an [`ExprTree`][crate::tree::ExprTree], lenient or strict.
//! - **[`eval`]**: evaluation under an [`Assignment`][crate::eval::Assignment].
//! - **[`columns`]**: variables and intermediate columns of a tree.
//! - **[`table`]**: the evaluated [`TruthTable`][crate::table::TruthTable] and its text form.
//! - **[`session`]**: the interactive loop used by the `truthtable` binary.

pub mod columns;
pub mod config;
pub mod error;
pub mod eval;
pub mod session;
pub mod table;
pub mod token;
pub mod tree;

use crate::config::Config;
use crate::error::Result;
use crate::table::TruthTable;
use crate::tree::ExprTree;

/// Parses `source` and renders its truth table.
///
/// An expression without any recognized token renders as an empty string.
pub fn render(source: &str, config: &Config) -> Result<String> {
    let tree = ExprTree::parse_with(source, config.mode)?;
    match TruthTable::new(&tree, config.max_variables)? {
        Some(table) => Ok(table.render(config)?),
        None => Ok(String::new()),
    }
}
