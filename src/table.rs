//! Truth table construction and rendering.
//!
//! # Layout
//!
//! ```text
//!  p | q | r | (q && r) | p || q && r
//! -----------------------------------
//!  V | V | V |        V |           V
//!  V | V | F |        F |           V
//!  ...
//!  F | F | F |        F |           F
//! ```
//!
//! Variables come first in alphabetical order, then the intermediate columns,
//! then the whole expression. Rows run from all-true down to all-false: row
//! `i` assigns the bits of `2^k - 1 - i` to the variables, most significant
//! bit first. Cells are right-aligned to the width of their header.

use std::fmt::{self, Write};

use log::debug;

use crate::columns::Column;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::eval::Assignment;
use crate::tree::ExprTree;

/// One assignment and the values it produces.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Row {
    /// Variable values, in [`TruthTable::variables`] order.
    pub inputs: Vec<bool>,
    /// Intermediate column values, in [`TruthTable::columns`] order.
    pub columns: Vec<bool>,
    /// Value of the whole expression.
    pub result: bool,
}

/// How many rows satisfy the expression.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Classification {
    Tautology,
    Contradiction,
    Contingent,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Tautology => write!(f, "tautology"),
            Classification::Contradiction => write!(f, "contradiction"),
            Classification::Contingent => write!(f, "contingent"),
        }
    }
}

/// Fully evaluated truth table of an expression.
#[derive(Debug, Clone)]
pub struct TruthTable {
    expression: String,
    variables: Vec<char>,
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl TruthTable {
    /// Evaluates `tree` on every assignment of its variables.
    ///
    /// Returns `Ok(None)` for an expression without tokens, and
    /// [`Error::TooManyVariables`] when the table would exceed `max_variables`.
    pub fn new(tree: &ExprTree, max_variables: usize) -> Result<Option<Self>> {
        if tree.root().is_none() {
            return Ok(None);
        }

        let variables = tree.variables();
        if variables.len() > max_variables || variables.len() >= u64::BITS as usize {
            return Err(Error::TooManyVariables {
                count: variables.len(),
                max: max_variables,
            });
        }
        let columns = tree.columns();

        let total = 1u64 << variables.len();
        let rows = (0..total)
            .rev()
            .map(|bits| {
                let assignment = Assignment::from_bits(&variables, bits);
                Row {
                    inputs: variables.iter().map(|&v| assignment.get(v).unwrap_or(false)).collect(),
                    columns: columns.iter().map(|c| tree.eval_node(Some(c.node), &assignment)).collect(),
                    result: tree.eval(&assignment),
                }
            })
            .collect::<Vec<_>>();
        debug!(
            "table for {:?}: {} variables, {} columns, {} rows",
            tree.source(),
            variables.len(),
            columns.len(),
            rows.len()
        );

        Ok(Some(Self {
            expression: tree.source().to_string(),
            variables,
            columns,
            rows,
        }))
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Total number of columns, the final expression column included.
    pub fn width(&self) -> usize {
        self.variables.len() + self.columns.len() + 1
    }

    /// Number of rows where the expression is true.
    pub fn satisfying_count(&self) -> usize {
        self.rows.iter().filter(|r| r.result).count()
    }

    pub fn classify(&self) -> Classification {
        match self.satisfying_count() {
            0 => Classification::Contradiction,
            n if n == self.rows.len() => Classification::Tautology,
            _ => Classification::Contingent,
        }
    }

    /// Renders the table as text.
    pub fn render(&self, config: &Config) -> Result<String, fmt::Error> {
        let mut out = String::new();
        self.write_to(&mut out, config)?;
        Ok(out)
    }

    /// Writes header, separator, rows and (if enabled) the summary line.
    pub fn write_to<W: Write>(&self, out: &mut W, config: &Config) -> fmt::Result {
        let widths: Vec<usize> = self.columns.iter().map(|c| c.label.chars().count()).collect();
        let expr_width = self.expression.chars().count();

        for v in &self.variables {
            write!(out, " {} |", v)?;
        }
        for c in &self.columns {
            write!(out, " {} |", c.label)?;
        }
        writeln!(out, " {}", self.expression)?;

        let rule = 4 * self.variables.len() + widths.iter().map(|w| w + 3).sum::<usize>() + expr_width + 1;
        writeln!(out, "{}", "-".repeat(rule))?;

        for row in &self.rows {
            for &value in &row.inputs {
                write!(out, " {} |", config.glyph(value))?;
            }
            for (&value, &width) in row.columns.iter().zip(&widths) {
                write!(out, " {:>width$} |", config.glyph(value), width = width)?;
            }
            writeln!(out, " {:>width$}", config.glyph(row.result), width = expr_width)?;
        }

        if config.summary {
            writeln!(
                out,
                "{} of {} rows satisfy the expression ({})",
                self.satisfying_count(),
                self.rows.len(),
                self.classify()
            )?;
        }
        Ok(())
    }
}
