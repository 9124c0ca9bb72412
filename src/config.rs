/// How the tree builder treats malformed input.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ParseMode {
    /// Best-effort: malformed input degrades to a partial tree, never an error.
    #[default]
    Lenient,
    /// Validate the token stream first and report a [`ParseError`][crate::error::ParseError].
    Strict,
}

/// Runtime options for parsing, rendering and the interactive session.
///
/// # Examples
///
/// ```
/// use truthtable_rs::config::{Config, ParseMode};
///
/// let config = Config {
///     mode: ParseMode::Strict,
///     true_glyph: 'T',
///     ..Config::default()
/// };
/// let text = truthtable_rs::render("p && q", &config).unwrap();
/// assert!(text.contains(" T | T |      T\n"));
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Parsing mode (default: lenient).
    pub mode: ParseMode,
    /// Largest number of distinct variables accepted (default: 16).
    pub max_variables: usize,
    /// Glyph for a true cell (default: `V`).
    pub true_glyph: char,
    /// Glyph for a false cell (default: `F`).
    pub false_glyph: char,
    /// Whether to print the satisfiability summary after the rows (default: false).
    pub summary: bool,
    /// Lines that end the interactive session.
    pub exit_keywords: Vec<String>,
    /// Prompt printed before each interactive line.
    pub prompt: String,
}

impl Config {
    pub const DEFAULT_MAX_VARIABLES: usize = 16;

    pub fn glyph(&self, value: bool) -> char {
        if value {
            self.true_glyph
        } else {
            self.false_glyph
        }
    }

    pub fn is_exit_keyword(&self, line: &str) -> bool {
        self.exit_keywords.iter().any(|k| k == line)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: ParseMode::Lenient,
            max_variables: Self::DEFAULT_MAX_VARIABLES,
            true_glyph: 'V',
            false_glyph: 'F',
            summary: false,
            exit_keywords: ["exit", "quit", "sair", "x"].map(String::from).to_vec(),
            prompt: "~~> ".to_string(),
        }
    }
}
