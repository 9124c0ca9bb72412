use std::io::{self, Write};

use clap::Parser;
use color_eyre::Result;
use log::LevelFilter;

use truthtable_rs::config::{Config, ParseMode};
use truthtable_rs::session::Session;

#[derive(Debug, Parser)]
#[command(author, version, about = "Truth tables for propositional logic expressions")]
struct Cli {
    /// Expressions to tabulate. Starts an interactive session when omitted.
    #[arg(value_name = "EXPR")]
    expressions: Vec<String>,

    /// Reject malformed expressions instead of rendering a best-effort table.
    #[arg(long)]
    strict: bool,

    /// Largest number of distinct variables to tabulate.
    #[arg(long, value_name = "INT", default_value_t = Config::DEFAULT_MAX_VARIABLES)]
    max_vars: usize,

    /// Glyph for true cells.
    #[arg(long, value_name = "CHAR", default_value_t = 'V')]
    true_glyph: char,

    /// Glyph for false cells.
    #[arg(long, value_name = "CHAR", default_value_t = 'F')]
    false_glyph: char,

    /// Print how many rows satisfy the expression.
    #[arg(long)]
    summary: bool,

    /// Log level.
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: LevelFilter,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            mode: if self.strict { ParseMode::Strict } else { ParseMode::Lenient },
            max_variables: self.max_vars,
            true_glyph: self.true_glyph,
            false_glyph: self.false_glyph,
            summary: self.summary,
            ..Config::default()
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    log::debug!("args = {:?}", args);

    let config = args.config();

    if args.expressions.is_empty() {
        let stdin = io::stdin();
        let session = Session::new(config);
        session.run(stdin.lock(), &mut io::stdout(), &mut io::stderr())?;
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    for (i, expr) in args.expressions.iter().enumerate() {
        if i > 0 {
            writeln!(stdout)?;
        }
        let text = truthtable_rs::render(expr, &config)?;
        stdout.write_all(text.as_bytes())?;
    }

    Ok(())
}
