//! Interactive read-eval-print loop.

use std::io::{BufRead, Write};

use log::{debug, warn};

use crate::config::Config;
use crate::error::Result;

pub const BANNER: &str = "Enter a propositional expression or 'exit' to quit:";
pub const GOODBYE: &str = "Bye.";

/// Line-oriented driver: reads expressions, prints their tables.
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs until an exit keyword or end of input.
    ///
    /// Tables go to `out`; a failing line prints one message to `err` and the
    /// loop carries on with the next line. Only I/O failures on the streams
    /// themselves end the session with an error.
    pub fn run<R, W, E>(&self, mut input: R, out: &mut W, err: &mut E) -> Result<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        writeln!(out, "{}", BANNER)?;
        let mut buf = String::new();
        loop {
            write!(out, "{}", self.config.prompt)?;
            out.flush()?;

            buf.clear();
            if input.read_line(&mut buf)? == 0 {
                debug!("end of input");
                break;
            }
            let line = buf.trim_end_matches(['\n', '\r']);
            if self.config.is_exit_keyword(line.trim()) {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match crate::render(line, &self.config) {
                Ok(text) => out.write_all(text.as_bytes())?,
                Err(e) => {
                    warn!("failed to process {:?}: {}", line, e);
                    writeln!(err, "invalid expression: {}", e)?;
                }
            }
            writeln!(out)?;
        }
        writeln!(out, "{}", GOODBYE)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use std::io;

    use crate::config::ParseMode;
    use crate::error::Error;

    /// Writer whose every write fails.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    const GOODBYE_LINE: &str = "~~> Bye.\n";

    fn run(config: Config, input: &str) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        Session::new(config).run(input.as_bytes(), &mut out, &mut err).unwrap();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_session_renders_and_exits() {
        let (out, err) = run(Config::default(), "p\nexit\nq\n");
        let expected = format!(
            "{BANNER}\n~~>  p | p\n------\n V | V\n F | F\n\n~~> {GOODBYE}\n"
        );
        assert_eq!(out, expected);
        assert!(err.is_empty());
    }

    #[test]
    fn test_session_skips_empty_lines() {
        let (out, _) = run(Config::default(), "\n   \np\n");
        assert_eq!(out.matches("~~> ").count(), 4);
        assert_eq!(out.matches(" p | p\n").count(), 1);
        assert!(out.ends_with(GOODBYE_LINE));
    }

    #[test]
    fn test_session_handles_crlf() {
        let (out, _) = run(Config::default(), "p && q\r\nquit\r\n");
        assert!(out.contains(" p | q | p && q\n"));
        assert!(out.ends_with(GOODBYE_LINE));
    }

    #[test]
    fn test_session_reports_errors_and_continues() {
        let config = Config {
            mode: ParseMode::Strict,
            ..Config::default()
        };
        let (out, err) = run(config, "p &&\np || q\n");
        assert_eq!(err, "invalid expression: unexpected end of expression\n");
        assert!(out.contains(" p | q | p || q\n"));
        assert!(out.ends_with(GOODBYE_LINE));
    }

    #[test]
    fn test_session_too_many_variables() {
        let config = Config {
            max_variables: 1,
            ..Config::default()
        };
        let (_, err) = run(config, "p && q\n");
        assert_eq!(err, "invalid expression: too many variables (2, at most 1 allowed)\n");
    }

    #[test]
    fn test_session_output_failure_is_io_error() {
        let mut err = Vec::new();
        let result = Session::default().run("p\n".as_bytes(), &mut BrokenPipe, &mut err);
        match result {
            Err(Error::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected an I/O error, got {:?}", other),
        }
    }
}
