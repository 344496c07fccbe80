//! Clause-file parser.
//!
//! One clause per line, whitespace-separated signed decimal integers;
//! a negative integer is the negated literal. Lines whose first
//! non-whitespace character is `#` are comments. Blank lines and
//! malformed tokens are syntax errors, as is the literal `0`.

use std::{
    fs::{File, OpenOptions},
    io::{BufRead, BufReader, Read},
    path::Path,
};

prelude!();

/// Knowledge-base clause-file parser.
pub struct Parser<R: Read> {
    reader: BufReader<R>,
    line_buf: String,
    line: usize,
    cnf: Cnf<Lit>,
}

impl Parser<File> {
    pub fn open_file(path: impl AsRef<Path>) -> Res<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .open(path)
            .chain_err(|| format!("while opening file `{}`", path.display()))?;
        Ok(Self::new(file))
    }
}

impl<R: Read> Parser<R> {
    /// Constructor.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_buf: String::with_capacity(80),
            line: 0,
            cnf: Cnf::empty(),
        }
    }

    /// Puts the next line that's not a comment in `line_buf`.
    ///
    /// Returns `false` once EOI is reached.
    fn read_line(&mut self) -> Res<bool> {
        loop {
            self.line_buf.clear();
            let bytes_read = self
                .reader
                .read_line(&mut self.line_buf)
                .chain_err(|| format!("while reading line {}", self.line + 1))?;
            if bytes_read == 0 {
                break Ok(false);
            }
            self.line += 1;
            if self.line_buf.trim_start().starts_with('#') {
                // Comment line, move on.
                continue;
            }
            break Ok(true);
        }
    }

    fn fail(&self, msg: impl Display) -> err::Error {
        format!(
            "syntax error line {}: {} `{}`",
            self.line,
            msg,
            self.line_buf.trim()
        )
        .into()
    }

    /// Parses `line_buf` as one clause and adds it to the knowledge
    /// base.
    fn parse_clause(&mut self) -> Res<()> {
        let mut lits = Vec::with_capacity(7);
        for token in self.line_buf.split_whitespace() {
            let n = token
                .parse::<i64>()
                .map_err(|_| self.fail(format_args!("expected signed integer, got `{}`", token)))?;
            match Lit::of_int(n) {
                Some(lit) => lits.push(lit),
                None => return Err(self.fail("literal `0` has no polarity")),
            }
        }
        if lits.is_empty() {
            return Err(self.fail("blank line, expected a clause"));
        }
        log::trace!("parsed a clause of {} literal(s)", lits.len());
        self.cnf.insert(Clause::new(lits));
        Ok(())
    }

    pub fn parse(mut self) -> Res<Cnf<Lit>> {
        while self.read_line()? {
            self.parse_clause()?;
        }
        log::debug!("parsed {} clause(s) over {} line(s)", self.cnf.len(), self.line);
        Ok(self.cnf)
    }
}
