//! Clause-file writer, the inverse of [`crate::parse`].

use std::{fs::File, io::Write, path::Path};

prelude!();

/// Writes a knowledge base one clause per line, literals as
/// space-separated signed integers, clauses in canonical order.
///
/// Parsing the output back yields a set-equal knowledge base.
pub fn write_kb<W: Write>(cnf: &Cnf<Lit>, writer: &mut W) -> Res<()> {
    for clause in cnf.to_sorted() {
        for (idx, lit) in clause.iter().enumerate() {
            if idx > 0 {
                write!(writer, " ").chain_err(|| "while writing knowledge base")?
            }
            write!(writer, "{}", lit).chain_err(|| "while writing knowledge base")?
        }
        writeln!(writer).chain_err(|| "while writing knowledge base")?
    }
    Ok(())
}

/// Writes a knowledge base to the file at `path`, created or truncated.
pub fn write_kb_to_file(cnf: &Cnf<Lit>, path: impl AsRef<Path>) -> Res<()> {
    let path = path.as_ref();
    let mut file = File::create(path)
        .chain_err(|| format!("while creating file `{}`", path.display()))?;
    write_kb(cnf, &mut file)
}
