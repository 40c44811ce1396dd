use crate::io::error::Error;
use crate::model::{Atom, Element, Snapshot};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// Reads an xyz snapshot. The first two lines (atom count and comment) are
/// skipped; every remaining line with at least four whitespace-separated
/// tokens is taken as `<symbol> <x> <y> <z> [...]`. Lines that do not match
/// that shape are ignored, so the parsed sequence may be shorter than the
/// declared count.
pub fn read<R: BufRead>(reader: R) -> Result<Snapshot, Error> {
    let mut atoms = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let content = line.map_err(|e| Error::Io { source: e })?;
        let ln = i + 1;
        if ln <= 2 {
            continue;
        }

        match parse_atom_line(&content) {
            Some(atom) => atoms.push(atom),
            None => {
                if !content.trim().is_empty() {
                    log::debug!("skipping malformed atom record at line {}: {:?}", ln, content);
                }
            }
        }
    }

    Ok(Snapshot::new(atoms))
}

pub fn read_file(path: &Path) -> Result<Snapshot, Error> {
    let file = File::open(path)?;
    read(BufReader::new(file))
}

fn parse_atom_line(line: &str) -> Option<Atom> {
    let mut tokens = line.split_whitespace();
    let symbol = tokens.next()?;
    let x = tokens.next()?.parse::<f64>().ok()?;
    let y = tokens.next()?.parse::<f64>().ok()?;
    let z = tokens.next()?.parse::<f64>().ok()?;

    let element = Element::from_str(symbol).ok()?;
    Some(Atom::new(element, [x, y, z]))
}
