//! Saving and loading a generation as comma-separated text.
//!
//! The first line holds the side length `N`. Each following line is
//! `x,y,z,state` with `state` 0 (dead) or 1 (alive), one line per cell.

use std::io::{BufRead, Write};

use super::grid::index_of;
use crate::config::validate_dimension;
use crate::error::{LatticeError, Result};
use crate::state::{try_filled, Lattice, ALIVE, DEAD};

/// Write the current generation of `lattice` to `out`.
pub fn save_board<W: Write>(lattice: &Lattice, mut out: W) -> Result<()> {
    writeln!(out, "{}", lattice.dimension())?;
    let mut result = Ok(());
    lattice.for_each_cell(|c, alive| {
        if result.is_ok() {
            result = writeln!(out, "{},{},{},{}", c.x, c.y, c.z, u8::from(alive));
        }
    });
    result?;
    out.flush()?;
    Ok(())
}

/// Read a board written by [`save_board`]. The lattice starts at generation 0.
pub fn load_board<R: BufRead>(input: R) -> Result<Lattice> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| line.as_ref().map_or(true, |l| !l.trim().is_empty()));

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| LatticeError::parse_board(1, "missing dimension header"))?;
    let header = header?;
    let dimension: usize = header
        .trim()
        .parse()
        .map_err(|_| LatticeError::parse_board(header_line, "dimension is not a number"))?;
    let size = validate_dimension(dimension)?;

    let mut cells = try_filled(size, DEAD)?;
    let mut seen = try_filled(size, false)?;

    for (line_no, line) in lines {
        let line = line?;
        let fields: Vec<&str> = line.trim().split(',').map(str::trim).collect();
        if fields.len() != 4 {
            return Err(LatticeError::parse_board(
                line_no,
                format!("expected 4 fields, found {}", fields.len()),
            ));
        }

        let mut values = [0usize; 4];
        for (slot, field) in values.iter_mut().zip(&fields) {
            *slot = field.parse().map_err(|_| {
                LatticeError::parse_board(line_no, format!("'{}' is not a number", field))
            })?;
        }
        let [x, y, z, state] = values;

        if x >= dimension || y >= dimension || z >= dimension {
            return Err(LatticeError::parse_board(
                line_no,
                format!("cell ({}, {}, {}) is outside the lattice", x, y, z),
            ));
        }
        let cell = match state {
            0 => DEAD,
            1 => ALIVE,
            other => {
                return Err(LatticeError::parse_board(
                    line_no,
                    format!("state {} is neither 0 nor 1", other),
                ))
            }
        };

        let idx = index_of(dimension, x, y, z);
        if seen[idx] {
            return Err(LatticeError::parse_board(
                line_no,
                format!("cell ({}, {}, {}) appears more than once", x, y, z),
            ));
        }
        cells[idx] = cell;
        seen[idx] = true;
    }

    let missing = seen.iter().filter(|&&s| !s).count();
    if missing > 0 {
        return Err(LatticeError::invalid_config(format!(
            "board is missing {} of {} cells",
            missing, size
        )));
    }

    Lattice::with_cells(dimension, cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_save_format() {
        let lattice = Lattice::from_fn(1, |_| true).unwrap();
        let mut out = Vec::new();
        save_board(&lattice, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1\n0,0,0,1\n");
    }

    #[test]
    fn test_save_then_load_preserves_cells() {
        let mut lattice = Lattice::from_fn(5, |c| (c.x + 2 * c.y + 3 * c.z) % 3 == 0).unwrap();
        lattice.step();

        let mut out = Vec::new();
        save_board(&lattice, &mut out).unwrap();
        let loaded = load_board(Cursor::new(out)).unwrap();

        assert_eq!(loaded.dimension(), 5);
        assert_eq!(loaded.generation(), 0);
        assert_eq!(loaded.cells(), lattice.cells());
    }

    #[test]
    fn test_load_accepts_any_line_order() {
        let text = "2\n1,1,1,1\n0,0,0,0\n1,0,0,0\n0,1,0,0\n1,1,0,0\n0,0,1,0\n1,0,1,0\n0,1,1,1\n\n";
        let lattice = load_board(Cursor::new(text)).unwrap();
        assert_eq!(lattice.alive_count(), 2);
        assert!(lattice.is_alive(1, 1, 1));
        assert!(lattice.is_alive(0, 1, 1));
    }

    #[test]
    fn test_load_errors() {
        assert!(matches!(
            load_board(Cursor::new("")),
            Err(LatticeError::ParseBoard { line: 1, .. })
        ));
        assert!(matches!(
            load_board(Cursor::new("two\n")),
            Err(LatticeError::ParseBoard { line: 1, .. })
        ));
        assert!(matches!(
            load_board(Cursor::new("0\n")),
            Err(LatticeError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            load_board(Cursor::new("1\n0,0,1\n")),
            Err(LatticeError::ParseBoard { line: 2, .. })
        ));
        assert!(matches!(
            load_board(Cursor::new("1\n0,0,1,1\n")),
            Err(LatticeError::ParseBoard { line: 2, .. })
        ));
        assert!(matches!(
            load_board(Cursor::new("1\n0,0,0,2\n")),
            Err(LatticeError::ParseBoard { line: 2, .. })
        ));
        assert!(matches!(
            load_board(Cursor::new("2\n0,0,0,1\n")),
            Err(LatticeError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_load_rejects_duplicate_cell() {
        let err = load_board(Cursor::new("1
0,0,0,1
0,0,0,0
")).unwrap_err();
        assert!(matches!(err, LatticeError::ParseBoard { line: 3, .. }));

        // A duplicate fills the slot of a missing cell; still rejected.
        let text = "2
0,0,0,1
1,0,0,0
0,1,0,0
1,1,0,0
0,0,1,0
1,0,1,0
0,1,1,0
0,0,0,1
";
        assert!(matches!(
            load_board(Cursor::new(text)),
            Err(LatticeError::ParseBoard { line: 9, .. })
        ));
    }

    #[test]
    fn test_load_oversized_header_is_an_error() {
        assert!(matches!(
            load_board(Cursor::new("100000\n")),
            Err(LatticeError::InvalidConfiguration(_))
        ));
    }
}
