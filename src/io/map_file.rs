//! Line-oriented map description parser.
//!
//! A map file describes one board with four entities, one per line:
//!
//! ```text
//! size(6,6)
//! agent(1,1)
//! obstacles((2,2),(1,3),(4,3),(2,4),(3,5))
//! target(5,5)
//! ```
//!
//! Coordinate pairs are 1-indexed (row, column) and converted to the
//! 0-indexed [`Cell`] space on load. Keywords are matched
//! case-insensitively; blank lines are skipped and unrecognized lines
//! are logged and ignored. The engines only ever see the four parsed
//! values; the file format stays on this side of the boundary.

use crate::core::{Cell, Grid};
use crate::error::{Error, Result};
use std::collections::HashSet;
use std::path::Path;
use tracing::warn;

/// A parsed map description: everything the search engines consume.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapDescription {
    /// Side length of the square board.
    pub size: usize,
    /// Agent start cell.
    pub start: Cell,
    /// Target cell.
    pub goal: Cell,
    /// Obstacle cells.
    pub obstacles: HashSet<Cell>,
}

impl MapDescription {
    /// Load and parse a map description file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse a map description from text.
    ///
    /// `size`, `agent`, and `target` are required; a missing one is
    /// [`Error::MissingEntity`]. If an entity repeats, the last line wins.
    pub fn parse(text: &str) -> Result<Self> {
        let mut size: Option<usize> = None;
        let mut start: Option<Cell> = None;
        let mut goal: Option<Cell> = None;
        let mut obstacles: HashSet<Cell> = HashSet::new();

        for (number, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let keyword = line
                .split('(')
                .next()
                .unwrap_or("")
                .trim()
                .to_ascii_lowercase();

            match keyword.as_str() {
                "size" => {
                    let (rows, cols) = single_pair(line, number)?;
                    if rows != cols {
                        return Err(Error::MapFormat(format!(
                            "line {}: board must be square, got size({},{})",
                            number + 1,
                            rows,
                            cols
                        )));
                    }
                    size = Some(rows);
                }
                "agent" => {
                    let pair = single_pair(line, number)?;
                    start = Some(to_cell(pair, number)?);
                }
                "target" => {
                    let pair = single_pair(line, number)?;
                    goal = Some(to_cell(pair, number)?);
                }
                "obstacles" => {
                    for pair in coordinate_pairs(line) {
                        obstacles.insert(to_cell(pair, number)?);
                    }
                }
                _ => {
                    warn!("map line {} not recognized: {:?}", number + 1, line);
                }
            }
        }

        Ok(Self {
            size: size.ok_or(Error::MissingEntity("size"))?,
            start: start.ok_or(Error::MissingEntity("agent"))?,
            goal: goal.ok_or(Error::MissingEntity("target"))?,
            obstacles,
        })
    }

    /// Build the grid this description defines.
    pub fn grid(&self) -> Grid {
        Grid::new(self.size, self.obstacles.clone())
    }
}

/// Convert a 1-indexed (row, col) pair to a 0-indexed cell.
fn to_cell((row, col): (usize, usize), line: usize) -> Result<Cell> {
    if row == 0 || col == 0 {
        return Err(Error::MapFormat(format!(
            "line {}: coordinates are 1-indexed, got ({},{})",
            line + 1,
            row,
            col
        )));
    }
    Ok(Cell::new(row - 1, col - 1))
}

/// Expect exactly one coordinate pair on the line.
fn single_pair(line: &str, number: usize) -> Result<(usize, usize)> {
    let pairs = coordinate_pairs(line);
    match pairs.as_slice() {
        [pair] => Ok(*pair),
        [] => Err(Error::MapFormat(format!(
            "line {}: expected a coordinate pair like (3,4)",
            number + 1
        ))),
        _ => Err(Error::MapFormat(format!(
            "line {}: expected exactly one coordinate pair",
            number + 1
        ))),
    }
}

/// Scan every `(number, number)` group out of a line.
///
/// The outer `obstacles( ... )` wrapper is skipped naturally because its
/// opening paren is followed by another paren, not a digit.
fn coordinate_pairs(line: &str) -> Vec<(usize, usize)> {
    let bytes = line.as_bytes();
    let mut pairs = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'(' {
            if let Some((pair, next)) = parse_pair(bytes, i + 1) {
                pairs.push(pair);
                i = next;
                continue;
            }
        }
        i += 1;
    }

    pairs
}

/// Parse `number , number )` starting at `i`, tolerating spaces.
fn parse_pair(bytes: &[u8], i: usize) -> Option<((usize, usize), usize)> {
    let i = skip_spaces(bytes, i);
    let (first, i) = number(bytes, i)?;
    let i = skip_spaces(bytes, i);
    if bytes.get(i) != Some(&b',') {
        return None;
    }
    let i = skip_spaces(bytes, i + 1);
    let (second, i) = number(bytes, i)?;
    let i = skip_spaces(bytes, i);
    if bytes.get(i) != Some(&b')') {
        return None;
    }
    Some(((first, second), i + 1))
}

fn skip_spaces(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i] == b' ' {
        i += 1;
    }
    i
}

fn number(bytes: &[u8], start: usize) -> Option<(usize, usize)> {
    let mut i = start;
    let mut value: usize = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        value = value.checked_mul(10)?.checked_add((bytes[i] - b'0') as usize)?;
        i += 1;
    }
    if i == start {
        None
    } else {
        Some((value, i))
    }
}
