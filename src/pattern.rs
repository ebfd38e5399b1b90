use crate::error::GridError;
use regex::Regex;
use std::{str::FromStr, sync::OnceLock};

/// Marker for an alive cell in pattern text
pub const ALIVE: char = 'X';
/// Marker for a dead cell in pattern text
pub const DEAD: char = '-';

/// Named seed patterns, in the `X`/`-` alphabet
const PRESETS: &[(&str, &[&str])] = &[
    ("block", &["XX", "XX"]),
    ("blinker", &["XXX"]),
    ("diagonal", &["X--", "-X-", "--X"]),
    ("glider", &["-X-", "--X", "XXX"]),
    ("toad", &["-XXX", "XXX-"]),
    ("beacon", &["XX--", "XX--", "--XX", "--XX"]),
    ("r-pentomino", &["-XX", "XX-", "-X-"]),
];

/// Matches any character outside the two recognized markers
fn invalid_marker() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    CELL.get_or_init(|| Regex::new(r"[^X\-]").expect("valid marker regex"))
}

/// A rectangular seed matrix stamped into a grid once, at initialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Pattern {
    /// Parses rows of `X` (alive) and `-` (dead) markers
    ///
    /// Trailing whitespace on a row is ignored. Every row must be as long as
    /// the first one, and when `max_width` is given, no longer than it.
    pub fn parse_rows<I, S>(lines: I, max_width: Option<usize>) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rows = 0;
        let mut cols = None;
        let mut cells = Vec::new();
        for (i, line) in lines.into_iter().enumerate() {
            let line = line.as_ref().trim_end();
            if let Some(m) = invalid_marker().find(line) {
                return Err(GridError::MalformedInput {
                    line: i + 1,
                    reason: format!(
                        "unexpected character '{}' at column {}, expected '{}' or '{}'",
                        m.as_str(),
                        line[..m.start()].chars().count() + 1,
                        ALIVE,
                        DEAD
                    ),
                });
            }

            // only ASCII markers remain, so byte length equals character count
            if let Some(max) = max_width {
                if line.len() > max {
                    return Err(GridError::MalformedInput {
                        line: i + 1,
                        reason: format!("row is {} cells long, grid width is {}", line.len(), max),
                    });
                }
            }
            let expected = *cols.get_or_insert(line.len());
            if line.len() != expected {
                return Err(GridError::MalformedInput {
                    line: i + 1,
                    reason: format!("row is {} cells long, expected {}", line.len(), expected),
                });
            }
            cells.extend(line.chars().map(|c| c == ALIVE));
            rows += 1;
        }
        Ok(Self {
            rows,
            cols: cols.unwrap_or_default(),
            cells,
        })
    }

    /// Looks up one of the built-in patterns by name
    pub fn preset(name: &str) -> Option<Self> {
        let (_, rows) = PRESETS.iter().find(|(n, _)| n.eq_ignore_ascii_case(name))?;
        Self::parse_rows(rows.iter(), None).ok()
    }

    pub fn preset_names() -> impl Iterator<Item = &'static str> {
        PRESETS.iter().map(|(name, _)| *name)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The cells of a single pattern row
    ///
    /// # Panics
    /// If `row` is out of range.
    #[inline]
    pub fn row(&self, row: usize) -> &[bool] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }
}

impl FromStr for Pattern {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_rows(s.lines(), None)
    }
}
