//! Roster loading from semicolon-delimited text.
//!
//! The expected layout is a header line followed by one player per line:
//!
//! ```text
//! name;attack;defense;intensity
//! Alice;4,5;3;5
//! Bob;2.0;4;3
//! ```
//!
//! Both decimal comma and decimal point are accepted. Blank lines are
//! ignored.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use crate::player::Player;

const FIELDS: [&str; 4] = ["name", "attack", "defense", "intensity"];

/// Errors raised while reading a roster.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read roster: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected {} fields, found {found}", FIELDS.len())]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: invalid {field} value {value:?}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: player name is empty")]
    EmptyName { line: usize },
}

/// Reads and parses a roster file.
pub fn load_roster(path: impl AsRef<Path>) -> Result<Vec<Player>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let players = parse_roster(&text)?;
    debug!(path = %path.display(), players = players.len(), "roster loaded");
    Ok(players)
}

/// Parses roster text. The first line is treated as a header and skipped.
pub fn parse_roster(text: &str) -> Result<Vec<Player>, LoadError> {
    let mut players = Vec::new();

    for (index, raw) in text.lines().enumerate().skip(1) {
        let line = index + 1;
        if raw.trim().is_empty() {
            warn!(line, "skipping blank roster line");
            continue;
        }
        players.push(parse_line(raw, line)?);
    }

    Ok(players)
}

fn parse_line(raw: &str, line: usize) -> Result<Player, LoadError> {
    let fields: Vec<&str> = raw.split(';').map(str::trim).collect();
    if fields.len() != FIELDS.len() {
        return Err(LoadError::FieldCount {
            line,
            found: fields.len(),
        });
    }

    let name = fields[0];
    if name.is_empty() {
        return Err(LoadError::EmptyName { line });
    }

    let attack = parse_number(fields[1], line, FIELDS[1])?;
    let defense = parse_number(fields[2], line, FIELDS[2])?;
    let intensity = parse_number(fields[3], line, FIELDS[3])?;

    Ok(Player::new(name, attack, defense, intensity))
}

fn parse_number(value: &str, line: usize, field: &'static str) -> Result<f64, LoadError> {
    let invalid = || LoadError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
    };

    let parsed: f64 = value.replace(',', ".").parse().map_err(|_| invalid())?;
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_roster() {
        let text = "name;attack;defense;intensity\nAlice;4;3;5\nBob;2;4;3\n";
        let players = parse_roster(text).unwrap();

        assert_eq!(players.len(), 2);
        assert_eq!(players[0], Player::new("Alice", 4.0, 3.0, 5.0));
        assert_eq!(players[1], Player::new("Bob", 2.0, 4.0, 3.0));
    }

    #[test]
    fn test_decimal_comma_and_point() {
        let text = "name;attack;defense;intensity\nCarla;4,5;3.25; 2,0 \n";
        let players = parse_roster(text).unwrap();
        assert_eq!(players[0], Player::new("Carla", 4.5, 3.25, 2.0));
    }

    #[test]
    fn test_header_only_and_empty_input() {
        assert!(parse_roster("").unwrap().is_empty());
        assert!(parse_roster("name;attack;defense;intensity").unwrap().is_empty());
    }

    #[test]
    fn test_blank_lines_skipped() {
        let text = "h\n\nDan;1;1;1\n   \nEve;2;2;2\n";
        let players = parse_roster(text).unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(players[1].name, "Eve");
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "name;attack;defense;intensity\r\nFay;1;2;3\r\n";
        let players = parse_roster(text).unwrap();
        assert_eq!(players[0], Player::new("Fay", 1.0, 2.0, 3.0));
    }

    #[test]
    fn test_wrong_field_count() {
        let text = "h\nGus;1;2\n";
        match parse_roster(text) {
            Err(LoadError::FieldCount { line, found }) => {
                assert_eq!(line, 2);
                assert_eq!(found, 3);
            }
            other => panic!("expected FieldCount, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_number() {
        let text = "h\nHal;1;two;3\n";
        match parse_roster(text) {
            Err(LoadError::InvalidNumber { line, field, value }) => {
                assert_eq!(line, 2);
                assert_eq!(field, "defense");
                assert_eq!(value, "two");
            }
            other => panic!("expected InvalidNumber, got {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        let text = "h\nIda;inf;1;1\n";
        assert!(matches!(
            parse_roster(text),
            Err(LoadError::InvalidNumber { field: "attack", .. })
        ));
    }

    #[test]
    fn test_empty_name() {
        let text = "h\n ;1;1;1\n";
        assert!(matches!(
            parse_roster(text),
            Err(LoadError::EmptyName { line: 2 })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_roster("/nonexistent/u-roster/players.csv");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn test_load_roster_file() {
        let path = std::env::temp_dir().join(format!("u-roster-{}.csv", std::process::id()));
        fs::write(&path, "name;attack;defense;intensity\nJo;1,5;2;3\n").unwrap();
        let players = load_roster(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(players, vec![Player::new("Jo", 1.5, 2.0, 3.0)]);
    }
}
