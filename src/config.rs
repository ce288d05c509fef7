//! Puzzle configuration: the built-in puzzle and JSON puzzle files.
//!
//! File format:
//!
//! ```json
//! {
//!   "number": 2,
//!   "title": "My Connections",
//!   "groups": [
//!     { "name": "GROUP ONE", "color": "green", "words": ["A", "B", "C", "D"] },
//!     ...
//!   ]
//! }
//! ```
//!
//! Colors are named (`green`, `yellow`, `orange`, `crimson`/`red`, `blue`,
//! `purple`). Structural validation (4x4, unique items) happens in the
//! engine constructor; this module only gets the data into shape.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use tui_connections::core::{GroupDef, PuzzleDef};
use tui_connections::types::GroupColor;

#[derive(Debug, Deserialize)]
struct PuzzleFile {
    #[serde(default = "default_number")]
    number: u32,
    title: String,
    groups: Vec<GroupFile>,
}

#[derive(Debug, Deserialize)]
struct GroupFile {
    name: String,
    color: String,
    words: Vec<String>,
}

fn default_number() -> u32 {
    1
}

/// Load a puzzle definition from a JSON file.
pub fn load_puzzle(path: &Path) -> Result<PuzzleDef> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading puzzle file {}", path.display()))?;
    let file: PuzzleFile = serde_json::from_str(&raw)
        .with_context(|| format!("parsing puzzle file {}", path.display()))?;

    let mut groups = Vec::with_capacity(file.groups.len());
    for group in file.groups {
        let color = GroupColor::from_name(&group.color)
            .ok_or_else(|| anyhow!("group {:?}: unknown color {:?}", group.name, group.color))?;
        groups.push(GroupDef {
            name: group.name,
            color,
            items: group.words,
        });
    }

    Ok(PuzzleDef {
        number: file.number,
        title: file.title,
        groups,
    })
}

/// The built-in puzzle used when no file is supplied.
pub fn builtin_puzzle() -> PuzzleDef {
    PuzzleDef {
        number: 1,
        title: "Football Connections".into(),
        groups: vec![
            GroupDef::new(
                "CENTER BACKS",
                GroupColor::Green,
                ["RAMOS", "MALDINI", "BARESI", "PUYOL"],
            ),
            GroupDef::new(
                "YOUNG STARS",
                GroupColor::Yellow,
                ["DOKU", "PEDRI", "YAMAL", "GULER"],
            ),
            GroupDef::new(
                "WORLD CUP FINAL SCORERS",
                GroupColor::Orange,
                ["INIESTA", "GOTZE", "ZIDANE", "MBAPPE"],
            ),
            GroupDef::new(
                "CHELSEA REJECTS",
                GroupColor::Crimson,
                ["SALAH", "LUKAKU", "DE BRUYNE", "RICE"],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_puzzle_is_valid() {
        assert!(builtin_puzzle().validate().is_ok());
    }

    #[test]
    fn test_load_puzzle_round_trip() {
        let dir = std::env::temp_dir();
        let path = dir.join("tui-connections-config-test.json");
        fs::write(
            &path,
            r#"{
                "title": "File Puzzle",
                "groups": [
                    { "name": "A", "color": "green", "words": ["A1", "A2", "A3", "A4"] },
                    { "name": "B", "color": "yellow", "words": ["B1", "B2", "B3", "B4"] },
                    { "name": "C", "color": "blue", "words": ["C1", "C2", "C3", "C4"] },
                    { "name": "D", "color": "purple", "words": ["D1", "D2", "D3", "D4"] }
                ]
            }"#,
        )
        .unwrap();

        let def = load_puzzle(&path).unwrap();
        assert_eq!(def.title, "File Puzzle");
        // number defaults when absent.
        assert_eq!(def.number, 1);
        assert_eq!(def.groups[2].color, GroupColor::Blue);
        assert!(def.validate().is_ok());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_unknown_color_is_rejected() {
        let dir = std::env::temp_dir();
        let path = dir.join("tui-connections-config-badcolor.json");
        fs::write(
            &path,
            r#"{
                "title": "Bad",
                "groups": [
                    { "name": "A", "color": "mauve", "words": ["A1", "A2", "A3", "A4"] }
                ]
            }"#,
        )
        .unwrap();

        assert!(load_puzzle(&path).is_err());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_puzzle(Path::new("/nonexistent/puzzle.json")).is_err());
    }
}
