//! Runtime configuration read from environment variables.
//!
//! - `OTHELLO_LOG_PATH`: write `tracing` output to this file (unset or empty: no logging)
//! - `OTHELLO_CELL_WIDTH`: terminal columns per board cell, 2..=8 (default: 4)
//! - `OTHELLO_HINTS`: highlight legal moves (default: on)
//! - `OTHELLO_ANCHOR`: `center` or `top` (default: center)
//! - `OTHELLO_MOUSE`: enable mouse selection (default: on)
//!
//! Log verbosity follows `RUST_LOG` and defaults to `info`.

use std::env;
use std::path::PathBuf;

use crate::term::{AnchorY, BoardView};

const DEFAULT_CELL_WIDTH: u16 = 4;
const MIN_CELL_WIDTH: u16 = 2;
const MAX_CELL_WIDTH: u16 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_path: Option<PathBuf>,
    pub cell_width: u16,
    pub hints: bool,
    pub anchor_y: AnchorY,
    pub mouse: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            cell_width: DEFAULT_CELL_WIDTH,
            hints: true,
            anchor_y: AnchorY::Center,
            mouse: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let log_path = lookup("OTHELLO_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        let cell_width = lookup("OTHELLO_CELL_WIDTH")
            .and_then(|s| s.trim().parse::<u16>().ok())
            .map(|w| w.clamp(MIN_CELL_WIDTH, MAX_CELL_WIDTH))
            .unwrap_or(defaults.cell_width);

        let hints = lookup("OTHELLO_HINTS")
            .and_then(|s| parse_flag(&s))
            .unwrap_or(defaults.hints);

        let anchor_y = match lookup("OTHELLO_ANCHOR").map(|s| s.trim().to_lowercase()) {
            Some(s) if s == "top" => AnchorY::Top,
            _ => defaults.anchor_y,
        };

        let mouse = lookup("OTHELLO_MOUSE")
            .and_then(|s| parse_flag(&s))
            .unwrap_or(defaults.mouse);

        Self {
            log_path,
            cell_width,
            hints,
            anchor_y,
            mouse,
        }
    }

    /// Board view matching this config.
    ///
    /// Cells are half as tall as they are wide to stay roughly square.
    pub fn board_view(&self) -> BoardView {
        BoardView::new(self.cell_width, (self.cell_width / 2).max(1))
            .with_anchor_y(self.anchor_y)
            .with_hints(self.hints)
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(config(&[]), AppConfig::default());
    }

    #[test]
    fn reads_all_variables() {
        let cfg = config(&[
            ("OTHELLO_LOG_PATH", " /tmp/othello.log "),
            ("OTHELLO_CELL_WIDTH", "6"),
            ("OTHELLO_HINTS", "off"),
            ("OTHELLO_ANCHOR", "TOP"),
            ("OTHELLO_MOUSE", "0"),
        ]);
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/othello.log")));
        assert_eq!(cfg.cell_width, 6);
        assert!(!cfg.hints);
        assert_eq!(cfg.anchor_y, AnchorY::Top);
        assert!(!cfg.mouse);
    }

    #[test]
    fn bad_values_fall_back_or_clamp() {
        let cfg = config(&[
            ("OTHELLO_LOG_PATH", "   "),
            ("OTHELLO_CELL_WIDTH", "40"),
            ("OTHELLO_HINTS", "maybe"),
        ]);
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.cell_width, MAX_CELL_WIDTH);
        assert!(cfg.hints);

        assert_eq!(config(&[("OTHELLO_CELL_WIDTH", "wide")]).cell_width, DEFAULT_CELL_WIDTH);
        assert_eq!(config(&[("OTHELLO_CELL_WIDTH", "1")]).cell_width, MIN_CELL_WIDTH);
    }

    #[test]
    fn board_view_uses_half_height_cells() {
        let view = config(&[("OTHELLO_CELL_WIDTH", "6")]).board_view();
        assert_eq!(view.frame_size(), (8 * 6 + 2, 8 * 3 + 2));
    }
}
