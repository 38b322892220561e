//! User preferences for the terminal front end.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::str::FromStr;

use cube3_core::{Color, CubeError, Move, PerColor, Rgb};
use serde::Deserialize;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    pub(crate) static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Preferences {
    /// Whether to draw stickers in color.
    pub color: bool,
    /// Hex color overrides, keyed by color name.
    pub colors: BTreeMap<String, String>,
    /// Single-key bindings for the interactive prompt.
    pub keybinds: Vec<Keybind>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Keybind {
    pub key: String,
    pub action: String,
}

/// What a key does at the interactive prompt.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum KeyAction {
    Move(Move),
    Reset,
}

impl FromStr for KeyAction {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reset" => Ok(KeyAction::Reset),
            _ => s.parse().map(KeyAction::Move),
        }
    }
}

impl Default for Preferences {
    fn default() -> Self {
        DEFAULT_PREFS.clone()
    }
}

impl Preferences {
    /// Loads the built-in preferences, overlaid with the preferences file at
    /// `path` if there is one. Falls back to the built-in preferences if the
    /// file cannot be loaded.
    pub fn load(path: Option<&Path>) -> Self {
        lazy_static::initialize(&DEFAULT_PREFS);

        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));
        if let Some(path) = path {
            log::debug!("loading preferences from {path:?}");
            let file = config::File::from(path).format(PREFS_FILE_FORMAT);
            config = config.add_source(file);
        }

        config
            .build()
            .and_then(|c| c.try_deserialize())
            .unwrap_or_else(|e| {
                log::warn!("Error loading preferences: {e}");
                Self::default()
            })
    }

    /// Returns the action for each bound key. Invalid bindings are skipped
    /// with a warning.
    pub fn keymap(&self) -> HashMap<char, KeyAction> {
        let mut keymap = HashMap::new();
        for Keybind { key, action } in &self.keybinds {
            let mut chars = key.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                log::warn!("Ignoring keybind for {key:?}: key must be a single character");
                continue;
            };
            match action.parse() {
                Ok(action) => {
                    if keymap.insert(c, action).is_some() {
                        log::warn!("Key {key:?} is bound more than once; using the last binding");
                    }
                }
                Err(e) => log::warn!("Ignoring keybind for {key:?}: {e}"),
            }
        }
        keymap
    }

    /// Returns the display color for each sticker color, applying any
    /// overrides. Invalid overrides are skipped with a warning.
    pub fn palette(&self) -> PerColor<Rgb> {
        let mut palette = PerColor::from_fn(Color::rgb);
        for (name, hex) in &self.colors {
            let color = match Color::from_str(name) {
                Ok(color) => color,
                Err(_) => {
                    log::warn!("Ignoring color override for unknown color {name:?}");
                    continue;
                }
            };
            match hex.parse() {
                Ok(rgb) => palette[color] = rgb,
                Err(e) => log::warn!("Ignoring color override for {color}: {e}"),
            }
        }
        palette
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use cube3_core::{Face, Turn};
    use pretty_assertions::assert_eq;

    use super::*;

    fn key_move(token: &str) -> KeyAction {
        KeyAction::Move(token.parse().expect("valid move"))
    }

    fn write_prefs_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("error creating temporary file");
        file.write_all(contents.as_bytes())
            .expect("error writing temporary file");
        file
    }

    #[test]
    fn test_default_keymap() {
        let keymap = Preferences::default().keymap();
        assert_eq!(keymap.len(), 13);
        assert_eq!(keymap[&' '], KeyAction::Reset);
        assert_eq!(keymap[&'u'], key_move("U"));
        assert_eq!(keymap[&'z'], key_move("B'"));
        for (&key, action) in &keymap {
            if let KeyAction::Move(m) = action {
                assert_ne!(m.turn, Turn::Double, "{key:?} is bound to a half turn");
                assert!(m.face != Face::Up || "uq".contains(key));
            }
        }
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let prefs = Preferences::load(Some(Path::new("/nonexistent/cube3/prefs.yaml")));
        assert_eq!(prefs, *DEFAULT_PREFS);
        assert_eq!(Preferences::load(None), *DEFAULT_PREFS);
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let file = write_prefs_file("color: false\n");
        let prefs = Preferences::load(Some(file.path()));
        assert!(!prefs.color);
        assert_eq!(prefs.keybinds, DEFAULT_PREFS.keybinds);
        assert_eq!(prefs.keymap().len(), 13);
    }

    #[test]
    fn test_load_user_overrides() {
        let file = write_prefs_file(
            r##"
color: false
colors:
  Orange: "#ff8800"
  purple: "#800080"
  red: "nope"
keybinds:
  - { key: "x", action: "R2" }
  - { key: "yy", action: "R" }
  - { key: "k", action: "K" }
"##,
        );

        let prefs = Preferences::load(Some(file.path()));
        assert!(!prefs.color);

        let keymap = prefs.keymap();
        assert_eq!(keymap.len(), 1);
        assert_eq!(keymap[&'x'], key_move("R2"));

        let palette = prefs.palette();
        assert_eq!(palette[Color::Orange], Rgb { rgb: [255, 136, 0] });
        assert_eq!(palette[Color::Red], Color::Red.rgb());
        assert_eq!(palette[Color::Blue], Color::Blue.rgb());
    }
}
