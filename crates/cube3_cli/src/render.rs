//! Text rendering of cube states for the terminal.

use cube3_core::{Color, CubeState, FACE_SIZE, FaceGrid, NET_LAYOUT, PerColor, Rgb};
use owo_colors::OwoColorize;

use crate::prefs::Preferences;

/// Width of a blank face slot in colored output.
const COLORED_SLOT_WIDTH: usize = FACE_SIZE * 3;

#[derive(Debug, Clone)]
pub(crate) struct Renderer {
    /// Display color for each sticker color, or `None` for plain letters.
    palette: Option<PerColor<Rgb>>,
}

impl Renderer {
    pub fn new(prefs: &Preferences, no_color: bool) -> Self {
        if !prefs.color || no_color {
            return Self::plain();
        }
        Self {
            palette: Some(prefs.palette()),
        }
    }

    /// Returns a renderer that prints sticker letters without color.
    pub fn plain() -> Self {
        Self { palette: None }
    }

    fn push_sticker(&self, out: &mut String, color: Color) {
        match &self.palette {
            Some(palette) => {
                let [r, g, b] = palette[color].rgb;
                let [fr, fg, fb] = if palette[color].is_light() {
                    Rgb::BLACK.rgb
                } else {
                    Rgb::WHITE.rgb
                };
                let text = format!(" {} ", color.letter());
                let fg_tile = text.truecolor(fr, fg, fb);
                let tile = fg_tile.on_truecolor(r, g, b);
                out.push_str(&tile.to_string());
            }
            None => {
                out.push(color.letter());
                out.push(' ');
            }
        }
    }

    /// Renders the unfolded net of the cube.
    pub fn net(&self, cube: &CubeState) -> String {
        if self.palette.is_none() {
            return cube.to_string();
        }

        let mut lines = vec![];
        for layout_row in NET_LAYOUT {
            let used_slots = layout_row
                .iter()
                .rposition(Option::is_some)
                .map_or(0, |i| i + 1);
            for row in 0..FACE_SIZE {
                let mut line = String::new();
                for slot in &layout_row[..used_slots] {
                    match slot {
                        Some(face) => {
                            for &color in &cube.face(*face).rows()[row] {
                                self.push_sticker(&mut line, color);
                            }
                        }
                        None => line.push_str(&" ".repeat(COLORED_SLOT_WIDTH)),
                    }
                }
                lines.push(line);
            }
        }
        lines.join("\n")
    }

    /// Renders a single face grid.
    pub fn face(&self, grid: &FaceGrid) -> String {
        grid.rows()
            .iter()
            .map(|row| {
                let mut line = String::new();
                for &color in row {
                    self.push_sticker(&mut line, color);
                }
                match self.palette {
                    Some(_) => line,
                    None => line.trim_end().to_owned(),
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Renders a short description of whether the cube is solved.
    pub fn status(&self, cube: &CubeState) -> String {
        let text = if cube.is_solved() {
            "Solved"
        } else {
            "Not solved"
        };
        match self.palette {
            Some(_) if cube.is_solved() => text.green().bold().to_string(),
            Some(_) => text.yellow().to_string(),
            None => text.to_owned(),
        }
    }
}
