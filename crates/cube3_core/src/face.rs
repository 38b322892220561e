use std::fmt;
use std::str::FromStr;

use strum::{EnumCount, EnumIter, VariantArray};

use crate::edges::{EDGE_TABLE, EdgeStrip};
use crate::{Color, CubeError};

/// Face of the cube.
#[derive(Debug, EnumCount, EnumIter, VariantArray, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Face {
    /// Up
    Up,
    /// Down
    Down,
    /// Left
    Left,
    /// Right
    Right,
    /// Front
    Front,
    /// Back
    Back,
}

impl Face {
    /// Returns the one-letter name of the face, as used in move notation.
    pub fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Left => 'L',
            Face::Right => 'R',
            Face::Front => 'F',
            Face::Back => 'B',
        }
    }

    /// Returns the face with the given one-letter name, or `None` if there is
    /// no such face. Letters are case-sensitive.
    pub fn from_letter(letter: char) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|f| f.letter() == letter)
    }

    /// Returns the color of every sticker on this face in the solved state.
    pub fn solved_color(self) -> Color {
        match self {
            Face::Up => Color::White,
            Face::Down => Color::Yellow,
            Face::Left => Color::Orange,
            Face::Right => Color::Red,
            Face::Front => Color::Green,
            Face::Back => Color::Blue,
        }
    }

    /// Returns the face on the opposite side of the cube.
    pub fn opposite(self) -> Self {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }

    /// Returns the four strips on neighboring faces that move along with a
    /// turn of this face, in clockwise cycle order.
    pub fn adjacent_strips(self) -> &'static [EdgeStrip; 4] {
        &EDGE_TABLE[self]
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Face {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::from_letter(letter),
            _ => None,
        }
        .ok_or_else(|| CubeError::UnknownFace {
            name: s.to_owned(),
        })
    }
}

per_variant_list! {
    /// List containing a value per face.
    pub struct PerFace<T> for Face;
}
