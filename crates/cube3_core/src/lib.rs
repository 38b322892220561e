//! Sticker-level model of a 3x3x3 Rubik's Cube.
//!
//! A [`CubeState`] owns six 3x3 grids of [`Color`]s, one per [`Face`].
//! Turning a face rotates its own grid and carries one row or column of each
//! of its four neighbors around with it. The engine knows nothing about
//! rendering; callers apply moves with [`CubeState::apply_move()`] and read
//! stickers back with [`CubeState::get_face_colors()`].
//!
//! ```
//! use cube3_core::{Color, CubeState, Face};
//!
//! let mut cube = CubeState::new();
//! cube.apply_moves("R U R' U'").unwrap();
//! assert!(!cube.is_solved());
//! assert_eq!(cube.color_counts()[Color::Green], 9);
//!
//! cube.reset();
//! assert_eq!(cube.face_colors(Face::Front), [[Color::Green; 3]; 3]);
//! ```

#[macro_use]
mod per;

mod color;
mod edges;
mod errors;
mod face;
mod grid;
mod moves;
mod state;

pub use color::{Color, PerColor, Rgb};
pub use edges::EdgeStrip;
pub use errors::CubeError;
pub use face::{Face, PerFace};
pub use grid::{FACE_SIZE, FaceGrid, Strip, StripAxis};
pub use moves::{Move, Turn, parse_moves};
pub use state::{CubeState, NET_LAYOUT};
