use std::fmt;

use crate::grid::FACE_SIZE;
use crate::{Color, CubeError, Face, FaceGrid, Move, PerColor, PerFace, parse_moves};

/// Layout of faces in the unfolded net of the cube, as rows of face slots.
///
/// ```text
///     U
///   L F R B
///     D
/// ```
pub const NET_LAYOUT: [[Option<Face>; 4]; 3] = [
    [None, Some(Face::Up), None, None],
    [
        Some(Face::Left),
        Some(Face::Front),
        Some(Face::Right),
        Some(Face::Back),
    ],
    [None, Some(Face::Down), None, None],
];

/// Sticker-level state of a 3x3x3 Rubik's Cube.
///
/// The state is always a permutation of the solved state: every color appears
/// exactly 9 times. Mutation is in place and requires exclusive access.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    faces: PerFace<FaceGrid>,
}

impl Default for CubeState {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeState {
    /// Constructs a solved cube.
    pub fn new() -> Self {
        Self {
            faces: Self::solved_faces(),
        }
    }

    fn solved_faces() -> PerFace<FaceGrid> {
        PerFace::from_fn(|face| FaceGrid::filled(face.solved_color()))
    }

    /// Resets the cube to the solved state.
    pub fn reset(&mut self) {
        log::debug!("resetting cube to solved state");
        self.faces = Self::solved_faces();
    }

    /// Parses and applies a single move token such as `R`, `U'`, or `F2`,
    /// returning the parsed move.
    ///
    /// If the token is invalid, returns [`CubeError::InvalidMoveToken`] and
    /// leaves the cube unchanged.
    pub fn apply_move(&mut self, token: &str) -> Result<Move, CubeError> {
        let m = token.parse()?;
        self.apply(m);
        Ok(m)
    }

    /// Parses and applies a whitespace-separated sequence of moves, returning
    /// the number of moves applied.
    ///
    /// All tokens are parsed before any is applied, so if any token is invalid
    /// then the cube is unchanged.
    pub fn apply_moves(&mut self, sequence: &str) -> Result<usize, CubeError> {
        let moves = parse_moves(sequence)?;
        for &m in &moves {
            self.apply(m);
        }
        Ok(moves.len())
    }

    /// Applies a move.
    pub fn apply(&mut self, m: Move) {
        log::trace!("applying move {m}");
        for &clockwise in m.turn.quarter_turns() {
            self.rotate_face(m.face, clockwise);
        }
    }

    /// Turns a face by 90 degrees, carrying the adjacent strips of the four
    /// neighboring faces along with it.
    pub fn rotate_face(&mut self, face: Face, clockwise: bool) {
        let grid = &mut self.faces[face];
        *grid = if clockwise {
            grid.rotated_cw()
        } else {
            grid.rotated_ccw()
        };

        // Read every strip before writing any, because a neighbor may not be
        // read after it has been overwritten.
        let entries = *face.adjacent_strips();
        let strips = entries.map(|e| self.faces[e.face].strip(e.axis, e.index, e.reversed));

        let n = entries.len();
        for (i, e) in entries.iter().enumerate() {
            let source = if clockwise {
                (i + n - 1) % n
            } else {
                (i + 1) % n
            };
            self.faces[e.face].set_strip(e.axis, e.index, e.reversed, strips[source]);
        }
    }

    /// Returns the sticker grid of a face.
    pub fn face(&self, face: Face) -> &FaceGrid {
        &self.faces[face]
    }

    /// Returns the colors on a face in row-major order.
    pub fn face_colors(&self, face: Face) -> [[Color; FACE_SIZE]; FACE_SIZE] {
        self.faces[face].0
    }

    /// Returns the colors on the face with the given one-letter name, such as
    /// `"U"`.
    ///
    /// If the name is not a face, returns [`CubeError::UnknownFace`].
    pub fn get_face_colors(
        &self,
        name: &str,
    ) -> Result<[[Color; FACE_SIZE]; FACE_SIZE], CubeError> {
        Ok(self.face_colors(name.parse()?))
    }

    /// Returns whether every face is a single color.
    ///
    /// This does not require each face to have its original color, so a cube
    /// that is solved but reoriented still counts.
    pub fn is_solved(&self) -> bool {
        self.faces.values().all(FaceGrid::is_monochrome)
    }

    /// Returns the number of stickers of each color on the cube.
    pub fn color_counts(&self) -> PerColor<usize> {
        let mut counts = PerColor::default();
        for grid in self.faces.values() {
            for color in grid.stickers() {
                counts[color] += 1;
            }
        }
        counts
    }
}

/// Writes the unfolded net using one letter per sticker.
impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, layout_row) in NET_LAYOUT.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for row in 0..FACE_SIZE {
                if row > 0 {
                    writeln!(f)?;
                }
                let mut line = String::new();
                for slot in layout_row {
                    for col in 0..FACE_SIZE {
                        match slot {
                            Some(face) => line.push(self.faces[*face].0[row][col].letter()),
                            None => line.push(' '),
                        }
                        line.push(' ');
                    }
                }
                write!(f, "{}", line.trim_end())?;
            }
        }
        Ok(())
    }
}
