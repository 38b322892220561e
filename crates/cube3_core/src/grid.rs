use crate::Color;

/// Number of stickers along each edge of a face.
pub const FACE_SIZE: usize = 3;

/// Row or column of stickers on a face.
pub type Strip = [Color; FACE_SIZE];

/// Whether a strip of stickers is a row or a column of its face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StripAxis {
    /// Row, read left to right.
    Row,
    /// Column, read top to bottom.
    Col,
}

/// Grid of stickers on one face, indexed as `[row][col]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FaceGrid(pub [[Color; FACE_SIZE]; FACE_SIZE]);

impl FaceGrid {
    /// Returns a grid with every sticker the same color.
    pub fn filled(color: Color) -> Self {
        Self([[color; FACE_SIZE]; FACE_SIZE])
    }

    fn from_fn(f: impl Fn(usize, usize) -> Color) -> Self {
        Self(std::array::from_fn(|i| std::array::from_fn(|j| f(i, j))))
    }

    /// Returns the rows of the grid.
    pub fn rows(&self) -> &[[Color; FACE_SIZE]; FACE_SIZE] {
        &self.0
    }

    /// Iterates over stickers in row-major order.
    pub fn stickers(&self) -> impl Iterator<Item = Color> + '_ {
        self.0.iter().flatten().copied()
    }

    /// Returns whether every sticker on the face is the same color.
    pub fn is_monochrome(&self) -> bool {
        let first = self.0[0][0];
        self.stickers().all(|c| c == first)
    }

    /// Returns the grid rotated 90 degrees clockwise.
    ///
    /// Row `k` of the result is column `k` of the original read bottom to
    /// top.
    #[must_use]
    pub fn rotated_cw(&self) -> Self {
        const LAST: usize = FACE_SIZE - 1;
        Self::from_fn(|i, j| self.0[LAST - j][i])
    }

    /// Returns the grid rotated 90 degrees counterclockwise. This is the
    /// inverse of [`FaceGrid::rotated_cw()`].
    #[must_use]
    pub fn rotated_ccw(&self) -> Self {
        const LAST: usize = FACE_SIZE - 1;
        Self::from_fn(|i, j| self.0[j][LAST - i])
    }

    /// Returns a row or column of the grid, optionally reversed.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [`FACE_SIZE`].
    pub fn strip(&self, axis: StripAxis, index: usize, reversed: bool) -> Strip {
        let mut strip = match axis {
            StripAxis::Row => self.0[index],
            StripAxis::Col => self.0.map(|row| row[index]),
        };
        if reversed {
            strip.reverse();
        }
        strip
    }

    /// Overwrites a row or column of the grid. If `reversed` is true, `strip`
    /// is reversed before it is stored, so that `set_strip()` undoes
    /// [`FaceGrid::strip()`] with the same arguments.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [`FACE_SIZE`].
    pub fn set_strip(&mut self, axis: StripAxis, index: usize, reversed: bool, mut strip: Strip) {
        if reversed {
            strip.reverse();
        }
        match axis {
            StripAxis::Row => self.0[index] = strip,
            StripAxis::Col => {
                for (row, color) in self.0.iter_mut().zip(strip) {
                    row[index] = color;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Color::*;
    use crate::StripAxis::{Col, Row};

    const PATTERN: FaceGrid = FaceGrid([
        [White, Yellow, Orange],
        [Red, Green, Blue],
        [White, White, White],
    ]);

    #[test]
    fn test_rotate_known_pattern() {
        assert_eq!(
            PATTERN.rotated_cw(),
            FaceGrid([
                [White, Red, White],
                [White, Green, Yellow],
                [White, Blue, Orange],
            ]),
        );
        assert_eq!(
            PATTERN.rotated_ccw(),
            FaceGrid([
                [Orange, Blue, White],
                [Yellow, Green, White],
                [White, Red, White],
            ]),
        );
    }

    #[test]
    fn test_rotation_inverse_and_order() {
        assert_eq!(PATTERN.rotated_cw().rotated_ccw(), PATTERN);
        assert_eq!(PATTERN.rotated_ccw().rotated_cw(), PATTERN);
        let mut grid = PATTERN;
        for _ in 0..4 {
            grid = grid.rotated_cw();
        }
        assert_eq!(grid, PATTERN);
        assert_eq!(
            PATTERN.rotated_cw().rotated_cw(),
            PATTERN.rotated_ccw().rotated_ccw(),
        );
    }

    #[test]
    fn test_strips() {
        assert_eq!(PATTERN.strip(Row, 1, false), [Red, Green, Blue]);
        assert_eq!(PATTERN.strip(Row, 1, true), [Blue, Green, Red]);
        assert_eq!(PATTERN.strip(Col, 0, false), [White, Red, White]);
        assert_eq!(PATTERN.strip(Col, 2, true), [White, Blue, Orange]);

        let mut grid = PATTERN;
        grid.set_strip(Col, 2, true, [Red, Red, Yellow]);
        assert_eq!(grid.strip(Col, 2, false), [Yellow, Red, Red]);
        assert_eq!(grid.strip(Col, 2, true), [Red, Red, Yellow]);
        assert_eq!(grid.strip(Col, 0, false), [White, Red, White]);
    }

    #[test]
    fn test_monochrome() {
        assert!(FaceGrid::filled(Blue).is_monochrome());
        assert!(!PATTERN.is_monochrome());
        assert_eq!(FaceGrid::filled(Red).stickers().count(), 9);
    }
}
