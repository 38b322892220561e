//! Which stickers on neighboring faces move when a face is turned.

use crate::{Face, PerFace, StripAxis};

use crate::Face::{Back as B, Down as D, Front as F, Left as L, Right as R, Up as U};

/// Row or column on a neighboring face that moves along with a face turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct EdgeStrip {
    /// Face that the strip is on.
    pub face: Face,
    /// Row or column index on that face.
    pub index: usize,
    /// Whether the strip is a row or a column.
    pub axis: StripAxis,
    /// Whether the strip's natural reading order runs against the turning
    /// face's cycle direction at the shared edge.
    pub reversed: bool,
}

const fn row(face: Face, index: usize, reversed: bool) -> EdgeStrip {
    EdgeStrip {
        face,
        index,
        axis: StripAxis::Row,
        reversed,
    }
}

const fn col(face: Face, index: usize, reversed: bool) -> EdgeStrip {
    EdgeStrip {
        face,
        index,
        axis: StripAxis::Col,
        reversed,
    }
}

/// For each face, the four neighboring strips that a turn of that face
/// carries around, in clockwise cycle order. A clockwise turn moves each strip
/// into the position of the next one.
///
/// Entries must be in the same order as the variants of [`Face`].
#[rustfmt::skip]
pub(crate) static EDGE_TABLE: PerFace<[EdgeStrip; 4]> = PerFace::new([
    // Up
    [row(B, 0, false), row(R, 0, false), row(F, 0, false), row(L, 0, false)],
    // Down
    [row(F, 2, false), row(R, 2, false), row(B, 2, false), row(L, 2, false)],
    // Left
    [col(U, 0, false), col(F, 0, false), col(D, 0, false), col(B, 2, true)],
    // Right
    [col(U, 2, false), col(B, 0, true), col(D, 2, false), col(F, 2, false)],
    // Front
    [row(U, 2, false), col(R, 0, false), row(D, 0, true), col(L, 2, true)],
    // Back
    [row(U, 0, false), col(L, 0, true), row(D, 2, true), col(R, 2, false)],
]);

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;
    use crate::grid::FACE_SIZE;

    #[test]
    fn test_edge_table_shape() {
        for face in Face::iter() {
            let strips = face.adjacent_strips();
            let neighbors: HashSet<Face> = strips.iter().map(|s| s.face).collect();
            assert_eq!(neighbors.len(), 4, "{face} has repeated neighbors");
            assert!(!neighbors.contains(&face));
            assert!(!neighbors.contains(&face.opposite()));
            assert!(strips.iter().all(|s| s.index < FACE_SIZE));
        }
    }

    #[test]
    fn test_opposite_faces_touch_disjoint_strips() {
        for face in Face::iter() {
            for a in face.adjacent_strips() {
                for b in face.opposite().adjacent_strips() {
                    if a.face == b.face && a.axis == b.axis {
                        assert_ne!(a.index, b.index, "{face} and its opposite share a strip");
                    }
                }
            }
        }
    }
}
