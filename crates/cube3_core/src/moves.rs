use std::fmt;
use std::str::FromStr;

use strum::{EnumIter, VariantArray};

use crate::{CubeError, Face};

/// Direction and amount of a face turn.
#[derive(Debug, Default, EnumIter, VariantArray, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Quarter turn clockwise, written with no suffix.
    ///
    /// Example: `R`
    #[default]
    Clockwise,
    /// Quarter turn counterclockwise.
    ///
    /// Example: `R'`
    CounterClockwise,
    /// Half turn, applied as two clockwise quarter turns.
    ///
    /// Example: `R2`
    Double,
}

impl Turn {
    /// Returns the notation suffix for the turn.
    pub fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::CounterClockwise => "'",
            Turn::Double => "2",
        }
    }

    /// Returns the turn that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
            Turn::Double => Turn::Double,
        }
    }

    /// Returns the quarter turns that make up this turn, as a list of
    /// `clockwise` flags.
    pub fn quarter_turns(self) -> &'static [bool] {
        match self {
            Turn::Clockwise => &[true],
            Turn::CounterClockwise => &[false],
            Turn::Double => &[true, true],
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|t| t.suffix() == suffix)
    }
}

/// Turn of a single face, such as `R`, `U'`, or `F2`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// Face to turn.
    pub face: Face,
    /// Direction and amount to turn it.
    pub turn: Turn,
}

impl Move {
    /// Constructs a move.
    pub const fn new(face: Face, turn: Turn) -> Self {
        Self { face, turn }
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self::new(self.face, self.turn.inverse())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.turn.suffix())
    }
}

impl FromStr for Move {
    type Err = CubeError;

    /// Parses a single move token. The whole string must be the token; no
    /// surrounding whitespace is allowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let face = chars.next().and_then(Face::from_letter);
        let turn = Turn::from_suffix(chars.as_str());
        match (face, turn) {
            (Some(face), Some(turn)) => Ok(Self { face, turn }),
            _ => Err(CubeError::InvalidMoveToken {
                token: s.to_owned(),
            }),
        }
    }
}

/// Parses a whitespace-separated sequence of moves, such as `R U R' U'`.
///
/// Returns the first invalid token as an error. An empty string is an empty
/// sequence.
pub fn parse_moves(s: &str) -> Result<Vec<Move>, CubeError> {
    s.split_whitespace().map(str::parse).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    fn invalid(token: &str) -> CubeError {
        CubeError::InvalidMoveToken {
            token: token.to_owned(),
        }
    }

    #[test]
    fn test_parse_moves() {
        assert_eq!("R".parse(), Ok(Move::new(Face::Right, Turn::Clockwise)));
        assert_eq!(
            "U'".parse(),
            Ok(Move::new(Face::Up, Turn::CounterClockwise)),
        );
        assert_eq!("B2".parse(), Ok(Move::new(Face::Back, Turn::Double)));

        for bad in [
            "", "X", "U3", "u", "R''", "R2'", "R'2", " R", "R ", "RU", "2", "'",
        ] {
            assert_eq!(bad.parse::<Move>(), Err(invalid(bad)), "{bad:?}");
        }
    }

    #[test]
    fn test_display_round_trip() {
        for face in Face::iter() {
            for turn in Turn::iter() {
                let m = Move::new(face, turn);
                assert_eq!(m.to_string().parse(), Ok(m));
            }
        }
        let m = Move::new(Face::Front, Turn::CounterClockwise);
        assert_eq!(m.to_string(), "F'");
    }

    #[test]
    fn test_inverse() {
        fn net_quarter_turns(turn: Turn) -> i32 {
            turn.quarter_turns()
                .iter()
                .map(|&cw| if cw { 1 } else { -1 })
                .sum()
        }

        for turn in Turn::iter() {
            assert_eq!(turn.inverse().inverse(), turn);
            let net = net_quarter_turns(turn) + net_quarter_turns(turn.inverse());
            assert_eq!(net.rem_euclid(4), 0);
        }
    }

    #[test]
    fn test_parse_sequence() {
        let moves = parse_moves("  R U\tR'  U2\n").expect("valid sequence");
        let text: Vec<String> = moves.iter().map(Move::to_string).collect();
        assert_eq!(text, ["R", "U", "R'", "U2"]);
        assert_eq!(parse_moves("   "), Ok(vec![]));
        assert_eq!(parse_moves("R U3 X"), Err(invalid("U3")));
    }
}
