use thiserror::Error;

/// Error produced when parsing moves or looking up faces.
///
/// Neither error ever leaves a [`crate::CubeState`] partially modified.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CubeError {
    /// Move token does not match the move grammar, such as `X`, `U3`, or the
    /// empty string.
    #[error("invalid move token {token:?}")]
    InvalidMoveToken {
        /// Rejected token.
        token: String,
    },
    /// Face name is not one of `U`, `D`, `L`, `R`, `F`, or `B`.
    #[error("unknown face {name:?}")]
    UnknownFace {
        /// Rejected face name.
        name: String,
    },
}
