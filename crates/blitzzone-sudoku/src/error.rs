use blitzzone_core::Position;

/// Reason a cell edit or selection was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EditError {
    /// The round is not in the playing phase.
    #[display("round is not in play")]
    NotPlaying,
    /// The position lies outside the blank region.
    #[display("{pos} is outside the blank region")]
    OutsideRegion {
        /// The rejected position.
        pos: Position,
    },
    /// A value cycle was requested with no cell selected.
    #[display("no cell is selected")]
    NoSelection,
}
