//! The eight fixed winning lines.

use crate::types::Cell;
use serde::{Deserialize, Serialize};

/// One of the 8 lines that wins when uniformly occupied.
///
/// Declaration order is the evaluation order: rows top to bottom, columns
/// left to right, then the two diagonals. When a single move completes more
/// than one line, the first one in this order is the one reported.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum WinLine {
    /// Row 0.
    #[display("top row")]
    TopRow,
    /// Row 1.
    #[display("middle row")]
    MiddleRow,
    /// Row 2.
    #[display("bottom row")]
    BottomRow,
    /// Column 0.
    #[display("left column")]
    LeftColumn,
    /// Column 1.
    #[display("center column")]
    CenterColumn,
    /// Column 2.
    #[display("right column")]
    RightColumn,
    /// (0,0) to (2,2).
    #[display("main diagonal")]
    MainDiagonal,
    /// (0,2) to (2,0).
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl WinLine {
    /// All lines in evaluation order.
    pub const ALL: [WinLine; 8] = [
        WinLine::TopRow,
        WinLine::MiddleRow,
        WinLine::BottomRow,
        WinLine::LeftColumn,
        WinLine::CenterColumn,
        WinLine::RightColumn,
        WinLine::MainDiagonal,
        WinLine::AntiDiagonal,
    ];

    /// The three cells making up this line.
    pub const fn cells(self) -> [Cell; 3] {
        match self {
            WinLine::TopRow => [Cell::at(0, 0), Cell::at(0, 1), Cell::at(0, 2)],
            WinLine::MiddleRow => [Cell::at(1, 0), Cell::at(1, 1), Cell::at(1, 2)],
            WinLine::BottomRow => [Cell::at(2, 0), Cell::at(2, 1), Cell::at(2, 2)],
            WinLine::LeftColumn => [Cell::at(0, 0), Cell::at(1, 0), Cell::at(2, 0)],
            WinLine::CenterColumn => [Cell::at(0, 1), Cell::at(1, 1), Cell::at(2, 1)],
            WinLine::RightColumn => [Cell::at(0, 2), Cell::at(1, 2), Cell::at(2, 2)],
            WinLine::MainDiagonal => [Cell::at(0, 0), Cell::at(1, 1), Cell::at(2, 2)],
            WinLine::AntiDiagonal => [Cell::at(0, 2), Cell::at(1, 1), Cell::at(2, 0)],
        }
    }
}
