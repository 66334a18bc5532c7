//! Algebraic notation for cells, walls, and moves.
//!
//! Cells use a file letter and a rank digit: files `a`..`i` run west to
//! east and ranks `9`..`1` run from the top row down, so the top-left cell
//! is `a9`. Walls append their orientation to the anchor cell, as in `a9h`
//! or `c7v`. A pawn move is written as its destination cell.

use thiserror::Error;

use crate::board::{Move, Orientation, Position, Wall, BOARD_SIZE, WALL_ANCHOR_MAX};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("empty token")]
    Empty,
    #[error("unknown file '{0}', expected a-i")]
    UnknownFile(char),
    #[error("unknown rank '{0}', expected 1-9")]
    UnknownRank(char),
    #[error("unknown orientation '{0}', expected h or v")]
    UnknownOrientation(char),
    #[error("wall anchor '{0}' is outside the anchor grid")]
    AnchorOutOfRange(String),
    #[error("malformed token '{0}'")]
    Malformed(String),
}

/// Formats a cell, e.g. `(0, 0)` as `a9`.
pub fn format_cell(pos: Position) -> String {
    let file = (b'a' + pos.col as u8) as char;
    let rank = (b'0' + (BOARD_SIZE - pos.row) as u8) as char;
    format!("{}{}", file, rank)
}

/// Parses a cell token such as `e5`.
pub fn parse_cell(token: &str) -> Result<Position, NotationError> {
    let chars: Vec<char> = token.chars().collect();
    match chars.as_slice() {
        [] => Err(NotationError::Empty),
        [file, rank] => cell_from_chars(*file, *rank),
        _ => Err(NotationError::Malformed(token.to_string())),
    }
}

/// Formats a wall, e.g. horizontal at `(0, 0)` as `a9h`.
pub fn format_wall(wall: Wall) -> String {
    let suffix = match wall.orientation {
        Orientation::Horizontal => 'h',
        Orientation::Vertical => 'v',
    };
    format!("{}{}", format_cell(Position::new(wall.row, wall.col)), suffix)
}

/// Parses a wall token such as `c7v`.
pub fn parse_wall(token: &str) -> Result<Wall, NotationError> {
    let chars: Vec<char> = token.chars().collect();
    let (file, rank, suffix) = match chars.as_slice() {
        [] => return Err(NotationError::Empty),
        [file, rank, suffix] => (*file, *rank, *suffix),
        _ => return Err(NotationError::Malformed(token.to_string())),
    };
    let anchor = cell_from_chars(file, rank)?;
    let orientation = match suffix {
        'h' => Orientation::Horizontal,
        'v' => Orientation::Vertical,
        other => return Err(NotationError::UnknownOrientation(other)),
    };
    let wall = Wall::new(anchor.row, anchor.col, orientation);
    if !wall.in_bounds() {
        return Err(NotationError::AnchorOutOfRange(token.to_string()));
    }
    Ok(wall)
}

/// Formats a move as its destination cell or wall token.
pub fn format_move(mv: &Move) -> String {
    match mv {
        Move::Pawn(dest) => format_cell(*dest),
        Move::Wall(wall) => format_wall(*wall),
    }
}

/// Parses a move token: two characters for a pawn destination, three for
/// a wall placement.
pub fn parse_move(token: &str) -> Result<Move, NotationError> {
    match token.chars().count() {
        0 => Err(NotationError::Empty),
        2 => parse_cell(token).map(Move::Pawn),
        3 => parse_wall(token).map(Move::Wall),
        _ => Err(NotationError::Malformed(token.to_string())),
    }
}

fn cell_from_chars(file: char, rank: char) -> Result<Position, NotationError> {
    let col = match file {
        'a'..='i' => file as usize - 'a' as usize,
        other => return Err(NotationError::UnknownFile(other)),
    };
    let row = match rank {
        '1'..='9' => BOARD_SIZE - (rank as usize - '0' as usize),
        other => return Err(NotationError::UnknownRank(other)),
    };
    Ok(Position::new(row, col))
}
