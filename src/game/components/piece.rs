//! Piece identities
//!
//! A piece on the board is identified by a name of the form
//! `<kind>_<color>`, for example `knight_white` or `pawn_black`. The name is
//! kept verbatim so that boards fed in from elsewhere may carry kinds this
//! crate does not know about; such pieces still move and undo like any other,
//! they simply have no notation symbol.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    pub fn opponent(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceColor::White => "white",
            PieceColor::Black => "black",
        }
    }

    /// Colour to move for a clock's `is_white_turn` flag
    pub fn from_white_turn(is_white_turn: bool) -> Self {
        if is_white_turn {
            PieceColor::White
        } else {
            PieceColor::Black
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PieceColor::White => "White",
            PieceColor::Black => "Black",
        })
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PieceType {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "king" => Some(PieceType::King),
            "queen" => Some(PieceType::Queen),
            "bishop" => Some(PieceType::Bishop),
            "knight" => Some(PieceType::Knight),
            "rook" => Some(PieceType::Rook),
            "pawn" => Some(PieceType::Pawn),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceType::King => "king",
            PieceType::Queen => "queen",
            PieceType::Bishop => "bishop",
            PieceType::Knight => "knight",
            PieceType::Rook => "rook",
            PieceType::Pawn => "pawn",
        }
    }

    /// Notation prefix; pawns have none
    pub fn symbol(self) -> Option<char> {
        match self {
            PieceType::King => Some('K'),
            PieceType::Queen => Some('Q'),
            PieceType::Rook => Some('R'),
            PieceType::Bishop => Some('B'),
            PieceType::Knight => Some('N'),
            PieceType::Pawn => None,
        }
    }
}

/// Identity of a piece, e.g. `queen_black`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PieceId(String);

impl PieceId {
    pub fn new(kind: PieceType, color: PieceColor) -> Self {
        PieceId(format!("{}_{}", kind.name(), color.name()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Kind named before the underscore, `None` for unknown kinds
    pub fn kind(&self) -> Option<PieceType> {
        let name = self.0.split('_').next().unwrap_or_default();
        PieceType::from_name(name)
    }

    pub fn color(&self) -> Option<PieceColor> {
        match self.0.rsplit_once('_').map(|(_, color)| color) {
            Some("white") => Some(PieceColor::White),
            Some("black") => Some(PieceColor::Black),
            _ => None,
        }
    }
}

impl From<&str> for PieceId {
    fn from(name: &str) -> Self {
        PieceId(name.to_string())
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
