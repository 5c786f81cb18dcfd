//! Square identifiers and board coordinates
//!
//! Squares arrive from the outside world as two-character strings such as
//! `"e4"`: a file letter `a`-`h` followed by a rank digit `1`-`8`. Internally
//! they are addressed as zero-based `(file, rank)` pairs, so `a1` is `(0, 0)`,
//! `e4` is `(4, 3)` and `h8` is `(7, 7)`.
//!
//! Newtypes keep files and ranks from being swapped by accident. Anything
//! outside the board is rejected with [`GameError::InvalidSquare`] instead of
//! producing an out-of-range index.

use std::fmt;
use std::str::FromStr;

use super::error::{GameError, GameResult};

/// Board file (column), 0 = file 'a' through 7 = file 'h'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct File(u8);

impl File {
    /// Create a file from a character ('a'..='h')
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='h' => Some(File(c as u8 - b'a')),
            _ => None,
        }
    }

    /// Convert file to character ('a'..='h')
    pub fn to_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// Get the file index (0-7)
    pub fn index(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for File {
    type Error = GameError;

    fn try_from(value: u8) -> GameResult<Self> {
        if value < 8 {
            Ok(File(value))
        } else {
            Err(GameError::InvalidSquare {
                square: format!("file index {value}"),
            })
        }
    }
}

/// Board rank (row), 0 = rank 1 through 7 = rank 8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank(u8);

impl Rank {
    /// Create a rank from its printed number (1-8)
    pub fn from_number(n: u8) -> Option<Self> {
        if (1..=8).contains(&n) {
            Some(Rank(n - 1))
        } else {
            None
        }
    }

    /// Convert rank to its printed number (1-8)
    pub fn to_number(self) -> u8 {
        self.0 + 1
    }

    /// Get the rank index (0-7)
    pub fn index(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rank {
    type Error = GameError;

    fn try_from(value: u8) -> GameResult<Self> {
        if value < 8 {
            Ok(Rank(value))
        } else {
            Err(GameError::InvalidSquare {
                square: format!("rank index {value}"),
            })
        }
    }
}

/// A square on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub file: File,
    pub rank: Rank,
}

impl Square {
    /// Create a square from zero-based file and rank indices
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidSquare`] if either index is 8 or more.
    pub fn new(file: u8, rank: u8) -> GameResult<Self> {
        Ok(Square {
            file: File::try_from(file)?,
            rank: Rank::try_from(rank)?,
        })
    }

    /// Parse a square identifier such as `"e4"`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cheesse::game::types::Square;
    ///
    /// let square = Square::from_algebraic("e4").unwrap();
    /// assert_eq!(square.coords(), (4, 3));
    /// assert!(Square::from_algebraic("z9").is_err());
    /// ```
    pub fn from_algebraic(s: &str) -> GameResult<Self> {
        let invalid = || GameError::InvalidSquare {
            square: s.to_string(),
        };

        let mut chars = s.chars();
        let file_char = chars.next().ok_or_else(invalid)?;
        let rank_char = chars.next().ok_or_else(invalid)?;
        if chars.next().is_some() {
            return Err(invalid());
        }

        let rank_num = rank_char.to_digit(10).ok_or_else(invalid)? as u8;

        Ok(Square {
            file: File::from_char(file_char).ok_or_else(invalid)?,
            rank: Rank::from_number(rank_num).ok_or_else(invalid)?,
        })
    }

    /// Convert square to its identifier (e.g., "e4")
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file.to_char(), self.rank.to_number())
    }

    /// Grid coordinates `(x, y)` used to address the 8x8 board array
    pub fn coords(self) -> (u8, u8) {
        (self.file.index(), self.rank.index())
    }

    /// Iterate all 64 squares, rank by rank from a1
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| {
            (0..8u8).map(move |file| Square {
                file: File(file),
                rank: Rank(rank),
            })
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file.to_char(), self.rank.to_number())
    }
}

impl FromStr for Square {
    type Err = GameError;

    fn from_str(s: &str) -> GameResult<Self> {
        Square::from_algebraic(s)
    }
}
