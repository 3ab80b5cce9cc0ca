use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Serialize, Deserialize,
)]
pub struct Square(pub u8);

impl Square {
    #[must_use]
    #[inline(always)]
    pub const fn new(file: u8, rank: u8) -> Self {
        Self(rank * 8 + file)
    }

    #[must_use]
    #[inline(always)]
    pub const fn file(self) -> u8 {
        self.0 & 7
    }

    #[must_use]
    #[inline(always)]
    pub const fn rank(self) -> u8 {
        self.0 >> 3
    }

    #[must_use]
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.file()) as char, self.rank() + 1)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseSquareError;

impl FromStr for Square {
    type Err = ParseSquareError;

    // Coordinate form, e.g. "e4"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseSquareError);
        };
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(ParseSquareError);
        }
        Ok(Square::new(file as u8 - b'a', rank as u8 - b'1'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coords() {
        let sq = Square::new(4, 3);
        assert_eq!(sq.file(), 4);
        assert_eq!(sq.rank(), 3);
        assert_eq!(sq.to_string(), "e4");
    }

    #[test]
    fn parse() {
        assert_eq!("a1".parse(), Ok(Square(0)));
        assert_eq!("h8".parse(), Ok(Square(63)));
        assert_eq!("e4".parse(), Ok(Square::new(4, 3)));
        assert_eq!(Square::from_str("i1"), Err(ParseSquareError));
        assert_eq!(Square::from_str("e9"), Err(ParseSquareError));
        assert_eq!(Square::from_str("e"), Err(ParseSquareError));
    }
}
