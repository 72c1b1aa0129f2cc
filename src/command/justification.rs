extern crate serde;

use crate::Error;
use serde::{Serialize, Deserialize};

/// Horizontal alignment of the printed lines
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Justification {
    Left,
    Center,
    Right
}

impl Default for Justification {
    fn default() -> Justification {
        Justification::Left
    }
}

impl Justification {
    /// Numeric code the printer expects for this justification
    pub fn code(&self) -> u8 {
        match self {
            Justification::Left => 0,
            Justification::Center => 1,
            Justification::Right => 2
        }
    }

    /// Parses the single letter form used in markup (`l`, `c` or `r`)
    ///
    /// ```rust
    /// use escpos_serial::Justification;
    ///
    /// assert_eq!(Justification::Center, Justification::from_symbol('c').unwrap());
    /// assert!(Justification::from_symbol('x').is_err());
    /// ```
    pub fn from_symbol(symbol: char) -> Result<Justification, Error> {
        match symbol {
            'l' => Ok(Justification::Left),
            'c' => Ok(Justification::Center),
            'r' => Ok(Justification::Right),
            other => Err(Error::invalid("justification", format!("{:?}", other)))
        }
    }
}

impl std::convert::TryFrom<char> for Justification {
    type Error = Error;

    fn try_from(symbol: char) -> Result<Justification, Error> {
        Justification::from_symbol(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    #[test]
    fn symbols_map_to_codes() {
        assert_eq!(0, Justification::from_symbol('l').unwrap().code());
        assert_eq!(1, Justification::from_symbol('c').unwrap().code());
        assert_eq!(2, Justification::from_symbol('r').unwrap().code());
    }

    #[test]
    fn unknown_symbols_are_rejected() {
        for symbol in vec!['L', 'x', ' ', '\n'] {
            match Justification::try_from(symbol) {
                Err(Error::InvalidParameter{name, ..}) => assert_eq!("justification", name),
                other => panic!("Unexpected result {:?}", other)
            }
        }
    }

    #[test]
    fn defaults_to_left() {
        assert_eq!(Justification::Left, Justification::default());
    }
}
