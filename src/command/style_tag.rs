extern crate serde;

use serde::{Serialize, Deserialize};

/// Style selector of a markup line
///
/// Anything that is not one of the known letters becomes [Unknown](StyleTag::Unknown), and printing with an unknown style leaves the formatting alone. That is how plain lines are written in markup, usually with a space as the style character.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleTag {
    /// `b`
    Bold,
    /// `u`
    Underline,
    /// `i`
    Inverse,
    /// `f`
    FontB,
    /// Any other byte. Dispatching it does nothing
    Unknown(u8)
}

impl From<u8> for StyleTag {
    fn from(byte: u8) -> StyleTag {
        match byte {
            b'b' => StyleTag::Bold,
            b'u' => StyleTag::Underline,
            b'i' => StyleTag::Inverse,
            b'f' => StyleTag::FontB,
            other => StyleTag::Unknown(other)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_letters() {
        assert_eq!(StyleTag::Bold, StyleTag::from(b'b'));
        assert_eq!(StyleTag::Underline, StyleTag::from(b'u'));
        assert_eq!(StyleTag::Inverse, StyleTag::from(b'i'));
        assert_eq!(StyleTag::FontB, StyleTag::from(b'f'));
    }

    #[test]
    fn everything_else_is_unknown() {
        assert_eq!(StyleTag::Unknown(b' '), StyleTag::from(b' '));
        assert_eq!(StyleTag::Unknown(b'B'), StyleTag::from(b'B'));
        assert_eq!(StyleTag::Unknown(0xc3), StyleTag::from(0xc3));
    }
}
