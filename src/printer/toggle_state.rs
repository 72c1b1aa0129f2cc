extern crate serde;

use serde::{Serialize, Deserialize};
use crate::command::{Command, StyleTag};

/// Formatting attributes that the printer can only switch on or off
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    Bold,
    FontB,
    Underline,
    Inverse,
    UpsideDown
}

impl Attribute {
    /// The command that sets this attribute to `on`
    pub fn command(&self, on: bool) -> Command {
        match self {
            Attribute::Bold => Command::Bold{on},
            Attribute::FontB => Command::FontB{on},
            Attribute::Underline => Command::Underline{on},
            Attribute::Inverse => Command::Inverse{on},
            Attribute::UpsideDown => Command::UpsideDown{on}
        }
    }

    /// Attribute selected by a markup style, if any
    pub fn from_style(tag: StyleTag) -> Option<Attribute> {
        match tag {
            StyleTag::Bold => Some(Attribute::Bold),
            StyleTag::Underline => Some(Attribute::Underline),
            StyleTag::Inverse => Some(Attribute::Inverse),
            StyleTag::FontB => Some(Attribute::FontB),
            StyleTag::Unknown(_) => None
        }
    }
}

/// What the printer was last told about each toggle attribute
///
/// The protocol has no way to query the printer, so this is the only record of the formatting in effect. It can only change through the toggle methods of the [Printer](crate::Printer).
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToggleState {
    bold: bool,
    font_b: bool,
    underline: bool,
    inverse: bool,
    upside_down: bool
}

impl ToggleState {
    pub fn is_on(&self, attribute: Attribute) -> bool {
        match attribute {
            Attribute::Bold => self.bold,
            Attribute::FontB => self.font_b,
            Attribute::Underline => self.underline,
            Attribute::Inverse => self.inverse,
            Attribute::UpsideDown => self.upside_down
        }
    }

    pub fn bold(&self) -> bool {
        self.bold
    }

    pub fn font_b(&self) -> bool {
        self.font_b
    }

    pub fn underline(&self) -> bool {
        self.underline
    }

    pub fn inverse(&self) -> bool {
        self.inverse
    }

    pub fn upside_down(&self) -> bool {
        self.upside_down
    }

    pub(crate) fn flip(&mut self, attribute: Attribute) {
        let slot = match attribute {
            Attribute::Bold => &mut self.bold,
            Attribute::FontB => &mut self.font_b,
            Attribute::Underline => &mut self.underline,
            Attribute::Inverse => &mut self.inverse,
            Attribute::UpsideDown => &mut self.upside_down
        };
        *slot = !*slot;
    }

    pub(crate) fn clear(&mut self) {
        *self = ToggleState::default();
    }
}
