extern crate serde;

use super::Justification;
use serde::{Serialize, Deserialize};

/// Escape byte, prefix of most commands
pub const ESC: u8 = 0x1b;
/// Group separator, prefix of the inverse printing command
pub const GS: u8 = 0x1d;
/// Device control 2, prefix of the density command
pub const DC2: u8 = 0x12;
/// Line feed
pub const LF: u8 = 0x0a;

/// Raw commands understood by the printer firmware
///
/// Each variant knows its exact byte representation, see [as_bytes](Command::as_bytes). Toggle commands carry the target state of the attribute, the [Printer](crate::Printer) is the one that knows which state to ask for.
///
/// ```rust
/// use escpos_serial::command::Command;
///
/// assert_eq!(vec![0x1b, 0x45, 0x01], Command::Bold{on: true}.as_bytes());
/// assert_eq!(vec![0x1d, 0x42, 0x00], Command::Inverse{on: false}.as_bytes());
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Initializes the printer and loads the print head settings. Equivalent to ESC @ ESC 7 n1 n2 n3 DC2 # n
    Initialize {
        /// Max heating dots, in units of 8 dots
        heating_dots: u8,
        /// Heating time, in units of 10us
        heat_time: u8,
        /// Heating interval, in units of 10us
        heat_interval: u8,
        /// Printing density, 50% + 5% * n. Only the low nibble makes it to the printer
        print_density: u8,
        /// Printing break time, n * 250us
        print_break_time: u8
    },
    /// Equivalent to ESC @
    Reset,
    /// Prints the line buffer and feeds one line
    LineFeed,
    /// Emphasized printing, equivalent to ESC E n
    Bold {
        on: bool
    },
    /// Print mode with the smaller font, equivalent to ESC ! n
    FontB {
        on: bool
    },
    /// Equivalent to ESC - n
    Underline {
        on: bool
    },
    /// White on black printing, equivalent to GS B n
    Inverse {
        on: bool
    },
    /// 180 degree rotated printing, equivalent to ESC { n
    UpsideDown {
        on: bool
    },
    /// Equivalent to ESC a n
    Justify {
        justification: Justification
    },
    /// Literal bytes, sent as they are
    Text {
        content: Vec<u8>
    }
}

impl Command {
    /// Byte representation of the command
    pub fn as_bytes(&self) -> Vec<u8> {
        match self {
            Command::Initialize{heating_dots, heat_time, heat_interval, print_density, print_break_time} => vec![
                ESC, b'@',
                ESC, b'7', *heating_dots, *heat_time, *heat_interval,
                DC2, b'#', (*print_density << 4) | *print_break_time
            ],
            Command::Reset => vec![ESC, b'@'],
            Command::LineFeed => vec![LF],
            Command::Bold{on} => vec![ESC, b'E', flag(*on)],
            Command::FontB{on} => vec![ESC, b'!', flag(*on)],
            Command::Underline{on} => vec![ESC, b'-', flag(*on)],
            Command::Inverse{on} => vec![GS, b'B', flag(*on)],
            Command::UpsideDown{on} => vec![ESC, b'{', flag(*on)],
            Command::Justify{justification} => vec![ESC, b'a', justification.code()],
            Command::Text{content} => content.clone()
        }
    }
}

fn flag(on: bool) -> u8 {
    if on {
        0x01
    } else {
        0x00
    }
}
