//! Library for driving serial esc/pos thermal printers with rust
//!
//! The printer is reached through a serial line, and is controlled with escape sequences. This crate knows the exact bytes of each command, and keeps track of the formatting attributes that the protocol can only switch on and off (bold, font B, underline, inverse and upside down printing).
//!
//! ```rust,no_run
//! use escpos_serial::{Printer, PrinterProfile};
//!
//! // Serial printer at /dev/ttyO2, 19200 baud, default heat settings
//! let mut printer = Printer::new(PrinterProfile::default())?;
//! printer.toggle_bold()?;
//! printer.println("Hello, world!")?;
//! printer.toggle_bold()?;
//! # Ok::<(), escpos_serial::Error>(())
//! ```
//!
//! ## Printer Details
//!
//! The [PrinterProfile](crate::PrinterProfile) structure tells the library where the printer is and how hot the print head should run. Heat time, heat interval and heating dots are loaded into the printer when the [Printer](crate::Printer) gets created, which also means that creating a printer already writes to it.
//!
//! Any [Write](std::io::Write) implementor can stand in for the printer (see [Sink](crate::Sink)), which is handy to look at the bytes:
//!
//! ```rust
//! use escpos_serial::Printer;
//!
//! let mut printer = Printer::with_defaults(Vec::new())?;
//! printer.toggle_underline()?;
//! assert!(printer.sink().ends_with(&[0x1b, b'-', 0x01]));
//! printer.toggle_underline()?;
//! assert!(printer.sink().ends_with(&[0x1b, b'-', 0x00]));
//! # Ok::<(), escpos_serial::Error>(())
//! ```
//!
//! ### Markup
//!
//! Short documents can be written in a line oriented markup, where the first character of each line selects a style, the second one the justification, and the content starts at the fourth character. See the [markup](crate::markup) module.
//!
//! ```rust
//! use escpos_serial::Printer;
//!
//! let mut printer = Printer::with_defaults(Vec::new())?;
//! let report = printer.print_markup("bc:THE DINER\n l:1 coffee\nur:Total 2.50\n")?;
//! assert!(report.is_complete());
//! # Ok::<(), escpos_serial::Error>(())
//! ```

pub use printer::{
    Printer, PrinterConnection, PrinterProfile, PrinterProfileBuilder, PrinterConnectionData,
    HeatSettings, ToggleState, Attribute, Sink, SerialPort,
    DEFAULT_SERIAL_PORT, DEFAULT_BAUD_RATE, PRINT_DENSITY, PRINT_BREAK_TIME
};
pub use command::{Justification, StyleTag};
pub use markup::{MarkupLine, MarkupReport, SkippedLine};
pub use error::Error;

/// Contains raw esc/pos commands
pub mod command;
pub mod markup;

mod printer;
mod error;
