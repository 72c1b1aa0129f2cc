pub use self::printer_profile::{PrinterProfile, PrinterConnectionData, PrinterProfileBuilder};
pub use self::heat_settings::{HeatSettings, PRINT_DENSITY, PRINT_BREAK_TIME};
pub use self::toggle_state::{ToggleState, Attribute};
pub use self::sink::Sink;
pub use self::serial_port::{SerialPort, DEFAULT_SERIAL_PORT, DEFAULT_BAUD_RATE};

mod printer_profile;
mod heat_settings;
mod toggle_state;
mod sink;
mod serial_port;

use crate::{
    Error,
    command::{Command, Justification, StyleTag},
    markup::{self, MarkupLine, MarkupReport, SkippedLine}
};

extern crate codepage_437;
extern crate log;

use std::io::Write;
use log::{debug, info, trace, warn};
use codepage_437::{IntoCp437, CP437_CONTROL};

/// Keeps the actual living connection to the device
///
/// Built by [Printer::new](Printer::new) from the [PrinterConnectionData](crate::PrinterConnectionData) of a profile.
#[derive(Debug)]
pub enum PrinterConnection {
    Serial(SerialPort),
    Terminal(std::io::Stdout)
}

impl Write for PrinterConnection {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            PrinterConnection::Serial(port) => port.write(buf),
            PrinterConnection::Terminal(stdout) => stdout.write(buf)
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            PrinterConnection::Serial(port) => port.flush(),
            PrinterConnection::Terminal(stdout) => stdout.flush()
        }
    }
}

/// Main escpos-serial structure
///
/// The printer represents one session with the thermal printer: it owns the connection (any [Sink](crate::Sink)), and remembers which toggle attributes are currently on. Creating it initializes the printer, so bytes are already written when the constructor returns.
///
/// ```rust
/// use escpos_serial::{Printer, Justification};
///
/// // A vector is enough to see what would reach the printer
/// let mut printer = Printer::with_defaults(Vec::new())?;
/// printer.justify(Justification::Center)?;
/// printer.toggle_bold()?;
/// printer.print("Hello!")?;
/// printer.toggle_bold()?;
/// printer.linefeed()?;
/// assert!(printer.sink().ends_with(b"\x1bE\x01Hello!\x1bE\x00\n"));
/// # Ok::<(), escpos_serial::Error>(())
/// ```
///
/// Every method writes synchronously and reports transport failures as they come, nothing is retried. A failed toggle leaves the [ToggleState](crate::ToggleState) untouched, so it keeps describing what the printer was last told successfully.
#[derive(Debug)]
pub struct Printer<S: Sink> {
    /// Where the bytes go
    sink: S,
    /// Believed state of the toggle attributes
    state: ToggleState
}

impl Printer<PrinterConnection> {
    /// Creates a new printer from a profile
    ///
    /// Opens the connection described in the profile, and initializes the printer with the profile's heat settings.
    /// ```rust,no_run
    /// use escpos_serial::{Printer, PrinterProfile};
    ///
    /// let printer_profile = PrinterProfile::serial_builder("/dev/ttyUSB0")
    ///     .with_heat_time(120)?
    ///     .build();
    /// let mut printer = Printer::new(printer_profile)?;
    /// printer.print_markup("bc:Receipt\n l:Nothing to see here\n")?;
    /// # Ok::<(), escpos_serial::Error>(())
    /// ```
    pub fn new(printer_profile: PrinterProfile) -> Result<Printer<PrinterConnection>, Error> {
        let connection = match &printer_profile.printer_connection_data {
            PrinterConnectionData::Serial{path, baud_rate} => PrinterConnection::Serial(SerialPort::open(path, *baud_rate)?),
            PrinterConnectionData::Terminal => PrinterConnection::Terminal(std::io::stdout())
        };
        Printer::with_sink(connection, printer_profile.heat_settings)
    }
}

impl<S: Sink> Printer<S> {
    /// Creates a printer on top of a sink, and initializes it
    pub fn with_sink(sink: S, heat_settings: HeatSettings) -> Result<Printer<S>, Error> {
        let mut printer = Printer {
            sink,
            state: ToggleState::default()
        };
        printer.send(&heat_settings.command())?;
        info!(
            "Printer initialized (heat time {}, heat interval {}, heating dots {})",
            heat_settings.heat_time, heat_settings.heat_interval, heat_settings.heating_dots
        );
        Ok(printer)
    }

    /// Creates a printer with the default heat settings (80, 2, 7)
    pub fn with_defaults(sink: S) -> Result<Printer<S>, Error> {
        Printer::with_sink(sink, HeatSettings::default())
    }

    /// Creates a printer from plain integer heat settings
    ///
    /// If any of the values does not fit in a byte, nothing gets written to the sink.
    /// ```rust
    /// use escpos_serial::Printer;
    ///
    /// assert!(Printer::create(Vec::new(), 300, 2, 7).is_err());
    /// ```
    pub fn create(sink: S, heat_time: u32, heat_interval: u32, heating_dots: u32) -> Result<Printer<S>, Error> {
        let heat_settings = HeatSettings::new(heat_time, heat_interval, heating_dots)?;
        Printer::with_sink(sink, heat_settings)
    }

    /// Sends the reset command (ESC @)
    ///
    /// The toggle state is kept as it is, even though the printer drops its formatting on reset. Use [reset_and_clear](Printer::reset_and_clear) to forget it as well.
    pub fn reset(&mut self) -> Result<(), Error> {
        self.send(&Command::Reset)
    }

    /// Sends the reset command and marks every toggle attribute as off
    ///
    /// Useful to get the printer and the toggle state back in line after a failed write.
    pub fn reset_and_clear(&mut self) -> Result<(), Error> {
        self.send(&Command::Reset)?;
        self.state.clear();
        Ok(())
    }

    /// Feeds one line
    pub fn linefeed(&mut self) -> Result<(), Error> {
        self.send(&Command::LineFeed)
    }

    /// Switches an attribute to the opposite of its current state
    pub fn toggle(&mut self, attribute: Attribute) -> Result<(), Error> {
        let on = !self.state.is_on(attribute);
        self.send(&attribute.command(on))?;
        self.state.flip(attribute);
        Ok(())
    }

    pub fn toggle_bold(&mut self) -> Result<(), Error> {
        self.toggle(Attribute::Bold)
    }

    pub fn toggle_font_b(&mut self) -> Result<(), Error> {
        self.toggle(Attribute::FontB)
    }

    pub fn toggle_underline(&mut self) -> Result<(), Error> {
        self.toggle(Attribute::Underline)
    }

    pub fn toggle_inverse(&mut self) -> Result<(), Error> {
        self.toggle(Attribute::Inverse)
    }

    pub fn toggle_upside_down(&mut self) -> Result<(), Error> {
        self.toggle(Attribute::UpsideDown)
    }

    /// Prints the bytes as they are
    ///
    /// There is no escaping, control bytes in the content will be interpreted by the printer.
    pub fn print<A: AsRef<[u8]>>(&mut self, content: A) -> Result<(), Error> {
        self.send(&Command::Text{content: content.as_ref().to_vec()})
    }

    /// Print some text, encoded in code page 437
    ///
    /// Control characters (like the line feed) are kept. If a character has no place in the code page, nothing is printed.
    pub fn print_text<T: Into<String>>(&mut self, content: T) -> Result<(), Error> {
        let feed = content.into().into_cp437(&CP437_CONTROL).map_err(|e| Error::Encoding(e.into_string()))?;
        self.print(feed)
    }

    /// Print some text, with a newline at the end.
    pub fn println<T: Into<String>>(&mut self, content: T) -> Result<(), Error> {
        let feed = content.into() + "\n";
        self.print_text(feed)
    }

    /// Toggles the attribute selected by the style
    ///
    /// [Unknown](StyleTag::Unknown) styles do nothing, and are not an error.
    pub fn style(&mut self, tag: StyleTag) -> Result<(), Error> {
        match Attribute::from_style(tag) {
            Some(attribute) => self.toggle(attribute),
            None => {
                trace!("Ignoring style {:?}", tag);
                Ok(())
            }
        }
    }

    /// Runs `body` with the style applied
    ///
    /// The style gets toggled before `body`, and toggled back after it, even if `body` fails. The error of `body` takes precedence over the one of the second toggle.
    /// ```rust
    /// use escpos_serial::{Printer, command::StyleTag};
    ///
    /// let mut printer = Printer::with_defaults(Vec::new())?;
    /// printer.with_style(StyleTag::Underline, |printer| printer.print("underlined"))?;
    /// assert!(!printer.state().underline());
    /// # Ok::<(), escpos_serial::Error>(())
    /// ```
    pub fn with_style<T, F>(&mut self, tag: StyleTag, body: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Printer<S>) -> Result<T, Error>
    {
        self.style(tag)?;
        let result = body(self);
        let release = self.style(tag);
        let value = result?;
        release?;
        Ok(value)
    }

    /// Sets the justification for the following lines
    pub fn justify(&mut self, justification: Justification) -> Result<(), Error> {
        self.send(&Command::Justify{justification})
    }

    /// Sets the justification from its markup letter (`l`, `c` or `r`)
    ///
    /// Unknown letters are rejected before writing anything.
    pub fn justify_symbol(&mut self, symbol: char) -> Result<(), Error> {
        let justification = Justification::from_symbol(symbol)?;
        self.justify(justification)
    }

    /// Prints a markup document
    ///
    /// Each line is justified, and its content printed with the line's style turned on, then off again. See the [markup](crate::markup) module for the line format.
    ///
    /// Lines that cannot be parsed are skipped (nothing of them is sent) and listed in the returned report, the rest of the document still gets printed. A transport error stops the whole document.
    ///
    /// The toggle state is shared with the rest of the session: if bold was on before calling this function, bold lines will come out as regular text.
    /// ```rust
    /// use escpos_serial::Printer;
    ///
    /// let mut printer = Printer::with_defaults(Vec::new())?;
    /// let report = printer.print_markup("bc:TITLE\n\n l:Some text\n")?;
    /// assert_eq!(2, report.printed);
    /// assert_eq!(2, report.skipped[0].line_number);
    /// # Ok::<(), escpos_serial::Error>(())
    /// ```
    pub fn print_markup<A: AsRef<[u8]>>(&mut self, document: A) -> Result<MarkupReport, Error> {
        let mut report = MarkupReport::default();
        for (index, line) in markup::lines(document.as_ref()).enumerate() {
            let parsed = match MarkupLine::parse(line) {
                Ok(parsed) => parsed,
                Err(error) => {
                    warn!("Skipping markup line {}: {}", index + 1, error);
                    report.skipped.push(SkippedLine {
                        line_number: index + 1,
                        error
                    });
                    continue;
                }
            };
            self.justify(parsed.justification)?;
            self.with_style(parsed.style, |printer| printer.print(parsed.content))?;
            report.printed += 1;
        }
        Ok(report)
    }

    /// Sends raw information to the printer
    ///
    /// As simple as it sounds. The toggle state does not see these bytes.
    /// ```rust
    /// use escpos_serial::Printer;
    /// let mut printer = Printer::with_defaults(Vec::new())?;
    /// printer.raw(&[0x01, 0x02])?;
    /// # Ok::<(), escpos_serial::Error>(())
    /// ```
    pub fn raw<A: AsRef<[u8]>>(&mut self, bytes: A) -> Result<(), Error> {
        let bytes = bytes.as_ref();
        debug!("Writing {} bytes", bytes.len());
        self.sink.write_bytes(bytes)?;
        Ok(())
    }

    /// Believed state of the toggle attributes
    pub fn state(&self) -> &ToggleState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Ends the session, giving back the sink
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn send(&mut self, command: &Command) -> Result<(), Error> {
        self.raw(command.as_bytes())
    }
}
