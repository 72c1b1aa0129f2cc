extern crate serde;

use std::path::PathBuf;
use serde::{Serialize, Deserialize};
use crate::Error;
use super::{HeatSettings, DEFAULT_SERIAL_PORT, DEFAULT_BAUD_RATE};
use super::heat_settings::to_byte;

/// Available connections with the printer
///
/// Try not to use this enum directly, use the builder pattern instead (using the [serial_builder](PrinterProfile::serial_builder) or [terminal_builder](PrinterProfile::terminal_builder) methods).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum PrinterConnectionData {
    /// Serial connection
    Serial {
        /// Path to the tty device
        path: PathBuf,
        /// Speed of the link, must match the printer's configuration
        baud_rate: u32
    },
    /// Bytes go to the standard output, useful to pipe them somewhere else or to inspect them
    Terminal
}

/// Details required to connect and print
///
/// Stores how to reach the printer, and the print head settings that will be loaded into it on initialization. The structure can be (de)serialized with [serde](https://docs.rs/serde), so it is possible to keep it in a configuration file.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PrinterProfile {
    /// Existing connection to the printer
    pub (crate) printer_connection_data: PrinterConnectionData,
    /// Print head parameters
    #[serde(default)]
    pub (crate) heat_settings: HeatSettings
}

impl PrinterProfile {
    /// Create custom printing details
    ///
    /// See one of the builders for a more readable alternative.
    pub fn new(printer_connection_data: PrinterConnectionData, heat_settings: HeatSettings) -> PrinterProfile {
        PrinterProfile {
            printer_connection_data,
            heat_settings
        }
    }

    /// Creates a [PrinterProfileBuilder](crate::PrinterProfileBuilder) set for serial printing.
    ///
    /// Equivalent to a call to [PrinterProfileBuilder](crate::PrinterProfileBuilder)'s [new_serial](crate::PrinterProfileBuilder::new_serial) function.
    /// ```rust
    /// use escpos_serial::PrinterProfile;
    /// let printer_profile = PrinterProfile::serial_builder("/dev/ttyUSB0").build();
    /// ```
    pub fn serial_builder<P: Into<PathBuf>>(path: P) -> PrinterProfileBuilder {
        PrinterProfileBuilder::new_serial(path)
    }

    /// Creates a [PrinterProfileBuilder](crate::PrinterProfileBuilder) set for terminal printing
    ///
    /// ```rust
    /// use escpos_serial::PrinterProfile;
    /// let printer_profile = PrinterProfile::terminal_builder().build();
    /// ```
    pub fn terminal_builder() -> PrinterProfileBuilder {
        PrinterProfileBuilder::new_terminal()
    }

    pub fn connection_data(&self) -> &PrinterConnectionData {
        &self.printer_connection_data
    }

    pub fn heat_settings(&self) -> HeatSettings {
        self.heat_settings
    }
}

impl Default for PrinterProfile {
    /// Serial printer at `/dev/ttyO2`, 19200 baud, default heat settings
    fn default() -> PrinterProfile {
        PrinterProfileBuilder::new_serial(DEFAULT_SERIAL_PORT).build()
    }
}

/// Helper structure to create a [PrinterProfile](crate::PrinterProfile)
#[derive(Debug)]
pub struct PrinterProfileBuilder {
    /// The connection to the printer
    printer_connection_data: PrinterConnectionData,
    /// Heat parameters, defaulting to 80/2/7
    heat_settings: HeatSettings
}

impl PrinterProfileBuilder {
    /// Creates a new [PrinterProfileBuilder](crate::PrinterProfileBuilder) set for serial printing, at 19200 baud
    pub fn new_serial<P: Into<PathBuf>>(path: P) -> PrinterProfileBuilder {
        PrinterProfileBuilder {
            printer_connection_data: PrinterConnectionData::Serial {
                path: path.into(),
                baud_rate: DEFAULT_BAUD_RATE
            },
            heat_settings: HeatSettings::default()
        }
    }

    /// Creates a new [PrinterProfileBuilder](crate::PrinterProfileBuilder) set for terminal printing
    pub fn new_terminal() -> PrinterProfileBuilder {
        PrinterProfileBuilder {
            printer_connection_data: PrinterConnectionData::Terminal,
            heat_settings: HeatSettings::default()
        }
    }

    /// Sets the speed of the serial link (serial only)
    ///
    /// ```rust
    /// use escpos_serial::PrinterProfileBuilder;
    /// let printer_profile = PrinterProfileBuilder::new_serial("/dev/ttyUSB0")
    ///     .with_baud_rate(9600).unwrap()
    ///     .build();
    /// ```
    pub fn with_baud_rate(mut self, baud_rate: u32) -> Result<PrinterProfileBuilder, Error> {
        match &mut self.printer_connection_data {
            PrinterConnectionData::Serial{baud_rate: self_baud_rate, ..} => {
                *self_baud_rate = baud_rate;
                Ok(self)
            },
            _other => Err(Error::invalid("baud_rate", "not supported by the terminal connection"))
        }
    }

    /// Sets the heating time, in units of 10us. Must fit in a byte.
    ///
    /// ```rust
    /// use escpos_serial::PrinterProfileBuilder;
    /// assert!(PrinterProfileBuilder::new_terminal().with_heat_time(120).is_ok());
    /// assert!(PrinterProfileBuilder::new_terminal().with_heat_time(300).is_err());
    /// ```
    pub fn with_heat_time(mut self, heat_time: u32) -> Result<PrinterProfileBuilder, Error> {
        self.heat_settings.heat_time = to_byte("heat_time", heat_time)?;
        Ok(self)
    }

    /// Sets the heating interval, in units of 10us. Must fit in a byte.
    pub fn with_heat_interval(mut self, heat_interval: u32) -> Result<PrinterProfileBuilder, Error> {
        self.heat_settings.heat_interval = to_byte("heat_interval", heat_interval)?;
        Ok(self)
    }

    /// Sets the max heating dots, in units of 8 dots. Must fit in a byte.
    pub fn with_heating_dots(mut self, heating_dots: u32) -> Result<PrinterProfileBuilder, Error> {
        self.heat_settings.heating_dots = to_byte("heating_dots", heating_dots)?;
        Ok(self)
    }

    /// Build the `PrinterProfile` that lies beneath the builder
    pub fn build(self) -> PrinterProfile {
        PrinterProfile {
            printer_connection_data: self.printer_connection_data,
            heat_settings: self.heat_settings
        }
    }
}
