extern crate serde;

use std::convert::TryFrom;
use serde::{Serialize, Deserialize};
use crate::{
    Error,
    command::Command
};

/// Printing density loaded at initialization, 50% + 5% * 15 = 125%
pub const PRINT_DENSITY: u8 = 15;
/// Printing break time loaded at initialization, 15 * 250us
pub const PRINT_BREAK_TIME: u8 = 15;

/// Print head parameters sent once, when the printer gets initialized
///
/// Higher heat time and interval give darker prints at the cost of speed. The defaults (80, 2, 7) are a safe balance for most paper rolls.
///
/// ```rust
/// use escpos_serial::HeatSettings;
///
/// let settings = HeatSettings::new(120, 2, 7).unwrap();
/// assert_eq!(120, settings.heat_time);
/// // Every value must fit in a single byte
/// assert!(HeatSettings::new(300, 2, 7).is_err());
/// ```
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct HeatSettings {
    /// Heating time, in units of 10us
    pub heat_time: u8,
    /// Heating interval, in units of 10us
    pub heat_interval: u8,
    /// Max heating dots, in units of 8 dots
    pub heating_dots: u8
}

impl Default for HeatSettings {
    fn default() -> HeatSettings {
        HeatSettings {
            heat_time: 80,
            heat_interval: 2,
            heating_dots: 7
        }
    }
}

impl HeatSettings {
    /// Validates and builds the settings from plain integers
    ///
    /// Fails with [InvalidParameter](Error::InvalidParameter) if any value does not fit in a byte.
    pub fn new(heat_time: u32, heat_interval: u32, heating_dots: u32) -> Result<HeatSettings, Error> {
        Ok(HeatSettings {
            heat_time: to_byte("heat_time", heat_time)?,
            heat_interval: to_byte("heat_interval", heat_interval)?,
            heating_dots: to_byte("heating_dots", heating_dots)?
        })
    }

    /// The initialization command carrying these settings
    pub fn command(&self) -> Command {
        Command::Initialize {
            heating_dots: self.heating_dots,
            heat_time: self.heat_time,
            heat_interval: self.heat_interval,
            print_density: PRINT_DENSITY,
            print_break_time: PRINT_BREAK_TIME
        }
    }
}

pub(crate) fn to_byte(name: &'static str, value: u32) -> Result<u8, Error> {
    u8::try_from(value).map_err(|_| Error::invalid(name, value))
}
