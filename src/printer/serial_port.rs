use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use log::info;
use crate::Error;

/// Serial device the printer is usually wired to
pub const DEFAULT_SERIAL_PORT: &str = "/dev/ttyO2";
/// Baud rate of the printer firmware out of the box
pub const DEFAULT_BAUD_RATE: u32 = 19200;

/// Write-only serial connection to the printer
///
/// The device gets configured in raw mode (8 data bits, no parity, no flow control, no output processing), so that the escape sequences reach the printer untouched.
///
/// ```rust,no_run
/// use escpos_serial::{Printer, SerialPort};
///
/// let port = SerialPort::open("/dev/ttyUSB0", 19200)?;
/// let mut printer = Printer::with_defaults(port)?;
/// printer.print_text("Hello!\n")?;
/// # Ok::<(), escpos_serial::Error>(())
/// ```
#[derive(Debug)]
pub struct SerialPort {
    file: File
}

impl SerialPort {
    /// Opens the device at the given baud rate
    ///
    /// Only the standard rates 9600, 19200, 38400, 57600 and 115200 are accepted.
    pub fn open<P: AsRef<Path>>(path: P, baud_rate: u32) -> Result<SerialPort, Error> {
        let speed = speed_for(baud_rate)?;
        let path = path.as_ref();
        let file = OpenOptions::new().write(true).open(path)?;
        configure_tty_raw(&file, speed)?;
        info!("Opened serial printer at {} ({} baud)", path.display(), baud_rate);
        Ok(SerialPort{file})
    }
}

impl Write for SerialPort {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

#[cfg(unix)]
fn speed_for(baud_rate: u32) -> Result<libc::speed_t, Error> {
    match baud_rate {
        9600 => Ok(libc::B9600),
        19200 => Ok(libc::B19200),
        38400 => Ok(libc::B38400),
        57600 => Ok(libc::B57600),
        115200 => Ok(libc::B115200),
        other => Err(Error::invalid("baud_rate", other))
    }
}

#[cfg(not(unix))]
fn speed_for(baud_rate: u32) -> Result<u32, Error> {
    match baud_rate {
        9600 | 19200 | 38400 | 57600 | 115200 => Ok(baud_rate),
        other => Err(Error::invalid("baud_rate", other))
    }
}

#[cfg(unix)]
fn configure_tty_raw(file: &File, speed: libc::speed_t) -> Result<(), Error> {
    use std::mem::MaybeUninit;
    use std::os::unix::io::AsRawFd;

    let fd = file.as_raw_fd();
    let mut termios = MaybeUninit::uninit();
    if unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) } != 0 {
        return Err(io::Error::last_os_error().into());
    }
    let mut termios = unsafe { termios.assume_init() };

    // 0x11 and 0x13 are valid parameter bytes, XON/XOFF must stay off
    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);
    termios.c_oflag &= !libc::OPOST;
    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);
    termios.c_cflag &= !(libc::CSIZE | libc::PARENB | libc::CSTOPB);
    termios.c_cflag |= libc::CS8 | libc::CLOCAL;

    unsafe {
        if libc::cfsetospeed(&mut termios, speed) != 0 || libc::cfsetispeed(&mut termios, speed) != 0 {
            return Err(io::Error::last_os_error().into());
        }
        if libc::tcsetattr(fd, libc::TCSANOW, &termios) != 0 {
            return Err(io::Error::last_os_error().into());
        }
    }
    Ok(())
}

#[cfg(not(unix))]
fn configure_tty_raw(_file: &File, _speed: u32) -> Result<(), Error> {
    Ok(())
}
