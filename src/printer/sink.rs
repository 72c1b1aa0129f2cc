use std::io::Write;

/// Destination of the bytes produced by a [Printer](crate::Printer)
///
/// A sink only has to take bytes, synchronously. Every [Write](std::io::Write) implementor is a sink already (the bytes get written and flushed), so a `Vec<u8>` works for capturing output and a [SerialPort](crate::SerialPort) for actual printing.
pub trait Sink {
    /// Writes all the bytes, or fails
    fn write_bytes(&mut self, bytes: &[u8]) -> std::io::Result<()>;
}

impl<W: Write> Sink for W {
    fn write_bytes(&mut self, bytes: &[u8]) -> std::io::Result<()> {
        self.write_all(bytes)?;
        self.flush()
    }
}
