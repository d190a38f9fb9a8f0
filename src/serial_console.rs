use core::fmt;

use embedded_io::Write;

/// Adapts a byte-oriented serial writer (e.g. a UART) to [`fmt::Write`].
///
/// Diagnostic lines are formatted straight onto the wire.
pub struct SerialConsole<W> {
    inner: W,
}

impl<W: Write> SerialConsole<W> {
    #[must_use]
    pub const fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Hand back the underlying writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> fmt::Write for SerialConsole<W> {
    fn write_str(&mut self, text: &str) -> fmt::Result {
        self.inner
            .write_all(text.as_bytes())
            .map_err(|_| fmt::Error)
    }
}
