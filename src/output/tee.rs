//! Writer that duplicates output to two sinks

use std::io::{self, Write};

use termcolor::{ColorSpec, WriteColor};

/// Sends every byte to both `primary` and `secondary`.
///
/// Color changes only reach `secondary`, so a plain file can be the primary
/// sink while a terminal gets the colored copy.
pub struct Tee<A, B> {
    primary: A,
    secondary: B,
}

impl<A, B> Tee<A, B> {
    pub fn new(primary: A, secondary: B) -> Self {
        Self { primary, secondary }
    }

    pub fn into_inner(self) -> (A, B) {
        (self.primary, self.secondary)
    }
}

impl<A: Write, B: Write> Write for Tee<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.primary.write_all(buf)?;
        self.secondary.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.primary.flush()?;
        self.secondary.flush()
    }
}

impl<A: Write, B: WriteColor> WriteColor for Tee<A, B> {
    fn supports_color(&self) -> bool {
        self.secondary.supports_color()
    }

    fn set_color(&mut self, spec: &ColorSpec) -> io::Result<()> {
        self.secondary.set_color(spec)
    }

    fn reset(&mut self) -> io::Result<()> {
        self.secondary.reset()
    }
}
