//! Human-readable report of a comparison.
use crate::triple::Triple;
use num_traits::{PrimInt, Signed};
use std::fmt;
use std::io::{self, Write};

/// A triple and its largest value, computed once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report<T> {
    triple: Triple<T>,
    largest: T,
}

impl<T: PrimInt + Signed + fmt::Display> Report<T> {
    pub fn new(triple: Triple<T>) -> Self {
        Self {
            largest: triple.largest(),
            triple,
        }
    }

    pub fn triple(&self) -> &Triple<T> {
        &self.triple
    }

    pub fn largest(&self) -> T {
        self.largest
    }

    /// Write both report lines, each terminated by a newline.
    ///
    /// A reader that has already gone away is not an error.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        match writeln!(writer, "{self}").and_then(|()| writer.flush()) {
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
            result => result,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Report<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Triple { a, b, c } = &self.triple;
        writeln!(f, "Input numbers: {a}, {b}, {c}")?;
        write!(f, "Largest number: {}", self.largest)
    }
}
