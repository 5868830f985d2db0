//! CSV writer.
use std::io::Write;

use serde::Serialize;

use crate::error::Error;

use super::WriterTrait;

/// Writes serializable rows to CSV, with a header row taken from field names.
pub struct CsvWriter<W: Write, T> {
    handle: csv::Writer<W>,
    _item: std::marker::PhantomData<T>,
}

impl<W: Write, T> CsvWriter<W, T> {
    pub fn new(handle: W) -> Self {
        Self {
            handle: csv::WriterBuilder::new().from_writer(handle),
            _item: std::marker::PhantomData,
        }
    }

    /// Flush and return the inner writer.
    pub fn into_inner(self) -> Result<W, Error> {
        self.handle
            .into_inner()
            .map_err(|e| Error::Io(e.into_error()))
    }
}

impl<W: Write, T: Serialize> WriterTrait for CsvWriter<W, T> {
    type Item = T;

    fn write_single(&mut self, val: &T) -> Result<(), Error> {
        Ok(self.handle.serialize(val)?)
    }

    fn flush(&mut self) -> Result<(), Error> {
        Ok(self.handle.flush()?)
    }
}
