use std::io::{ErrorKind, Read, Write};

use jpegscan_common::read::ReadExt;
use jpegscan_common::utils::U64Ext;

use super::*;

/// A marker as found in the stream
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkerRecord {
    marker: Marker,
    offset: u64,
    size: u16,
}

impl MarkerRecord {
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Number of bytes consumed up to and including the marker code
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Position of the `0xFF` byte that opened the marker
    pub fn pos(&self) -> u64 {
        // A record always follows a 0xFF byte and its code byte
        self.offset.saturating_sub(2)
    }

    /// Value of the length field, zero for SOI and EOI
    pub fn size(&self) -> u16 {
        self.size
    }
}

/// Single pass marker scanner
///
/// Reads the stream byte by byte, entropy coded data included. A `0xFF`
/// followed by `0x00` is a stuffed data byte, and `0xFF 0xFF` is fill.
pub struct Scanner<R> {
    reader: R,
    offset: u64,
    previous: u8,
    records: Vec<MarkerRecord>,
}

impl<R: Read> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            offset: 0,
            previous: 0,
            records: Vec::new(),
        }
    }

    /// Number of bytes consumed so far
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Markers found so far in their order of appearance
    pub fn records(&self) -> &[MarkerRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<MarkerRecord> {
        self.records
    }

    /// Scan until the end of the stream
    ///
    /// Decoded scan headers are written to `inline` as soon as they are
    /// found. On error, the markers found before stay available via
    /// [`Self::records`].
    pub fn run<W: Write>(&mut self, inline: &mut W) -> Result<(), Error> {
        while let Some(byte) = self.reader.next_byte()? {
            self.offset = self.offset.safe_add(1)?;

            if self.previous == MARKER_START && byte != MARKER_START && byte != 0x00 {
                self.marker(byte, inline)?;
            }

            self.previous = byte;
        }

        tracing::debug!(
            "Stream ended after {} bytes with {} markers",
            self.offset,
            self.records.len()
        );

        Ok(())
    }

    fn marker<W: Write>(&mut self, code: u8, inline: &mut W) -> Result<(), Error> {
        let marker = Marker::from(code);
        let offset = self.offset;

        let mut size = 0;
        if marker.has_length() {
            size = self.reader.read_be_u16().map_err(|err| match err.kind() {
                ErrorKind::UnexpectedEof => Error::TruncatedLength(code),
                _ => Error::Io(err),
            })?;
            self.offset = self.offset.safe_add(2)?;
        }

        let record = MarkerRecord {
            marker,
            offset,
            size,
        };
        tracing::debug!("Found {marker} at {} with size {size}", record.pos());
        self.records.push(record);

        if marker == Marker::SOS {
            self.scan_header(record, inline)?;
        }

        Ok(())
    }

    /// Consume and print the scan header
    ///
    /// The scan continues after the header, so markers inside the entropy
    /// coded data are found as well.
    fn scan_header<W: Write>(
        &mut self,
        record: MarkerRecord,
        inline: &mut W,
    ) -> Result<(), Error> {
        let len = record.size().saturating_sub(2);
        let data = self.reader.read_up_to(len.into())?;
        let consumed = u64::try_from(data.len()).map_err(|_| Error::PositionTooLarge)?;
        self.offset = self.offset.safe_add(consumed)?;

        match Sos::from_data(&data) {
            Ok(sos) => write!(inline, "{sos}")?,
            Err(err) => tracing::warn!("Scan header at {} not decoded: {err}", record.pos()),
        }

        Ok(())
    }
}
