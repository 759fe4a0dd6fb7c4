//! List the marker segments of JPEG streams
//!
//! The [`Scanner`] walks a stream byte by byte and records every marker it
//! comes across, including restart markers inside entropy coded data. Scan
//! headers are decoded on the way.
//!
//! ```
//! # use jpegscan::{Marker, Scanner};
//! let data = [0xFF_u8, 0xD8, 0xFF, 0xDB, 0x00, 0x04, 0x01, 0x02, 0xFF, 0xD9];
//! let mut scanner = Scanner::new(data.as_slice());
//! scanner.run(&mut std::io::sink()).unwrap();
//!
//! let markers: Vec<_> = scanner.records().iter().map(|x| x.marker()).collect();
//! assert_eq!(markers, [Marker::SOI, Marker::DQT, Marker::EOI]);
//! ```

mod error;
pub mod marker;
pub mod report;
mod scanner;
mod sos;

pub use error::Error;
pub use marker::Marker;
pub use scanner::*;
pub use sos::*;

pub const MARKER_START: u8 = 0xFF;
pub const MAGIC_BYTES: &[u8] = &[MARKER_START, 0xD8];

/// Checks if passed data start with an SOI marker
pub fn is_filetype(data: &[u8]) -> bool {
    data.starts_with(MAGIC_BYTES)
}

/// Like [`is_filetype`] but returns [`Error::MissingMagic`]
pub fn check_magic(data: &[u8]) -> Result<(), Error> {
    if is_filetype(data) {
        Ok(())
    } else {
        Err(Error::MissingMagic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magic() {
        assert!(is_filetype(&[0xFF, 0xD8, 0xFF, 0xE0]));
        assert!(!is_filetype(&[0xFF]));
        assert!(!is_filetype(b"\x89PNG"));

        check_magic(&[0xFF, 0xD8]).unwrap();
        assert!(matches!(check_magic(&[]), Err(Error::MissingMagic)));
    }
}
