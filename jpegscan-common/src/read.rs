use std::io::{ErrorKind, Read};

pub trait ReadExt: Read {
    /// Read a single byte
    ///
    /// Returns `None` on a clean end of stream. Every other failure is passed
    /// on as an error.
    ///
    /// ```
    /// # use std::io::Cursor;
    /// # use jpegscan_common::read::*;
    /// let mut s = Cursor::new([0xFF_u8]);
    /// assert_eq!(s.next_byte().unwrap(), Some(0xFF));
    /// assert_eq!(s.next_byte().unwrap(), None);
    /// ```
    fn next_byte(&mut self) -> std::io::Result<Option<u8>> {
        let buf = &mut [0; 1];
        loop {
            match self.read(buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
    }

    fn read_array<const T: usize>(&mut self) -> std::io::Result<[u8; T]> {
        let buf = &mut [0; T];
        self.read_exact(buf)?;
        Ok(*buf)
    }

    fn read_u8(&mut self) -> std::io::Result<u8> {
        let [byte] = self.read_array()?;
        Ok(byte)
    }

    fn read_be_u16(&mut self) -> std::io::Result<u16> {
        Ok(u16::from_be_bytes(self.read_array()?))
    }

    /// Read at most `len` bytes
    ///
    /// Stops early at the end of the stream.
    ///
    /// ```
    /// # use std::io::Cursor;
    /// # use jpegscan_common::read::*;
    /// let mut s = Cursor::new(b"abcdef".as_slice());
    /// assert_eq!(s.read_up_to(4).unwrap(), b"abcd");
    /// assert_eq!(s.read_up_to(4).unwrap(), b"ef");
    /// ```
    fn read_up_to(&mut self, len: u64) -> std::io::Result<Vec<u8>>
    where
        Self: Sized,
    {
        let mut buf = Vec::new();
        self.by_ref().take(len).read_to_end(&mut buf)?;
        Ok(buf)
    }
}

impl<T: Read + ?Sized> ReadExt for T {}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    /// Fails with `Interrupted` once before every successful read
    struct Flaky<R> {
        inner: R,
        interrupt: bool,
    }

    impl<R: Read> Read for Flaky<R> {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                Err(ErrorKind::Interrupted.into())
            } else {
                self.inner.read(buf)
            }
        }
    }

    #[test]
    fn next_byte_retries_interrupted() {
        let mut r = Flaky {
            inner: Cursor::new([1_u8, 2]),
            interrupt: false,
        };

        assert_eq!(r.next_byte().unwrap(), Some(1));
        assert_eq!(r.next_byte().unwrap(), Some(2));
        assert_eq!(r.next_byte().unwrap(), None);
    }

    #[test]
    fn be_u16() {
        let mut r = Cursor::new([0x01_u8, 0x02, 0x03]);
        assert_eq!(r.read_be_u16().unwrap(), 0x0102);

        let err = r.read_be_u16().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }
}
