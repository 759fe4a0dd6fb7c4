use jpegscan_common::utils::AdditionOverflowError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Stream ends inside the length field of marker {0:#x}")]
    TruncatedLength(u8),
    #[error("Unexpected end of segment data")]
    UnexpectedEof,
    #[error("Position too large")]
    PositionTooLarge,
    #[error("Missing JPEG magic bytes")]
    MissingMagic,
}

impl From<AdditionOverflowError> for Error {
    fn from(_: AdditionOverflowError) -> Self {
        Self::PositionTooLarge
    }
}
