use thiserror::Error;

#[derive(Error, Debug)]
pub enum SteganoError {
    /// Represents an unsupported carrier media. For example, a WAV file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a cursor that walked past the last addressable bit of the carrier.
    /// The carrier is left partially modified and must be discarded.
    #[error("Address space of the carrier image is exhausted")]
    AddressSpaceExhausted,

    /// Represents a payload that does not fit into the carrier, reported before any pixel is touched
    #[error(
        "Cannot encode: {required} bytes are required but the carrier image can hold only {capacity} bytes"
    )]
    CannotEncode { required: u64, capacity: u64 },

    /// Represents a carrier without a valid header, for example a wrong password or a virgin image
    #[error("Cannot decode: the image does not contain a hidden file for this password")]
    CannotDecode,

    /// Represents a caller asking for more work after all segments have been processed
    #[error("No segment left to process")]
    NoSegmentRemaining,

    /// Represents an error caused by an invalid filename, for example an empty filename
    #[error("A file with an invalid file name was provided")]
    InvalidFileName,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    /// Represents an output location that cannot be written to, like a missing folder
    #[error("Invalid output path: {0:?}")]
    InvalidOutputPath(std::path::PathBuf),

    #[error("API Error: Missing file to hide")]
    MissingPayload,

    #[error("The background task terminated unexpectedly")]
    TaskPanicked,

    /// Represents a background task that was stopped before it could deliver a result
    #[error("The operation was cancelled")]
    Cancelled,
}
