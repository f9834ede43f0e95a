use thiserror::Error;

pub use stegotext_seasmoke::SeasmokeError;

#[derive(Error, Debug)]
pub enum StegoError {
    /// Represents a payload that does not fit into the carrier with the chosen method
    #[error("Capacity Error: {required} bits are required but the image can only hold {available} bits")]
    Capacity { required: usize, available: usize },

    /// Represents a full scan without finding the end of payload delimiter
    #[error("No hidden text found or the hidden text is corrupted")]
    CorruptedPayload,

    /// Represents an unknown method selector, for example `"fft"`
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),

    /// Represents an encrypted payload that was found while no password was provided
    #[error("Encrypted text detected, but no password was provided")]
    MissingCredential,

    /// Represents an error when decrypting the hidden text, e.g. a wrong password
    #[error("Decryption error")]
    Decryption(#[source] SeasmokeError),

    /// Represents an error when encrypting the text before hiding it
    #[error("Encryption error")]
    Encryption(#[source] SeasmokeError),

    /// Represents a character that does not fit into one byte
    #[error("Character {character:?} at position {position} is not supported, only code points up to U+00FF can be hidden")]
    UnsupportedCharacter { character: char, position: usize },

    /// Represents a secret text that contains the end of payload delimiter itself
    #[error("The text to hide must not contain the delimiter")]
    DelimiterInPayload,

    /// Represents an empty delimiter or one that cannot be hidden byte by byte
    #[error("Invalid delimiter: {0:?}")]
    InvalidDelimiter(String),

    /// Represents a quantization strength that is not a positive finite number
    #[error("Invalid DCT strength: {0}")]
    InvalidStrength(f64),

    /// Represents a coefficient position outside of the 8x8 block or on the DC term
    #[error("Invalid DCT coefficient position: ({0}, {1})")]
    InvalidCoefficient(usize, usize),

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier image set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}
