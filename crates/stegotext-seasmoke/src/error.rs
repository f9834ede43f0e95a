use std::string::FromUtf8Error;

pub use argon2::Error as Argon2Error;
pub use base64::DecodeError;
pub use chacha20poly1305::Error as Chacha20Poly1305Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeasmokeError {
    #[error("Key derivation error")]
    KeyDerivationError(Argon2Error),

    #[error("Key derivation parameter error")]
    KeyDerivationParamError(Argon2Error),

    #[error("Decryption error")]
    DecryptionError(Chacha20Poly1305Error),

    #[error("Encryption error")]
    EncryptionError(Chacha20Poly1305Error),

    /// The token was not valid URL-safe base64
    #[error("Encrypted token is not valid base64")]
    InvalidTokenEncoding(#[from] DecodeError),

    /// The cipher data is shorter than nonce, salt and auth tag together
    #[error("Cipher data is too short: {len} bytes, at least {min} bytes expected")]
    TruncatedCipherData { len: usize, min: usize },

    /// Decryption succeeded but the plain text was not UTF-8
    #[error("Decrypted text is not valid UTF-8")]
    InvalidPlainText(#[from] FromUtf8Error),
}
