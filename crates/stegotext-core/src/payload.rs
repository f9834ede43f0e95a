//! Framing of the hidden text: optional encryption tag in front, delimiter at the end.

use stegotext_seasmoke::{Cipher, SeasmokeError};

use crate::error::StegoError;
use crate::result::Result;

/// marks a hidden text as encrypted token
pub const ENCRYPTION_TAG: &str = "ENCRYPTED:";

/// password based text encryption, seen as a black box by the engine
pub trait TextCipher: Send + Sync {
    fn encrypt(&self, password: &str, text: &str) -> std::result::Result<String, SeasmokeError>;
    fn decrypt(&self, password: &str, token: &str) -> std::result::Result<String, SeasmokeError>;
}

impl TextCipher for Cipher {
    fn encrypt(&self, password: &str, text: &str) -> std::result::Result<String, SeasmokeError> {
        self.encrypt_text(password, text)
    }

    fn decrypt(&self, password: &str, token: &str) -> std::result::Result<String, SeasmokeError> {
        self.decrypt_text(password, token)
    }
}

/// the text as it goes into the image, without delimiter
pub fn seal(cipher: &dyn TextCipher, text: &str, password: Option<&str>) -> Result<String> {
    match password {
        Some(password) => {
            let token = cipher
                .encrypt(password, text)
                .map_err(StegoError::Encryption)?;
            Ok(format!("{ENCRYPTION_TAG}{token}"))
        }
        None => Ok(text.to_string()),
    }
}

/// everything in front of the first delimiter, `None` when there is no delimiter
pub fn locate_delimiter<'a>(decoded: &'a str, delimiter: &str) -> Option<&'a str> {
    decoded.find(delimiter).map(|end| &decoded[..end])
}

pub fn is_sealed(payload: &str) -> bool {
    payload.starts_with(ENCRYPTION_TAG)
}

/// reverses [`seal`], an encrypted payload requires a password
pub fn open(cipher: &dyn TextCipher, payload: &str, password: Option<&str>) -> Result<String> {
    match payload.strip_prefix(ENCRYPTION_TAG) {
        Some(token) => {
            let password = password.ok_or(StegoError::MissingCredential)?;
            cipher
                .decrypt(password, token)
                .map_err(StegoError::Decryption)
        }
        None => Ok(payload.to_string()),
    }
}

/// first `max` characters, with `...` appended when something was cut
pub fn preview(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}
