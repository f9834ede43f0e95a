//! # Password based text encryption
//!
//! Derives a key with argon2id from the password and a random salt, encrypts with
//! XChaCha20Poly1305. Cipher data is laid out as `ciphertext || nonce || salt`,
//! text tokens are the URL-safe base64 form of that.

use argon2::{Argon2, Params, ParamsBuilder};
use base64::{engine::general_purpose::URL_SAFE, Engine};
use chacha20poly1305::aead::{Aead, AeadCore};
use chacha20poly1305::{Key, KeyInit, XChaCha20Poly1305, XNonce};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroize;

pub mod error;

pub use crate::error::SeasmokeError;

const NONCE_LEN: usize = 24;
const SALT_LEN: usize = 32;
const KEY_LEN: usize = 32;
const TAG_LEN: usize = 16;

pub type Result<T> = std::result::Result<T, SeasmokeError>;

/// argon2id cost settings used for key derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cipher {
    t_cost: u32,
    m_cost: u32,
}

impl Default for Cipher {
    fn default() -> Self {
        // increased time costs to make it more secure
        Self {
            t_cost: 10,
            m_cost: Params::DEFAULT_M_COST,
        }
    }
}

impl Cipher {
    /// `t_cost` iterations over `m_cost` KiB of memory
    pub fn with_cost(t_cost: u32, m_cost: u32) -> Self {
        Self { t_cost, m_cost }
    }

    /// encrypt data with password, the result carries nonce and salt at its end
    pub fn encrypt_data(&self, password: &str, data: &[u8]) -> Result<Vec<u8>> {
        let mut salt = [0u8; SALT_LEN];
        OsRng.fill_bytes(&mut salt);
        let mut key = self.derive_key(password.as_bytes(), &salt)?;

        let nonce = XChaCha20Poly1305::generate_nonce(&mut OsRng);
        let encryptor = XChaCha20Poly1305::new(Key::from_slice(&key));
        key.zeroize();

        let mut cipher_data = encryptor
            .encrypt(&nonce, data)
            .map_err(SeasmokeError::EncryptionError)?;
        cipher_data.extend_from_slice(&nonce);
        cipher_data.extend_from_slice(&salt);
        salt.zeroize();

        Ok(cipher_data)
    }

    /// decrypt data produced by [`Cipher::encrypt_data`]
    pub fn decrypt_data(&self, password: &str, data: &[u8]) -> Result<Vec<u8>> {
        let min = SALT_LEN + NONCE_LEN + TAG_LEN;
        if data.len() < min {
            return Err(SeasmokeError::TruncatedCipherData {
                len: data.len(),
                min,
            });
        }
        let (rest, salt) = data.split_at(data.len() - SALT_LEN);
        let (cipher_text, nonce) = rest.split_at(rest.len() - NONCE_LEN);

        let mut key = self.derive_key(password.as_bytes(), salt)?;
        let decryptor = XChaCha20Poly1305::new(Key::from_slice(&key));
        key.zeroize();

        decryptor
            .decrypt(XNonce::from_slice(nonce), cipher_text)
            .map_err(SeasmokeError::DecryptionError)
    }

    /// encrypt a text into a printable URL-safe base64 token
    pub fn encrypt_text(&self, password: &str, text: &str) -> Result<String> {
        let cipher_data = self.encrypt_data(password, text.as_bytes())?;

        Ok(URL_SAFE.encode(cipher_data))
    }

    /// decrypt a token produced by [`Cipher::encrypt_text`]
    pub fn decrypt_text(&self, password: &str, token: &str) -> Result<String> {
        let cipher_data = URL_SAFE.decode(token.trim())?;
        let plain = self.decrypt_data(password, &cipher_data)?;

        Ok(String::from_utf8(plain)?)
    }

    fn argon(&self) -> Result<Argon2<'static>> {
        let params = ParamsBuilder::default()
            .t_cost(self.t_cost)
            .m_cost(self.m_cost)
            .output_len(KEY_LEN)
            .build()
            .map_err(SeasmokeError::KeyDerivationParamError)?;

        Ok(Argon2::new(
            argon2::Algorithm::Argon2id,
            argon2::Version::V0x13,
            params,
        ))
    }

    fn derive_key(&self, password: &[u8], salt: &[u8]) -> Result<[u8; KEY_LEN]> {
        let mut output_key_material = [0u8; KEY_LEN];
        self.argon()?
            .hash_password_into(password, salt, &mut output_key_material)
            .map_err(SeasmokeError::KeyDerivationError)?;

        Ok(output_key_material)
    }
}
