use std::path::{Path, PathBuf};

use log::debug;
use stegotext_seasmoke::Cipher;

use crate::{EmbeddingParameters, Media, Persist, StegoError};

use super::{build_engine, CarrierSource, Password};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    image: Option<CarrierSource>,
    output: Option<PathBuf>,
    password: Password,
    options: EmbeddingParameters,
    cipher: Option<Cipher>,
}

impl HideApi {
    /// Use the given method, strength and delimiter
    pub fn with_options(mut self, options: EmbeddingParameters) -> Self {
        self.options = options;
        self
    }

    /// Use other key derivation costs than the default ones
    pub fn with_cipher(mut self, cipher: Cipher) -> Self {
        self.cipher = Some(cipher);
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(CarrierSource::File(image.as_ref().to_path_buf()));
        self
    }

    /// The carrier as encoded image data, PNG or JPEG
    pub fn with_image_bytes(mut self, image: Vec<u8>) -> Self {
        self.image = Some(CarrierSource::Bytes(image));
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the password
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.into();
        self
    }

    /// Set the password
    /// If `None` is passed, no password will be used, leads to no encryption used
    pub fn use_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// Hides the message and writes the PNG to the output file
    pub fn execute(self) -> Result<(), StegoError> {
        let Some(output) = self.output.clone() else {
            return Err(StegoError::TargetNotSet);
        };

        self.hide()?.save_as(&output)?;
        debug!("hide: secret image written to {output:?}");

        Ok(())
    }

    /// Hides the message and returns the PNG encoded image
    pub fn execute_to_bytes(self) -> Result<Vec<u8>, StegoError> {
        self.hide()?.to_png_bytes()
    }

    fn hide(&self) -> Result<Media, StegoError> {
        let Some(message) = self.message.as_deref() else {
            return Err(StegoError::MissingMessage);
        };
        let Some(image) = &self.image else {
            return Err(StegoError::CarrierNotSet);
        };

        let engine = build_engine(&self.options, self.cipher)?;
        let carrier = image.load()?;
        let secret = engine.hide(carrier.image(), message, self.password.as_deref())?;

        Ok(Media::from_image(secret))
    }
}
