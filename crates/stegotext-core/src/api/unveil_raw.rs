use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{EmbeddingParameters, StegoError};

use super::{build_engine, CarrierSource};

pub fn prepare() -> UnveilRawApi {
    UnveilRawApi::default()
}

/// Best-effort extraction, the payload is returned as stored and never decrypted
#[derive(Default, Debug)]
pub struct UnveilRawApi {
    secret_media: Option<CarrierSource>,
    destination_file: Option<PathBuf>,
    options: EmbeddingParameters,
}

impl UnveilRawApi {
    /// Use the given method, strength and delimiter
    pub fn with_options(mut self, options: EmbeddingParameters) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image that contains the text to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(CarrierSource::File(secret_image.as_ref().to_path_buf()));
        self
    }

    /// The secret image as encoded image data
    pub fn from_secret_bytes(mut self, secret_image: Vec<u8>) -> Self {
        self.secret_media = Some(CarrierSource::Bytes(secret_image));
        self
    }

    /// The recovered text is additionally written to that file
    pub fn into_raw_file(mut self, destination_file: impl AsRef<Path>) -> Self {
        self.destination_file = Some(destination_file.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<String, StegoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(StegoError::CarrierNotSet);
        };

        let engine = build_engine(&self.options, None)?;
        let media = secret_media.load()?;
        let text = engine.unveil_best_effort(media.image())?;

        if let Some(destination_file) = self.destination_file {
            let mut destination_file = File::create(destination_file)
                .map_err(|source| StegoError::WriteError { source })?;

            destination_file
                .write_all(text.as_bytes())
                .map_err(|source| StegoError::WriteError { source })?;
        }

        Ok(text)
    }
}
