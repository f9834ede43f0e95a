use std::path::Path;

use crate::{Detection, EmbeddingParameters, StegoError};

use super::{build_engine, CarrierSource};

pub fn prepare() -> DetectApi {
    DetectApi::default()
}

#[derive(Default, Debug)]
pub struct DetectApi {
    image: Option<CarrierSource>,
    options: EmbeddingParameters,
}

impl DetectApi {
    pub fn with_options(mut self, options: EmbeddingParameters) -> Self {
        self.options = options;
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(CarrierSource::File(image.as_ref().to_path_buf()));
        self
    }

    pub fn with_image_bytes(mut self, image: Vec<u8>) -> Self {
        self.image = Some(CarrierSource::Bytes(image));
        self
    }

    /// Only a carrier that cannot be loaded is an error, everything else is a [`Detection`]
    pub fn execute(self) -> Result<Detection, StegoError> {
        let Some(image) = self.image else {
            return Err(StegoError::CarrierNotSet);
        };

        let engine = build_engine(&self.options, None)?;
        let media = image.load()?;

        Ok(engine.detect(media.image()))
    }
}
