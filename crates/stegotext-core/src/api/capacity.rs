use std::path::Path;

use crate::{CapacityReport, EmbeddingParameters, StegoError};

use super::{build_engine, CarrierSource};

pub fn prepare() -> CapacityApi {
    CapacityApi::default()
}

#[derive(Default, Debug)]
pub struct CapacityApi {
    image: Option<CarrierSource>,
    options: EmbeddingParameters,
}

impl CapacityApi {
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

    /// Capacity of the image as it is, no conversion applied
    pub fn execute(self) -> Result<CapacityReport, StegoError> {
        let Some(image) = self.image else {
            return Err(StegoError::CarrierNotSet);
        };

        let engine = build_engine(&self.options, None)?;
        let media = image.load()?;

        Ok(engine.capacity(media.image()))
    }
}
