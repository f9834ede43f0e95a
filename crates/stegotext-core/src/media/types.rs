use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;

pub use image::DynamicImage;
use image::{GenericImageView, ImageFormat};
use log::error;

use crate::error::StegoError;
use crate::result::Result;

use super::Persist;

/// a carrier image for steganography, always persisted as PNG
#[derive(Debug, Clone)]
pub struct Media(DynamicImage);

impl Media {
    pub fn from_image(img: DynamicImage) -> Self {
        Self(img)
    }

    pub fn from_file(f: &Path) -> Result<Self> {
        let img = image::open(f).map_err(|e| {
            error!("Error opening image {f:?}: {e}");
            StegoError::InvalidImageMedia
        })?;

        Ok(Self(img))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(bytes).map_err(|e| {
            error!("Error decoding image from memory: {e}");
            StegoError::InvalidImageMedia
        })?;

        Ok(Self(img))
    }

    pub fn image(&self) -> &DynamicImage {
        &self.0
    }

    pub fn into_image(self) -> DynamicImage {
        self.0
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.0.dimensions()
    }

    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        self.0
            .write_to(&mut writer, ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                StegoError::ImageEncodingError
            })
    }

    /// PNG encoded image data
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::new());
        self.save_to_writer(&mut cursor)?;

        Ok(cursor.into_inner())
    }
}

impl From<DynamicImage> for Media {
    fn from(img: DynamicImage) -> Self {
        Self(img)
    }
}

impl Persist for Media {
    fn save_as(&self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            StegoError::WriteError { source: e }
        })?;
        let mut writer = BufWriter::new(f);
        self.save_to_writer(&mut writer)?;
        writer
            .flush()
            .map_err(|source| StegoError::WriteError { source })
    }
}
