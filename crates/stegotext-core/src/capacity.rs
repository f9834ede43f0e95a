//! How many bits fit into a carrier.

use image::{ColorType, DynamicImage, GenericImageView};
use serde::Serialize;

use crate::error::StegoError;
use crate::media::codec_options::Method;
use crate::result::Result;

/// Edge length of the square blocks used by the DCT codec
pub const BLOCK_SIZE: u32 = 8;

/// summary of what a carrier can hold with a given method
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapacityReport {
    /// `"{width}x{height}"`
    pub image_size: String,
    pub method: Method,
    pub max_bits: usize,
    /// `max_bits / 8`, delimiter included
    pub max_characters: usize,
    /// characters left for the actual text once the delimiter is accounted for
    pub max_text_length: usize,
}

impl CapacityReport {
    pub fn new(carrier: &DynamicImage, method: Method, max_bits: usize, delimiter_len: usize) -> Self {
        let (width, height) = carrier.dimensions();
        let max_characters = max_bits / 8;

        Self {
            image_size: format!("{width}x{height}"),
            method,
            max_bits,
            max_characters,
            max_text_length: max_characters.saturating_sub(delimiter_len),
        }
    }
}

/// color channels usable for hiding, alpha never counts
pub fn channel_count(color: ColorType) -> usize {
    match color {
        ColorType::L8 | ColorType::La8 | ColorType::L16 | ColorType::La16 => 1,
        _ => 3,
    }
}

/// one bit per color channel of every pixel
pub fn spatial_bits(width: u32, height: u32, channels: usize) -> usize {
    width as usize * height as usize * channels
}

/// one bit per complete 8x8 block, partial edge blocks are not used
pub fn transform_bits(width: u32, height: u32) -> usize {
    (height / BLOCK_SIZE) as usize * (width / BLOCK_SIZE) as usize
}

/// fails with [`StegoError::Capacity`] when `required` bits do not fit
pub fn ensure_capacity(required: usize, available: usize) -> Result<()> {
    if required > available {
        return Err(StegoError::Capacity {
            required,
            available,
        });
    }

    Ok(())
}
