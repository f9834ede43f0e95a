use image::{DynamicImage, GenericImageView};

use super::Embedder;
use crate::bit_codec::BitSequence;
use crate::capacity::{channel_count, ensure_capacity, spatial_bits};
use crate::media::codec_options::Method;
use crate::result::Result;

/// Least significant bit codec on RGB images.
///
/// Pixels are visited row by row, left to right, and inside a pixel the channels go R, G, B.
/// Alpha is dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LsbCodec;

#[inline(always)]
fn hide_bit(sample: &mut u8, bit: bool) {
    *sample = (*sample & (u8::MAX - 1)) | u8::from(bit);
}

#[inline(always)]
fn unveil_bit(sample: u8) -> bool {
    sample & 1 == 1
}

impl Embedder for LsbCodec {
    fn method(&self) -> Method {
        Method::Lsb
    }

    fn prepare(&self, carrier: &DynamicImage) -> DynamicImage {
        DynamicImage::ImageRgb8(carrier.to_rgb8())
    }

    fn max_bits(&self, carrier: &DynamicImage) -> usize {
        let (width, height) = carrier.dimensions();
        spatial_bits(width, height, channel_count(carrier.color()))
    }

    fn embed(&self, carrier: DynamicImage, bits: &BitSequence) -> Result<DynamicImage> {
        let mut rgb = carrier.into_rgb8();
        let (width, height) = rgb.dimensions();
        ensure_capacity(bits.len(), spatial_bits(width, height, 3))?;

        for (sample, bit) in rgb.iter_mut().zip(bits) {
            hide_bit(sample, *bit);
        }

        Ok(DynamicImage::ImageRgb8(rgb))
    }

    fn extract(&self, carrier: &DynamicImage) -> BitSequence {
        match carrier.as_rgb8() {
            Some(rgb) => rgb.iter().map(|s| unveil_bit(*s)).collect(),
            None => carrier.to_rgb8().iter().map(|s| unveil_bit(*s)).collect(),
        }
    }
}
