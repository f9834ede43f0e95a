pub mod dct;
pub mod dct_codec;
pub mod lsb_codec;

use enum_dispatch::enum_dispatch;
use image::DynamicImage;

use crate::bit_codec::BitSequence;
use crate::media::codec_options::{CodecOptions, Method};
use crate::result::Result;

pub use dct_codec::DctCodec;
pub use lsb_codec::LsbCodec;

/// hides bits in an image and reads them back
#[enum_dispatch]
pub trait Embedder {
    fn method(&self) -> Method;

    /// converts the carrier into the color mode this codec works on
    fn prepare(&self, carrier: &DynamicImage) -> DynamicImage;

    /// number of bits that fit into the carrier as it is
    fn max_bits(&self, carrier: &DynamicImage) -> usize;

    /// writes all bits into a copy of the carrier, fails before touching any pixel
    /// when the bits do not fit
    fn embed(&self, carrier: DynamicImage, bits: &BitSequence) -> Result<DynamicImage>;

    /// reads one bit per slot of the whole carrier, there is no stop condition
    fn extract(&self, carrier: &DynamicImage) -> BitSequence;
}

#[enum_dispatch(Embedder)]
#[derive(Debug, Clone, PartialEq)]
pub enum ImageCodec {
    LsbCodec,
    DctCodec,
}

impl From<&CodecOptions> for ImageCodec {
    fn from(options: &CodecOptions) -> Self {
        match options {
            CodecOptions::Lsb => LsbCodec.into(),
            CodecOptions::Dct(opts) => DctCodec::new(*opts).into(),
        }
    }
}
