use image::{DynamicImage, GenericImageView, GrayImage};
use log::debug;

use super::dct::{self, Block};
use super::Embedder;
use crate::bit_codec::BitSequence;
use crate::capacity::{ensure_capacity, transform_bits, BLOCK_SIZE};
use crate::media::codec_options::{DctCodecOptions, Method};
use crate::result::Result;

/// Hides one bit per 8x8 luminance block in the parity of a quantized DCT coefficient.
///
/// Blocks are visited row by row, incomplete blocks at the right and bottom edge are skipped.
/// The carrier is converted to grayscale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DctCodec {
    options: DctCodecOptions,
}

impl Default for DctCodec {
    fn default() -> Self {
        Self::new(DctCodecOptions::default())
    }
}

impl DctCodec {
    pub fn new(options: DctCodecOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DctCodecOptions {
        &self.options
    }

    fn coefficient_index(&self) -> usize {
        let (row, column) = self.options.coefficient;
        row * 8 + column
    }

    /// `coefficient / step`, ties to even
    fn quantize(&self, coefficient: f64) -> i64 {
        (coefficient / self.options.quantization_step()).round_ties_even() as i64
    }

    fn embed_block(&self, block: &Block, bit: bool) -> Block {
        let idx = self.coefficient_index();
        let mut coeffs = dct::forward(block);
        let quantized = with_parity(self.quantize(coeffs[idx]), bit);
        coeffs[idx] = quantized as f64 * self.options.quantization_step();

        dct::inverse(&coeffs)
    }

    fn extract_block(&self, block: &Block) -> bool {
        let coeffs = dct::forward(block);
        is_odd(self.quantize(coeffs[self.coefficient_index()]))
    }
}

/// odd for `1`, even for `0`; odd values turn even by stepping towards zero
/// as long as that does not go negative
fn with_parity(quantized: i64, bit: bool) -> i64 {
    match (bit, is_odd(quantized)) {
        (true, false) => quantized + 1,
        (false, true) if quantized - 1 >= 0 => quantized - 1,
        (false, true) => quantized + 1,
        _ => quantized,
    }
}

#[inline]
fn is_odd(quantized: i64) -> bool {
    quantized.rem_euclid(2) == 1
}

/// top left corners of all complete blocks in raster order
fn block_origins(width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
    let blocks_wide = width / BLOCK_SIZE;
    let blocks_tall = height / BLOCK_SIZE;

    (0..blocks_tall).flat_map(move |by| {
        (0..blocks_wide).map(move |bx| (bx * BLOCK_SIZE, by * BLOCK_SIZE))
    })
}

fn read_block(luma: &GrayImage, x0: u32, y0: u32) -> Block {
    let mut block = [0.0f64; 64];
    for row in 0..BLOCK_SIZE {
        for col in 0..BLOCK_SIZE {
            block[(row * BLOCK_SIZE + col) as usize] = luma.get_pixel(x0 + col, y0 + row).0[0] as f64;
        }
    }
    block
}

/// rounds to the nearest sample value, clipped to 0..=255
fn write_block(luma: &mut GrayImage, x0: u32, y0: u32, block: &Block) {
    for row in 0..BLOCK_SIZE {
        for col in 0..BLOCK_SIZE {
            let value = block[(row * BLOCK_SIZE + col) as usize].clamp(0.0, 255.0).round();
            luma.get_pixel_mut(x0 + col, y0 + row).0[0] = value as u8;
        }
    }
}

impl Embedder for DctCodec {
    fn method(&self) -> Method {
        Method::Dct
    }

    fn prepare(&self, carrier: &DynamicImage) -> DynamicImage {
        DynamicImage::ImageLuma8(carrier.to_luma8())
    }

    fn max_bits(&self, carrier: &DynamicImage) -> usize {
        let (width, height) = carrier.dimensions();
        transform_bits(width, height)
    }

    fn embed(&self, carrier: DynamicImage, bits: &BitSequence) -> Result<DynamicImage> {
        let mut luma = carrier.into_luma8();
        let (width, height) = luma.dimensions();
        ensure_capacity(bits.len(), transform_bits(width, height))?;
        debug!(
            "DCT embedding {} bits, strength {}, coefficient {:?}",
            bits.len(),
            self.options.strength,
            self.options.coefficient
        );

        for ((x0, y0), bit) in block_origins(width, height).zip(bits) {
            let block = read_block(&luma, x0, y0);
            let modified = self.embed_block(&block, *bit);
            write_block(&mut luma, x0, y0, &modified);
        }

        Ok(DynamicImage::ImageLuma8(luma))
    }

    fn extract(&self, carrier: &DynamicImage) -> BitSequence {
        let owned;
        let luma = match carrier.as_luma8() {
            Some(luma) => luma,
            None => {
                owned = carrier.to_luma8();
                &owned
            }
        };
        let (width, height) = luma.dimensions();

        block_origins(width, height)
            .map(|(x0, y0)| self.extract_block(&read_block(luma, x0, y0)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bit_codec;
    use crate::error::StegoError;
    use crate::test_utils::prepare_textured_gray;
    use image::Luma;

    #[test]
    fn should_force_parity_as_specified() {
        assert_eq!(with_parity(4, true), 5);
        assert_eq!(with_parity(5, true), 5);
        assert_eq!(with_parity(-2, true), -1);
        assert_eq!(with_parity(-3, true), -3);

        assert_eq!(with_parity(4, false), 4);
        assert_eq!(with_parity(5, false), 4);
        assert_eq!(with_parity(1, false), 0);
        assert_eq!(with_parity(-1, false), 0);
        assert_eq!(with_parity(-3, false), -2);
        assert_eq!(with_parity(0, false), 0);
    }

    #[test]
    fn should_treat_negative_odd_values_as_odd() {
        assert!(is_odd(-1));
        assert!(is_odd(-7));
        assert!(!is_odd(-4));
        assert!(!is_odd(0));
    }

    #[test]
    fn should_quantize_ties_to_even() {
        let codec = DctCodec::default();

        assert_eq!(codec.quantize(30.0), 2); // 1.5
        assert_eq!(codec.quantize(50.0), 2); // 2.5
        assert_eq!(codec.quantize(-10.0), 0); // -0.5
        assert_eq!(codec.quantize(29.9), 1);
    }

    #[test]
    fn should_visit_complete_blocks_in_raster_order() {
        let origins: Vec<_> = block_origins(20, 17).collect();

        assert_eq!(origins, vec![(0, 0), (8, 0), (0, 8), (8, 8)]);
    }

    #[test]
    fn should_round_trip_a_single_block() {
        let codec = DctCodec::default();
        let carrier = prepare_textured_gray(8, 8);
        let block = read_block(&carrier, 0, 0);

        for bit in [true, false] {
            let mut luma = carrier.clone();
            write_block(&mut luma, 0, 0, &codec.embed_block(&block, bit));
            assert_eq!(codec.extract_block(&read_block(&luma, 0, 0)), bit);
        }
    }

    #[test]
    fn should_extract_what_was_embedded() {
        let codec = DctCodec::default();
        let bits = bit_codec::encode("hi there###END###").unwrap();
        let carrier = DynamicImage::ImageLuma8(prepare_textured_gray(128, 96));

        let secret = codec.embed(carrier, &bits).unwrap();
        let extracted = codec.extract(&secret);

        assert_eq!(extracted.len(), 16 * 12);
        assert_eq!(&extracted.as_slice()[..bits.len()], bits.as_slice());
    }

    #[test]
    fn should_leave_blocks_after_the_payload_untouched() {
        let codec = DctCodec::default();
        let original = prepare_textured_gray(32, 8);
        let bits: BitSequence = vec![true].into();

        let secret = codec
            .embed(DynamicImage::ImageLuma8(original.clone()), &bits)
            .unwrap()
            .into_luma8();

        for y in 0..8 {
            for x in 8..32 {
                assert_eq!(secret.get_pixel(x, y), original.get_pixel(x, y));
            }
        }
    }

    #[test]
    fn should_respect_a_custom_coefficient_and_strength() {
        let codec = DctCodec::new(DctCodecOptions::default().with_strength(4.0).with_coefficient(1, 1));
        let bits = bit_codec::encode("ok").unwrap();
        let carrier = DynamicImage::ImageLuma8(prepare_textured_gray(64, 16));

        let secret = codec.embed(carrier, &bits).unwrap();

        assert_eq!(&codec.extract(&secret).as_slice()[..16], bits.as_slice());
    }

    #[test]
    fn should_fail_before_mutation_when_blocks_run_out() {
        let carrier = DynamicImage::ImageLuma8(GrayImage::from_pixel(16, 15, Luma([99])));
        let bits: BitSequence = vec![true, false, true].into();

        assert!(matches!(
            DctCodec::default().embed(carrier, &bits),
            Err(StegoError::Capacity {
                required: 3,
                available: 2
            })
        ));
    }
}
