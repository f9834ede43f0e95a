//! # Stegotext Core API
//!
//! Hides a text inside an image and gets it back. Two codecs are available:
//! - [`Method::Lsb`] writes the bits into the least significant bit of every RGB sample
//! - [`Method::Dct`] writes one bit per 8x8 block into the parity of a quantized DCT coefficient
//!
//! The text is terminated by a delimiter (`###END###` by default) and can be encrypted with a
//! password before it is hidden. The resulting image is always a PNG.
//!
//! # Usage Examples
//!
//! ## Hide a text inside an image
//!
//! ```rust
//! use stegotext_core::{DynamicImage, EmbeddingParameters, StegoEngine};
//!
//! let carrier = DynamicImage::ImageRgb8(image::RgbImage::from_fn(64, 64, |x, y| {
//!     image::Rgb([x as u8, y as u8, 128])
//! }));
//!
//! let engine = StegoEngine::new(EmbeddingParameters::lsb()).expect("valid parameters");
//! let secret = engine
//!     .hide(&carrier, "Hello, World!", None)
//!     .expect("Failed to hide text in image");
//!
//! let report = engine.unveil(&secret, None).expect("Failed to unveil text");
//! assert_eq!(report.extracted_text, "Hello, World!");
//! ```
//!
//! ## Files and bytes
//!
//! ```rust
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! image::RgbImage::from_fn(64, 64, |x, y| image::Rgb([x as u8, y as u8, 77]))
//!     .save(&carrier)
//!     .expect("Failed to write carrier");
//!
//! stegotext_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_image(&carrier)
//!     .with_output(temp_dir.path().join("image-with-a-text-inside.png"))
//!     .execute()
//!     .expect("Failed to hide text in image");
//!
//! let report = stegotext_core::api::unveil::prepare()
//!     .from_secret_file(temp_dir.path().join("image-with-a-text-inside.png"))
//!     .execute()
//!     .expect("Failed to unveil text from image");
//! assert_eq!(report.extracted_text, "Hello, World!");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod bit_codec;
pub mod capacity;
pub mod engine;
pub mod error;
pub mod media;
pub mod payload;
pub mod result;

pub use crate::bit_codec::BitSequence;
pub use crate::capacity::CapacityReport;
pub use crate::engine::{Detection, StegoEngine, UnveilReport};
pub use crate::error::StegoError;
pub use crate::media::codec_options::{
    CodecOptions, DctCodecOptions, EmbeddingParameters, Method, DEFAULT_DCT_COEFFICIENT,
    DEFAULT_DCT_STRENGTH, DEFAULT_DELIMITER,
};
pub use crate::media::image::{DctCodec, Embedder, ImageCodec, LsbCodec};
pub use crate::media::{DynamicImage, Media, Persist};
pub use crate::payload::{TextCipher, ENCRYPTION_TAG};
pub use crate::result::Result;
pub use stegotext_seasmoke::Cipher;
