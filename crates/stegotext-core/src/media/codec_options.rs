use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::error::StegoError;
use crate::result::Result;

/// Default quantization strength for the DCT codec
pub const DEFAULT_DCT_STRENGTH: f64 = 10.0;

/// Default coefficient (row, column) inside an 8x8 block, low frequency but not DC
pub const DEFAULT_DCT_COEFFICIENT: (usize, usize) = (2, 3);

/// Default end of payload marker
pub const DEFAULT_DELIMITER: &str = "###END###";

/// Selects where in the image the bits end up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// least significant bit of every color channel
    Lsb,
    /// parity of one quantized DCT coefficient per 8x8 block
    Dct,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Lsb => "lsb",
            Method::Dct => "dct",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = StegoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "lsb" | "spatial" => Ok(Method::Lsb),
            "dct" | "transform" => Ok(Method::Dct),
            _ => Err(StegoError::UnsupportedMethod(s.to_string())),
        }
    }
}

/// Codec configuration for text steganography
///
/// Both codecs write PNG, the codec only decides how the bits are placed:
/// - `Lsb` → least significant bits of the RGB samples
/// - `Dct` → quantized DCT coefficients of the luminance
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CodecOptions {
    #[default]
    Lsb,
    Dct(DctCodecOptions),
}

impl CodecOptions {
    /// default options of the given method
    pub fn for_method(method: Method) -> Self {
        match method {
            Method::Lsb => Self::Lsb,
            Method::Dct => Self::Dct(DctCodecOptions::default()),
        }
    }

    pub fn method(&self) -> Method {
        match self {
            CodecOptions::Lsb => Method::Lsb,
            CodecOptions::Dct(_) => Method::Dct,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            CodecOptions::Lsb => Ok(()),
            CodecOptions::Dct(opts) => opts.validate(),
        }
    }
}

/// Options for the DCT block encoding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DctCodecOptions {
    /// Quantization step multiplier, the step is `strength * 2`.
    /// Higher values survive more noise but change the image more visibly.
    pub strength: f64,

    /// (row, column) of the coefficient that carries the bit, must not be the DC term `(0, 0)`
    pub coefficient: (usize, usize),
}

impl Default for DctCodecOptions {
    fn default() -> Self {
        Self {
            strength: DEFAULT_DCT_STRENGTH,
            coefficient: DEFAULT_DCT_COEFFICIENT,
        }
    }
}

impl DctCodecOptions {
    pub fn with_strength(mut self, strength: f64) -> Self {
        self.strength = strength;
        self
    }

    pub fn with_coefficient(mut self, row: usize, column: usize) -> Self {
        self.coefficient = (row, column);
        self
    }

    pub fn quantization_step(&self) -> f64 {
        self.strength * 2.0
    }

    pub fn validate(&self) -> Result<()> {
        if !self.strength.is_finite() || self.strength <= 0.0 {
            return Err(StegoError::InvalidStrength(self.strength));
        }
        let (row, column) = self.coefficient;
        if row >= 8 || column >= 8 || (row, column) == (0, 0) {
            return Err(StegoError::InvalidCoefficient(row, column));
        }

        Ok(())
    }
}

/// Everything an embed or extract call needs to agree on
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingParameters {
    pub codec: CodecOptions,

    /// marks the end of the hidden text, must be hideable itself
    pub delimiter: String,
}

impl Default for EmbeddingParameters {
    fn default() -> Self {
        Self {
            codec: CodecOptions::default(),
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl EmbeddingParameters {
    pub fn new(codec: CodecOptions) -> Self {
        Self {
            codec,
            ..Self::default()
        }
    }

    pub fn lsb() -> Self {
        Self::new(CodecOptions::Lsb)
    }

    pub fn dct(strength: f64) -> Self {
        Self::new(CodecOptions::Dct(
            DctCodecOptions::default().with_strength(strength),
        ))
    }

    pub fn with_delimiter<S: Into<String>>(mut self, delimiter: S) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn method(&self) -> Method {
        self.codec.method()
    }

    /// delimiter length in hidden characters
    pub fn delimiter_len(&self) -> usize {
        self.delimiter.chars().count()
    }

    pub fn validate(&self) -> Result<()> {
        self.codec.validate()?;
        if self.delimiter.is_empty() || self.delimiter.chars().any(|c| u32::from(c) > 0xff) {
            return Err(StegoError::InvalidDelimiter(self.delimiter.clone()));
        }

        Ok(())
    }
}
