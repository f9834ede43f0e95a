use image::DynamicImage;
use log::debug;
use serde::Serialize;
use stegotext_seasmoke::Cipher;

use crate::bit_codec;
use crate::capacity::{ensure_capacity, CapacityReport};
use crate::error::StegoError;
use crate::media::codec_options::{EmbeddingParameters, Method};
use crate::media::image::{Embedder, ImageCodec};
use crate::payload::{self, TextCipher};
use crate::result::Result;

/// characters shown by [`StegoEngine::detect`]
pub const PREVIEW_LEN: usize = 50;

/// [`Detection::message`] when no hidden text was found
pub const NOTHING_DETECTED: &str = "No hidden text detected";

/// outcome of a strict unveil
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnveilReport {
    pub extracted_text: String,
    pub method: Method,
    pub text_length: usize,
    pub is_encrypted: bool,
}

/// outcome of a detection probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub has_hidden_text: bool,
    pub method: Method,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    /// human readable note, only set when nothing was found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Hides text in images and gets it back.
///
/// Holds nothing but its configuration, every call works on its own copy of the carrier.
pub struct StegoEngine {
    params: EmbeddingParameters,
    codec: ImageCodec,
    cipher: Box<dyn TextCipher>,
}

impl StegoEngine {
    pub fn new(params: EmbeddingParameters) -> Result<Self> {
        params.validate()?;
        let codec = ImageCodec::from(&params.codec);

        Ok(Self {
            params,
            codec,
            cipher: Box::new(Cipher::default()),
        })
    }

    /// replaces the default text cipher
    pub fn with_cipher<C: TextCipher + 'static>(mut self, cipher: C) -> Self {
        self.cipher = Box::new(cipher);
        self
    }

    pub fn parameters(&self) -> &EmbeddingParameters {
        &self.params
    }

    pub fn method(&self) -> Method {
        self.params.method()
    }

    /// capacity of the carrier as it is, grayscale carriers count one channel for LSB
    pub fn capacity(&self, carrier: &DynamicImage) -> CapacityReport {
        CapacityReport::new(
            carrier,
            self.method(),
            self.codec.max_bits(carrier),
            self.params.delimiter_len(),
        )
    }

    /// hides `text` and returns the new image, the carrier itself stays untouched
    pub fn hide(
        &self,
        carrier: &DynamicImage,
        text: &str,
        password: Option<&str>,
    ) -> Result<DynamicImage> {
        let delimiter = self.params.delimiter.as_str();
        if text.contains(delimiter) {
            return Err(StegoError::DelimiterInPayload);
        }

        let payload = payload::seal(&*self.cipher, text, password)?;
        // the first delimiter match must be the appended one, a payload ending in a
        // prefix of the delimiter would otherwise end extraction early
        let framed = format!("{payload}{delimiter}");
        if framed.find(delimiter) != Some(payload.len()) {
            return Err(StegoError::DelimiterInPayload);
        }
        debug!(
            "hide: {} payload characters, encrypted: {}",
            payload.chars().count(),
            password.is_some()
        );

        let bits = bit_codec::encode(&framed)?;

        let carrier = self.codec.prepare(carrier);
        ensure_capacity(bits.len(), self.codec.max_bits(&carrier))?;
        debug!("hide: capacity ok, embedding {} bits via {}", bits.len(), self.method());

        self.codec.embed(carrier, &bits)
    }

    /// the hidden payload as it is stored, still encrypted if it was
    pub fn unveil_payload(&self, carrier: &DynamicImage) -> Result<String> {
        let bits = self.codec.extract(carrier);
        debug!("unveil: scanned {} bits via {}", bits.len(), self.method());

        let decoded = bit_codec::decode(&bits);
        payload::locate_delimiter(&decoded, &self.params.delimiter)
            .map(str::to_string)
            .ok_or(StegoError::CorruptedPayload)
    }

    /// strict extraction, fails when no delimiter was found
    pub fn unveil(&self, carrier: &DynamicImage, password: Option<&str>) -> Result<UnveilReport> {
        let hidden = self.unveil_payload(carrier)?;
        let is_encrypted = payload::is_sealed(&hidden);
        debug!("unveil: delimiter found, encrypted: {is_encrypted}");

        let text = payload::open(&*self.cipher, &hidden, password)?;

        Ok(UnveilReport {
            text_length: text.chars().count(),
            extracted_text: text,
            method: self.method(),
            is_encrypted,
        })
    }

    /// Best-effort extraction.
    ///
    /// With a delimiter present this is the raw payload in front of it. Without one, every
    /// printable ASCII character of the whole scan is kept. Only an empty result counts as
    /// failure. No decryption happens here.
    pub fn unveil_best_effort(&self, carrier: &DynamicImage) -> Result<String> {
        let decoded = bit_codec::decode(&self.codec.extract(carrier));
        if let Some(hidden) = payload::locate_delimiter(&decoded, &self.params.delimiter) {
            return Ok(hidden.to_string());
        }
        debug!("unveil best effort: no delimiter, keeping printable characters");

        let printable: String = decoded.chars().filter(|c| (' '..='~').contains(c)).collect();
        if printable.is_empty() {
            return Err(StegoError::CorruptedPayload);
        }

        Ok(printable)
    }

    /// Probes for hidden text. Extraction failures are reported as no hidden text,
    /// encrypted payloads count as hidden text and are previewed as stored.
    pub fn detect(&self, carrier: &DynamicImage) -> Detection {
        match self.unveil_payload(carrier) {
            Ok(hidden) => Detection {
                has_hidden_text: true,
                method: self.method(),
                text_length: Some(hidden.chars().count()),
                preview: Some(payload::preview(&hidden, PREVIEW_LEN)),
                message: None,
            },
            Err(e) => {
                debug!("detect: no hidden text ({e})");
                Detection {
                    has_hidden_text: false,
                    method: self.method(),
                    text_length: None,
                    preview: None,
                    message: Some(NOTHING_DETECTED.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::codec_options::{CodecOptions, DctCodecOptions};
    use crate::test_utils::{cheap_cipher, prepare_gradient_rgb, prepare_textured_gray};

    fn lsb() -> StegoEngine {
        StegoEngine::new(EmbeddingParameters::lsb())
            .unwrap()
            .with_cipher(cheap_cipher())
    }

    fn dct() -> StegoEngine {
        StegoEngine::new(EmbeddingParameters::dct(10.0))
            .unwrap()
            .with_cipher(cheap_cipher())
    }

    fn rgb_carrier(w: u32, h: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(prepare_gradient_rgb(w, h))
    }

    fn gray_carrier(w: u32, h: u32) -> DynamicImage {
        DynamicImage::ImageLuma8(prepare_textured_gray(w, h))
    }

    #[test]
    fn should_refuse_invalid_parameters() {
        let params = EmbeddingParameters::new(CodecOptions::Dct(
            DctCodecOptions::default().with_strength(-1.0),
        ));

        assert!(matches!(
            StegoEngine::new(params),
            Err(StegoError::InvalidStrength(_))
        ));
    }

    #[test]
    fn should_round_trip_with_lsb() {
        let engine = lsb();
        let secret = engine.hide(&rgb_carrier(40, 40), "hi there", None).unwrap();
        let report = engine.unveil(&secret, None).unwrap();

        assert_eq!(
            report,
            UnveilReport {
                extracted_text: "hi there".to_string(),
                method: Method::Lsb,
                text_length: 8,
                is_encrypted: false,
            }
        );
    }

    #[test]
    fn should_round_trip_with_dct() {
        let engine = dct();
        let secret = engine.hide(&gray_carrier(160, 64), "hi there", None).unwrap();

        assert_eq!(engine.unveil(&secret, None).unwrap().extracted_text, "hi there");
    }

    #[test]
    fn should_not_modify_the_carrier() {
        let carrier = rgb_carrier(16, 16);
        let before = carrier.to_rgb8();
        let secret = lsb().hide(&carrier, "abc", None).unwrap();

        assert_eq!(carrier.to_rgb8(), before);
        assert_ne!(secret.to_rgb8(), before);
    }

    #[test]
    fn should_reject_text_containing_the_delimiter() {
        assert!(matches!(
            lsb().hide(&rgb_carrier(40, 40), "a###END###b", None),
            Err(StegoError::DelimiterInPayload)
        ));
    }

    #[test]
    fn should_reject_text_ending_in_a_delimiter_prefix() {
        let engine = lsb();
        let carrier = rgb_carrier(40, 40);

        for text in ["x###END", "a###END##", "tag: ###END"] {
            assert!(
                matches!(
                    engine.hide(&carrier, text, None),
                    Err(StegoError::DelimiterInPayload)
                ),
                "{text:?} must be refused"
            );
        }
    }

    #[test]
    fn should_keep_trailing_hashes_that_cannot_form_the_delimiter() {
        let engine = lsb();
        let secret = engine.hide(&rgb_carrier(40, 40), "x###", None).unwrap();

        assert_eq!(engine.unveil(&secret, None).unwrap().extracted_text, "x###");
    }

    #[test]
    fn should_encrypt_text_ending_in_a_delimiter_prefix() {
        let engine = lsb();
        let secret = engine
            .hide(&rgb_carrier(100, 100), "x###END", Some("pw"))
            .unwrap();

        assert_eq!(
            engine.unveil(&secret, Some("pw")).unwrap().extracted_text,
            "x###END"
        );
    }

    #[test]
    fn should_reject_wide_characters_unless_encrypted() {
        let engine = lsb();
        let carrier = rgb_carrier(100, 100);

        assert!(matches!(
            engine.hide(&carrier, "1 €", None),
            Err(StegoError::UnsupportedCharacter { character: '€', position: 2 })
        ));

        let secret = engine.hide(&carrier, "1 €", Some("pw")).unwrap();
        assert_eq!(engine.unveil(&secret, Some("pw")).unwrap().extracted_text, "1 €");
    }

    #[test]
    fn should_use_the_configured_delimiter() {
        let engine = StegoEngine::new(EmbeddingParameters::lsb().with_delimiter("<eof>")).unwrap();
        let secret = engine.hide(&rgb_carrier(20, 20), "###END### is fine", None).unwrap();

        assert_eq!(engine.unveil(&secret, None).unwrap().extracted_text, "###END### is fine");
    }

    #[test]
    fn should_report_encrypted_payloads() {
        let engine = lsb();
        let secret = engine.hide(&rgb_carrier(100, 100), "hi there", Some("p1")).unwrap();

        let report = engine.unveil(&secret, Some("p1")).unwrap();
        assert!(report.is_encrypted);
        assert_eq!(report.extracted_text, "hi there");

        assert!(matches!(
            engine.unveil(&secret, None),
            Err(StegoError::MissingCredential)
        ));
        assert!(engine
            .unveil_payload(&secret)
            .unwrap()
            .starts_with(payload::ENCRYPTION_TAG));
    }

    #[test]
    fn should_check_capacity_on_the_converted_carrier() {
        let engine = lsb();
        let gray = gray_carrier(8, 8);

        // 64 bits as gray, 192 bits once converted to RGB
        assert_eq!(engine.capacity(&gray).max_bits, 64);
        let secret = engine.hide(&gray, "hi there", None).unwrap();
        assert_eq!(engine.unveil(&secret, None).unwrap().extracted_text, "hi there");
    }

    #[test]
    fn should_detect_hidden_text_with_preview() {
        let engine = lsb();
        let text = "z".repeat(60);
        let secret = engine.hide(&rgb_carrier(60, 60), &text, None).unwrap();

        let detection = engine.detect(&secret);
        assert!(detection.has_hidden_text);
        assert_eq!(detection.text_length, Some(60));
        assert_eq!(detection.preview, Some(format!("{}...", "z".repeat(50))));
        assert_eq!(detection.message, None);
    }

    #[test]
    fn should_detect_nothing_in_a_plain_image() {
        let detection = lsb().detect(&rgb_carrier(60, 60));

        assert!(!detection.has_hidden_text);
        assert_eq!(detection.method, Method::Lsb);
        assert_eq!(detection.preview, None);
        let json = serde_json::to_value(&detection).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "has_hidden_text": false,
                "method": "lsb",
                "message": "No hidden text detected"
            })
        );
    }

    #[test]
    fn should_fall_back_to_printable_characters_in_best_effort_mode() {
        let engine = dct();
        let secret = engine.hide(&gray_carrier(160, 64), "hello", None).unwrap();
        assert_eq!(engine.unveil_best_effort(&secret).unwrap(), "hello");

        // the bits of "hello world" without any delimiter
        let bits = bit_codec::encode("hello world").unwrap();
        let codec = ImageCodec::from(&engine.parameters().codec);
        let only_text = codec.embed(gray_carrier(64, 88), &bits).unwrap();

        assert!(matches!(
            engine.unveil(&only_text, None),
            Err(StegoError::CorruptedPayload)
        ));
        assert_eq!(engine.unveil_best_effort(&only_text).unwrap(), "hello world");
    }

    #[test]
    fn should_fail_best_effort_without_anything_printable() {
        let engine = lsb();
        // all LSBs zero → only NUL characters
        let black = DynamicImage::ImageRgb8(image::RgbImage::new(8, 8));

        assert!(matches!(
            engine.unveil_best_effort(&black),
            Err(StegoError::CorruptedPayload)
        ));
    }
}
