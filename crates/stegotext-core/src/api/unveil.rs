use std::path::Path;

use stegotext_seasmoke::Cipher;

use crate::{EmbeddingParameters, StegoError, UnveilReport};

use super::{build_engine, CarrierSource, Password};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<CarrierSource>,
    password: Password,
    options: EmbeddingParameters,
    cipher: Option<Cipher>,
}

impl UnveilApi {
    /// Use the given method, strength and delimiter, they must match the ones used for hiding
    pub fn with_options(mut self, options: EmbeddingParameters) -> Self {
        self.options = options;
        self
    }

    /// Use other key derivation costs than the default ones
    pub fn with_cipher(mut self, cipher: Cipher) -> Self {
        self.cipher = Some(cipher);
        self
    }

    /// This is the secret image that contains the text to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(CarrierSource::File(secret_image.as_ref().to_path_buf()));
        self
    }

    /// The secret image as encoded image data
    pub fn from_secret_bytes(mut self, secret_image: Vec<u8>) -> Self {
        self.secret_media = Some(CarrierSource::Bytes(secret_image));
        self
    }

    /// Set the password used for decrypting the text
    /// If `None` is passed, no password will be used, an encrypted text then fails to unveil
    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<UnveilReport, StegoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(StegoError::CarrierNotSet);
        };

        let engine = build_engine(&self.options, self.cipher)?;
        let media = secret_media.load()?;

        engine.unveil(media.image(), self.password.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{cheap_cipher, prepare_gradient_rgb, prepare_textured_gray};
    use crate::Method;
    use tempfile::tempdir;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = temp_dir.path().join("carrier.png");
        let secret = temp_dir.path().join("hello_world.png");
        prepare_gradient_rgb(64, 64).save(&carrier).unwrap();

        crate::api::hide::prepare()
            .with_message("Hello World")
            .with_image(&carrier)
            .with_password("Secret42")
            .with_cipher(cheap_cipher())
            .with_output(&secret)
            .execute()
            .expect("Failed to hide message in image");

        let report = crate::api::unveil::prepare()
            .from_secret_file(&secret)
            .using_password("Secret42")
            .with_cipher(cheap_cipher())
            .execute()
            .expect("Failed to unveil message from image");

        assert_eq!(report.extracted_text, "Hello World");
        assert!(report.is_encrypted);
        assert_eq!(report.method, Method::Lsb);
    }

    #[test]
    fn should_unveil_dct_secrets_from_bytes() {
        let temp_dir = tempdir().unwrap();
        let carrier = temp_dir.path().join("gray.png");
        prepare_textured_gray(128, 64).save(&carrier).unwrap();

        let secret = crate::api::hide::prepare()
            .with_options(EmbeddingParameters::dct(10.0))
            .with_message("dct")
            .with_image(&carrier)
            .execute_to_bytes()
            .unwrap();

        let report = prepare()
            .with_options(EmbeddingParameters::dct(10.0))
            .from_secret_bytes(secret)
            .execute()
            .unwrap();

        assert_eq!(report.extracted_text, "dct");
        assert_eq!(report.text_length, 3);
        assert!(!report.is_encrypted);
    }

    #[test]
    fn should_require_a_secret_image() {
        assert!(matches!(prepare().execute(), Err(StegoError::CarrierNotSet)));
    }
}
