mod carrier;
mod password;

pub use carrier::*;
pub use password::*;

use stegotext_seasmoke::Cipher;

use crate::{EmbeddingParameters, Result, StegoEngine};

pub(crate) fn build_engine(options: &EmbeddingParameters, cipher: Option<Cipher>) -> Result<StegoEngine> {
    let engine = StegoEngine::new(options.clone())?;

    Ok(match cipher {
        Some(cipher) => engine.with_cipher(cipher),
        None => engine,
    })
}
