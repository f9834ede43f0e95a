use std::fmt::{self, Debug, Formatter};
use std::path::PathBuf;

use crate::{Media, Result};

/// where an image comes from
#[derive(Clone, PartialEq, Eq)]
pub enum CarrierSource {
    File(PathBuf),
    Bytes(Vec<u8>),
}

impl CarrierSource {
    pub fn load(&self) -> Result<Media> {
        match self {
            CarrierSource::File(path) => Media::from_file(path),
            CarrierSource::Bytes(bytes) => Media::from_bytes(bytes),
        }
    }
}

impl Debug for CarrierSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CarrierSource::File(path) => write!(f, "File({path:?})"),
            CarrierSource::Bytes(bytes) => write!(f, "Bytes({} bytes)", bytes.len()),
        }
    }
}
