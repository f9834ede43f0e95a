use clap::{Args, Parser, Subcommand};
use log::warn;
use stegotext_core::{
    CodecOptions, DctCodecOptions, EmbeddingParameters, Method, DEFAULT_DCT_STRENGTH,
    DEFAULT_DELIMITER,
};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Experimental: marker that terminates the hidden text
    #[arg(long = "x-delimiter", default_value = DEFAULT_DELIMITER, global = true)]
    pub delimiter: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    UnveilRaw(unveil_raw::UnveilRawArgs),
    Capacity(capacity::CapacityArgs),
    Detect(detect::DetectArgs),
}

/// Method selection shared by all commands
#[derive(Args, Debug)]
pub struct CodecArgs {
    /// Steganography method: lsb (spatial) or dct (transform)
    #[arg(long, value_name = "method", default_value = "lsb")]
    pub method: Method,

    /// DCT quantization strength, higher survives more but is more visible
    #[arg(long, value_name = "strength")]
    pub strength: Option<f64>,
}

impl CodecArgs {
    pub fn options(&self, delimiter: &str) -> EmbeddingParameters {
        let codec = match self.method {
            Method::Lsb => {
                if self.strength.is_some() {
                    warn!("--strength has no effect on the lsb method");
                }
                CodecOptions::Lsb
            }
            Method::Dct => CodecOptions::Dct(
                DctCodecOptions::default()
                    .with_strength(self.strength.unwrap_or(DEFAULT_DCT_STRENGTH)),
            ),
        };

        EmbeddingParameters::new(codec).with_delimiter(delimiter)
    }
}

#[derive(Args, Debug)]
pub struct PasswordArgs {
    /// Password used to encrypt the text
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Prompt for the password instead of passing it on the command line
    #[arg(long, conflicts_with = "password")]
    pub ask_password: bool,
}

impl PasswordArgs {
    pub fn resolve(self, confirm: bool) -> Option<String> {
        if self.ask_password {
            ask_for_password(confirm)
        } else {
            self.password
        }
    }
}

/// an empty answer means no password
pub fn ask_for_password(confirm: bool) -> Option<String> {
    let mut prompt = dialoguer::Password::new()
        .with_prompt("Password")
        .allow_empty_password(true);
    if confirm {
        prompt = prompt.with_confirmation("Repeat password", "Error: the passwords don't match.");
    }

    match prompt.interact() {
        Ok(password) if !password.is_empty() => Some(password),
        Ok(_) => None,
        Err(e) => {
            warn!("Cannot read the password: {e}");
            None
        }
    }
}
