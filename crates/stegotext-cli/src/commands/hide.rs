use std::path::PathBuf;

use clap::Args;
use log::info;

use crate::cli::{CodecArgs, PasswordArgs};
use crate::CliResult;

/// Hides a text in an image, the result is always a PNG
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Carrier image such as PNG or JPEG, used readonly.
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// The text that will be hidden
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,

    #[command(flatten)]
    pub password: PasswordArgs,

    #[command(flatten)]
    pub codec: CodecArgs,
}

impl HideArgs {
    pub fn run(self, delimiter: &str) -> CliResult<()> {
        let options = self.codec.options(delimiter);
        let password = self.password.resolve(true);

        stegotext_core::api::hide::prepare()
            .with_options(options)
            .with_message(&self.message)
            .with_image(&self.media)
            .with_output(&self.write_to_file)
            .use_password(password)
            .execute()?;
        info!("Text hidden in {:?}", self.write_to_file);

        Ok(())
    }
}
