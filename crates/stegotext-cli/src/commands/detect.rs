use std::path::PathBuf;

use clap::Args;

use crate::cli::CodecArgs;
use crate::CliResult;

/// Checks an image for hidden text with the given method
#[derive(Args, Debug)]
pub struct DetectArgs {
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,

    #[command(flatten)]
    pub codec: CodecArgs,
}

impl DetectArgs {
    pub fn run(self, delimiter: &str) -> CliResult<()> {
        let detection = stegotext_core::api::detect::prepare()
            .with_options(self.codec.options(delimiter))
            .with_image(&self.media)
            .execute()?;

        super::print_json(&detection)
    }
}
