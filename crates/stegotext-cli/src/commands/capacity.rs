use std::path::PathBuf;

use clap::Args;

use crate::cli::CodecArgs;
use crate::CliResult;

/// Prints how much text fits into an image
#[derive(Args, Debug)]
pub struct CapacityArgs {
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,

    #[command(flatten)]
    pub codec: CodecArgs,
}

impl CapacityArgs {
    pub fn run(self, delimiter: &str) -> CliResult<()> {
        let report = stegotext_core::api::capacity::prepare()
            .with_options(self.codec.options(delimiter))
            .with_image(&self.media)
            .execute()?;

        super::print_json(&report)
    }
}
