use std::path::PathBuf;

use clap::Args;

use crate::cli::CodecArgs;
use crate::CliResult;

/// Best-effort unveil: prints whatever readable text is found, never decrypts
#[derive(Args, Debug)]
pub struct UnveilRawArgs {
    /// Source image that contains the secret text
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,

    /// The text is additionally stored in that file
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,

    #[command(flatten)]
    pub codec: CodecArgs,
}

impl UnveilRawArgs {
    pub fn run(self, delimiter: &str) -> CliResult<()> {
        let mut api = stegotext_core::api::unveil_raw::prepare()
            .with_options(self.codec.options(delimiter))
            .from_secret_file(&self.media);
        if let Some(output_file) = &self.output_file {
            api = api.into_raw_file(output_file);
        }

        println!("{}", api.execute()?);
        Ok(())
    }
}
