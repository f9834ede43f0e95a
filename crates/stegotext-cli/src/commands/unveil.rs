use std::path::PathBuf;

use clap::Args;

use crate::cli::{CodecArgs, PasswordArgs};
use crate::CliResult;

/// Unveils a text and prints it as JSON report
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains the secret text
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,

    #[command(flatten)]
    pub password: PasswordArgs,

    #[command(flatten)]
    pub codec: CodecArgs,
}

impl UnveilArgs {
    pub fn run(self, delimiter: &str) -> CliResult<()> {
        let report = stegotext_core::api::unveil::prepare()
            .with_options(self.codec.options(delimiter))
            .from_secret_file(&self.media)
            .using_password(self.password.resolve(false))
            .execute()?;

        super::print_json(&report)
    }
}
