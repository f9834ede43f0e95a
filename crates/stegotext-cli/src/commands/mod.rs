pub mod capacity;
pub mod detect;
pub mod hide;
pub mod unveil;
pub mod unveil_raw;

use serde::Serialize;

use crate::CliResult;

fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
