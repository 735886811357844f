//! Query command - print the shareable query string for a setup.

use foiltune::config::ConfigFile;
use foiltune::query::input_to_query;

use super::common::{resolve_input, SetupArgs};
use crate::error::CliError;
use crate::output::Output;

/// Run the query command.
pub fn run(args: &SetupArgs, config: &ConfigFile, out: &dyn Output) -> Result<(), CliError> {
    let input = resolve_input(args, config)?;
    out.println(&format!("?{}", input_to_query(&input)));
    Ok(())
}
