//! Init command - write a default configuration file.

use std::path::Path;

use foiltune::config::ConfigFile;

use crate::error::CliError;
use crate::output::Output;

/// Run the init command. An existing file is left as it is.
pub fn run(path: &Path, out: &dyn Output) -> Result<(), CliError> {
    if path.exists() {
        out.println(&format!("Configuration file already exists: {}", path.display()));
        return Ok(());
    }

    ConfigFile::default().save_to(path)?;

    out.println(&format!("Configuration file: {}", path.display()));
    out.newline();
    out.println("Edit [rider] and [gear] to match your usual setup.");
    out.println("Command-line flags and --query override config file values.");
    Ok(())
}
