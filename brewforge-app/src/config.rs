use anyhow::{bail, Context, Result};
use brewforge_schemas::file_formats::{BrewSheet, BrewSheetFile};
use std::{fs, path::Path};

const SUPPORTED_SCHEMA_VERSION: &str = "1.0";

/// Loads and validates a brew sheet YAML file.
pub fn load_brew_sheet(path: &Path) -> Result<BrewSheet> {
    println!("Loading brew sheet from '{}'...", path.display());

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read brew sheet {:?}", path))?;
    let file: BrewSheetFile = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse YAML from {:?}", path))?;

    if file.schema_version != SUPPORTED_SCHEMA_VERSION {
        bail!(
            "Unsupported brew sheet schema version '{}' (expected '{}')",
            file.schema_version,
            SUPPORTED_SCHEMA_VERSION
        );
    }

    println!("Brew sheet loaded successfully.");
    Ok(file.brew_sheet)
}
