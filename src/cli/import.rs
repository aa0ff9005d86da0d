//! CLI command handler for CSV import

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::config::Settings;
use crate::error::{TallyError, TallyResult};
use crate::services::ImportService;
use crate::storage::TransactionStore;

/// Handle the import command
pub fn handle_import_command<S: TransactionStore>(
    store: &S,
    settings: &Settings,
    file: &Path,
) -> TallyResult<()> {
    if !file.exists() {
        return Err(TallyError::Import(format!(
            "File not found: {}",
            file.display()
        )));
    }

    let reader = File::open(file)
        .map_err(|e| TallyError::Import(format!("Failed to read file: {}", e)))?;
    let result = ImportService::new(store, settings).import(BufReader::new(reader))?;

    println!("Import complete.");
    println!("  Imported: {}", result.imported);
    println!("  Skipped:  {}", result.skipped);

    if !result.messages.is_empty() {
        println!();
        println!("Skipped rows:");
        for message in &result.messages {
            println!("  {}", message);
        }
    }

    Ok(())
}
