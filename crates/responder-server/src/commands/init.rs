use anyhow::{Context, Result};
use responder_store::FileStorage;
use std::path::Path;

pub fn run(storage_file: &Path) -> Result<()> {
    let storage = FileStorage::initialize(storage_file)
        .context("failed to initialize question document")?;
    println!(
        "Initialized empty question document at {}",
        storage.path().display()
    );
    Ok(())
}
