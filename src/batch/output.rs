use crate::error::Result;
use log::info;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// How a rendered row is written to its output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Add to the end of an existing file, so rows sharing a name accumulate.
    #[default]
    Append,
    /// Replace the file's contents.
    Overwrite,
}

/// Make sure `dir` exists, emptying it first when `clean` is set.
pub fn prepare_dir(dir: &Path, clean: bool) -> Result<()> {
    if clean && dir.exists() {
        info!("Clean: removing {}", dir.display());
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

pub fn write(path: &Path, text: &str, mode: WriteMode) -> Result<()> {
    let mut file = match mode {
        WriteMode::Append => OpenOptions::new().create(true).append(true).open(path)?,
        WriteMode::Overwrite => OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?,
    };
    file.write_all(text.as_bytes())?;
    Ok(())
}
