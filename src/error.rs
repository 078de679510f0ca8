use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SashikomiError {
    #[error("Missing Variable: `{key}` is not bound (in {})", .file.display())]
    MissingVariable { key: String, file: PathBuf },
    #[error("Template Not Found: {}: {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Cyclic Include: {}", format_chain(.chain))]
    CyclicInclude { chain: Vec<PathBuf> },
    #[error("Missing Output Name: column `{column}` is empty or absent in row {row}")]
    MissingOutputName { column: String, row: usize },
    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO Error: {0}")]
    Io(#[from] io::Error),
}

// Aliases for compatibility
pub type Error = SashikomiError;
pub type Result<T> = std::result::Result<T, Error>;

fn format_chain(chain: &[PathBuf]) -> String {
    chain
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
